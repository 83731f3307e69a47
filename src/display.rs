use crate::{PomError, Result};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm};
use po_api::ApiResponse;
use po_core::StudentPoScores;

/// Table formatting utilities
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    max_widths: Vec<usize>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        let max_widths = headers.iter().map(|h| h.chars().count()).collect();
        Self {
            headers,
            rows: Vec::new(),
            max_widths,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (i, cell) in row.iter().enumerate() {
            if i < self.max_widths.len() {
                self.max_widths[i] = self.max_widths[i].max(cell.chars().count());
            }
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.separator('┌', '┬', '┐'));
        out.push_str(&self.line(&self.headers));
        out.push_str(&self.separator('├', '┼', '┤'));
        for row in &self.rows {
            out.push_str(&self.line(row));
        }
        out.push_str(&self.separator('└', '┴', '┘'));
        out
    }

    pub fn print(&self) {
        print!("{}", self.render());
    }

    fn separator(&self, left: char, mid: char, right: char) -> String {
        let cells: Vec<String> = self
            .max_widths
            .iter()
            .map(|&width| "─".repeat(width + 2))
            .collect();
        format!("{}{}{}\n", left, cells.join(&mid.to_string()), right)
    }

    fn line(&self, row: &[String]) -> String {
        let mut out = String::from("│");
        for (i, width) in self.max_widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            out.push_str(&format!(" {:<width$} │", cell, width = width));
        }
        out.push('\n');
        out
    }
}

/// Program outcome scores of one student as a table
pub fn display_po_scores(scores: &StudentPoScores) {
    println!("Student {}", scores.student.bold());

    let mut table = Table::new(vec![
        "PO".to_string(),
        "Score".to_string(),
        "Description".to_string(),
    ]);
    for po in &scores.po_scores {
        table.add_row(vec![
            po.po_code.clone(),
            format!("{:.2}", po.score),
            po.po_description.clone(),
        ]);
    }
    table.print();
}

/// Pretty-print JSON bodies, pass anything else through verbatim
pub fn format_body(body: &str) -> Result<String> {
    if body.trim().is_empty() {
        return Ok(String::new());
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => Ok(serde_json::to_string_pretty(&value)?),
        Err(_) => Ok(body.to_string()),
    }
}

/// Print the status line and body of a raw response
pub fn print_response(response: &ApiResponse) -> Result<()> {
    let status = format!("HTTP {}", response.status);
    if response.is_success() {
        println!("{}", status.green().bold());
    } else {
        println!("{}", status.red().bold());
    }

    let body = format_body(&response.body)?;
    if body.is_empty() {
        println!("{}", "(empty body)".dimmed());
    } else {
        println!("{}", body);
    }
    Ok(())
}

/// Interactive prompts
pub fn prompt_confirm(message: &str, default: bool) -> Result<bool> {
    let result = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .default(default)
        .interact()
        .map_err(|e| PomError::InvalidInput(format!("Input error: {}", e)))?;

    Ok(result)
}

/// Status messages
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
