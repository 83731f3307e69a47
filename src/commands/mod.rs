pub mod assessments;
pub mod chat;
pub mod config;
pub mod courses;
pub mod grades;
pub mod learning_outcomes;
pub mod mappings;
pub mod program_outcomes;
pub mod students;

use crate::display::{print_response, print_warning, prompt_confirm};
use crate::{PomError, Result};
use po_api::ApiResponse;
use serde_json::Value;

/// How a command ended, mapped to the process exit code by `main`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The server answered 2xx (or a local command finished)
    Completed,
    /// The server answered, but not with 2xx
    Rejected,
    /// The user declined a confirmation prompt
    Cancelled,
}

impl Outcome {
    pub fn from_response(response: &ApiResponse) -> Self {
        if response.is_success() {
            Outcome::Completed
        } else {
            Outcome::Rejected
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Completed | Outcome::Cancelled => 0,
            Outcome::Rejected => 2,
        }
    }
}

/// Print a raw response and classify it
pub(crate) fn report(response: &ApiResponse) -> Result<Outcome> {
    print_response(response)?;
    Ok(Outcome::from_response(response))
}

/// Parse a `--data` argument: inline JSON, or `@path` to read JSON from a file
pub fn parse_payload(data: &str) -> Result<Value> {
    let raw = match data.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)?,
        None => data.to_string(),
    };

    serde_json::from_str(&raw)
        .map_err(|e| PomError::InvalidInput(format!("--data is not valid JSON: {}", e)))
}

/// Ask before deleting unless `--yes` was given
pub(crate) fn confirm_delete(kind: &str, id: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    let confirmed = prompt_confirm(&format!("Delete {} {}?", kind, id), false)?;
    if !confirmed {
        print_warning("Operation cancelled.");
    }
    Ok(confirmed)
}
