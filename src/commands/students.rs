use super::{parse_payload, report, Outcome};
use crate::display::display_po_scores;
use crate::Result;
use clap::Subcommand;
use po_api::PoApiClient;
use po_core::StudentPoScores;

#[derive(Subcommand, Debug)]
pub enum StudentCommands {
    /// List students
    List,
    /// Show a student
    Get {
        /// Student ID
        id: String,
    },
    /// Create a student (and its user account)
    Create {
        /// JSON payload, e.g. {"username": "ayse", "student_number": "2021001"}
        #[arg(long)]
        data: String,
    },
    /// Show program outcome scores of a student
    PoScores {
        /// Student ID
        id: String,
        /// Print the raw JSON instead of a table
        #[arg(long)]
        raw: bool,
    },
    /// List grades of a student
    Grades {
        /// Student ID
        id: String,
    },
}

pub async fn handle(action: StudentCommands, client: &PoApiClient) -> Result<Outcome> {
    let response = match action {
        StudentCommands::List => client.get_students().await?,
        StudentCommands::Get { id } => client.get_student(&id).await?,
        StudentCommands::Create { data } => client.create_student(&parse_payload(&data)?).await?,
        StudentCommands::PoScores { id, raw } => {
            let response = client.get_student_po_scores(&id).await?;
            if raw || !response.is_success() {
                return report(&response);
            }
            match response.json::<StudentPoScores>() {
                Ok(scores) => {
                    display_po_scores(&scores);
                    return Ok(Outcome::Completed);
                }
                // Unexpected shape: show what the server sent
                Err(_) => response,
            }
        }
        StudentCommands::Grades { id } => client.get_student_grades(&id).await?,
    };

    report(&response)
}
