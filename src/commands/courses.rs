use super::{confirm_delete, parse_payload, report, Outcome};
use crate::Result;
use clap::Subcommand;
use po_api::PoApiClient;

#[derive(Subcommand, Debug)]
pub enum CourseCommands {
    /// List courses
    List,
    /// Show a course
    Get {
        /// Course ID
        id: String,
    },
    /// Show a course with its learning outcomes and assessments
    Detail {
        /// Course ID
        id: String,
    },
    /// List the learning outcomes of a course
    Outcomes {
        /// Course ID
        id: String,
    },
    /// Create a course
    Create {
        /// JSON payload, or @file
        #[arg(long)]
        data: String,
    },
    /// Delete a course
    Delete {
        /// Course ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn handle(action: CourseCommands, client: &PoApiClient) -> Result<Outcome> {
    let response = match action {
        CourseCommands::List => client.get_courses().await?,
        CourseCommands::Get { id } => client.get_course(&id).await?,
        CourseCommands::Detail { id } => client.get_course_detail(&id).await?,
        CourseCommands::Outcomes { id } => client.get_course_learning_outcomes(&id).await?,
        CourseCommands::Create { data } => client.create_course(&parse_payload(&data)?).await?,
        CourseCommands::Delete { id, yes } => {
            if !confirm_delete("course", &id, yes)? {
                return Ok(Outcome::Cancelled);
            }
            client.delete_course(&id).await?
        }
    };

    report(&response)
}
