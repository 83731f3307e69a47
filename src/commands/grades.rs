use super::{parse_payload, report, Outcome};
use crate::Result;
use clap::Subcommand;
use po_api::PoApiClient;

#[derive(Subcommand, Debug)]
pub enum GradeCommands {
    /// List grades
    List,
    /// Record a grade
    Create {
        /// JSON payload, e.g. {"assessment": 1, "student": 2, "points": 85}
        #[arg(long)]
        data: String,
    },
}

pub async fn handle(action: GradeCommands, client: &PoApiClient) -> Result<Outcome> {
    let response = match action {
        GradeCommands::List => client.get_grades().await?,
        GradeCommands::Create { data } => client.create_grade(&parse_payload(&data)?).await?,
    };

    report(&response)
}
