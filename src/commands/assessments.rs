use super::{parse_payload, report, Outcome};
use crate::Result;
use clap::Subcommand;
use po_api::PoApiClient;

#[derive(Subcommand, Debug)]
pub enum AssessmentCommands {
    /// List assessments
    List,
    /// Create an assessment
    Create {
        /// JSON payload, or @file
        #[arg(long)]
        data: String,
    },
}

pub async fn handle(action: AssessmentCommands, client: &PoApiClient) -> Result<Outcome> {
    let response = match action {
        AssessmentCommands::List => client.get_assessments().await?,
        AssessmentCommands::Create { data } => {
            client.create_assessment(&parse_payload(&data)?).await?
        }
    };

    report(&response)
}
