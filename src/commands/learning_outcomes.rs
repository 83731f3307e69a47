use super::{confirm_delete, parse_payload, report, Outcome};
use crate::Result;
use clap::Subcommand;
use po_api::PoApiClient;

#[derive(Subcommand, Debug)]
pub enum LearningOutcomeCommands {
    /// List learning outcomes
    List,
    /// Show a learning outcome
    Get {
        /// Learning outcome ID
        id: String,
    },
    /// Create a learning outcome
    Create {
        /// JSON payload, or @file
        #[arg(long)]
        data: String,
    },
    /// Partially update a learning outcome
    Update {
        /// Learning outcome ID
        id: String,
        /// JSON payload with the fields to change, or @file
        #[arg(long)]
        data: String,
    },
    /// Delete a learning outcome
    Delete {
        /// Learning outcome ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// List the PO mappings of a learning outcome
    Mappings {
        /// Learning outcome ID
        id: String,
    },
    /// Map a learning outcome to a program outcome
    Map {
        /// Learning outcome ID
        id: String,
        /// JSON payload, e.g. {"program_outcome": 2, "contribution_weight": 0.5}
        #[arg(long)]
        data: String,
    },
}

pub async fn handle(action: LearningOutcomeCommands, client: &PoApiClient) -> Result<Outcome> {
    let response = match action {
        LearningOutcomeCommands::List => client.get_learning_outcomes().await?,
        LearningOutcomeCommands::Get { id } => client.get_learning_outcome(&id).await?,
        LearningOutcomeCommands::Create { data } => {
            client.create_learning_outcome(&parse_payload(&data)?).await?
        }
        LearningOutcomeCommands::Update { id, data } => {
            client
                .update_learning_outcome(&id, &parse_payload(&data)?)
                .await?
        }
        LearningOutcomeCommands::Delete { id, yes } => {
            if !confirm_delete("learning outcome", &id, yes)? {
                return Ok(Outcome::Cancelled);
            }
            client.delete_learning_outcome(&id).await?
        }
        LearningOutcomeCommands::Mappings { id } => client.get_lo_mappings(&id).await?,
        LearningOutcomeCommands::Map { id, data } => {
            client.create_lo_mapping(&id, &parse_payload(&data)?).await?
        }
    };

    report(&response)
}
