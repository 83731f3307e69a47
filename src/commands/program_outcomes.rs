use super::{confirm_delete, parse_payload, report, Outcome};
use crate::Result;
use clap::Subcommand;
use po_api::PoApiClient;

#[derive(Subcommand, Debug)]
pub enum ProgramOutcomeCommands {
    /// List program outcomes
    List,
    /// Create a program outcome
    Create {
        /// JSON payload, or @file
        #[arg(long)]
        data: String,
    },
    /// Partially update a program outcome
    Update {
        /// Program outcome ID
        id: String,
        /// JSON payload with the fields to change, or @file
        #[arg(long)]
        data: String,
    },
    /// Delete a program outcome
    Delete {
        /// Program outcome ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn handle(action: ProgramOutcomeCommands, client: &PoApiClient) -> Result<Outcome> {
    let response = match action {
        ProgramOutcomeCommands::List => client.get_program_outcomes().await?,
        ProgramOutcomeCommands::Create { data } => {
            client.create_program_outcome(&parse_payload(&data)?).await?
        }
        ProgramOutcomeCommands::Update { id, data } => {
            client
                .update_program_outcome(&id, &parse_payload(&data)?)
                .await?
        }
        ProgramOutcomeCommands::Delete { id, yes } => {
            if !confirm_delete("program outcome", &id, yes)? {
                return Ok(Outcome::Cancelled);
            }
            client.delete_program_outcome(&id).await?
        }
    };

    report(&response)
}
