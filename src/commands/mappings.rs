//! LO -> PO and assessment -> LO mapping commands.

use super::{confirm_delete, parse_payload, report, Outcome};
use crate::Result;
use clap::Subcommand;
use po_api::PoApiClient;

#[derive(Subcommand, Debug)]
pub enum MappingCommands {
    /// List mappings
    List,
    /// Create a mapping
    Create {
        /// JSON payload, or @file
        #[arg(long)]
        data: String,
    },
    /// Partially update a mapping
    Update {
        /// Mapping ID
        id: String,
        /// JSON payload with the fields to change, or @file
        #[arg(long)]
        data: String,
    },
    /// Delete a mapping
    Delete {
        /// Mapping ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// `pom mappings ...`: learning outcome to program outcome weights
pub async fn handle_lo_to_po(action: MappingCommands, client: &PoApiClient) -> Result<Outcome> {
    let response = match action {
        MappingCommands::List => client.get_mappings().await?,
        MappingCommands::Create { data } => client.create_mapping(&parse_payload(&data)?).await?,
        MappingCommands::Update { id, data } => {
            client.update_mapping(&id, &parse_payload(&data)?).await?
        }
        MappingCommands::Delete { id, yes } => {
            if !confirm_delete("LO to PO mapping", &id, yes)? {
                return Ok(Outcome::Cancelled);
            }
            client.delete_mapping(&id).await?
        }
    };

    report(&response)
}

/// `pom assessment-mappings ...`: assessment to learning outcome weights
pub async fn handle_assessment_to_lo(
    action: MappingCommands,
    client: &PoApiClient,
) -> Result<Outcome> {
    let response = match action {
        MappingCommands::List => client.get_assessment_to_lo_mappings().await?,
        MappingCommands::Create { data } => {
            client
                .create_assessment_to_lo_mapping(&parse_payload(&data)?)
                .await?
        }
        MappingCommands::Update { id, data } => {
            client
                .update_assessment_to_lo_mapping(&id, &parse_payload(&data)?)
                .await?
        }
        MappingCommands::Delete { id, yes } => {
            if !confirm_delete("assessment to LO mapping", &id, yes)? {
                return Ok(Outcome::Cancelled);
            }
            client.delete_assessment_to_lo_mapping(&id).await?
        }
    };

    report(&response)
}
