use super::{report, Outcome};
use crate::Result;
use colored::Colorize;
use po_api::PoApiClient;
use po_core::ChatReply;

/// Send one message to the course assistant and print its answer
pub async fn handle(message: Vec<String>, client: &PoApiClient) -> Result<Outcome> {
    let message = message.join(" ");
    let response = client.chat_with_gemini(&message).await?;

    if !response.is_success() {
        return report(&response);
    }

    match response.json::<ChatReply>() {
        Ok(reply) => {
            println!("{} {}", "assistant:".cyan().bold(), reply.response);
            Ok(Outcome::Completed)
        }
        Err(_) => report(&response),
    }
}
