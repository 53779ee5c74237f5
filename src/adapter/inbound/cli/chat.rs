//! Handlers for `chat` and `feedback`.

use serde_json::json;

use super::command::{ChatArgs, FeedbackArgs};
use super::output;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_marketplace;
use crate::infrastructure::config::settings::Config;

/// Execute `chat`.
pub async fn execute_chat(args: &ChatArgs, config: &Config) -> Result<()> {
    let message = args.message.join(" ");
    let marketplace = build_marketplace(config)?;
    let reply = marketplace.chat.reply(&message).await;
    output::result("reply", &reply, format!("  {}", reply.text));
    Ok(())
}

/// Execute `feedback`.
pub async fn execute_feedback(args: &FeedbackArgs, config: &Config) -> Result<()> {
    let marketplace = build_marketplace(config)?;
    let id = marketplace
        .chat
        .record_feedback(&args.chat_id, !args.unhelpful, args.comment.as_deref())
        .await?;
    output::result(
        "feedback",
        &json!({ "id": id, "chat_id": args.chat_id, "helpful": !args.unhelpful }),
        format!("  Thanks for the feedback ({id})"),
    );
    Ok(())
}
