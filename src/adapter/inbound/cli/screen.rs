//! Handlers for `screen` and `buy`.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::json;

use super::command::{BuyArgs, ScreenArgs};
use super::output;
use crate::application::fraud::{check_transaction, Screening};
use crate::domain::{ReviewDecision, Transaction, UserId};
use crate::error::Result;
use crate::infrastructure::bootstrap::build_marketplace;
use crate::infrastructure::config::settings::Config;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn report(screening: &Screening) {
    output::section("Fraud Screen");
    output::field("Score", format!("{:.2}", screening.result.score));
    let decision = match screening.decision {
        ReviewDecision::Approved => output::positive("approved"),
        ReviewDecision::NeedsReview => output::caution("needs review"),
        ReviewDecision::Blocked => output::negative("blocked"),
    };
    output::field("Decision", decision);
    for reason in screening.result.reasons() {
        output::note(&format!("- {reason}"));
    }
    if screening.degraded {
        output::warning("Purchase history unavailable; scored without it");
    }
}

/// Execute `screen`.
pub fn execute_screen(args: &ScreenArgs) -> Result<()> {
    let tx: Transaction = read_json(&args.transaction)?;
    let history: Vec<Transaction> = match &args.history {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };

    let screening = check_transaction(&tx, &history);
    report(&screening);
    output::result("screening", &screening, format!("  {}", screening.message()));
    Ok(())
}

/// Execute `buy`.
pub async fn execute_buy(args: &BuyArgs, config: &Config) -> Result<()> {
    let tx: Transaction = read_json(&args.transaction)?;
    let marketplace = build_marketplace(config)?;
    let recorded = marketplace
        .transactions
        .record(&tx, &UserId::from(args.seller.as_str()))
        .await?;

    report(&recorded.screening);
    output::result(
        "recorded",
        &json!({
            "id": recorded.id,
            "status": recorded.status,
            "message": recorded.screening.message(),
        }),
        format!(
            "  Recorded {} ({})",
            output::highlight(&recorded.id),
            recorded.status.as_str()
        ),
    );
    Ok(())
}
