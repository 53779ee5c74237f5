//! Handler for `recommend`.

use serde::Serialize;

use super::command::RecommendArgs;
use super::listing::table;
use super::output;
use crate::domain::{BookListing, ListingId};
use crate::error::{BackendError, Result};
use crate::infrastructure::bootstrap::build_marketplace;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::store::collections;

#[derive(Serialize)]
struct Recommendations<'a> {
    similar_to: Option<&'a str>,
    listings: &'a [BookListing],
}

/// Execute `recommend`.
pub async fn execute(args: &RecommendArgs, config: &Config) -> Result<()> {
    let marketplace = build_marketplace(config)?;

    let listings = match &args.similar_to {
        Some(id) => {
            let anchor = marketplace
                .listings
                .get(&ListingId::from(id.as_str()))
                .await?
                .ok_or_else(|| BackendError::NotFound {
                    collection: collections::BOOKS.to_string(),
                    id: id.clone(),
                })?;
            let limit = args.limit.unwrap_or(config.recommendation.similar_limit);
            marketplace.recommendations.similar(&anchor, limit).await
        }
        None => {
            let limit = args
                .limit
                .unwrap_or(config.recommendation.personalized_limit);
            marketplace.recommendations.personalized(limit).await
        }
    };

    if listings.is_empty() && marketplace.store.is_empty() {
        output::warning("The store is empty; set [store] seed_path in the configuration");
    }

    output::section(match &args.similar_to {
        Some(_) => "Similar Books",
        None => "Recommended For You",
    });
    output::result(
        "recommendations",
        &Recommendations {
            similar_to: args.similar_to.as_deref(),
            listings: &listings,
        },
        table(&listings),
    );
    Ok(())
}
