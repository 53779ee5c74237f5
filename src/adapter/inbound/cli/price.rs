//! Handlers for `price` and `price-range`.

use serde::Serialize;

use super::command::{BookArgs, PriceArgs};
use super::output;
use crate::application::pricing::{estimate_price, price_range};
use crate::domain::{Condition, Genre, PricingFactors};
use crate::error::Result;
use crate::infrastructure::bootstrap::build_marketplace;
use crate::infrastructure::config::settings::Config;

#[derive(Serialize)]
struct PriceReport<'a> {
    condition: Option<&'static str>,
    genre: &'a str,
    publish_year: Option<i32>,
    price: u32,
    market: bool,
}

/// Parse the form fields, warning about an unrecognized grade.
fn parse_book(book: &BookArgs) -> (Option<Condition>, Genre) {
    let condition = book.condition.parse::<Condition>().ok();
    if condition.is_none() {
        output::warning(&format!(
            "Unknown condition '{}'; pricing as an ungraded book",
            book.condition
        ));
    }
    (condition, Genre::parse(&book.genre))
}

/// Execute `price`.
pub async fn execute_price(args: &PriceArgs, config: &Config) -> Result<()> {
    let (condition, genre) = parse_book(&args.book);

    let price = if args.market {
        let marketplace = build_marketplace(config)?;
        marketplace
            .pricing
            .suggest(condition, &genre, args.book.year)
            .await
    } else {
        let mut factors = PricingFactors {
            condition,
            ..PricingFactors::new(Condition::Good, genre.clone())
        }
        .with_publication_year(args.book.year);
        if args.popular {
            factors = factors.with_popularity(true);
        }
        if let Some(supply) = args.supply {
            factors = factors.with_supply(supply);
        }
        if let Some(demand) = args.demand {
            factors = factors.with_demand(demand)?;
        }
        estimate_price(&factors)
    };

    output::section("Price Suggestion");
    output::field("Condition", condition.map_or("ungraded", Condition::label));
    output::field("Genre", &genre);
    if let Some(year) = args.book.year {
        output::field("Published", year);
    }
    output::result(
        "price",
        &PriceReport {
            condition: condition.map(Condition::label),
            genre: genre.label(),
            publish_year: args.book.year,
            price,
            market: args.market,
        },
        format!("  {:<14} {}", "Suggested", output::highlight(format!("₹{price}"))),
    );
    Ok(())
}

/// Execute `price-range`.
pub fn execute_range(args: &BookArgs) -> Result<()> {
    let (condition, genre) = parse_book(args);
    let range = price_range(condition, &genre, args.year);

    output::section("Price Range");
    output::field("Genre", &genre);
    output::result(
        "price_range",
        &range,
        format!(
            "  {:<14} ₹{} - ₹{} (typical ₹{})",
            "Range",
            range.min,
            range.max,
            output::highlight(range.average)
        ),
    );
    Ok(())
}
