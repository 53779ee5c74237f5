//! Handlers for `list` and `browse`.

use serde::Serialize;
use tabled::{Table, Tabled};

use super::command::{BrowseArgs, ListArgs};
use super::output;
use crate::application::service::{ListingFilter, ListingPage, DEFAULT_PAGE_SIZE};
use crate::domain::{BookListing, Condition, Genre, ListingDraft, ListingId};
use crate::error::Result;
use crate::infrastructure::bootstrap::build_marketplace;
use crate::infrastructure::config::settings::Config;

/// Table row for one listing.
#[derive(Tabled)]
pub(super) struct ListingRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Genre")]
    genre: String,
    #[tabled(rename = "Condition")]
    condition: &'static str,
    #[tabled(rename = "Price")]
    price: String,
}

impl From<&BookListing> for ListingRow {
    fn from(listing: &BookListing) -> Self {
        Self {
            id: listing.id().to_string(),
            title: listing.title().to_string(),
            author: listing.author().to_string(),
            genre: listing.genre().to_string(),
            condition: listing.condition().label(),
            price: format!("₹{}", listing.price()),
        }
    }
}

pub(super) fn table(listings: &[BookListing]) -> Table {
    Table::new(listings.iter().map(ListingRow::from))
}

/// Execute `list`.
pub async fn execute_list(args: &ListArgs, config: &Config) -> Result<()> {
    let condition: Condition = args.book.condition.parse()?;
    let draft = ListingDraft::try_new(
        &args.title,
        &args.author,
        Genre::parse(&args.book.genre),
        condition,
        args.price,
    )?
    .with_publication_year(args.book.year)
    .with_description(args.description.clone());

    let marketplace = build_marketplace(config)?;
    let listing = marketplace.listings.add(draft).await?;

    output::section("Listed");
    output::field("Title", listing.title());
    output::field("Condition", listing.condition());
    output::field("Genre", listing.genre());
    output::result(
        "listing",
        &listing,
        format!("  {:<14} {}", "Id", output::highlight(listing.id())),
    );
    output::note("The in-memory store is discarded when the command exits");
    Ok(())
}

#[derive(Serialize)]
struct Catalog<'a> {
    mine: bool,
    listings: &'a [BookListing],
    next_after: Option<&'a ListingId>,
}

/// Execute `browse`.
pub async fn execute_browse(args: &BrowseArgs, config: &Config) -> Result<()> {
    let marketplace = build_marketplace(config)?;

    let page = if args.mine {
        ListingPage {
            listings: marketplace.listings.mine().await?,
            next_after: None,
        }
    } else {
        let filter = ListingFilter {
            genre: args.genre.as_deref().map(Genre::parse),
            condition: args
                .condition
                .as_deref()
                .map(str::parse::<Condition>)
                .transpose()?,
            min_price: args.min_price,
            max_price: args.max_price,
        };
        let after = args.after.as_deref().map(ListingId::from);
        let page_size = args.page_size.map_or(DEFAULT_PAGE_SIZE, usize::from);
        marketplace
            .listings
            .browse(&filter, after.as_ref(), page_size)
            .await?
    };

    output::section(if args.mine { "Your Listings" } else { "Catalog" });
    if page.listings.is_empty() {
        output::warning("No listings match");
    }
    output::result(
        "catalog",
        &Catalog {
            mine: args.mine,
            listings: &page.listings,
            next_after: page.next_after.as_ref(),
        },
        table(&page.listings),
    );
    if let Some(cursor) = &page.next_after {
        output::note(&format!("Next page: --after {cursor}"));
    }
    Ok(())
}
