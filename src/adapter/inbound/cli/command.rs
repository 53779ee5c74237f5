//! Command-line interface definitions.
//!
//! Defines the CLI structure for the bookxchange tool using `clap`: listings,
//! pricing, fraud screening, recommendations, and the assistant, plus
//! configuration management.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use super::paths;

/// Pricing, fraud screening, and recommendations for a second-hand book marketplace
#[derive(Parser, Debug)]
#[command(name = "bookxchange")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(
        short,
        long,
        global = true,
        default_value_os_t = paths::default_config()
    )]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List a book for sale
    List(ListArgs),

    /// Browse the catalog
    Browse(BrowseArgs),

    /// Suggest a listing price
    Price(PriceArgs),

    /// Show the expected price band for similar books
    PriceRange(BookArgs),

    /// Screen a transaction for fraud
    Screen(ScreenArgs),

    /// Screen and record a purchase in the store
    Buy(BuyArgs),

    /// Recommend listings from the store
    Recommend(RecommendArgs),

    /// Ask the marketplace assistant
    Chat(ChatArgs),

    /// Rate an assistant reply
    Feedback(FeedbackArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `bookxchange config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from the template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate the configuration file.
    Validate,
}

/// Description of a book as entered on the listing form.
#[derive(Parser, Debug, Clone)]
pub struct BookArgs {
    /// Condition grade ("Like New", "Very Good", "Good", "Fair", "Acceptable")
    #[arg(long)]
    pub condition: String,

    /// Genre label (e.g. "Fiction", "Science Fiction")
    #[arg(long)]
    pub genre: String,

    /// Publication year
    #[arg(long)]
    pub year: Option<i32>,
}

/// Arguments for `bookxchange list`.
#[derive(Parser, Debug)]
pub struct ListArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub author: String,

    #[command(flatten)]
    pub book: BookArgs,

    /// Asking price in rupees
    #[arg(long)]
    pub price: Decimal,

    #[arg(long)]
    pub description: Option<String>,
}

/// Arguments for `bookxchange browse`.
#[derive(Parser, Debug)]
pub struct BrowseArgs {
    /// Only this genre
    #[arg(long)]
    pub genre: Option<String>,

    /// Only this condition grade
    #[arg(long)]
    pub condition: Option<String>,

    /// Lowest price, inclusive
    #[arg(long)]
    pub min_price: Option<Decimal>,

    /// Highest price, inclusive
    #[arg(long)]
    pub max_price: Option<Decimal>,

    /// Continue after this listing id (the previous page's cursor)
    #[arg(long)]
    pub after: Option<String>,

    /// Listings per page (default 10)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u16).range(1..))]
    pub page_size: Option<u16>,

    /// Show only the signed-in user's listings
    #[arg(
        long,
        conflicts_with_all = ["genre", "condition", "min_price", "max_price", "after"]
    )]
    pub mine: bool,
}

/// Arguments for `bookxchange price`.
#[derive(Parser, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub book: BookArgs,

    /// Treat the genre as popular
    #[arg(long, conflicts_with = "market")]
    pub popular: bool,

    /// Number of competing listings
    #[arg(long, conflicts_with = "market")]
    pub supply: Option<u32>,

    /// Demand score, 0 to 100
    #[arg(long, conflicts_with = "market")]
    pub demand: Option<f64>,

    /// Derive popularity, supply, and demand from the store's catalog
    #[arg(long)]
    pub market: bool,
}

/// Arguments for `bookxchange screen`.
#[derive(Parser, Debug)]
pub struct ScreenArgs {
    /// JSON file holding the transaction
    pub transaction: PathBuf,

    /// JSON file holding the buyer's prior transactions, newest first
    #[arg(long)]
    pub history: Option<PathBuf>,
}

/// Arguments for `bookxchange buy`.
#[derive(Parser, Debug)]
pub struct BuyArgs {
    /// JSON file holding the transaction
    pub transaction: PathBuf,

    /// Seller's user id
    #[arg(long)]
    pub seller: String,
}

/// Arguments for `bookxchange recommend`.
#[derive(Parser, Debug)]
pub struct RecommendArgs {
    /// Recommend listings similar to this listing id
    #[arg(long)]
    pub similar_to: Option<String>,

    /// Number of listings (defaults to the configured row size)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Arguments for `bookxchange chat`.
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Message for the assistant
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,
}

/// Arguments for `bookxchange feedback`.
#[derive(Parser, Debug)]
pub struct FeedbackArgs {
    /// Id of the conversation being rated
    pub chat_id: String,

    /// Mark the reply as not helpful
    #[arg(long)]
    pub unhelpful: bool,

    /// Free-text comment
    #[arg(long)]
    pub comment: Option<String>,
}

/// Arguments for `bookxchange config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}
