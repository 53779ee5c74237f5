//! CLI module graph and command dispatch.

pub mod chat;
pub mod command;
pub mod config;
pub mod listing;
pub mod output;
pub mod paths;
pub mod price;
pub mod recommend;
pub mod screen;

use command::{Cli, Commands, ConfigCommand};

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Run the parsed command line.
///
/// `config` commands read the file themselves; every other command runs
/// against the configuration at `cli.config`, or the defaults when that file
/// does not exist.
pub async fn run(cli: &Cli) -> Result<()> {
    if let Commands::Config(command) = &cli.command {
        return match command {
            ConfigCommand::Init(args) => config::execute_init(&args.path, args.force),
            ConfigCommand::Show => config::execute_show(&cli.config),
            ConfigCommand::Validate => config::execute_validate(&cli.config),
        };
    }

    let settings = Config::load_or_default(&cli.config)?;
    init_logging(&settings);

    match &cli.command {
        Commands::List(args) => listing::execute_list(args, &settings).await,
        Commands::Browse(args) => listing::execute_browse(args, &settings).await,
        Commands::Price(args) => price::execute_price(args, &settings).await,
        Commands::PriceRange(args) => price::execute_range(args),
        Commands::Screen(args) => screen::execute_screen(args),
        Commands::Buy(args) => screen::execute_buy(args, &settings).await,
        Commands::Recommend(args) => recommend::execute(args, &settings).await,
        Commands::Chat(args) => chat::execute_chat(args, &settings).await,
        Commands::Feedback(args) => chat::execute_feedback(args, &settings).await,
        Commands::Config(_) => Ok(()),
    }
}

/// Install logging, letting `-v` raise the configured level.
fn init_logging(settings: &Config) {
    match output::verbose_filter() {
        Some(level) => {
            let mut logging = settings.logging.clone();
            logging.level = level.to_string();
            logging.init();
        }
        None => settings.init_logging(),
    }
}
