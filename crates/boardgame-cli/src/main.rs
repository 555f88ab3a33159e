//! Board game catalog CLI - filter and inspect the catalog from a terminal

mod logging;
mod output;
mod source;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use boardgame_core::options;
use boardgame_core::{CatalogStore, FilterCriteria, FilterOptions, MoreFilter, MoreFilterField};

use crate::source::{FileSource, HttpSource};

const CATALOG_URL: &str =
    "https://raw.githubusercontent.com/cederdorff/race/refs/heads/master/data/games.json";

#[derive(Parser)]
#[command(name = "boardgame-cli")]
#[command(author, version, about = "Board game catalog browser CLI", long_about = None)]
struct Cli {
    /// Catalog URL
    #[arg(long, env = "BOARDGAME_CATALOG_URL", default_value = CATALOG_URL, global = true)]
    url: String,

    /// Read the catalog from a local JSON file instead of the URL
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Seconds to wait for the catalog before giving up
    #[arg(long, env = "BOARDGAME_TIMEOUT_SECS", default_value_t = 30, global = true)]
    timeout_secs: u32,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List games matching the given filters
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Print the matching records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the values each filter offers
    Options {
        /// Only list the values of one extra filter
        #[arg(long, value_enum)]
        field: Option<FieldArg>,
    },

    /// Show details for one game
    Show {
        /// Exact title (case-insensitive)
        title: String,
    },
}

#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Case-insensitive text contained in the title
    #[arg(short, long, default_value = "")]
    search: String,

    /// Genre
    #[arg(long)]
    category: Option<String>,

    /// Playtime in minutes, exactly as listed by `options`
    #[arg(long)]
    playtime: Option<String>,

    /// Number of players the game must support
    #[arg(long)]
    players: Option<u32>,

    #[arg(long)]
    difficulty: Option<String>,

    #[command(flatten)]
    more: MoreArgs,
}

/// At most one extra filter applies at a time
#[derive(Args, Debug, Default)]
#[group(multiple = false)]
struct MoreArgs {
    /// Only games suitable up to this age
    #[arg(long)]
    age: Option<u32>,

    #[arg(long)]
    language: Option<String>,

    #[arg(long)]
    location: Option<String>,

    /// Rating, exactly as listed by `options --field rating`
    #[arg(long)]
    rating: Option<String>,
}

impl MoreArgs {
    fn filter(self) -> Option<MoreFilter> {
        if let Some(age) = self.age {
            return Some(MoreFilter::new(MoreFilterField::Age, age.to_string()));
        }
        self.language
            .map(|v| MoreFilter::new(MoreFilterField::Language, v))
            .or_else(|| self.location.map(|v| MoreFilter::new(MoreFilterField::Location, v)))
            .or_else(|| self.rating.map(|v| MoreFilter::new(MoreFilterField::Rating, v)))
    }
}

impl FilterArgs {
    fn criteria(self) -> FilterCriteria {
        FilterCriteria {
            search: self.search,
            category: self.category,
            playtime: self.playtime,
            players: self.players,
            difficulty: self.difficulty,
            more: self.more.filter(),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FieldArg {
    Age,
    Language,
    Location,
    Rating,
}

impl From<FieldArg> for MoreFilterField {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Age => MoreFilterField::Age,
            FieldArg::Language => MoreFilterField::Language,
            FieldArg::Location => MoreFilterField::Location,
            FieldArg::Rating => MoreFilterField::Rating,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let store = load_store(&cli).await?;
    info!(games = store.len(), "catalog ready");

    match cli.command {
        Commands::List { filters, json } => cmd_list(&store, filters.criteria(), json)?,
        Commands::Options { field } => cmd_options(&store, field.map(Into::into)),
        Commands::Show { title } => cmd_show(&store, &title)?,
    }

    Ok(())
}

async fn load_store(cli: &Cli) -> Result<CatalogStore> {
    match &cli.file {
        Some(path) => CatalogStore::load(&FileSource::new(path))
            .await
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => {
            let source = HttpSource::new(&cli.url, cli.timeout_secs)?;
            CatalogStore::load(&source)
                .await
                .with_context(|| format!("Failed to load catalog from {}", cli.url))
        }
    }
}

fn cmd_list(store: &CatalogStore, criteria: FilterCriteria, json: bool) -> Result<()> {
    let games = store.filter(&criteria);
    if json {
        let text = serde_json::to_string_pretty(&games).context("Failed to serialize games")?;
        println!("{}", text);
    } else {
        println!("{}", output::format_listing(&games, store.len()));
    }
    Ok(())
}

fn cmd_options(store: &CatalogStore, field: Option<MoreFilterField>) {
    match field {
        Some(field) => {
            for value in options::field_values(field, store.games()) {
                println!("{}", value);
            }
        }
        None => println!("{}", output::format_options(&FilterOptions::from_games(store.games()))),
    }
}

fn cmd_show(store: &CatalogStore, title: &str) -> Result<()> {
    let game = store
        .find_by_title(title)
        .with_context(|| format!("No game titled \"{}\"", title))?;
    println!("{}", output::format_detail(game));
    Ok(())
}
