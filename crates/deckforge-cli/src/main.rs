use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use deckforge_core::catalog::CardCatalog;
use deckforge_core::config::FitnessWeights;
use deckforge_core::corpus::Corpus;
use deckforge_core::model::Faction;
use deckforge_core::FitnessEvaluator;
use std::path::Path;
use std::process;
use std::sync::Arc;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/decks")]
    decks: String,

    #[arg(global = true, short, long, default_value = "data/card_database.csv")]
    catalog: String,

    /// JSON file with faction -> leader ability -> provision bonus tables
    #[arg(global = true, short, long)]
    factions: Option<String>,

    #[arg(global = true, long)]
    weights: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Score(cmd::score::ScoreArgs),
    Rank(cmd::rank::RankArgs),
    Inspect(cmd::inspect::InspectArgs),
    Show(cmd::show::ShowArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("🚀 Initializing DeckForge...");

    let corpus = Corpus::load_from_dir(&cli.decks).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    if let Commands::Show(args) = &cli.command {
        let catalog = load_catalog_or_empty(&cli.catalog);
        cmd::show::run(args, &corpus, &catalog);
        return;
    }

    let (cli_weights, sub_matches) = match &cli.command {
        Commands::Score(args) => (
            Some(&args.weights),
            matches.subcommand_matches("score"),
        ),
        Commands::Rank(args) => (
            Some(&args.config.weights),
            matches.subcommand_matches("rank"),
        ),
        _ => (None, None),
    };

    let weights = resolve_weights(cli.weights.as_deref(), cli_weights, sub_matches);

    let evaluator = match FitnessEvaluator::from_corpus(&corpus, weights) {
        Ok(e) => Arc::new(e),
        Err(e) => {
            error!("❌ FATAL ERROR BUILDING STATISTICS:");
            error!("   {}", e);
            process::exit(1);
        }
    };

    match cli.command {
        Commands::Score(args) => {
            let catalog = load_catalog(&cli.catalog);
            cmd::score::run(args, evaluator, &catalog);
        }
        Commands::Rank(args) => {
            let catalog = load_catalog(&cli.catalog);
            let factions = load_factions(cli.factions.as_deref());
            cmd::rank::run(args, evaluator, &catalog, &factions);
        }
        Commands::Inspect(args) => {
            let catalog = load_catalog_or_empty(&cli.catalog);
            cmd::inspect::run(args, evaluator, &catalog, &cli.catalog);
        }
        Commands::Show(_) => {}
    }
}

/// Weights file is the base; flags typed on the command line override it.
fn resolve_weights(
    path: Option<&str>,
    cli_weights: Option<&FitnessWeights>,
    sub_matches: Option<&clap::ArgMatches>,
) -> FitnessWeights {
    let base = cli_weights.cloned().unwrap_or_default();

    let Some(path) = path else {
        return base;
    };

    info!("⚖️  Loading Weights from: {}", path);
    let mut file_weights = FitnessWeights::load_from_file(path).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    if let (Some(cli_weights), Some(matches)) = (cli_weights, sub_matches) {
        file_weights.merge_from_cli(cli_weights, matches);
    }
    file_weights
}

fn load_catalog(path: &str) -> CardCatalog {
    CardCatalog::load_from_file(path).unwrap_or_else(|e| {
        error!("Failed to load card catalog '{}': {}", path, e);
        process::exit(1);
    })
}

fn load_catalog_or_empty(path: &str) -> CardCatalog {
    if !Path::new(path).exists() {
        warn!("⚠️  Card catalog '{}' not found. Showing card ids only.", path);
        return CardCatalog::default();
    }
    load_catalog(path)
}

fn load_factions(path: Option<&str>) -> Vec<Faction> {
    match path {
        Some(p) => {
            info!("🛡️  Loading Factions: {}", p);
            Faction::load_from_file(p).unwrap_or_else(|e| {
                error!("Failed to load factions '{}': {}", p, e);
                process::exit(1);
            })
        }
        None => Faction::builtin(),
    }
}
