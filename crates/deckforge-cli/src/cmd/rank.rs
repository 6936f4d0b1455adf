use super::deck_name;
use crate::reports;
use clap::Args;
use deckforge_core::catalog::CardCatalog;
use deckforge_core::config::Config;
use deckforge_core::corpus::read_deck_dir;
use deckforge_core::model::Faction;
use deckforge_core::ranker::rank_candidates;
use deckforge_core::rules::RuleSet;
use deckforge_core::FitnessEvaluator;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::error;

#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    #[command(flatten)]
    pub config: Config,

    /// Directory of candidate deck JSON files
    pub candidates: PathBuf,

    /// Only print the best N legal decks
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    /// Emit the ranking as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(
    args: RankArgs,
    evaluator: Arc<FitnessEvaluator>,
    catalog: &CardCatalog,
    factions: &[Faction],
) {
    let records = read_deck_dir(&args.candidates).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let candidates = records
        .into_iter()
        .map(|(path, record)| (deck_name(&path), catalog.expand(&record)))
        .collect();

    let rules = RuleSet::new(args.config.rules.clone());
    let mut ranked = rank_candidates(&evaluator, &rules, factions, candidates);

    if let Some(n) = args.top {
        ranked.retain(|r| r.is_accepted());
        ranked.truncate(n);
    }

    if args.json {
        match serde_json::to_string_pretty(&ranked) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                error!("Failed to serialize ranking: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    if ranked.is_empty() {
        println!("No candidate decks found.");
        return;
    }

    println!("\n🏆 === CANDIDATE RANKING === 🏆");
    reports::print_ranking_report(&ranked);
}
