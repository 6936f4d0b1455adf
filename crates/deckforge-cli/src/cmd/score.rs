use super::{deck_name, load_candidate};
use crate::reports;
use clap::Args;
use deckforge_core::catalog::CardCatalog;
use deckforge_core::config::FitnessWeights;
use deckforge_core::FitnessEvaluator;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, warn};

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub weights: FitnessWeights,

    /// Candidate deck files (same JSON shape as corpus decks)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: ScoreArgs, evaluator: Arc<FitnessEvaluator>, catalog: &CardCatalog) {
    let mut results = Vec::new();

    for path in &args.files {
        let deck = match load_candidate(path, catalog) {
            Ok(d) => d,
            Err(e) => {
                error!("Skipping {:?}: {}", path, e);
                continue;
            }
        };
        if deck.is_empty() {
            warn!("{:?} has no cards known to the catalog", path);
        }

        let details = evaluator.evaluate_details(&deck);
        results.push((deck_name(path), details));
    }

    if results.is_empty() {
        println!("No decks could be scored.");
        return;
    }

    results.sort_by(|a, b| b.1.total.total_cmp(&a.1.total));

    println!("\n🃏 === DECK FITNESS === 🃏");
    reports::print_scoring_report(&results);
}
