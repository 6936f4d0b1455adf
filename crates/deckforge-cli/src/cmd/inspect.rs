use crate::reports;
use clap::Args;
use deckforge_core::catalog::CardCatalog;
use deckforge_core::model::CardId;
use deckforge_core::util::{file_digest, snapshot_fingerprint};
use deckforge_core::FitnessEvaluator;
use std::sync::Arc;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// Rows shown in each table
    #[arg(short = 'n', long, default_value_t = 15)]
    pub top: usize,

    /// Show synergy partners and affinities of a single card
    #[arg(long)]
    pub card: Option<CardId>,
}

pub fn run(
    args: InspectArgs,
    evaluator: Arc<FitnessEvaluator>,
    catalog: &CardCatalog,
    catalog_path: &str,
) {
    let stats = evaluator.statistics();

    println!("\n🔎 === CORPUS STATISTICS === 🔎");
    println!("Decks:        {}", stats.deck_count);
    println!("Cards:        {}", stats.occurrences.len());
    println!("Pairs:        {}", stats.cooccurrence.len());
    println!("Fingerprint:  {}", snapshot_fingerprint(stats));

    if !catalog.is_empty() {
        match file_digest(catalog_path) {
            Ok(hash) => println!("Catalog:      {} ({} cards)", hash, catalog.len()),
            Err(e) => warn!("Could not hash catalog: {}", e),
        }
    }

    match args.card {
        Some(id) => {
            if !stats.occurrences.contains(id) {
                println!("\nCard {} never appears in the corpus.", id);
                return;
            }
            reports::print_card_report(id, stats, catalog, args.top);
        }
        None => {
            reports::print_occurrence_report(stats, catalog, args.top);
            reports::print_synergy_report(stats, catalog, args.top);
        }
    }
}
