use crate::reports;
use clap::Args;
use deckforge_core::catalog::CardCatalog;
use deckforge_core::corpus::Corpus;

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Seed for picking the deck; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: &ShowArgs, corpus: &Corpus, catalog: &CardCatalog) {
    let mut rng = match args.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    match corpus.choose(&mut rng) {
        Some(record) => reports::print_deck_listing(record, catalog),
        None => println!("Corpus is empty."),
    }
}
