mod listing;
mod tables;

pub use self::listing::print_deck as print_deck_listing;
pub use self::tables::{
    card as print_card_report, occurrences as print_occurrence_report,
    ranking as print_ranking_report, scoring as print_scoring_report,
    synergies as print_synergy_report,
};

use deckforge_core::catalog::CardCatalog;
use deckforge_core::model::CardId;

/// Card name from the catalog, or `#id` when the catalog lacks it.
pub fn card_label(catalog: &CardCatalog, id: CardId) -> String {
    match catalog.get(id) {
        Some(card) => card.name.clone(),
        None => format!("#{}", id),
    }
}
