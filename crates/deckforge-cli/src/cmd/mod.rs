pub mod inspect;
pub mod rank;
pub mod score;
pub mod show;

use deckforge_core::catalog::CardCatalog;
use deckforge_core::model::{Deck, DeckRecord};
use deckforge_core::DfResult;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reads a deck JSON file and expands it through the catalog.
pub fn load_candidate<P: AsRef<Path>>(path: P, catalog: &CardCatalog) -> DfResult<Deck> {
    let reader = BufReader::new(File::open(path)?);
    let record = DeckRecord::from_reader(reader)?;
    Ok(catalog.expand(&record))
}

/// File stem used as a deck's display name.
pub fn deck_name<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
