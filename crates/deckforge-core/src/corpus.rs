use crate::error::{DeckForgeError, DfResult};
use crate::model::DeckRecord;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// The fixed snapshot of published decks that all statistics are mined from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    decks: Vec<DeckRecord>,
}

impl Corpus {
    pub fn from_records(decks: Vec<DeckRecord>) -> Self {
        let decks = decks.into_iter().map(strip_empty_entries).collect();
        Self { decks }
    }

    /// Loads every `*.json` deck directly inside `dir`, in file-name order.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> DfResult<Self> {
        let dir = dir.as_ref();
        info!("📚 Loading Deck Corpus: {:?}", dir);

        let decks: Vec<DeckRecord> = read_deck_dir(dir)?
            .into_iter()
            .map(|(_, record)| record)
            .collect();

        debug!("Corpus: {} deck files read", decks.len());
        Ok(Self::from_records(decks))
    }

    pub fn decks(&self) -> &[DeckRecord] {
        &self.decks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DeckRecord> {
        self.decks.iter()
    }

    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    pub fn choose(&self, rng: &mut fastrand::Rng) -> Option<&DeckRecord> {
        if self.decks.is_empty() {
            return None;
        }
        Some(&self.decks[rng.usize(..self.decks.len())])
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a DeckRecord;
    type IntoIter = std::slice::Iter<'a, DeckRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.decks.iter()
    }
}

/// Reads `*.json` deck files directly inside `dir`, sorted by path.
/// A malformed file aborts the whole read.
pub fn read_deck_dir<P: AsRef<Path>>(dir: P) -> DfResult<Vec<(PathBuf, DeckRecord)>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(DeckForgeError::Validation(format!(
            "Deck directory not found: {:?}",
            dir
        )));
    }

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| DeckForgeError::Validation(e.to_string()))?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path.to_path_buf());
        }
    }
    paths.sort();

    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        let reader = BufReader::new(File::open(&path)?);
        let record = DeckRecord::from_reader(reader).map_err(|e| {
            DeckForgeError::Validation(format!("Malformed deck file {:?}: {}", path, e))
        })?;
        records.push((path, record));
    }
    Ok(records)
}

fn strip_empty_entries(mut record: DeckRecord) -> DeckRecord {
    let before = record.cards.len();
    record.cards.retain(|e| e.count > 0);
    let dropped = before - record.cards.len();
    if dropped > 0 {
        warn!(
            "Deck '{}' / '{}': dropped {} zero-count entries",
            record.leader, record.stratagem, dropped
        );
    }
    record
}
