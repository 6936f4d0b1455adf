use crate::corpus::Corpus;
use crate::error::{DeckForgeError, DfResult};
use crate::model::CardId;
use fnv::FnvHashMap;

/// Raw copy counts per card across the whole corpus. Missing ids read as 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OccurrenceTable {
    counts: FnvHashMap<CardId, u64>,
}

impl OccurrenceTable {
    /// Counts every physical copy, not every distinct card per deck.
    pub fn aggregate(corpus: &Corpus) -> Self {
        let counts = corpus
            .iter()
            .flat_map(|deck| deck.cards.iter())
            .filter(|entry| entry.count > 0)
            .fold(FnvHashMap::default(), |mut acc, entry| {
                *acc.entry(entry.id).or_default() += entry.count as u64;
                acc
            });

        Self { counts }
    }

    pub fn get(&self, id: CardId) -> u64 {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.counts.contains_key(&id)
    }

    pub fn max_count(&self) -> Option<u64> {
        self.counts.values().copied().max()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CardId, u64)> + '_ {
        self.counts.iter().map(|(&id, &c)| (id, c))
    }

    /// Log-damped rescale onto [0, 1]: `ln(1 + c) / ln(1 + max)`.
    pub fn normalize(&self) -> DfResult<NormalizedOccurrenceTable> {
        let max = match self.max_count() {
            Some(m) if m > 0 => m,
            _ => return Err(DeckForgeError::EmptyCorpus),
        };

        let denom = (max as f64).ln_1p();
        let values = self
            .counts
            .iter()
            .map(|(&id, &c)| (id, (c as f64).ln_1p() / denom))
            .collect();

        Ok(NormalizedOccurrenceTable { values })
    }
}

/// Per-card popularity in [0, 1]; the most frequent card maps to 1.0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedOccurrenceTable {
    values: FnvHashMap<CardId, f64>,
}

impl NormalizedOccurrenceTable {
    pub fn get(&self, id: CardId) -> f64 {
        self.values.get(&id).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CardId, f64)> + '_ {
        self.values.iter().map(|(&id, &v)| (id, v))
    }
}
