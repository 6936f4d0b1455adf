use super::occurrence::OccurrenceTable;
use crate::corpus::Corpus;
use crate::model::CardId;
use fnv::FnvHashMap;
use itertools::Itertools;

/// Unordered pair of distinct cards, stored smallest id first.
pub type CardPair = (CardId, CardId);

#[inline(always)]
fn canonical(a: CardId, b: CardId) -> CardPair {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Sparse symmetric synergy matrix. Pairs never seen together are absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CooccurrenceMatrix {
    pairs: FnvHashMap<CardPair, f64>,
}

impl CooccurrenceMatrix {
    /// Counts one hit per pair of entry positions within a deck (so an id listed
    /// twice pairs twice), then divides by the larger raw occurrence count.
    pub fn build(corpus: &Corpus, occurrences: &OccurrenceTable) -> Self {
        let mut counts: FnvHashMap<CardPair, u64> = FnvHashMap::default();

        for deck in corpus {
            for (a, b) in deck.cards.iter().tuple_combinations() {
                if a.id == b.id {
                    continue;
                }
                *counts.entry(canonical(a.id, b.id)).or_default() += 1;
            }
        }

        let pairs = counts
            .into_iter()
            .map(|((a, b), count)| {
                let denom = occurrences.get(a).max(occurrences.get(b)).max(1);
                ((a, b), count as f64 / denom as f64)
            })
            .collect();

        Self { pairs }
    }

    pub fn get(&self, a: CardId, b: CardId) -> Option<f64> {
        if a == b {
            return None;
        }
        self.pairs.get(&canonical(a, b)).copied()
    }

    /// Synergy with 0.0 for unsampled pairs.
    #[inline(always)]
    pub fn synergy(&self, a: CardId, b: CardId) -> f64 {
        self.get(a, b).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CardPair, f64)> + '_ {
        self.pairs.iter().map(|(&p, &v)| (p, v))
    }

    /// Partners of `card` ordered by descending synergy, ties by id.
    pub fn partners(&self, card: CardId) -> Vec<(CardId, f64)> {
        self.pairs
            .iter()
            .filter_map(|(&(a, b), &v)| match (a == card, b == card) {
                (true, _) => Some((b, v)),
                (_, true) => Some((a, v)),
                _ => None,
            })
            .sorted_by(|x, y| y.1.total_cmp(&x.1).then(x.0.cmp(&y.0)))
            .collect()
    }
}
