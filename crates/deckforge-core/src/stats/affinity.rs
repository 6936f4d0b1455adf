use crate::corpus::Corpus;
use crate::model::{CardId, DeckRecord, UNKNOWN_CATEGORY};
use fnv::FnvHashMap;
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter};

/// Which deck label an [`AffinityTable`] is conditioned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum AffinityKind {
    Leader,
    Stratagem,
}

impl AffinityKind {
    pub fn category<'a>(&self, deck: &'a DeckRecord) -> &'a str {
        let label = match self {
            Self::Leader => deck.leader.as_str(),
            Self::Stratagem => deck.stratagem.as_str(),
        };
        if label.is_empty() {
            UNKNOWN_CATEGORY
        } else {
            label
        }
    }
}

/// For each card, the share of its copies seen under each category.
/// Every card's shares sum to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct AffinityTable {
    kind: AffinityKind,
    per_card: FnvHashMap<CardId, BTreeMap<String, f64>>,
}

impl AffinityTable {
    pub fn build(corpus: &Corpus, kind: AffinityKind) -> Self {
        let mut tallies: FnvHashMap<CardId, BTreeMap<String, u64>> = FnvHashMap::default();

        for deck in corpus {
            let category = kind.category(deck);
            for entry in &deck.cards {
                let per_category = tallies.entry(entry.id).or_default();
                match per_category.get_mut(category) {
                    Some(t) => *t += entry.count as u64,
                    None => {
                        per_category.insert(category.to_string(), entry.count as u64);
                    }
                }
            }
        }

        let per_card = tallies
            .into_iter()
            .filter_map(|(id, categories)| {
                let total: u64 = categories.values().sum();
                if total == 0 {
                    return None;
                }
                let shares = categories
                    .into_iter()
                    .map(|(name, t)| (name, t as f64 / total as f64))
                    .collect();
                Some((id, shares))
            })
            .collect();

        Self { kind, per_card }
    }

    pub fn kind(&self) -> AffinityKind {
        self.kind
    }

    /// 0.0 when either the card or the category was never observed.
    #[inline(always)]
    pub fn get(&self, card: CardId, category: &str) -> f64 {
        self.per_card
            .get(&card)
            .and_then(|m| m.get(category))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn distribution(&self, card: CardId) -> Option<&BTreeMap<String, f64>> {
        self.per_card.get(&card)
    }

    pub fn len(&self) -> usize {
        self.per_card.len()
    }

    pub fn is_empty(&self) -> bool {
        self.per_card.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CardId, &BTreeMap<String, f64>)> + '_ {
        self.per_card.iter().map(|(&id, m)| (id, m))
    }
}
