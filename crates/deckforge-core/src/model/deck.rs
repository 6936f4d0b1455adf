use super::card::{Card, CardId};
use crate::error::DfResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;

pub const UNKNOWN_CATEGORY: &str = "Unknown";

fn unknown_category() -> String {
    UNKNOWN_CATEGORY.to_string()
}

fn single_copy() -> u32 {
    1
}

/// One `(card id, copy count)` line of a published deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntry {
    pub id: CardId,
    #[serde(default = "single_copy")]
    pub count: u32,
}

/// A deck as stored in the corpus: labels plus the entry list in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckRecord {
    #[serde(rename = "Leader", default = "unknown_category")]
    pub leader: String,
    #[serde(rename = "Stratagem", default = "unknown_category")]
    pub stratagem: String,
    #[serde(rename = "Cards", default)]
    pub cards: Vec<CardEntry>,
}

impl DeckRecord {
    pub fn new(leader: &str, stratagem: &str, cards: Vec<CardEntry>) -> Self {
        Self {
            leader: leader.to_string(),
            stratagem: stratagem.to_string(),
            cards,
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> DfResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Total physical copies across all entries.
    pub fn total_copies(&self) -> u64 {
        self.cards.iter().map(|e| e.count as u64).sum()
    }
}

/// A concrete deck: every physical copy is its own `Card`.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    pub leader_ability: String,
    pub stratagem: String,
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn new(leader_ability: &str, stratagem: &str, cards: Vec<Card>) -> Self {
        Self {
            leader_ability: leader_ability.to_string(),
            stratagem: stratagem.to_string(),
            cards,
        }
    }

    pub fn card_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().map(|c| c.id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Saturates at `u32::MAX` instead of wrapping.
    pub fn total_provision(&self) -> u32 {
        self.cards
            .iter()
            .fold(0u32, |acc, c| acc.saturating_add(c.provision))
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Leader: {}, Stratagem: {}, Cards: {} cards",
            self.leader_ability,
            self.stratagem,
            self.cards.len()
        )
    }
}
