#![allow(dead_code)]

use deckforge_core::corpus::Corpus;
use deckforge_core::model::{Card, CardEntry, CardGroup, CardId, CardType, Deck, DeckRecord};

/// Builder for Card to clean up tests
pub struct CardBuilder {
    card: Card,
}

impl CardBuilder {
    pub fn new(id: CardId) -> Self {
        Self {
            card: Card {
                id,
                name: format!("card_{}", id),
                provision: 5,
                group: CardGroup::Bronze,
                card_type: CardType::Unit,
                faction: "neutral".to_string(),
                secondary_faction: String::new(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.card.name = name.to_string();
        self
    }

    pub fn provision(mut self, provision: u32) -> Self {
        self.card.provision = provision;
        self
    }

    pub fn gold(mut self) -> Self {
        self.card.group = CardGroup::Gold;
        self
    }

    pub fn special(mut self) -> Self {
        self.card.card_type = CardType::Special;
        self
    }

    pub fn faction(mut self, faction: &str) -> Self {
        self.card.faction = faction.to_string();
        self
    }

    pub fn secondary(mut self, faction: &str) -> Self {
        self.card.secondary_faction = faction.to_string();
        self
    }

    pub fn build(self) -> Card {
        self.card
    }
}

pub fn card(id: CardId) -> Card {
    CardBuilder::new(id).build()
}

pub fn record(leader: &str, stratagem: &str, entries: &[(CardId, u32)]) -> DeckRecord {
    DeckRecord::new(
        leader,
        stratagem,
        entries
            .iter()
            .map(|&(id, count)| CardEntry { id, count })
            .collect(),
    )
}

pub fn candidate(leader: &str, stratagem: &str, ids: &[CardId]) -> Deck {
    Deck::new(leader, stratagem, ids.iter().map(|&id| card(id)).collect())
}

/// Deck A: L1/S1 [1 x2, 2 x1]; Deck B: L1/S2 [1 x1, 2 x1]
pub fn two_deck_corpus() -> Corpus {
    Corpus::from_records(vec![
        record("L1", "S1", &[(1, 2), (2, 1)]),
        record("L1", "S2", &[(1, 1), (2, 1)]),
    ])
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
