use crate::error::DfResult;
use crate::model::{Card, CardGroup, CardId, CardType, Deck, DeckRecord};
use fnv::FnvHashMap;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: CardId,
    name: String,
    provision: f64,
    group: String,
    #[serde(rename = "type")]
    card_type: String,
    faction: String,
    #[serde(default)]
    secondary_faction: String,
}

impl CatalogRow {
    fn into_card(self) -> Option<Card> {
        if !self.provision.is_finite() || self.provision < 0.0 {
            return None;
        }
        Some(Card {
            id: self.id,
            name: self.name.trim().to_string(),
            provision: self.provision.round() as u32,
            group: CardGroup::parse(&self.group),
            card_type: CardType::parse(&self.card_type),
            faction: self.faction.trim().to_string(),
            secondary_faction: self.secondary_faction.trim().to_string(),
        })
    }
}

/// Read-only card reference data keyed by id.
#[derive(Debug, Clone, Default)]
pub struct CardCatalog {
    cards: FnvHashMap<CardId, Card>,
}

impl CardCatalog {
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            cards: cards.into_iter().map(|c| (c.id, c)).collect(),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DfResult<Self> {
        let path = path.as_ref();
        info!("🗂️  Loading Card Catalog: {:?}", path);
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Parses catalog CSV. Rows that fail to parse are skipped, not fatal.
    pub fn from_reader<R: Read>(reader: R) -> DfResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let mut cards = FnvHashMap::default();
        let mut skipped = 0usize;

        for (row_idx, result) in rdr.deserialize::<CatalogRow>().enumerate() {
            match result.map(CatalogRow::into_card) {
                Ok(Some(card)) => {
                    cards.insert(card.id, card);
                }
                Ok(None) => {
                    skipped += 1;
                    warn!("Catalog row {}: invalid provision value", row_idx + 1);
                }
                Err(e) => {
                    skipped += 1;
                    warn!("Catalog row {}: {}", row_idx + 1, e);
                }
            }
        }

        debug!("Catalog: {} cards loaded, {} rows skipped", cards.len(), skipped);
        Ok(Self { cards })
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Turns a corpus record into a concrete deck, one `Card` per copy.
    /// Ids missing from the catalog are dropped.
    pub fn expand(&self, record: &DeckRecord) -> Deck {
        let mut cards = Vec::with_capacity(record.total_copies() as usize);
        for entry in &record.cards {
            match self.cards.get(&entry.id) {
                Some(card) => {
                    for _ in 0..entry.count {
                        cards.push(card.clone());
                    }
                }
                None => debug!("Card {} not in catalog, skipped", entry.id),
            }
        }
        Deck::new(&record.leader, &record.stratagem, cards)
    }
}
