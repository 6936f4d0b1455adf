pub mod card;
pub mod deck;
pub mod faction;

pub use self::card::{Card, CardGroup, CardId, CardType};
pub use self::deck::{CardEntry, Deck, DeckRecord, UNKNOWN_CATEGORY};
pub use self::faction::{Faction, NEUTRAL_FACTION};
