use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use strum_macros::EnumString;

pub type CardId = u32;

/// Rarity group of a card. Copy limits depend on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CardGroup {
    Bronze,
    Gold,
    #[strum(default)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CardType {
    Unit,
    Special,
    Artifact,
    Stratagem,
    #[strum(default)]
    Other(String),
}

impl CardGroup {
    /// Never fails; unrecognized labels are kept verbatim in `Other`.
    pub fn parse(s: &str) -> Self {
        match Self::from_str(s.trim()) {
            Ok(group) => group,
            Err(_) => Self::Other(s.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Bronze => "bronze",
            Self::Gold => "gold",
            Self::Other(s) => s,
        }
    }
}

impl CardType {
    pub fn parse(s: &str) -> Self {
        match Self::from_str(s.trim()) {
            Ok(t) => t,
            Err(_) => Self::Other(s.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Unit => "unit",
            Self::Special => "special",
            Self::Artifact => "artifact",
            Self::Stratagem => "stratagem",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for CardGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog entry for a single card. Two cards are equal iff their ids match.
#[derive(Debug, Clone)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub provision: u32,
    pub group: CardGroup,
    pub card_type: CardType,
    pub faction: String,
    pub secondary_faction: String,
}

impl Card {
    pub fn is_unit(&self) -> bool {
        self.card_type == CardType::Unit
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Prov: {})", self.name, self.provision)
    }
}
