use crate::error::DfResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const NEUTRAL_FACTION: &str = "neutral";

/// A faction and the leader abilities it may field, each with its provision bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faction {
    pub name: String,
    pub leader_abilities: BTreeMap<String, u32>,
}

impl Faction {
    pub fn new(name: &str, abilities: &[(&str, u32)]) -> Self {
        Self {
            name: name.to_string(),
            leader_abilities: abilities
                .iter()
                .map(|(ability, bonus)| (ability.to_string(), *bonus))
                .collect(),
        }
    }

    pub fn provision_bonus(&self, leader_ability: &str) -> Option<u32> {
        self.leader_abilities.get(leader_ability).copied()
    }

    /// Finds the faction that owns `leader_ability`.
    pub fn for_leader<'a>(factions: &'a [Faction], leader_ability: &str) -> Option<&'a Faction> {
        factions
            .iter()
            .find(|f| f.leader_abilities.contains_key(leader_ability))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DfResult<Vec<Faction>> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn builtin() -> Vec<Faction> {
        vec![
            Faction::new(
                "nilfgaard",
                &[
                    ("Tactical Decision", 16),
                    ("Imprisonment", 15),
                    ("Toussaintois Hospitality", 15),
                    ("Imperial Formation", 16),
                    ("Doulbe Cross", 16),
                    ("Enslave", 15),
                    ("Imposter", 15),
                ],
            ),
            Faction::new(
                "northernrealms",
                &[
                    ("Uprising", 16),
                    ("Inspired Zeal", 14),
                    ("Shieldwall", 16),
                    ("Mobilization", 16),
                    ("Stockpile", 15),
                    ("Pincer Maneuver", 15),
                    ("Royal Inspiration", 16),
                ],
            ),
            Faction::new(
                "skellige",
                &[
                    ("Rage of the Sea", 15),
                    ("Battle Trance", 17),
                    ("Onslaught", 16),
                    ("Reckless Fury", 16),
                    ("Ursine Ritual", 16),
                    ("Patricidal Fury", 15),
                    ("Blaze of Glory", 16),
                ],
            ),
            Faction::new(
                "scoiatael",
                &[
                    ("Deadeye Ambush", 16),
                    ("Precision Strike", 14),
                    ("Nature's Gift", 15),
                    ("Call of Harmony", 17),
                    ("Mahakam Forge", 17),
                    ("Guerilla Tactics", 15),
                    ("Invigorate", 17),
                ],
            ),
            Faction::new(
                "monsters",
                &[
                    ("Carapace", 15),
                    ("Force of Nature", 16),
                    ("White Frost", 15),
                    ("Arachas Swarm", 15),
                    ("Fruits of Ysgith", 14),
                    ("Blood Scent", 16),
                    ("Overwhelming Hunger", 15),
                ],
            ),
            Faction::new(
                "syndicate",
                &[
                    ("Jackpot", 15),
                    ("Lined Pockets", 15),
                    ("Blood Money", 16),
                    ("Pirate's Cove", 16),
                    ("Off the Books", 16),
                    ("Congregate", 18),
                    ("Hidden Cache", 16),
                ],
            ),
        ]
    }
}
