use crate::config::RuleParams;
use crate::model::{CardGroup, CardId, Deck, Faction, NEUTRAL_FACTION};
use fnv::FnvHashMap;
use thiserror::Error;
use tracing::debug;

/// First composition rule a candidate deck breaks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("No faction fields leader ability '{0}'")]
    NoFactionForLeader(String),

    #[error("Leader ability '{ability}' does not belong to faction '{faction}'")]
    UnknownLeaderAbility { ability: String, faction: String },

    #[error("Provision limit exceeded: {total} > {limit}")]
    ProvisionLimitExceeded { total: u32, limit: u32 },

    #[error("Deck length exceeded: {size} > {max}")]
    DeckTooLarge { size: usize, max: usize },

    #[error("Too few units: {units} < {min}")]
    TooFewUnits { units: usize, min: usize },

    #[error("Too many copies of {group} card '{name}': {copies} > {max}")]
    TooManyCopies {
        name: String,
        group: String,
        copies: usize,
        max: usize,
    },

    #[error("Card '{name}' faction not matching deck faction ({faction}, {secondary})")]
    FactionMismatch {
        name: String,
        faction: String,
        secondary: String,
    },
}

/// Composition limits for candidate decks. Independent of fitness scoring.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    params: RuleParams,
}

impl RuleSet {
    pub fn new(params: RuleParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &RuleParams {
        &self.params
    }

    /// Resolves the faction from the deck's leader ability, then checks it.
    pub fn check_with_factions(
        &self,
        deck: &Deck,
        factions: &[Faction],
    ) -> Result<(), RuleViolation> {
        let faction = Faction::for_leader(factions, &deck.leader_ability)
            .ok_or_else(|| RuleViolation::NoFactionForLeader(deck.leader_ability.clone()))?;
        self.check(deck, faction)
    }

    pub fn check(&self, deck: &Deck, faction: &Faction) -> Result<(), RuleViolation> {
        let p = &self.params;

        let bonus = faction.provision_bonus(&deck.leader_ability).ok_or_else(|| {
            RuleViolation::UnknownLeaderAbility {
                ability: deck.leader_ability.clone(),
                faction: faction.name.clone(),
            }
        })?;

        let limit = p.provision_base.saturating_add(bonus);
        let total = deck.total_provision();
        if total > limit {
            return Err(self.reject(RuleViolation::ProvisionLimitExceeded { total, limit }));
        }

        if deck.len() > p.max_deck_size {
            return Err(self.reject(RuleViolation::DeckTooLarge {
                size: deck.len(),
                max: p.max_deck_size,
            }));
        }

        let units = deck.cards.iter().filter(|c| c.is_unit()).count();
        if units < p.min_units {
            return Err(self.reject(RuleViolation::TooFewUnits {
                units,
                min: p.min_units,
            }));
        }

        let mut copies: FnvHashMap<CardId, usize> = FnvHashMap::default();
        for card in &deck.cards {
            *copies.entry(card.id).or_default() += 1;
        }

        for card in &deck.cards {
            let count = copies[&card.id];
            let max = match card.group {
                CardGroup::Bronze => Some(p.max_bronze_copies),
                CardGroup::Gold => Some(p.max_gold_copies),
                CardGroup::Other(_) => None,
            };
            if let Some(max) = max {
                if count > max {
                    return Err(self.reject(RuleViolation::TooManyCopies {
                        name: card.name.clone(),
                        group: card.group.to_string(),
                        copies: count,
                        max,
                    }));
                }
            }

            let own_faction = card.faction == faction.name
                || card.faction == NEUTRAL_FACTION
                || card.secondary_faction == faction.name;
            if !own_faction {
                return Err(self.reject(RuleViolation::FactionMismatch {
                    name: card.name.clone(),
                    faction: card.faction.clone(),
                    secondary: card.secondary_faction.clone(),
                }));
            }
        }

        Ok(())
    }

    fn reject(&self, violation: RuleViolation) -> RuleViolation {
        debug!("Deck rejected: {}", violation);
        violation
    }
}
