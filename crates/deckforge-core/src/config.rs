use crate::error::{DeckForgeError, DfResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub weights: FitnessWeights,
    #[command(flatten)]
    pub rules: RuleParams,
}

/// Multipliers for the four term families of the fitness sum.
/// All 1.0 reproduces the plain unweighted score.
#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FitnessWeights {
    #[arg(long, default_value_t = 1.0)]
    pub weight_frequency: f64,
    #[arg(long, default_value_t = 1.0)]
    pub weight_leader: f64,
    #[arg(long, default_value_t = 1.0)]
    pub weight_stratagem: f64,
    #[arg(long, default_value_t = 1.0)]
    pub weight_synergy: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            weight_frequency: 1.0,
            weight_leader: 1.0,
            weight_stratagem: 1.0,
            weight_synergy: 1.0,
        }
    }
}

impl FitnessWeights {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DeckForgeError::Config(format!("Failed to read weights file {:?}: {}", path, e))
        })?;

        let weights: FitnessWeights = serde_json::from_str(&content)?;
        weights.validate()?;
        Ok(weights)
    }

    pub fn validate(&self) -> DfResult<()> {
        let all = [
            ("weight_frequency", self.weight_frequency),
            ("weight_leader", self.weight_leader),
            ("weight_stratagem", self.weight_stratagem),
            ("weight_synergy", self.weight_synergy),
        ];
        for (name, value) in all {
            if !value.is_finite() {
                return Err(DeckForgeError::Config(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    pub fn merge_from_cli(&mut self, cli_weights: &FitnessWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field;
                }
            };
        }

        update_if_present!(weight_frequency, "weight_frequency");
        update_if_present!(weight_leader, "weight_leader");
        update_if_present!(weight_stratagem, "weight_stratagem");
        update_if_present!(weight_synergy, "weight_synergy");
    }
}

/// Deck composition limits checked by [`crate::rules::RuleSet`].
#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RuleParams {
    // Added to the leader ability's own provision bonus
    #[arg(long, default_value_t = 150)]
    pub provision_base: u32,
    #[arg(long, default_value_t = 25)]
    pub max_deck_size: usize,
    #[arg(long, default_value_t = 13)]
    pub min_units: usize,
    #[arg(long, default_value_t = 2)]
    pub max_bronze_copies: usize,
    #[arg(long, default_value_t = 1)]
    pub max_gold_copies: usize,
}

impl Default for RuleParams {
    fn default() -> Self {
        Self {
            provision_base: 150,
            max_deck_size: 25,
            min_units: 13,
            max_bronze_copies: 2,
            max_gold_copies: 1,
        }
    }
}
