use serde::{Deserialize, Serialize};

/// Per-term breakdown of a fitness evaluation. Every term is already weighted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitnessDetails {
    pub total: f64,

    // Sum over copies of the copy's in-deck count
    pub frequency: f64,
    pub leader: f64,
    pub stratagem: f64,
    pub synergy: f64,

    pub card_count: usize,
}
