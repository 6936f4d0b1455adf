use crate::fitness::{FitnessDetails, FitnessEvaluator};
use crate::model::{Deck, Faction};
use crate::rules::RuleSet;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::info;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RankedDeck {
    pub name: String,
    pub details: Option<FitnessDetails>,
    pub rejection: Option<String>,
}

impl RankedDeck {
    pub fn is_accepted(&self) -> bool {
        self.details.is_some()
    }

    pub fn score(&self) -> Option<f64> {
        self.details.map(|d| d.total)
    }
}

/// Validates and scores named candidates in parallel.
///
/// Legal decks come first by descending fitness (ties by name), followed by
/// rejected decks by name.
pub fn rank_candidates(
    evaluator: &FitnessEvaluator,
    rules: &RuleSet,
    factions: &[Faction],
    candidates: Vec<(String, Deck)>,
) -> Vec<RankedDeck> {
    let mut ranked: Vec<RankedDeck> = candidates
        .into_par_iter()
        .map(|(name, deck)| match rules.check_with_factions(&deck, factions) {
            Ok(()) => RankedDeck {
                name,
                details: Some(evaluator.evaluate_details(&deck)),
                rejection: None,
            },
            Err(violation) => RankedDeck {
                name,
                details: None,
                rejection: Some(violation.to_string()),
            },
        })
        .collect();

    ranked.sort_by(compare_ranked);

    let accepted = ranked.iter().filter(|r| r.is_accepted()).count();
    info!(
        "🏁 Ranked {} candidates: {} accepted, {} rejected",
        ranked.len(),
        accepted,
        ranked.len() - accepted
    );

    ranked
}

fn compare_ranked(a: &RankedDeck, b: &RankedDeck) -> Ordering {
    match (a.score(), b.score()) {
        (Some(x), Some(y)) => y.total_cmp(&x).then_with(|| a.name.cmp(&b.name)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.name.cmp(&b.name),
    }
}
