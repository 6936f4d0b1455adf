pub mod builder;
pub mod types;

pub use self::builder::EvaluatorBuildParams;
pub use self::types::FitnessDetails;

use crate::config::FitnessWeights;
use crate::corpus::Corpus;
use crate::error::DfResult;
use crate::model::{CardId, Deck};
use crate::stats::CorpusStatistics;
use fnv::FnvHashMap;
use std::path::Path;
use std::sync::Arc;

/// Scores candidate decks against a shared statistics snapshot.
///
/// `evaluate` is pure and total: unknown cards, leaders and stratagems simply
/// contribute nothing to the corpus-derived terms.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    stats: Arc<CorpusStatistics>,
    weights: FitnessWeights,
}

impl FitnessEvaluator {
    pub fn new<P: AsRef<Path>>(deck_dir: P, weights: FitnessWeights) -> DfResult<Self> {
        EvaluatorBuildParams::load_from_disk(deck_dir, Some(weights))
    }

    pub fn from_corpus(corpus: &Corpus, weights: FitnessWeights) -> DfResult<Self> {
        weights.validate()?;
        let stats = CorpusStatistics::build(corpus)?;
        Self::with_statistics(Arc::new(stats), weights)
    }

    /// Fails with `Config` when any weight is not finite.
    pub fn with_statistics(
        stats: Arc<CorpusStatistics>,
        weights: FitnessWeights,
    ) -> DfResult<Self> {
        weights.validate()?;
        Ok(Self { stats, weights })
    }

    pub fn statistics(&self) -> &Arc<CorpusStatistics> {
        &self.stats
    }

    pub fn weights(&self) -> &FitnessWeights {
        &self.weights
    }

    /// O(n²) in deck size; decks are capped at a few dozen cards.
    pub fn evaluate(&self, deck: &Deck) -> f64 {
        let ids: Vec<CardId> = deck.card_ids().collect();
        let frequency = copy_counts(&ids);
        let w = &self.weights;
        let stats = &*self.stats;

        let mut score = 0.0;
        for (i, &card_i) in ids.iter().enumerate() {
            score += w.weight_frequency * frequency[&card_i] as f64;
            score += w.weight_leader * stats.leader_affinity.get(card_i, &deck.leader_ability);
            score += w.weight_stratagem * stats.stratagem_affinity.get(card_i, &deck.stratagem);

            for &card_j in &ids[i + 1..] {
                if let Some(v) = stats.cooccurrence.get(card_i, card_j) {
                    score += w.weight_synergy * v;
                }
            }
        }
        score
    }

    pub fn evaluate_details(&self, deck: &Deck) -> FitnessDetails {
        let ids: Vec<CardId> = deck.card_ids().collect();
        let frequency = copy_counts(&ids);
        let stats = &*self.stats;

        let mut d = FitnessDetails {
            card_count: ids.len(),
            ..Default::default()
        };

        for (i, &card_i) in ids.iter().enumerate() {
            d.frequency += frequency[&card_i] as f64;
            d.leader += stats.leader_affinity.get(card_i, &deck.leader_ability);
            d.stratagem += stats.stratagem_affinity.get(card_i, &deck.stratagem);
            d.synergy += ids[i + 1..]
                .iter()
                .map(|&card_j| stats.cooccurrence.synergy(card_i, card_j))
                .sum::<f64>();
        }

        let w = &self.weights;
        d.frequency *= w.weight_frequency;
        d.leader *= w.weight_leader;
        d.stratagem *= w.weight_stratagem;
        d.synergy *= w.weight_synergy;
        d.total = d.frequency + d.leader + d.stratagem + d.synergy;
        d
    }
}

fn copy_counts(ids: &[CardId]) -> FnvHashMap<CardId, u32> {
    let mut counts = FnvHashMap::default();
    for &id in ids {
        *counts.entry(id).or_default() += 1;
    }
    counts
}
