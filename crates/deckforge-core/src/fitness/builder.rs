use super::FitnessEvaluator;
use crate::config::FitnessWeights;
use crate::corpus::Corpus;
use crate::error::DfResult;
use crate::stats::CorpusStatistics;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct EvaluatorBuildParams {
    #[builder(default)]
    pub weights: FitnessWeights,
    pub corpus: Corpus,
}

impl EvaluatorBuildParams {
    pub fn load_from_disk<P: AsRef<Path>>(
        deck_dir: P,
        weights: Option<FitnessWeights>,
    ) -> DfResult<FitnessEvaluator> {
        let corpus = Corpus::load_from_dir(deck_dir)?;

        EvaluatorBuildParams::builder()
            .weights(weights.unwrap_or_default())
            .corpus(corpus)
            .build()
            .build_evaluator()
    }

    pub fn build_evaluator(self) -> DfResult<FitnessEvaluator> {
        self.weights.validate()?;
        let stats = CorpusStatistics::build(&self.corpus)?;

        info!(
            "✅ Evaluator Initialized. Cards: {}, Pairs: {}",
            stats.occurrences.len(),
            stats.cooccurrence.len()
        );

        FitnessEvaluator::with_statistics(Arc::new(stats), self.weights)
    }
}
