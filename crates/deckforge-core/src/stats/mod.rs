pub mod affinity;
pub mod cooccurrence;
pub mod occurrence;

pub use self::affinity::{AffinityKind, AffinityTable};
pub use self::cooccurrence::{CardPair, CooccurrenceMatrix};
pub use self::occurrence::{NormalizedOccurrenceTable, OccurrenceTable};

use crate::corpus::Corpus;
use crate::error::DfResult;
use tracing::{debug, info};

/// Immutable statistics snapshot mined from one corpus.
///
/// Built once, then only read. Share it across evaluators and threads
/// behind an `Arc`; to refresh, build a new snapshot.
#[derive(Debug, Clone)]
pub struct CorpusStatistics {
    pub deck_count: usize,
    pub occurrences: OccurrenceTable,
    pub normalized: NormalizedOccurrenceTable,
    pub cooccurrence: CooccurrenceMatrix,
    pub leader_affinity: AffinityTable,
    pub stratagem_affinity: AffinityTable,
}

impl CorpusStatistics {
    /// Fails with `EmptyCorpus` when the corpus holds no card copies.
    pub fn build(corpus: &Corpus) -> DfResult<Self> {
        info!("📊 Building statistics from {} decks", corpus.len());

        let occurrences = OccurrenceTable::aggregate(corpus);
        let normalized = occurrences.normalize()?;
        let cooccurrence = CooccurrenceMatrix::build(corpus, &occurrences);
        let leader_affinity = AffinityTable::build(corpus, AffinityKind::Leader);
        let stratagem_affinity = AffinityTable::build(corpus, AffinityKind::Stratagem);

        debug!(
            "Statistics: {} cards, {} pairs, {} leader rows, {} stratagem rows",
            occurrences.len(),
            cooccurrence.len(),
            leader_affinity.len(),
            stratagem_affinity.len()
        );

        Ok(Self {
            deck_count: corpus.len(),
            occurrences,
            normalized,
            cooccurrence,
            leader_affinity,
            stratagem_affinity,
        })
    }

    pub fn affinity(&self, kind: AffinityKind) -> &AffinityTable {
        match kind {
            AffinityKind::Leader => &self.leader_affinity,
            AffinityKind::Stratagem => &self.stratagem_affinity,
        }
    }
}
