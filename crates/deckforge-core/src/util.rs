use crate::error::DfResult;
use crate::stats::{AffinityKind, CorpusStatistics};
use itertools::Itertools;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use strum::IntoEnumIterator;

/// Hex SHA-256 of a data file's bytes, used to tag which catalog a report came from.
pub fn file_digest<P: AsRef<Path>>(path: P) -> DfResult<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut hasher = Sha256::new();
    io::copy(&mut reader, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

/// SHA-256 over every table in key order, using exact f64 bit patterns.
/// Equal fingerprints mean bit-identical statistics.
pub fn snapshot_fingerprint(stats: &CorpusStatistics) -> String {
    let mut hasher = Sha256::new();
    hasher.update((stats.deck_count as u64).to_le_bytes());

    for (id, count) in stats.occurrences.iter().sorted_by_key(|(id, _)| *id) {
        hasher.update(id.to_le_bytes());
        hasher.update(count.to_le_bytes());
    }

    for (id, value) in stats.normalized.iter().sorted_by_key(|(id, _)| *id) {
        hasher.update(id.to_le_bytes());
        hasher.update(value.to_bits().to_le_bytes());
    }

    for ((a, b), value) in stats.cooccurrence.iter().sorted_by_key(|(pair, _)| *pair) {
        hasher.update(a.to_le_bytes());
        hasher.update(b.to_le_bytes());
        hasher.update(value.to_bits().to_le_bytes());
    }

    for kind in AffinityKind::iter() {
        hasher.update(kind.to_string().as_bytes());
        for (id, shares) in stats.affinity(kind).iter().sorted_by_key(|(id, _)| *id) {
            hasher.update(id.to_le_bytes());
            for (category, value) in shares {
                hasher.update(category.as_bytes());
                hasher.update([0u8]);
                hasher.update(value.to_bits().to_le_bytes());
            }
        }
    }

    hex::encode(hasher.finalize())
}
