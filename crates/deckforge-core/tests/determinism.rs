mod common;

use common::record;
use deckforge_core::corpus::Corpus;
use deckforge_core::model::DeckRecord;
use deckforge_core::stats::CorpusStatistics;
use deckforge_core::util::{file_digest, snapshot_fingerprint};
use deckforge_core::DeckForgeError;
use std::fs;
use tempfile::tempdir;

fn sample_records() -> Vec<DeckRecord> {
    let mut rng = fastrand::Rng::with_seed(42);
    (0..40)
        .map(|i| {
            let entries: Vec<(u32, u32)> = (0..rng.usize(5..20))
                .map(|_| (rng.u32(1..60), rng.u32(1..3)))
                .collect();
            record(&format!("L{}", i % 4), &format!("S{}", i % 3), &entries)
        })
        .collect()
}

#[test]
fn test_rebuild_is_bit_identical() {
    let corpus = Corpus::from_records(sample_records());

    let first = snapshot_fingerprint(&CorpusStatistics::build(&corpus).unwrap());
    for _ in 0..5 {
        let again = snapshot_fingerprint(&CorpusStatistics::build(&corpus).unwrap());
        assert_eq!(first, again, "Statistics changed between identical builds");
    }
}

#[test]
fn test_fingerprint_tracks_corpus_changes() {
    let records = sample_records();
    let base = Corpus::from_records(records.clone());

    let mut changed = records;
    changed[0].cards[0].count += 1;
    let changed = Corpus::from_records(changed);

    let a = snapshot_fingerprint(&CorpusStatistics::build(&base).unwrap());
    let b = snapshot_fingerprint(&CorpusStatistics::build(&changed).unwrap());
    assert_ne!(a, b);
    assert_eq!(a.len(), 64);
}

#[test]
fn test_file_digest_matches_sha256() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cards.csv");
    fs::write(&path, "abc").unwrap();

    assert_eq!(
        file_digest(&path).unwrap(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_file_digest_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = file_digest(dir.path().join("missing.csv")).unwrap_err();
    assert!(matches!(err, DeckForgeError::Io(_)));
}
