mod common;

use common::{record, CardBuilder};
use deckforge_core::config::{FitnessWeights, RuleParams};
use deckforge_core::corpus::Corpus;
use deckforge_core::model::{Card, CardId, Deck, Faction};
use deckforge_core::ranker::rank_candidates;
use deckforge_core::rules::RuleSet;
use deckforge_core::FitnessEvaluator;

fn cards(ids: &[CardId]) -> Vec<Card> {
    ids.iter()
        .map(|&id| CardBuilder::new(id).faction("monsters").build())
        .collect()
}

fn setup() -> (FitnessEvaluator, RuleSet, Vec<Faction>) {
    let corpus = Corpus::from_records(vec![
        record("Carapace", "S1", &[(1, 2), (2, 1), (3, 1)]),
        record("Carapace", "S1", &[(1, 1), (2, 1)]),
    ]);
    let ev = FitnessEvaluator::from_corpus(&corpus, FitnessWeights::default()).unwrap();
    let rules = RuleSet::new(RuleParams {
        min_units: 1,
        ..Default::default()
    });
    let factions = vec![Faction::new("monsters", &[("Carapace", 15)])];
    (ev, rules, factions)
}

#[test]
fn test_rank_orders_by_score_then_rejects() {
    let (ev, rules, factions) = setup();
    let candidates = vec![
        ("weak".to_string(), Deck::new("Carapace", "S1", cards(&[3]))),
        ("illegal".to_string(), Deck::new("Nobody", "S1", cards(&[1]))),
        ("strong".to_string(), Deck::new("Carapace", "S1", cards(&[1, 2, 3]))),
    ];

    let ranked = rank_candidates(&ev, &rules, &factions, candidates);
    let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();

    assert_eq!(names, vec!["strong", "weak", "illegal"]);
    assert!(ranked[0].score().unwrap() > ranked[1].score().unwrap());
    assert!(!ranked[2].is_accepted());
    assert!(ranked[2].rejection.as_deref().unwrap().contains("Nobody"));
}

#[test]
fn test_rank_ties_break_by_name() {
    let (ev, rules, factions) = setup();
    let candidates = vec![
        ("b".to_string(), Deck::new("Carapace", "S1", cards(&[2]))),
        ("a".to_string(), Deck::new("Carapace", "S1", cards(&[2]))),
        ("z-bad".to_string(), Deck::new("X", "S1", cards(&[2]))),
        ("y-bad".to_string(), Deck::new("X", "S1", cards(&[2]))),
    ];

    let ranked = rank_candidates(&ev, &rules, &factions, candidates);
    let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();

    assert_eq!(names, vec!["a", "b", "y-bad", "z-bad"]);
}

#[test]
fn test_ranked_score_matches_evaluator() {
    let (ev, rules, factions) = setup();
    let deck = Deck::new("Carapace", "S1", cards(&[1, 2]));
    let expected = ev.evaluate(&deck);

    let ranked = rank_candidates(&ev, &rules, &factions, vec![("d".to_string(), deck)]);
    assert!((ranked[0].score().unwrap() - expected).abs() < 1e-9);
}

#[test]
fn test_ranked_deck_serializes_camel_case() {
    let (ev, rules, factions) = setup();
    let ranked = rank_candidates(
        &ev,
        &rules,
        &factions,
        vec![("d".to_string(), Deck::new("Carapace", "S1", cards(&[1])))],
    );

    let json = serde_json::to_value(&ranked[0]).unwrap();
    assert_eq!(json["name"], "d");
    assert_eq!(json["details"]["cardCount"], 1);
    assert!(json["rejection"].is_null());
}
