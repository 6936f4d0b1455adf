use assert_cmd::Command;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CATALOG_CSV: &str = "\
id,name,provision,group,type,faction,secondary_faction
1,Ciri,9,gold,unit,neutral,
2,Nekker,4,bronze,unit,monsters,
3,Ghoul,5,bronze,unit,monsters,
4,Geralt,10,gold,unit,skellige,
";

struct TestContext {
    dir: TempDir,
    decks: PathBuf,
    catalog: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let decks = dir.path().join("decks");
        fs::create_dir(&decks).unwrap();

        fs::write(
            decks.join("a.json"),
            r#"{"Leader":"Carapace","Stratagem":"S1","Cards":[{"id":1,"count":2},{"id":2,"count":1}]}"#,
        )
        .unwrap();
        fs::write(
            decks.join("b.json"),
            r#"{"Leader":"Carapace","Stratagem":"S2","Cards":[{"id":1,"count":1},{"id":2,"count":1}]}"#,
        )
        .unwrap();

        let catalog = dir.path().join("cards.csv");
        fs::write(&catalog, CATALOG_CSV).unwrap();

        Self {
            dir,
            decks,
            catalog,
        }
    }

    fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("deckforge").unwrap();
        cmd.arg("--decks")
            .arg(&self.decks)
            .arg("--catalog")
            .arg(&self.catalog);
        cmd
    }
}

fn strip_ansi(s: &str) -> String {
    let re = Regex::new(r"\x1b\[[0-9;]*m").unwrap();
    re.replace_all(s, "").to_string()
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to execute binary");
    if !output.status.success() {
        eprintln!("STDERR:\n{}", String::from_utf8_lossy(&output.stderr));
        panic!("Binary failed");
    }
    strip_ansi(&String::from_utf8_lossy(&output.stdout))
}

/// Total column of the row whose first cell is `deck`.
fn total_for(stdout: &str, deck: &str) -> Option<f64> {
    stdout.lines().find_map(|line| {
        let parts: Vec<&str> = line.split('|').map(str::trim).collect();
        if parts.len() > 3 && parts[1] == deck {
            parts[2].parse().ok()
        } else {
            None
        }
    })
}

fn path_arg(p: &Path) -> &str {
    p.to_str().unwrap()
}

#[test]
fn test_score_reference_deck() {
    let ctx = TestContext::new();
    let deck = ctx.write(
        "candidate.json",
        r#"{"Leader":"Carapace","Stratagem":"S1","Cards":[{"id":1},{"id":2}]}"#,
    );

    let stdout = stdout_of(ctx.cmd().arg("score").arg(path_arg(&deck)));
    let total = total_for(&stdout, "candidate").expect("No scoring row");

    assert!((total - 5.833).abs() < 1e-3, "got {}", total);
}

#[test]
fn test_score_weight_flag_overrides_file() {
    let ctx = TestContext::new();
    let deck = ctx.write(
        "candidate.json",
        r#"{"Leader":"Carapace","Stratagem":"S1","Cards":[{"id":1},{"id":2}]}"#,
    );
    let weights = ctx.write(
        "weights.json",
        r#"{"weight_frequency": 0.0, "weight_leader": 0.0, "weight_stratagem": 0.0, "weight_synergy": 0.0}"#,
    );

    let stdout = stdout_of(
        ctx.cmd()
            .arg("--weights")
            .arg(path_arg(&weights))
            .arg("score")
            .arg("--weight-frequency")
            .arg("1.5")
            .arg(path_arg(&deck)),
    );

    // Only the frequency term survives: 1.5 * (1 + 1).
    let total = total_for(&stdout, "candidate").expect("No scoring row");
    assert!((total - 3.0).abs() < 1e-3, "got {}", total);
}

#[test]
fn test_score_rejects_nan_weight_flag() {
    let ctx = TestContext::new();
    let deck = ctx.write(
        "candidate.json",
        r#"{"Leader":"Carapace","Stratagem":"S1","Cards":[{"id":1},{"id":2}]}"#,
    );

    ctx.cmd()
        .arg("score")
        .arg("--weight-synergy")
        .arg("NaN")
        .arg(path_arg(&deck))
        .assert()
        .failure();
}

#[test]
fn test_rank_json_orders_and_rejects() {
    let ctx = TestContext::new();
    ctx.write(
        "candidates/good.json",
        r#"{"Leader":"Carapace","Stratagem":"S1","Cards":[{"id":1},{"id":2},{"id":3}]}"#,
    );
    ctx.write(
        "candidates/meh.json",
        r#"{"Leader":"Carapace","Stratagem":"S1","Cards":[{"id":3}]}"#,
    );
    ctx.write(
        "candidates/foreign.json",
        r#"{"Leader":"Carapace","Stratagem":"S1","Cards":[{"id":4}]}"#,
    );

    let stdout = stdout_of(
        ctx.cmd()
            .arg("rank")
            .arg("--min-units")
            .arg("1")
            .arg("--json")
            .arg(path_arg(&ctx.dir.path().join("candidates"))),
    );

    let ranked: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON");
    let names: Vec<&str> = ranked
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["good", "meh", "foreign"]);
    assert!(ranked[2]["rejection"]
        .as_str()
        .unwrap()
        .contains("Geralt"));
}

#[test]
fn test_rank_default_rules_reject_small_decks() {
    let ctx = TestContext::new();
    ctx.write(
        "candidates/tiny.json",
        r#"{"Leader":"Carapace","Stratagem":"S1","Cards":[{"id":1}]}"#,
    );

    let stdout = stdout_of(
        ctx.cmd()
            .arg("rank")
            .arg(path_arg(&ctx.dir.path().join("candidates"))),
    );

    assert!(stdout.contains("tiny"));
    assert!(stdout.contains("Too few units"), "{}", stdout);
}

#[test]
fn test_inspect_card() {
    let ctx = TestContext::new();
    let stdout = stdout_of(ctx.cmd().arg("inspect").arg("--card").arg("1"));

    assert!(stdout.contains("Decks:        2"));
    assert!(stdout.contains("Ciri (#1): 3 copies"));
    assert!(stdout.contains("Nekker"));
    assert!(stdout.contains("66.7%"), "{}", stdout);
}

#[test]
fn test_inspect_fingerprint_is_stable() {
    let ctx = TestContext::new();
    let fingerprint = |out: &str| {
        out.lines()
            .find(|l| l.starts_with("Fingerprint:"))
            .map(|l| l.to_string())
            .expect("No fingerprint line")
    };

    let first = stdout_of(ctx.cmd().arg("inspect"));
    let second = stdout_of(ctx.cmd().arg("inspect"));
    assert_eq!(fingerprint(&first), fingerprint(&second));
}

#[test]
fn test_show_seeded_deck() {
    let ctx = TestContext::new();
    let stdout = stdout_of(ctx.cmd().arg("show").arg("--seed").arg("3"));

    assert!(stdout.contains("Carapace"));
    assert!(stdout.contains("Ciri"));
}

#[test]
fn test_missing_deck_dir_fails() {
    let ctx = TestContext::new();
    Command::cargo_bin("deckforge")
        .unwrap()
        .arg("--decks")
        .arg(path_arg(&ctx.dir.path().join("missing")))
        .arg("inspect")
        .assert()
        .failure();
}

#[test]
fn test_empty_corpus_fails() {
    let ctx = TestContext::new();
    let empty = ctx.dir.path().join("empty");
    fs::create_dir(&empty).unwrap();

    Command::cargo_bin("deckforge")
        .unwrap()
        .arg("--decks")
        .arg(path_arg(&empty))
        .arg("inspect")
        .assert()
        .failure();
}
