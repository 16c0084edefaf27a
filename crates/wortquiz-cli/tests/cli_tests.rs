//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wortquiz() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("wortquiz").unwrap()
}

const CSV: &str = "originalWord,translation,description,wordType,article,preposition,kasus,reflexive\n\
    Haus,house,,Nomen,Definit,,,\n\
    gehen,to go,,Verb,,nach,Dativ,false\n";

const ADJECTIVES_CSV: &str =
    "originalWord,translation,description,wordType,article,preposition,kasus,reflexive\n\
    schnell,fast,,Adjektiv,,,,\n\
    langsam,slow,,Adjektiv,,,,\n\
    gross,big,,Adjektiv,,,,\n\
    klein,small,,Adjektiv,,,,\n";

fn import_csv(dir: &TempDir, csv: &str) {
    std::fs::write(dir.path().join("words.csv"), csv).unwrap();
    wortquiz()
        .current_dir(dir.path())
        .args(["--data-dir", "data", "import", "--file", "words.csv"])
        .assert()
        .success();
}

#[test]
fn help_output() {
    wortquiz()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("German vocabulary trainer"));
}

#[test]
fn version_output() {
    wortquiz()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wortquiz"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    wortquiz()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created wortquiz.toml"));

    assert!(dir.path().join("wortquiz.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    // First init
    wortquiz()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    // Second init should skip
    wortquiz()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn import_csv_reports_counts() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("words.csv"), CSV).unwrap();

    wortquiz()
        .current_dir(dir.path())
        .args(["--data-dir", "data", "import", "--file", "words.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 words"));

    assert!(dir.path().join("data/words.json").exists());
    assert!(dir.path().join("data/wordLists.json").exists());
}

#[test]
fn import_reports_dropped_rows() {
    let dir = TempDir::new().unwrap();
    let csv = format!("{CSV}broken,row\n");
    std::fs::write(dir.path().join("words.csv"), csv).unwrap();

    wortquiz()
        .current_dir(dir.path())
        .args(["--data-dir", "data", "import", "--file", "words.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 rows dropped"))
        .stdout(predicate::str::contains("line 4"));
}

#[test]
fn import_nonexistent_file() {
    let dir = TempDir::new().unwrap();

    wortquiz()
        .current_dir(dir.path())
        .args(["--data-dir", "data", "import", "--file", "no_such.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn words_shows_the_collection() {
    let dir = TempDir::new().unwrap();
    import_csv(&dir, CSV);

    wortquiz()
        .current_dir(dir.path())
        .args(["--data-dir", "data", "words"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Haus"))
        .stdout(predicate::str::contains("house"))
        .stdout(predicate::str::contains("Meine erste Liste"))
        .stdout(predicate::str::contains("2 words"));
}

#[test]
fn words_search_filters() {
    let dir = TempDir::new().unwrap();
    import_csv(&dir, CSV);

    wortquiz()
        .current_dir(dir.path())
        .args(["--data-dir", "data", "words", "--search", "haus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Haus"))
        .stdout(predicate::str::contains("1 words"));
}

#[test]
fn words_empty_store_hint() {
    let dir = TempDir::new().unwrap();

    wortquiz()
        .current_dir(dir.path())
        .args(["--data-dir", "data", "words"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No words found"));
}

#[test]
fn words_unknown_list_errors() {
    let dir = TempDir::new().unwrap();
    import_csv(&dir, CSV);

    wortquiz()
        .current_dir(dir.path())
        .args(["--data-dir", "data", "words", "--list", "Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no list named"));
}

#[test]
fn add_then_duplicate() {
    let dir = TempDir::new().unwrap();

    wortquiz()
        .current_dir(dir.path())
        .args([
            "--data-dir",
            "data",
            "add",
            "--word",
            "See",
            "--translation",
            "lake",
            "--word-type",
            "Nomen",
            "--article",
            "Definit",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'See'."));

    wortquiz()
        .current_dir(dir.path())
        .args([
            "--data-dir",
            "data",
            "add",
            "--word",
            "see",
            "--translation",
            "to see",
            "--word-type",
            "Nomen",
            "--article",
            "Definit",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("already in this list"));
}

#[test]
fn add_rejects_mismatched_flags() {
    let dir = TempDir::new().unwrap();

    wortquiz()
        .current_dir(dir.path())
        .args([
            "--data-dir",
            "data",
            "add",
            "--word",
            "schnell",
            "--translation",
            "fast",
            "--word-type",
            "Adjektiv",
            "--article",
            "Definit",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only applies to nouns"));
}

#[test]
fn export_omits_progression() {
    let dir = TempDir::new().unwrap();
    import_csv(&dir, CSV);

    wortquiz()
        .current_dir(dir.path())
        .args(["--data-dir", "data", "export", "--output", "backup.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 words"));

    let backup = std::fs::read_to_string(dir.path().join("backup.json")).unwrap();
    let records: Vec<serde_json::Value> = serde_json::from_str(&backup).unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().any(|r| r["originalWord"] == "Haus"));
    assert!(records.iter().all(|r| r.get("progressionLevel").is_none()));
}

#[test]
fn json_restore_round_trip() {
    let dir = TempDir::new().unwrap();
    import_csv(&dir, CSV);

    wortquiz()
        .current_dir(dir.path())
        .args(["--data-dir", "data", "export", "--output", "backup.json"])
        .assert()
        .success();

    // Restore into a fresh data directory.
    wortquiz()
        .current_dir(dir.path())
        .args(["--data-dir", "data2", "import", "--file", "backup.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored 2 words"));

    wortquiz()
        .current_dir(dir.path())
        .args(["--data-dir", "data2", "words"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Haus"));
}

#[test]
fn lists_create_show_delete() {
    let dir = TempDir::new().unwrap();

    wortquiz()
        .current_dir(dir.path())
        .args(["--data-dir", "data", "lists", "create", "--name", "Verben"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created list 'Verben'"));

    wortquiz()
        .current_dir(dir.path())
        .args(["--data-dir", "data", "lists"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Verben"))
        .stdout(predicate::str::contains("Meine erste Liste"));

    std::fs::write(dir.path().join("words.csv"), CSV).unwrap();
    wortquiz()
        .current_dir(dir.path())
        .args([
            "--data-dir",
            "data",
            "import",
            "--file",
            "words.csv",
            "--list",
            "Verben",
        ])
        .assert()
        .success();

    wortquiz()
        .current_dir(dir.path())
        .args(["--data-dir", "data", "lists", "delete", "--list", "Verben"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 member words"));

    wortquiz()
        .current_dir(dir.path())
        .args(["--data-dir", "data", "words"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No words found"));
}

#[test]
fn progress_reset_counts() {
    let dir = TempDir::new().unwrap();
    import_csv(&dir, CSV);

    wortquiz()
        .current_dir(dir.path())
        .args(["--data-dir", "data", "progress", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset progression on 2 words"));
}

#[test]
fn drill_declines_small_pool() {
    let dir = TempDir::new().unwrap();
    import_csv(&dir, CSV);

    wortquiz()
        .current_dir(dir.path())
        .args(["--data-dir", "data", "drill"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not enough quizzable words"))
        .stdout(predicate::str::contains("Import more words first"));
}

#[test]
fn drill_full_session_records_stats() {
    let dir = TempDir::new().unwrap();
    import_csv(&dir, ADJECTIVES_CSV);

    wortquiz()
        .current_dir(dir.path())
        .args(["--data-dir", "data", "drill", "--seed", "7"])
        .write_stdin("1\n1\n1\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting a drill with 4 questions"))
        .stdout(predicate::str::contains("Done!"));

    wortquiz()
        .current_dir(dir.path())
        .args(["--data-dir", "data", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Drills taken"))
        .stdout(predicate::str::contains("Average score"));
}

#[test]
fn drill_quit_records_nothing() {
    let dir = TempDir::new().unwrap();
    import_csv(&dir, ADJECTIVES_CSV);

    wortquiz()
        .current_dir(dir.path())
        .args(["--data-dir", "data", "drill"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session abandoned"));

    wortquiz()
        .current_dir(dir.path())
        .args(["--data-dir", "data", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No drills taken yet"));
}

#[test]
fn stats_reset_clears() {
    let dir = TempDir::new().unwrap();

    wortquiz()
        .current_dir(dir.path())
        .args(["--data-dir", "data", "stats", "--reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Statistics cleared"));
}

#[tokio::test(flavor = "multi_thread")]
async fn sync_imports_from_mock_sources() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/version.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"version": 3}"#))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/words.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CSV))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = format!(
        "version_url = \"{0}/version.json\"\n\n[[sources]]\nname = \"Standard\"\nurl = \"{0}/words.csv\"\n",
        server.uri()
    );
    std::fs::write(dir.path().join("wortquiz.toml"), config).unwrap();

    wortquiz()
        .current_dir(dir.path())
        .args(["--data-dir", "data", "sync", "--config", "wortquiz.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Standard: 2 added"))
        .stdout(predicate::str::contains("Now at version 3"));

    // A second sync sees the stored watermark and does nothing.
    wortquiz()
        .current_dir(dir.path())
        .args(["--data-dir", "data", "sync", "--config", "wortquiz.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Up to date (version 3)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn sync_check_reports_pending_update() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/version.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"version": 9}"#))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = format!("version_url = \"{}/version.json\"\n", server.uri());
    std::fs::write(dir.path().join("wortquiz.toml"), config).unwrap();

    wortquiz()
        .current_dir(dir.path())
        .args([
            "--data-dir",
            "data",
            "sync",
            "--check",
            "--config",
            "wortquiz.toml",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Update available: local version 0, published 9",
        ));
}
