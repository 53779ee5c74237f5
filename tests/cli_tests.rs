//! CLI integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// The binary pointed at a config path that does not exist, so every run
/// sees the built-in defaults.
fn bookxchange(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("bookxchange");
    cmd.arg("--config").arg(dir.join("absent.toml"));
    cmd
}

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

const NEW_ACCOUNT_PURCHASE: &str = r#"{
    "buyerId": "reader",
    "itemId": "b1",
    "amount": 5000,
    "timestamp": "2026-03-01T12:00:00Z",
    "paymentMethod": "card",
    "accountAgeDays": 3
}"#;

#[test]
fn test_help() {
    cargo_bin_cmd!("bookxchange")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookxchange"))
        .stdout(predicate::str::contains("price"))
        .stdout(predicate::str::contains("screen"))
        .stdout(predicate::str::contains("recommend"))
        .stdout(predicate::str::contains("chat"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("bookxchange")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookxchange"));
}

#[test]
fn test_price_like_new_non_fiction() {
    let dir = tempfile::tempdir().unwrap();
    bookxchange(dir.path())
        .args(["price", "--condition", "Like New", "--genre", "Non-Fiction"])
        .assert()
        .success()
        .stdout(predicate::str::contains("360"));
}

#[test]
fn test_price_json_output() {
    let dir = tempfile::tempdir().unwrap();
    bookxchange(dir.path())
        .args(["--json", "price", "--condition", "Acceptable", "--genre", "Poetry"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type":"price""#))
        .stdout(predicate::str::contains(r#""price":90"#));
}

#[test]
fn test_price_unknown_condition_warns() {
    let dir = tempfile::tempdir().unwrap();
    bookxchange(dir.path())
        .args(["price", "--condition", "Pristine", "--genre", "Fiction"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown condition"))
        .stdout(predicate::str::contains("200"));
}

#[test]
fn test_price_rejects_out_of_range_demand() {
    let dir = tempfile::tempdir().unwrap();
    bookxchange(dir.path())
        .args(["price", "--condition", "Good", "--genre", "Fiction", "--demand", "150"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("demand score"));
}

#[test]
fn test_market_flag_conflicts_with_explicit_factors() {
    let dir = tempfile::tempdir().unwrap();
    bookxchange(dir.path())
        .args(["price", "--condition", "Good", "--genre", "Fiction", "--market", "--popular"])
        .assert()
        .failure();
}

#[test]
fn test_price_range_json() {
    let dir = tempfile::tempdir().unwrap();
    bookxchange(dir.path())
        .args(["--json", "price-range", "--condition", "Good", "--genre", "Fiction"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""min":170"#))
        .stdout(predicate::str::contains(r#""average":200"#))
        .stdout(predicate::str::contains(r#""max":230"#));
}

#[test]
fn test_screen_new_account_without_history() {
    let dir = tempfile::tempdir().unwrap();
    let tx = write(&dir, "tx.json", NEW_ACCOUNT_PURCHASE);

    bookxchange(dir.path())
        .args(["--json", "screen"])
        .arg(&tx)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""decision":"approved""#))
        .stdout(predicate::str::contains("new_account_high_value"));
}

#[test]
fn test_screen_with_burst_history_needs_review() {
    let dir = tempfile::tempdir().unwrap();
    let tx = write(&dir, "tx.json", NEW_ACCOUNT_PURCHASE);
    let history = write(
        &dir,
        "history.json",
        r#"[
            {"buyerId": "reader", "itemId": "a", "amount": 2000, "timestamp": "2026-03-01T11:50:00Z", "paymentMethod": "card"},
            {"buyerId": "reader", "itemId": "b", "amount": 2000, "timestamp": "2026-03-01T11:40:00Z", "paymentMethod": "card"},
            {"buyerId": "reader", "itemId": "c", "amount": 2000, "timestamp": "2026-03-01T11:30:00Z", "paymentMethod": "card"},
            {"buyerId": "reader", "itemId": "d", "amount": 2000, "timestamp": "2026-03-01T11:20:00Z", "paymentMethod": "card"}
        ]"#,
    );

    bookxchange(dir.path())
        .arg("screen")
        .arg(&tx)
        .arg("--history")
        .arg(&history)
        .assert()
        .success()
        .stdout(predicate::str::contains("needs review"))
        .stdout(predicate::str::contains("Multiple transactions in a short time period"));
}

#[test]
fn test_screen_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    bookxchange(dir.path())
        .arg("screen")
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_buy_requires_a_session_user() {
    let dir = tempfile::tempdir().unwrap();
    let tx = write(&dir, "tx.json", NEW_ACCOUNT_PURCHASE);

    bookxchange(dir.path())
        .arg("buy")
        .arg(&tx)
        .args(["--seller", "seller"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not authenticated"));
}

#[test]
fn test_chat_answers_from_the_knowledge_base() {
    let dir = tempfile::tempdir().unwrap();
    bookxchange(dir.path())
        .args(["chat", "hello", "there"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BookWorm"));
}

#[test]
fn test_recommend_on_empty_store_warns() {
    let dir = tempfile::tempdir().unwrap();
    bookxchange(dir.path())
        .arg("recommend")
        .assert()
        .success()
        .stdout(predicate::str::contains("empty"));
}

#[test]
fn test_config_show_defaults() {
    let dir = tempfile::tempdir().unwrap();
    bookxchange(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("showing defaults"))
        .stdout(predicate::str::contains("(anonymous)"));
}

#[test]
fn test_config_init_then_validate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("bookxchange.toml");

    cargo_bin_cmd!("bookxchange")
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    cargo_bin_cmd!("bookxchange")
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));

    cargo_bin_cmd!("bookxchange")
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_config_validate_reports_bad_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "bad.toml", "[recommendation]\npersonalized_limit = 0\n");

    cargo_bin_cmd!("bookxchange")
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("recommendation.personalized_limit"));
}

const SEED: &str = r#"{
    "books": [
        {"id": "p1", "title": "Gitanjali", "author": "Tagore", "genre": "Poetry", "condition": "Good", "price": 120, "ownerId": "reader-1"},
        {"id": "p2", "title": "Leaves of Grass", "author": "Whitman", "genre": "Poetry", "condition": "Fair", "price": 240},
        {"id": "f1", "title": "Emma", "author": "Austen", "genre": "Fiction", "condition": "Good", "price": 100}
    ]
}"#;

/// Config loading the seed catalog, optionally signed in as `user`.
fn seeded_config(dir: &TempDir, user: Option<&str>) -> PathBuf {
    let seed = write(dir, "seed.json", SEED);
    let mut config = format!("[store]\nseed_path = '{}'\n", seed.display());
    if let Some(user) = user {
        config.push_str(&format!("\n[session]\nuser_id = \"{user}\"\n"));
    }
    write(dir, "bookxchange.toml", &config)
}

#[test]
fn test_list_requires_a_session_user() {
    let dir = tempfile::tempdir().unwrap();
    bookxchange(dir.path())
        .args([
            "list", "--title", "Dune", "--author", "Herbert", "--condition", "Good", "--genre",
            "Science Fiction", "--price", "250",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not authenticated"));
}

#[test]
fn test_list_records_owner_for_signed_in_user() {
    let dir = tempfile::tempdir().unwrap();
    let config = seeded_config(&dir, Some("reader-1"));
    cargo_bin_cmd!("bookxchange")
        .arg("--config")
        .arg(&config)
        .args([
            "--json", "list", "--title", "Dune", "--author", "Herbert", "--condition", "Very Good",
            "--genre", "Science Fiction", "--price", "250", "--year", "1965",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type":"listing""#))
        .stdout(predicate::str::contains(r#""ownerId":"reader-1""#))
        .stdout(predicate::str::contains(r#""condition":"Very Good""#));
}

#[test]
fn test_list_rejects_unknown_condition_and_bad_price() {
    let dir = tempfile::tempdir().unwrap();
    let config = seeded_config(&dir, Some("reader-1"));
    cargo_bin_cmd!("bookxchange")
        .arg("--config")
        .arg(&config)
        .args([
            "list", "--title", "Dune", "--author", "Herbert", "--condition", "Mint", "--genre",
            "Fiction", "--price", "250",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown condition"));

    cargo_bin_cmd!("bookxchange")
        .arg("--config")
        .arg(&config)
        .args([
            "list", "--title", "Dune", "--author", "Herbert", "--condition", "Good", "--genre",
            "Fiction", "--price", "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("price must be positive"));
}

#[test]
fn test_browse_filters_by_genre_and_price() {
    let dir = tempfile::tempdir().unwrap();
    let config = seeded_config(&dir, None);
    cargo_bin_cmd!("bookxchange")
        .arg("--config")
        .arg(&config)
        .args(["--json", "browse", "--genre", "Poetry", "--max-price", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type":"catalog""#))
        .stdout(predicate::str::contains("Gitanjali"))
        .stdout(predicate::str::contains("Leaves of Grass").not())
        .stdout(predicate::str::contains("Emma").not());
}

#[test]
fn test_browse_pages_with_cursor() {
    let dir = tempfile::tempdir().unwrap();
    let config = seeded_config(&dir, None);
    cargo_bin_cmd!("bookxchange")
        .arg("--config")
        .arg(&config)
        .args(["browse", "-n", "2", "--after", "p1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Leaves of Grass"))
        .stdout(predicate::str::contains("Emma"))
        .stdout(predicate::str::contains("Gitanjali").not());
}

#[test]
fn test_browse_mine_shows_own_listings() {
    let dir = tempfile::tempdir().unwrap();
    let config = seeded_config(&dir, Some("reader-1"));
    cargo_bin_cmd!("bookxchange")
        .arg("--config")
        .arg(&config)
        .args(["browse", "--mine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gitanjali"))
        .stdout(predicate::str::contains("Emma").not());
}

#[test]
fn test_recommend_similar_to_unknown_listing_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = seeded_config(&dir, None);
    cargo_bin_cmd!("bookxchange")
        .arg("--config")
        .arg(&config)
        .args(["recommend", "--similar-to", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("books/nope not found"));
}
