//! Integration tests for the `ncw` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FLOODING: &str = r#"[
  {
    "condition": "Flooding",
    "originalDuration": "4 Days",
    "daysRemaining": 2,
    "startDate": "2026-10-14"
  }
]"#;

fn ledger_in(dir: &TempDir) -> PathBuf {
    dir.path().join("ongoing_events.json")
}

/// `ncw` with a clean environment, pointed at `ledger`.
fn ncw(ledger: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ncw").unwrap();
    for key in [
        "NCWR_LEDGER_PATH",
        "NCWR_POST_TIME",
        "NCWR_WEBHOOK_URL",
        "NCWR_SEED",
        "NCWR_YEAR",
        "NCWR_STORE_ATTEMPTS",
    ] {
        cmd.env_remove(key);
    }
    cmd.env("NO_COLOR", "1");
    cmd.arg("--ledger").arg(ledger);
    cmd
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_prints_report() {
    let dir = TempDir::new().unwrap();
    ncw(&ledger_in(&dir))
        .args(["roll", "--seed", "7", "--date", "2026-10-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NCWR - NIGHT CITY WEATHER REPORT"))
        .stdout(predicate::str::contains("Friday, October 16, 2047"))
        .stdout(predicate::str::contains("NCWR • Fall • Time of the Red"))
        .stdout(predicate::str::is_match(r"severity: +[a-z]+ #[0-9A-F]{6}").unwrap());
}

#[test]
fn roll_is_reproducible_with_seed() {
    let run = || {
        let dir = TempDir::new().unwrap();
        let output = ncw(&ledger_in(&dir))
            .args(["roll", "--seed", "42", "--date", "2026-01-05"])
            .output()
            .unwrap();
        assert!(output.status.success());
        output.stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn roll_json() {
    let dir = TempDir::new().unwrap();
    let output = ncw(&ledger_in(&dir))
        .args(["roll", "--json", "--seed", "1", "--date", "2026-07-04"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["footer"], "NCWR • Summer • Time of the Red");
    assert_eq!(report["broadcast_date"], "Saturday, July 4, 2047");
    assert!(report["temperature"].is_string());
}

#[test]
fn year_comes_from_environment() {
    let dir = TempDir::new().unwrap();
    ncw(&ledger_in(&dir))
        .env("NCWR_YEAR", "2045")
        .args(["roll", "--date", "2026-10-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Friday, October 16, 2045"));
}

#[test]
fn roll_reports_continuing_events() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_in(&dir);
    fs::write(&ledger, FLOODING).unwrap();

    ncw(&ledger)
        .args(["roll", "--date", "2026-10-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flooding - 2 days remaining"));
}

#[test]
fn bad_date_is_rejected() {
    let dir = TempDir::new().unwrap();
    ncw(&ledger_in(&dir))
        .args(["roll", "--date", "yesterday"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// daily
// ---------------------------------------------------------------------------

#[test]
fn daily_prints_greeting() {
    let dir = TempDir::new().unwrap();
    ncw(&ledger_in(&dir))
        .args(["daily", "--date", "2026-10-16"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("🌅 **Good morning, Night City!**"))
        .stdout(predicate::str::contains("NCWR - NIGHT CITY WEATHER REPORT"));
}

#[test]
fn daily_decays_once_per_day() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_in(&dir);
    fs::write(&ledger, FLOODING).unwrap();

    for _ in 0..2 {
        ncw(&ledger)
            .args(["daily", "--date", "2026-10-16"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Flooding - 2 days remaining"));
    }

    ncw(&ledger)
        .arg("events")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 day"));
}

#[test]
fn daily_deliver_requires_webhook() {
    let dir = TempDir::new().unwrap();
    ncw(&ledger_in(&dir))
        .args(["daily", "--deliver"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NCWR_WEBHOOK_URL"));
}

// ---------------------------------------------------------------------------
// chat
// ---------------------------------------------------------------------------

#[test]
fn chat_help() {
    let dir = TempDir::new().unwrap();
    ncw(&ledger_in(&dir))
        .arg("chat")
        .write_stdin("!weather help\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Night City Weather Bot Commands"))
        .stdout(predicate::str::contains("at 8 AM daily"));
}

#[test]
fn chat_help_uses_post_time() {
    let dir = TempDir::new().unwrap();
    ncw(&ledger_in(&dir))
        .env("NCWR_POST_TIME", "06:30")
        .arg("chat")
        .write_stdin("!WEATHER HELP\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("at 6:30 AM daily"));
}

#[test]
fn chat_ignores_other_messages() {
    let dir = TempDir::new().unwrap();
    ncw(&ledger_in(&dir))
        .arg("chat")
        .write_stdin("hello\nwhat is the weather\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn chat_weather_rolls_report() {
    let dir = TempDir::new().unwrap();
    ncw(&ledger_in(&dir))
        .args(["chat", "--seed", "3"])
        .write_stdin("  !weather \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("NCWR - NIGHT CITY WEATHER REPORT"));
}

// ---------------------------------------------------------------------------
// events
// ---------------------------------------------------------------------------

#[test]
fn events_empty_ledger() {
    let dir = TempDir::new().unwrap();
    ncw(&ledger_in(&dir))
        .arg("events")
        .assert()
        .success()
        .stdout(predicate::str::contains("No ongoing events"));
}

#[test]
fn events_lists_without_decaying() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_in(&dir);
    fs::write(&ledger, FLOODING).unwrap();

    for _ in 0..2 {
        ncw(&ledger)
            .arg("events")
            .assert()
            .success()
            .stdout(predicate::str::contains("Flooding"))
            .stdout(predicate::str::contains("2 days"))
            .stdout(predicate::str::contains("2026-10-14"));
    }
}

#[test]
fn corrupt_ledger_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_in(&dir);
    fs::write(&ledger, "not json").unwrap();

    ncw(&ledger)
        .arg("events")
        .assert()
        .success()
        .stdout(predicate::str::contains("No ongoing events"));
}

// ---------------------------------------------------------------------------
// configuration
// ---------------------------------------------------------------------------

#[test]
fn invalid_post_time_fails() {
    let dir = TempDir::new().unwrap();
    ncw(&ledger_in(&dir))
        .env("NCWR_POST_TIME", "8am")
        .arg("events")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid post time"));
}
