//! Integration tests for entry commands

#![allow(deprecated)]

use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

mod common;
use common::moodlog_cmd;

fn init_journal() -> TempDir {
    let temp = TempDir::new().unwrap();
    moodlog_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

fn add(root: &Path, mood: &str, text: &str) -> String {
    let output = moodlog_cmd()
        .current_dir(root)
        .args(["add", "--mood", mood, text])
        .output()
        .unwrap();
    assert!(output.status.success(), "add failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    let start = stdout.find('[').unwrap() + 1;
    let end = stdout.find(']').unwrap();
    stdout[start..end].to_string()
}

fn stored(root: &Path) -> Vec<Value> {
    let raw = fs::read_to_string(root.join(".moodlog/entries.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn write_entries(root: &Path, raw: &str) {
    fs::write(root.join(".moodlog/entries.json"), raw).unwrap();
}

#[test]
fn test_add_persists_entry() {
    let temp = init_journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["add", "--mood", "😊", "  Good day  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 😊 Happy entry"));

    let entries = stored(temp.path());
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["mood"], "😊");
    assert_eq!(entries[0]["label"], "Happy");
    assert_eq!(entries[0]["text"], "Good day");
    assert!(entries[0]["date"].as_str().unwrap().ends_with('Z'));
    assert!(!entries[0]["id"].as_str().unwrap().is_empty());
}

#[test]
fn test_add_blank_text_rejected() {
    let temp = init_journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["add", "--mood", "happy", "   "])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Please select a mood and write something"));

    assert!(!temp.path().join(".moodlog/entries.json").exists());
}

#[test]
fn test_add_unknown_mood_rejected() {
    let temp = init_journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["add", "--mood", "ecstatic", "hello"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("moodlog moods"));
}

#[test]
fn test_today_lists_new_entries() {
    let temp = init_journal();
    add(temp.path(), "tired", "Long night");
    add(temp.path(), "relaxed", "Better now");

    let output = moodlog_cmd()
        .current_dir(temp.path())
        .arg("today")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let newer = stdout.find("Better now").unwrap();
    let older = stdout.find("Long night").unwrap();
    assert!(newer < older);
    assert!(stdout.contains("😴 Tired"));
}

#[test]
fn test_today_skips_older_days() {
    let temp = init_journal();
    write_entries(
        temp.path(),
        r#"[{"id":"1","date":"2001-01-01T12:00:00.000Z","mood":"😔","label":"Sad","text":"Long ago"}]"#,
    );

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("today")
        .assert()
        .success()
        .stdout(predicate::str::contains("No journal entries yet for today."));

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Long ago"));
}

#[test]
fn test_list_empty() {
    let temp = init_journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No journal entries yet."));
}

#[test]
fn test_list_sorted_newest_first_and_limited() {
    let temp = init_journal();
    write_entries(
        temp.path(),
        r#"[{"id":"2","date":"2025-06-28T12:00:00.000Z","mood":"😐","label":"Meh","text":"second"},{"id":"1","date":"2025-06-27T12:00:00.000Z","mood":"😐","label":"Meh","text":"first"},{"id":"3","date":"2025-06-29T12:00:00.000Z","mood":"😐","label":"Meh","text":"third"}]"#,
    );

    let output = moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let ids: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split('[').nth(1))
        .map(|rest| rest.trim_end_matches(']'))
        .collect();
    assert_eq!(ids, vec!["3", "2", "1"]);

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["list", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("third"))
        .stdout(predicate::str::contains("second").not());
}

#[test]
fn test_list_truncates_long_text() {
    let temp = init_journal();
    let long = "a".repeat(80);
    add(temp.path(), "happy", &long);

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{} …", "a".repeat(60))))
        .stdout(predicate::str::contains("a".repeat(61)).not());

    let id = stored(temp.path())[0]["id"].as_str().unwrap().to_string();
    moodlog_cmd()
        .current_dir(temp.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(long));
}

#[test]
fn test_edit_changes_only_text() {
    let temp = init_journal();
    let id = add(temp.path(), "anxious", "Big meeting");
    let other = add(temp.path(), "happy", "Lunch was nice");
    let before = stored(temp.path());

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["edit", &id, "--text", "Meeting went fine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved entry"));

    let after = stored(temp.path());
    let edited = after.iter().find(|e| e["id"] == id.as_str()).unwrap();
    let original = before.iter().find(|e| e["id"] == id.as_str()).unwrap();
    assert_eq!(edited["text"], "Meeting went fine");
    assert_eq!(edited["date"], original["date"]);
    assert_eq!(edited["mood"], original["mood"]);
    assert_eq!(edited["label"], original["label"]);

    let untouched_before = before.iter().find(|e| e["id"] == other.as_str());
    let untouched_after = after.iter().find(|e| e["id"] == other.as_str());
    assert_eq!(untouched_before, untouched_after);
}

#[test]
fn test_edit_same_text_is_no_change() {
    let temp = init_journal();
    let id = add(temp.path(), "meh", "Fine");

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["edit", &id, "--text", "Fine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes"));
}

#[test]
fn test_edit_missing_entry() {
    let temp = init_journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["edit", "404", "--text", "anything"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Entry not found"));
}

#[test]
fn test_delete_declined_keeps_entry() {
    let temp = init_journal();
    let id = add(temp.path(), "sad", "Rainy");

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["delete", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Are you sure you want to delete this entry?"))
        .stdout(predicate::str::contains("Kept entry"));

    assert_eq!(stored(temp.path()).len(), 1);
}

#[test]
fn test_delete_confirmed_on_stdin() {
    let temp = init_journal();
    let id = add(temp.path(), "sad", "Rainy");
    add(temp.path(), "happy", "Sunny");

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["delete", &id])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry"));

    let entries = stored(temp.path());
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["text"], "Sunny");
}

#[test]
fn test_clear_removes_record() {
    let temp = init_journal();
    add(temp.path(), "happy", "one");
    add(temp.path(), "happy", "two");

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All entries have been removed."));

    assert!(!temp.path().join(".moodlog/entries.json").exists());

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No journal entries yet."));
}

#[test]
fn test_clear_without_confirmation_keeps_entries() {
    let temp = init_journal();
    add(temp.path(), "happy", "one");

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing was cleared."));

    assert_eq!(stored(temp.path()).len(), 1);
}

#[test]
fn test_corrupt_store_reported() {
    let temp = init_journal();
    write_entries(temp.path(), "[{broken");

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("could not be read"));

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["add", "--mood", "happy", "new"])
        .assert()
        .code(5);

    let raw = fs::read_to_string(temp.path().join(".moodlog/entries.json")).unwrap();
    assert_eq!(raw, "[{broken");
}

#[test]
fn test_moods_palette() {
    moodlog_cmd()
        .arg("moods")
        .assert()
        .success()
        .stdout(predicate::str::contains("Positive"))
        .stdout(predicate::str::contains("😶‍🌫️ Numb"))
        .stdout(predicate::str::contains("😩 Overwhelmed"));
}
