//! CLI integration tests
//!
//! These tests spawn the built `sinophone` binary against definition files
//! written to a temporary directory.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

const WU: &str = r#"
[display]
color = false

[[syllables]]
initial = "k"
nucleus = "ɐ"
coda = "ʔ"
tone = "˥˥"

[[syllables]]
initial = "l"
nucleus = "o"
coda = "ŋ"
tone = "˨˧"

[[syllables]]
initial = "b"
nucleus = "o"
tone = "˨˧"

[[constraints]]
acceptability = { existent = false, grammatical = false }
pattern = { Initial = ["-nasal -lateral-approximant +voiced"], Tone = ["+extra-high-level"] }

[[rules]]
target = { kind = "Nucleus", ipa = "o" }
replacement = "ʊ̃"
pattern = { Final = ["+nasal"] }
"#;

fn write_definition(temp_dir: &TempDir, text: &str) -> PathBuf {
    let path = temp_dir.path().join("wuu.toml");
    fs::write(&path, text).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sinophone"))
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_cli_inventory_lists_sections() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_definition(&temp_dir, WU);

    let output = run(&["inventory", path.to_str().unwrap(), "--no-color"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("Phonology: "));
    assert!(text.contains("Initial (3): b k l"));
    assert!(text.contains("Tone (2):"));
}

#[test]
fn test_cli_inventory_in_wu() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_definition(&temp_dir, WU);

    let output = run(&[
        "inventory",
        path.to_str().unwrap(),
        "--no-color",
        "--lang",
        "wuu-Hant",
    ]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("聲母 (3): b k l"));
}

#[test]
fn test_cli_collocations_unacceptable_only() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_definition(&temp_dir, WU);

    let output = run(&[
        "collocations",
        path.to_str().unwrap(),
        "--no-color",
        "--unacceptable-only",
    ]);

    assert!(output.status.success());
    let mut lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    lines.sort();
    let mut expected = vec!["bo˥˥", "bɐʔ˥˥", "bʊ̃ŋ˥˥"];
    expected.sort();
    assert_eq!(lines, expected);
}

#[test]
fn test_cli_collocations_symbolic() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_definition(&temp_dir, WU);

    let output = run(&[
        "collocations",
        path.to_str().unwrap(),
        "--symbolic",
        "--no-color",
    ]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert_eq!(text.lines().count(), 18);
    assert!(text.lines().any(|line| line == "loŋ˨˧"));
    assert!(!text.contains('\u{303}'));
}

#[test]
fn test_cli_collocations_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_definition(&temp_dir, WU);

    let output = run(&["collocations", path.to_str().unwrap(), "--json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 18);
    assert!(items
        .iter()
        .any(|item| item["ipa"] == "loŋ˨˧" && item["phonetic"] == "lʊ̃ŋ˨˧"));
}

#[test]
fn test_cli_render_single_syllable() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_definition(&temp_dir, WU);

    let output = run(&[
        "render",
        path.to_str().unwrap(),
        "--initial",
        "b",
        "--nucleus",
        "o",
        "--tone",
        "˥˥",
        "--no-color",
    ]);

    assert!(output.status.success());
    let text = stdout(&output);
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("bo˥˥"));
    assert_eq!(
        lines.next(),
        Some("<PhonotacticAcceptability (existent: false, grammatical: false)>")
    );
}

#[test]
fn test_cli_render_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_definition(&temp_dir, WU);

    let output = run(&[
        "render",
        path.to_str().unwrap(),
        "--initial",
        "l",
        "--nucleus",
        "o",
        "--coda",
        "ŋ",
        "--tone",
        "˨˧",
        "--json",
    ]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["phonetic"], "lʊ̃ŋ˨˧");
    assert_eq!(value["class"], "ExistentGrammatical");
}

#[test]
fn test_cli_render_rejects_bad_tone() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_definition(&temp_dir, WU);

    let output = run(&[
        "render",
        path.to_str().unwrap(),
        "--nucleus",
        "a",
        "--tone",
        "lol",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error: "));
    assert!(stderr.contains("not a tone"));
}

#[test]
fn test_cli_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");

    let output = run(&["inventory", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("I/O error"));
}

#[test]
fn test_cli_unknown_language_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_definition(&temp_dir, WU);

    let output = run(&["inventory", path.to_str().unwrap(), "--lang", "fr"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("Unknown language code: fr"));
}
