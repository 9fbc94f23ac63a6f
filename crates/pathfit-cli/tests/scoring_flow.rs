//! End-to-end flow: init a workspace, score saved responses twice, and
//! compare the resulting reports.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use pathfit_core::bank::QuestionBank;
use pathfit_core::model::Response;

fn pathfit() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("pathfit").unwrap()
}

fn write_responses(dir: &Path, name: &str, value: u8) -> PathBuf {
    let responses: Vec<Response> = QuestionBank::builtin()
        .questions
        .iter()
        .map(|q| Response::new(q.id.clone(), value.min(q.max_value())))
        .collect();
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(&responses).unwrap()).unwrap();
    path
}

fn only_json_report(dir: &Path) -> PathBuf {
    let reports: Vec<PathBuf> = std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.extension().is_some_and(|x| x == "json")
                && p.file_name()
                    .is_some_and(|n| n.to_string_lossy().starts_with("report-"))
        })
        .collect();
    assert_eq!(reports.len(), 1, "expected one report in {}", dir.display());
    reports[0].clone()
}

#[test]
fn init_score_compare_flow() {
    let dir = TempDir::new().unwrap();

    // 1. init writes the config and the bank
    pathfit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    let bank_path = dir.path().join("banks/corporate-trainer.toml");
    assert!(bank_path.exists());

    // 2. the written bank validates clean
    pathfit()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--bank")
        .arg(&bank_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("All banks valid"));

    // 3. score a weak take and a strong take into separate directories
    let weak = write_responses(dir.path(), "weak.json", 1);
    let strong = write_responses(dir.path(), "strong.json", 4);

    pathfit()
        .current_dir(dir.path())
        .arg("score")
        .arg("--responses")
        .arg(&weak)
        .arg("--bank")
        .arg(&bank_path)
        .arg("--output")
        .arg("baseline")
        .arg("--format")
        .arg("all")
        .assert()
        .success();

    pathfit()
        .current_dir(dir.path())
        .arg("score")
        .arg("--responses")
        .arg(&strong)
        .arg("--bank")
        .arg(&bank_path)
        .arg("--output")
        .arg("current")
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    // --format all produced all three renderings
    let baseline_dir = dir.path().join("baseline");
    let entries: Vec<String> = std::fs::read_dir(&baseline_dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    assert!(entries.iter().any(|n| n.ends_with(".json")));
    assert!(entries.iter().any(|n| n.ends_with(".md")));
    assert!(entries.iter().any(|n| n.ends_with(".html")));

    // 4. compare shows improvement and the tier change
    let baseline_report = only_json_report(&baseline_dir);
    let current_report = only_json_report(&dir.path().join("current"));

    pathfit()
        .current_dir(dir.path())
        .arg("compare")
        .arg("--baseline")
        .arg(&baseline_report)
        .arg("--current")
        .arg(&current_report)
        .assert()
        .success()
        .stdout(predicate::str::contains("improved"))
        .stdout(predicate::str::contains("Recommendation changed"));
}

#[test]
fn compare_markdown_format() {
    let dir = TempDir::new().unwrap();
    let bank = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../banks/corporate-trainer.toml");

    let weak = write_responses(dir.path(), "weak.json", 0);
    let strong = write_responses(dir.path(), "strong.json", 4);

    for (input, out) in [(&weak, "a"), (&strong, "b")] {
        pathfit()
            .current_dir(dir.path())
            .arg("score")
            .arg("--responses")
            .arg(input)
            .arg("--bank")
            .arg(&bank)
            .arg("--output")
            .arg(out)
            .assert()
            .success();
    }

    pathfit()
        .current_dir(dir.path())
        .arg("compare")
        .arg("--baseline")
        .arg(only_json_report(&dir.path().join("a")))
        .arg("--current")
        .arg(only_json_report(&dir.path().join("b")))
        .arg("--format")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("### Improved"))
        .stdout(predicate::str::contains("| Dimension |"));
}
