//! TOML question bank parser.
//!
//! Loads question banks from TOML files and directories, and validates them.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::bank::QuestionBank;
use crate::model::{AnswerKind, Category, Question};
use crate::results::Dimension;

/// Intermediate TOML structure for parsing bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
    #[serde(default)]
    choice_scores: HashMap<String, Vec<u8>>,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    id: String,
    name: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    category: String,
    subcategory: String,
    prompt: String,
    kind: String,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default = "default_weight")]
    weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

/// Parse a single TOML file into a `QuestionBank`.
pub fn parse_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read bank file: {}", path.display()))?;

    parse_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank` (useful for testing).
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let category: Category = q
                .category
                .parse()
                .map_err(|e: String| anyhow::anyhow!("question {}: {}", q.id, e))?;

            let kind = match q.kind.as_str() {
                "scale" => AnswerKind::Scale,
                "choice" => AnswerKind::Choice { options: q.options },
                other => anyhow::bail!("question {}: unknown answer kind: {}", q.id, other),
            };

            Ok(Question {
                id: q.id,
                category,
                subcategory: q.subcategory,
                prompt: q.prompt,
                kind,
                weight: q.weight,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QuestionBank {
        id: parsed.bank.id,
        name: parsed.bank.name,
        title: parsed.bank.title,
        description: parsed.bank.description,
        questions,
        choice_scores: parsed.choice_scores,
    })
}

/// Recursively load all `.toml` bank files from a directory.
pub fn load_bank_directory(dir: &Path) -> Result<Vec<QuestionBank>> {
    let mut banks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            banks.extend(load_bank_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_bank(&path) {
                Ok(bank) => banks.push(bank),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(banks)
}

/// A warning from question bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a question bank for common issues.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Check for duplicate question IDs
    let mut seen_ids = std::collections::HashSet::new();
    for q in &bank.questions {
        if !seen_ids.insert(&q.id) {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: format!("duplicate question ID: {}", q.id),
            });
        }
    }

    // Check for empty prompts and non-positive weights
    for q in &bank.questions {
        if q.prompt.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: "prompt is empty".into(),
            });
        }
        if q.weight <= 0.0 {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: format!("weight must be positive (got {})", q.weight),
            });
        }
    }

    // Choice questions need options and a matching score row
    for q in &bank.questions {
        let AnswerKind::Choice { options } = &q.kind else {
            continue;
        };

        if options.is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: "choice question has no options".into(),
            });
            continue;
        }

        match bank.choice_scores.get(&q.id) {
            None => {
                warnings.push(ValidationWarning {
                    question_id: Some(q.id.clone()),
                    message: "no choice_scores entry; every option will score the default 50"
                        .into(),
                });
            }
            Some(row) if row.len() != options.len() => {
                warnings.push(ValidationWarning {
                    question_id: Some(q.id.clone()),
                    message: format!(
                        "choice_scores has {} entries but the question has {} options",
                        row.len(),
                        options.len()
                    ),
                });
            }
            Some(_) => {}
        }
    }

    // Score rows must reference choice questions and stay in range
    for (id, row) in &bank.choice_scores {
        match bank.question(id) {
            None => {
                warnings.push(ValidationWarning {
                    question_id: Some(id.clone()),
                    message: "choice_scores entry for unknown question".into(),
                });
            }
            Some(q) if !matches!(q.kind, AnswerKind::Choice { .. }) => {
                warnings.push(ValidationWarning {
                    question_id: Some(id.clone()),
                    message: "choice_scores entry for a non-choice question".into(),
                });
            }
            Some(_) => {}
        }
        for &score in row {
            if score > 100 {
                warnings.push(ValidationWarning {
                    question_id: Some(id.clone()),
                    message: format!("choice score {score} exceeds 100"),
                });
            }
        }
    }

    // Questions in a subcategory no dimension selects can never contribute
    for q in &bank.questions {
        let reachable = Dimension::ALL.iter().any(|d| {
            d.selector()
                .is_some_and(|(cat, sub)| cat == q.category && sub == q.subcategory)
        });
        if !reachable {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: format!(
                    "subcategory '{}' is not scored by any dimension",
                    q.subcategory
                ),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[bank]
id = "test-bank"
name = "Test Role"
title = "Should I Become a Test Role?"
description = "A test bank"

[[questions]]
id = "q1"
category = "personality"
subcategory = "interest"
prompt = "I enjoy testing things."
kind = "scale"
weight = 1.2

[[questions]]
id = "q2"
category = "technical"
subcategory = "aptitude"
prompt = "Pick the best approach."
kind = "choice"
options = ["First", "Second", "Third"]

[choice_scores]
q2 = [40, 90, 60]
"#;

    #[test]
    fn parse_valid_toml() {
        let bank = parse_bank_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(bank.id, "test-bank");
        assert_eq!(bank.name, "Test Role");
        assert_eq!(bank.questions.len(), 2);
        assert_eq!(bank.questions[0].id, "q1");
        assert!((bank.questions[0].weight - 1.2).abs() < f64::EPSILON);
        assert_eq!(bank.choice_score("q2", 1), Some(90));
    }

    #[test]
    fn parse_missing_optional_fields() {
        let toml = r#"
[bank]
id = "minimal"
name = "Minimal"

[[questions]]
id = "q1"
category = "holistic"
subcategory = "will"
prompt = "I keep going."
kind = "scale"
"#;
        let bank = parse_bank_str(toml, &PathBuf::from("test.toml")).unwrap();
        assert!(bank.title.is_empty());
        assert!((bank.questions[0].weight - 1.0).abs() < f64::EPSILON);
        assert!(bank.choice_scores.is_empty());
    }

    #[test]
    fn parse_unknown_category() {
        let toml = r#"
[bank]
id = "bad"
name = "Bad"

[[questions]]
id = "q1"
category = "managerial"
subcategory = "x"
prompt = "?"
kind = "scale"
"#;
        let result = parse_bank_str(toml, &PathBuf::from("test.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn parse_unknown_kind() {
        let toml = r#"
[bank]
id = "bad"
name = "Bad"

[[questions]]
id = "q1"
category = "personality"
subcategory = "interest"
prompt = "?"
kind = "essay"
"#;
        let err = parse_bank_str(toml, &PathBuf::from("test.toml")).unwrap_err();
        assert!(err.to_string().contains("unknown answer kind"));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        let result = parse_bank_str(bad, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn validate_duplicate_ids() {
        let toml = r#"
[bank]
id = "dupes"
name = "Dupes"

[[questions]]
id = "same"
category = "personality"
subcategory = "interest"
prompt = "First."
kind = "scale"

[[questions]]
id = "same"
category = "personality"
subcategory = "interest"
prompt = "Second."
kind = "scale"
"#;
        let bank = parse_bank_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_bank(&bank);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
    }

    #[test]
    fn validate_choice_without_scores() {
        let toml = r#"
[bank]
id = "no-scores"
name = "No Scores"

[[questions]]
id = "c1"
category = "technical"
subcategory = "aptitude"
prompt = "Pick one."
kind = "choice"
options = ["a", "b"]
"#;
        let bank = parse_bank_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_bank(&bank);
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("no choice_scores entry")));
    }

    #[test]
    fn validate_score_row_length_mismatch() {
        let toml = r#"
[bank]
id = "mismatch"
name = "Mismatch"

[[questions]]
id = "c1"
category = "technical"
subcategory = "aptitude"
prompt = "Pick one."
kind = "choice"
options = ["a", "b", "c"]

[choice_scores]
c1 = [50, 80]
"#;
        let bank = parse_bank_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_bank(&bank);
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("2 entries but the question has 3 options")));
    }

    #[test]
    fn validate_orphan_score_row_and_range() {
        let toml = r#"
[bank]
id = "orphan"
name = "Orphan"

[[questions]]
id = "q1"
category = "personality"
subcategory = "interest"
prompt = "Scale question."
kind = "scale"

[choice_scores]
ghost = [50, 120]
q1 = [50]
"#;
        let bank = parse_bank_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_bank(&bank);
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("unknown question")));
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("non-choice question")));
        assert!(warnings.iter().any(|w| w.message.contains("exceeds 100")));
    }

    #[test]
    fn validate_unscored_subcategory() {
        let toml = r#"
[bank]
id = "unscored"
name = "Unscored"

[[questions]]
id = "q1"
category = "personality"
subcategory = "charisma"
prompt = "I am charming."
kind = "scale"
"#;
        let bank = parse_bank_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_bank(&bank);
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("not scored by any dimension")));
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("test.toml");
        std::fs::write(&file_path, VALID_TOML).unwrap();
        // A broken file is skipped, not fatal
        std::fs::write(dir.path().join("broken.toml"), "not toml ][").unwrap();

        let banks = load_bank_directory(dir.path()).unwrap();
        assert_eq!(banks.len(), 1);
        assert_eq!(banks[0].id, "test-bank");
    }
}
