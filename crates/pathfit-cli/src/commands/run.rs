//! The `pathfit run` command: the interactive terminal assessment.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use pathfit_core::report::AssessmentReport;
use pathfit_core::session::{Advance, AssessmentSession};

use crate::commands::{print_result, resolve_bank, save_reports};
use crate::config::load_config_from;

pub fn execute(
    bank_path: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<String>,
    save_responses: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let bank = Arc::new(resolve_bank(bank_path, &config)?);
    let output_dir = output.unwrap_or_else(|| config.output_dir.clone());
    let format = format.unwrap_or_else(|| config.default_format.clone());
    let save_responses = save_responses || config.save_responses;

    println!("{}", bank.title);
    if !bank.description.is_empty() {
        println!("{}", bank.description);
    }
    println!("\nAnswer with an option number. Commands: b (back), s (skip), q (quit early).");

    let mut session = AssessmentSession::new(bank);
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    while !session.is_complete() {
        let Some(question) = session.current_question() else {
            break;
        };
        let prompt = question.prompt.clone();
        let category = question.category.label();
        let options: Vec<String> = question.options().iter().map(|s| s.to_string()).collect();
        let recorded = session.response(&question.id);

        println!(
            "\n[{}] Question {} of {} ({:.0}%)",
            category,
            session.index() + 1,
            session.len(),
            session.progress() * 100.0
        );
        println!("{prompt}\n");
        for (i, option) in options.iter().enumerate() {
            let marker = if recorded == Some(i as u8) { "*" } else { " " };
            println!(" {marker}{}. {option}", i + 1);
        }

        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // stdin closed: finish early with whatever was recorded
            break;
        };
        let line = line?;

        match line.trim() {
            "q" | "quit" => break,
            "s" | "skip" => {
                session.advance();
            }
            "b" | "back" => {
                if session.can_retreat() {
                    session.retreat();
                } else {
                    println!("Already at the first question.");
                }
            }
            input => match input.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => {
                    session.record_current((n - 1) as u8)?;
                    if session.advance() == Advance::Completed {
                        println!("\nAssessment complete.");
                    }
                }
                _ => {
                    println!(
                        "Enter a number between 1 and {}, b (back), s (skip), or q (quit).",
                        options.len()
                    );
                }
            },
        }
    }

    let report = AssessmentReport::from_session(&mut session);
    print_result(&report);
    save_reports(&report, &output_dir, &format)?;

    if save_responses {
        let path = output_dir.join(format!(
            "responses-{}.json",
            report.created_at.format("%Y-%m-%dT%H%M%S")
        ));
        std::fs::write(&path, serde_json::to_string_pretty(session.responses())?)?;
        eprintln!("Responses saved to: {}", path.display());
    }

    Ok(())
}
