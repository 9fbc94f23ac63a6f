//! Subcommand implementations and shared output helpers.

pub mod compare;
pub mod init;
pub mod run;
pub mod score;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use pathfit_core::bank::QuestionBank;
use pathfit_core::report::AssessmentReport;
use pathfit_report::html::write_html_report;

use crate::config::PathfitConfig;

/// Resolve the bank to run over: `--bank` flag, then config, then built-in.
pub(crate) fn resolve_bank(
    flag: Option<PathBuf>,
    config: &PathfitConfig,
) -> Result<QuestionBank> {
    match flag {
        Some(path) => pathfit_core::parser::parse_bank(&path),
        None if config.default_bank == "builtin" => Ok(QuestionBank::builtin().clone()),
        None => pathfit_core::parser::parse_bank(Path::new(&config.default_bank)),
    }
}

/// Print the result summary table plus the generated feedback lists.
pub(crate) fn print_result(report: &AssessmentReport) {
    let r = &report.result;

    println!("\n{}", r.recommendation.headline());

    let mut table = Table::new();
    table.set_header(vec!["Category", "Score"]);
    table.add_row(vec![
        Cell::new("Personality Fit"),
        Cell::new(format!("{}%", r.personality_score)),
    ]);
    table.add_row(vec![
        Cell::new("Technical Readiness"),
        Cell::new(format!("{}%", r.technical_score)),
    ]);
    table.add_row(vec![
        Cell::new("Holistic Readiness"),
        Cell::new(format!("{}%", r.holistic_score)),
    ]);
    table.add_row(vec![
        Cell::new("Overall Confidence"),
        Cell::new(format!("{}%", r.overall_confidence)),
    ]);
    table.add_row(vec![
        Cell::new("Recommendation"),
        Cell::new(r.recommendation.to_string()),
    ]);
    println!("\n{table}");

    if !r.insights.is_empty() {
        println!("\nInsights:");
        for insight in &r.insights {
            println!("  - {insight}");
        }
    }

    println!("\nNext steps:");
    for (i, step) in r.next_steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }

    println!("\nSuggested career paths:");
    for path in &r.career_paths {
        println!("  - {path}");
    }
}

/// Write the report in the requested formats under `output`.
pub(crate) fn save_reports(report: &AssessmentReport, output: &Path, format: &str) -> Result<()> {
    std::fs::create_dir_all(output)
        .with_context(|| format!("failed to create output directory: {}", output.display()))?;
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");

    let formats: Vec<&str> = if format == "all" {
        vec!["json", "markdown", "html"]
    } else {
        format.split(',').map(|s| s.trim()).collect()
    };

    for fmt in &formats {
        match *fmt {
            "json" => {
                let path = output.join(format!("report-{timestamp}.json"));
                report.save_json(&path)?;
                eprintln!("Report saved to: {}", path.display());
            }
            "markdown" | "md" => {
                let path = output.join(format!("report-{timestamp}.md"));
                std::fs::write(&path, report.to_markdown())
                    .with_context(|| format!("failed to write {}", path.display()))?;
                eprintln!("Markdown report: {}", path.display());
            }
            "html" => {
                let path = output.join(format!("report-{timestamp}.html"));
                write_html_report(report, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
            _ => {
                eprintln!("Unknown format: {fmt}");
            }
        }
    }

    Ok(())
}
