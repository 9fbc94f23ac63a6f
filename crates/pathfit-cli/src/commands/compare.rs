//! The `pathfit compare` command: retake progress between two reports.

use std::path::PathBuf;

use anyhow::Result;

use pathfit_core::report::AssessmentReport;

pub fn execute(
    baseline_path: PathBuf,
    current_path: PathBuf,
    threshold: u8,
    format: String,
) -> Result<()> {
    let baseline = AssessmentReport::load_json(&baseline_path)?;
    let current = AssessmentReport::load_json(&current_path)?;

    if baseline.bank.id != current.bank.id {
        tracing::warn!(
            baseline = %baseline.bank.id,
            current = %current.bank.id,
            "comparing reports from different banks"
        );
    }

    let comparison = current.compare(&baseline, threshold);

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", comparison.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&comparison)?);
        }
        _ => {
            // text format
            println!(
                "Comparison: {} improved, {} declined, {} steady",
                comparison.improved.len(),
                comparison.declined.len(),
                comparison.steady
            );
            println!("Overall confidence: {:+} points", comparison.confidence_delta);

            if let Some((from, to)) = &comparison.recommendation_change {
                println!("Recommendation changed: {from} -> {to}");
            }

            if !comparison.improved.is_empty() {
                println!("\nImproved:");
                for d in &comparison.improved {
                    println!(
                        "  {} {}% -> {}% ({:+})",
                        d.dimension.label(),
                        d.baseline,
                        d.current,
                        d.delta
                    );
                }
            }

            if !comparison.declined.is_empty() {
                println!("\nDeclined:");
                for d in &comparison.declined {
                    println!(
                        "  {} {}% -> {}% ({:+})",
                        d.dimension.label(),
                        d.baseline,
                        d.current,
                        d.delta
                    );
                }
            }
        }
    }

    Ok(())
}
