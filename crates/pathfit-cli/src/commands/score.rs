//! The `pathfit score` command: non-interactive scoring of saved responses.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use pathfit_core::model::Response;
use pathfit_core::report::AssessmentReport;
use pathfit_core::session::AssessmentSession;

use crate::commands::{print_result, resolve_bank, save_reports};
use crate::config::load_config_from;

pub fn execute(
    responses_path: PathBuf,
    bank_path: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let bank = Arc::new(resolve_bank(bank_path, &config)?);
    let output_dir = output.unwrap_or_else(|| config.output_dir.clone());
    let format = format.unwrap_or_else(|| config.default_format.clone());

    let content = std::fs::read_to_string(&responses_path)
        .with_context(|| format!("failed to read responses from {}", responses_path.display()))?;
    let responses: Vec<Response> =
        serde_json::from_str(&content).context("failed to parse responses JSON")?;

    // Replay through the session so invalid entries are rejected at the
    // store boundary, before scoring.
    let mut session = AssessmentSession::new(bank);
    for response in &responses {
        session
            .record(&response.question_id, response.value)
            .with_context(|| format!("invalid response in {}", responses_path.display()))?;
    }

    tracing::info!(
        answered = session.answered(),
        total = session.len(),
        "scoring saved responses"
    );

    let report = AssessmentReport::from_session(&mut session);
    print_result(&report);
    save_reports(&report, &output_dir, &format)?;

    Ok(())
}
