//! Assessment report types with JSON persistence and retake comparison.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::results::{AssessmentResult, Dimension, Recommendation};
use crate::session::AssessmentSession;

/// A complete assessment report: one session's result plus metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the bank the session ran over.
    pub bank: BankSummary,
    /// Number of distinct questions answered.
    pub answered: usize,
    /// Wall-clock session duration in milliseconds. Informational only.
    pub duration_ms: u64,
    /// The computed result.
    pub result: AssessmentResult,
}

/// Summary of a question bank (without the full question definitions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankSummary {
    pub id: String,
    pub name: String,
    pub question_count: usize,
}

impl AssessmentReport {
    /// Build a report from a completed (or finished-early) session.
    pub fn from_session(session: &mut AssessmentSession) -> Self {
        let started_at = session.started_at();
        let answered = session.answered();
        let bank = BankSummary {
            id: session.bank().id.clone(),
            name: session.bank().name.clone(),
            question_count: session.bank().len(),
        };
        let result = session.finish().clone();
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            created_at: now,
            bank,
            answered,
            duration_ms: (now - started_at).num_milliseconds().max(0) as u64,
            result,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AssessmentReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Render the report as markdown.
    pub fn to_markdown(&self) -> String {
        let r = &self.result;
        let mut md = String::new();

        md.push_str(&format!("# {} Assessment\n\n", self.bank.name));
        md.push_str(&format!("{}\n\n", r.recommendation.headline()));
        md.push_str(&format!(
            "**Recommendation:** {} | **Overall confidence:** {}%\n\n",
            r.recommendation, r.overall_confidence
        ));
        md.push_str(&format!(
            "_{} of {} questions answered, {}_\n\n",
            self.answered,
            self.bank.question_count,
            self.created_at.format("%Y-%m-%d %H:%M UTC")
        ));

        md.push_str("## Category Scores\n\n");
        md.push_str("| Category | Score |\n");
        md.push_str("|----------|-------|\n");
        md.push_str(&format!("| Personality Fit | {}% |\n", r.personality_score));
        md.push_str(&format!("| Technical Readiness | {}% |\n", r.technical_score));
        md.push_str(&format!("| Holistic Readiness | {}% |\n\n", r.holistic_score));

        md.push_str("## Score Breakdown\n\n");
        md.push_str("| Dimension | Score |\n");
        md.push_str("|-----------|-------|\n");
        for (dimension, score) in r.breakdown.iter() {
            md.push_str(&format!("| {} | {}% |\n", dimension.label(), score));
        }
        md.push('\n');

        if !r.insights.is_empty() {
            md.push_str("## Insights\n\n");
            for insight in &r.insights {
                md.push_str(&format!("- {insight}\n"));
            }
            md.push('\n');
        }

        md.push_str("## Next Steps\n\n");
        for (i, step) in r.next_steps.iter().enumerate() {
            md.push_str(&format!("{}. {}\n", i + 1, step));
        }
        md.push('\n');

        md.push_str("## Suggested Career Paths\n\n");
        for path in &r.career_paths {
            md.push_str(&format!("- {path}\n"));
        }

        md
    }

    /// Compare this report against a baseline from an earlier take.
    ///
    /// A dimension counts as improved or declined when its absolute delta
    /// reaches `threshold` points.
    pub fn compare(&self, baseline: &AssessmentReport, threshold: u8) -> RetakeComparison {
        let mut improved = Vec::new();
        let mut declined = Vec::new();
        let mut steady = 0usize;

        for dimension in Dimension::ALL {
            let before = baseline.result.breakdown.get(dimension);
            let after = self.result.breakdown.get(dimension);
            let delta = i16::from(after) - i16::from(before);

            let entry = DimensionDelta {
                dimension,
                baseline: before,
                current: after,
                delta,
            };

            if delta >= i16::from(threshold) {
                improved.push(entry);
            } else if delta <= -i16::from(threshold) {
                declined.push(entry);
            } else {
                steady += 1;
            }
        }

        let recommendation_change = (baseline.result.recommendation
            != self.result.recommendation)
            .then_some((baseline.result.recommendation, self.result.recommendation));

        RetakeComparison {
            improved,
            declined,
            steady,
            confidence_delta: i16::from(self.result.overall_confidence)
                - i16::from(baseline.result.overall_confidence),
            recommendation_change,
        }
    }
}

/// Result of comparing two reports from the same bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetakeComparison {
    /// Dimensions that went up by at least the threshold.
    pub improved: Vec<DimensionDelta>,
    /// Dimensions that went down by at least the threshold.
    pub declined: Vec<DimensionDelta>,
    /// Dimensions with no significant change.
    pub steady: usize,
    /// Signed change in overall confidence, in points.
    pub confidence_delta: i16,
    /// `(from, to)` when the verdict tier changed.
    pub recommendation_change: Option<(Recommendation, Recommendation)>,
}

/// Signed per-dimension score change, in points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionDelta {
    pub dimension: Dimension,
    pub baseline: u8,
    pub current: u8,
    pub delta: i16,
}

impl RetakeComparison {
    /// Format the comparison as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Summary:** {} improved, {} declined, {} steady | confidence {:+} points\n\n",
            self.improved.len(),
            self.declined.len(),
            self.steady,
            self.confidence_delta
        ));

        if let Some((from, to)) = &self.recommendation_change {
            md.push_str(&format!("**Recommendation changed:** {from} -> {to}\n\n"));
        }

        if !self.improved.is_empty() {
            md.push_str("### Improved\n\n");
            md.push_str("| Dimension | Baseline | Current | Delta |\n");
            md.push_str("|-----------|----------|---------|-------|\n");
            for d in &self.improved {
                md.push_str(&format!(
                    "| {} | {}% | {}% | {:+} |\n",
                    d.dimension.label(),
                    d.baseline,
                    d.current,
                    d.delta
                ));
            }
            md.push('\n');
        }

        if !self.declined.is_empty() {
            md.push_str("### Declined\n\n");
            md.push_str("| Dimension | Baseline | Current | Delta |\n");
            md.push_str("|-----------|----------|---------|-------|\n");
            for d in &self.declined {
                md.push_str(&format!(
                    "| {} | {}% | {}% | {:+} |\n",
                    d.dimension.label(),
                    d.baseline,
                    d.current,
                    d.delta
                ));
            }
        }

        md
    }

    /// Returns true if any dimension declined past the threshold.
    pub fn has_declines(&self) -> bool {
        !self.declined.is_empty()
    }
}
