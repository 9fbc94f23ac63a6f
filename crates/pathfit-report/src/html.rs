//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::Result;
use std::path::Path;

use pathfit_core::model::Category;
use pathfit_core::report::AssessmentReport;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// A horizontal score bar with its percentage label.
fn score_bar(label: &str, score: u8) -> String {
    let class = if score >= 80 {
        "high"
    } else if score >= 60 {
        "mid"
    } else {
        "low"
    };
    format!(
        "<div class=\"bar-row\"><span class=\"bar-label\">{}</span>\
         <div class=\"bar-track\"><div class=\"bar-fill {}\" style=\"width:{}%\"></div></div>\
         <span class=\"bar-value\">{}%</span></div>\n",
        html_escape(label),
        class,
        score,
        score
    )
}

/// Generate an HTML report from an assessment report.
pub fn generate_html(report: &AssessmentReport) -> String {
    let r = &report.result;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>pathfit report — {}</title>\n",
        html_escape(&report.bank.name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!(
        "<h1>{} Assessment</h1>\n",
        html_escape(&report.bank.name)
    ));
    html.push_str(&format!(
        "<p class=\"meta\">{} of {} questions answered | {}</p>\n",
        report.answered,
        report.bank.question_count,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Verdict
    html.push_str("<section class=\"verdict\">\n");
    html.push_str(&format!(
        "<p class=\"headline\">{}</p>\n",
        html_escape(r.recommendation.headline())
    ));
    html.push_str(&format!(
        "<p class=\"confidence\">Recommendation: <strong>{}</strong> — overall confidence <strong>{}%</strong></p>\n",
        r.recommendation, r.overall_confidence
    ));
    html.push_str("</section>\n");

    // Category cards
    html.push_str("<section class=\"categories\">\n<h2>Category Scores</h2>\n");
    for category in [Category::Personality, Category::Technical, Category::Holistic] {
        let score = r.category_score(category);
        html.push_str("<div class=\"card\">\n");
        html.push_str(&format!("<h3>{}</h3>\n", html_escape(category.label())));
        html.push_str(&score_bar("Score", score));
        html.push_str("</div>\n");
    }
    html.push_str("</section>\n");

    // Dimension breakdown
    html.push_str("<section class=\"breakdown\">\n<h2>Score Breakdown</h2>\n");
    for (dimension, score) in r.breakdown.iter() {
        html.push_str(&score_bar(dimension.label(), score));
    }
    html.push_str("</section>\n");

    // Insights
    if !r.insights.is_empty() {
        html.push_str("<section class=\"insights\">\n<h2>Insights</h2>\n<ul>\n");
        for insight in &r.insights {
            html.push_str(&format!("<li>{}</li>\n", html_escape(insight)));
        }
        html.push_str("</ul>\n</section>\n");
    }

    // Next steps
    html.push_str("<section class=\"next-steps\">\n<h2>Next Steps</h2>\n<ol>\n");
    for step in &r.next_steps {
        html.push_str(&format!("<li>{}</li>\n", html_escape(step)));
    }
    html.push_str("</ol>\n</section>\n");

    // Career paths
    html.push_str("<section class=\"career-paths\">\n<h2>Suggested Career Paths</h2>\n<ul>\n");
    for path in &r.career_paths {
        html.push_str(&format!("<li>{}</li>\n", html_escape(path)));
    }
    html.push_str("</ul>\n</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &AssessmentReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --track: #f3f4f6; --high: #22c55e; --mid: #eab308; --low: #ef4444; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --track: #1f2937; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0 auto; max-width: 48rem; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.headline { font-size: 1.25rem; font-weight: bold; }
.card { border: 1px solid var(--border); border-radius: 8px; padding: 1rem; margin: 0.75rem 0; }
.card h3 { margin: 0 0 0.5rem 0; }
.bar-row { display: flex; align-items: center; gap: 0.75rem; margin: 0.4rem 0; }
.bar-label { flex: 0 0 11rem; }
.bar-track { flex: 1; height: 0.75rem; background: var(--track); border-radius: 6px; overflow: hidden; }
.bar-fill { height: 100%; border-radius: 6px; }
.bar-fill.high { background: var(--high); }
.bar-fill.mid { background: var(--mid); }
.bar-fill.low { background: var(--low); }
.bar-value { flex: 0 0 3rem; text-align: right; }
pre { overflow-x: auto; padding: 1rem; background: var(--track); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
"#;
