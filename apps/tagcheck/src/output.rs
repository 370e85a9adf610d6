//! Output rendering for lint reports.
//!
//! Supports `human` (default) and `json` outputs. The human form prints one
//! line per result in execution order followed by a pass/fail banner; the
//! JSON form serializes the report with a top-level `passed` flag.

use crate::error::TagCheckError;
use crate::models::{Report, Status};
use crate::utils::colors_enabled;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::str::FromStr;

pub const PASS_BANNER: &str = "All checks passed.";
pub const FAIL_BANNER: &str = "Some checks failed. Please review the issues above.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl FromStr for OutputMode {
    type Err = TagCheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(OutputMode::Human),
            "json" => Ok(OutputMode::Json),
            other => Err(TagCheckError::OutputMode(other.to_string())),
        }
    }
}

/// Print a report in the requested format.
pub fn print_report(report: &Report, mode: OutputMode) {
    match mode {
        OutputMode::Json => match serde_json::to_string_pretty(&compose_report_json(report)) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", crate::utils::error_prefix(), e),
        },
        OutputMode::Human => {
            for line in render_human(report, colors_enabled()) {
                println!("{}", line);
            }
        }
    }
}

/// Render human output lines (pure) so printers and tests share one path.
pub fn render_human(report: &Report, color: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.results.len() + 2);
    for r in &report.results {
        let (icon, sev) = match r.status {
            Status::Error => ("✖", "⟦error⟧"),
            Status::Info => ("◆", "⟦info⟧"),
        };
        let line = if color {
            match r.status {
                Status::Error => format!(
                    "{} {} ❲{}❳ — {}",
                    icon.red(),
                    sev.red().bold(),
                    r.check.as_str(),
                    r.message
                ),
                Status::Info => format!(
                    "{} {} ❲{}❳ — {}",
                    icon.blue(),
                    sev.blue().bold(),
                    r.check.as_str(),
                    r.message
                ),
            }
        } else {
            format!("{} {} ❲{}❳ — {}", icon, sev, r.check.as_str(), r.message)
        };
        lines.push(line);
    }
    lines.push(String::new());
    let banner = if report.passed() {
        PASS_BANNER
    } else {
        FAIL_BANNER
    };
    lines.push(match (color, report.passed()) {
        (false, _) => banner.to_string(),
        (true, true) => banner.green().bold().to_string(),
        (true, false) => banner.red().bold().to_string(),
    });
    lines
}

/// Compose report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &Report) -> JsonVal {
    json!({
        "template": report.template,
        "passed": report.passed(),
        "results": report.results,
        "summary": report.summary,
    })
}
