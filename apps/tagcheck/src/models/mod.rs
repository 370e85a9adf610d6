//! Shared data models for check results and parsed template tags.

pub mod markup;

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Outcome attached to a single check result.
pub enum Status {
    Info,
    Error,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
/// Identifies which check produced a result.
pub enum CheckId {
    LoadStatic,
    Stylesheet,
    Script,
    LoadOrder,
    AssetExists,
}

impl CheckId {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckId::LoadStatic => "load-static",
            CheckId::Stylesheet => "stylesheet",
            CheckId::Script => "script",
            CheckId::LoadOrder => "load-order",
            CheckId::AssetExists => "asset-exists",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// A single check result with status and message.
pub struct CheckResult {
    pub check: CheckId,
    pub status: Status,
    pub message: String,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
/// Aggregated counts used by printers.
pub struct Summary {
    pub errors: usize,
    pub infos: usize,
    pub assets: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// Lint report for one template: ordered results plus summary.
pub struct Report {
    pub template: String,
    pub results: Vec<CheckResult>,
    pub summary: Summary,
}

impl Report {
    /// True when no check produced an error result.
    pub fn passed(&self) -> bool {
        self.summary.errors == 0
    }
}
