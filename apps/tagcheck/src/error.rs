//! Fatal errors that abort a run before any check executes.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagCheckError {
    #[error("cannot read template '{}': {source}", path.display())]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown output mode '{0}' (expected human|json)")]
    OutputMode(String),
}
