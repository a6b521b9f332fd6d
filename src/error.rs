//! Error type shared by every pipeline stage.
//!
//! Every variant is fatal: `main` prints the message and exits with
//! status 1. Nothing is retried or downgraded.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("in is required")]
    MissingInput,
    #[error("format-for must be web or pdf, got {0:?}")]
    InvalidFormat(String),
    #[error("timeout must be at least one second")]
    InvalidTimeout,
    #[error("failed to read input file {}: {source}", path.display())]
    FileRead { path: PathBuf, source: io::Error },
    #[error("markdown render request failed: {0}")]
    RenderRequest(#[source] reqwest::Error),
    #[error("failed to read rendered markdown: {0}")]
    RenderBody(#[source] reqwest::Error),
    #[error("markdown render service returned {status}: {body}")]
    RenderStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("failed to build document: {0}")]
    Template(#[from] askama::Error),
    #[error("failed to write output file {}: {source}", path.display())]
    FileWrite { path: PathBuf, source: io::Error },
    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] io::Error),
}
