//! Markdown rendering client: delegates markdown → HTML to a remote service.
//!
//! The pipeline only depends on the `MarkdownRenderer` trait, so tests can
//! swap in a fake or point `GithubRenderer` at a local stub server.

use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ConvertError;

/// Anything that can turn raw markdown into an HTML fragment.
pub trait MarkdownRenderer {
    fn render(&self, markdown: &str) -> Result<String, ConvertError>;
}

/// JSON body accepted by the GitHub markdown API.
#[derive(Serialize)]
struct RenderRequest<'a> {
    text: &'a str,
}

/// Blocking client for a GitHub-compatible `POST /markdown` endpoint.
#[derive(Debug, Clone)]
pub struct GithubRenderer {
    client: Client,
    endpoint: String,
}

impl GithubRenderer {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ConvertError> {
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .timeout(timeout)
            .build()
            .map_err(ConvertError::RenderRequest)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("mdpage/", env!("CARGO_PKG_VERSION"))
    }
}

impl MarkdownRenderer for GithubRenderer {
    /// Sends the markdown verbatim and returns the response body.
    ///
    /// A non-2xx status is reported as `RenderStatus` instead of being
    /// embedded in the page.
    fn render(&self, markdown: &str) -> Result<String, ConvertError> {
        let started_at = Instant::now();
        debug!(
            op = "render::request",
            endpoint = %self.endpoint,
            markdown_bytes = markdown.len(),
            "Sending markdown to rendering service"
        );

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&RenderRequest { text: markdown })
            .send()
            .map_err(ConvertError::RenderRequest)?;

        let status = resp.status();
        let body = resp.text().map_err(ConvertError::RenderBody)?;
        if !status.is_success() {
            warn!(
                op = "render::request",
                status = status.as_u16(),
                elapsed_ms = started_at.elapsed().as_millis() as u64,
                "Rendering service returned an error status"
            );
            return Err(ConvertError::RenderStatus { status, body });
        }

        debug!(
            op = "render::request",
            status = status.as_u16(),
            elapsed_ms = started_at.elapsed().as_millis() as u64,
            html_bytes = body.len(),
            "Markdown rendered"
        );
        Ok(body)
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
