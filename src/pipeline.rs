//! The conversion pipeline: read → render → build → write.
//!
//! Each stage fully completes before the next begins, and the first
//! failure short-circuits the rest, so nothing is written on error.

use std::fs;
use std::io::Write;

use tracing::info;

use crate::document;
use crate::error::ConvertError;
use crate::output;
use crate::params::InvocationParams;
use crate::render::MarkdownRenderer;

/// Runs one conversion with the given renderer and stdout handle.
pub fn convert<R, W>(
    params: &InvocationParams,
    renderer: &R,
    stdout: &mut W,
) -> Result<(), ConvertError>
where
    R: MarkdownRenderer + ?Sized,
    W: Write,
{
    let raw = fs::read(&params.input).map_err(|source| ConvertError::FileRead {
        path: params.input.clone(),
        source,
    })?;
    // Invalid UTF-8 becomes U+FFFD rather than failing the conversion.
    let markdown = String::from_utf8_lossy(&raw);

    let rendered = renderer.render(&markdown)?;
    let page = document::build(&params.title, params.format, &rendered)?;
    output::write_document(&page, &params.output, stdout)?;

    info!(
        op = "pipeline::convert",
        input = %params.input.display(),
        format = ?params.format,
        "Conversion finished"
    );
    Ok(())
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
