//! Output sink: prints the document or writes it to a file.

use std::fs::File;
use std::io::{BufWriter, Write};

use tracing::debug;

use crate::error::ConvertError;
use crate::params::OutputDestination;

/// Writes `content` to `destination`, using `stdout` for the print case.
///
/// Printed documents get a trailing newline; files receive the content
/// verbatim. Files are created or truncated.
pub fn write_document<W: Write>(
    content: &str,
    destination: &OutputDestination,
    stdout: &mut W,
) -> Result<(), ConvertError> {
    let Some(path) = destination.path() else {
        writeln!(stdout, "{content}").map_err(ConvertError::Stdout)?;
        return stdout.flush().map_err(ConvertError::Stdout);
    };

    let write_err = |source| ConvertError::FileWrite {
        path: path.to_path_buf(),
        source,
    };
    let mut out = BufWriter::new(File::create(path).map_err(write_err)?);
    out.write_all(content.as_bytes()).map_err(write_err)?;
    out.flush().map_err(write_err)?;

    debug!(
        op = "output::write",
        path = %path.display(),
        bytes = content.len(),
        "Document written"
    );
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
