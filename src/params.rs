//! Argument resolution: turns raw CLI flags into validated `InvocationParams`.
//!
//! This stage performs no I/O. Defaults are derived from the input path's
//! file stem, and the output destination is resolved into an explicit
//! three-way choice instead of comparing against placeholder strings.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::cli::Cli;
use crate::error::ConvertError;

/// Which style preset the document is rendered with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormatTarget {
    #[default]
    Web,
    Pdf,
}

impl FromStr for FormatTarget {
    type Err = ConvertError;

    /// Exact, case-sensitive match on `web` or `pdf`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "web" => Ok(Self::Web),
            "pdf" => Ok(Self::Pdf),
            other => Err(ConvertError::InvalidFormat(other.to_string())),
        }
    }
}

/// Where the finished document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    /// `-out` was not given: print the document.
    Stdout,
    /// `-out` was given empty: write `<stem>.html` in the working directory.
    Derived(PathBuf),
    /// `-out` named a file explicitly.
    File(PathBuf),
}

impl OutputDestination {
    /// Returns the file path to write, or `None` when printing.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdout => None,
            Self::Derived(path) | Self::File(path) => Some(path),
        }
    }
}

/// Fully resolved, immutable parameters for one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationParams {
    pub input: PathBuf,
    pub output: OutputDestination,
    pub title: String,
    pub format: FormatTarget,
    pub timeout: Duration,
    pub endpoint: String,
}

/// Validates the raw flags and applies defaults.
///
/// Fails with `MissingInput` when `-in` is absent or empty, with
/// `InvalidFormat` for any `-format-for` other than `web`/`pdf`, and with
/// `InvalidTimeout` for a zero timeout.
pub fn resolve(cli: &Cli) -> Result<InvocationParams, ConvertError> {
    let input = match cli.input.as_deref() {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => return Err(ConvertError::MissingInput),
    };
    let stem = file_stem(&input);

    let output = match cli.output.as_deref() {
        None => OutputDestination::Stdout,
        Some("") => OutputDestination::Derived(PathBuf::from(format!("{stem}.html"))),
        Some(path) => OutputDestination::File(PathBuf::from(path)),
    };

    let title = match cli.title.as_deref() {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => stem,
    };

    let format = match cli.format_for.as_deref() {
        Some(value) => value.parse()?,
        None => FormatTarget::default(),
    };

    if cli.timeout == 0 {
        return Err(ConvertError::InvalidTimeout);
    }

    Ok(InvocationParams {
        input,
        output,
        title,
        format,
        timeout: Duration::from_secs(cli.timeout),
        endpoint: cli.endpoint.clone(),
    })
}

/// Base name of `path` with its final extension removed.
///
/// `docs/readme.md` → `readme`, `archive.tar.gz` → `archive.tar`.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
