//! Document builder: wraps a rendered HTML fragment in a styled page.
//!
//! Style presets are plain data keyed by `FormatTarget`; the page skeleton
//! is an askama template compiled into the binary, so building is a pure
//! function of title, preset and body.

use askama::Template;

use crate::error::ConvertError;
use crate::params::FormatTarget;

/// Font metrics applied to the page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub font_size: &'static str,
    pub line_height: &'static str,
}

const WEB: Preset = Preset {
    font_size: "1.1em",
    line_height: "1.5em",
};

const PDF: Preset = Preset {
    font_size: "0.9em",
    line_height: "1.3em",
};

impl FormatTarget {
    /// Returns the style preset for this target.
    pub fn preset(self) -> Preset {
        match self {
            Self::Web => WEB,
            Self::Pdf => PDF,
        }
    }
}

/// Page skeleton. `title` is escaped, `body` is trusted service output
/// and inserted raw.
#[derive(Template)]
#[template(path = "document.html")]
struct DocumentTemplate<'a> {
    title: &'a str,
    preset: Preset,
    body: &'a str,
}

/// Builds the complete HTML document.
pub fn build(title: &str, format: FormatTarget, body: &str) -> Result<String, ConvertError> {
    let page = DocumentTemplate {
        title,
        preset: format.preset(),
        body,
    };
    Ok(page.render()?)
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
