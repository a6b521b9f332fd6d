//! CLI argument definition for mdpage.
//!
//! Every flag is kept as a raw `Option<String>` here; defaulting and
//! validation live in `params` so that failures are reported as
//! `ConvertError`s rather than clap usage errors.

use std::ffi::OsString;

use clap::Parser;

/// Rendering endpoint used when `-endpoint` is not given.
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/markdown";

/// Convert a markdown file into a standalone HTML page.
#[derive(Parser, Debug)]
#[command(name = "mdpage", version, about = "Render markdown to a styled HTML page")]
pub struct Cli {
    /// Path to an input markdown file.
    #[arg(long = "in", value_name = "PATH", allow_hyphen_values = true)]
    pub input: Option<String>,

    /// Path to an output html file (empty derives `<input>.html`; omit to print).
    #[arg(long = "out", value_name = "PATH", allow_hyphen_values = true)]
    pub output: Option<String>,

    /// Title for the generated html doc (defaults to the input file name).
    #[arg(long, allow_hyphen_values = true)]
    pub title: Option<String>,

    /// Will the rendered markdown be used for web or pdf?
    #[arg(long = "format-for", value_name = "web|pdf", allow_hyphen_values = true)]
    pub format_for: Option<String>,

    /// Seconds to wait for the rendering service before giving up.
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Markdown rendering endpoint.
    #[arg(long, hide = true, env = "MDPAGE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Log pipeline progress to stderr.
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Parses process arguments, accepting Go-style `-flag` spellings.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Long flags that consume the following argument as their value.
const VALUE_FLAGS: [&str; 6] = ["in", "out", "title", "format-for", "timeout", "endpoint"];

/// Rewrites single-dash long flags (`-in`, `-format-for=pdf`) to the
/// double-dash form clap expects.
///
/// A lone `-`, tokens that already start with `--`, single-letter flags
/// and negative numbers pass through unchanged. The token following a
/// value flag written without `=` is its value and is never rewritten,
/// so `-title -draft-` keeps `-draft-` as the title. Everything after a
/// `--` terminator is left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut terminated = false;
    let mut expects_value = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(i, arg)| {
            // argv[0] is the program name.
            if i == 0 || terminated {
                return arg;
            }
            if std::mem::take(&mut expects_value) {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                terminated = true;
                return arg;
            }
            expects_value = takes_separate_value(text);
            if is_single_dash_long(text) {
                let mut long = OsString::from("-");
                long.push(text);
                long
            } else {
                arg
            }
        })
        .collect()
}

fn is_single_dash_long(text: &str) -> bool {
    let Some(rest) = text.strip_prefix('-') else {
        return false;
    };
    let name = rest.split('=').next().unwrap_or_default();
    !rest.starts_with('-')
        && name.len() >= 2
        && name.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

/// True for `-title` / `--title` style tokens whose value is the next argument.
fn takes_separate_value(text: &str) -> bool {
    let name = text
        .strip_prefix("--")
        .or_else(|| text.strip_prefix('-'))
        .unwrap_or_default();
    !name.contains('=') && VALUE_FLAGS.contains(&name)
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
