//! Entry point: wires CLI → params → renderer → document → output.
//!
//! This is the thin orchestrator that connects all pipeline stages and
//! maps failures to the process exit status.

mod cli;
mod document;
mod error;
mod output;
mod params;
mod pipeline;
mod render;
mod telemetry;

use std::io;
use std::process::ExitCode;

use crate::cli::Cli;
use crate::error::ConvertError;
use crate::render::GithubRenderer;

fn main() -> color_eyre::Result<ExitCode> {
    // Install color_eyre error/panic hooks for pretty backtraces.
    color_eyre::install()?;

    let cli = Cli::parse_normalized();
    telemetry::init(cli.verbose);

    match run(&cli) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            // Errors are reported on stdout, matching the documented interface.
            println!("{err}");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Resolves parameters and runs one conversion against the real service.
fn run(cli: &Cli) -> Result<(), ConvertError> {
    let params = params::resolve(cli)?;
    let renderer = GithubRenderer::new(params.endpoint.as_str(), params.timeout)?;
    pipeline::convert(&params, &renderer, &mut io::stdout().lock())
}
