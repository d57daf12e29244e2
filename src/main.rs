use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::process::ExitCode;

use stapi_charts::cli::{Cli, OutputFormat};
use stapi_charts::config;
use stapi_charts::infra::stapi::StapiClient;
use stapi_charts::render::json::JsonRenderer;
use stapi_charts::render::text::TextRenderer;
use stapi_charts::render::{render, Renderer};
use stapi_charts::workflows;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether both pipelines succeeded.
async fn run(cli: Cli) -> Result<bool> {
    stapi_charts::logging::init().context("init logging")?;
    tracing::debug!(?cli, "parsed cli");

    let settings = config::resolve(cli.base_url, cli.page_size)?;
    tracing::info!(base_url = %settings.base_url, "using STAPI");
    let client = StapiClient::new(settings.base_url, settings.page_size);

    let outcome = workflows::run_all(&client, cli.label).await;
    for (pipeline, failed) in [
        ("seasons", outcome.seasons.as_ref().err()),
        ("weapons", outcome.weapons.as_ref().err()),
    ] {
        if let Some(e) = failed {
            tracing::error!(pipeline, "pipeline failed: {e:#}");
        }
    }

    let today = chrono::Local::now().date_naive();
    let stdout = io::stdout().lock();
    let mut renderer: Box<dyn Renderer> = match cli.format {
        OutputFormat::Text => Box::new(TextRenderer::new(stdout, today)),
        OutputFormat::Json => Box::new(JsonRenderer::new(stdout, today)),
    };
    render(renderer.as_mut(), &outcome)?;

    Ok(outcome.is_success())
}
