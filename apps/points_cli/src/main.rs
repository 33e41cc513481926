use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use client_core::{view::format_position, ClientSettings, MapView, SubmissionStatus, Viewport};
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

/// Submit a JSON list of coordinates to the points service and print the
/// resulting map view.
#[derive(Parser, Debug)]
struct Args {
    /// JSON file to submit; reads stdin when omitted or `-`.
    input: Option<PathBuf>,
    /// Base URL of the points service (overrides config and environment).
    #[arg(long)]
    api_url: Option<String>,
    /// Config file (defaults to ./points_client.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the map view as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = ClientSettings::load(args.config.as_deref())?;
    if let Some(api_url) = args.api_url {
        settings.api_base_url = api_url;
    }
    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .with_writer(std::io::stderr)
        .init();

    info!(api_base_url = %settings.api_base_url, "points_cli starting");

    let raw = read_input(args.input.as_ref()).await?;
    debug!(bytes = raw.len(), "read coordinates input");
    let workflow = client_core::connect(&settings)?;
    workflow.set_input(raw);
    let status = workflow.submit_input().await;
    let state = workflow.store().snapshot();
    info!(
        points = state.coordinates.len(),
        reconciled = state.bounds.is_some(),
        status = ?status,
        "submission finished"
    );

    let view = MapView::from_state(&state);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_view(&view);
    }

    match status {
        SubmissionStatus::Succeeded(message) => {
            eprintln!("{message}");
            Ok(())
        }
        SubmissionStatus::Failed(message) => bail!(message),
        other => bail!("submission ended in unexpected state: {other:?}"),
    }
}

async fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read input file {}", path.display())),
        _ => {
            let mut raw = String::new();
            tokio::io::stdin()
                .read_to_string(&mut raw)
                .await
                .context("failed to read coordinates from stdin")?;
            Ok(raw)
        }
    }
}

fn print_view(view: &MapView) {
    match &view.viewport {
        Viewport::FitBounds { bounds } => println!(
            "viewport: server bounds {} - {}",
            format_position(&bounds.south_west()),
            format_position(&bounds.north_east())
        ),
        Viewport::FitPoints { bounds } => println!(
            "viewport: point envelope {} - {}",
            format_position(&bounds.south_west()),
            format_position(&bounds.north_east())
        ),
        Viewport::Default { center, zoom } => {
            println!("viewport: default {} zoom {zoom}", format_position(center))
        }
    }
    for marker in &view.markers {
        println!("  {}", marker.label);
    }
    if let Some(centroid) = &view.centroid {
        println!("  {}", centroid.label);
    }
}
