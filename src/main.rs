// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use decode_bridge::config::{load_and_validate_config, AdapterConfig};
use decode_bridge::envelope::Response;
use decode_bridge::service::DecodeService;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: decode-bridge [--config <settings.yaml|settings.toml>] [--metadata] [request.json|-]";

/// Parsed command line.
struct Cli {
    config: Option<PathBuf>,
    metadata: bool,
    request: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Cli> {
    let mut cli = Cli {
        config: None,
        metadata: false,
        request: None,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => match args.next() {
                Some(path) => cli.config = Some(PathBuf::from(path)),
                None => bail!("--config requires a path\n{USAGE}"),
            },
            "--metadata" => cli.metadata = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            "-" => cli.request = None,
            other if other.starts_with("--") => bail!("Unknown option '{other}'\n{USAGE}"),
            other => cli.request = Some(PathBuf::from(other)),
        }
    }
    Ok(cli)
}

fn read_request(source: Option<&PathBuf>) -> anyhow::Result<String> {
    match source {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request from {}", path.display())),
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read request from standard input")?;
            Ok(raw)
        }
    }
}

fn emit(text: &str) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}")?;
    stdout.flush()?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries only the response envelope
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = parse_args(env::args().skip(1))?;

    let config = match &cli.config {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => AdapterConfig::default(),
    };
    let service = DecodeService::from_config(&config);

    if cli.metadata {
        return emit(&service.metadata()?.to_json()?);
    }

    let raw = read_request(cli.request.as_ref())?;
    match service.execute(&raw).await {
        Ok(response) => emit(&response),
        Err(fault) => {
            tracing::error!(error = %fault, "Request aborted");
            emit(&Response::error(fault.to_string()).to_json()?)?;
            Err(fault.into())
        }
    }
}
