// ABOUTME: Fitlyst HTTP server binary
// ABOUTME: Loads environment configuration, applies CLI overrides and serves the API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

//! # Fitlyst Server Binary
//!
//! Starts the onboarding, nutrition and meal idea API.

use std::net::IpAddr;

use anyhow::Result;
use clap::Parser;
use fitlyst::config::ServerConfig;
use fitlyst::logging;
use fitlyst::server::{run, ServerResources};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "fitlyst-server")]
#[command(about = "Fitlyst - nutrition targets and AI meal ideas over HTTP")]
struct Args {
    /// Override bind address
    #[arg(long)]
    host: Option<IpAddr>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http.port = http_port;
    }

    info!("{}", config.summary());

    let resources = ServerResources::from_config(config)?;
    if let Err(e) = run(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
