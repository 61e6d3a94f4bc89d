// ABOUTME: HTTP server assembly: shared resources, router construction and lifecycle
// ABOUTME: Binds the listener and serves until a shutdown signal arrives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

//! # Server
//!
//! [`ServerResources`] is the container handed to every stateful route.
//! [`build_router`] is what integration tests drive directly; [`run`] binds
//! a TCP listener around it.

use std::fmt::Display;
use std::future::{self, Future};
#[cfg(unix)]
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use fitlyst_intelligence::NutritionConfig;
use tokio::net::TcpListener;
use tokio::signal;
#[cfg(unix)]
use tokio::signal::unix::{signal as unix_signal, SignalKind};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::llm::{LlmProvider, OpenAiCompatibleConfig, OpenAiCompatibleProvider};
use crate::middleware::{http_trace_layer, setup_cors};
use crate::routes::{HealthRoutes, MealIdeaRoutes, NutritionRoutes, OnboardingRoutes};
use crate::services::MealIdeaService;

/// Shared state for route handlers
#[derive(Clone)]
pub struct ServerResources {
    /// Meal idea generation
    pub meal_ideas: MealIdeaService,
    /// Calculator tables
    pub nutrition_config: NutritionConfig,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Assemble resources around an existing provider
    #[must_use]
    pub fn new(config: ServerConfig, provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            meal_ideas: MealIdeaService::new(provider),
            nutrition_config: NutritionConfig::default(),
            config: Arc::new(config),
        }
    }

    /// Assemble resources with the OpenAI-compatible provider from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_config(config: ServerConfig) -> Result<Self> {
        let provider = OpenAiCompatibleProvider::new(OpenAiCompatibleConfig::from(&config.llm))
            .context("Failed to initialize LLM provider")?;
        Ok(Self::new(config, Arc::new(provider)))
    }
}

/// Build the complete API router with middleware
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors);
    let body_limit = RequestBodyLimitLayer::new(resources.config.http.max_body_bytes);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(OnboardingRoutes::routes())
        .merge(NutritionRoutes::routes(Arc::clone(&resources)))
        .merge(MealIdeaRoutes::routes(resources))
        .layer(body_limit)
        .layer(cors)
        .layer(http_trace_layer())
}

/// Serve the API until Ctrl+C or SIGTERM
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn run(resources: ServerResources) -> Result<()> {
    let addr = SocketAddr::new(resources.config.http.host, resources.config.http.port);
    let app = build_router(Arc::new(resources));

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;
    info!("HTTP server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = signal_or_pending(signal::ctrl_c(), "Ctrl+C");

    #[cfg(unix)]
    let terminate = signal_or_pending(
        async {
            let mut stream = unix_signal(SignalKind::terminate())?;
            stream.recv().await;
            Ok::<(), io::Error>(())
        },
        "SIGTERM",
    );

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}

/// Resolve once `listener` reports its signal
///
/// A listener that cannot be registered never resolves, so it cannot be
/// mistaken for a delivered signal.
async fn signal_or_pending<E: Display>(
    listener: impl Future<Output = Result<(), E>>,
    name: &str,
) {
    if let Err(e) = listener.await {
        warn!("Failed to listen for {name}: {e}");
        future::pending::<()>().await;
    }
}
