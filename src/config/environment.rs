// ABOUTME: Environment-based configuration for HTTP, logging and the LLM provider
// ABOUTME: Parses and validates variables once at startup; never logs the API key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

use std::env;
use std::fmt::{self, Display};
use std::net::IpAddr;

use anyhow::{anyhow, Context, Result};
use fitlyst_core::constants::generation::{API_KEY_ENV_VAR, DEFAULT_BASE_URL, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default HTTP listen port
pub const DEFAULT_HTTP_PORT: u16 = 8081;

/// Default bind address
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default request timeout toward the completion service
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 60;

/// Default request body limit for the HTTP API
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment (default)
    #[default]
    Development,
    /// Production environment
    Production,
    /// Testing environment for automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Bind address
    pub host: IpAddr,
    /// Listen port
    pub port: u16,
    /// Maximum accepted request body
    pub max_body_bytes: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_HTTP_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Cross-origin settings for browser clients
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*` for any origin
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Completion service settings
#[derive(Clone, PartialEq, Eq)]
pub struct LlmConfig {
    /// API credential; absence is reported per request, not at startup
    pub api_key: Option<String>,
    /// OpenAI-compatible base URL
    pub base_url: String,
    /// Model id
    pub model: String,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            request_timeout_secs: DEFAULT_LLM_TIMEOUT_SECS,
        }
    }
}

impl LlmConfig {
    /// Environment variable for the base URL
    pub const BASE_URL_ENV: &'static str = "FITLYST_LLM_BASE_URL";
    /// Environment variable for the model id
    pub const MODEL_ENV: &'static str = "FITLYST_LLM_MODEL";
    /// Environment variable for the request timeout
    pub const TIMEOUT_ENV: &'static str = "FITLYST_LLM_TIMEOUT_SECS";

    /// Load completion settings from the environment
    ///
    /// An empty `OPENAI_API_KEY` counts as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is not a positive integer.
    pub fn from_env() -> Result<Self> {
        let request_timeout_secs: u64 =
            env_var_or(Self::TIMEOUT_ENV, &DEFAULT_LLM_TIMEOUT_SECS.to_string())
                .parse()
                .with_context(|| format!("Invalid {} value", Self::TIMEOUT_ENV))?;
        if request_timeout_secs == 0 {
            return Err(anyhow!("{} must be greater than zero", Self::TIMEOUT_ENV));
        }

        Ok(Self {
            api_key: env::var(API_KEY_ENV_VAR)
                .ok()
                .filter(|key| !key.trim().is_empty()),
            base_url: env_var_or(Self::BASE_URL_ENV, DEFAULT_BASE_URL),
            model: env_var_or(Self::MODEL_ENV, DEFAULT_MODEL),
            request_timeout_secs,
        })
    }

    /// Whether a credential is present
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// HTTP listener
    pub http: HttpConfig,
    /// CORS policy
    pub cors: CorsConfig,
    /// Completion service
    pub llm: LlmConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            http: HttpConfig {
                host: env_var_or("HOST", DEFAULT_HOST)
                    .parse()
                    .context("Invalid HOST value")?,
                port: env_var_or("HTTP_PORT", &DEFAULT_HTTP_PORT.to_string())
                    .parse()
                    .context("Invalid HTTP_PORT value")?,
                max_body_bytes: env_var_or("MAX_BODY_BYTES", &DEFAULT_MAX_BODY_BYTES.to_string())
                    .parse()
                    .context("Invalid MAX_BODY_BYTES value")?,
            },
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
            llm: LlmConfig::from_env()?,
        };

        config.validate();
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Warn about settings that start but will not work
    pub fn validate(&self) {
        if self.environment.is_production() && self.cors.allowed_origins.trim() == "*" {
            warn!("CORS allows any origin in production; set CORS_ALLOWED_ORIGINS");
        }
        if !self.llm.has_api_key() {
            warn!(
                "{API_KEY_ENV_VAR} is not set; meal idea generation will fail until it is configured"
            );
        }
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Fitlyst Server Configuration:\n\
             - Environment: {}\n\
             - HTTP: {}:{}\n\
             - CORS Origins: {}\n\
             - LLM Base URL: {}\n\
             - LLM Model: {}\n\
             - LLM Timeout: {}s\n\
             - API Key: {}",
            self.environment,
            self.http.host,
            self.http.port,
            self.cors.allowed_origins,
            self.llm.base_url,
            self.llm.model,
            self.llm.request_timeout_secs,
            if self.llm.has_api_key() {
                "Configured"
            } else {
                "Missing"
            },
        )
    }
}

/// Read an environment variable with a fallback
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
