use std::env;
use std::path::PathBuf;

use log::warn;
use thiserror::Error;

/// Environment variables consulted at startup.
pub const ACCESS_TOKEN_VAR: &str = "CANVAS_ACCESS_TOKEN";
pub const HOSTNAME_VAR: &str = "CANVAS_PROD_HOSTNAME";
pub const ACCOUNT_ID_VAR: &str = "CANVAS_ROOT_ACCOUNT_ID";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingEnv(Vec<String>),
    #[error("no term ids given")]
    NoTerms,
}

/// Everything one run needs, resolved once at startup and passed by
/// reference into each phase.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub access_token: String,
    pub hostname: String,
    pub account_id: String,
    pub tool_id: String,
    pub term_ids: Vec<String>,
    pub output: PathBuf,
}

impl RunConfig {
    pub fn from_env(
        tool_id: String,
        term_ids: &str,
        output: PathBuf,
    ) -> Result<Self, ConfigError> {
        Self::resolve(|name| env::var(name).ok(), tool_id, term_ids, output)
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// Missing required variables are collected and reported together, so
    /// the operator fixes their environment in one pass. An empty value
    /// counts as missing.
    pub fn resolve(
        lookup: impl Fn(&str) -> Option<String>,
        tool_id: String,
        term_ids: &str,
        output: PathBuf,
    ) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        let mut required = |name: &str| match lookup(name).filter(|value| !value.is_empty()) {
            Some(value) => value,
            None => {
                missing.push(name.to_owned());
                String::new()
            }
        };

        let access_token = required(ACCESS_TOKEN_VAR);
        let hostname = required(HOSTNAME_VAR);
        if !missing.is_empty() {
            return Err(ConfigError::MissingEnv(missing));
        }

        // Optional, but the course listing URL is built around it.
        let account_id = lookup(ACCOUNT_ID_VAR).unwrap_or_default();
        if account_id.is_empty() {
            warn!("{ACCOUNT_ID_VAR} is not set; course listing URLs will have an empty account id");
        }

        let term_ids: Vec<String> = term_ids
            .split(',')
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_owned)
            .collect();
        if term_ids.is_empty() {
            return Err(ConfigError::NoTerms);
        }

        Ok(Self {
            access_token,
            hostname,
            account_id,
            tool_id,
            term_ids,
            output,
        })
    }
}

/// Render a token for debug output without exposing it.
pub fn mask_token(token: &str) -> String {
    match (token.get(..6), token.get(token.len().saturating_sub(4)..)) {
        (Some(head), Some(tail)) if token.len() > 10 => format!("{head}...{tail}"),
        _ => "***".to_owned(),
    }
}
