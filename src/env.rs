//! Bootstrap environment validation.
//!
//! The API endpoint the notes are served from comes from the process
//! environment. Validation never fails by itself: it returns the errors
//! and warnings it found, and [`assert_valid`] is the one entry point that
//! turns an invalid result into an error.

use serde::Serialize;
use thiserror::Error;

pub const API_BASE_VAR: &str = "HARK_API_BASE";
pub const API_KEY_VAR: &str = "HARK_API_KEY";
pub const MODE_VAR: &str = "HARK_ENV";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvConfig {
    pub api_base: String,
    #[serde(skip)]
    pub api_key: Option<String>,
    pub is_dev: bool,
    pub is_prod: bool,
    /// `HARK_ENV` value that was neither mode and so was ignored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown_mode: Option<String>,
}

impl EnvConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let build_default = !cfg!(debug_assertions);
        let mode = var(MODE_VAR);
        let (is_prod, unknown_mode) = match mode.as_deref() {
            Some("production") => (true, None),
            Some("development") => (false, None),
            Some(_) => (build_default, mode),
            None => (build_default, None),
        };
        Self {
            api_base: var(API_BASE_VAR).unwrap_or_default(),
            api_key: var(API_KEY_VAR),
            is_dev: !is_prod,
            is_prod,
            unknown_mode,
        }
    }

    pub const fn mode(&self) -> &'static str {
        if self.is_prod {
            "production"
        } else {
            "development"
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnvValidation {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl EnvValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvError {
    #[error("Environment configuration is invalid:\n{}", .0.join("\n"))]
    Invalid(Vec<String>),
}

pub fn validate(config: &EnvConfig) -> EnvValidation {
    let mut result = EnvValidation::default();

    if config.api_base.is_empty() {
        result.errors.push(format!(
            "{API_BASE_VAR} is not set. Export it before launching:\n\
             {API_BASE_VAR}=http://localhost:8787"
        ));
    } else if url::Url::parse(&config.api_base).is_err() {
        result.errors.push(format!(
            "{API_BASE_VAR} is not a valid URL: {}",
            config.api_base
        ));
    }

    if let Some(mode) = &config.unknown_mode {
        result.warnings.push(format!(
            "{MODE_VAR} has unrecognised value \"{mode}\"; expected development or production. Using {}.",
            config.mode()
        ));
    }

    if config.api_key.is_none() && config.is_prod {
        result.warnings.push(format!(
            "{API_KEY_VAR} is not set. API requests may fail if authentication is required."
        ));
    }

    result
}

/// Log the configuration and validation findings. Quiet outside development.
pub fn log_validation(config: &EnvConfig, result: &EnvValidation) {
    if !config.is_dev {
        return;
    }
    let api_base = if config.api_base.is_empty() {
        "(not set)"
    } else {
        config.api_base.as_str()
    };
    let api_key = if config.api_key.is_some() {
        "(set)"
    } else {
        "(not set)"
    };
    tracing::info!(api_base, api_key, mode = config.mode(), "environment configuration");

    for error in &result.errors {
        tracing::error!("{error}");
    }
    for warning in &result.warnings {
        tracing::warn!("{warning}");
    }
    if result.is_valid() && result.warnings.is_empty() {
        tracing::info!("all environment variables are valid");
    }
}

/// Validate and fail on any error.
///
/// # Errors
/// Returns [`EnvError::Invalid`] listing every validation error.
pub fn assert_valid(config: &EnvConfig) -> Result<(), EnvError> {
    let result = validate(config);
    if result.is_valid() {
        Ok(())
    } else {
        Err(EnvError::Invalid(result.errors))
    }
}
