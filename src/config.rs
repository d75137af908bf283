// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Fintrack", "fintrack"));

pub const ENV_API_URL: &str = "FINTRACK_API_URL";
pub const ENV_CURRENCY: &str = "FINTRACK_CURRENCY";
pub const ENV_CURRENCY_SYMBOL: &str = "FINTRACK_CURRENCY_SYMBOL";

/// Description prefix written on contributions when none is configured.
pub const DEFAULT_CONTRIBUTION_PREFIX: &str = "Contribution to goal";

/// User settings, passed explicitly to every call that needs them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the ledger API, without the `/api` suffix.
    pub api_url: String,
    /// ISO 4217 code stamped on records created from this client.
    pub currency: String,
    pub currency_symbol: String,
    pub recent_limit: usize,
    pub timeout_secs: u64,
    /// Sends `ngrok-skip-browser-warning` for APIs tunnelled through ngrok.
    pub ngrok_skip_warning: bool,
    /// Payment method recorded on goal contributions.
    pub contribution_payment_method: String,
    /// Description prefix of the expense linked to a goal contribution.
    pub contribution_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_url: "http://localhost:8080".to_string(),
            currency: "USD".to_string(),
            currency_symbol: "$".to_string(),
            recent_limit: crate::engine::DEFAULT_RECENT_LIMIT,
            timeout_secs: 15,
            ngrok_skip_warning: false,
            contribution_payment_method: "Efectivo".to_string(),
            contribution_prefix: DEFAULT_CONTRIBUTION_PREFIX.to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .ok_or_else(|| Error::Config("could not determine platform config dir".into()))?;
    Ok(proj.config_dir().join("config.json"))
}

impl Settings {
    /// Settings from the platform config file, then the environment.
    pub fn load() -> Result<Settings> {
        let path = config_path()?;
        let settings = Settings::load_from(&path)?;
        Ok(settings.with_overrides(|k| std::env::var(k).ok()))
    }

    /// Reads `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Settings> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Settings::default());
        }
        let raw = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&raw)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Applies `FINTRACK_*` variables looked up through `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }
        if let Some(ccy) = lookup(ENV_CURRENCY).filter(|v| !v.trim().is_empty()) {
            self.currency = ccy.trim().to_uppercase();
        }
        if let Some(sym) = lookup(ENV_CURRENCY_SYMBOL) {
            self.currency_symbol = sym;
        }
        self
    }

    /// Prefixes that mark a `Metas` expense as a goal contribution: the
    /// configured one and the default it may have replaced.
    pub fn contribution_prefixes(&self) -> Vec<&str> {
        let mut out = vec![self.contribution_prefix.trim()];
        if !out[0].eq_ignore_ascii_case(DEFAULT_CONTRIBUTION_PREFIX) {
            out.push(DEFAULT_CONTRIBUTION_PREFIX);
        }
        out
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "api_url '{}' must start with http:// or https://",
                self.api_url
            )));
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::Config(format!(
                "currency '{}' is not an ISO 4217 code",
                self.currency
            )));
        }
        if self.contribution_prefix.trim().is_empty() || self.contribution_prefix.contains(':') {
            return Err(Error::Config(
                "contribution_prefix must be non-empty and free of ':'".into(),
            ));
        }
        if self.recent_limit == 0 {
            return Err(Error::Config("recent_limit must be at least 1".into()));
        }
        Ok(())
    }
}
