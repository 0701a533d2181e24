// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use riskwise_app::{CategoryFilter, SortMode};
use riskwise_relay::Credentials;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_VERSION: i64 = 1;
const APP_NAME: &str = "riskwise";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub relay: Relay,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            ui: Ui::default(),
            relay: Relay::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ui {
    pub default_sort: Option<String>,
    pub default_category: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Relay {
    pub base_url: Option<String>,
    pub public_key: Option<String>,
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub timeout: Option<String>,
}

impl Default for Relay {
    fn default() -> Self {
        Self {
            base_url: Some(riskwise_relay::DEFAULT_BASE_URL.to_owned()),
            public_key: None,
            service_id: None,
            template_id: None,
            timeout: Some("10s".to_owned()),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("RISKWISE_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set RISKWISE_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and move values under [ui] and [relay]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(sort) = &self.ui.default_sort
            && SortMode::parse(sort).is_none()
        {
            bail!(
                "ui.default_sort in {} must be one of recommended, price-asc, price-desc, claim-desc; got {sort:?}",
                path.display()
            );
        }

        if let Some(category) = &self.ui.default_category
            && CategoryFilter::parse(category).is_none()
        {
            bail!(
                "ui.default_category in {} must be any, Health, Life, or General; got {category:?}",
                path.display()
            );
        }

        if let Some(timeout) = &self.relay.timeout {
            let parsed = parse_duration(timeout)?;
            if parsed <= Duration::ZERO {
                bail!(
                    "relay.timeout in {} must be positive, got {}",
                    path.display(),
                    timeout
                );
            }
        }

        Ok(())
    }

    pub fn default_sort(&self) -> SortMode {
        self.ui
            .default_sort
            .as_deref()
            .and_then(SortMode::parse)
            .unwrap_or(SortMode::Recommended)
    }

    pub fn default_category(&self) -> CategoryFilter {
        self.ui
            .default_category
            .as_deref()
            .and_then(CategoryFilter::parse)
            .unwrap_or(CategoryFilter::Any)
    }

    pub fn relay_base_url(&self) -> &str {
        self.relay
            .base_url
            .as_deref()
            .unwrap_or(riskwise_relay::DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn relay_timeout(&self) -> Result<Duration> {
        parse_duration(self.relay.timeout.as_deref().unwrap_or("10s"))
    }

    /// Relay credentials merged with env overrides. Env wins over the file so
    /// keys can stay out of dotfiles. `None` means demo mode.
    pub fn relay_credentials(&self) -> Option<Credentials> {
        let public_key = env::var("RISKWISE_RELAY_PUBLIC_KEY")
            .ok()
            .or_else(|| self.relay.public_key.clone());
        let service_id = env::var("RISKWISE_RELAY_SERVICE_ID")
            .ok()
            .or_else(|| self.relay.service_id.clone());
        let template_id = env::var("RISKWISE_RELAY_TEMPLATE_ID")
            .ok()
            .or_else(|| self.relay.template_id.clone());
        Credentials::from_parts(
            public_key.as_deref(),
            service_id.as_deref(),
            template_id.as_deref(),
        )
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# riskwise config\n# Place this file at: {}\n\nversion = 1\n\n[ui]\n# recommended | price-asc | price-desc | claim-desc\ndefault_sort = \"recommended\"\n# any | Health | Life | General\ndefault_category = \"any\"\n\n[relay]\nbase_url = \"{}\"\n# Leave the three ids unset to run in demo mode (no leads are sent).\n# public_key = \"...\"\n# service_id = \"...\"\n# template_id = \"...\"\ntimeout = \"10s\"\n",
            path.display(),
            riskwise_relay::DEFAULT_BASE_URL,
        )
    }
}

fn parse_duration(raw: &str) -> Result<Duration> {
    if let Some(value) = raw.strip_suffix("ms") {
        let millis: u64 = value
            .parse()
            .with_context(|| format!("invalid timeout duration {raw:?}"))?;
        return Ok(Duration::from_millis(millis));
    }
    if let Some(value) = raw.strip_suffix('s') {
        let secs: u64 = value
            .parse()
            .with_context(|| format!("invalid timeout duration {raw:?}"))?;
        return Ok(Duration::from_secs(secs));
    }
    if let Some(value) = raw.strip_suffix('m') {
        let mins: u64 = value
            .parse()
            .with_context(|| format!("invalid timeout duration {raw:?}"))?;
        return Ok(Duration::from_secs(mins * 60));
    }

    bail!("invalid duration {raw:?}; use one of: <N>ms, <N>s, <N>m (for example 500ms or 10s)")
}

#[cfg(test)]
mod tests {
    use super::{Config, parse_duration};
    use anyhow::Result;
    use riskwise_app::{Category, CategoryFilter, SortMode};
    use std::path::PathBuf;
    use std::sync::{Mutex, OnceLock};
    use std::time::Duration;

    fn write_config(content: &str) -> Result<(tempfile::TempDir, PathBuf)> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        std::fs::write(&path, content)?;
        Ok((temp, path))
    }

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        match ENV_LOCK.get_or_init(|| Mutex::new(())).lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn clear_relay_env() {
        for key in [
            "RISKWISE_RELAY_PUBLIC_KEY",
            "RISKWISE_RELAY_SERVICE_ID",
            "RISKWISE_RELAY_TEMPLATE_ID",
        ] {
            // SAFETY: test-only process-local env mutation.
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    fn missing_config_uses_defaults() -> Result<()> {
        let _guard = env_lock();
        clear_relay_env();
        let temp = tempfile::tempdir()?;
        let config = Config::load(&temp.path().join("missing.toml"))?;
        assert_eq!(config.version, 1);
        assert_eq!(config.default_sort(), SortMode::Recommended);
        assert_eq!(config.default_category(), CategoryFilter::Any);
        assert!(config.relay_credentials().is_none(), "defaults run in demo");
        Ok(())
    }

    #[test]
    fn unversioned_config_is_rejected_with_actionable_message() -> Result<()> {
        let (_temp, path) = write_config("[relay]\npublic_key=\"pk\"\n")?;
        let error = Config::load(&path).expect_err("unversioned config should fail");
        let message = error.to_string();
        assert!(message.contains("version = 1"));
        assert!(message.contains("[ui] and [relay]"));
        Ok(())
    }

    #[test]
    fn full_config_parses() -> Result<()> {
        let _guard = env_lock();
        clear_relay_env();
        let (_temp, path) = write_config(
            "version = 1\n[ui]\ndefault_sort = \"price-asc\"\ndefault_category = \"Life\"\n[relay]\npublic_key = \"pk\"\nservice_id = \"svc\"\ntemplate_id = \"tpl\"\ntimeout = \"2s\"\n",
        )?;

        let config = Config::load(&path)?;
        assert_eq!(config.default_sort(), SortMode::PriceAscending);
        assert_eq!(
            config.default_category(),
            CategoryFilter::Only(Category::Life),
        );
        assert!(config.relay_credentials().is_some());
        assert_eq!(config.relay_timeout()?, Duration::from_secs(2));
        Ok(())
    }

    #[test]
    fn malformed_config_returns_parse_error() -> Result<()> {
        let (_temp, path) = write_config("{{not toml")?;
        let error = Config::load(&path).expect_err("malformed config should fail");
        assert!(error.to_string().contains("parse TOML config"));
        Ok(())
    }

    #[test]
    fn unsupported_config_version_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 9\n")?;
        let error = Config::load(&path).expect_err("v9 config should fail");
        assert!(error.to_string().contains("unsupported config version 9"));
        Ok(())
    }

    #[test]
    fn invalid_default_sort_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[ui]\ndefault_sort = \"cheapest\"\n")?;
        let error = Config::load(&path).expect_err("bad sort key should fail");
        assert!(error.to_string().contains("ui.default_sort"));
        Ok(())
    }

    #[test]
    fn invalid_default_category_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[ui]\ndefault_category = \"Car\"\n")?;
        let error = Config::load(&path).expect_err("bad category should fail");
        assert!(error.to_string().contains("ui.default_category"));
        Ok(())
    }

    #[test]
    fn partial_relay_credentials_mean_demo_mode() -> Result<()> {
        let _guard = env_lock();
        clear_relay_env();
        let (_temp, path) = write_config(
            "version = 1\n[relay]\npublic_key = \"pk\"\nservice_id = \"svc\"\n",
        )?;
        let config = Config::load(&path)?;
        assert!(config.relay_credentials().is_none());
        Ok(())
    }

    #[test]
    fn env_overrides_complete_relay_credentials() -> Result<()> {
        let _guard = env_lock();
        clear_relay_env();
        let (_temp, path) = write_config(
            "version = 1\n[relay]\npublic_key = \"pk\"\nservice_id = \"svc\"\n",
        )?;
        let config = Config::load(&path)?;
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("RISKWISE_RELAY_TEMPLATE_ID", "tpl-env");
        }
        let credentials = config.relay_credentials();
        clear_relay_env();
        assert!(credentials.is_some());
        Ok(())
    }

    #[test]
    fn default_path_honors_env_override() -> Result<()> {
        let _guard = env_lock();
        let temp = tempfile::tempdir()?;
        let override_path = temp.path().join("custom-config.toml");
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("RISKWISE_CONFIG_PATH", &override_path);
        }
        let resolved = Config::default_path();
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("RISKWISE_CONFIG_PATH");
        }
        assert_eq!(resolved?, override_path);
        Ok(())
    }

    #[test]
    fn relay_base_url_trims_trailing_slashes() -> Result<()> {
        let (_temp, path) =
            write_config("version = 1\n[relay]\nbase_url = \"https://relay.example///\"\n")?;
        let config = Config::load(&path)?;
        assert_eq!(config.relay_base_url(), "https://relay.example");
        Ok(())
    }

    #[test]
    fn relay_timeout_parses_ms_seconds_and_minutes() -> Result<()> {
        assert_eq!(parse_duration("500ms")?, Duration::from_millis(500));
        assert_eq!(parse_duration("10s")?, Duration::from_secs(10));
        assert_eq!(parse_duration("2m")?, Duration::from_secs(120));
        Ok(())
    }

    #[test]
    fn relay_timeout_rejects_non_positive_values_in_config() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[relay]\ntimeout = \"0s\"\n")?;
        let error = Config::load(&path).expect_err("zero timeout should fail");
        assert!(error.to_string().contains("must be positive"));
        Ok(())
    }

    #[test]
    fn example_config_includes_required_sections() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        let example = Config::example_config(&path);
        assert!(example.contains("version = 1"));
        assert!(example.contains("[ui]"));
        assert!(example.contains("[relay]"));
        assert!(example.contains("demo mode"));
        Ok(())
    }
}
