//! # Configuration Loader / 配置加载器
//!
//! `load_config` is pure data loading: it reads and parses the TOML file and
//! accepts whatever is in it. Defaults are filled in by `resolve_config`.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use gp_core::config::AppConfig;
use gp_core::page::MAX_PAGE_SIZE;
use gp_core::DEFAULT_PAGE_SIZE;
use gp_infra::{ArticSourceConfig, DEFAULT_ARTIC_BASE_URL};

use super::CliArgs;

const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Settings the application actually runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub fields: Vec<String>,
    pub page_size: u32,
    pub initial_page: u32,
}

impl ResolvedConfig {
    pub fn source_config(&self) -> ArticSourceConfig {
        ArticSourceConfig {
            base_url: self.base_url.clone(),
            timeout: self.timeout,
            fields: self.fields.clone(),
        }
    }
}

/// Fills unset values with defaults and applies command-line overrides.
/// The page size is clamped to `1..=MAX_PAGE_SIZE`.
/// 用默认值补全未设置的项，并应用命令行覆盖
pub fn resolve_config(config: AppConfig, args: &CliArgs) -> ResolvedConfig {
    let base_url = if config.api.base_url.trim().is_empty() {
        DEFAULT_ARTIC_BASE_URL.to_string()
    } else {
        config.api.base_url
    };

    let timeout_ms = match config.api.timeout_ms {
        0 => DEFAULT_TIMEOUT_MS,
        ms => ms,
    };

    let configured_page_size = match config.paging.page_size {
        0 => DEFAULT_PAGE_SIZE,
        size => size,
    };

    let requested_page_size = args.page_size.unwrap_or(configured_page_size);
    let page_size = requested_page_size.clamp(1, MAX_PAGE_SIZE);
    if page_size != requested_page_size {
        ::tracing::warn!(
            requested = requested_page_size,
            using = page_size,
            max = MAX_PAGE_SIZE,
            "Page size out of range, clamped"
        );
    }

    ResolvedConfig {
        base_url,
        timeout: Duration::from_millis(timeout_ms),
        fields: config.api.fields,
        page_size,
        initial_page: args.page,
    }
}
