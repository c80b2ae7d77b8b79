//! # Pure Data Module / 纯数据模块
//!
//! Configuration data structures and the TOML → DTO mapping.
//!
//! > **This module contains data only, no policy, no validation.**
//! > Defaults are applied by the bootstrap layer, not here.

mod app_config;

pub use app_config::{ApiConfig, AppConfig, PagingConfig};
