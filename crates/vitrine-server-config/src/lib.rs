// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration management for the Vitrine site.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Startup validation of the locale set (fail before serving, not per request)
//! - Consistent environment variable naming (`VITRINE_*`)
//!
//! # Usage
//!
//! ```ignore
//! use vitrine_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("Default locale: {}", config.i18n.locales.default_locale());
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved site configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerConfig {
	pub i18n: I18nConfig,
	pub logging: LoggingConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`VITRINE_*`)
/// 2. Config file (`/etc/vitrine/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Merge the given sources in precedence order and finalize.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let i18n = layer.i18n.unwrap_or_default().finalize()?;
	let logging = layer.logging.unwrap_or_default().finalize();

	validate_config(&i18n)?;

	info!(
		locales = ?i18n.locales.supported_locales(),
		default_locale = %i18n.locales.default_locale(),
		namespaces = ?i18n.locales.namespaces(),
		messages_dir = %i18n.messages_dir.display(),
		environment = %i18n.environment,
		"Site configuration loaded"
	);

	Ok(ServerConfig { i18n, logging })
}

/// Validate cross-field configuration rules.
fn validate_config(i18n: &I18nConfig) -> Result<(), ConfigError> {
	if i18n.is_production() && i18n.messages_dir.as_os_str().is_empty() {
		return Err(ConfigError::Validation(
			"VITRINE_I18N_MESSAGES_DIR is empty while VITRINE_ENV=production. \
			 Set it to the directory holding <locale>/<namespace>.json files."
				.to_string(),
		));
	}

	Ok(())
}
