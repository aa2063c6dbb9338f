// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale and message configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use vitrine_common_i18n::{FailurePolicy, LocaleConfig, DEFAULT_LOCALE, LOCALES, NAMESPACES};

use crate::error::ConfigError;

const DEFAULT_MESSAGES_DIR: &str = "messages";
const DEFAULT_ENVIRONMENT: &str = "development";

/// i18n configuration (runtime, fully resolved and validated).
#[derive(Debug, Clone, PartialEq)]
pub struct I18nConfig {
	pub locales: LocaleConfig,
	pub messages_dir: PathBuf,
	pub environment: String,
}

impl Default for I18nConfig {
	fn default() -> Self {
		Self {
			locales: LocaleConfig::default(),
			messages_dir: PathBuf::from(DEFAULT_MESSAGES_DIR),
			environment: DEFAULT_ENVIRONMENT.to_string(),
		}
	}
}

impl I18nConfig {
	pub fn is_production(&self) -> bool {
		self.environment == "production"
	}

	/// Production serves the default locale's messages instead of failing.
	pub fn failure_policy(&self) -> FailurePolicy {
		if self.is_production() {
			FailurePolicy::FallbackToDefault
		} else {
			FailurePolicy::FailLoud
		}
	}
}

/// i18n configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct I18nConfigLayer {
	#[serde(default)]
	pub locales: Option<Vec<String>>,
	#[serde(default)]
	pub default_locale: Option<String>,
	#[serde(default)]
	pub namespaces: Option<Vec<String>>,
	#[serde(default)]
	pub messages_dir: Option<String>,
	#[serde(default)]
	pub environment: Option<String>,
}

impl I18nConfigLayer {
	pub fn merge(&mut self, other: I18nConfigLayer) {
		if other.locales.is_some() {
			self.locales = other.locales;
		}
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.namespaces.is_some() {
			self.namespaces = other.namespaces;
		}
		if other.messages_dir.is_some() {
			self.messages_dir = other.messages_dir;
		}
		if other.environment.is_some() {
			self.environment = other.environment;
		}
	}

	/// Resolve into a validated config; an invalid locale set is fatal.
	pub fn finalize(self) -> Result<I18nConfig, ConfigError> {
		let locales = LocaleConfig::new(
			self
				.locales
				.unwrap_or_else(|| LOCALES.iter().map(|l| l.to_string()).collect()),
			self
				.default_locale
				.unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
			self
				.namespaces
				.unwrap_or_else(|| NAMESPACES.iter().map(|n| n.to_string()).collect()),
		)?;

		Ok(I18nConfig {
			locales,
			messages_dir: PathBuf::from(
				self
					.messages_dir
					.unwrap_or_else(|| DEFAULT_MESSAGES_DIR.to_string()),
			),
			environment: self
				.environment
				.unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = I18nConfigLayer::default().finalize().unwrap();
		assert_eq!(config, I18nConfig::default());
		assert_eq!(config.locales.default_locale(), "en");
		assert_eq!(config.failure_policy(), FailurePolicy::FailLoud);
	}

	#[test]
	fn test_production_falls_back() {
		let layer = I18nConfigLayer {
			environment: Some("production".to_string()),
			..Default::default()
		};
		let config = layer.finalize().unwrap();
		assert!(config.is_production());
		assert_eq!(config.failure_policy(), FailurePolicy::FallbackToDefault);
	}

	#[test]
	fn test_default_outside_locales_is_rejected() {
		let layer = I18nConfigLayer {
			locales: Some(vec!["cs".to_string(), "de".to_string()]),
			..Default::default()
		};
		assert!(matches!(layer.finalize(), Err(ConfigError::I18n(_))));
	}

	#[test]
	fn test_empty_namespaces_rejected() {
		let layer = I18nConfigLayer {
			namespaces: Some(Vec::new()),
			..Default::default()
		};
		assert!(layer.finalize().is_err());
	}

	#[test]
	fn test_merge_overwrites() {
		let mut base = I18nConfigLayer {
			default_locale: Some("en".to_string()),
			messages_dir: Some("/srv/messages".to_string()),
			..Default::default()
		};
		let overlay = I18nConfigLayer {
			default_locale: Some("de".to_string()),
			..Default::default()
		};
		base.merge(overlay);
		assert_eq!(base.default_locale, Some("de".to_string()));
		assert_eq!(base.messages_dir, Some("/srv/messages".to_string()));
	}

	#[test]
	fn test_deserialize_section() {
		let layer: I18nConfigLayer = toml::from_str(
			r#"
			locales = ["en", "de"]
			default_locale = "de"
			namespaces = ["common"]
			messages_dir = "/srv/vitrine/messages"
			"#,
		)
		.unwrap();
		let config = layer.finalize().unwrap();
		assert_eq!(config.locales.supported_locales(), ["en", "de"]);
		assert_eq!(config.locales.default_locale(), "de");
		assert_eq!(config.messages_dir, PathBuf::from("/srv/vitrine/messages"));
	}

	#[test]
	fn test_deserialize_empty() {
		let layer: I18nConfigLayer = toml::from_str("").unwrap();
		assert_eq!(layer, I18nConfigLayer::default());
	}
}
