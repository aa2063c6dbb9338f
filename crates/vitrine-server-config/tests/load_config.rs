// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use vitrine_common_i18n::FailurePolicy;
use vitrine_server_config::{
	load_from_sources, ConfigError, DefaultsSource, LogFormat, ServerConfig, TomlSource,
};

fn write_config(contents: &str) -> (TempDir, PathBuf) {
	let tmp = TempDir::new().unwrap();
	let path = tmp.path().join("server.toml");
	std::fs::write(&path, contents).unwrap();
	(tmp, path)
}

/// Defaults plus file, without the process environment.
fn load_file(path: impl AsRef<Path>) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(path.as_ref())),
	])
}

#[test]
fn test_file_overrides_defaults() {
	let (_tmp, path) = write_config(
		r#"
[i18n]
locales = ["en", "cs", "de", "ru"]
default_locale = "cs"
namespaces = ["common", "nav", "home", "contact"]
messages_dir = "/srv/vitrine/messages"
environment = "production"

[logging]
level = "vitrine=debug,info"
format = "json"
"#,
	);

	let config = load_file(&path).unwrap();

	assert_eq!(config.i18n.locales.default_locale(), "cs");
	assert!(config.i18n.locales.has_namespace("contact"));
	assert_eq!(config.i18n.messages_dir, PathBuf::from("/srv/vitrine/messages"));
	assert_eq!(config.i18n.failure_policy(), FailurePolicy::FallbackToDefault);
	assert_eq!(config.logging.level, "vitrine=debug,info");
	assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_missing_file_uses_builtin_locales() {
	let config = load_file("/nonexistent/vitrine.toml").unwrap();

	assert_eq!(
		config.i18n.locales.supported_locales(),
		["en", "cs", "de", "ru"]
	);
	assert_eq!(config.i18n.locales.default_locale(), "en");
}

#[test]
fn test_default_locale_must_be_supported() {
	let (_tmp, path) = write_config(
		r#"
[i18n]
locales = ["cs", "de"]
default_locale = "en"
"#,
	);

	let err = load_file(&path).unwrap_err();
	assert!(matches!(err, ConfigError::I18n(_)));
	assert!(err.to_string().contains("default locale 'en'"));
}
