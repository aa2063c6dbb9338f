// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::fmt::Write;

use anyhow::Context;
use clap::Args;
use vitrine_common_i18n::{
	is_localized_path, negotiate, FailurePolicy, Locale, LocaleConfig, LocaleHints,
	MessageLoader, LOCALE_COOKIE,
};

/// Request context to resolve a locale from.
#[derive(Args, Debug, Clone, Default)]
pub struct RequestArgs {
	/// Raw locale hint, e.g. `de-AT`. Takes precedence over request hints.
	pub locale: Option<String>,

	/// Request path, e.g. `/de/about`
	#[arg(long)]
	pub path: Option<String>,

	/// Value of the locale cookie
	#[arg(long, value_name = LOCALE_COOKIE)]
	pub cookie: Option<String>,

	/// Raw Accept-Language header
	#[arg(long = "accept-language")]
	pub accept_language: Option<String>,
}

impl RequestArgs {
	fn hints(&self) -> LocaleHints {
		LocaleHints {
			path: self.path.clone(),
			cookie: self.cookie.clone(),
			accept_language: self.accept_language.clone(),
		}
	}
}

pub fn resolve(config: &LocaleConfig, request: &RequestArgs) -> Locale {
	match request.locale.as_deref() {
		Some(raw) => config.normalize(Some(raw)),
		None => negotiate(config, &request.hints()),
	}
}

/// Output of `vitrine resolve`: the locale, or a note that the path
/// bypasses locale routing.
pub fn resolve_report(config: &LocaleConfig, request: &RequestArgs) -> String {
	match request.path.as_deref() {
		Some(path) if !is_localized_path(path) => {
			format!("{path} is not locale-routed")
		}
		_ => resolve(config, request).to_string(),
	}
}

pub async fn messages(
	loader: &MessageLoader,
	request: &RequestArgs,
	policy: FailurePolicy,
) -> anyhow::Result<serde_json::Value> {
	let locale = resolve(loader.config(), request);
	let loaded = loader
		.load_for_request(Some(locale.as_str()), policy)
		.await
		.with_context(|| format!("loading messages for locale '{locale}'"))?;
	Ok(serde_json::to_value(&loaded)?)
}

pub async fn translate(
	loader: &MessageLoader,
	request: &RequestArgs,
	key: &str,
	policy: FailurePolicy,
) -> anyhow::Result<String> {
	let locale = resolve(loader.config(), request);
	let loaded = loader
		.load_for_request(Some(locale.as_str()), policy)
		.await
		.with_context(|| format!("loading messages for locale '{locale}'"))?;

	loaded
		.translate(key)
		.map(str::to_string)
		.with_context(|| format!("no message '{key}' for locale '{}'", loaded.locale))
}

pub fn locales(config: &LocaleConfig) -> String {
	let default_locale = config.default_locale();
	let mut out = String::new();
	for code in config.supported_locales() {
		let marker = if default_locale == code.as_str() { " (default)" } else { "" };
		let _ = writeln!(out, "{code}{marker}");
	}
	let _ = writeln!(out, "namespaces: {}", config.namespaces().join(", "));
	out
}
