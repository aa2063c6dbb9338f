// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Supported locales, namespaces and locale normalization.

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

use crate::error::{I18nError, Result};

/// Locales the site ships translations for.
pub const LOCALES: &[&str] = &["en", "cs", "de", "ru"];

/// Locale used when resolution fails or a namespace is missing.
pub const DEFAULT_LOCALE: &str = "en";

/// Message namespaces loaded for every page.
pub const NAMESPACES: &[&str] = &["common", "nav", "home"];

/// A locale code known to be a member of a [`LocaleConfig`]'s supported set.
///
/// Values are only handed out by a `LocaleConfig`, so holding a `Locale`
/// means it passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for Locale {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl PartialEq<str> for Locale {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for Locale {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

/// Static locale and namespace configuration, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
	supported: Vec<String>,
	default_locale: String,
	namespaces: Vec<String>,
}

impl Default for LocaleConfig {
	fn default() -> Self {
		Self {
			supported: LOCALES.iter().map(|l| l.to_string()).collect(),
			default_locale: DEFAULT_LOCALE.to_string(),
			namespaces: NAMESPACES.iter().map(|n| n.to_string()).collect(),
		}
	}
}

impl LocaleConfig {
	/// Build a validated configuration.
	///
	/// The default locale must be one of `supported`; both lists must be
	/// non-empty and free of blanks and duplicates.
	pub fn new<S, N>(supported: S, default_locale: impl Into<String>, namespaces: N) -> Result<Self>
	where
		S: IntoIterator,
		S::Item: Into<String>,
		N: IntoIterator,
		N::Item: Into<String>,
	{
		let supported: Vec<String> = supported.into_iter().map(Into::into).collect();
		let namespaces: Vec<String> = namespaces.into_iter().map(Into::into).collect();
		let default_locale = default_locale.into();

		validate_list("locale", &supported)?;
		validate_list("namespace", &namespaces)?;

		if !supported.contains(&default_locale) {
			return Err(I18nError::InvalidConfig(format!(
				"default locale '{default_locale}' is not in the supported list [{}]",
				supported.join(", ")
			)));
		}

		Ok(Self {
			supported,
			default_locale,
			namespaces,
		})
	}

	pub fn supported_locales(&self) -> &[String] {
		&self.supported
	}

	pub fn namespaces(&self) -> &[String] {
		&self.namespaces
	}

	pub fn has_namespace(&self, namespace: &str) -> bool {
		self.namespaces.iter().any(|n| n == namespace)
	}

	pub fn default_locale(&self) -> Locale {
		Locale(self.default_locale.clone())
	}

	/// Exact, case-sensitive membership test.
	pub fn is_supported(&self, candidate: &str) -> bool {
		self.supported.iter().any(|l| l == candidate)
	}

	/// Return the `Locale` for `code` if it is exactly a supported code.
	pub fn locale(&self, code: &str) -> Option<Locale> {
		self.is_supported(code).then(|| Locale(code.to_string()))
	}

	/// Map any raw locale hint onto a supported locale.
	///
	/// Missing or empty input yields the default. Otherwise the primary
	/// subtag (text before the first `-`) is used when supported, and the
	/// default otherwise. No case folding is applied.
	pub fn normalize(&self, raw: Option<&str>) -> Locale {
		match raw.filter(|r| !r.is_empty()) {
			Some(raw) => self
				.locale(primary_subtag(raw))
				.unwrap_or_else(|| self.default_locale()),
			None => self.default_locale(),
		}
	}
}

/// Primary language subtag of a tag such as `en-US`.
pub(crate) fn primary_subtag(raw: &str) -> &str {
	raw.split('-').next().unwrap_or(raw)
}

fn validate_list(kind: &str, values: &[String]) -> Result<()> {
	if values.is_empty() {
		return Err(I18nError::InvalidConfig(format!("{kind} list is empty")));
	}

	let mut seen = HashSet::new();
	for value in values {
		if value.trim().is_empty() {
			return Err(I18nError::InvalidConfig(format!("empty {kind} entry")));
		}
		if !seen.insert(value.as_str()) {
			return Err(I18nError::InvalidConfig(format!("duplicate {kind} '{value}'")));
		}
	}

	Ok(())
}

fn builtin() -> &'static LocaleConfig {
	static BUILTIN: OnceLock<LocaleConfig> = OnceLock::new();
	BUILTIN.get_or_init(LocaleConfig::default)
}

/// [`LocaleConfig::normalize`] against the built-in site configuration.
pub fn normalize_locale(raw: Option<&str>) -> Locale {
	builtin().normalize(raw)
}

/// [`LocaleConfig::is_supported`] against the built-in site configuration.
pub fn is_supported_locale(candidate: &str) -> bool {
	builtin().is_supported(candidate)
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		/// Property: normalization always lands in the supported set
		#[test]
		fn test_normalize_always_supported(raw in "\\PC{0,20}") {
			let locale = normalize_locale(Some(raw.as_str()));
			prop_assert!(is_supported_locale(locale.as_str()));
		}

		/// Property: membership and normalization agree on plain codes
		#[test]
		fn test_supported_iff_fixed_point(code in "[a-zA-Z]{0,3}") {
			let is_fixed_point = normalize_locale(Some(code.as_str())) == code.as_str();
			prop_assert_eq!(is_supported_locale(&code), is_fixed_point);
		}

		/// Property: any region suffix resolves like the bare language
		#[test]
		fn test_region_suffix_ignored(
			idx in 0..LOCALES.len(),
			region in "[A-Za-z0-9-]{1,8}",
		) {
			let tag = format!("{}-{region}", LOCALES[idx]);
			prop_assert_eq!(normalize_locale(Some(tag.as_str())), LOCALES[idx]);
		}
	}
}
