// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Picking a locale from what an inbound request carries.

use crate::locale::{primary_subtag, Locale, LocaleConfig};

/// Cookie that remembers an explicit locale choice.
pub const LOCALE_COOKIE: &str = "NEXT_LOCALE";

/// Raw locale hints extracted from a request by the page layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleHints {
	/// Request path, e.g. `/de/about`.
	pub path: Option<String>,
	/// Value of the [`LOCALE_COOKIE`] cookie.
	pub cookie: Option<String>,
	/// Raw `Accept-Language` header.
	pub accept_language: Option<String>,
}

/// Resolve the locale for a request.
///
/// Resolution order (highest to lowest priority):
/// 1. First path segment, when it is exactly a supported locale
/// 2. Locale cookie, when its primary subtag is supported
/// 3. `Accept-Language`, best q-value first
/// 4. The configured default locale
///
/// # Example
///
/// ```
/// use vitrine_common_i18n::{negotiate, LocaleConfig, LocaleHints};
///
/// let config = LocaleConfig::default();
/// let hints = LocaleHints {
///     accept_language: Some("fr-CH, de;q=0.9, en;q=0.8".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(negotiate(&config, &hints), "de");
/// ```
pub fn negotiate(config: &LocaleConfig, hints: &LocaleHints) -> Locale {
	if let Some(locale) = hints.path.as_deref().and_then(|p| path_locale(config, p)) {
		return locale;
	}

	if let Some(locale) = hints
		.cookie
		.as_deref()
		.and_then(|c| config.locale(primary_subtag(c.trim())))
	{
		return locale;
	}

	if let Some(header) = hints.accept_language.as_deref() {
		for (tag, _) in parse_accept_language(header) {
			if let Some(locale) = config.locale(primary_subtag(&tag)) {
				return locale;
			}
		}
	}

	config.default_locale()
}

/// Locale named by the first segment of `path`, if any.
pub fn path_locale(config: &LocaleConfig, path: &str) -> Option<Locale> {
	let segment = path.trim_start_matches('/').split('/').next()?;
	config.locale(segment)
}

/// Parse an `Accept-Language` header into `(tag, q)` pairs, best first.
///
/// Entries with `q=0` and the `*` wildcard are dropped. A missing or
/// unparsable q-value counts as 1.0, and weights above 1.0 are capped at
/// 1.0. Equal weights keep header order.
pub fn parse_accept_language(header: &str) -> Vec<(String, f32)> {
	let mut entries: Vec<(String, f32)> = header
		.split(',')
		.filter_map(|entry| {
			let mut parts = entry.split(';');
			let tag = parts.next()?.trim();
			if tag.is_empty() || tag == "*" {
				return None;
			}

			let q = parts
				.filter_map(|p| p.trim().strip_prefix("q="))
				.next()
				.and_then(|q| q.trim().parse::<f32>().ok())
				.filter(|q| q.is_finite())
				.map_or(1.0, |q| q.min(1.0));

			(q > 0.0).then(|| (tag.to_string(), q))
		})
		.collect();

	// stable sort keeps header order for ties
	entries.sort_by(|a, b| b.1.total_cmp(&a.1));
	entries
}

/// Whether `path` should go through locale routing.
///
/// Anything starting with `_next` (framework internals) and any path
/// containing a `.` anywhere (static assets) is served as-is.
pub fn is_localized_path(path: &str) -> bool {
	let trimmed = path.trim_start_matches('/');
	!(trimmed.starts_with("_next") || trimmed.contains('.'))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config() -> LocaleConfig {
		LocaleConfig::default()
	}

	fn hints(path: Option<&str>, cookie: Option<&str>, accept: Option<&str>) -> LocaleHints {
		LocaleHints {
			path: path.map(String::from),
			cookie: cookie.map(String::from),
			accept_language: accept.map(String::from),
		}
	}

	#[test]
	fn test_path_segment_wins() {
		let h = hints(Some("/ru/services"), Some("de"), Some("cs"));
		assert_eq!(negotiate(&config(), &h), "ru");
	}

	#[test]
	fn test_path_segment_must_be_exact() {
		let h = hints(Some("/ru-RU/services"), None, None);
		assert_eq!(negotiate(&config(), &h), "en");
		assert_eq!(path_locale(&config(), "/"), None);
		assert_eq!(path_locale(&config(), "de"), config().locale("de"));
	}

	#[test]
	fn test_cookie_beats_header() {
		let h = hints(Some("/about"), Some("cs-CZ"), Some("de"));
		assert_eq!(negotiate(&config(), &h), "cs");
	}

	#[test]
	fn test_unknown_cookie_is_ignored() {
		let h = hints(None, Some("fr"), Some("de-AT"));
		assert_eq!(negotiate(&config(), &h), "de");
	}

	#[test]
	fn test_accept_language_by_quality() {
		let h = hints(None, None, Some("en;q=0.5, ru;q=0.9, fr"));
		assert_eq!(negotiate(&config(), &h), "ru");
	}

	#[test]
	fn test_nothing_matches_uses_default() {
		let h = hints(Some("/contact"), Some(""), Some("fr, es;q=0.8"));
		assert_eq!(negotiate(&config(), &h), "en");
		assert_eq!(negotiate(&config(), &LocaleHints::default()), "en");
	}

	#[test]
	fn test_parse_accept_language() {
		let parsed = parse_accept_language("de-AT, en;q=0.7, *;q=0.1, cs;q=0, ru;q=bogus");
		let tags: Vec<&str> = parsed.iter().map(|(t, _)| t.as_str()).collect();
		assert_eq!(tags, vec!["de-AT", "ru", "en"]);
	}

	#[test]
	fn test_quality_above_one_is_capped() {
		let parsed = parse_accept_language("fr;q=5, de");
		assert_eq!(
			parsed,
			vec![("fr".to_string(), 1.0), ("de".to_string(), 1.0)]
		);

		let h = hints(None, None, Some("cs;q=5, de;q=1.0"));
		assert_eq!(negotiate(&config(), &h), "cs");
		let h = hints(None, None, Some("de;q=0.9, ru;q=7"));
		assert_eq!(negotiate(&config(), &h), "ru");
		let h = hints(None, None, Some("de, ru;q=7"));
		assert_eq!(negotiate(&config(), &h), "de");
	}

	#[test]
	fn test_parse_accept_language_empty() {
		assert!(parse_accept_language("").is_empty());
		assert!(parse_accept_language(" , ;q=1").is_empty());
	}

	#[test]
	fn test_is_localized_path() {
		assert!(is_localized_path("/"));
		assert!(is_localized_path("/de/about"));
		assert!(is_localized_path("/portfolio/case-study"));
		assert!(!is_localized_path("/_next/static/chunk.js"));
		assert!(!is_localized_path("/_next"));
		assert!(!is_localized_path("/hero-media/slide-1.webp"));
		assert!(!is_localized_path("/favicon.ico"));
		assert!(!is_localized_path("/_nextjs"));
		assert!(!is_localized_path("/v1.2/about"));
		assert!(!is_localized_path("/docs.v2/intro"));
		assert!(is_localized_path("/about/_next"));
	}
}
