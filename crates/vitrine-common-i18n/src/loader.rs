// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Namespace loading with default-locale fallback and memoization.

use std::collections::BTreeMap;
use std::sync::Arc;

use futures::future::try_join_all;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cache::MessageCache;
use crate::error::{I18nError, Result, SourceError};
use crate::locale::{Locale, LocaleConfig};
use crate::payload::MessagePayload;
use crate::source::TranslationSource;

/// What the page boundary does when a full message set cannot be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
	/// Surface the error (development).
	FailLoud,
	/// Retry with the default locale's complete message set (production).
	FallbackToDefault,
}

/// Every configured namespace for one resolved locale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadedMessages {
	pub locale: Locale,
	pub messages: BTreeMap<String, Arc<MessagePayload>>,
}

impl LoadedMessages {
	/// Look up `namespace.path.to.leaf`.
	pub fn translate(&self, key: &str) -> Option<&str> {
		let (namespace, rest) = key.split_once('.')?;
		self.messages.get(namespace)?.get(rest)
	}
}

pub struct MessageLoader {
	config: LocaleConfig,
	source: Arc<dyn TranslationSource>,
	cache: MessageCache,
}

impl std::fmt::Debug for MessageLoader {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MessageLoader")
			.field("config", &self.config)
			.field("source", &self.source.name())
			.field("cached", &self.cache.len())
			.finish()
	}
}

impl MessageLoader {
	pub fn new(config: LocaleConfig, source: Arc<dyn TranslationSource>) -> Self {
		Self::with_cache(config, source, MessageCache::new())
	}

	pub fn with_cache(
		config: LocaleConfig,
		source: Arc<dyn TranslationSource>,
		cache: MessageCache,
	) -> Self {
		Self {
			config,
			source,
			cache,
		}
	}

	pub fn config(&self) -> &LocaleConfig {
		&self.config
	}

	pub fn cache(&self) -> &MessageCache {
		&self.cache
	}

	/// Load one namespace for a resolved locale.
	///
	/// Tries `locale` first and, only when the source reports the namespace
	/// as missing, the default locale. A successful result is cached under
	/// the requested `(locale, namespace)` key even when it came from the
	/// default locale, so later requests skip the failing lookup.
	#[tracing::instrument(level = "debug", skip(self, locale), fields(locale = %locale))]
	pub async fn load_namespace(
		&self,
		locale: &Locale,
		namespace: &str,
	) -> Result<Arc<MessagePayload>> {
		if !self.config.has_namespace(namespace) {
			return Err(I18nError::UnknownNamespace(namespace.to_string()));
		}

		if let Some(hit) = self.cache.get(locale, namespace) {
			return Ok(hit);
		}

		let payload = match self.source.fetch(locale, namespace).await {
			Ok(payload) => payload,
			Err(err) => self.fetch_fallback(locale, namespace, err).await?,
		};

		let payload = Arc::new(payload);
		self.cache.insert(locale, namespace, Arc::clone(&payload));
		Ok(payload)
	}

	async fn fetch_fallback(
		&self,
		locale: &Locale,
		namespace: &str,
		err: SourceError,
	) -> Result<MessagePayload> {
		let default_locale = self.config.default_locale();
		if !err.is_not_found() || *locale == default_locale {
			return Err(missing(locale, namespace, err));
		}

		debug!(
			namespace,
			fallback = %default_locale,
			"namespace missing for locale, using default locale"
		);

		self.source
			.fetch(&default_locale, namespace)
			.await
			.map_err(|err| missing(locale, namespace, err))
	}

	/// Normalize `raw` and load a single namespace for it.
	pub async fn load_namespace_raw(
		&self,
		raw: Option<&str>,
		namespace: &str,
	) -> Result<(Locale, Arc<MessagePayload>)> {
		let locale = self.config.normalize(raw);
		let payload = self.load_namespace(&locale, namespace).await?;
		Ok((locale, payload))
	}

	/// Resolve `raw` and load every configured namespace concurrently.
	///
	/// Fails as a whole if any namespace cannot be loaded.
	#[tracing::instrument(level = "debug", skip(self))]
	pub async fn load_all_messages(&self, raw: Option<&str>) -> Result<LoadedMessages> {
		let locale = self.config.normalize(raw);
		let locale_ref = &locale;

		let loads = self.config.namespaces().iter().map(|namespace| async move {
			let payload = self.load_namespace(locale_ref, namespace).await?;
			Ok::<_, I18nError>((namespace.clone(), payload))
		});
		let messages = try_join_all(loads).await?.into_iter().collect();

		debug!(locale = %locale, "loaded all namespaces");
		Ok(LoadedMessages { locale, messages })
	}

	/// [`load_all_messages`](Self::load_all_messages) with the boundary's
	/// failure policy applied.
	pub async fn load_for_request(
		&self,
		raw: Option<&str>,
		policy: FailurePolicy,
	) -> Result<LoadedMessages> {
		match self.load_all_messages(raw).await {
			Ok(loaded) => Ok(loaded),
			Err(err) if policy == FailurePolicy::FallbackToDefault => {
				let default_locale = self.config.default_locale();
				warn!(
					error = %err,
					fallback = %default_locale,
					"failed to load messages, serving default locale"
				);
				self.load_all_messages(Some(default_locale.as_str())).await
			}
			Err(err) => Err(err),
		}
	}
}

fn missing(locale: &Locale, namespace: &str, source: SourceError) -> I18nError {
	I18nError::MissingNamespace {
		locale: locale.to_string(),
		namespace: namespace.to_string(),
		source,
	}
}
