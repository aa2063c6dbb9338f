// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation sources: where per-(locale, namespace) payloads come from.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, trace};

use crate::error::SourceError;
use crate::locale::Locale;
use crate::payload::MessagePayload;

/// Provider of message payloads keyed by `(locale, namespace)`.
///
/// Implementations must be deterministic for a given key during the life
/// of the process; the loader caches whatever they return.
#[async_trait]
pub trait TranslationSource: Send + Sync {
	fn name(&self) -> &'static str;

	/// Fetch one namespace. Absence must be reported as [`SourceError::NotFound`].
	async fn fetch(&self, locale: &Locale, namespace: &str) -> Result<MessagePayload, SourceError>;
}

/// Reads `<root>/<locale>/<namespace>.json`.
#[derive(Debug, Clone)]
pub struct FsTranslationSource {
	root: PathBuf,
}

impl FsTranslationSource {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	fn namespace_path(&self, locale: &Locale, namespace: &str) -> PathBuf {
		self.root.join(locale.as_str()).join(format!("{namespace}.json"))
	}
}

#[async_trait]
impl TranslationSource for FsTranslationSource {
	fn name(&self) -> &'static str {
		"filesystem"
	}

	async fn fetch(&self, locale: &Locale, namespace: &str) -> Result<MessagePayload, SourceError> {
		let path = self.namespace_path(locale, namespace);

		let contents = match tokio::fs::read_to_string(&path).await {
			Ok(contents) => contents,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
				debug!(path = %path.display(), "message file not found");
				return Err(SourceError::NotFound {
					locale: locale.to_string(),
					namespace: namespace.to_string(),
				});
			}
			Err(source) => return Err(SourceError::Io { path, source }),
		};

		let payload =
			MessagePayload::from_json(&contents).map_err(|source| SourceError::Parse {
				path: path.clone(),
				source,
			})?;

		trace!(path = %path.display(), keys = payload.len(), "read message file");
		Ok(payload)
	}
}

/// In-memory payloads, for embedded translations and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryTranslationSource {
	payloads: HashMap<(String, String), MessagePayload>,
}

impl MemoryTranslationSource {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(
		mut self,
		locale: impl Into<String>,
		namespace: impl Into<String>,
		payload: MessagePayload,
	) -> Self {
		self.insert(locale, namespace, payload);
		self
	}

	pub fn insert(
		&mut self,
		locale: impl Into<String>,
		namespace: impl Into<String>,
		payload: MessagePayload,
	) {
		self.payloads.insert((locale.into(), namespace.into()), payload);
	}
}

#[async_trait]
impl TranslationSource for MemoryTranslationSource {
	fn name(&self) -> &'static str {
		"memory"
	}

	async fn fetch(&self, locale: &Locale, namespace: &str) -> Result<MessagePayload, SourceError> {
		self.payloads
			.get(&(locale.to_string(), namespace.to_string()))
			.cloned()
			.ok_or_else(|| SourceError::NotFound {
				locale: locale.to_string(),
				namespace: namespace.to_string(),
			})
	}
}
