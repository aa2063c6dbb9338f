// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by a [`TranslationSource`](crate::TranslationSource).
#[derive(Debug, Error)]
pub enum SourceError {
	/// The source has no data for this `(locale, namespace)` pair.
	#[error("no messages for namespace '{namespace}' in locale '{locale}'")]
	NotFound { locale: String, namespace: String },

	#[error("I/O error reading {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid message payload in {path}: {source}")]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}

impl SourceError {
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::NotFound { .. })
	}
}

#[derive(Debug, Error)]
pub enum I18nError {
	#[error("invalid locale configuration: {0}")]
	InvalidConfig(String),

	#[error("namespace '{0}' is not configured")]
	UnknownNamespace(String),

	/// Neither the requested locale nor the default locale could supply the namespace.
	#[error("failed to load namespace '{namespace}' for locale '{locale}': {source}")]
	MissingNamespace {
		locale: String,
		namespace: String,
		#[source]
		source: SourceError,
	},
}

pub type Result<T> = std::result::Result<T, I18nError>;
