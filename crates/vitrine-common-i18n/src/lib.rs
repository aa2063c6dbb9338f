// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for the Vitrine site.
//!
//! This crate turns a raw locale hint into one of the site's supported
//! locales and loads the translation namespaces a page needs for it.
//!
//! # Message Layout
//!
//! Translations are grouped into namespaces (`common`, `nav`, `home`, ...),
//! one JSON document per `(locale, namespace)` pair. The filesystem source
//! reads them from `<messages_dir>/<locale>/<namespace>.json`. When a
//! locale lacks a namespace, the default locale's copy is used instead.
//!
//! Keys inside a namespace are nested objects addressed with dot-notation,
//! e.g. `home.hero.title`.
//!
//! # Example
//!
//! ```
//! use vitrine_common_i18n::{is_supported_locale, normalize_locale};
//!
//! assert_eq!(normalize_locale(Some("de-AT")), "de");
//! assert_eq!(normalize_locale(Some("xx")), "en");
//! assert_eq!(normalize_locale(None), "en");
//! assert!(is_supported_locale("ru"));
//! ```
//!
//! Loading messages:
//!
//! ```ignore
//! use std::sync::Arc;
//! use vitrine_common_i18n::{FsTranslationSource, LocaleConfig, MessageLoader};
//!
//! let loader = MessageLoader::new(
//!     LocaleConfig::default(),
//!     Arc::new(FsTranslationSource::new("messages")),
//! );
//! let loaded = loader.load_all_messages(Some("cs-CZ")).await?;
//! println!("{}", loaded.translate("nav.contact").unwrap_or_default());
//! ```

mod cache;
mod error;
mod loader;
mod locale;
mod negotiate;
mod payload;
mod source;

pub use cache::MessageCache;
pub use error::{I18nError, Result, SourceError};
pub use loader::{FailurePolicy, LoadedMessages, MessageLoader};
pub use locale::{is_supported_locale, normalize_locale, Locale, LocaleConfig};
pub use negotiate::{
	is_localized_path, negotiate, parse_accept_language, path_locale, LocaleHints, LOCALE_COOKIE,
};
pub use payload::{MessagePayload, MessageValue};
pub use source::{FsTranslationSource, MemoryTranslationSource, TranslationSource};

pub use locale::{DEFAULT_LOCALE, LOCALES, NAMESPACES};
