// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Memoization of loaded namespaces.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::locale::Locale;
use crate::payload::MessagePayload;

type CacheKey = (String, String);

/// Process-wide `(locale, namespace) -> payload` memo.
///
/// Entries are only inserted after a complete load and are never evicted;
/// the key space is bounded by `|locales| x |namespaces|`. Cloning shares
/// the underlying map.
#[derive(Debug, Clone, Default)]
pub struct MessageCache {
	entries: Arc<RwLock<HashMap<CacheKey, Arc<MessagePayload>>>>,
}

impl MessageCache {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, locale: &Locale, namespace: &str) -> Option<Arc<MessagePayload>> {
		self.entries
			.read()
			.get(&(locale.to_string(), namespace.to_string()))
			.cloned()
	}

	pub fn insert(&self, locale: &Locale, namespace: &str, payload: Arc<MessagePayload>) {
		self.entries
			.write()
			.insert((locale.to_string(), namespace.to_string()), payload);
	}

	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}

	/// Drop all entries, e.g. after message files were redeployed.
	pub fn clear(&self) {
		self.entries.write().clear();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::locale::LocaleConfig;

	#[test]
	fn test_insert_and_get() {
		let config = LocaleConfig::default();
		let de = config.locale("de").unwrap();
		let cache = MessageCache::new();
		assert!(cache.is_empty());

		let payload = Arc::new(MessagePayload::new().with_text("title", "Willkommen"));
		cache.insert(&de, "home", Arc::clone(&payload));

		assert_eq!(cache.len(), 1);
		assert_eq!(cache.get(&de, "home"), Some(payload));
		assert_eq!(cache.get(&de, "nav"), None);
		assert_eq!(cache.get(&config.default_locale(), "home"), None);
	}

	#[test]
	fn test_clones_share_entries() {
		let config = LocaleConfig::default();
		let cache = MessageCache::new();
		let shared = cache.clone();

		shared.insert(&config.default_locale(), "common", Arc::new(MessagePayload::new()));
		assert_eq!(cache.len(), 1);

		cache.clear();
		assert!(shared.is_empty());
	}
}
