// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration produced by each source.

use serde::{Deserialize, Serialize};

use crate::sections::{I18nConfigLayer, LoggingConfigLayer};

/// One source's view of the configuration; `None` sections defer to lower layers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ServerConfigLayer {
	#[serde(default)]
	pub i18n: Option<I18nConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl ServerConfigLayer {
	pub fn merge(&mut self, other: ServerConfigLayer) {
		merge_section(&mut self.i18n, other.i18n, I18nConfigLayer::merge);
		merge_section(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_section<T>(base: &mut Option<T>, other: Option<T>, merge: fn(&mut T, T)) {
	let Some(other) = other else {
		return;
	};
	match base {
		Some(base) => merge(base, other),
		None => *base = Some(other),
	}
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	fn i18n_layer() -> impl Strategy<Value = I18nConfigLayer> {
		(
			proptest::option::of(proptest::collection::vec("[a-z]{2}", 0..4)),
			proptest::option::of("[a-z]{2}"),
			proptest::option::of("[a-z/]{1,12}"),
			proptest::option::of("production|development"),
		)
			.prop_map(|(locales, default_locale, messages_dir, environment)| I18nConfigLayer {
				locales,
				default_locale,
				namespaces: None,
				messages_dir,
				environment,
			})
	}

	fn server_layer() -> impl Strategy<Value = ServerConfigLayer> {
		(
			proptest::option::of(i18n_layer()),
			proptest::option::of(proptest::option::of("info|debug|warn")),
		)
			.prop_map(|(i18n, level)| ServerConfigLayer {
				i18n,
				logging: level.map(|level| LoggingConfigLayer {
					level,
					format: None,
				}),
			})
	}

	proptest! {
		/// Property: merging an empty layer changes nothing
		#[test]
		fn test_merge_empty_is_identity(layer in server_layer()) {
			let mut merged = layer.clone();
			merged.merge(ServerConfigLayer::default());
			prop_assert_eq!(merged, layer);
		}

		/// Property: merging into an empty layer copies the overlay
		#[test]
		fn test_merge_into_empty_copies(layer in server_layer()) {
			let mut merged = ServerConfigLayer::default();
			merged.merge(layer.clone());
			prop_assert_eq!(merged, layer);
		}
	}
}
