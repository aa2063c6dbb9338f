// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation payloads: arbitrarily nested JSON trees with string leaves.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single node in a message tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageValue {
	Text(String),
	Nested(BTreeMap<String, MessageValue>),
	/// Arrays, numbers, booleans and null are kept but never looked up.
	Other(serde_json::Value),
}

/// Messages of one namespace for one locale.
///
/// No schema is enforced; keys present in one locale may be absent in another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessagePayload(BTreeMap<String, MessageValue>);

impl MessagePayload {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// Builder used by embedded sources and tests.
	pub fn with_text(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
		self.0.insert(key.into(), MessageValue::Text(text.into()));
		self
	}

	pub fn with_nested(mut self, key: impl Into<String>, nested: MessagePayload) -> Self {
		self.0.insert(key.into(), MessageValue::Nested(nested.0));
		self
	}

	/// Look up a leaf string by dotted path, e.g. `hero.title`.
	pub fn get(&self, dotted_key: &str) -> Option<&str> {
		let mut parts = dotted_key.split('.');
		let mut node = self.0.get(parts.next()?)?;
		for part in parts {
			match node {
				MessageValue::Nested(children) => node = children.get(part)?,
				MessageValue::Text(_) | MessageValue::Other(_) => return None,
			}
		}
		match node {
			MessageValue::Text(text) => Some(text.as_str()),
			MessageValue::Nested(_) | MessageValue::Other(_) => None,
		}
	}

	pub fn entries(&self) -> &BTreeMap<String, MessageValue> {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
