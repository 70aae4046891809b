//! Ordered field schema storage.
//!
//! A schema maps field names to JSON field definitions. A definition may
//! carry a `form` object holding the raw input attributes for that field;
//! fields without one are skipped during generation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered mapping of field names to field definitions.
///
/// Field order is preserved and drives generation order. The wrapper is
/// `serde(transparent)`, so a schema file deserializes directly into it:
///
/// ```
/// use formgen::Schema;
///
/// let schema: Schema = serde_json::from_str(
///     r#"{ "email": { "form": { "type": "text" } } }"#,
/// ).unwrap();
/// assert!(schema.has("email"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
	fields: IndexMap<String, Value>,
}

impl Schema {
	/// Create an empty schema.
	pub fn new() -> Self {
		Self {
			fields: IndexMap::new(),
		}
	}

	/// Whether a definition exists under `name`.
	pub fn has(&self, name: &str) -> bool {
		self.fields.contains_key(name)
	}

	/// The definition stored under `name`.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.fields.get(name)
	}

	/// Mutable access to the definition stored under `name`.
	pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
		self.fields.get_mut(name)
	}

	/// Insert or replace the definition for `name`. A replaced field keeps
	/// its original position.
	pub fn set(&mut self, name: impl Into<String>, definition: Value) {
		self.fields.insert(name.into(), definition);
	}

	/// Iterate field definitions in schema order.
	pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
		self.fields.iter()
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

impl From<IndexMap<String, Value>> for Schema {
	fn from(fields: IndexMap<String, Value>) -> Self {
		Self { fields }
	}
}
