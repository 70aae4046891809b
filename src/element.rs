//! Base contract shared by all input element kinds.
//!
//! Every kind receives its common parts as a [`BaseElement`] and finalizes
//! them into an attribute mapping through [`InputElement::parse`]. The one
//! merge rule all kinds share: caller-supplied attributes always win over
//! computed defaults. State markers (`checked`, `selected`) are computed
//! after the merge and overwrite what the caller set.

use serde_json::{Map, Value};

/// Attribute mapping for a single input element, raw or finalized.
pub type Attributes = Map<String, Value>;

/// An input element able to finalize its attributes for rendering.
pub trait InputElement {
	/// Produce the finalized attribute mapping.
	fn parse(&self) -> Attributes;
}

/// Common parts of every input element: the (possibly namespaced) field
/// name, the raw attributes declared in the schema, and the current value
/// if one was provided.
///
/// # Examples
///
/// ```
/// use formgen::BaseElement;
/// use serde_json::{json, Map};
///
/// let base = BaseElement::new("user[email]", Map::new(), Some(json!("a@b.com")));
/// assert_eq!(base.field_id(), "field_user_email");
/// assert_eq!(base.value(), json!("a@b.com"));
/// ```
#[derive(Debug, Clone)]
pub struct BaseElement {
	name: String,
	attrs: Attributes,
	value: Option<Value>,
}

impl BaseElement {
	pub fn new(name: impl Into<String>, attrs: Attributes, value: Option<Value>) -> Self {
		Self {
			name: name.into(),
			attrs,
			value,
		}
	}

	/// The field name, already namespaced by the generator.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The raw attributes as declared in the schema.
	pub fn attrs(&self) -> &Attributes {
		&self.attrs
	}

	/// The current value: the explicitly provided one, else the `value`
	/// attribute already present in the raw attributes, else the empty
	/// string.
	pub fn value(&self) -> Value {
		if let Some(value) = &self.value {
			return value.clone();
		}
		self.attrs
			.get("value")
			.cloned()
			.unwrap_or_else(|| Value::String(String::new()))
	}

	/// The derived `id` attribute: `field_` plus the name, with `[`
	/// rewritten to `_` and `]` dropped, so `user[email]` yields
	/// `field_user_email`.
	pub fn field_id(&self) -> String {
		format!("field_{}", self.name.replace('[', "_").replace(']', ""))
	}

	/// Merge `defaults` underneath the raw attributes. A default applies
	/// only where the caller did not already set the key.
	pub fn merge_defaults<I>(&self, defaults: I) -> Attributes
	where
		I: IntoIterator<Item = (&'static str, Value)>,
	{
		let mut attrs = self.attrs.clone();
		for (key, value) in defaults {
			attrs.entry(key).or_insert(value);
		}
		attrs
	}
}
