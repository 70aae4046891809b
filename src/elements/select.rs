//! Drop-down selection list.

use serde_json::{Map, Value};

use crate::element::{Attributes, BaseElement, InputElement};
use crate::elements::matched_option_key;

/// Drop-down selection list.
///
/// Guarantees an `options` object (key to label) is present, defaulting to
/// an empty one, and marks the option matching the current value with a
/// `selected` attribute carrying the matched key.
///
/// # Examples
///
/// ```
/// use formgen::{BaseElement, InputElement, Select};
/// use serde_json::json;
///
/// let raw = json!({ "options": { "fr": "French", "en": "English" } });
/// let base = BaseElement::new("lang", raw.as_object().unwrap().clone(), Some(json!("fr")));
/// let attrs = Select::new(base).parse();
///
/// assert_eq!(attrs["selected"], json!("fr"));
/// assert_eq!(attrs["value"], json!("fr"));
/// ```
#[derive(Debug, Clone)]
pub struct Select {
	base: BaseElement,
}

impl Select {
	pub fn new(base: BaseElement) -> Self {
		Self { base }
	}
}

impl InputElement for Select {
	fn parse(&self) -> Attributes {
		let mut attrs = self.base.merge_defaults([
			("name", Value::String(self.base.name().to_string())),
			("id", Value::String(self.base.field_id())),
			("options", Value::Object(Map::new())),
			("value", self.base.value()),
		]);

		if let Some(key) = matched_option_key(attrs.get("options"), &self.base.value()) {
			attrs.insert("selected".to_string(), Value::String(key));
		}

		attrs
	}
}
