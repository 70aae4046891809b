//! Plain text input.

use serde_json::Value;

use crate::element::{Attributes, BaseElement, InputElement};

/// Plain text input, applying only the base defaults.
///
/// This is also the default and fallback kind: a field declaring no type,
/// or a type nothing is registered for, is rendered as text instead of
/// failing generation.
///
/// # Examples
///
/// ```
/// use formgen::{BaseElement, InputElement, Text};
/// use serde_json::{json, Map};
///
/// let text = Text::new(BaseElement::new("email", Map::new(), Some(json!("a@b.com"))));
/// let attrs = text.parse();
///
/// assert_eq!(attrs["name"], json!("email"));
/// assert_eq!(attrs["id"], json!("field_email"));
/// assert_eq!(attrs["value"], json!("a@b.com"));
/// ```
#[derive(Debug, Clone)]
pub struct Text {
	base: BaseElement,
}

impl Text {
	pub fn new(base: BaseElement) -> Self {
		Self { base }
	}
}

impl InputElement for Text {
	fn parse(&self) -> Attributes {
		self.base.merge_defaults([
			("name", Value::String(self.base.name().to_string())),
			("id", Value::String(self.base.field_id())),
			("value", self.base.value()),
		])
	}
}
