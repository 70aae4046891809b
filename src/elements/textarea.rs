//! Multi-line text area.

use serde_json::Value;

use crate::element::{Attributes, BaseElement, InputElement};

/// Multi-line text area. Adds a default `rows` count of 3 on top of the
/// base defaults.
#[derive(Debug, Clone)]
pub struct Textarea {
	base: BaseElement,
}

impl Textarea {
	pub fn new(base: BaseElement) -> Self {
		Self { base }
	}
}

impl InputElement for Textarea {
	fn parse(&self) -> Attributes {
		self.base.merge_defaults([
			("name", Value::String(self.base.name().to_string())),
			("id", Value::String(self.base.field_id())),
			("rows", Value::from(3)),
			("value", self.base.value()),
		])
	}
}
