//! Hidden input.

use serde_json::Value;

use crate::element::{Attributes, BaseElement, InputElement};

/// Hidden input. Carries the same base defaults as text; the declared
/// attributes decide everything else.
#[derive(Debug, Clone)]
pub struct Hidden {
	base: BaseElement,
}

impl Hidden {
	pub fn new(base: BaseElement) -> Self {
		Self { base }
	}
}

impl InputElement for Hidden {
	fn parse(&self) -> Attributes {
		self.base.merge_defaults([
			("name", Value::String(self.base.name().to_string())),
			("id", Value::String(self.base.field_id())),
			("value", self.base.value()),
		])
	}
}
