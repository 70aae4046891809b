//! Radio button group.

use serde_json::{Map, Value};

use crate::element::{Attributes, BaseElement, InputElement};
use crate::elements::matched_option_key;

/// Radio button group.
///
/// Like [`Select`](crate::Select) it carries an `options` object and a
/// `selected` marker for the option matching the current value, but no
/// `value` attribute: the rendered inputs take their values from the
/// option keys.
#[derive(Debug, Clone)]
pub struct Radio {
	base: BaseElement,
}

impl Radio {
	pub fn new(base: BaseElement) -> Self {
		Self { base }
	}
}

impl InputElement for Radio {
	fn parse(&self) -> Attributes {
		let mut attrs = self.base.merge_defaults([
			("name", Value::String(self.base.name().to_string())),
			("id", Value::String(self.base.field_id())),
			("options", Value::Object(Map::new())),
		]);

		if let Some(key) = matched_option_key(attrs.get("options"), &self.base.value()) {
			attrs.insert("selected".to_string(), Value::String(key));
		}

		attrs
	}
}
