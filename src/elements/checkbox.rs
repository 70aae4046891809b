//! Checkbox input.

use serde_json::Value;

use crate::element::{Attributes, BaseElement, InputElement};

/// Checkbox input.
///
/// By default a binary on/off field: instead of forwarding a `value`
/// attribute it sets a `checked` marker when the current value is one of
/// the canonical checked values. Declaring `"binary": false` turns the
/// marker logic off for checkboxes that submit a real value.
///
/// # Examples
///
/// ```
/// use formgen::{BaseElement, Checkbox, InputElement};
/// use serde_json::{json, Map};
///
/// let agree = Checkbox::new(BaseElement::new("agree", Map::new(), Some(json!(1))));
/// let attrs = agree.parse();
///
/// assert_eq!(attrs["class"], json!("js-icheck"));
/// assert_eq!(attrs["binary"], json!(true));
/// assert_eq!(attrs["checked"], json!("checked"));
/// assert!(!attrs.contains_key("value"));
/// ```
#[derive(Debug, Clone)]
pub struct Checkbox {
	base: BaseElement,
}

impl Checkbox {
	pub fn new(base: BaseElement) -> Self {
		Self { base }
	}
}

impl InputElement for Checkbox {
	fn parse(&self) -> Attributes {
		let mut attrs = self.base.merge_defaults([
			("class", Value::String("js-icheck".to_string())),
			("name", Value::String(self.base.name().to_string())),
			("id", Value::String(self.base.field_id())),
			("binary", Value::Bool(true)),
		]);

		// The check status stands in for the value.
		if attrs.get("binary") != Some(&Value::Bool(false)) && is_checked_value(&self.base.value()) {
			attrs.insert("checked".to_string(), Value::String("checked".to_string()));
		}

		attrs
	}
}

/// Canonical checked values: `true`, the numbers `1` and `1.0`, and the
/// string `"1"`. Everything else, including an absent value, is unchecked.
fn is_checked_value(value: &Value) -> bool {
	match value {
		Value::Bool(flag) => *flag,
		Value::Number(number) => number.as_i64() == Some(1) || number.as_f64() == Some(1.0),
		Value::String(text) => text == "1",
		_ => false,
	}
}
