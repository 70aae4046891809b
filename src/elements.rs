//! Built-in input element kinds.
//!
//! One module per kind, mirroring the registry's built-in table. All kinds
//! share the contract from [`crate::element`]: kind defaults merged
//! underneath the caller's attributes, state markers written afterwards.

use serde_json::Value;

// Plain inputs
pub mod hidden;
pub mod text;
pub mod textarea;

// Toggle inputs
pub mod checkbox;

// Selection-list inputs
pub mod radio;
pub mod select;

pub use checkbox::Checkbox;
pub use hidden::Hidden;
pub use radio::Radio;
pub use select::Select;
pub use text::Text;
pub use textarea::Textarea;

/// Match the current value against the keys of an `options` object and
/// return the matched key. Numbers and booleans match through their string
/// form; the empty string never matches, it is the no-value sentinel.
pub(crate) fn matched_option_key(options: Option<&Value>, value: &Value) -> Option<String> {
	let options = options?.as_object()?;
	let key = match value {
		Value::String(key) if !key.is_empty() => key.clone(),
		Value::Number(number) => number.to_string(),
		Value::Bool(flag) => flag.to_string(),
		_ => return None,
	};
	options.contains_key(&key).then_some(key)
}
