//! Normalization of current-value sources.
//!
//! The generator keeps current field values as a flat name to value map.
//! [`DataSource`] is the seam through which differently shaped sources
//! (maps, pair lists, raw JSON, repository-style stores) are normalized
//! into that map.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{FormError, FormResult};

/// A source of current form values.
///
/// Implementations consume themselves and produce a flat field-name to
/// value mapping. Implement this for repository-style types that expose an
/// "all entries" view so they can be fed straight into
/// [`Form::set_data`](crate::Form::set_data).
pub trait DataSource {
	fn into_form_data(self) -> FormResult<HashMap<String, Value>>;
}

impl DataSource for HashMap<String, Value> {
	fn into_form_data(self) -> FormResult<HashMap<String, Value>> {
		Ok(self)
	}
}

impl DataSource for HashMap<String, String> {
	fn into_form_data(self) -> FormResult<HashMap<String, Value>> {
		Ok(self
			.into_iter()
			.map(|(name, value)| (name, Value::String(value)))
			.collect())
	}
}

impl DataSource for IndexMap<String, Value> {
	fn into_form_data(self) -> FormResult<HashMap<String, Value>> {
		Ok(self.into_iter().collect())
	}
}

impl DataSource for Vec<(String, Value)> {
	fn into_form_data(self) -> FormResult<HashMap<String, Value>> {
		Ok(self.into_iter().collect())
	}
}

impl DataSource for Value {
	/// JSON objects become entries and `null` clears the values; any other
	/// shape is rejected with [`FormError::InvalidDataSource`].
	fn into_form_data(self) -> FormResult<HashMap<String, Value>> {
		match self {
			Value::Object(entries) => Ok(entries.into_iter().collect()),
			Value::Null => Ok(HashMap::new()),
			other => Err(FormError::InvalidDataSource(format!(
				"expected an object of field values, got {}",
				value_kind(&other)
			))),
		}
	}
}

fn value_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
