//! Form generator.
//!
//! Walks a schema in field order and produces, per rendered field, the
//! finalized attribute mapping a template layer needs to build the input
//! markup.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::data::DataSource;
use crate::element::{Attributes, BaseElement, InputElement};
use crate::error::{FormError, FormResult};
use crate::registry::ElementRegistry;
use crate::schema::Schema;

/// Kind assumed when a field declares no `type`.
const DEFAULT_KIND: &str = "text";

/// Schema-driven form generator.
///
/// Holds a schema, the current field values, an optional name namespace
/// and the element registry, and turns them into renderer-ready input
/// descriptors with [`generate`](Form::generate).
///
/// # Examples
///
/// ```
/// use formgen::{Form, Schema};
/// use serde_json::json;
///
/// let schema: Schema = serde_json::from_value(json!({
///     "email": { "form": { "type": "text" } },
/// })).unwrap();
///
/// let mut form = Form::new(schema);
/// form.set_value("email", "a@b.com");
///
/// let fields = form.generate().unwrap();
/// assert_eq!(fields["email"]["value"], json!("a@b.com"));
/// assert_eq!(fields["email"]["id"], json!("field_email"));
/// ```
#[derive(Debug)]
pub struct Form {
	schema: Schema,
	data: HashMap<String, Value>,
	namespace: String,
	registry: ElementRegistry,
}

impl Form {
	/// Create a generator for `schema` with no current values.
	pub fn new(schema: Schema) -> Self {
		Self {
			schema,
			data: HashMap::new(),
			namespace: String::new(),
			registry: ElementRegistry::default(),
		}
	}

	/// Create a generator for `schema` seeded with current values.
	///
	/// # Examples
	///
	/// ```
	/// use formgen::{Form, Schema};
	/// use serde_json::json;
	///
	/// let schema: Schema = serde_json::from_value(json!({
	///     "name": { "form": { "type": "text" } },
	/// })).unwrap();
	/// let form = Form::with_data(schema, json!({ "name": "Alice" })).unwrap();
	///
	/// assert_eq!(form.generate().unwrap()["name"]["value"], json!("Alice"));
	/// ```
	pub fn with_data<D: DataSource>(schema: Schema, data: D) -> FormResult<Self> {
		let mut form = Self::new(schema);
		form.set_data(data)?;
		Ok(form)
	}

	/// Replace the schema. Malformed definitions do not error here; they
	/// are skipped at generation time.
	pub fn set_schema(&mut self, schema: Schema) {
		self.schema = schema;
	}

	/// Replace the current values from any supported source shape.
	pub fn set_data<D: DataSource>(&mut self, data: D) -> FormResult<()> {
		self.data = data.into_form_data()?;
		Ok(())
	}

	/// Replace the current values from a serializable model.
	///
	/// The model must serialize to a JSON object; any other shape is an
	/// [`FormError::InvalidDataSource`].
	pub fn set_model<T: Serialize>(&mut self, model: &T) -> FormResult<()> {
		let value = serde_json::to_value(model)
			.map_err(|error| FormError::InvalidDataSource(error.to_string()))?;
		self.set_data(value)
	}

	/// Set the current value of a single field, overriding whatever
	/// `set_data` loaded for it.
	pub fn set_value(&mut self, input_name: impl Into<String>, value: impl Into<Value>) {
		self.data.insert(input_name.into(), value.into());
	}

	/// Force a raw attribute of a field, persisting the override into the
	/// schema itself.
	///
	/// The field's `form` object is created when missing, so a previously
	/// unrendered field becomes rendered. Silently does nothing when the
	/// field is absent from the schema or its definition is not an object.
	pub fn set_input_argument(
		&mut self,
		input_name: &str,
		property: impl Into<String>,
		value: impl Into<Value>,
	) {
		let Some(definition) = self.schema.get_mut(input_name) else {
			tracing::debug!(field = %input_name, "input argument for a field not in the schema, ignoring");
			return;
		};
		let Some(definition) = definition.as_object_mut() else {
			return;
		};
		let form = definition
			.entry("form")
			.or_insert_with(|| Value::Object(Map::new()));
		if let Some(form) = form.as_object_mut() {
			form.insert(property.into(), value.into());
		}
	}

	/// Set the options of a selection-list field and, when `selected` is
	/// given, its current value.
	///
	/// # Examples
	///
	/// ```
	/// use formgen::{Form, Schema};
	/// use serde_json::json;
	///
	/// let schema: Schema = serde_json::from_value(json!({
	///     "lang": { "form": { "type": "select" } },
	/// })).unwrap();
	///
	/// let mut form = Form::new(schema);
	/// form.set_options("lang", [("fr", "French"), ("en", "English")], Some("fr"));
	///
	/// let fields = form.generate().unwrap();
	/// assert_eq!(fields["lang"]["options"]["en"], json!("English"));
	/// assert_eq!(fields["lang"]["selected"], json!("fr"));
	/// ```
	pub fn set_options<K, L, I>(&mut self, input_name: &str, options: I, selected: Option<&str>)
	where
		K: Into<String>,
		L: Into<String>,
		I: IntoIterator<Item = (K, L)>,
	{
		let options: Map<String, Value> = options
			.into_iter()
			.map(|(key, label)| (key.into(), Value::String(label.into())))
			.collect();
		self.set_input_argument(input_name, "options", Value::Object(options));

		if let Some(selected) = selected {
			self.set_value(input_name, selected);
		}
	}

	/// Wrap generated field names as `namespace[field]`. The empty string,
	/// the default, disables wrapping. Data lookups keep using the bare
	/// field name either way.
	pub fn set_namespace(&mut self, namespace: impl Into<String>) {
		self.namespace = namespace.into();
	}

	/// Register a custom element factory on this form's registry; see
	/// [`ElementRegistry::register`].
	pub fn register_element<F>(&mut self, kind: impl AsRef<str>, factory: F)
	where
		F: Fn(BaseElement) -> Option<Box<dyn InputElement>> + Send + Sync + 'static,
	{
		self.registry.register(kind, factory);
	}

	/// Replace the element registry wholesale.
	pub fn set_registry(&mut self, registry: ElementRegistry) {
		self.registry = registry;
	}

	/// The element registry in use.
	pub fn registry(&self) -> &ElementRegistry {
		&self.registry
	}

	/// Generate the renderer-ready descriptors, one per rendered field, in
	/// schema order.
	///
	/// Fields whose definition carries no `form` object are skipped. The
	/// declared `type` selects the element kind and is consumed in the
	/// process; unknown kinds degrade to the fallback. The only failure is
	/// a factory declining to build its element.
	pub fn generate(&self) -> FormResult<IndexMap<String, Attributes>> {
		let mut form = IndexMap::new();

		for (name, definition) in self.schema.fields() {
			let Some(element) = definition.get("form").and_then(Value::as_object) else {
				tracing::debug!(field = %name, "field has no form definition, skipping");
				continue;
			};
			let mut element = element.clone();

			// The declared type is dispatch metadata, not an attribute.
			let declared = match element.shift_remove("type") {
				Some(Value::String(declared)) => declared,
				Some(other) => other.to_string(),
				None => DEFAULT_KIND.to_string(),
			};

			let value = self.data.get(name.as_str()).cloned();
			let name = self.namespaced_name(name);

			if !self.registry.contains(&declared) {
				tracing::debug!(
					field = %name,
					declared = %declared,
					"no element kind registered, using fallback"
				);
			}
			let factory = self.registry.resolve(&declared);

			let parsed = factory(BaseElement::new(name.clone(), element, value)).ok_or_else(|| {
				FormError::InvalidElement {
					kind: declared.clone(),
					field: name.clone(),
				}
			})?;

			form.insert(name, parsed.parse());
		}

		Ok(form)
	}

	fn namespaced_name(&self, field: &str) -> String {
		if self.namespace.is_empty() {
			field.to_string()
		} else {
			format!("{}[{}]", self.namespace, field)
		}
	}
}

impl Default for Form {
	fn default() -> Self {
		Self::new(Schema::new())
	}
}
