//! Form generation tests
//!
//! End-to-end tests walking full schemas through the generator and
//! checking the exact descriptors handed to the template layer.

use formgen::{Form, FormError, Schema};
use rstest::rstest;
use serde_json::{json, Value};

fn schema_of(value: Value) -> Schema {
	serde_json::from_value(value).unwrap()
}

#[rstest]
fn test_text_field_with_current_value() {
	let form = Form::with_data(
		schema_of(json!({ "email": { "form": { "type": "text" } } })),
		json!({ "email": "a@b.com" }),
	)
	.unwrap();

	let fields = form.generate().unwrap();
	assert_eq!(
		serde_json::to_value(&fields).unwrap(),
		json!({
			"email": { "name": "email", "id": "field_email", "value": "a@b.com" }
		})
	);
}

#[rstest]
fn test_checkbox_checked_from_data() {
	let form = Form::with_data(
		schema_of(json!({ "agree": { "form": { "type": "checkbox" } } })),
		json!({ "agree": 1 }),
	)
	.unwrap();

	let fields = form.generate().unwrap();
	assert_eq!(
		serde_json::to_value(&fields).unwrap(),
		json!({
			"agree": {
				"class": "js-icheck",
				"name": "agree",
				"id": "field_agree",
				"binary": true,
				"checked": "checked"
			}
		})
	);
}

#[rstest]
fn test_namespaced_field_with_empty_form() {
	let mut form = Form::new(schema_of(json!({ "name": { "form": {} } })));
	form.set_namespace("user");

	let fields = form.generate().unwrap();
	assert_eq!(
		serde_json::to_value(&fields).unwrap(),
		json!({
			"user[name]": { "name": "user[name]", "id": "field_user_name", "value": "" }
		})
	);
}

#[rstest]
fn test_registration_form_walks_all_kinds() {
	let schema = schema_of(json!({
		"csrf_token": { "form": { "type": "hidden" } },
		"email": { "form": { "type": "text", "placeholder": "you@example.com" } },
		"bio": { "form": { "type": "textarea" } },
		"newsletter": { "form": { "type": "checkbox", "label": "Subscribe" } },
		"lang": { "form": { "type": "select", "options": { "en": "English", "fr": "French" } } },
		"size": { "form": { "type": "radio", "options": { "s": "Small", "l": "Large" } } },
		"internal": { "validators": {} }
	}));
	let form = Form::with_data(
		schema,
		json!({
			"csrf_token": "tok123",
			"email": "a@b.com",
			"newsletter": "1",
			"lang": "fr",
			"size": "l"
		}),
	)
	.unwrap();

	let fields = form.generate().unwrap();

	let names: Vec<&str> = fields.keys().map(String::as_str).collect();
	assert_eq!(
		names,
		vec!["csrf_token", "email", "bio", "newsletter", "lang", "size"]
	);

	assert_eq!(
		serde_json::to_value(&fields).unwrap(),
		json!({
			"csrf_token": { "name": "csrf_token", "id": "field_csrf_token", "value": "tok123" },
			"email": {
				"placeholder": "you@example.com",
				"name": "email",
				"id": "field_email",
				"value": "a@b.com"
			},
			"bio": { "name": "bio", "id": "field_bio", "rows": 3, "value": "" },
			"newsletter": {
				"label": "Subscribe",
				"class": "js-icheck",
				"name": "newsletter",
				"id": "field_newsletter",
				"binary": true,
				"checked": "checked"
			},
			"lang": {
				"options": { "en": "English", "fr": "French" },
				"name": "lang",
				"id": "field_lang",
				"value": "fr",
				"selected": "fr"
			},
			"size": {
				"options": { "s": "Small", "l": "Large" },
				"name": "size",
				"id": "field_size",
				"selected": "l"
			}
		})
	);
}

#[rstest]
fn test_declared_attributes_beat_every_default() {
	let schema = schema_of(json!({
		"agree": {
			"form": {
				"type": "checkbox",
				"class": "fancy-toggle",
				"id": "my-agree",
				"binary": false
			}
		}
	}));
	let form = Form::with_data(schema, json!({ "agree": 1 })).unwrap();

	let fields = form.generate().unwrap();
	assert_eq!(fields["agree"]["class"], json!("fancy-toggle"));
	assert_eq!(fields["agree"]["id"], json!("my-agree"));
	assert_eq!(fields["agree"]["binary"], json!(false));
	assert!(!fields["agree"].contains_key("checked"));
}

#[rstest]
fn test_namespace_applies_to_every_rendered_field() {
	let mut form = Form::with_data(
		schema_of(json!({
			"email": { "form": { "type": "text" } },
			"agree": { "form": { "type": "checkbox" } }
		})),
		json!({ "email": "a@b.com", "agree": true }),
	)
	.unwrap();
	form.set_namespace("signup");

	let fields = form.generate().unwrap();

	let email = &fields["signup[email]"];
	assert_eq!(email["name"], json!("signup[email]"));
	assert_eq!(email["id"], json!("field_signup_email"));
	assert_eq!(email["value"], json!("a@b.com"));

	let agree = &fields["signup[agree]"];
	assert_eq!(agree["id"], json!("field_signup_agree"));
	assert_eq!(agree["checked"], json!("checked"));
}

#[rstest]
fn test_set_options_feeds_select_generation() {
	let mut form = Form::new(schema_of(json!({
		"lang": { "form": { "type": "select" } }
	})));
	form.set_options("lang", [("fr", "French"), ("en", "English")], Some("en"));

	let fields = form.generate().unwrap();
	assert_eq!(
		fields["lang"]["options"],
		json!({ "fr": "French", "en": "English" })
	);
	assert_eq!(fields["lang"]["selected"], json!("en"));
	assert_eq!(fields["lang"]["value"], json!("en"));
}

#[rstest]
fn test_set_options_works_for_radio_groups() {
	let mut form = Form::new(schema_of(json!({
		"size": { "form": { "type": "radio" } }
	})));
	form.set_options("size", [("s", "Small"), ("l", "Large")], None);

	let fields = form.generate().unwrap();
	assert_eq!(fields["size"]["options"], json!({ "s": "Small", "l": "Large" }));
	assert!(!fields["size"].contains_key("selected"));
}

#[rstest]
fn test_options_keep_author_insertion_order() {
	let mut form = Form::new(schema_of(json!({
		"country": { "form": { "type": "select" } },
		"size": {
			"form": {
				"type": "radio",
				"options": { "xl": "Extra large", "m": "Medium", "s": "Small" }
			}
		}
	})));
	form.set_options(
		"country",
		[("se", "Sweden"), ("no", "Norway"), ("dk", "Denmark"), ("ar", "Argentina")],
		None,
	);

	let fields = form.generate().unwrap();

	let countries: Vec<&str> = fields["country"]["options"]
		.as_object()
		.unwrap()
		.keys()
		.map(String::as_str)
		.collect();
	assert_eq!(countries, vec!["se", "no", "dk", "ar"]);

	let sizes: Vec<&str> = fields["size"]["options"]
		.as_object()
		.unwrap()
		.keys()
		.map(String::as_str)
		.collect();
	assert_eq!(sizes, vec!["xl", "m", "s"]);
}

#[rstest]
fn test_schema_value_attribute_beats_loaded_data() {
	let schema = schema_of(json!({
		"status": { "form": { "type": "text", "value": "pinned" } }
	}));
	let form = Form::with_data(schema, json!({ "status": "from data" })).unwrap();

	let fields = form.generate().unwrap();
	assert_eq!(fields["status"]["value"], json!("pinned"));
}

#[rstest]
fn test_empty_schema_generates_an_empty_form() {
	let form = Form::default();
	assert!(form.generate().unwrap().is_empty());
}

#[rstest]
fn test_declining_factory_reports_kind_and_field() {
	let mut form = Form::new(schema_of(json!({
		"avatar": { "form": { "type": "signed upload" } }
	})));
	form.register_element("signed_upload", |_| None);

	let err = form.generate().unwrap_err();
	assert!(matches!(err, FormError::InvalidElement { .. }));
	let message = err.to_string();
	assert!(message.contains("signed upload"));
	assert!(message.contains("avatar"));
}

#[rstest]
fn test_custom_kind_composes_with_namespace_and_data() {
	use formgen::{Attributes, BaseElement, InputElement};

	struct Color(BaseElement);
	impl InputElement for Color {
		fn parse(&self) -> Attributes {
			let mut attrs = self.0.merge_defaults([
				("name", Value::String(self.0.name().to_string())),
				("id", Value::String(self.0.field_id())),
				("value", self.0.value()),
			]);
			attrs.insert("format".to_string(), Value::String("hex".to_string()));
			attrs
		}
	}

	let mut form = Form::with_data(
		schema_of(json!({ "shade": { "form": { "type": "color" } } })),
		json!({ "shade": "#336699" }),
	)
	.unwrap();
	form.register_element("color", |base| {
		Some(Box::new(Color(base)) as Box<dyn InputElement>)
	});
	form.set_namespace("theme");

	let fields = form.generate().unwrap();
	let shade = &fields["theme[shade]"];
	assert_eq!(shade["id"], json!("field_theme_shade"));
	assert_eq!(shade["value"], json!("#336699"));
	assert_eq!(shade["format"], json!("hex"));
}
