//! Schema-driven HTML form element generation
//!
//! This crate turns a declarative field schema plus a record of current
//! values into renderer-ready input descriptors: per field, a finalized
//! attribute mapping carrying the right defaults (derived ids, checked and
//! selected state, option lists) so a template layer can render form
//! markup uniformly instead of hand-writing it per schema. It provides:
//! - Element kind dispatch by declared `type`, with graceful fallback for
//!   unknown kinds
//! - A caller-wins merge rule: declared attributes always beat computed
//!   defaults
//! - Value sourcing from maps, pair lists, raw JSON or serializable models
//! - Optional name namespacing (`user[email]`) that leaves data lookups
//!   untouched
//! - Custom element kinds pluggable through a factory registry
//!
//! # Examples
//!
//! ```
//! use formgen::{Form, Schema};
//! use serde_json::json;
//!
//! let schema: Schema = serde_json::from_value(json!({
//!     "email": { "form": { "type": "text", "placeholder": "you@example.com" } },
//!     "agree": { "form": { "type": "checkbox" } },
//! })).unwrap();
//!
//! let form = Form::with_data(schema, json!({ "email": "a@b.com", "agree": 1 })).unwrap();
//! let fields = form.generate().unwrap();
//!
//! assert_eq!(fields["email"]["id"], json!("field_email"));
//! assert_eq!(fields["agree"]["checked"], json!("checked"));
//! ```

pub mod data;
pub mod element;
pub mod elements;
pub mod error;
pub mod form;
pub mod registry;
pub mod schema;

pub use data::DataSource;
pub use element::{Attributes, BaseElement, InputElement};
pub use elements::{Checkbox, Hidden, Radio, Select, Text, Textarea};
pub use error::{FormError, FormResult};
pub use form::Form;
pub use registry::{ElementFactory, ElementRegistry};
pub use schema::Schema;
