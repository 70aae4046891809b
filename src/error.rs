//! Error types for form generation.
//!
//! This module defines the error type shared by form configuration and
//! the schema walk.

use thiserror::Error;

/// Errors that can occur while configuring or generating a form.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum FormError {
	/// The value source could not be normalized into field values.
	#[error("Invalid data source: {0}")]
	InvalidDataSource(String),

	/// An element factory declined to build its element.
	#[error("Invalid element of kind `{kind}` for field `{field}`")]
	InvalidElement {
		/// Declared kind the factory was resolved for.
		kind: String,
		/// Namespaced name of the field being generated.
		field: String,
	},
}

pub type FormResult<T> = Result<T, FormError>;
