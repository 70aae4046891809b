//! Element kind registry.
//!
//! Maps canonical kind names to element factories. Resolution never fails:
//! a name nothing is registered under resolves to the fallback factory,
//! plain text unless replaced.

use std::collections::HashMap;

use crate::element::{BaseElement, InputElement};
use crate::elements::{Checkbox, Hidden, Radio, Select, Text, Textarea};

/// Builds one element from its common parts.
///
/// Returning `None` means the factory declines to produce an element for
/// this field; generation then aborts with
/// [`FormError::InvalidElement`](crate::FormError::InvalidElement).
pub type ElementFactory = Box<dyn Fn(BaseElement) -> Option<Box<dyn InputElement>> + Send + Sync>;

/// Registry of element kinds keyed by canonical name.
///
/// Declared names are canonicalized before every lookup: lowercased, with
/// spaces, `-` and `_` stripped, so `"Check Box"`, `"check_box"` and
/// `"CHECKBOX"` all name the checkbox kind.
///
/// # Examples
///
/// ```
/// use formgen::ElementRegistry;
///
/// let registry = ElementRegistry::default();
/// assert!(registry.contains("select"));
/// assert!(registry.contains("Check Box"));
/// assert!(!registry.contains("color"));
/// ```
pub struct ElementRegistry {
	factories: HashMap<String, ElementFactory>,
	fallback: ElementFactory,
}

impl ElementRegistry {
	/// Create an empty registry. Every declared kind then resolves to the
	/// plain text fallback until something is registered.
	pub fn new() -> Self {
		Self {
			factories: HashMap::new(),
			fallback: Box::new(|base| Some(Box::new(Text::new(base)) as Box<dyn InputElement>)),
		}
	}

	/// Create a registry with all built-in kinds registered: `text`,
	/// `hidden`, `textarea`, `checkbox`, `select` and `radio`.
	pub fn with_builtins() -> Self {
		let mut registry = Self::new();
		registry.register("text", |base| {
			Some(Box::new(Text::new(base)) as Box<dyn InputElement>)
		});
		registry.register("hidden", |base| {
			Some(Box::new(Hidden::new(base)) as Box<dyn InputElement>)
		});
		registry.register("textarea", |base| {
			Some(Box::new(Textarea::new(base)) as Box<dyn InputElement>)
		});
		registry.register("checkbox", |base| {
			Some(Box::new(Checkbox::new(base)) as Box<dyn InputElement>)
		});
		registry.register("select", |base| {
			Some(Box::new(Select::new(base)) as Box<dyn InputElement>)
		});
		registry.register("radio", |base| {
			Some(Box::new(Radio::new(base)) as Box<dyn InputElement>)
		});
		registry
	}

	/// Register `factory` under `kind`, replacing any previous
	/// registration for the same canonical name.
	pub fn register<F>(&mut self, kind: impl AsRef<str>, factory: F)
	where
		F: Fn(BaseElement) -> Option<Box<dyn InputElement>> + Send + Sync + 'static,
	{
		self.factories
			.insert(canonical_kind(kind.as_ref()), Box::new(factory));
	}

	/// Replace the fallback factory used for kinds nothing is registered
	/// under.
	pub fn set_fallback<F>(&mut self, factory: F)
	where
		F: Fn(BaseElement) -> Option<Box<dyn InputElement>> + Send + Sync + 'static,
	{
		self.fallback = Box::new(factory);
	}

	/// Whether a factory is registered for `kind`. The fallback does not
	/// count.
	pub fn contains(&self, kind: &str) -> bool {
		self.factories.contains_key(&canonical_kind(kind))
	}

	/// The registered canonical kind names, in no particular order.
	pub fn kinds(&self) -> Vec<&str> {
		self.factories.keys().map(String::as_str).collect()
	}

	/// Resolve the factory for a declared kind, falling back for names
	/// nothing is registered under.
	pub fn resolve(&self, declared: &str) -> &ElementFactory {
		self.factories
			.get(&canonical_kind(declared))
			.unwrap_or(&self.fallback)
	}
}

impl Default for ElementRegistry {
	fn default() -> Self {
		Self::with_builtins()
	}
}

// The boxed factories carry no useful state to show.
impl std::fmt::Debug for ElementRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut kinds = self.kinds();
		kinds.sort_unstable();
		f.debug_struct("ElementRegistry")
			.field("kinds", &kinds)
			.finish()
	}
}

/// Canonical form of a declared kind name: lowercase, with whitespace,
/// `-` and `_` stripped.
fn canonical_kind(declared: &str) -> String {
	declared
		.chars()
		.filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
		.flat_map(char::to_lowercase)
		.collect()
}
