//! Explicit template and controller registries.
//!
//! Descriptors refer to templates and controllers by name. Instead of
//! runtime name resolution, both sides of the indirection are explicit
//! maps owned by the host application and injected wherever names need
//! resolving.

use crate::error::StateError;
use crate::resolve::ResolveResults;
use std::collections::HashMap;
use std::sync::Arc;

/// A view template: its source path plus the slots it exposes to child
/// states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
	source: String,
	slots: Vec<String>,
}

impl Template {
	/// Creates a template exposing no slots.
	pub fn new(source: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			slots: Vec::new(),
		}
	}

	/// Declares a slot this template exposes.
	pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
		self.slots.push(slot.into());
		self
	}

	/// Returns the template source path.
	pub fn source(&self) -> &str {
		&self.source
	}

	/// Returns the exposed slot names.
	pub fn slots(&self) -> &[String] {
		&self.slots
	}

	/// Checks whether this template exposes the given slot.
	pub fn exposes(&self, slot: &str) -> bool {
		self.slots.iter().any(|s| s == slot)
	}
}

/// Name-keyed template lookup.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
	templates: HashMap<String, Template>,
}

impl TemplateRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a template under a name.
	pub fn register(&mut self, name: impl Into<String>, template: Template) -> Result<(), StateError> {
		let name = name.into();
		if self.templates.contains_key(&name) {
			return Err(StateError::DuplicateTemplateName(name));
		}
		self.templates.insert(name, template);
		Ok(())
	}

	/// Looks up a template by name.
	pub fn get(&self, name: &str) -> Option<&Template> {
		self.templates.get(name)
	}

	/// Checks whether a name is registered.
	pub fn contains(&self, name: &str) -> bool {
		self.templates.contains_key(name)
	}

	/// Returns the number of registered templates.
	pub fn len(&self) -> usize {
		self.templates.len()
	}

	/// Checks whether the registry is empty.
	pub fn is_empty(&self) -> bool {
		self.templates.is_empty()
	}
}

/// Constructs a controller instance from the state's resolve results.
pub type ControllerFactory = Arc<dyn Fn(&ResolveResults) + Send + Sync>;

/// Name-keyed controller factory lookup.
#[derive(Clone, Default)]
pub struct ControllerRegistry {
	factories: HashMap<String, ControllerFactory>,
}

impl std::fmt::Debug for ControllerRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ControllerRegistry")
			.field("controllers", &self.factories.keys().collect::<Vec<_>>())
			.finish()
	}
}

impl ControllerRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a controller factory under a name.
	pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> Result<(), StateError>
	where
		F: Fn(&ResolveResults) + Send + Sync + 'static,
	{
		let name = name.into();
		if self.factories.contains_key(&name) {
			return Err(StateError::DuplicateControllerName(name));
		}
		self.factories.insert(name, Arc::new(factory));
		Ok(())
	}

	/// Looks up a controller factory by name.
	pub fn get(&self, name: &str) -> Option<&ControllerFactory> {
		self.factories.get(name)
	}

	/// Checks whether a name is registered.
	pub fn contains(&self, name: &str) -> bool {
		self.factories.contains_key(name)
	}
}
