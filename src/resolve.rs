//! Resolve bindings: named data dependencies of a state.
//!
//! A resolve binding is a data-producing operation attached to a state by
//! name. Every binding of a state runs, in declaration order, before any of
//! the state's controllers are constructed; a failing binding aborts the
//! activation. The `offers` state declares none.

use crate::error::StateError;
use std::collections::HashMap;
use std::sync::Arc;

/// Results of a state's resolve bindings, keyed by binding name.
pub type ResolveResults = HashMap<String, serde_json::Value>;

/// A data-producing resolve operation.
pub type ResolveFn = Arc<dyn Fn() -> anyhow::Result<serde_json::Value> + Send + Sync>;

/// A named data dependency that must complete before controller construction.
pub struct ResolveBinding {
	name: String,
	run: ResolveFn,
}

impl Clone for ResolveBinding {
	fn clone(&self) -> Self {
		Self {
			name: self.name.clone(),
			run: Arc::clone(&self.run),
		}
	}
}

impl std::fmt::Debug for ResolveBinding {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ResolveBinding")
			.field("name", &self.name)
			.finish()
	}
}

impl ResolveBinding {
	/// Creates a binding from a name and a producing closure.
	pub fn new<F>(name: impl Into<String>, run: F) -> Self
	where
		F: Fn() -> anyhow::Result<serde_json::Value> + Send + Sync + 'static,
	{
		Self {
			name: name.into(),
			run: Arc::new(run),
		}
	}

	/// Returns the binding name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Runs the producing operation once.
	pub fn run(&self) -> anyhow::Result<serde_json::Value> {
		(self.run)()
	}
}

/// Runs every binding in declaration order, failing on the first error.
pub(crate) fn run_all(state: &str, bindings: &[ResolveBinding]) -> Result<ResolveResults, StateError> {
	let mut results = ResolveResults::with_capacity(bindings.len());
	for binding in bindings {
		let value = binding.run().map_err(|err| StateError::ResolveFailed {
			state: state.to_string(),
			binding: binding.name().to_string(),
			message: format!("{err:#}"),
		})?;
		results.insert(binding.name().to_string(), value);
	}
	Ok(results)
}
