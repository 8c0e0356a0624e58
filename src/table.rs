//! The state table: process-wide registry of navigation states.
//!
//! The table is built once during application configuration by running the
//! registrar functions in sequence, then shared immutably. Registration is
//! fail-fast: a rejected descriptor leaves the table exactly as it was.

use crate::descriptor::StateDescriptor;
use crate::error::StateError;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Registration-ordered table of named states.
///
/// # Examples
///
/// ```
/// use jobvacancy_states::{StateDescriptor, StateTable};
///
/// let mut table = StateTable::new();
/// table.register(StateDescriptor::new("site")).unwrap();
/// table.register(
///     StateDescriptor::new("offers").with_parent("site").with_url("/offers"),
/// ).unwrap();
///
/// assert_eq!(table.full_path("offers").unwrap(), "/offers");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StateTable {
	states: HashMap<String, StateDescriptor>,
	/// State names in registration order.
	order: Vec<String>,
	/// Slots the root layout exposes to top-level states.
	root_slots: Vec<String>,
}

impl StateTable {
	/// Creates a table whose root layout exposes no slots.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a table whose root layout exposes the given slots.
	pub fn with_root_slots<I, S>(slots: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			root_slots: slots.into_iter().map(Into::into).collect(),
			..Self::default()
		}
	}

	/// Returns the slots the root layout exposes.
	pub fn root_slots(&self) -> &[String] {
		&self.root_slots
	}

	/// Registers a state descriptor.
	///
	/// Fails with [`StateError::DuplicateStateName`] if the name is taken,
	/// with [`StateError::UnknownParentState`] if the parent has not been
	/// registered yet, and with [`StateError::MalformedDescriptor`] for
	/// structurally invalid descriptors. On failure the table is unchanged.
	pub fn register(&mut self, descriptor: StateDescriptor) -> Result<(), StateError> {
		descriptor.validate().inspect_err(|err| {
			warn!(error = %err, "rejected malformed state descriptor");
		})?;

		let name = descriptor.name().to_string();
		if self.states.contains_key(&name) {
			warn!(state = %name, "rejected duplicate state registration");
			return Err(StateError::DuplicateStateName(name));
		}
		if let Some(parent) = descriptor.parent() {
			if !self.states.contains_key(parent) {
				warn!(state = %name, parent_state = %parent, "rejected state with unregistered parent");
				return Err(StateError::UnknownParentState {
					state: name,
					parent: parent.to_string(),
				});
			}
		}

		debug!(
			state = %name,
			parent_state = descriptor.parent().unwrap_or("<root>"),
			url = descriptor.url().unwrap_or(""),
			"registered state"
		);
		self.order.push(name.clone());
		self.states.insert(name, descriptor);
		Ok(())
	}

	/// Looks up a state by name.
	pub fn get(&self, name: &str) -> Option<&StateDescriptor> {
		self.states.get(name)
	}

	/// Checks whether a state name is registered.
	pub fn contains(&self, name: &str) -> bool {
		self.states.contains_key(name)
	}

	/// Returns the number of registered states.
	pub fn len(&self) -> usize {
		self.order.len()
	}

	/// Checks whether the table is empty.
	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	/// Returns state names in registration order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.order.iter().map(String::as_str)
	}

	/// Returns the chain from the root ancestor down to the named state,
	/// the named state last.
	///
	/// Parents are checked at registration time, so every link of a
	/// registered state's chain is present.
	pub(crate) fn ancestor_chain(&self, name: &str) -> Result<Vec<&StateDescriptor>, StateError> {
		let mut chain = Vec::new();
		let mut cursor = Some(name);
		while let Some(current) = cursor {
			let state = self
				.get(current)
				.ok_or_else(|| StateError::UnknownState(current.to_string()))?;
			chain.push(state);
			cursor = state.parent();
		}
		chain.reverse();
		Ok(chain)
	}

	/// Returns the navigable path of a state: its ancestors' URL segments
	/// concatenated with its own, root first.
	///
	/// Layout states without URL segments contribute nothing; a chain with
	/// no segments at all yields the empty string.
	pub fn full_path(&self, name: &str) -> Result<String, StateError> {
		let chain = self.ancestor_chain(name)?;
		let mut path = String::new();
		for state in chain {
			if let Some(url) = state.url() {
				path.push_str(url);
			}
		}
		Ok(path)
	}

	/// Finds the state whose full path equals the given browser path.
	///
	/// Only states that declare a URL segment of their own are navigable;
	/// layout states never match. Comparison is exact, first registered
	/// wins.
	pub fn find_by_path(&self, path: &str) -> Option<&StateDescriptor> {
		self.order
			.iter()
			.filter_map(|name| self.states.get(name))
			.filter(|state| state.url().is_some())
			.find(|state| {
				self.full_path(state.name())
					.map(|full| full == path)
					.unwrap_or(false)
			})
	}
}
