//! Error types for state registration and activation.

/// Errors raised while building the state table or activating a state.
///
/// Registration errors (`DuplicateStateName`, `UnknownParentState`,
/// `MalformedDescriptor`, the registry duplicates and the `check_views`
/// failures) are configuration-time defects: they surface during startup
/// and are never retried. `AccessDenied` and `ResolveFailed` belong to
/// activation and follow the same fail-fast contract.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
	#[error("State name already registered: '{0}'")]
	DuplicateStateName(String),

	#[error("State '{state}' references unknown parent state '{parent}'")]
	UnknownParentState {
		/// Name of the state being registered.
		state: String,
		/// The parent name that is not in the table.
		parent: String,
	},

	#[error("Malformed state descriptor '{state}': {reason}")]
	MalformedDescriptor {
		/// Name of the offending descriptor (may be empty).
		state: String,
		/// What the descriptor got wrong.
		reason: String,
	},

	#[error("State '{state}' fills view slot '{slot}' which no ancestor template exposes")]
	UnknownViewSlot { state: String, slot: String },

	#[error("Unknown template: '{0}'")]
	UnknownTemplate(String),

	#[error("Unknown controller: '{0}'")]
	UnknownController(String),

	#[error("Unknown state: '{0}'")]
	UnknownState(String),

	#[error("Template name already registered: '{0}'")]
	DuplicateTemplateName(String),

	#[error("Controller name already registered: '{0}'")]
	DuplicateControllerName(String),

	#[error("Access to state '{state}' denied: missing authority '{missing}'")]
	AccessDenied {
		/// Name of the gated state.
		state: String,
		/// First required authority the caller does not hold.
		missing: String,
	},

	#[error("Resolve binding '{binding}' of state '{state}' failed: {message}")]
	ResolveFailed {
		state: String,
		binding: String,
		/// Flattened error chain from the resolve operation.
		message: String,
	},
}
