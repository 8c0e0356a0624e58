//! Per-feature state registration for the JobVacancy app.
//!
//! One module per feature, each contributing its states through a
//! registrar function. [`app_state_table`] runs the registrars in the
//! startup order the app depends on: layout states first, feature states
//! after their parents.

pub mod offers;
pub mod site;

use crate::error::StateError;
use crate::table::StateTable;

/// Slots the root layout (`index.html`) exposes to top-level states.
pub const ROOT_SLOTS: [&str; 2] = ["navbar", "content"];

/// Builds the app's state table by running every registrar in sequence.
pub fn app_state_table() -> Result<StateTable, StateError> {
	let mut table = StateTable::with_root_slots(ROOT_SLOTS);
	site::register_site_state(&mut table)?;
	offers::register_offers_state(&mut table)?;
	Ok(table)
}
