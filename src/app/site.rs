//! The `site` layout state: shell wrapping every feature state.

use crate::descriptor::StateDescriptor;
use crate::error::StateError;
use crate::table::StateTable;

/// Name of the layout state.
pub const SITE_STATE: &str = "site";

/// Template name of the navigation bar view.
pub const NAVBAR_TEMPLATE: &str = "scripts/components/navbar/navbar.html";

/// Controller name of the navigation bar view.
pub const NAVBAR_CONTROLLER: &str = "NavbarController";

/// Registers the `site` layout state.
///
/// The state has no URL of its own; it fills the root layout's `navbar`
/// slot and leaves `content` for the feature states nested under it.
pub fn register_site_state(table: &mut StateTable) -> Result<(), StateError> {
	table.register(
		StateDescriptor::new(SITE_STATE).with_view("navbar", NAVBAR_TEMPLATE, NAVBAR_CONTROLLER),
	)
}
