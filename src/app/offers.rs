//! The `offers` state: job offer listing under the site shell.

use crate::descriptor::StateDescriptor;
use crate::error::StateError;
use crate::table::StateTable;

use super::site::SITE_STATE;

/// Name of the offers state.
pub const OFFERS_STATE: &str = "offers";

/// Browser path of the offers state.
pub const OFFERS_PATH: &str = "/offers";

/// Template name of the offers content view.
pub const OFFERS_TEMPLATE: &str = "scripts/app/offers/offers.html";

/// Controller name of the offers content view.
pub const OFFERS_CONTROLLER: &str = "OffersController";

/// Registers the `offers` state under the `site` shell.
///
/// Open to every caller (no authorities) and declares no resolve
/// bindings, so activation is never gated and never waits on data.
pub fn register_offers_state(table: &mut StateTable) -> Result<(), StateError> {
	table.register(
		StateDescriptor::new(OFFERS_STATE)
			.with_parent(SITE_STATE)
			.with_url(OFFERS_PATH)
			.with_view("content", OFFERS_TEMPLATE, OFFERS_CONTROLLER),
	)
}
