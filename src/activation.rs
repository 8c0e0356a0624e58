//! View checking and state activation.
//!
//! `check_views` is the startup configuration pass: after every registrar
//! has run, it verifies that each filled view slot is exposed by the
//! ancestor chain and that every referenced template exists. `activate`
//! is the navigation-time counterpart: authority gate, then resolve
//! bindings, then controller construction.

use crate::error::StateError;
use crate::registry::{ControllerRegistry, TemplateRegistry};
use crate::resolve::{self, ResolveResults};
use crate::table::StateTable;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// A view slot as activated: slot name, template source, controller name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivatedView {
	pub slot: String,
	pub template_source: String,
	pub controller: String,
}

/// Snapshot of a successful activation.
#[derive(Debug, Clone, Serialize)]
pub struct ActivatedState {
	/// Name of the activated state.
	pub name: String,
	/// Full navigable path of the state.
	pub path: String,
	/// Activated views in declaration order.
	pub views: Vec<ActivatedView>,
	/// Results of the state's resolve bindings.
	pub resolved: ResolveResults,
}

impl StateTable {
	/// Slots visible to a state: the root layout's slots plus every slot
	/// declared by templates its ancestors bind. Unfilled ancestor slots
	/// stay targetable.
	fn exposed_slots(
		&self,
		name: &str,
		templates: &TemplateRegistry,
	) -> Result<HashSet<String>, StateError> {
		let mut slots: HashSet<String> = self.root_slots().iter().cloned().collect();
		let chain = self.ancestor_chain(name)?;
		// Ancestors only; a state cannot target its own templates' slots.
		for state in &chain[..chain.len() - 1] {
			for view in state.views() {
				let template = templates
					.get(&view.template)
					.ok_or_else(|| StateError::UnknownTemplate(view.template.clone()))?;
				slots.extend(template.slots().iter().cloned());
			}
		}
		Ok(slots)
	}

	/// Verifies every registered state against the template registry.
	///
	/// Run once after all registrars, before any navigation is served.
	/// Checks that each filled slot is exposed to the state and that each
	/// referenced template is registered. Fails on the first defect.
	pub fn check_views(&self, templates: &TemplateRegistry) -> Result<(), StateError> {
		for name in self.names() {
			let state = self
				.get(name)
				.ok_or_else(|| StateError::UnknownState(name.to_string()))?;
			let exposed = self.exposed_slots(name, templates)?;
			for view in state.views() {
				if !templates.contains(&view.template) {
					return Err(StateError::UnknownTemplate(view.template.clone()));
				}
				if !exposed.contains(&view.slot) {
					return Err(StateError::UnknownViewSlot {
						state: name.to_string(),
						slot: view.slot.clone(),
					});
				}
			}
		}
		debug!(states = self.len(), "state table view check passed");
		Ok(())
	}

	/// Activates a state for a caller holding the given authorities.
	///
	/// A state with an empty authority set is never blocked. All resolve
	/// bindings run, in declaration order, before any controller is
	/// constructed; a failing binding aborts the activation with no
	/// controller built.
	pub fn activate(
		&self,
		name: &str,
		templates: &TemplateRegistry,
		controllers: &ControllerRegistry,
		granted: &[&str],
	) -> Result<ActivatedState, StateError> {
		let state = self
			.get(name)
			.ok_or_else(|| StateError::UnknownState(name.to_string()))?;

		for required in state.authorities() {
			if !granted.contains(&required.as_str()) {
				return Err(StateError::AccessDenied {
					state: name.to_string(),
					missing: required.clone(),
				});
			}
		}

		let resolved = resolve::run_all(name, state.resolve())?;

		let mut views = Vec::with_capacity(state.views().len());
		for view in state.views() {
			let template = templates
				.get(&view.template)
				.ok_or_else(|| StateError::UnknownTemplate(view.template.clone()))?;
			let factory = controllers
				.get(&view.controller)
				.ok_or_else(|| StateError::UnknownController(view.controller.clone()))?;
			factory(&resolved);
			views.push(ActivatedView {
				slot: view.slot.clone(),
				template_source: template.source().to_string(),
				controller: view.controller.clone(),
			});
		}

		debug!(state = %name, views = views.len(), "activated state");
		Ok(ActivatedState {
			name: name.to_string(),
			path: self.full_path(name)?,
			views,
			resolved,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::descriptor::StateDescriptor;
	use crate::registry::Template;
	use crate::resolve::ResolveBinding;
	use rstest::rstest;
	use serde_json::json;
	use std::sync::atomic::{AtomicUsize, Ordering};
	use std::sync::{Arc, Mutex};

	fn demo_table() -> StateTable {
		let mut table = StateTable::with_root_slots(["navbar", "content"]);
		table
			.register(StateDescriptor::new("site").with_view(
				"navbar",
				"navbar.html",
				"NavbarController",
			))
			.unwrap();
		table
			.register(
				StateDescriptor::new("offers")
					.with_parent("site")
					.with_url("/offers")
					.with_view("content", "offers.html", "OffersController"),
			)
			.unwrap();
		table
	}

	fn demo_templates() -> TemplateRegistry {
		let mut templates = TemplateRegistry::new();
		templates
			.register("navbar.html", Template::new("scripts/components/navbar/navbar.html"))
			.unwrap();
		templates
			.register("offers.html", Template::new("scripts/app/offers/offers.html"))
			.unwrap();
		templates
	}

	fn demo_controllers() -> ControllerRegistry {
		let mut controllers = ControllerRegistry::new();
		controllers.register("NavbarController", |_| {}).unwrap();
		controllers.register("OffersController", |_| {}).unwrap();
		controllers
	}

	#[rstest]
	fn test_check_views_passes() {
		assert!(demo_table().check_views(&demo_templates()).is_ok());
	}

	#[rstest]
	fn test_check_views_rejects_unknown_template() {
		let mut templates = demo_templates();
		let table = {
			let mut t = demo_table();
			t.register(
				StateDescriptor::new("jobs")
					.with_parent("site")
					.with_url("/jobs")
					.with_view("content", "missing.html", "JobsController"),
			)
			.unwrap();
			t
		};

		assert_eq!(
			table.check_views(&templates).unwrap_err(),
			StateError::UnknownTemplate("missing.html".to_string())
		);

		templates.register("missing.html", Template::new("jobs.html")).unwrap();
		assert!(table.check_views(&templates).is_ok());
	}

	#[rstest]
	fn test_check_views_rejects_unexposed_slot() {
		let mut table = demo_table();
		table
			.register(
				StateDescriptor::new("jobs")
					.with_parent("site")
					.with_url("/jobs")
					.with_view("sidebar", "offers.html", "JobsController"),
			)
			.unwrap();

		assert_eq!(
			table.check_views(&demo_templates()).unwrap_err(),
			StateError::UnknownViewSlot {
				state: "jobs".to_string(),
				slot: "sidebar".to_string(),
			}
		);
	}

	#[rstest]
	fn test_check_views_sees_slots_from_ancestor_templates() {
		let mut templates = demo_templates();
		templates
			.register(
				"offers-layout.html",
				Template::new("scripts/app/offers/layout.html").with_slot("detail"),
			)
			.unwrap();

		let mut table = StateTable::with_root_slots(["content"]);
		table
			.register(
				StateDescriptor::new("offers")
					.with_url("/offers")
					.with_view("content", "offers-layout.html", "OffersController"),
			)
			.unwrap();
		table
			.register(
				StateDescriptor::new("offers.detail")
					.with_parent("offers")
					.with_url("/detail")
					.with_view("detail", "offers.html", "OfferDetailController"),
			)
			.unwrap();

		assert!(table.check_views(&templates).is_ok());
	}

	#[rstest]
	fn test_activate_constructs_controller_once() {
		let calls = Arc::new(AtomicUsize::new(0));
		let counted = Arc::clone(&calls);

		let mut controllers = ControllerRegistry::new();
		controllers.register("NavbarController", |_| {}).unwrap();
		controllers
			.register("OffersController", move |_| {
				counted.fetch_add(1, Ordering::SeqCst);
			})
			.unwrap();

		let activated = demo_table()
			.activate("offers", &demo_templates(), &controllers, &[])
			.unwrap();

		assert_eq!(calls.load(Ordering::SeqCst), 1);
		assert_eq!(activated.name, "offers");
		assert_eq!(activated.path, "/offers");
		assert_eq!(activated.views.len(), 1);
		assert_eq!(activated.views[0].slot, "content");
		assert_eq!(
			activated.views[0].template_source,
			"scripts/app/offers/offers.html"
		);
		assert_eq!(activated.views[0].controller, "OffersController");
		assert!(activated.resolved.is_empty());
	}

	#[rstest]
	fn test_activate_empty_authorities_never_blocked() {
		let table = demo_table();
		assert!(
			table
				.activate("offers", &demo_templates(), &demo_controllers(), &[])
				.is_ok()
		);
	}

	#[rstest]
	fn test_activate_authority_gate() {
		let mut table = demo_table();
		table
			.register(
				StateDescriptor::new("admin")
					.with_parent("site")
					.with_url("/admin")
					.with_authority("ROLE_ADMIN")
					.with_view("content", "offers.html", "OffersController"),
			)
			.unwrap();

		let templates = demo_templates();
		let controllers = demo_controllers();

		let err = table
			.activate("admin", &templates, &controllers, &["ROLE_USER"])
			.unwrap_err();
		assert_eq!(
			err,
			StateError::AccessDenied {
				state: "admin".to_string(),
				missing: "ROLE_ADMIN".to_string(),
			}
		);

		assert!(
			table
				.activate("admin", &templates, &controllers, &["ROLE_USER", "ROLE_ADMIN"])
				.is_ok()
		);
	}

	#[rstest]
	fn test_activate_resolves_before_controller() {
		let seen = Arc::new(Mutex::new(None));
		let sink = Arc::clone(&seen);

		let mut table = StateTable::with_root_slots(["content"]);
		table
			.register(
				StateDescriptor::new("jobs")
					.with_url("/jobs")
					.with_resolve(ResolveBinding::new("jobs", || Ok(json!(["a", "b"]))))
					.with_view("content", "offers.html", "JobsController"),
			)
			.unwrap();

		let mut controllers = ControllerRegistry::new();
		controllers
			.register("JobsController", move |resolved| {
				*sink.lock().unwrap() = resolved.get("jobs").cloned();
			})
			.unwrap();

		let activated = table
			.activate("jobs", &demo_templates(), &controllers, &[])
			.unwrap();

		assert_eq!(seen.lock().unwrap().as_ref(), Some(&json!(["a", "b"])));
		assert_eq!(activated.resolved["jobs"], json!(["a", "b"]));
	}

	#[rstest]
	fn test_activate_failed_resolve_skips_controller() {
		let calls = Arc::new(AtomicUsize::new(0));
		let counted = Arc::clone(&calls);

		let mut table = StateTable::with_root_slots(["content"]);
		table
			.register(
				StateDescriptor::new("jobs")
					.with_url("/jobs")
					.with_resolve(ResolveBinding::new("jobs", || anyhow::bail!("boom")))
					.with_view("content", "offers.html", "JobsController"),
			)
			.unwrap();

		let mut controllers = ControllerRegistry::new();
		controllers
			.register("JobsController", move |_| {
				counted.fetch_add(1, Ordering::SeqCst);
			})
			.unwrap();

		let err = table
			.activate("jobs", &demo_templates(), &controllers, &[])
			.unwrap_err();

		assert!(matches!(err, StateError::ResolveFailed { .. }));
		assert_eq!(calls.load(Ordering::SeqCst), 0);
	}

	#[rstest]
	fn test_activate_unknown_controller() {
		let err = demo_table()
			.activate("offers", &demo_templates(), &ControllerRegistry::new(), &[])
			.unwrap_err();
		assert_eq!(
			err,
			StateError::UnknownController("OffersController".to_string())
		);
	}
}
