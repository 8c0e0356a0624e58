//! State descriptors: the declarative unit of the navigation layer.
//!
//! A [`StateDescriptor`] is built once via chained constructors during
//! application configuration, handed to the table, and never mutated
//! afterwards. Templates and controllers are referenced by name only;
//! the names are resolved through the explicit registries at check and
//! activation time.

use crate::error::StateError;
use crate::resolve::ResolveBinding;

/// A view slot filled by a state: slot name plus the template/controller
/// pair to render into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewBinding {
	/// Name of the insertion point in an ancestor layout.
	pub slot: String,
	/// Template name, resolved through the template registry.
	pub template: String,
	/// Controller name, resolved through the controller registry.
	pub controller: String,
}

/// A named, navigable unit of application UI.
///
/// # Examples
///
/// ```
/// use jobvacancy_states::StateDescriptor;
///
/// let descriptor = StateDescriptor::new("offers")
///     .with_parent("site")
///     .with_url("/offers")
///     .with_view("content", "scripts/app/offers/offers.html", "OffersController");
///
/// assert_eq!(descriptor.name(), "offers");
/// assert!(descriptor.authorities().is_empty());
/// ```
#[derive(Clone)]
pub struct StateDescriptor {
	name: String,
	parent: Option<String>,
	url: Option<String>,
	authorities: Vec<String>,
	views: Vec<ViewBinding>,
	resolve: Vec<ResolveBinding>,
}

impl std::fmt::Debug for StateDescriptor {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("StateDescriptor")
			.field("name", &self.name)
			.field("parent", &self.parent)
			.field("url", &self.url)
			.field("authorities", &self.authorities)
			.field("views", &self.views)
			.field(
				"resolve",
				&self.resolve.iter().map(|r| r.name()).collect::<Vec<_>>(),
			)
			.finish()
	}
}

impl StateDescriptor {
	/// Creates a descriptor with no parent, no URL, no authority
	/// requirements, no views and no resolve bindings.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			parent: None,
			url: None,
			authorities: Vec::new(),
			views: Vec::new(),
			resolve: Vec::new(),
		}
	}

	/// Sets the enclosing layout state.
	pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
		self.parent = Some(parent.into());
		self
	}

	/// Sets the URL segment. The navigable path of a state is this segment
	/// appended to the ancestors' segments; layout states leave it unset.
	pub fn with_url(mut self, url: impl Into<String>) -> Self {
		self.url = Some(url.into());
		self
	}

	/// Adds a required authority. States with no authorities are
	/// unrestricted.
	pub fn with_authority(mut self, authority: impl Into<String>) -> Self {
		self.authorities.push(authority.into());
		self
	}

	/// Fills a view slot with a template/controller pair.
	pub fn with_view(
		mut self,
		slot: impl Into<String>,
		template: impl Into<String>,
		controller: impl Into<String>,
	) -> Self {
		self.views.push(ViewBinding {
			slot: slot.into(),
			template: template.into(),
			controller: controller.into(),
		});
		self
	}

	/// Adds a resolve binding. All bindings run before any controller of
	/// this state is constructed.
	pub fn with_resolve(mut self, binding: ResolveBinding) -> Self {
		self.resolve.push(binding);
		self
	}

	/// Returns the state name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the parent state name, if any.
	pub fn parent(&self) -> Option<&str> {
		self.parent.as_deref()
	}

	/// Returns the URL segment, if any.
	pub fn url(&self) -> Option<&str> {
		self.url.as_deref()
	}

	/// Returns the required authorities in declaration order.
	pub fn authorities(&self) -> &[String] {
		&self.authorities
	}

	/// Returns the filled view slots in declaration order.
	pub fn views(&self) -> &[ViewBinding] {
		&self.views
	}

	/// Returns the resolve bindings in declaration order.
	pub fn resolve(&self) -> &[ResolveBinding] {
		&self.resolve
	}

	/// Validates structural requirements of the descriptor itself.
	///
	/// Table-level invariants (name uniqueness, parent existence, slot
	/// exposure) are the table's job; this catches the malformed-record
	/// class of defect before the descriptor enters the table.
	pub(crate) fn validate(&self) -> Result<(), StateError> {
		if self.name.is_empty() {
			return Err(StateError::MalformedDescriptor {
				state: String::new(),
				reason: "state name must not be empty".to_string(),
			});
		}
		if let Some(url) = self.url.as_deref() {
			if url.is_empty() || !url.starts_with('/') {
				return Err(StateError::MalformedDescriptor {
					state: self.name.clone(),
					reason: format!("url '{url}' must start with '/'"),
				});
			}
		}
		for view in &self.views {
			if view.slot.is_empty() || view.template.is_empty() || view.controller.is_empty() {
				return Err(StateError::MalformedDescriptor {
					state: self.name.clone(),
					reason: "view bindings require a slot, a template and a controller".to_string(),
				});
			}
		}
		for binding in &self.resolve {
			if binding.name().is_empty() {
				return Err(StateError::MalformedDescriptor {
					state: self.name.clone(),
					reason: "resolve bindings must be named".to_string(),
				});
			}
		}
		Ok(())
	}
}
