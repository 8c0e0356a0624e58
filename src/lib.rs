//! # JobVacancy navigation states
//!
//! Client-side navigation state registry for the JobVacancy single-page
//! app: an explicit, injected state table plus the per-feature registrar
//! functions that populate it at startup.
//!
//! A state is a named, navigable unit of UI bound to a URL path. Each
//! descriptor names its parent layout, the authorities required to enter,
//! the view slots it fills (template/controller pairs resolved through
//! explicit registries) and the resolve bindings that must complete before
//! its controllers are constructed.
//!
//! # Examples
//!
//! ```
//! use jobvacancy_states::app;
//!
//! let table = app::app_state_table().unwrap();
//! assert_eq!(table.full_path("offers").unwrap(), "/offers");
//! ```

pub mod activation;
pub mod app;
pub mod descriptor;
pub mod error;
pub mod registry;
pub mod resolve;
pub mod table;

pub use activation::{ActivatedState, ActivatedView};
pub use descriptor::{StateDescriptor, ViewBinding};
pub use error::StateError;
pub use registry::{ControllerFactory, ControllerRegistry, Template, TemplateRegistry};
pub use resolve::{ResolveBinding, ResolveFn, ResolveResults};
pub use table::StateTable;
