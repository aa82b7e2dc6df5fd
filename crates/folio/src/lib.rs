//! Facade crate for the folio site.
//! Re-exports the domain model, the framework-free reducers and the Dioxus components.
//! Keep this crate thin: it should compose other crates, not implement behaviour.
//!
//! ## Usage
//! - Depend on `folio` and `use folio::prelude::*;` in apps.
//! - Provide a [`SiteConfig`](domain::config::SiteConfig) as root context to override the
//!   built-in content.

pub use folio_domain as domain;
pub use folio_kernel as kernel;
pub use folio_ui as ui;

pub mod prelude {
    pub use folio_domain::config::SiteConfig;
    pub use folio_kernel::prelude::*;
    pub use folio_ui::prelude::*;
    pub use folio_ui::use_site_config;
}
