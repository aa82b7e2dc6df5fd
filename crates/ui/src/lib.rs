//! # Folio UI
//!
//! Dioxus components of the portfolio site. Each component is a thin binding over a reducer
//! from `folio-kernel`; the components own signals and timers, the kernel owns behaviour.
//!
//! * [`ValidatedField`](field::ValidatedField): labelled input with pluggable validators.
//! * [`OverlayDialog`](modal::OverlayDialog): modal rendered through the portal outlet.
//! * [`ScrollRevealSection`](about::ScrollRevealSection): about section that animates regions
//!   in as they scroll into view.
//! * [`ContactForm`](contact_form::ContactForm): form aggregating several validated fields.
//!
//! Components read [`SiteConfig`](folio_domain::config::SiteConfig) from context when it is
//! provided and fall back to its defaults otherwise.

pub mod about;
pub mod contact_form;
pub mod field;
pub mod modal;
pub mod portal;
mod timer;
pub mod transition;

pub mod prelude {
    pub use crate::about::{Actions, Contact, Description, ScrollRevealSection, SectionHeader};
    pub use crate::contact_form::ContactForm;
    pub use crate::field::ValidatedField;
    pub use crate::modal::{Backdrop, OverlayDialog};
    pub use crate::portal::{Portal, PortalOutlet, PortalProvider};
    pub use crate::transition::{CssTransition, use_transition};
}

use dioxus::prelude::*;
use folio_domain::config::SiteConfig;

/// The site configuration from context, or the defaults when none was provided.
pub fn use_site_config() -> SiteConfig {
    try_use_context::<SiteConfig>().unwrap_or_default()
}
