//! State machines behind the folio UI components.
//! Nothing here knows about rendering: every reducer is a plain function over plain data so
//! the component layer stays a thin binding and the behaviour is testable without a DOM.
//!
//! ## Validated field
//! ```rust
//! use folio_kernel::field::{FieldAction, FieldState};
//! use folio_kernel::domain::validator::Validator;
//!
//! let validators = [Validator::Require];
//! let state = FieldState::default()
//!     .reduce(FieldAction::Change(String::new()), &validators)
//!     .reduce(FieldAction::Touch, &validators);
//! assert!(state.show_error());
//! ```
//!
//! ## Config loading
//! ```rust
//! use folio_kernel::config::parse_config;
//! use folio_kernel::domain::config::SiteConfig;
//!
//! let cfg: SiteConfig = parse_config("[motion]\nreveal_ms = 800").unwrap();
//! assert_eq!(cfg.motion.reveal_ms, 800);
//! ```
pub mod config;
pub mod field;
pub mod form;
pub mod portal;
pub mod prelude;
pub mod reveal;
pub mod transition;

pub use folio_domain as domain;
