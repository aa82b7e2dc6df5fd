pub use crate::field::{FieldAction, FieldReport, FieldState, Validate, validate};
pub use crate::form::FormState;
pub use crate::portal::{OverlayStack, SlotId};
pub use crate::reveal::RevealAction;
pub use crate::transition::{Transition, TransitionOptions, TransitionPhase};
pub use folio_domain::input::InputKind;
pub use folio_domain::reveal::{RevealRegion, VisibilityFlags};
pub use folio_domain::validator::Validator;
