//! Fixed identifiers and class names used by the UI layer.

/// Reveal transition for the about section regions, in milliseconds.
pub const REVEAL_TRANSITION_MS: u64 = 1500;
/// Enter/exit transition of the overlay dialog, in milliseconds.
pub const MODAL_TRANSITION_MS: u64 = 300;

/// DOM id of the element that hosts overlay content.
pub const MODAL_TARGET_ID: &str = "modal";

/// Transition class prefix of the image region.
pub const IMAGE_TRANSITION_CLASS: &str = "design-bg";
/// Transition class prefix of the welcome region.
pub const WELCOME_TRANSITION_CLASS: &str = "inner-box";
/// Transition class prefix of the overlay dialog.
pub const MODAL_TRANSITION_CLASS: &str = "Modal";

/// Class applied to a control whose error text is visible.
pub const ERROR_CLASS: &str = "error";
/// Class of the validation message element.
pub const ERROR_MESSAGE_CLASS: &str = "error-message";
