use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of controls a validated field can render.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
    Number,
    /// Optional entry: becomes valid as soon as it receives focus.
    Phone,
    /// Long text rendered as a `<textarea>`.
    Textarea,
}

impl InputKind {
    /// Value of the HTML `type` attribute; `None` for textareas.
    #[must_use]
    pub const fn html_type(self) -> Option<&'static str> {
        match self {
            Self::Text => Some("text"),
            Self::Email => Some("email"),
            Self::Password => Some("password"),
            Self::Number => Some("number"),
            Self::Phone => Some("tel"),
            Self::Textarea => None,
        }
    }

    #[must_use]
    pub const fn is_multiline(self) -> bool {
        matches!(self, Self::Textarea)
    }

    /// Whether focusing the control marks it valid regardless of validators.
    #[must_use]
    pub const fn forces_valid_on_focus(self) -> bool {
        matches!(self, Self::Phone)
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.html_type().unwrap_or("textarea"))
    }
}
