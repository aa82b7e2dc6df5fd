//! Validated text field: the validity rules and the reducer behind `ValidatedField`.

use folio_domain::validator::Validator;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

/// A pure predicate over the current field value.
///
/// Implemented by the built-in [`Validator`] rules and by any `Fn(&str) -> bool`, so callers
/// can mix configuration-driven rules with ad-hoc closures.
pub trait Validate {
    fn is_satisfied_by(&self, value: &str) -> bool;
}

impl Validate for Validator {
    fn is_satisfied_by(&self, value: &str) -> bool {
        let trimmed = value.trim();
        match *self {
            Self::Require => !trimmed.is_empty(),
            Self::MinLength(min) => trimmed.chars().count() >= min,
            Self::MaxLength(max) => trimmed.chars().count() <= max,
            Self::Min(min) => trimmed.parse::<f64>().is_ok_and(|n| n >= min),
            Self::Max(max) => trimmed.parse::<f64>().is_ok_and(|n| n <= max),
            Self::Email => EMAIL.is_match(value),
        }
    }
}

impl<F> Validate for F
where
    F: Fn(&str) -> bool,
{
    fn is_satisfied_by(&self, value: &str) -> bool {
        self(value)
    }
}

/// `true` iff every validator accepts `value`. An empty list accepts everything.
pub fn validate<V: Validate>(value: &str, validators: &[V]) -> bool {
    validators.iter().all(|v| v.is_satisfied_by(value))
}

/// Events that drive a [`FieldState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAction {
    /// The user edited the value; validity is recomputed from the validators.
    Change(String),
    /// The control lost focus.
    Touch,
    /// The control gained focus and its kind bypasses validation (phone entry).
    ForceValid,
}

/// Local state of one validated field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub is_touched: bool,
    pub is_valid: bool,
}

impl FieldState {
    /// Folds `action` into the state.
    ///
    /// `ForceValid` lasts only until the next `Change`, which recomputes validity.
    #[must_use]
    pub fn reduce<V: Validate>(self, action: FieldAction, validators: &[V]) -> Self {
        match action {
            FieldAction::Change(value) => {
                let is_valid = validate(&value, validators);
                Self { value, is_valid, ..self }
            }
            FieldAction::Touch => Self { is_touched: true, ..self },
            FieldAction::ForceValid => Self { is_valid: true, ..self },
        }
    }

    /// The error text is visible only after the user left the field with an invalid value.
    #[must_use]
    pub const fn show_error(&self) -> bool {
        self.is_touched && !self.is_valid
    }

    #[must_use]
    pub fn report(&self, id: impl Into<String>) -> FieldReport {
        FieldReport { id: id.into(), value: self.value.clone(), is_valid: self.is_valid }
    }
}

/// What a field tells its parent form after every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReport {
    pub id: String,
    pub value: String,
    pub is_valid: bool,
}
