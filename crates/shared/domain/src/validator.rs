use serde::{Deserialize, Serialize};

/// Built-in validation rules.
///
/// Length rules count characters of the trimmed value. Numeric rules fail for input that does
/// not parse as a number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Validator {
    Require,
    MinLength(usize),
    MaxLength(usize),
    Min(f64),
    Max(f64),
    Email,
}
