//! Aggregates the reports of several validated fields into one form-wide validity flag.

use crate::field::FieldReport;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldEntry {
    value: String,
    is_valid: bool,
}

/// Latest value and validity of every field in a form.
///
/// The form is valid when it has at least one field and every field is valid.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: BTreeMap<String, FieldEntry>,
    is_valid: bool,
}

impl FormState {
    /// Pre-registers fields as empty and invalid, so the form stays invalid until each of
    /// them has reported.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields = ids
            .into_iter()
            .map(|id| (id.into(), FieldEntry { value: String::new(), is_valid: false }))
            .collect();
        Self { fields, is_valid: false }
    }

    /// Whether `report` matches what is already recorded for its field.
    #[must_use]
    pub fn is_current(&self, report: &FieldReport) -> bool {
        self.fields
            .get(&report.id)
            .is_some_and(|entry| entry.is_valid == report.is_valid && entry.value == report.value)
    }

    /// Records a field report. Returns `true` when the stored state changed.
    pub fn input(&mut self, report: FieldReport) -> bool {
        if self.is_current(&report) {
            return false;
        }
        let entry = FieldEntry { value: report.value, is_valid: report.is_valid };
        self.fields.insert(report.id, entry);
        self.recompute();
        true
    }

    /// Forgets a field, e.g. when it is removed from the page.
    pub fn remove(&mut self, id: &str) -> bool {
        let removed = self.fields.remove(id).is_some();
        if removed {
            self.recompute();
        }
        removed
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    #[must_use]
    pub fn value(&self, id: &str) -> Option<&str> {
        self.fields.get(id).map(|entry| entry.value.as_str())
    }

    #[must_use]
    pub fn is_field_valid(&self, id: &str) -> Option<bool> {
        self.fields.get(id).map(|entry| entry.is_valid)
    }

    /// `(id, value)` pairs in id order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(id, entry)| (id.as_str(), entry.value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    fn recompute(&mut self) {
        self.is_valid = !self.fields.is_empty() && self.fields.values().all(|entry| entry.is_valid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: &str, value: &str, is_valid: bool) -> FieldReport {
        FieldReport { id: id.to_owned(), value: value.to_owned(), is_valid }
    }

    #[test]
    fn test_empty_form_is_invalid() {
        assert!(!FormState::default().is_valid());
    }

    #[test]
    fn test_preregistered_fields_block_validity() {
        let mut form = FormState::new(["name", "email"]);
        assert!(form.input(report("name", "Jane", true)));
        assert!(!form.is_valid(), "email has not reported yet");

        assert!(form.input(report("email", "jane@example.com", true)));
        assert!(form.is_valid());
    }

    #[test]
    fn test_one_invalid_field_invalidates_form() {
        let mut form = FormState::default();
        form.input(report("name", "Jane", true));
        form.input(report("message", "hi", false));
        assert!(!form.is_valid());
        assert_eq!(form.is_field_valid("message"), Some(false));
    }

    #[test]
    fn test_is_current_compares_value_and_validity() {
        let mut form = FormState::new(["name"]);
        assert!(form.is_current(&report("name", "", false)));
        assert!(!form.is_current(&report("name", "", true)));
        assert!(!form.is_current(&report("email", "", false)));

        form.input(report("name", "Jane", true));
        assert!(form.is_current(&report("name", "Jane", true)));
        assert!(!form.is_current(&report("name", "Jan", true)));
    }

    #[test]
    fn test_repeated_report_is_not_a_change() {
        let mut form = FormState::default();
        assert!(form.input(report("name", "Jane", true)));
        assert!(!form.input(report("name", "Jane", true)));
        assert_eq!(form.value("name"), Some("Jane"));
    }

    #[test]
    fn test_removing_invalid_field_restores_validity() {
        let mut form = FormState::default();
        form.input(report("name", "Jane", true));
        form.input(report("phone", "", false));
        assert!(form.remove("phone"));
        assert!(form.is_valid());
        assert!(!form.remove("phone"));
        assert_eq!(form.values().collect::<Vec<_>>(), vec![("name", "Jane")]);
    }
}
