use crate::field::ValidatedField;
use crate::modal::OverlayDialog;
use crate::use_site_config;
use dioxus::prelude::*;
use folio_kernel::field::FieldReport;
use folio_kernel::form::FormState;

/// Contact form built from the configured fields.
///
/// Submitting is possible only while every field is valid; it opens a confirmation dialog
/// summarising the entered values. Clicking the backdrop closes the dialog.
#[component]
pub fn ContactForm() -> Element {
    let config = use_site_config();
    let form_config = config.contact_form.clone();

    let mut form = use_signal({
        let ids: Vec<String> = form_config.fields.iter().map(|field| field.id.clone()).collect();
        move || FormState::new(ids)
    });
    let mut confirming = use_signal(|| false);

    let on_field = use_callback(move |report: FieldReport| {
        if form.peek().is_current(&report) {
            return;
        }
        form.write().input(report);
        tracing::debug!(is_valid = form.peek().is_valid(), "contact form updated");
    });

    let is_valid = form.read().is_valid();
    let summary: Vec<(String, String)> = form_config
        .fields
        .iter()
        .filter_map(|field| {
            let value = form.read().value(&field.id).unwrap_or_default().trim().to_owned();
            (!value.is_empty()).then(|| (field.label.clone(), value))
        })
        .collect();

    rsx! {
        form {
            class: "ContactForm",
            id: "contact",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                if form.peek().is_valid() {
                    tracing::info!("contact form submitted");
                    confirming.set(true);
                }
            },
            for field in form_config.fields.iter().cloned() {
                ValidatedField {
                    key: "{field.id}",
                    id: field.id.clone(),
                    label: field.label,
                    kind: field.kind,
                    validators: field.validators,
                    error_text: field.error_text,
                    on_input: on_field,
                }
            }
            button { r#type: "submit", disabled: !is_valid, "{form_config.submit_label}" }
        }
        OverlayDialog {
            show: confirming(),
            on_cancel: move |_: MouseEvent| confirming.set(false),
            header: form_config.confirmation_header.clone(),
            content_class: "ContactForm__summary",
            dl {
                for (label, value) in summary {
                    dt { "{label}" }
                    dd { "{value}" }
                }
            }
        }
    }
}
