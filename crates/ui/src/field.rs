use crate::transition::join_classes;
use dioxus::prelude::*;
use folio_domain::constants::{ERROR_CLASS, ERROR_MESSAGE_CLASS};
use folio_domain::input::InputKind;
use folio_domain::validator::Validator;
use folio_kernel::field::{FieldAction, FieldReport, FieldState};

/// Labelled input that validates itself and reports every change to its parent.
///
/// `on_input` fires once after mount and again whenever the value or its validity changes.
/// The error text appears once the user has left the field with an invalid value.
#[component]
pub fn ValidatedField(
    #[props(into)] id: String,
    #[props(into)] label: String,
    #[props(default)] kind: InputKind,
    #[props(default)] validators: Vec<Validator>,
    #[props(default, into)] error_text: String,
    on_input: EventHandler<FieldReport>,
    #[props(default, into)] class: String,
) -> Element {
    let state = use_signal(FieldState::default);

    let reported = use_memo(move || {
        let current = state.read();
        (current.value.clone(), current.is_valid)
    });

    let report_id = id.clone();
    use_effect(move || {
        let (value, is_valid) = reported();
        tracing::debug!(field = %report_id, is_valid, "field input changed");
        on_input.call(FieldReport { id: report_id.clone(), value, is_valid });
    });

    let current = state.cloned();
    let control_class = if current.show_error() { ERROR_CLASS } else { "" };

    let on_change = move |evt: FormEvent| dispatch(state, FieldAction::Change(evt.value()), &validators);
    let on_focus = move |_: FocusEvent| {
        if kind.forces_valid_on_focus() {
            dispatch(state, FieldAction::ForceValid, &[]);
        }
    };
    let on_blur = move |_: FocusEvent| dispatch(state, FieldAction::Touch, &[]);

    let control = if kind.is_multiline() {
        rsx! {
            textarea {
                class: control_class,
                name: id.clone(),
                id: id.clone(),
                placeholder: label.clone(),
                value: current.value.clone(),
                oninput: on_change,
                onfocus: on_focus,
                onblur: on_blur,
            }
        }
    } else {
        rsx! {
            input {
                class: control_class,
                r#type: kind.html_type().unwrap_or("text"),
                name: id.clone(),
                id: id.clone(),
                placeholder: label.clone(),
                value: current.value.clone(),
                oninput: on_change,
                onfocus: on_focus,
                onblur: on_blur,
            }
        }
    };

    rsx! {
        label { class: join_classes(&["Field", &class]),
            span { style: "display: none", "{label}" }
            {control}
        }
        if current.show_error() {
            div { class: ERROR_MESSAGE_CLASS, "{error_text}" }
        }
    }
}

fn dispatch(mut state: Signal<FieldState>, action: FieldAction, validators: &[Validator]) {
    let next = FieldState::clone(&state.peek()).reduce(action, validators);
    if *state.peek() != next {
        state.set(next);
    }
}
