use crate::timer::sleep;
use dioxus::prelude::*;
use folio_kernel::transition::{Transition, TransitionOptions};
use std::time::Duration;

/// Drives a [`Transition`] from a boolean prop.
///
/// Every time `is_in` flips, a new enter or exit starts and a timer completes it after the
/// configured timeout. Timers of superseded transitions are ignored by the state machine and
/// cancelled with the owning component.
pub fn use_transition(is_in: bool, options: TransitionOptions) -> Signal<Transition> {
    let mut transition = use_signal(|| Transition::new(is_in, options));

    use_effect(use_reactive(&is_in, move |is_in| {
        let Some(generation) = transition.write().set_in(is_in) else {
            return;
        };
        let timeout = transition.peek().timeout();

        spawn(async move {
            sleep(timeout).await;
            transition.write().complete(generation);
        });
    }));

    transition
}

/// Wraps `children` in a `div` carrying the enter/exit classes for `class_names`.
///
/// The wrapper always carries `class` as well, so styles can target the resting element and
/// the transition phases separately.
#[component]
pub fn CssTransition(
    is_in: bool,
    #[props(into)] class_names: String,
    timeout_ms: u64,
    #[props(default, into)] class: String,
    #[props(default)] mount_on_demand: bool,
    children: Element,
) -> Element {
    let timeout = Duration::from_millis(timeout_ms);
    let options = if mount_on_demand {
        TransitionOptions::mount_on_demand(timeout)
    } else {
        TransitionOptions::new(timeout)
    };
    let transition = use_transition(is_in, options);

    let state = transition.read();
    if !state.is_mounted() {
        return rsx! {};
    }
    let classes = join_classes(&[&class, &state.class_names(&class_names)]);

    rsx! {
        div { class: classes, {children} }
    }
}

/// Joins non-empty class fragments with single spaces.
pub(crate) fn join_classes(parts: &[&str]) -> String {
    parts.iter().map(|part| part.trim()).filter(|part| !part.is_empty()).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::join_classes;

    #[test]
    fn test_join_classes_skips_blank_parts() {
        assert_eq!(join_classes(&["Modal", "", "  ", "Modal-enter-done"]), "Modal Modal-enter-done");
        assert_eq!(join_classes(&[]), "");
    }
}
