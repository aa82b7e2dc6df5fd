use crate::portal::use_portal_slot;
use crate::transition::{join_classes, use_transition};
use crate::use_site_config;
use dioxus::prelude::*;
use folio_domain::constants::MODAL_TRANSITION_CLASS;
use folio_kernel::transition::TransitionOptions;

/// Full-screen click catcher behind a dialog.
#[component]
pub fn Backdrop(on_click: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div { class: "Backdrop", onclick: move |evt| on_click.call(evt) }
    }
}

/// Modal dialog fully controlled by its parent.
///
/// `show` mounts the dialog with an enter transition and unmounts it after the exit
/// transition. The dialog body is rendered through the portal outlet when a
/// [`PortalProvider`](crate::portal::PortalProvider) is present, in place otherwise. The
/// backdrop exists only while `show` is set; clicking it calls `on_cancel`. `timeout_ms`
/// overrides the configured modal transition.
#[component]
pub fn OverlayDialog(
    show: bool,
    on_cancel: EventHandler<MouseEvent>,
    #[props(default, into)] class: String,
    #[props(default, into)] style: String,
    #[props(default, into)] header: String,
    #[props(default, into)] header_class: String,
    #[props(default, into)] content_class: String,
    timeout_ms: Option<u64>,
    children: Element,
) -> Element {
    let motion = use_site_config().motion;
    let timeout = timeout_ms.map_or_else(|| motion.modal_timeout(), std::time::Duration::from_millis);
    let transition = use_transition(show, TransitionOptions::mount_on_demand(timeout));
    let slot = use_portal_slot();

    let state = transition.read();
    let body = state.is_mounted().then(|| {
        let classes =
            join_classes(&[MODAL_TRANSITION_CLASS, &class, &state.class_names(MODAL_TRANSITION_CLASS)]);
        let header_classes = join_classes(&["Modal__header", &header_class]);
        let content_classes = join_classes(&["Modal__content", &content_class]);

        rsx! {
            div { class: classes, style,
                header { class: header_classes,
                    h2 { "{header}" }
                }
                div { class: content_classes, {children} }
            }
        }
    });
    drop(state);

    let portaled = slot.is_some();
    use_effect(use_reactive(&body, move |body| match (slot, body) {
        (Some(slot), Some(body)) => slot.show(body),
        (Some(slot), None) => slot.hide(),
        (None, _) => {}
    }));

    rsx! {
        if show {
            Backdrop { on_click: move |evt: MouseEvent| on_cancel.call(evt) }
        }
        if !portaled {
            {body}
        }
    }
}
