use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use folio_domain::validator::Validator;
use folio_kernel::field::FieldReport;
use folio_ui::prelude::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

/// Runs effects, spawned tasks and re-renders until nothing happens for `window`.
async fn settle(dom: &mut VirtualDom, window: Duration) {
    let _ = tokio::time::timeout(window, async {
        loop {
            dom.wait_for_work().await;
            dom.render_immediate(&mut NoOpMutations);
        }
    })
    .await;
}

#[derive(Clone, Default)]
struct Reports(Arc<Mutex<Vec<FieldReport>>>);

#[tokio::test]
async fn test_field_reports_initial_state_after_mount() {
    fn app() -> Element {
        let reports = use_context::<Reports>();
        rsx! {
            ValidatedField {
                id: "name",
                label: "Name",
                validators: vec![Validator::Require],
                on_input: move |report: FieldReport| reports.0.lock().expect("reports lock").push(report),
            }
        }
    }

    let reports = Reports::default();
    let mut dom = VirtualDom::new(app).with_root_context(reports.clone());
    dom.rebuild_in_place();
    settle(&mut dom, Duration::from_millis(50)).await;

    let seen = reports.0.lock().expect("reports lock").clone();
    assert_eq!(seen, vec![FieldReport { id: "name".to_owned(), value: String::new(), is_valid: false }]);
}

#[tokio::test]
async fn test_dialog_body_moves_to_outlet() {
    fn app() -> Element {
        rsx! {
            PortalProvider {
                main {
                    OverlayDialog { show: true, on_cancel: |_: MouseEvent| {}, header: "Portaled",
                        p { "inside" }
                    }
                }
                PortalOutlet {}
            }
        }
    }

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    settle(&mut dom, Duration::from_millis(50)).await;
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains(r#"<main><div class="Backdrop"></div></main>"#), "{html}");
    let outlet = &html[html.find(r#"<div id="modal">"#).expect("outlet rendered")..];
    assert!(outlet.contains(r#"class="Modal""#), "{html}");
    assert!(outlet.contains("<h2>Portaled</h2>"), "{html}");
    assert!(outlet.contains("inside"), "{html}");
}

/// Hands the receiving end of a `show` switch to the dialog owner.
#[derive(Clone)]
struct Switch(Arc<Mutex<Option<UnboundedReceiver<bool>>>>);

#[tokio::test]
async fn test_dialog_enters_then_unmounts_after_exit() {
    fn app() -> Element {
        let mut show = use_signal(|| false);
        let switch = use_context::<Switch>();
        use_hook(move || {
            let receiver = switch.0.lock().expect("switch lock").take();
            spawn(async move {
                let Some(mut receiver) = receiver else { return };
                while let Some(next) = receiver.recv().await {
                    show.set(next);
                }
            });
        });

        rsx! {
            PortalProvider {
                OverlayDialog {
                    show: show(),
                    on_cancel: move |_: MouseEvent| show.set(false),
                    header: "Toggled",
                    timeout_ms: 10u64,
                    "body"
                }
                PortalOutlet {}
            }
        }
    }

    let (sender, receiver) = unbounded_channel();
    let mut dom =
        VirtualDom::new(app).with_root_context(Switch(Arc::new(Mutex::new(Some(receiver)))));
    dom.rebuild_in_place();
    settle(&mut dom, Duration::from_millis(50)).await;
    let html = dioxus_ssr::render(&dom);
    assert!(!html.contains("Modal"), "{html}");

    sender.send(true).expect("dialog owner alive");
    settle(&mut dom, Duration::from_millis(200)).await;
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains(r#"class="Modal Modal-enter-done""#), "{html}");
    assert!(html.contains(r#"class="Backdrop""#), "{html}");

    sender.send(false).expect("dialog owner alive");
    settle(&mut dom, Duration::from_millis(200)).await;
    let html = dioxus_ssr::render(&dom);
    assert!(!html.contains("Modal"), "{html}");
    assert!(!html.contains("Backdrop"), "{html}");
    assert!(!html.contains("Toggled"), "{html}");
}

#[tokio::test]
async fn test_contact_form_stays_locked_until_fields_are_valid() {
    fn app() -> Element {
        rsx! {
            PortalProvider {
                ContactForm {}
                PortalOutlet {}
            }
        }
    }

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    settle(&mut dom, Duration::from_millis(50)).await;
    let html = dioxus_ssr::render(&dom);

    // Every field has reported its empty, invalid initial state.
    assert!(html.contains("disabled"), "{html}");
    assert!(!html.contains("error-message"), "{html}");
    assert!(!html.contains("Backdrop"), "{html}");
}
