//! About section: a portrait region and a welcome region that animate in independently as
//! they scroll into view.

use crate::transition::CssTransition;
use crate::use_site_config;
use dioxus::prelude::*;
use folio_domain::config::{ActionLink, ContactEntry};
use folio_domain::constants::{IMAGE_TRANSITION_CLASS, WELCOME_TRANSITION_CLASS};
use folio_domain::reveal::{RevealRegion, VisibilityFlags};
use folio_kernel::reveal::{RevealAction, reduce};

#[component]
pub fn ScrollRevealSection() -> Element {
    let config = use_site_config();
    let visibility = use_signal(VisibilityFlags::empty);
    let reveal_ms = config.motion.reveal_ms;
    let flags = visibility();

    rsx! {
        section { class: "About", id: "about",
            div {
                class: "box box--image",
                onvisible: move |evt| observe(visibility, RevealRegion::Image, &evt),
                CssTransition {
                    is_in: flags.image_visible(),
                    class_names: IMAGE_TRANSITION_CLASS,
                    class: IMAGE_TRANSITION_CLASS,
                    timeout_ms: reveal_ms,
                    div { class: "img" }
                }
            }
            div {
                class: "box box--description",
                onvisible: move |evt| observe(visibility, RevealRegion::Welcome, &evt),
                CssTransition {
                    is_in: flags.welcome_visible(),
                    class_names: WELCOME_TRANSITION_CLASS,
                    class: WELCOME_TRANSITION_CLASS,
                    timeout_ms: reveal_ms,
                    SectionHeader {
                        main_text: config.about.header.main_text.clone(),
                        small_text: config.about.header.small_text.clone(),
                        bg_text: config.about.header.bg_text.clone(),
                    }
                    div { class: "content",
                        Description { paragraphs: config.about.description.clone() }
                        Contact { entries: config.about.contacts.clone() }
                        Actions { links: config.about.actions.clone() }
                    }
                }
            }
        }
    }
}

fn observe(mut visibility: Signal<VisibilityFlags>, region: RevealRegion, evt: &VisibleEvent) {
    let is_intersecting = match evt.data().is_intersecting() {
        Ok(is_intersecting) => is_intersecting,
        Err(err) => {
            tracing::warn!(?region, ?err, "visibility observation unavailable");
            return;
        }
    };

    let current = *visibility.peek();
    let next = reduce(current, RevealAction::observed(region, is_intersecting));
    if next != current {
        tracing::debug!(?region, is_intersecting, "reveal region toggled");
        visibility.set(next);
    }
}

/// Headline with a small kicker and an oversized word in the background.
#[component]
pub fn SectionHeader(main_text: String, small_text: String, bg_text: String) -> Element {
    rsx! {
        header { class: "SectionHeader",
            span { class: "SectionHeader__bg", aria_hidden: "true", "{bg_text}" }
            small { class: "SectionHeader__small", "{small_text}" }
            h2 { class: "SectionHeader__main", "{main_text}" }
        }
    }
}

#[component]
pub fn Description(paragraphs: Vec<String>) -> Element {
    rsx! {
        div { class: "Description",
            for paragraph in paragraphs {
                p { "{paragraph}" }
            }
        }
    }
}

#[component]
pub fn Contact(entries: Vec<ContactEntry>) -> Element {
    rsx! {
        dl { class: "Contact",
            for entry in entries {
                dt { "{entry.label}" }
                dd {
                    if let Some(href) = entry.href {
                        a { href, "{entry.value}" }
                    } else {
                        "{entry.value}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn Actions(links: Vec<ActionLink>) -> Element {
    rsx! {
        div { class: "Actions",
            for link in links {
                a {
                    class: if link.primary { "btn btn--primary" } else { "btn" },
                    href: link.href,
                    "{link.label}"
                }
            }
        }
    }
}
