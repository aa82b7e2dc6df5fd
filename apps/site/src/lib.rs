//! # Folio Site
//!
//! The portfolio page assembled from `folio` components. The browser build mounts [`App`]
//! with the Dioxus web renderer; native builds prerender it to static HTML with
//! [`prerender`].

use dioxus::prelude::*;
use folio::kernel::config::parse_config;
use folio::prelude::*;

/// Site configuration compiled into the binary. The browser build has no filesystem.
pub const EMBEDDED_CONFIG: &str = include_str!("../site.toml");

#[component]
pub fn App() -> Element {
    rsx! {
        PortalProvider {
            main { class: "Page",
                ScrollRevealSection {}
                ContactForm {}
            }
            PortalOutlet {}
        }
    }
}

/// Parses [`EMBEDDED_CONFIG`], falling back to the built-in defaults if it is rejected.
#[must_use]
pub fn embedded_config() -> SiteConfig {
    parse_config(EMBEDDED_CONFIG).unwrap_or_else(|err| {
        tracing::warn!(%err, "embedded site config rejected, using defaults");
        SiteConfig::default()
    })
}

/// Renders [`App`] with `config` into a complete HTML document.
///
/// Effects do not run during prerendering: reveal regions start hidden, every field starts
/// untouched and no dialog is open.
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn prerender(config: SiteConfig) -> String {
    let title = config.about.header.bg_text.clone();
    let mut dom = VirtualDom::new(App).with_root_context(config);
    dom.rebuild_in_place();
    let body = dioxus_ssr::render(&dom);

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{title}</title>\n</head>\n<body>\n<div id=\"main\">{body}</div>\n</body>\n</html>\n"
    )
}
