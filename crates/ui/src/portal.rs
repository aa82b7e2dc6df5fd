//! Renders content at a fixed attachment point instead of where its owner sits in the tree.
//!
//! Place one [`PortalProvider`] near the root and one [`PortalOutlet`] as the last child of
//! the page. Components holding a [`PortalSlot`] hand their content to the outlet, which
//! renders every occupied slot in reservation order inside the element with the configured
//! target id. The content therefore escapes ancestor overflow clipping, transforms and
//! stacking contexts.

use crate::use_site_config;
use dioxus::prelude::*;
use folio_kernel::portal::{OverlayStack, SlotId};

/// Shared registry handle, provided through context.
#[derive(Clone, Copy, PartialEq)]
pub struct Portal {
    slots: Signal<OverlayStack<Element>>,
}

impl std::fmt::Debug for Portal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Portal").finish_non_exhaustive()
    }
}

impl Portal {
    fn reserve(mut self) -> SlotId {
        self.slots.write().reserve()
    }

    fn place(mut self, id: SlotId, content: Element) {
        if self.slots.write().place(id, content).is_err() {
            tracing::warn!(slot = id.get(), "content placed into a released portal slot");
        }
    }

    fn clear(mut self, id: SlotId) {
        if self.slots.peek().get(id).is_some() {
            self.slots.write().clear(id);
        }
    }

    fn release(mut self, id: SlotId) {
        // The provider may already be gone when the whole tree unmounts.
        if let Ok(mut slots) = self.slots.try_write() {
            slots.release(id);
        }
    }
}

/// A component's reserved place in the outlet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortalSlot {
    portal: Portal,
    id: SlotId,
}

impl PortalSlot {
    /// Shows `content` in the outlet, replacing what this slot showed before.
    pub fn show(self, content: Element) {
        self.portal.place(self.id, content);
    }

    /// Removes this slot's content from the outlet.
    pub fn hide(self) {
        self.portal.clear(self.id);
    }
}

/// Reserves a slot for the calling component and releases it on unmount.
///
/// Returns `None` outside a [`PortalProvider`]; callers then render in place.
pub fn use_portal_slot() -> Option<PortalSlot> {
    let portal = try_use_context::<Portal>();
    let slot = use_hook(move || portal.map(|portal| PortalSlot { portal, id: portal.reserve() }));

    use_drop(move || {
        if let Some(slot) = slot {
            slot.portal.release(slot.id);
        }
    });

    slot
}

/// Provides the portal registry to its subtree.
#[component]
pub fn PortalProvider(children: Element) -> Element {
    use_context_provider(|| Portal { slots: Signal::new(OverlayStack::new()) });

    rsx! {
        {children}
    }
}

/// The attachment point: renders every occupied slot.
#[component]
pub fn PortalOutlet() -> Element {
    let target_id = use_site_config().portal.target_id.clone();
    let portal = try_use_context::<Portal>();

    let entries: Vec<(u64, Element)> = portal
        .map(|portal| {
            portal.slots.read().iter().map(|(id, content)| (id.get(), content.clone())).collect()
        })
        .unwrap_or_default();

    rsx! {
        div { id: target_id,
            for (key, content) in entries {
                Fragment { key: "{key}", {content} }
            }
        }
    }
}
