//! Viewport enter/leave events of the about section regions.

use folio_domain::reveal::{RevealRegion, VisibilityFlags};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    Enter(RevealRegion),
    Leave(RevealRegion),
}

impl RevealAction {
    /// Builds the action from an intersection observation.
    #[must_use]
    pub const fn observed(region: RevealRegion, is_intersecting: bool) -> Self {
        if is_intersecting { Self::Enter(region) } else { Self::Leave(region) }
    }

    #[must_use]
    pub const fn region(self) -> RevealRegion {
        match self {
            Self::Enter(region) | Self::Leave(region) => region,
        }
    }
}

/// Applies one event. Only the flag of the event's region changes.
#[must_use]
pub fn reduce(flags: VisibilityFlags, action: RevealAction) -> VisibilityFlags {
    let mut next = flags;
    match action {
        RevealAction::Enter(region) => next.insert(region.into()),
        RevealAction::Leave(region) => next.remove(region.into()),
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_and_leave_toggle_only_their_region() {
        let flags = reduce(VisibilityFlags::empty(), RevealAction::Enter(RevealRegion::Image));
        assert!(flags.image_visible());
        assert!(!flags.welcome_visible());

        let flags = reduce(flags, RevealAction::Enter(RevealRegion::Welcome));
        let flags = reduce(flags, RevealAction::Leave(RevealRegion::Image));
        assert!(!flags.image_visible());
        assert!(flags.welcome_visible());
    }

    #[test]
    fn test_leaving_hidden_region_is_a_no_op() {
        let flags = reduce(VisibilityFlags::WELCOME, RevealAction::Leave(RevealRegion::Image));
        assert_eq!(flags, VisibilityFlags::WELCOME);
    }

    #[test]
    fn test_observed_maps_intersection_to_action() {
        assert_eq!(RevealAction::observed(RevealRegion::Image, true), RevealAction::Enter(RevealRegion::Image));
        assert_eq!(
            RevealAction::observed(RevealRegion::Welcome, false),
            RevealAction::Leave(RevealRegion::Welcome)
        );
        assert_eq!(RevealAction::Leave(RevealRegion::Welcome).region(), RevealRegion::Welcome);
    }
}
