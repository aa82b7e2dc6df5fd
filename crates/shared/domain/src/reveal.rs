use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Regions of the about section that animate in when scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealRegion {
    Image,
    Welcome,
}

bitflags! {
    /// Which reveal regions are currently inside the viewport.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct VisibilityFlags: u8 {
        const IMAGE = 1 << 0;
        const WELCOME = 1 << 1;
    }
}

impl From<RevealRegion> for VisibilityFlags {
    fn from(region: RevealRegion) -> Self {
        match region {
            RevealRegion::Image => Self::IMAGE,
            RevealRegion::Welcome => Self::WELCOME,
        }
    }
}

impl VisibilityFlags {
    #[must_use]
    pub fn is_visible(self, region: RevealRegion) -> bool {
        self.contains(region.into())
    }

    #[must_use]
    pub fn image_visible(self) -> bool {
        self.contains(Self::IMAGE)
    }

    #[must_use]
    pub fn welcome_visible(self) -> bool {
        self.contains(Self::WELCOME)
    }
}
