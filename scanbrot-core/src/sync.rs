//! Scan timing and sync tags.

use serde::{Deserialize, Serialize};

/// Sync metadata attached to a pixel when its coordinate is generated and
/// carried lock-step with it to the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyncTag {
    pub blanking: bool,
    pub hsync: bool,
    pub vsync: bool,
}

impl SyncTag {
    /// Blanked pixel with no sync pulse, the reset value of every pipeline slot.
    pub const BLANK: Self = Self {
        blanking: true,
        hsync: false,
        vsync: false,
    };

    pub const ACTIVE: Self = Self {
        blanking: false,
        hsync: false,
        vsync: false,
    };
}

/// Scan position for one pixel-clock tick, as produced by the video
/// format generator. Sync flags are "asserted", independent of line polarity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScanTiming {
    pub blanking: bool,
    pub hsync: bool,
    pub vsync: bool,
    /// Odd field of an interlaced frame.
    pub field: bool,
    pub interlaced: bool,
}

impl ScanTiming {
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.blanking
    }

    /// The subset of the timing that travels with a pixel.
    #[inline]
    pub fn sync_tag(&self) -> SyncTag {
        SyncTag {
            blanking: self.blanking,
            hsync: self.hsync,
            vsync: self.vsync,
        }
    }
}
