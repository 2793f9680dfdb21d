// scanbrot-core/src/compute_data.rs

use crate::SyncTag;
use serde::{Deserialize, Serialize};

/// Escape-time result for one pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscapeTime {
    /// Iteration at which the pixel escaped, or the pipeline depth if it never did
    pub iterations: u32,
    /// Whether the overflow flag was raised within the available depth
    pub escaped: bool,
}

/// What leaves the tail of the iteration pipeline on one pixel tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub iterations: u32,
    pub escaped: bool,
    /// Tag attached to this pixel at generation time, N ticks earlier
    pub tag: SyncTag,
}

impl PipelineOutput {
    pub fn escape_time(&self) -> EscapeTime {
        EscapeTime {
            iterations: self.iterations,
            escaped: self.escaped,
        }
    }
}

pub type Rgb = [u8; 3];

/// Display's blanking level.
pub const BLANK_LEVEL: Rgb = [0, 0, 0];

/// Electrical output for one pixel tick: color plus re-timed sync lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoSignal {
    pub rgb: Rgb,
    pub hsync: bool,
    pub vsync: bool,
}
