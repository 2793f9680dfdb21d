pub mod complex;
pub mod compute_data;
pub mod config;
pub mod error;
pub mod fixed;
pub mod sync;
pub mod video_mode;
pub mod viewport;

pub use complex::Complex;
pub use compute_data::{EscapeTime, PipelineOutput, Rgb, VideoSignal, BLANK_LEVEL};
pub use config::{
    ClockPlan, PipelineConfig, ResourceEstimate, MAX_DEPTH, MAX_PHASE_CAPACITY,
    MULTIPLIES_PER_UNIT,
};
pub use error::{ConfigError, FixedError};
pub use fixed::Fixed;
pub use sync::{ScanTiming, SyncTag};
pub use video_mode::{ActiveArea, AxisTiming, ScanTimingGenerator, VideoMode, VGA_640X480_60};
pub use viewport::{Button, Viewport, ViewportControl};
