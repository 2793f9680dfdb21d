pub mod clock;
pub mod color;
pub mod generator;
pub mod iteration;
pub mod pipeline;
pub mod reference;
pub mod system;
pub mod unit;
pub mod verify;

#[cfg(test)]
mod tests;

pub use clock::Clock;
pub use color::{ColorMapper, ColorStage, ColorStop, PaletteMapper};
pub use generator::{CoordinateGenerator, GeneratedPixel};
pub use iteration::{IterationState, PixelPacket};
pub use pipeline::{Pipeline, SlotView};
pub use system::VideoSystem;
pub use unit::IterationUnit;
pub use verify::{raster_stimulus, verify_pipeline, Mismatch, VerificationReport};

// Re-export core types for convenience
pub use scanbrot_core::*;
