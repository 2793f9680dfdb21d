//! End-to-end signal path for one pixel tick:
//! scan timing -> coordinate generator -> iteration pipeline -> color stage.

use crate::color::{ColorMapper, ColorStage};
use crate::generator::CoordinateGenerator;
use crate::pipeline::Pipeline;
use scanbrot_core::{ActiveArea, PipelineConfig, ScanTiming, VideoSignal, Viewport};

#[derive(Clone, Debug)]
pub struct VideoSystem<C> {
    generator: CoordinateGenerator,
    pipeline: Pipeline,
    colors: ColorStage<C>,
}

impl<C: ColorMapper> VideoSystem<C> {
    pub fn new(config: PipelineConfig, area: ActiveArea, viewport: Viewport, mapper: C) -> Self {
        Self {
            generator: CoordinateGenerator::new(area, viewport),
            pipeline: Pipeline::new(config),
            colors: ColorStage::new(mapper),
        }
    }

    /// Pixel ticks between a timing input and its signal output: the
    /// pipeline's N plus the color register.
    pub fn latency(&self) -> u32 {
        self.pipeline.latency() + 1
    }

    pub fn generator(&self) -> &CoordinateGenerator {
        &self.generator
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn tick(&mut self, timing: ScanTiming, viewport: &Viewport) -> VideoSignal {
        let pixel = self.generator.tick(timing, viewport);
        let output = self.pipeline.clock_pixel(pixel.c, pixel.tag);
        self.colors.tick(output)
    }
}
