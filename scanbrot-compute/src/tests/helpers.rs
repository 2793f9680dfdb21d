use crate::{GeneratedPixel, Pipeline, PipelineOutput};
use scanbrot_core::{AxisTiming, Complex, PipelineConfig, SyncTag, VideoMode};

/// Small raster so whole frames stay cheap to simulate.
pub fn small_mode() -> VideoMode {
    VideoMode {
        horizontal: AxisTiming {
            active: 24,
            front_porch: 2,
            sync: 4,
            back_porch: 2,
        },
        vertical: AxisTiming {
            active: 16,
            front_porch: 1,
            sync: 2,
            back_porch: 1,
        },
        pixel_clock_hz: 1_000_000,
        interlaced: false,
    }
}

pub fn c(re: f64, im: f64) -> Complex {
    Complex::from_f64_pair(re, im).unwrap()
}

pub fn active(c: Complex) -> GeneratedPixel {
    GeneratedPixel {
        c,
        tag: SyncTag::ACTIVE,
    }
}

/// Clock `stimulus` through a fresh pipeline plus enough blank ticks to
/// flush it, returning only the outputs that belong to the stimulus.
pub fn run_aligned(config: PipelineConfig, stimulus: &[GeneratedPixel]) -> Vec<PipelineOutput> {
    let mut pipeline = Pipeline::new(config);
    let latency = pipeline.latency() as usize;
    let flush = GeneratedPixel {
        c: Complex::ZERO,
        tag: SyncTag::BLANK,
    };
    stimulus
        .iter()
        .copied()
        .chain(std::iter::repeat(flush).take(latency))
        .map(|p| pipeline.clock_pixel(p.c, p.tag))
        .skip(latency)
        .collect()
}

/// Strictly inside the main cardioid, by a safety margin.
pub fn in_main_cardioid(x: f64, y: f64) -> bool {
    let xq = x - 0.25;
    let q = xq * xq + y * y;
    q * (q + xq) < 0.2 * y * y
}

/// Strictly inside the period-2 bulb, by a safety margin.
pub fn in_period2_bulb(x: f64, y: f64) -> bool {
    (x + 1.0) * (x + 1.0) + y * y < 0.2 * 0.2
}
