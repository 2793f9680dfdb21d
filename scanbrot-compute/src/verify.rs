//! Pre-deployment verification: run the clocked pipeline against the golden
//! model and check every count, escape flag and sync tag.
//!
//! Configuration mistakes (multiplex above phase capacity, for example)
//! produce no runtime fault, only wrong pixels. This is where they show up.

use crate::generator::GeneratedPixel;
use crate::pipeline::Pipeline;
use crate::reference;
use scanbrot_core::{ActiveArea, Complex, EscapeTime, PipelineConfig, SyncTag, Viewport};

/// First disagreement found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mismatch {
    /// Index of the pixel in the stimulus.
    pub pixel: usize,
    pub c: Complex,
    pub expected: EscapeTime,
    pub actual: EscapeTime,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerificationReport {
    pub checked: usize,
    pub count_mismatches: usize,
    pub tag_mismatches: usize,
    pub first_mismatch: Option<Mismatch>,
}

impl VerificationReport {
    pub fn passed(&self) -> bool {
        self.count_mismatches == 0 && self.tag_mismatches == 0
    }
}

/// Clock `stimulus` through a fresh pipeline, flush it, and compare each
/// output with the reference at the configured depth.
pub fn verify_pipeline(config: PipelineConfig, stimulus: &[GeneratedPixel]) -> VerificationReport {
    let mut pipeline = Pipeline::new(config);
    let latency = pipeline.latency() as usize;
    let depth = config.depth();
    let flush = GeneratedPixel {
        c: Complex::ZERO,
        tag: SyncTag::BLANK,
    };

    let mut report = VerificationReport::default();
    let feed = stimulus
        .iter()
        .copied()
        .chain(std::iter::repeat(flush).take(latency));

    for (tick, pixel) in feed.enumerate() {
        let output = pipeline.clock_pixel(pixel.c, pixel.tag);
        let Some(index) = tick.checked_sub(latency) else {
            continue;
        };
        let sent = stimulus[index];
        report.checked += 1;

        if output.tag != sent.tag {
            report.tag_mismatches += 1;
        }

        let expected = reference::escape_time(sent.c, depth);
        let actual = output.escape_time();
        if actual != expected {
            report.count_mismatches += 1;
            if report.first_mismatch.is_none() {
                log::warn!(
                    "pixel {index} at ({}, {}): expected {:?}, pipeline gave {:?}",
                    sent.c.re,
                    sent.c.im,
                    expected,
                    actual
                );
                report.first_mismatch = Some(Mismatch {
                    pixel: index,
                    c: sent.c,
                    expected,
                    actual,
                });
            }
        }
    }

    if report.passed() {
        log::info!("verification passed: {} pixels", report.checked);
    } else {
        log::warn!(
            "verification failed: {} count and {} tag mismatches in {} pixels",
            report.count_mismatches,
            report.tag_mismatches,
            report.checked
        );
    }
    report
}

/// Raster of active pixels covering `area` under `viewport`, without
/// blanking intervals. The last pixel of each row carries an hsync tag and
/// the last row a vsync tag, so tag routing is exercised too.
pub fn raster_stimulus(viewport: &Viewport, area: ActiveArea) -> Vec<GeneratedPixel> {
    let re0 = viewport.line_start(area.half_width());
    let im0 = viewport.frame_start(area.half_height());
    (0..area.height)
        .flat_map(|y| {
            (0..area.width).map(move |x| GeneratedPixel {
                c: Complex::new(
                    re0.saturating_add(viewport.step.saturating_mul_int(x as i64)),
                    im0.saturating_add(viewport.step.saturating_mul_int(y as i64)),
                ),
                tag: SyncTag {
                    blanking: false,
                    hsync: x + 1 == area.width,
                    vsync: y + 1 == area.height,
                },
            })
        })
        .collect()
}
