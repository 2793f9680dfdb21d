//! Color mapper stand-in: palette lookup plus a one-tick output register.

use scanbrot_core::{PipelineOutput, Rgb, VideoSignal, BLANK_LEVEL};
use serde::{Deserialize, Serialize};

/// Deterministic, side-effect-free map from an escape result to a color.
pub trait ColorMapper {
    fn color(&self, iterations: u32, escaped: bool) -> Rgb;
}

/// A color stop in the gradient.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: Rgb,
}

/// Lookup-table palette. Escaped pixels index the table by iteration count,
/// wrapping around; pixels that never escaped get `interior`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteMapper {
    lut: Vec<Rgb>,
    interior: Rgb,
}

impl PaletteMapper {
    /// Sample `stops` linearly into a `size`-entry table.
    pub fn from_stops(stops: &[ColorStop], size: usize, interior: Rgb) -> Self {
        let mut stops = stops.to_vec();
        stops.sort_by(|a, b| {
            a.position
                .partial_cmp(&b.position)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let size = size.max(1);
        let lut = (0..size)
            .map(|i| {
                let t = if size == 1 {
                    0.0
                } else {
                    i as f64 / (size - 1) as f64
                };
                sample(&stops, t)
            })
            .collect();
        Self { lut, interior }
    }

    /// Blue-gold palette spread over `depth` entries, black interior.
    pub fn classic(depth: u32) -> Self {
        Self::from_stops(
            &[
                ColorStop {
                    position: 0.0,
                    color: [0, 7, 100],
                },
                ColorStop {
                    position: 0.33,
                    color: [32, 107, 203],
                },
                ColorStop {
                    position: 0.66,
                    color: [255, 170, 0],
                },
                ColorStop {
                    position: 1.0,
                    color: [237, 255, 255],
                },
            ],
            depth as usize,
            [0, 0, 0],
        )
    }

    pub fn lut(&self) -> &[Rgb] {
        &self.lut
    }
}

impl ColorMapper for PaletteMapper {
    fn color(&self, iterations: u32, escaped: bool) -> Rgb {
        if !escaped {
            return self.interior;
        }
        self.lut[iterations as usize % self.lut.len()]
    }
}

fn sample(stops: &[ColorStop], t: f64) -> Rgb {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return BLANK_LEVEL,
    };
    if t <= first.position {
        return first.color;
    }
    if t >= last.position {
        return last.color;
    }

    let seg = stops
        .windows(2)
        .find(|w| t <= w[1].position)
        .unwrap_or(&stops[stops.len() - 2..]);
    let (s0, s1) = (&seg[0], &seg[1]);
    let span = s1.position - s0.position;
    let local = if span.abs() < 1e-10 {
        0.0
    } else {
        ((t - s0.position) / span).clamp(0.0, 1.0)
    };

    let mut rgb = [0u8; 3];
    for (k, channel) in rgb.iter_mut().enumerate() {
        let a = s0.color[k] as f64;
        let b = s1.color[k] as f64;
        *channel = (a + local * (b - a)).round().clamp(0.0, 255.0) as u8;
    }
    rgb
}

/// Final output stage: one pixel-clock register that colors the pixel and
/// re-times the sync lines. Blanked pixels are forced to the blanking level.
#[derive(Clone, Debug)]
pub struct ColorStage<C> {
    mapper: C,
    register: VideoSignal,
}

impl<C: ColorMapper> ColorStage<C> {
    pub fn new(mapper: C) -> Self {
        Self {
            mapper,
            register: VideoSignal::default(),
        }
    }

    pub fn mapper(&self) -> &C {
        &self.mapper
    }

    /// Clock in one pipeline output, clock out the previous tick's signal.
    pub fn tick(&mut self, output: PipelineOutput) -> VideoSignal {
        let rgb = if output.tag.blanking {
            BLANK_LEVEL
        } else {
            self.mapper.color(output.iterations, output.escaped)
        };
        let next = VideoSignal {
            rgb,
            hsync: output.tag.hsync,
            vsync: output.tag.vsync,
        };
        std::mem::replace(&mut self.register, next)
    }
}
