//! Video formats and a free-running scan timing generator.
//!
//! The generator stands in for the external video-format collaborator:
//! it walks the raster in (x, y) order and reports, per pixel-clock tick,
//! where the beam is.

use crate::{ConfigError, ScanTiming};
use serde::{Deserialize, Serialize};

/// One axis of a raster: active region followed by front porch, sync pulse
/// and back porch, in pixels (horizontal) or lines (vertical).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTiming {
    pub active: u32,
    pub front_porch: u32,
    pub sync: u32,
    pub back_porch: u32,
}

impl AxisTiming {
    pub const fn total(&self) -> u32 {
        self.active + self.front_porch + self.sync + self.back_porch
    }

    #[inline]
    pub const fn is_active(&self, pos: u32) -> bool {
        pos < self.active
    }

    #[inline]
    pub const fn is_sync(&self, pos: u32) -> bool {
        let start = self.active + self.front_porch;
        pos >= start && pos < start + self.sync
    }

    /// First position inside the sync pulse.
    pub const fn sync_start(&self) -> u32 {
        self.active + self.front_porch
    }
}

/// Visible area in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveArea {
    pub width: u32,
    pub height: u32,
}

impl ActiveArea {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn half_width(&self) -> u32 {
        self.width / 2
    }

    pub const fn half_height(&self) -> u32 {
        self.height / 2
    }
}

/// Complete video format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMode {
    pub horizontal: AxisTiming,
    pub vertical: AxisTiming,
    pub pixel_clock_hz: u64,
    #[serde(default)]
    pub interlaced: bool,
}

/// 640x480 at 60 Hz, 25.175 MHz pixel clock.
pub const VGA_640X480_60: VideoMode = VideoMode {
    horizontal: AxisTiming {
        active: 640,
        front_porch: 16,
        sync: 96,
        back_porch: 48,
    },
    vertical: AxisTiming {
        active: 480,
        front_porch: 10,
        sync: 2,
        back_porch: 33,
    },
    pixel_clock_hz: 25_175_000,
    interlaced: false,
};

impl VideoMode {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horizontal.active == 0 || self.vertical.active == 0 {
            return Err(ConfigError::InvalidVideoMode("active area is empty"));
        }
        if self.horizontal.sync == 0 || self.vertical.sync == 0 {
            return Err(ConfigError::InvalidVideoMode("sync pulse has zero width"));
        }
        if self.pixel_clock_hz == 0 {
            return Err(ConfigError::InvalidVideoMode("pixel clock is zero"));
        }
        Ok(())
    }

    /// Parse and validate a mode from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mode: Self = serde_json::from_str(json)?;
        mode.validate()?;
        Ok(mode)
    }

    pub const fn active_area(&self) -> ActiveArea {
        ActiveArea::new(self.horizontal.active, self.vertical.active)
    }

    pub const fn ticks_per_line(&self) -> u32 {
        self.horizontal.total()
    }

    pub const fn lines_per_frame(&self) -> u32 {
        self.vertical.total()
    }

    pub const fn ticks_per_frame(&self) -> u64 {
        self.ticks_per_line() as u64 * self.lines_per_frame() as u64
    }

    /// Frame (or field, when interlaced) rate in Hz.
    pub fn refresh_hz(&self) -> f64 {
        self.pixel_clock_hz as f64 / self.ticks_per_frame() as f64
    }

    pub fn scan(&self) -> ScanTimingGenerator {
        ScanTimingGenerator::new(*self)
    }
}

/// Endless raster scan of a [`VideoMode`], one [`ScanTiming`] per pixel tick.
///
/// When interlaced, `field` toggles on the first line of vertical sync so
/// the new value is already visible on the vsync edge.
#[derive(Clone, Debug)]
pub struct ScanTimingGenerator {
    mode: VideoMode,
    x: u32,
    y: u32,
    field: bool,
}

impl ScanTimingGenerator {
    pub fn new(mode: VideoMode) -> Self {
        Self {
            mode,
            x: 0,
            y: 0,
            field: false,
        }
    }

    pub fn mode(&self) -> &VideoMode {
        &self.mode
    }

    /// Beam position of the next tick.
    pub fn position(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    fn advance(&mut self) {
        self.x += 1;
        if self.x < self.mode.horizontal.total() {
            return;
        }
        self.x = 0;
        self.y += 1;
        if self.y >= self.mode.vertical.total() {
            self.y = 0;
        }
        if self.mode.interlaced && self.y == self.mode.vertical.sync_start() {
            self.field = !self.field;
        }
    }
}

impl Iterator for ScanTimingGenerator {
    type Item = ScanTiming;

    fn next(&mut self) -> Option<ScanTiming> {
        let h = &self.mode.horizontal;
        let v = &self.mode.vertical;
        let timing = ScanTiming {
            blanking: !(h.is_active(self.x) && v.is_active(self.y)),
            hsync: h.is_sync(self.x),
            vsync: v.is_sync(self.y),
            field: self.field,
            interlaced: self.mode.interlaced,
        };
        self.advance();
        Some(timing)
    }
}
