//! Coordinate generator: scan position + viewport -> per-pixel constant.
//!
//! Two running accumulators replace any per-pixel multiply. The real one
//! restarts at `center_x - half_width * step` on every line start (hsync
//! rising edge) and advances by `step` after each active pixel. The
//! imaginary one restarts at `center_y - half_height * step` on every frame
//! start (vsync rising edge) and advances once per line that carried active
//! pixels. The viewport is latched at frame start only. An interlaced frame
//! is two fields of `height` lines each, so its half height is `height`.
//!
//! The vertical step is the horizontal step, so plane units per pixel are
//! equal on both axes whatever the display's pixel aspect ratio.

use scanbrot_core::{ActiveArea, Complex, Fixed, ScanTiming, SyncTag, Viewport};

/// Generator output for one pixel tick. `c` is don't-care while blanked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratedPixel {
    pub c: Complex,
    pub tag: SyncTag,
}

#[derive(Clone, Debug)]
pub struct CoordinateGenerator {
    area: ActiveArea,
    viewport: Viewport,
    re: Fixed,
    im: Fixed,
    line_step: Fixed,
    line_had_active: bool,
    previous: ScanTiming,
}

impl CoordinateGenerator {
    pub fn new(area: ActiveArea, viewport: Viewport) -> Self {
        Self {
            area,
            re: viewport.line_start(area.half_width()),
            im: viewport.frame_start(area.half_height()),
            line_step: viewport.step,
            line_had_active: false,
            previous: ScanTiming::default(),
            viewport,
        }
    }

    /// Viewport latched at the most recent frame start.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn area(&self) -> ActiveArea {
        self.area
    }

    /// Advance one pixel tick. `viewport` is only sampled on a frame start.
    pub fn tick(&mut self, timing: ScanTiming, viewport: &Viewport) -> GeneratedPixel {
        if timing.vsync && !self.previous.vsync {
            self.start_frame(timing, viewport);
        }
        if timing.hsync && !self.previous.hsync {
            self.start_line();
        }

        let pixel = GeneratedPixel {
            c: Complex::new(self.re, self.im),
            tag: timing.sync_tag(),
        };

        if timing.is_active() {
            self.re = self.re.saturating_add(self.viewport.step);
            self.line_had_active = true;
        }
        self.previous = timing;
        pixel
    }

    fn start_frame(&mut self, timing: ScanTiming, viewport: &Viewport) {
        self.viewport = *viewport;
        let step = viewport.step;

        // Interlaced fields interleave into a frame of twice the field's
        // lines: odd field one row down, rows two apart
        if timing.interlaced {
            let top = viewport.frame_start(self.area.height);
            self.line_step = step.saturating_double();
            self.im = if timing.field {
                top.saturating_add(step)
            } else {
                top
            };
        } else {
            self.line_step = step;
            self.im = viewport.frame_start(self.area.half_height());
        }
        self.re = viewport.line_start(self.area.half_width());
        self.line_had_active = false;

        log::debug!(
            "frame start: field={} center=({}, {}) step={}",
            timing.field,
            viewport.center.re,
            viewport.center.im,
            step
        );
    }

    fn start_line(&mut self) {
        if self.line_had_active {
            self.im = self.im.saturating_add(self.line_step);
        }
        self.re = self.viewport.line_start(self.area.half_width());
        self.line_had_active = false;
    }
}
