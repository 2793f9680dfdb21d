use crate::{Complex, Fixed, FixedError};
use serde::{Deserialize, Serialize};

/// Viewport in the complex plane, in Q4.31
///
/// - `center`: plane coordinate shown at the middle of the active area
/// - `step`: plane distance between horizontally (and vertically)
///   adjacent pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: Complex,
    pub step: Fixed,
}

/// Center of the default view, (-0.5, 0).
const DEFAULT_CENTER_RE: Fixed = Fixed::from_raw_saturating(-(1 << 30));
/// 4.0 plane units across 640 pixels, rounded to nearest.
const DEFAULT_STEP: Fixed =
    Fixed::from_raw_saturating(((4i64 << crate::fixed::FRAC_BITS) + 320) / 640);

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: Complex::new(DEFAULT_CENTER_RE, Fixed::ZERO),
            step: DEFAULT_STEP,
        }
    }
}

impl Viewport {
    pub const fn new(center: Complex, step: Fixed) -> Self {
        Self { center, step }
    }

    /// Create from f64 values, rounding to Q4.31.
    pub fn from_f64(center_x: f64, center_y: f64, step: f64) -> Result<Self, FixedError> {
        Ok(Self {
            center: Complex::from_f64_pair(center_x, center_y)?,
            step: Fixed::from_f64(step)?,
        })
    }

    /// Viewport whose `pixels`-wide line spans `width` plane units.
    pub fn fit_width(
        center_x: f64,
        center_y: f64,
        width: f64,
        pixels: u32,
    ) -> Result<Self, FixedError> {
        Self::from_f64(center_x, center_y, width / pixels.max(1) as f64)
    }

    /// Real coordinate of the first pixel of a line: `center_x - half_width * step`.
    pub fn line_start(&self, half_width: u32) -> Fixed {
        self.center
            .re
            .saturating_sub(self.step.saturating_mul_int(half_width as i64))
    }

    /// Imaginary coordinate of the first line of a frame: `center_y - half_height * step`.
    pub fn frame_start(&self, half_height: u32) -> Fixed {
        self.center
            .im
            .saturating_sub(self.step.saturating_mul_int(half_height as i64))
    }
}

/// Buttons of the input controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    ZoomIn,
    ZoomOut,
}

/// Input controller: maps button presses onto a pending viewport that only
/// becomes visible to the coordinate generator at the next vertical sync.
#[derive(Clone, Debug)]
pub struct ViewportControl {
    active: Viewport,
    pending: Viewport,
    pan_pixels: u32,
}

impl ViewportControl {
    /// `pan_pixels` is how far one pan press moves the view, in pixels.
    pub fn new(initial: Viewport, pan_pixels: u32) -> Self {
        Self {
            active: initial,
            pending: initial,
            pan_pixels,
        }
    }

    /// Viewport currently driving the scanout.
    pub fn active(&self) -> &Viewport {
        &self.active
    }

    /// Viewport that will take effect at the next vertical sync.
    pub fn pending(&self) -> &Viewport {
        &self.pending
    }

    pub fn press(&mut self, button: Button) {
        let vp = &mut self.pending;
        let pan = vp.step.saturating_mul_int(self.pan_pixels as i64);
        match button {
            // Imaginary axis grows down the screen
            Button::Up => vp.center.im = vp.center.im.saturating_sub(pan),
            Button::Down => vp.center.im = vp.center.im.saturating_add(pan),
            Button::Left => vp.center.re = vp.center.re.saturating_sub(pan),
            Button::Right => vp.center.re = vp.center.re.saturating_add(pan),
            Button::ZoomIn => vp.step = vp.step.halve().max(Fixed::EPSILON),
            Button::ZoomOut => vp.step = vp.step.saturating_double(),
        }
    }

    /// Commit pending input. Returns true if the view changed.
    pub fn on_vsync(&mut self) -> bool {
        if self.pending == self.active {
            return false;
        }
        log::debug!(
            "viewport commit: center=({}, {}) step={}",
            self.pending.center.re,
            self.pending.center.im,
            self.pending.step
        );
        self.active = self.pending;
        true
    }
}
