//! Complex number with Q4.31 components.

use crate::{Fixed, FixedError};
use serde::{Deserialize, Serialize};

/// Point in the complex plane, used both for a pixel's constant `c`
/// and for the evolving iteration value `z`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Complex {
    pub re: Fixed,
    pub im: Fixed,
}

impl Complex {
    /// Zero constant.
    pub const ZERO: Self = Self {
        re: Fixed::ZERO,
        im: Fixed::ZERO,
    };

    pub const fn new(re: Fixed, im: Fixed) -> Self {
        Self { re, im }
    }

    /// Create from f64 pair, rounding each component to Q4.31.
    pub fn from_f64_pair(re: f64, im: f64) -> Result<Self, FixedError> {
        Ok(Self {
            re: Fixed::from_f64(re)?,
            im: Fixed::from_f64(im)?,
        })
    }

    pub fn to_f64_pair(self) -> (f64, f64) {
        (self.re.to_f64(), self.im.to_f64())
    }

    /// Squared magnitude `re² + im²`, flagging overflow of any partial step.
    #[inline]
    pub fn overflowing_norm_sq(self) -> (Fixed, bool) {
        let (re_sq, o1) = self.re.overflowing_mul(self.re);
        let (im_sq, o2) = self.im.overflowing_mul(self.im);
        let (sum, o3) = re_sq.overflowing_add(im_sq);
        (sum, o1 | o2 | o3)
    }
}
