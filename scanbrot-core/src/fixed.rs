//! Signed Q4.31 fixed point with explicit overflow reporting.
//!
//! 4 integer bits (including sign) and 31 fractional bits, 35 bits in total,
//! held sign-extended in an `i64`. The representable range is
//! `[-8, 8 - 2^-31]`.
//!
//! Overflow is the escape signal of the iteration datapath, so it is never
//! silent: every operation has an `overflowing_*` form returning
//! `(value, overflowed)` with the value clamped to the nearest bound.
//! No `std::ops` arithmetic traits are implemented on purpose.

use crate::error::FixedError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fractional bits.
pub const FRAC_BITS: u32 = 31;
/// Integer bits, sign included.
pub const INT_BITS: u32 = 4;
/// Total datapath width.
pub const TOTAL_BITS: u32 = INT_BITS + FRAC_BITS;

/// Q4.31 fixed-point value.
///
/// Serializes as an `f64`; every Q4.31 value is exactly representable there,
/// so the round trip is bit exact.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct Fixed(i64);

impl Fixed {
    pub const MAX_RAW: i64 = (1 << (TOTAL_BITS - 1)) - 1;
    pub const MIN_RAW: i64 = -(1 << (TOTAL_BITS - 1));

    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1 << FRAC_BITS);
    pub const TWO: Self = Self(2 << FRAC_BITS);
    pub const FOUR: Self = Self(4 << FRAC_BITS);
    pub const MAX: Self = Self(Self::MAX_RAW);
    pub const MIN: Self = Self(Self::MIN_RAW);
    /// Smallest positive value, 2^-31.
    pub const EPSILON: Self = Self(1);

    /// Wrap a raw two's complement value, rejecting anything wider than 35 bits.
    pub const fn from_raw(raw: i64) -> Result<Self, FixedError> {
        if raw > Self::MAX_RAW || raw < Self::MIN_RAW {
            Err(FixedError::RawOutOfRange(raw))
        } else {
            Ok(Self(raw))
        }
    }

    /// Wrap a raw value, clamping it into range.
    pub const fn from_raw_saturating(raw: i64) -> Self {
        if raw > Self::MAX_RAW {
            Self::MAX
        } else if raw < Self::MIN_RAW {
            Self::MIN
        } else {
            Self(raw)
        }
    }

    /// Raw two's complement bits, sign-extended.
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Integer value. Only -8..=7 is representable.
    pub const fn from_int(n: i32) -> Result<Self, FixedError> {
        Self::from_raw((n as i64) << FRAC_BITS)
    }

    /// Round an `f64` to the nearest Q4.31 value.
    pub fn from_f64(val: f64) -> Result<Self, FixedError> {
        if !val.is_finite() {
            return Err(FixedError::NotFinite);
        }
        let scaled = libm::round(libm::ldexp(val, FRAC_BITS as i32));
        if scaled > Self::MAX_RAW as f64 || scaled < Self::MIN_RAW as f64 {
            return Err(FixedError::OutOfRange(val));
        }
        Ok(Self(scaled as i64))
    }

    /// Exact conversion to `f64`.
    #[inline]
    pub fn to_f64(self) -> f64 {
        libm::ldexp(self.0 as f64, -(FRAC_BITS as i32))
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    #[inline]
    fn clamp_wide(wide: i128) -> (Self, bool) {
        if wide > Self::MAX_RAW as i128 {
            (Self::MAX, true)
        } else if wide < Self::MIN_RAW as i128 {
            (Self::MIN, true)
        } else {
            (Self(wide as i64), false)
        }
    }

    #[inline]
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        Self::clamp_wide(self.0 as i128 + rhs.0 as i128)
    }

    #[inline]
    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        Self::clamp_wide(self.0 as i128 - rhs.0 as i128)
    }

    /// Full 70-bit product, keeping bits `[65:31]`.
    ///
    /// The shift is arithmetic, so the discarded fraction rounds toward
    /// negative infinity the way a hardware bit select does.
    #[inline]
    pub fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
        Self::clamp_wide((self.0 as i128 * rhs.0 as i128) >> FRAC_BITS)
    }

    /// `2 * self`, a one-bit left shift.
    #[inline]
    pub fn overflowing_double(self) -> (Self, bool) {
        Self::clamp_wide((self.0 as i128) << 1)
    }

    /// Multiply by a plain integer, e.g. a pixel count.
    #[inline]
    pub fn overflowing_mul_int(self, n: i64) -> (Self, bool) {
        Self::clamp_wide(self.0 as i128 * n as i128)
    }

    /// `self / 2`, rounding toward negative infinity. Cannot overflow.
    #[inline]
    pub const fn halve(self) -> Self {
        Self(self.0 >> 1)
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        checked(self.overflowing_add(rhs))
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        checked(self.overflowing_sub(rhs))
    }

    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        checked(self.overflowing_mul(rhs))
    }

    pub fn saturating_add(self, rhs: Self) -> Self {
        self.overflowing_add(rhs).0
    }

    pub fn saturating_sub(self, rhs: Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    pub fn saturating_mul(self, rhs: Self) -> Self {
        self.overflowing_mul(rhs).0
    }

    pub fn saturating_double(self) -> Self {
        self.overflowing_double().0
    }

    pub fn saturating_mul_int(self, n: i64) -> Self {
        self.overflowing_mul_int(n).0
    }
}

#[inline]
fn checked((value, overflowed): (Fixed, bool)) -> Option<Fixed> {
    if overflowed {
        None
    } else {
        Some(value)
    }
}

impl TryFrom<f64> for Fixed {
    type Error = FixedError;

    fn try_from(val: f64) -> Result<Self, Self::Error> {
        Self::from_f64(val)
    }
}

impl From<Fixed> for f64 {
    fn from(val: Fixed) -> Self {
        val.to_f64()
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}
