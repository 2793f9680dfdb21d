//! One logical Mandelbrot iteration on Q4.31 values.
//!
//! ```text
//! a' = a*a - b*b + ca
//! b' = 2*a*b + cb
//! overflow' = overflow | escaped(a', b')
//! i' = overflow' ? i : i + 1
//! ```
//!
//! `escaped` is raised by an overflow in any arithmetic step of the update,
//! or when `|z'|^2 >= 4` (the bailout test itself may also overflow).
//! Once set, the flag is sticky and `z`, `i` are frozen.

use scanbrot_core::{Complex, EscapeTime, Fixed, PipelineOutput, SyncTag};

/// Evolving state of one in-flight pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IterationState {
    pub z: Complex,
    pub i: u32,
    pub overflow: bool,
}

impl IterationState {
    /// State at pipeline entry: z = 0, i = 1, no overflow.
    pub const ENTRY: Self = Self {
        z: Complex::ZERO,
        i: 1,
        overflow: false,
    };

    /// Advance by one logical iteration.
    ///
    /// The datapath runs unconditionally, frozen pixels just discard its result.
    #[inline]
    pub fn step(&self, c: Complex) -> Self {
        let (z, escaped) = datapath(self.z, c);
        if self.overflow {
            return *self;
        }
        Self {
            z,
            i: if escaped { self.i } else { self.i.saturating_add(1) },
            overflow: escaped,
        }
    }

    /// Escape-time view, with the counter saturated at `depth`.
    pub fn escape_time(&self, depth: u32) -> EscapeTime {
        EscapeTime {
            iterations: self.i.min(depth),
            escaped: self.overflow,
        }
    }
}

/// `z*z + c`, plus whether any step overflowed or the result reached the
/// bailout radius.
#[inline]
pub fn datapath(z: Complex, c: Complex) -> (Complex, bool) {
    let (aa, o_aa) = z.re.overflowing_mul(z.re);
    let (bb, o_bb) = z.im.overflowing_mul(z.im);
    let (ab, o_ab) = z.re.overflowing_mul(z.im);

    let (diff, o_diff) = aa.overflowing_sub(bb);
    let (re, o_re) = diff.overflowing_add(c.re);

    let (two_ab, o_two) = ab.overflowing_double();
    let (im, o_im) = two_ab.overflowing_add(c.im);

    let next = Complex::new(re, im);
    let (norm_sq, o_norm) = next.overflowing_norm_sq();

    let overflowed = o_aa | o_bb | o_ab | o_diff | o_re | o_two | o_im | o_norm;
    (next, overflowed || norm_sq >= Fixed::FOUR)
}

/// Payload owned by one pipeline slot: the pixel's constant, its iteration
/// state and its sync tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelPacket {
    pub c: Complex,
    pub state: IterationState,
    pub tag: SyncTag,
}

impl PixelPacket {
    /// Slot contents before the pipeline has filled: blanked, no sync.
    pub const RESET: Self = Self {
        c: Complex::ZERO,
        state: IterationState::ENTRY,
        tag: SyncTag::BLANK,
    };

    /// Fresh packet entering unit 0.
    pub fn enter(c: Complex, tag: SyncTag) -> Self {
        Self {
            c,
            state: IterationState::ENTRY,
            tag,
        }
    }

    #[inline]
    pub fn iterate(&mut self) {
        self.state = self.state.step(self.c);
    }

    pub fn output(&self, depth: u32) -> PipelineOutput {
        let escape = self.state.escape_time(depth);
        PipelineOutput {
            iterations: escape.iterations,
            escaped: escape.escaped,
            tag: self.tag,
        }
    }
}
