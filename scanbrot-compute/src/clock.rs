//! Discrete-time counter for the two phase-aligned clock domains.
//!
//! Each pixel period starts with a pixel edge, which coincides with the
//! compute edge of phase 0, and contains exactly `multiplex` compute edges.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clock {
    multiplex: u32,
    pixel_ticks: u64,
    compute_ticks: u64,
    next_phase: u32,
}

impl Clock {
    pub fn new(multiplex: u32) -> Self {
        Self {
            multiplex: multiplex.max(1),
            pixel_ticks: 0,
            compute_ticks: 0,
            next_phase: 0,
        }
    }

    pub fn multiplex(&self) -> u32 {
        self.multiplex
    }

    /// Pixel edges seen so far.
    pub fn pixel_ticks(&self) -> u64 {
        self.pixel_ticks
    }

    /// Compute edges seen so far.
    pub fn compute_ticks(&self) -> u64 {
        self.compute_ticks
    }

    /// Phase the next compute edge will carry.
    pub fn next_phase(&self) -> u32 {
        self.next_phase
    }

    /// Register a pixel edge and restart the phase count.
    pub fn tick_pixel(&mut self) {
        debug_assert!(
            self.pixel_ticks == 0 || self.next_phase == self.multiplex,
            "pixel edge after {} of {} compute edges",
            self.next_phase,
            self.multiplex
        );
        self.pixel_ticks += 1;
        self.next_phase = 0;
    }

    /// Register a compute edge and return its phase.
    pub fn tick_compute(&mut self) -> u32 {
        debug_assert!(
            self.next_phase < self.multiplex,
            "more than {} compute edges in one pixel period",
            self.multiplex
        );
        let phase = self.next_phase;
        self.next_phase += 1;
        self.compute_ticks += 1;
        phase
    }

    /// True once every compute edge of the current pixel period has fired.
    pub fn period_complete(&self) -> bool {
        self.next_phase >= self.multiplex
    }
}
