//! Physical iteration unit, time-shared across `multiplex` compute phases.
//!
//! The unit owns one resident packet per pixel period. At the pixel edge it
//! hands its completed batch downstream and takes the upstream packet; on
//! every scheduled compute phase it runs one logical iteration on it.
//! Phases at or beyond the scheduler's capacity are never scheduled, so a
//! unit configured with more phases than it has slots releases each pixel
//! short of iterations.

use crate::iteration::PixelPacket;

#[derive(Clone, Debug)]
pub struct IterationUnit {
    resident: PixelPacket,
    phase_capacity: u32,
    completed_phases: u32,
}

impl IterationUnit {
    pub fn new(phase_capacity: u32) -> Self {
        Self {
            resident: PixelPacket::RESET,
            phase_capacity,
            completed_phases: 0,
        }
    }

    /// Pixel edge: swap in the upstream packet, returning the finished one.
    #[inline]
    pub fn load(&mut self, incoming: PixelPacket) -> PixelPacket {
        self.completed_phases = 0;
        std::mem::replace(&mut self.resident, incoming)
    }

    /// Compute edge. Only the resident packet is touched, and only if the
    /// scheduler has a slot for `phase`.
    #[inline]
    pub fn compute(&mut self, phase: u32) {
        if phase < self.phase_capacity {
            self.resident.iterate();
            self.completed_phases += 1;
        }
    }

    pub fn resident(&self) -> &PixelPacket {
        &self.resident
    }

    /// Iterations applied to the resident packet in this pixel period.
    pub fn completed_phases(&self) -> u32 {
        self.completed_phases
    }

    pub fn phase_capacity(&self) -> u32 {
        self.phase_capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanbrot_core::{Complex, SyncTag};

    fn packet() -> PixelPacket {
        PixelPacket::enter(
            Complex::from_f64_pair(-0.5, 0.0).unwrap(),
            SyncTag::ACTIVE,
        )
    }

    #[test]
    fn load_returns_previous_resident() {
        let mut unit = IterationUnit::new(4);
        let first = unit.load(packet());
        assert_eq!(first, PixelPacket::RESET);
        assert_eq!(unit.resident().tag, SyncTag::ACTIVE);
    }

    #[test]
    fn each_phase_applies_one_iteration() {
        let mut unit = IterationUnit::new(4);
        unit.load(packet());
        for phase in 0..4 {
            unit.compute(phase);
        }
        assert_eq!(unit.completed_phases(), 4);
        assert_eq!(unit.resident().state.i, 5);
    }

    #[test]
    fn phases_past_capacity_are_not_scheduled() {
        let mut unit = IterationUnit::new(3);
        unit.load(packet());
        for phase in 0..4 {
            unit.compute(phase);
        }
        assert_eq!(unit.completed_phases(), 3);
        let finished = unit.load(packet());
        assert_eq!(finished.state.i, 4, "batch left one iteration short");
    }
}
