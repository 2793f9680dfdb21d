//! Pipeline assembly: N iteration units in series.
//!
//! Unit 0 is fed from the coordinate generator with a fresh entry state;
//! unit k's finished batch feeds unit k + 1 at every pixel edge; the tail
//! unit's finished batch is the answer for that pixel. A pixel accepted on
//! pixel tick t leaves on tick t + N, having received N x M iterations.

use crate::clock::Clock;
use crate::iteration::PixelPacket;
use crate::unit::IterationUnit;
use scanbrot_core::{Complex, PipelineConfig, PipelineOutput, SyncTag};

/// One logical slot `(unit, phase)` of the N x M slot grid.
///
/// A unit's resident packet occupies exactly one of its M slots: the phase
/// it will be iterated in next, or the last phase once its batch is done.
#[derive(Clone, Copy, Debug)]
pub struct SlotView<'a> {
    /// Physical unit index.
    pub unit: usize,
    /// Sub-phase index within the unit.
    pub phase: u32,
    /// Resident packet, if this is the slot it currently occupies.
    pub packet: Option<&'a PixelPacket>,
}

impl SlotView<'_> {
    /// Position in the logical chain, `unit * M + phase`.
    pub fn index(&self, multiplex: u32) -> usize {
        self.unit * multiplex as usize + self.phase as usize
    }

    pub fn is_occupied(&self) -> bool {
        self.packet.is_some()
    }
}

#[derive(Clone, Debug)]
pub struct Pipeline {
    config: PipelineConfig,
    units: Vec<IterationUnit>,
    clock: Clock,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        let resources = config.resources();
        log::info!(
            "pipeline: {} units x {} phases = depth {}, latency {} px, {} dedicated / {} logic multipliers",
            config.stages(),
            config.multiplex(),
            config.depth(),
            config.latency(),
            resources.dedicated_multipliers,
            resources.logic_multipliers
        );
        if config.multiplex() > config.phase_capacity() {
            log::warn!(
                "multiplex {} exceeds phase capacity {}, iteration counts will be short",
                config.multiplex(),
                config.phase_capacity()
            );
        }

        Self {
            units: (0..config.stages())
                .map(|_| IterationUnit::new(config.phase_capacity()))
                .collect(),
            clock: Clock::new(config.multiplex()),
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn depth(&self) -> u32 {
        self.config.depth()
    }

    /// Pixel ticks from input to output.
    pub fn latency(&self) -> u32 {
        self.config.latency()
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Pixel edge: every unit passes its finished batch one unit downstream,
    /// unit 0 takes the new pixel, and the tail's batch is emitted.
    pub fn pixel_edge(&mut self, c: Complex, tag: SyncTag) -> PipelineOutput {
        self.clock.tick_pixel();
        let mut carry = PixelPacket::enter(c, tag);
        for unit in &mut self.units {
            carry = unit.load(carry);
        }
        carry.output(self.config.depth())
    }

    /// Compute edge: every unit runs one logical iteration in lock-step.
    pub fn compute_edge(&mut self) {
        let phase = self.clock.tick_compute();
        for unit in &mut self.units {
            unit.compute(phase);
        }
    }

    /// One full pixel period: the pixel edge followed by M compute edges.
    pub fn clock_pixel(&mut self, c: Complex, tag: SyncTag) -> PipelineOutput {
        let output = self.pixel_edge(c, tag);
        while !self.clock.period_complete() {
            self.compute_edge();
        }
        output
    }

    /// All N x M logical slots, head first, phase-major within each unit.
    pub fn slots(&self) -> impl Iterator<Item = SlotView<'_>> {
        let multiplex = self.config.multiplex();
        self.units.iter().enumerate().flat_map(move |(unit, u)| {
            let occupied = u.completed_phases().min(multiplex.saturating_sub(1));
            (0..multiplex).map(move |phase| SlotView {
                unit,
                phase,
                packet: (phase == occupied).then(|| u.resident()),
            })
        })
    }
}
