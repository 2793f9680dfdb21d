//! Design-time pipeline parameters.
//!
//! These are fixed when the pipeline is built. Everything that can go wrong
//! with them is caught here or by simulation, never while streaming.

use crate::fixed::TOTAL_BITS;
use crate::ConfigError;
use serde::{Deserialize, Serialize};

/// Largest phase capacity a unit's scheduler can be built with.
pub const MAX_PHASE_CAPACITY: u32 = 16;

/// Multiplications in one iteration unit: `a*a`, `b*b`, `a*b` for the
/// update and `a'*a'`, `b'*b'` for the bailout test.
pub const MULTIPLIES_PER_UNIT: u32 = 5;

/// Upper bound on N x M so the iteration counter stays small.
pub const MAX_DEPTH: u32 = 1 << 16;

/// Shape of the iteration pipeline.
///
/// `stages` physical units (N), each time-shared `multiplex` ways (M) over
/// a scheduler with `phase_capacity` phase slots (C). Logical depth is N x M.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPipelineConfig")]
pub struct PipelineConfig {
    stages: u32,
    multiplex: u32,
    phase_capacity: u32,
    dedicated_multipliers: u32,
}

/// Unvalidated wire form. Deserializing a `PipelineConfig` always goes
/// through `validate`.
#[derive(Deserialize)]
#[serde(default)]
struct RawPipelineConfig {
    stages: u32,
    multiplex: u32,
    phase_capacity: u32,
    dedicated_multipliers: u32,
}

impl Default for RawPipelineConfig {
    fn default() -> Self {
        let d = PipelineConfig::default();
        Self {
            stages: d.stages,
            multiplex: d.multiplex,
            phase_capacity: d.phase_capacity,
            dedicated_multipliers: d.dedicated_multipliers,
        }
    }
}

impl TryFrom<RawPipelineConfig> for PipelineConfig {
    type Error = ConfigError;

    fn try_from(raw: RawPipelineConfig) -> Result<Self, Self::Error> {
        let config = Self {
            stages: raw.stages,
            multiplex: raw.multiplex,
            phase_capacity: raw.phase_capacity,
            dedicated_multipliers: raw.dedicated_multipliers,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            stages: 16,
            multiplex: 4,
            phase_capacity: 4,
            dedicated_multipliers: MULTIPLIES_PER_UNIT,
        }
    }
}

impl PipelineConfig {
    /// Validated configuration with every multiplication on dedicated hardware.
    pub fn new(stages: u32, multiplex: u32, phase_capacity: u32) -> Result<Self, ConfigError> {
        let config = Self::new_unchecked(stages, multiplex, phase_capacity);
        config.validate()?;
        Ok(config)
    }

    /// Skip validation. Only useful for simulating a broken design so that
    /// verification can be shown to catch it.
    pub fn new_unchecked(stages: u32, multiplex: u32, phase_capacity: u32) -> Self {
        Self {
            stages,
            multiplex,
            phase_capacity,
            dedicated_multipliers: MULTIPLIES_PER_UNIT,
        }
    }

    /// Move some multiplications from dedicated multiply blocks to general
    /// logic. Area tradeoff only, the output is unaffected.
    pub fn with_dedicated_multipliers(mut self, dedicated: u32) -> Result<Self, ConfigError> {
        self.dedicated_multipliers = dedicated;
        self.validate()?;
        Ok(self)
    }

    /// Parse and validate from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawPipelineConfig = serde_json::from_str(json)?;
        raw.try_into()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stages == 0 {
            return Err(ConfigError::ZeroStages);
        }
        if self.multiplex == 0 {
            return Err(ConfigError::ZeroMultiplex);
        }
        if self.phase_capacity > MAX_PHASE_CAPACITY {
            return Err(ConfigError::CapacityTooLarge(
                self.phase_capacity,
                MAX_PHASE_CAPACITY,
            ));
        }
        if self.multiplex > self.phase_capacity {
            return Err(ConfigError::MultiplexExceedsCapacity {
                multiplex: self.multiplex,
                capacity: self.phase_capacity,
            });
        }
        if self.dedicated_multipliers > MULTIPLIES_PER_UNIT {
            return Err(ConfigError::TooManyDedicatedMultipliers {
                requested: self.dedicated_multipliers,
                available: MULTIPLIES_PER_UNIT,
            });
        }
        match self.stages.checked_mul(self.multiplex) {
            Some(depth) if depth <= MAX_DEPTH => Ok(()),
            _ => Err(ConfigError::DepthTooLarge {
                stages: self.stages,
                multiplex: self.multiplex,
            }),
        }
    }

    pub fn stages(&self) -> u32 {
        self.stages
    }

    pub fn multiplex(&self) -> u32 {
        self.multiplex
    }

    pub fn phase_capacity(&self) -> u32 {
        self.phase_capacity
    }

    pub fn dedicated_multipliers(&self) -> u32 {
        self.dedicated_multipliers
    }

    /// Maximum iteration count the pipeline can report, N x M.
    pub fn depth(&self) -> u32 {
        self.stages.saturating_mul(self.multiplex)
    }

    /// Pixel-clock ticks from pipeline input to output.
    pub fn latency(&self) -> u32 {
        self.stages
    }

    /// Bits needed by the iteration counter, which runs up to depth + 1.
    pub fn counter_bits(&self) -> u32 {
        u32::BITS - self.depth().saturating_add(1).leading_zeros()
    }

    pub fn clock_plan(&self, pixel_hz: u64) -> ClockPlan {
        ClockPlan {
            pixel_hz,
            multiplex: self.multiplex,
        }
    }

    pub fn resources(&self) -> ResourceEstimate {
        // c, z as four datapath words, plus counter, overflow and three sync bits
        let packet_bits = 4 * TOTAL_BITS + self.counter_bits() + 1 + 3;
        let logic = MULTIPLIES_PER_UNIT.saturating_sub(self.dedicated_multipliers);
        ResourceEstimate {
            dedicated_multipliers: self.stages.saturating_mul(self.dedicated_multipliers),
            logic_multipliers: self.stages.saturating_mul(logic),
            register_bits: self.stages.saturating_mul(packet_bits),
        }
    }
}

/// Hardware cost of a pipeline configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEstimate {
    /// Multiplications mapped onto dedicated multiply blocks.
    pub dedicated_multipliers: u32,
    /// Multiplications built from general logic.
    pub logic_multipliers: u32,
    /// Flip-flops holding in-flight pixel state.
    pub register_bits: u32,
}

/// The two clock domains: the pixel clock and the compute clock running at
/// exactly `multiplex` times its rate, phase aligned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockPlan {
    pub pixel_hz: u64,
    pub multiplex: u32,
}

impl ClockPlan {
    pub fn compute_hz(&self) -> u64 {
        self.pixel_hz.saturating_mul(self.multiplex as u64)
    }
}
