//! Tuning Constants
//!
//! This module defines the shared tuning envelope for the oscillators:
//! period bounds, tuning step sizes, phase quantization, and the simulation
//! time base. One [`TuningConfig`] is stamped into every oscillator at
//! creation, so a whole bank tunes against the same limits.

use core::f32::consts::PI;

/// Shared tuning constants for a set of oscillators
///
/// All values are in abstract time units; [`time_step`](Self::time_step)
/// advances per host tick, so with the nominal 10 ms tick one time unit
/// spans one second of wall clock.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TuningConfig {
    /// Shortest tunable period; below this the oscillation stops reading
    /// as motion
    pub period_min: f32,

    /// Longest tunable period
    pub period_max: f32,

    /// Periods below this margin tune with the fine step, since frequency
    /// shifts as 1/T and equal steps near the minimum would jump too far
    pub period_margin: f32,

    /// Period step applied below the margin
    pub period_step_fine: f32,

    /// Period step applied at or above the margin
    pub period_step_coarse: f32,

    /// Fallback period when a requested period is out of range
    pub period_default: f32,

    /// Phase offset quantum in radians; 12 divides evenly by the common
    /// radian denominators, so quarter and third turns land exactly
    pub phase_quantum: f32,

    /// Largest representable phase offset, in quanta (a full turn)
    pub phase_steps_max: u8,

    /// Simulated time advanced per host tick
    pub time_step: f32,

    /// Nominal host tick interval in milliseconds
    pub tick_ms: u32,
}

impl TuningConfig {
    /// Create the standard tuning envelope
    ///
    /// Const-constructible so a config can live in a `static` on targets
    /// without heap.
    pub const fn new() -> Self {
        Self {
            period_min: 0.13,
            period_max: 4.0,
            period_margin: 0.5,
            period_step_fine: 0.05,
            period_step_coarse: 0.1,
            period_default: 2.0,
            phase_quantum: PI / 12.0,
            phase_steps_max: 24,
            time_step: 0.01,
            tick_ms: 10,
        }
    }

    /// Whether `period` is acceptable as a construction argument
    ///
    /// Bounds are inclusive; NaN is rejected.
    pub fn period_in_range(&self, period: f32) -> bool {
        period >= self.period_min && period <= self.period_max
    }

    /// Tuning step to apply at the given current period
    pub fn period_step(&self, period: f32) -> f32 {
        if period < self.period_margin {
            self.period_step_fine
        } else {
            self.period_step_coarse
        }
    }
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_envelope() {
        let config = TuningConfig::new();
        assert_relative_eq!(config.period_min, 0.13);
        assert_relative_eq!(config.period_max, 4.0);
        assert_relative_eq!(config.period_default, 2.0);
        assert_eq!(config.phase_steps_max, 24);
        assert_eq!(config.tick_ms, 10);
        assert_eq!(config, TuningConfig::default());
    }

    #[test]
    fn test_phase_quantum_spans_full_turn() {
        let config = TuningConfig::new();
        let full_turn = config.phase_quantum * config.phase_steps_max as f32;
        assert_relative_eq!(full_turn, 2.0 * PI, epsilon = 1e-6);
    }

    #[test]
    fn test_period_range_bounds_inclusive() {
        let config = TuningConfig::new();
        assert!(config.period_in_range(0.13));
        assert!(config.period_in_range(4.0));
        assert!(config.period_in_range(1.0));
        assert!(!config.period_in_range(0.12));
        assert!(!config.period_in_range(4.1));
        assert!(!config.period_in_range(0.0));
        assert!(!config.period_in_range(-2.0));
        assert!(!config.period_in_range(f32::NAN));
    }

    #[test]
    fn test_step_selection_around_margin() {
        let config = TuningConfig::new();
        assert_relative_eq!(config.period_step(0.3), config.period_step_fine);
        assert_relative_eq!(config.period_step(0.49), config.period_step_fine);
        assert_relative_eq!(config.period_step(0.5), config.period_step_coarse);
        assert_relative_eq!(config.period_step(2.0), config.period_step_coarse);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_round_trips_through_json() {
        let config = TuningConfig::new();
        let json = serde_json::to_string(&config).unwrap();
        let back: TuningConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
