//! Phase-Quantized Sine Oscillator
//!
//! A discrete-time model of simple harmonic motion, `y(t) = sin(2πft + φ)`,
//! advanced in fixed steps by an external polling loop. The period is
//! tunable at runtime within saturating bounds, and the phase offset is
//! restricted to multiples of a fixed quantum so that oscillators reset
//! together hold an exact relative phase forever.

use crate::config::TuningConfig;
use core::f32::consts::TAU;

/// A single tunable sine oscillator
///
/// State advances only through [`advance`](Self::advance); between calls
/// every accessor returns a stable snapshot of the current tick. The
/// frequency is always the reciprocal of the period and both are kept in
/// step by the tuning methods.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Oscillator {
    config: TuningConfig,
    elapsed: f32,
    period: f32,
    frequency: f32,
    phase_steps: u8,
    phase: f32,
    sample: f32,
}

impl Oscillator {
    /// Create an oscillator with the requested period and phase offset
    ///
    /// A period outside the configured range (NaN included) falls back to
    /// `period_default`; a phase offset above `phase_steps_max` falls back
    /// to zero. Construction is total: invalid requests are replaced, not
    /// reported. The initial sample is computed for `t = 0` without
    /// consuming a tick.
    pub fn new(config: &TuningConfig, period: f32, phase_steps: u8) -> Self {
        let period = if config.period_in_range(period) {
            period
        } else {
            config.period_default
        };
        let phase_steps = if phase_steps <= config.phase_steps_max {
            phase_steps
        } else {
            0
        };

        let mut osc = Self {
            config: *config,
            elapsed: 0.0,
            period,
            frequency: 0.0,
            phase_steps,
            phase: 0.0,
            sample: 0.0,
        };
        osc.update_frequency();
        osc.update_phase();
        osc.sample = osc.current_sample();
        osc
    }

    /// Advance the simulation by one tick and return the new sample
    ///
    /// The sample is computed for the current simulated time first; time is
    /// stepped afterwards and wrapped to zero at the period boundary. The
    /// returned value stays readable through [`sample`](Self::sample) until
    /// the next advance.
    pub fn advance(&mut self) -> f32 {
        self.sample = self.current_sample();
        self.elapsed += self.config.time_step;
        if self.elapsed >= self.period {
            self.elapsed = 0.0;
        }
        self.sample
    }

    /// Rewind simulated time to zero without touching the tuning
    ///
    /// Resetting several oscillators within the same host tick locks them
    /// into their exact quantized phase relationship from then on.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Lengthen the period by one tuning step, saturating at the maximum
    pub fn increment_period(&mut self) {
        if self.period >= self.config.period_max {
            return;
        }
        let step = self.config.period_step(self.period);
        self.period = (self.period + step).min(self.config.period_max);
        self.update_frequency();
    }

    /// Shorten the period by one tuning step, saturating at the minimum
    ///
    /// Below the configured margin the fine step applies, keeping frequency
    /// jumps small where 1/T is steep.
    pub fn decrement_period(&mut self) {
        if self.period <= self.config.period_min {
            return;
        }
        let step = self.config.period_step(self.period);
        self.period = (self.period - step).max(self.config.period_min);
        self.update_frequency();
    }

    /// Rotate the phase offset forward by one quantum, saturating at a
    /// full turn
    pub fn increment_phase(&mut self) {
        if self.phase_steps < self.config.phase_steps_max {
            self.phase_steps += 1;
            self.update_phase();
        }
    }

    /// Rotate the phase offset back by one quantum, saturating at zero
    pub fn decrement_phase(&mut self) {
        if self.phase_steps > 0 {
            self.phase_steps -= 1;
            self.update_phase();
        }
    }

    /// Sample computed by the most recent advance (or at construction)
    pub fn sample(&self) -> f32 {
        self.sample
    }

    /// Current oscillation period in time units
    pub fn period(&self) -> f32 {
        self.period
    }

    /// Current frequency; always the reciprocal of the period
    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Phase offset in quanta
    pub fn phase_steps(&self) -> u8 {
        self.phase_steps
    }

    /// Phase offset in radians
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Simulated time since the last reset or period wrap
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    fn current_sample(&self) -> f32 {
        libm::sinf(TAU * self.frequency * self.elapsed + self.phase)
    }

    fn update_frequency(&mut self) {
        self.frequency = 1.0 / self.period;
    }

    fn update_phase(&mut self) {
        self.phase = self.config.phase_quantum * self.phase_steps as f32;
    }
}
