//! Oscillator Bank
//!
//! Id-addressed storage for a set of oscillators sharing one tuning
//! configuration, with whole-bank stepping and synchronization. Requires the
//! `alloc` feature; targets without heap drive [`Oscillator`]s directly.

use crate::config::TuningConfig;
use crate::osc::Oscillator;
use slotmap::{DefaultKey, SlotMap};

/// Stable identifier for an oscillator within a bank
pub type OscillatorId = DefaultKey;

/// A set of independently tunable oscillators under one tuning envelope
///
/// Oscillators are created against the bank's [`TuningConfig`] and addressed
/// by [`OscillatorId`] from then on. One [`advance_all`](Self::advance_all)
/// per host tick steps every member; samples are read back per id between
/// ticks. Members live as long as the bank does.
pub struct OscillatorBank {
    config: TuningConfig,
    oscillators: SlotMap<OscillatorId, Oscillator>,
}

impl OscillatorBank {
    /// Create an empty bank with the standard tuning envelope
    pub fn new() -> Self {
        Self::with_config(TuningConfig::new())
    }

    /// Create an empty bank with an explicit tuning envelope
    ///
    /// The config is stamped into every oscillator added later.
    pub fn with_config(config: TuningConfig) -> Self {
        Self {
            config,
            oscillators: SlotMap::new(),
        }
    }

    /// The tuning envelope shared by every member
    pub fn config(&self) -> &TuningConfig {
        &self.config
    }

    /// Add an oscillator and return its id
    ///
    /// Out-of-range arguments fall back to the documented defaults, as in
    /// [`Oscillator::new`].
    pub fn add(&mut self, period: f32, phase_steps: u8) -> OscillatorId {
        self.oscillators
            .insert(Oscillator::new(&self.config, period, phase_steps))
    }

    /// Advance every member by one simulation tick
    pub fn advance_all(&mut self) {
        for osc in self.oscillators.values_mut() {
            osc.advance();
        }
    }

    /// Rewind every member's simulated time to zero
    ///
    /// All members reset within one call, so no advance can slip in between
    /// and the group's phase relationships become exact.
    pub fn reset_all(&mut self) {
        for osc in self.oscillators.values_mut() {
            osc.reset();
        }
    }

    /// Borrow an oscillator by id
    pub fn get(&self, id: OscillatorId) -> Option<&Oscillator> {
        self.oscillators.get(id)
    }

    /// Mutably borrow an oscillator by id, for tuning
    pub fn get_mut(&mut self, id: OscillatorId) -> Option<&mut Oscillator> {
        self.oscillators.get_mut(id)
    }

    /// Sample computed by the most recent advance of the given member
    pub fn sample(&self, id: OscillatorId) -> Option<f32> {
        self.oscillators.get(id).map(|osc| osc.sample())
    }

    /// Iterate over `(id, oscillator)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (OscillatorId, &Oscillator)> {
        self.oscillators.iter()
    }

    /// Iterate mutably over `(id, oscillator)` pairs
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (OscillatorId, &mut Oscillator)> {
        self.oscillators.iter_mut()
    }

    /// Number of oscillators in the bank
    pub fn len(&self) -> usize {
        self.oscillators.len()
    }

    /// Whether the bank has no members
    pub fn is_empty(&self) -> bool {
        self.oscillators.is_empty()
    }
}

impl Default for OscillatorBank {
    fn default() -> Self {
        Self::new()
    }
}
