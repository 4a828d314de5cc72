//! # Shimmer: Tunable Oscillators with a 7-Segment Readout
//!
//! `shimmer` is a Rust library for fixed-tick embedded loops that pair a bank of
//! independently tunable discrete-time sine oscillators with a 4-digit 7-segment
//! LED display driven through a 2-wire serial shift register.
//!
//! ## Architecture
//!
//! Two halves, coupled only by the host's polling loop:
//!
//! - **Oscillators** - phase-quantized sine simulation advanced one fixed time
//!   step per tick, with saturating period tuning ([`osc::Oscillator`],
//!   [`bank::OscillatorBank`])
//! - **Display** - a 4-byte segment buffer and rotating digit cursor, shifted
//!   out serially and multiplexed across four enable lines so persistence of
//!   vision shows all digits at once ([`display::SegDisplay`])
//!
//! There is no internal scheduler: the host calls `advance` and `refresh` at a
//! fixed cadence (nominally every 10 ms) and every call completes in bounded
//! time.
//!
//! ## Quick Start
//!
//! ```rust
//! use shimmer::prelude::*;
//!
//! // Shared tuning for every oscillator in the bank
//! let config = TuningConfig::new();
//! let mut bank = OscillatorBank::with_config(config);
//!
//! // A quadrature pair: same period, quarter-turn phase offset
//! let a = bank.add(2.0, 0);
//! let b = bank.add(2.0, 6);
//!
//! // One host tick
//! bank.advance_all();
//! let x = bank.sample(a).unwrap();
//! let y = bank.sample(b).unwrap();
//!
//! // Map a sample from [-1, 1] onto the display range [0, 100)
//! let value = (x + 1.0) * 49.99;
//! # let _ = (y, value);
//! ```
//!
//! Feeding the value to a display is the host's job: call
//! [`SegDisplay::encode`](display::SegDisplay::encode) when the value changes
//! and [`SegDisplay::refresh`](display::SegDisplay::refresh) every tick.
//!
//! ## Feature Flags
//!
//! - **`std`** *(default)* - host builds, tests and benches; implies `alloc`
//! - **`alloc`** - enables [`bank::OscillatorBank`] on heap-capable no_std
//!   targets
//! - **`serde`** - serialization derives on the tuning types
//! - **`defmt`** - `defmt::Format` derives on public data types

#![cfg_attr(not(feature = "std"), no_std)]

pub mod config;
pub mod display;
pub mod osc;
pub mod segment;

#[cfg(feature = "alloc")]
pub mod bank;

/// Prelude module for convenient imports
pub mod prelude {
    // Oscillator core
    pub use crate::config::TuningConfig;
    pub use crate::osc::Oscillator;

    // Display driver
    pub use crate::display::{SegDisplay, DIGIT_COUNT};
    pub use crate::segment::{BLANK, DECIMAL_POINT};

    // Bank (heap-backed)
    #[cfg(feature = "alloc")]
    pub use crate::bank::{OscillatorBank, OscillatorId};
}

// Re-export key types at crate root for convenience
pub use prelude::*;
