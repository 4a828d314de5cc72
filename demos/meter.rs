//! Meter Demo
//!
//! This demo runs the full host loop in simulation: a quadrature pair of
//! oscillators drives a breathing meter value, and the display driver
//! multiplexes it onto stub pins exactly as it would onto real hardware.
//!
//! Run with: cargo run --example meter

use core::convert::Infallible;
use embedded_hal::digital::{ErrorType, OutputPin};
use shimmer::prelude::*;

/// Stand-in for a GPIO pin; real hosts pass their HAL's output pins
struct StubPin;

impl ErrorType for StubPin {
    type Error = Infallible;
}

impl OutputPin for StubPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

fn main() {
    // Build a bank with the standard tuning envelope
    let config = TuningConfig::new();
    let mut bank = OscillatorBank::with_config(config);

    // A quadrature pair: same period, quarter-turn phase offset
    let carrier = bank.add(2.0, 0);
    let quad = bank.add(2.0, 6);

    // Lock the pair's phase relationship before the loop starts
    bank.reset_all();

    let mut display = SegDisplay::new(StubPin, StubPin, [StubPin, StubPin, StubPin, StubPin]);

    println!(
        "Bank of {} oscillators, tick every {} ms",
        bank.len(),
        bank.config().tick_ms
    );

    // Simulated host loop: one iteration per tick
    let mut shown = f32::NAN;
    for tick in 0u32..400 {
        bank.advance_all();

        let x = bank.sample(carrier).unwrap();
        let y = bank.sample(quad).unwrap();

        // Map the carrier from [-1, 1] onto the display range [0, 100)
        let value = (x + 1.0) * 49.99;

        // Re-encode only when the value moved; refresh every tick regardless
        if value != shown {
            display.encode(value);
            shown = value;
        }
        display.refresh().unwrap();

        if tick % 50 == 0 {
            println!(
                "tick {tick:3}  carrier {x:+.3}  quad {y:+.3}  value {value:5.2}  buffer {:02X?}",
                display.digits()
            );
        }

        // Halfway through, slow the pair down and rotate the quad member
        if tick == 200 {
            for (_, osc) in bank.iter_mut() {
                osc.increment_period();
            }
            if let Some(osc) = bank.get_mut(quad) {
                osc.increment_phase();
            }
            println!(
                "tick 200  retuned: period {:.2}, quad phase {} steps",
                bank.get(carrier).unwrap().period(),
                bank.get(quad).unwrap().phase_steps()
            );
        }
    }

    println!("Done; next digit to light: {}", display.active_index());
}
