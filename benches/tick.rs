//! Tick Path Benchmarks
//!
//! The host polls the whole system on a fixed cadence, nominally every
//! 10 ms: advance the oscillators, re-encode the display when the value
//! changed, refresh one digit. Everything in that path has to complete in a
//! small fraction of the tick even on MHz-class microcontrollers, so the
//! per-call budget is:
//!
//! ```text
//! time_budget = tick_ms / work_items_per_tick
//! ```
//!
//! These benchmarks measure the host-side cost of each piece and of a
//! composed tick, to catch regressions that would not show up until the
//! readout starts flickering on hardware.

use core::convert::Infallible;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use embedded_hal::digital::{ErrorType, OutputPin};
use shimmer::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

const BANK_SIZES: [usize; 5] = [1, 2, 4, 8, 16];

/// Output pin that swallows every level change
struct NullPin;

impl ErrorType for NullPin {
    type Error = Infallible;
}

impl OutputPin for NullPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

fn make_display() -> SegDisplay<NullPin, NullPin, NullPin> {
    SegDisplay::new(NullPin, NullPin, [NullPin, NullPin, NullPin, NullPin])
}

fn make_bank(members: usize) -> OscillatorBank {
    let mut bank = OscillatorBank::new();
    for i in 0..members {
        bank.add(0.5 + i as f32 * 0.2, (i % 25) as u8);
    }
    bank
}

// ============================================================================
// Oscillator Benchmarks
// ============================================================================

fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("oscillator");

    group.throughput(Throughput::Elements(1));
    group.bench_function("advance", |b| {
        let config = TuningConfig::new();
        let mut osc = Oscillator::new(&config, 2.0, 6);
        b.iter(|| black_box(osc.advance()));
    });

    group.bench_function("retune_period", |b| {
        let config = TuningConfig::new();
        let mut osc = Oscillator::new(&config, 2.0, 0);
        b.iter(|| {
            osc.increment_period();
            osc.decrement_period();
            black_box(osc.frequency())
        });
    });

    group.finish();
}

fn bench_bank_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("bank/advance_all");

    for members in BANK_SIZES {
        group.throughput(Throughput::Elements(members as u64));
        group.bench_with_input(
            BenchmarkId::new("members", members),
            &members,
            |b, &members| {
                let mut bank = make_bank(members);
                b.iter(|| bank.advance_all());
            },
        );
    }

    group.finish();
}

// ============================================================================
// Display Benchmarks
// ============================================================================

fn bench_display(c: &mut Criterion) {
    let mut group = c.benchmark_group("display");

    group.throughput(Throughput::Elements(1));
    group.bench_function("encode", |b| {
        let mut display = make_display();
        let mut value = 0.0f32;
        b.iter(|| {
            value = (value + 0.07) % 100.0;
            display.encode(black_box(value));
        });
    });

    group.bench_function("refresh", |b| {
        let mut display = make_display();
        display.encode(42.37);
        b.iter(|| display.refresh());
    });

    // One full persistence-of-vision cycle across all four digits
    group.throughput(Throughput::Elements(DIGIT_COUNT as u64));
    group.bench_function("frame", |b| {
        let mut display = make_display();
        display.encode(42.37);
        b.iter(|| {
            for _ in 0..DIGIT_COUNT {
                display.refresh().ok();
            }
        });
    });

    group.finish();
}

// ============================================================================
// Composed Tick Benchmarks
// ============================================================================

/// The tick a host loop actually runs: advance, re-encode, refresh
fn bench_composed_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for members in [2usize, 8] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::new("members", members),
            &members,
            |b, &members| {
                let mut bank = make_bank(members);
                let ids: Vec<OscillatorId> = bank.iter().map(|(id, _)| id).collect();
                let mut display = make_display();

                b.iter(|| {
                    bank.advance_all();
                    let sample = bank.sample(ids[0]).unwrap_or(0.0);
                    display.encode((sample + 1.0) * 49.99);
                    display.refresh().ok();
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// Criterion Groups
// ============================================================================

criterion_group!(osc_benches, bench_oscillator, bench_bank_scaling);
criterion_group!(display_benches, bench_display);
criterion_group!(tick_benches, bench_composed_tick);

criterion_main!(osc_benches, display_benches, tick_benches);
