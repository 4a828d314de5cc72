//! 7-Segment Display Driver
//!
//! Drives a 4-digit 7-segment LED display behind a serial-in shift register
//! over two wires (data and clock) plus four digit-enable lines. The
//! register's latch clock is tied to its shift clock, so latched outputs lag
//! one pulse behind; after the 8 data bits a ninth pulse publishes the byte.
//!
//! Only one digit is lit per [`refresh`](SegDisplay::refresh). The host
//! calls it every tick and persistence of vision fuses the four digits into
//! a steady readout.

use crate::segment;
use embedded_hal::digital::OutputPin;

/// Number of digits on the display
pub const DIGIT_COUNT: usize = 4;

/// Multiplexed driver for a 4-digit 7-segment display
///
/// Owns six output pins and a 4-byte encoded buffer with a rotating
/// active-digit cursor. [`encode`](Self::encode) rewrites the buffer
/// without touching hardware; [`refresh`](Self::refresh) drives exactly one
/// digit and must keep being called every tick whether or not the value
/// changed, or the readout goes dark.
pub struct SegDisplay<CLK, DAT, EN> {
    clock: CLK,
    data: DAT,
    enables: [EN; DIGIT_COUNT],
    digits: [u8; DIGIT_COUNT],
    active: usize,
}

impl<E, CLK, DAT, EN> SegDisplay<CLK, DAT, EN>
where
    CLK: OutputPin<Error = E>,
    DAT: OutputPin<Error = E>,
    EN: OutputPin<Error = E>,
{
    /// Wrap six configured output pins into a display driver
    ///
    /// `enables[0]` selects the tens digit, `enables[3]` the hundredths.
    /// The buffer starts blank apart from the fixed decimal point on the
    /// ones digit; no pin moves until the first [`refresh`](Self::refresh).
    pub fn new(clock: CLK, data: DAT, enables: [EN; DIGIT_COUNT]) -> Self {
        Self {
            clock,
            data,
            enables,
            digits: [
                segment::BLANK,
                segment::DECIMAL_POINT,
                segment::BLANK,
                segment::BLANK,
            ],
            active: 0,
        }
    }

    /// Re-encode the digit buffer to show `value` as `XX.XX`
    ///
    /// Pure buffer work: no pin moves and the cursor stays put, so calling
    /// this mid-cycle never glitches the multiplexing. Truncation rules are
    /// documented on [`segment::decompose`].
    pub fn encode(&mut self, value: f32) {
        self.digits = segment::encode(value);
    }

    /// Drive one digit for this tick
    ///
    /// Blanks every enable line, shifts the active digit's byte out,
    /// latches it, then lights that digit's enable and steps the cursor.
    /// Blanking first keeps a digit's segments from ghosting onto its
    /// neighbor while the register contents change.
    ///
    /// On a pin error the cursor is left in place, so a retry drives the
    /// same digit.
    pub fn refresh(&mut self) -> Result<(), E> {
        self.blank()?;
        self.shift_out(self.digits[self.active])?;
        self.enables[self.active].set_high()?;
        self.active = (self.active + 1) % DIGIT_COUNT;
        Ok(())
    }

    /// Drive every enable line low, leaving buffer and cursor untouched
    pub fn blank(&mut self) -> Result<(), E> {
        for enable in self.enables.iter_mut() {
            enable.set_low()?;
        }
        Ok(())
    }

    /// Current encoded buffer, tens digit first
    pub fn digits(&self) -> &[u8; DIGIT_COUNT] {
        &self.digits
    }

    /// Index of the digit the next [`refresh`](Self::refresh) will light
    pub fn active_index(&self) -> usize {
        self.active
    }

    fn shift_out(&mut self, byte: u8) -> Result<(), E> {
        for bit in 0..8 {
            if byte & (1 << bit) != 0 {
                self.data.set_high()?;
            } else {
                self.data.set_low()?;
            }
            self.pulse_clock()?;
        }
        // Latch lags one pulse behind the shift clock; the ninth pulse
        // publishes the byte onto the register outputs.
        self.pulse_clock()
    }

    fn pulse_clock(&mut self) -> Result<(), E> {
        self.clock.set_high()?;
        self.clock.set_low()
    }
}
