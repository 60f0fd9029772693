//! Bit-sampling software UART receiver
//!
//! Receives 8N1 frames on a plain input pin by timing from the falling
//! edge of the start bit and sampling each data bit at its centre.

use embedded_hal::delay::DelayNs;
use meridian_core::traits::SerialLine;
use meridian_hal::{BitOrder, InputPin, UartConfig};

/// Software UART receiver
///
/// Every call to [`receive`](Self::receive) blocks until a full frame has
/// arrived. Nothing is buffered: bytes sent while no receive is running
/// are lost.
pub struct SoftUart<P, D> {
    rx: P,
    delay: D,
    config: UartConfig,
}

impl<P: InputPin, D: DelayNs> SoftUart<P, D> {
    /// Create a receiver on an idle-high input pin
    pub fn new(rx: P, delay: D, config: UartConfig) -> Self {
        Self { rx, delay, config }
    }

    /// Block until one byte has been received
    pub fn receive(&mut self) -> u8 {
        let half_bit_ns = self.config.half_bit_ns();
        let bit_ns = self.config.bit_period_ns();

        loop {
            while self.rx.is_high() {
                core::hint::spin_loop();
            }

            // Centre of the start bit; a line back high here was a glitch
            self.delay.delay_ns(half_bit_ns);
            if self.rx.is_low() {
                break;
            }
        }

        let mut data = 0u8;
        for _ in 0..8 {
            self.delay.delay_ns(bit_ns);
            let bit = u8::from(self.rx.is_high());
            data = match self.config.bit_order {
                BitOrder::LsbFirst => (data >> 1) | (bit << 7),
                BitOrder::MsbFirst => (data << 1) | bit,
            };
        }

        // Stop bit
        self.delay.delay_ns(bit_ns);
        data
    }

    /// UART configuration
    pub fn config(&self) -> UartConfig {
        self.config
    }

    /// Release the pin and delay
    pub fn release(self) -> (P, D) {
        (self.rx, self.delay)
    }
}

impl<P: InputPin, D: DelayNs> SerialLine for SoftUart<P, D> {
    fn read_byte(&mut self) -> u8 {
        self.receive()
    }
}
