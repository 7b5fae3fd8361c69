//! Bus transport abstraction
//!
//! The driver only needs a blocking request/response primitive: write a few
//! bytes to a device address, or read a few bytes back, each with a bounded
//! timeout. Addresses use the 8-bit convention (7-bit address shifted left).

use embedded_hal::blocking::i2c;

/// Blocking 2-wire bus primitive consumed by the driver.
///
/// A transaction either completes or fails within `timeout_ms`; the
/// implementor owns the timeout enforcement and the failure classification
/// (NACK, arbitration loss, timeout). The driver does not retry.
pub trait Transport {
    type Error;

    /// Writes `bytes` to the device at `address`.
    fn transmit(&mut self, address: u8, bytes: &[u8], timeout_ms: u16) -> Result<(), Self::Error>;

    /// Reads `buffer.len()` bytes from the device at `address`.
    fn receive(&mut self, address: u8, buffer: &mut [u8], timeout_ms: u16)
        -> Result<(), Self::Error>;
}

/// Adapter exposing any `embedded-hal` blocking I2C bus as a [`Transport`].
pub struct I2cTransport<I2C> {
    i2c: I2C,
}

impl<I2C> I2cTransport<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Releases the wrapped bus.
    pub fn free(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> Transport for I2cTransport<I2C>
where
    I2C: i2c::Write<Error = E> + i2c::Read<Error = E>,
{
    type Error = E;

    fn transmit(&mut self, address: u8, bytes: &[u8], _timeout_ms: u16) -> Result<(), E> {
        // embedded-hal buses take the 7-bit address and own their timing
        self.i2c.write(address >> 1, bytes)
    }

    fn receive(&mut self, address: u8, buffer: &mut [u8], _timeout_ms: u16) -> Result<(), E> {
        self.i2c.read(address >> 1, buffer)
    }
}
