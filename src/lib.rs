//! Platform-agnostic MPU6050 6-axis IMU driver.
//!
//! The driver talks to the sensor through the [`Transport`] trait, a blocking
//! request/response bus primitive. Any `embedded-hal` 0.2 blocking I2C bus
//! can back it through the [`I2cTransport`] adapter.
//!
//! # Example
//!
//! ```
//! # fn main() -> Result<(), mpu6050_driver::Error<()>> {
//! use mpu6050_driver::{Mpu6050, Transport};
//!
//! // Stand-in for a real bus implementation.
//! struct Bus;
//! impl Transport for Bus {
//!     type Error = ();
//!     fn transmit(&mut self, _addr: u8, _bytes: &[u8], _timeout_ms: u16) -> Result<(), ()> {
//!         Ok(())
//!     }
//!     fn receive(&mut self, _addr: u8, buffer: &mut [u8], _timeout_ms: u16) -> Result<(), ()> {
//!         buffer.fill(0);
//!         Ok(())
//!     }
//! }
//!
//! let mut mpu = Mpu6050::new(Bus);
//! mpu.init()?;
//! if mpu.is_ready()? {
//!     let sample = mpu.read_sensor_data()?;
//!     let _vertical_g = sample.accel.z;
//! }
//! # Ok(())
//! # }
//! ```
#![cfg_attr(not(test), no_std)]

pub mod registers;
pub mod transport;
pub mod utils;

mod mpu6050;

#[cfg(test)]
pub(crate) mod mock;

pub use mpu6050::{Error, Mpu6050, SensorData, Vec3};
pub use transport::{I2cTransport, Transport};
