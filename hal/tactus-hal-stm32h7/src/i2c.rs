//! I2C clock configuration for STM32H7
//!
//! The H7 I2C peripheral takes its whole SCL waveform from a single
//! TIMINGR register. [`timing_register`] turns a kernel clock and a bus
//! configuration into that value using the solver in `tactus-core`.
//!
//! Note: embassy-stm32 v0.5 I2C has different generics (Mode, MasterMode).
//! Firmware drives embassy's I2C directly and programs the computed
//! timing; this module provides configuration helpers and error types.

use embassy_stm32::i2c::Error as I2cError;
use tactus_core::timing::{compute_timing, TimingError};
use tactus_hal::i2c::I2cConfig;

/// Compute the TIMINGR value for a bus configuration
///
/// `kernel_clock_hz` is the I2C kernel clock selected in the RCC; embassy
/// owns the clock tree, so the caller queries it there and passes it in.
/// Fails for bus frequencies outside the three standard classes and for
/// kernel clocks that cannot meet the class's minimum timings.
pub fn timing_register(kernel_clock_hz: u32, config: &I2cConfig) -> Result<u32, TimingError> {
    compute_timing(kernel_clock_hz, config.frequency).map(|timing| timing.register_value())
}

/// Error from I2C operations
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Bus error
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// NACK received
    Nack,
    /// Timeout
    Timeout,
    /// CRC error
    Crc,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl From<I2cError> for I2cBusError {
    fn from(e: I2cError) -> Self {
        match e {
            I2cError::Bus => I2cBusError::Bus,
            I2cError::Arbitration => I2cBusError::ArbitrationLost,
            I2cError::Nack => I2cBusError::Nack,
            I2cError::Timeout => I2cBusError::Timeout,
            I2cError::Crc => I2cBusError::Crc,
            I2cError::Overrun => I2cBusError::Overrun,
            _ => I2cBusError::Other,
        }
    }
}
