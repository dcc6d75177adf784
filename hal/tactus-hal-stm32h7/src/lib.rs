//! STM32H7-specific bus support for Tactus boards
//!
//! Provides the I2C clock configuration helpers for the H7 family: the
//! TIMINGR register value is computed from the I2C kernel clock and the
//! requested bus class by the solver in `tactus-core`, and embassy's I2C
//! errors map onto the Tactus error model. Select the chip variant
//! through this crate's features (e.g. `stm32h747xi-cm7`).

#![no_std]

pub mod i2c;
