//! Board-agnostic logic behind the Tactus chip crates
//!
//! This crate contains the bus-support logic that does not touch
//! peripheral registers and therefore runs (and is tested) on the host:
//!
//! - I2C bus timing computation for I2Cv2-style peripherals (STM32H7)
//! - Pin-to-peripheral routing for the RP2040 SPI blocks
//! - A generic SPI transfer adapter over `embedded-hal` bus drivers

#![no_std]
#![deny(unsafe_code)]

pub mod pinmap;
pub mod spi;
pub mod timing;
