//! Tactus Hardware Abstraction Layer
//!
//! This crate defines the vendor-neutral bus API implemented by the
//! chip-specific crates (RP2040, STM32H7, etc.). Application code written
//! against these traits runs unchanged on either family.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application / board firmware           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tactus-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ tactus-hal-   │       │ tactus-hal-   │
//! │    rp2040     │       │   stm32h7     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`spi::SpiBus`] - SPI bus operations
//! - [`i2c::I2cBus`] - I2C bus operations

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use i2c::I2cBus;
pub use spi::SpiBus;
