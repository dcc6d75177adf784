//! RP2040-specific bus support for Tactus boards
//!
//! This crate provides the RP2040 glue around the vendor-neutral SPI
//! surface:
//! - Pinout resolution for the two SSP blocks (re-exported from
//!   `tactus-core`, so config-driven pin assignments validate on the host)
//! - Format programming for the SSP fields the SDK driver does not expose
//! - Conversion into `embedded-hal` mode types for SDK drivers

#![no_std]

pub mod spi;

// Re-export the routing helpers chip users reach for first
pub use tactus_core::pinmap::{resolve_spi, SpiInstance, SpiPinout};
