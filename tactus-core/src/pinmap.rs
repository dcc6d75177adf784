//! Pin-to-peripheral routing for the RP2040 SPI blocks
//!
//! The RP2040 muxes its two SPI blocks onto the GPIO bank in a fixed
//! pattern: the signal cycles RX, CSn, SCK, TX every four pins, and the
//! owning block alternates every eight (GPIO 0-7 and 16-23 belong to
//! SPI0, GPIO 8-15 and 24-29 to SPI1). Resolution here is pure table
//! lookup, so config-driven pinouts can be validated on the host before
//! any peripheral is touched.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest valid RP2040 GPIO number
const MAX_GPIO: u8 = 29;

/// SPI peripheral instance identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiInstance {
    Spi0,
    Spi1,
}

/// Signal a GPIO carries when muxed to its SPI function
///
/// Names follow the datasheet's block-side view: in master role TX drives
/// MOSI and RX samples MISO.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiSignal {
    /// Receive data line
    Rx,
    /// Chip select
    Cs,
    /// Serial clock
    Sck,
    /// Transmit data line
    Tx,
}

/// Error from resolving an SPI pinout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinmapError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin does not carry the requested SPI signal
    SignalMismatch,
    /// Pins resolve to different SPI blocks
    MismatchedInstance,
}

/// An SPI pinout, typically taken from a board config file
///
/// Pin roles are named from the master's perspective; the MOSI pin must
/// mux to the block's TX signal and the MISO pin to its RX signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpiPinout {
    pub mosi: u8,
    pub miso: u8,
    pub sck: u8,
    pub cs: u8,
}

/// Which SPI block and signal a GPIO muxes to
///
/// Returns `None` for pin numbers outside the GPIO bank. Every valid
/// GPIO carries exactly one SPI function.
pub const fn spi_function(gpio: u8) -> Option<(SpiInstance, SpiSignal)> {
    if gpio > MAX_GPIO {
        return None;
    }
    // Blocks alternate every eight pins, signals cycle every four.
    let instance = if (gpio / 8) % 2 == 0 {
        SpiInstance::Spi0
    } else {
        SpiInstance::Spi1
    };
    let signal = match gpio % 4 {
        0 => SpiSignal::Rx,
        1 => SpiSignal::Cs,
        2 => SpiSignal::Sck,
        _ => SpiSignal::Tx,
    };
    Some((instance, signal))
}

/// Resolve the SPI block shared by a full pinout
///
/// Each pin must carry the signal its role requires, and all four must
/// land on the same block. Failures are reported per the first pin that
/// violates, in MOSI, MISO, SCK, CS order.
pub fn resolve_spi(pinout: &SpiPinout) -> Result<SpiInstance, PinmapError> {
    let mosi = lookup(pinout.mosi, SpiSignal::Tx)?;
    let miso = lookup(pinout.miso, SpiSignal::Rx)?;
    let sck = lookup(pinout.sck, SpiSignal::Sck)?;
    let cs = lookup(pinout.cs, SpiSignal::Cs)?;

    if mosi != miso || miso != sck || sck != cs {
        return Err(PinmapError::MismatchedInstance);
    }
    Ok(mosi)
}

fn lookup(gpio: u8, expected: SpiSignal) -> Result<SpiInstance, PinmapError> {
    let (instance, signal) = spi_function(gpio).ok_or(PinmapError::InvalidPin)?;
    if signal != expected {
        return Err(PinmapError::SignalMismatch);
    }
    Ok(instance)
}

/// GPIOs carrying a given SPI signal, in ascending order
///
/// Handy for boards that enumerate their wiring options.
pub fn pins_carrying(signal: SpiSignal) -> impl Iterator<Item = u8> {
    (0..=MAX_GPIO).filter(move |&gpio| match spi_function(gpio) {
        Some((_, s)) => s == signal,
        None => false,
    })
}
