//! SPI format programming for the RP2040 SSP blocks
//!
//! The embassy SPI driver covers frequency, polarity and phase; the SSP's
//! word size and master/slave select live in CR0/CR1 fields it does not
//! expose, so they are programmed here through the PAC. The PL022 block
//! always shifts most-significant-bit first; there is no bit-order field.
//!
//! Typical bring-up: resolve the pinout on the numbers from the board
//! config ([`tactus_core::pinmap::resolve_spi`]), construct the embassy
//! driver on the matching typed pins, then call [`apply_format`] for the
//! remaining fields and wrap the driver in
//! [`tactus_core::spi::SpiAdapter`].

use embassy_rp::pac;
use tactus_core::pinmap::SpiInstance;
use tactus_hal::spi::{Mode, Phase, Polarity, Role, SpiConfig};

/// Bitrate applied at init before the board config is consulted
pub const DEFAULT_BITRATE: u32 = 1_000_000; // 1 MHz

/// Program the SSP format fields for a configuration
///
/// Sets word size (CR0.DSS), clock polarity/phase (CR0.SPO/SPH) and the
/// bus role (CR1.MS). Call while no transfer is in flight; the remaining
/// configuration (frequency) belongs to the SDK driver.
pub fn apply_format(instance: SpiInstance, config: &SpiConfig) {
    let regs = match instance {
        SpiInstance::Spi0 => pac::SPI0,
        SpiInstance::Spi1 => pac::SPI1,
    };

    let (polarity, phase): (Polarity, Phase) = config.mode.into();
    regs.cr0().modify(|w| {
        // DSS encodes word size minus one
        w.set_dss(config.word_size.bits() - 1);
        w.set_spo(matches!(polarity, Polarity::IdleHigh));
        w.set_sph(matches!(phase, Phase::CaptureOnSecondTransition));
    });
    regs.cr1()
        .modify(|w| w.set_ms(matches!(config.role, Role::Slave)));
}

/// Convert a bus mode into the `embedded-hal` mode type
///
/// For SDK drivers configured with `embedded_hal::spi::Mode` rather than
/// separate polarity/phase fields.
pub fn ehal_mode(mode: Mode) -> embedded_hal::spi::Mode {
    match mode {
        Mode::Mode0 => embedded_hal::spi::MODE_0,
        Mode::Mode1 => embedded_hal::spi::MODE_1,
        Mode::Mode2 => embedded_hal::spi::MODE_2,
        Mode::Mode3 => embedded_hal::spi::MODE_3,
    }
}
