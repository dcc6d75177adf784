//! Generic SPI transfer adapter
//!
//! Bridges an SDK bus driver implementing `embedded_hal::spi::SpiBus`
//! (embassy's blocking SPI, for instance) to the vendor-neutral
//! [`tactus_hal::SpiBus`] contract. The adapter owns the transfer-shape
//! rules - one word in per word out, so asymmetric buffers are rejected
//! up front rather than padded - while the SDK driver keeps the actual
//! byte shoveling.

use embedded_hal::spi::SpiBus as SdkSpiBus;
use tactus_hal::spi::SpiBus;

/// Error from SPI transfer operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiBusError<E> {
    /// Transfer buffers have different lengths
    LengthMismatch,
    /// Error reported by the underlying SDK driver
    Bus(E),
}

/// SPI driver enforcing the vendor-neutral transfer contract
///
/// Wraps any `embedded-hal` bus. Construction is infallible; pinout and
/// format validation happen before the SDK driver exists (see
/// `tactus_core::pinmap` and the chip crates).
pub struct SpiAdapter<B> {
    bus: B,
}

impl<B> SpiAdapter<B>
where
    B: SdkSpiBus,
{
    /// Wrap an SDK bus driver
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Give the SDK bus driver back
    pub fn release(self) -> B {
        self.bus
    }

    /// Clock a single word out and return the word clocked in
    pub fn exchange(&mut self, word: u8) -> Result<u8, SpiBusError<B::Error>> {
        let mut rx = [0u8];
        self.transfer(&mut rx, &[word])?;
        Ok(rx[0])
    }
}

impl<B> SpiBus for SpiAdapter<B>
where
    B: SdkSpiBus,
{
    type Error = SpiBusError<B::Error>;

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        if read.len() != write.len() {
            return Err(SpiBusError::LengthMismatch);
        }
        self.bus.transfer(read, write).map_err(SpiBusError::Bus)
    }

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.bus.write(data).map_err(SpiBusError::Bus)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.bus.read(buf).map_err(SpiBusError::Bus)
    }

    fn transfer_in_place(&mut self, data: &mut [u8]) -> Result<(), Self::Error> {
        self.bus.transfer_in_place(data).map_err(SpiBusError::Bus)
    }
}
