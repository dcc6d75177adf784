//! I2C bus timing computation for I2Cv2-style peripherals
//!
//! The STM32H7 I2C kernel derives its SCL waveform from a prescaled input
//! clock: a 4-bit prescaler divides the kernel clock into ticks, and the
//! high/low periods and data setup/hold delays are counted in those ticks.
//! This module searches for a prescaler setting whose tick is coarse
//! enough that all four counts fit their register fields, then reports the
//! register-encoded counts.
//!
//! The computation is pure; programming the result into the peripheral's
//! timing register is the chip crate's job.

/// Nanoseconds per second
const NSEC_PER_SEC: u32 = 1_000_000_000;

/// Largest prescaler divider tried by the search
///
/// The hardware divides by PRESC + 1 with a 4-bit PRESC field. The scan
/// covers dividers 1..=15 (encoded 0..=14); configurations validated on
/// hardware were produced by exactly this range, so it is kept as-is.
const MAX_PRESCALER: u32 = 15;

/// Largest encodable SCL high/low period count (8-bit fields)
const MAX_SCL_PERIOD: u32 = 255;

/// Largest encodable setup/hold delay count (4-bit fields)
const MAX_DATA_DELAY: u32 = 15;

/// Minimum electrical timing requirements for one bus frequency class
///
/// Durations are in nanoseconds and come from the I2C bus specification
/// figures for each class. There is no interpolation: a bus frequency
/// between classes has no profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingProfile {
    /// Target SCL frequency in Hz
    pub frequency: u32,
    /// Minimum SCL high duration
    pub scl_high_min_ns: u32,
    /// Minimum SCL low duration
    pub scl_low_min_ns: u32,
    /// Minimum SDA hold after an SCL falling edge
    pub sda_hold_min_ns: u32,
    /// Minimum SDA setup before an SCL rising edge
    pub sda_setup_min_ns: u32,
}

impl TimingProfile {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self {
        frequency: 100_000,
        scl_high_min_ns: 4000,
        scl_low_min_ns: 4700,
        sda_hold_min_ns: 500,
        sda_setup_min_ns: 1250,
    };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self {
        frequency: 400_000,
        scl_high_min_ns: 600,
        scl_low_min_ns: 1300,
        sda_hold_min_ns: 375,
        sda_setup_min_ns: 500,
    };

    /// Fast mode plus (1 MHz)
    pub const FAST_PLUS: Self = Self {
        frequency: 1_000_000,
        scl_high_min_ns: 400,
        scl_low_min_ns: 470,
        sda_hold_min_ns: 50,
        sda_setup_min_ns: 125,
    };

    /// Look up the profile for a requested bus frequency
    ///
    /// Only the three standard classes are recognized.
    pub const fn for_frequency(hz: u32) -> Option<Self> {
        match hz {
            100_000 => Some(Self::STANDARD),
            400_000 => Some(Self::FAST),
            1_000_000 => Some(Self::FAST_PLUS),
            _ => None,
        }
    }
}

/// Error from bus timing computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingError {
    /// Requested bus frequency is not one of the recognized classes
    UnsupportedFrequency,
    /// No prescaler setting satisfies the timing requirements for the
    /// given source clock
    NoValidTiming,
}

/// Register-encoded bus timing parameters
///
/// The hardware counts `encoded value + 1` ticks for every field except
/// `sda_hold`, which is used as-is. The asymmetry matches the peripheral's
/// register definition and must not be "fixed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusTiming {
    /// Kernel clock prescaler (4-bit PRESC field)
    pub prescaler: u8,
    /// SCL high period count (8-bit SCLH field)
    pub scl_high: u8,
    /// SCL low period count (8-bit SCLL field)
    pub scl_low: u8,
    /// SDA hold delay count (4-bit SDADEL field)
    pub sda_hold: u8,
    /// SDA setup delay count (4-bit SCLDEL field)
    pub sda_setup: u8,
}

impl BusTiming {
    /// Pack the fields into the 32-bit TIMINGR register layout
    ///
    /// PRESC\[31:28\] SCLDEL\[23:20\] SDADEL\[19:16\] SCLH\[15:8\] SCLL\[7:0\]
    pub const fn register_value(&self) -> u32 {
        (self.prescaler as u32) << 28
            | (self.sda_setup as u32) << 20
            | (self.sda_hold as u32) << 16
            | (self.scl_high as u32) << 8
            | self.scl_low as u32
    }
}

/// Compute bus timing for `bus_frequency_hz` from a `source_clock_hz` kernel clock
///
/// Scans prescaler dividers in ascending order and returns the first
/// setting whose counts all fit their register fields (first fit, not
/// best fit - the scan order is part of the contract, since deployed
/// configurations were validated against these exact register values).
/// Counts are derived with truncating integer division, consistent with
/// the tick granularity of the hardware counters.
///
/// Fails with [`TimingError::UnsupportedFrequency`] when the bus
/// frequency has no profile, and [`TimingError::NoValidTiming`] when the
/// source clock cannot satisfy the profile within the prescaler range
/// (source too slow for the minimum durations, or too fast for the field
/// widths).
pub fn compute_timing(
    source_clock_hz: u32,
    bus_frequency_hz: u32,
) -> Result<BusTiming, TimingError> {
    let profile = TimingProfile::for_frequency(bus_frequency_hz)
        .ok_or(TimingError::UnsupportedFrequency)?;
    compute_timing_for_profile(source_clock_hz, &profile)
}

/// Compute bus timing against an explicit profile
///
/// [`compute_timing`] is the usual entry point; this variant exists for
/// callers that already hold a [`TimingProfile`].
pub fn compute_timing_for_profile(
    source_clock_hz: u32,
    profile: &TimingProfile,
) -> Result<BusTiming, TimingError> {
    for prescaler in 1..=MAX_PRESCALER {
        let ticks_per_second = source_clock_hz / prescaler;
        if ticks_per_second == 0 {
            continue;
        }
        let ns_per_tick = NSEC_PER_SEC / ticks_per_second;
        if ns_per_tick == 0 {
            // Tick shorter than 1 ns; counts cannot be derived at this
            // divider. A larger one may bring the tick into range.
            continue;
        }

        let scl_high = profile.scl_high_min_ns / ns_per_tick;
        let scl_low = profile.scl_low_min_ns / ns_per_tick;
        let sda_hold = profile.sda_hold_min_ns / ns_per_tick;
        let sda_setup = profile.sda_setup_min_ns / ns_per_tick;

        // The hardware counts value + 1 ticks, so a zero count has no
        // encoding and rejects the divider outright.
        if scl_high < 1 || scl_high - 1 > MAX_SCL_PERIOD {
            continue;
        }
        if scl_low < 1 || scl_low - 1 > MAX_SCL_PERIOD {
            continue;
        }
        if sda_hold > MAX_DATA_DELAY {
            continue;
        }
        if sda_setup < 1 || sda_setup - 1 > MAX_DATA_DELAY {
            continue;
        }

        return Ok(BusTiming {
            prescaler: (prescaler - 1) as u8,
            scl_high: (scl_high - 1) as u8,
            scl_low: (scl_low - 1) as u8,
            sda_hold: sda_hold as u8,
            sda_setup: (sda_setup - 1) as u8,
        });
    }

    Err(TimingError::NoValidTiming)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_standard_mode_200mhz_reference() {
        // 200 MHz kernel clock: dividers 1..=14 all violate a constraint
        // (scl_high overflow up to 3, sda_hold 4..=6, sda_setup 7..=14),
        // so the scan lands on divider 15 with a 75 ns tick.
        let timing = compute_timing(200_000_000, 100_000).unwrap();
        assert_eq!(
            timing,
            BusTiming {
                prescaler: 14,
                scl_high: 52,
                scl_low: 61,
                sda_hold: 6,
                sda_setup: 15,
            }
        );
    }

    #[test]
    fn test_fast_mode_100mhz_reference() {
        let timing = compute_timing(100_000_000, 400_000).unwrap();
        assert_eq!(
            timing,
            BusTiming {
                prescaler: 2,
                scl_high: 19,
                scl_low: 42,
                sda_hold: 12,
                sda_setup: 15,
            }
        );
    }

    #[test]
    fn test_fast_mode_plus_100mhz_reference() {
        let timing = compute_timing(100_000_000, 1_000_000).unwrap();
        assert_eq!(
            timing,
            BusTiming {
                prescaler: 0,
                scl_high: 39,
                scl_low: 46,
                sda_hold: 5,
                sda_setup: 11,
            }
        );
    }

    #[test]
    fn test_fast_mode_plus_480mhz_reference() {
        let timing = compute_timing(480_000_000, 1_000_000).unwrap();
        assert_eq!(
            timing,
            BusTiming {
                prescaler: 3,
                scl_high: 49,
                scl_low: 57,
                sda_hold: 6,
                sda_setup: 14,
            }
        );
    }

    #[test]
    fn test_register_packing() {
        let timing = compute_timing(100_000_000, 1_000_000).unwrap();
        // PRESC=0 SCLDEL=11 SDADEL=5 SCLH=39 SCLL=46
        assert_eq!(timing.register_value(), 0x00B5_272E);

        let timing = compute_timing(200_000_000, 100_000).unwrap();
        assert_eq!(timing.register_value(), 0xE0F6_343D);
    }

    #[test]
    fn test_unsupported_frequency() {
        assert_eq!(
            compute_timing(200_000_000, 250_000),
            Err(TimingError::UnsupportedFrequency)
        );
        assert_eq!(
            compute_timing(200_000_000, 0),
            Err(TimingError::UnsupportedFrequency)
        );
    }

    #[test]
    fn test_source_clock_too_slow() {
        // A 1 kHz source cannot produce sub-microsecond minimum periods.
        assert_eq!(
            compute_timing(1_000, 1_000_000),
            Err(TimingError::NoValidTiming)
        );
        assert_eq!(compute_timing(0, 100_000), Err(TimingError::NoValidTiming));
    }

    #[test]
    fn test_standard_mode_480mhz_is_infeasible() {
        // Fitting the 500 ns hold minimum into SDADEL needs a tick of at
        // least 32 ns, and the coarsest tick any divider reaches at
        // 480 MHz is 31 ns.
        assert_eq!(
            compute_timing(480_000_000, 100_000),
            Err(TimingError::NoValidTiming)
        );
    }

    #[test]
    fn test_idempotent() {
        let a = compute_timing(200_000_000, 400_000);
        let b = compute_timing(200_000_000, 400_000);
        assert_eq!(a, b);
    }

    fn profile_strategy() -> impl Strategy<Value = TimingProfile> {
        prop_oneof![
            Just(TimingProfile::STANDARD),
            Just(TimingProfile::FAST),
            Just(TimingProfile::FAST_PLUS),
        ]
    }

    proptest! {
        #[test]
        fn prop_fields_fit_register_widths(
            source in 1_000_000u32..=600_000_000,
            profile in profile_strategy(),
        ) {
            if let Ok(timing) = compute_timing(source, profile.frequency) {
                prop_assert!(timing.prescaler <= 14);
                prop_assert!(timing.sda_hold <= 15);
                prop_assert!(timing.sda_setup <= 15);
                // scl_high/scl_low are u8, in range by construction; the
                // packed value must round-trip each field.
                let reg = timing.register_value();
                prop_assert_eq!((reg >> 28) as u8, timing.prescaler);
                prop_assert_eq!(((reg >> 20) & 0xF) as u8, timing.sda_setup);
                prop_assert_eq!(((reg >> 16) & 0xF) as u8, timing.sda_hold);
                prop_assert_eq!(((reg >> 8) & 0xFF) as u8, timing.scl_high);
                prop_assert_eq!((reg & 0xFF) as u8, timing.scl_low);
            }
        }

        #[test]
        fn prop_deterministic(
            source in any::<u32>(),
            profile in profile_strategy(),
        ) {
            let a = compute_timing(source, profile.frequency);
            let b = compute_timing(source, profile.frequency);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_unrecognized_frequencies_rejected(bus in any::<u32>()) {
            prop_assume!(bus != 100_000 && bus != 400_000 && bus != 1_000_000);
            prop_assert_eq!(
                compute_timing(100_000_000, bus),
                Err(TimingError::UnsupportedFrequency)
            );
        }
    }
}
