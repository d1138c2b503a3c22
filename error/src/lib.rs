/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains the unified error type and error constants used across
    the SRAM PUF subsystem.

--*/
#![cfg_attr(not(feature = "std"), no_std)]

use core::num::{NonZeroU32, TryFromIntError};

/// SRAM PUF Error Type
///
/// Error codes are partitioned by component:
///
/// * `0x0001_xxxx` - SHA-1 driver
/// * `0x0002_xxxx` - Golay codec
/// * `0x0003_xxxx` - Repetition codec
/// * `0x0004_xxxx` - Non-volatile storage accessor
/// * `0x0005_xxxx` - PUF core
/// * `0x0006_xxxx` - Known answer tests
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PufError(pub NonZeroU32);

/// Macro to define error constants ensuring uniqueness
///
/// This macro takes a list of (name, value, doc) tuples and generates
/// constant definitions for each error code.
#[macro_export]
macro_rules! define_error_constants {
    ($(($name:ident, $value:expr, $doc:expr)),* $(,)?) => {
        $(
            #[doc = $doc]
            pub const $name: PufError = PufError::new_const($value);
        )*

        #[cfg(test)]
        /// Returns a vector of all defined error constants for testing uniqueness
        pub fn all_constants() -> Vec<(&'static str, u32)> {
            vec![
                $(
                    (stringify!($name), $value),
                )*
            ]
        }
    };
}

impl PufError {
    /// Create a PUF error; intended to only be used from const contexts, as we
    /// don't want runtime panics if val is zero. The preferred way to get a
    /// PufError from a u32 is `PufError::try_from()` from the `TryFrom` trait impl.
    const fn new_const(val: u32) -> Self {
        match NonZeroU32::new(val) {
            Some(val) => Self(val),
            None => panic!("PufError cannot be 0"),
        }
    }

    // Use the macro to define all error constants
    define_error_constants![
        (
            DRIVER_SHA1_INVALID_STATE,
            0x0001_0001,
            "SHA-1 digest operation used after finalization"
        ),
        (
            DRIVER_SHA1_MAX_DATA,
            0x0001_0002,
            "SHA-1 max data size exceeded"
        ),
        (DRIVER_SHA1_INVALID_SLICE, 0x0001_0003, "SHA-1 invalid slice"),
        (
            DRIVER_SHA1_INDEX_OUT_OF_BOUNDS,
            0x0001_0004,
            "SHA-1 staging buffer index out of bounds"
        ),
        (
            ECC_GOLAY_INVALID_MESSAGE_LEN,
            0x0002_0001,
            "Golay message length not a multiple of the message block size"
        ),
        (
            ECC_GOLAY_INVALID_CODEWORD_LEN,
            0x0002_0002,
            "Golay codeword buffer length does not match the message length"
        ),
        (
            ECC_REPETITION_INVALID_MESSAGE_LEN,
            0x0003_0001,
            "Repetition message length is zero"
        ),
        (
            ECC_REPETITION_INVALID_CODEWORD_LEN,
            0x0003_0002,
            "Repetition codeword buffer length does not match the message length"
        ),
        (
            STORAGE_OUT_OF_BOUNDS,
            0x0004_0001,
            "Storage access beyond the device capacity"
        ),
        (
            PUF_CORE_RAM_WINDOW_TOO_SMALL,
            0x0005_0001,
            "SRAM window too small for the configured measurement and seed windows"
        ),
        (
            PUF_CORE_SEED_WINDOW_EMPTY,
            0x0005_0002,
            "Seed sampling window is empty"
        ),
        (
            PUF_CORE_INVALID_MEASUREMENT_LEN,
            0x0005_0003,
            "PUF measurement length does not match the helper data length"
        ),
        (
            PUF_CORE_INVALID_SEED_ORIGIN,
            0x0005_0004,
            "Persisted seed origin code is not a known value"
        ),
        (
            PUF_CORE_INVALID_HELPER_LEN,
            0x0005_0005,
            "Helper data buffer length does not match the configured length"
        ),
        (KAT_DEK_DIGEST_MISMATCH, 0x0006_0001, "DEK hash KAT mismatch"),
        (KAT_SHA1_DIGEST_FAILURE, 0x0006_0002, "SHA-1 KAT digest failure"),
        (KAT_SHA1_DIGEST_MISMATCH, 0x0006_0003, "SHA-1 KAT digest mismatch"),
        (
            KAT_GOLAY_ENCODE_MISMATCH,
            0x0006_0004,
            "Golay KAT encode mismatch"
        ),
        (
            KAT_GOLAY_DECODE_FAILURE,
            0x0006_0005,
            "Golay KAT failed to correct an in-capacity error"
        ),
        (
            KAT_REPETITION_DECODE_FAILURE,
            0x0006_0006,
            "Repetition KAT failed to correct a corrupted copy"
        ),
    ];
}

impl From<PufError> for u32 {
    fn from(val: PufError) -> Self {
        val.0.get()
    }
}

impl From<PufError> for NonZeroU32 {
    fn from(val: PufError) -> Self {
        val.0
    }
}

impl TryFrom<u32> for PufError {
    type Error = TryFromIntError;
    fn try_from(val: u32) -> Result<Self, Self::Error> {
        NonZeroU32::try_from(val).map(PufError)
    }
}

/// Result type used throughout the SRAM PUF subsystem
pub type PufResult<T> = Result<T, PufError>;
