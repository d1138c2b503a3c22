/*++

Licensed under the Apache-2.0 license.

File Name:

    config.rs

Abstract:

    The file contains the compile-time configuration of the SRAM PUF
    subsystem: window lengths, the non-volatile helper data placement and
    the codec composition.

--*/

use puf_ecc::{Golay2412, Repetition};

/// Memory marker written after every successful seed generation
///
/// Its presence across a reboot is the sole signal distinguishing a soft
/// reset from a power cycle. ASCII "PUFS".
pub const PUF_MARKER: u32 = 0x5055_4653;

/// Default SRAM length considered for seed generation
pub const SEED_RAM_LEN: usize = 512;

/// Length of the random code offset encoded during enrollment
///
/// Determines the helper data length and with it the width of the PUF
/// response backing the secret identifier.
pub const SECRET_LEN: usize = 6;

/// Length of the inner-encoded secret
pub const GOLAY_LEN: usize = 2 * SECRET_LEN;

/// Number of copies produced by the outer repetition encoder
pub const REPETITION_COUNT: usize = 7;

/// Length of the doubly-encoded secret and of the helper data blob
pub const HELPER_LEN: usize = REPETITION_COUNT * GOLAY_LEN;

/// Start offset of the helper data blob in non-volatile storage
pub const HELPER_NV_START: usize = 0;

/// Offset of the seed sampling window within the SRAM region
///
/// Non-zero exactly when the secret feature consumed the leading
/// `HELPER_LEN` bytes of the window for its own measurement.
#[cfg(feature = "secret")]
pub const SEED_OFFSET: usize = HELPER_LEN;

/// Offset of the seed sampling window within the SRAM region
#[cfg(not(feature = "secret"))]
pub const SEED_OFFSET: usize = 0;

/// Inner code of the reconstruction pipeline
pub type InnerCode = Golay2412;

/// Outer code of the reconstruction pipeline
pub type OuterCode = Repetition<REPETITION_COUNT>;

const _: () = assert!(SECRET_LEN % Golay2412::MESSAGE_BLOCK_SIZE == 0);
const _: () = assert!(
    GOLAY_LEN == SECRET_LEN / Golay2412::MESSAGE_BLOCK_SIZE * Golay2412::CODEWORD_BLOCK_SIZE
);
const _: () = assert!(HELPER_LEN == REPETITION_COUNT * GOLAY_LEN);
