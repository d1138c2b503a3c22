/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the error-correction codes used to remove
    noise from SRAM PUF measurements.

--*/
#![cfg_attr(not(feature = "std"), no_std)]

mod golay2412;
mod repetition;

pub use golay2412::Golay2412;
pub use repetition::Repetition;

use puf_error::PufResult;

/// Contract for a fixed-rate block code
///
/// A codec transforms `MESSAGE_BLOCK_SIZE` message bytes into
/// `CODEWORD_BLOCK_SIZE` codeword bytes per step; buffers must be exact
/// multiples of the respective block sizes. Decoding is best effort: error
/// patterns beyond the code's correction capability produce a wrong message
/// with no error signaled.
pub trait BlockCode {
    /// Message bytes consumed per encode step
    const MESSAGE_BLOCK_SIZE: usize;

    /// Codeword bytes produced per encode step
    const CODEWORD_BLOCK_SIZE: usize;

    /// Encode `msg` into `codeword`
    ///
    /// `codeword` must be exactly `msg.len() * CODEWORD_BLOCK_SIZE /
    /// MESSAGE_BLOCK_SIZE` bytes.
    fn encode(msg: &[u8], codeword: &mut [u8]) -> PufResult<()>;

    /// Decode `codeword` into `msg`, correcting in-capacity errors
    ///
    /// `msg` must be exactly `codeword.len() * MESSAGE_BLOCK_SIZE /
    /// CODEWORD_BLOCK_SIZE` bytes.
    fn decode(codeword: &[u8], msg: &mut [u8]) -> PufResult<()>;
}
