/*++

Licensed under the Apache-2.0 license.

File Name:

    secret.rs

Abstract:

    File contains the secret generator: reconstruction of the stable
    secret identifier from a noisy PUF measurement and the persisted
    helper data.

--*/

use crate::config::{GOLAY_LEN, HELPER_LEN, HELPER_NV_START, SECRET_LEN};
use crate::cprintln;
use crate::puf_env::PufEnv;
use puf_ecc::BlockCode;
use puf_error::{PufError, PufResult};
use zeroize::Zeroize;

use crate::config::{InnerCode, OuterCode};

/// Secret Generator
#[derive(Default, Debug)]
pub struct SecretGenerator {}

impl SecretGenerator {
    /// Reconstruct the secret identifier from a noisy measurement
    ///
    /// Fixed pipeline: XOR the measurement with the helper data to obtain
    /// a noisy codeword, decode outer then inner to recover the enrolled
    /// code offset, re-encode it into a clean codeword, XOR with the
    /// helper data again to obtain a noise-free replica of the enrolled
    /// measurement, and hash that replica into the identifier.
    ///
    /// Decoding only the short code offset and then re-deriving the
    /// full-width measurement removes the noise without collapsing the
    /// identifier's entropy to the offset's length.
    ///
    /// The measurement must cover the same SRAM window, at the same start
    /// address, that was sampled at enrollment time; a drifted window
    /// silently produces a different identifier. Noise beyond the
    /// capability of the cascaded codes does the same - no error is
    /// signaled in either case.
    ///
    /// # Arguments
    ///
    /// * `env` - PUF context
    /// * `measurement` - Raw SRAM window of `HELPER_LEN` bytes
    pub fn generate(env: &mut PufEnv, measurement: &[u8]) -> PufResult<()> {
        if measurement.len() != HELPER_LEN {
            return Err(PufError::PUF_CORE_INVALID_MEASUREMENT_LEN);
        }

        cprintln!("[secret] ++");

        let mut helper = [0u8; HELPER_LEN];
        env.storage.read(HELPER_NV_START, &mut helper)?;

        // Noisy codeword of the enrolled code offset
        let mut codeword = [0u8; HELPER_LEN];
        for (noisy, (h, m)) in codeword.iter_mut().zip(helper.iter().zip(measurement)) {
            *noisy = h ^ m;
        }

        // Correct the noise by decoding outer then inner code
        let mut inner_codeword = [0u8; GOLAY_LEN];
        <OuterCode as BlockCode>::decode(&codeword, &mut inner_codeword)?;
        let mut code_offset = [0u8; SECRET_LEN];
        <InnerCode as BlockCode>::decode(&inner_codeword, &mut code_offset)?;

        // Re-encode to reconstruct the clean full-length codeword
        <InnerCode as BlockCode>::encode(&code_offset, &mut inner_codeword)?;
        <OuterCode as BlockCode>::encode(&inner_codeword, &mut codeword)?;

        // Noise-free replica of the enrolled PUF measurement
        for (clean, h) in codeword.iter_mut().zip(helper.iter()) {
            *clean ^= h;
        }

        let digest = env.sha1.digest(&codeword)?;
        env.state.secret_id = digest.into();

        // Intermediate buffers hold secret-derived material
        code_offset.zeroize();
        inner_codeword.zeroize();
        codeword.zeroize();

        cprintln!("[secret] --");
        Ok(())
    }
}
