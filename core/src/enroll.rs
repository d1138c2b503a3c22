/*++

Licensed under the Apache-2.0 license.

File Name:

    enroll.rs

Abstract:

    File contains the one-time enrollment that derives the public helper
    data blob from a reference PUF measurement in a trusted environment.

--*/

use crate::config::{GOLAY_LEN, HELPER_LEN, HELPER_NV_START, SECRET_LEN};
use crate::config::{InnerCode, OuterCode};
use puf_ecc::BlockCode;
use puf_error::{PufError, PufResult};
use puf_storage::NvStorage;
use zeroize::Zeroize;

/// Enrollment
///
/// Runs once per device in a trusted environment. The helper data it
/// produces is public; possession of the blob without the device's PUF
/// response does not reveal the code offset or the identifier.
#[derive(Default, Debug)]
pub struct Enrollment {}

impl Enrollment {
    /// Derive helper data from a code offset and a reference measurement
    ///
    /// The helper blob is `encode(code_offset) XOR measurement` with the
    /// same inner-then-outer encoding the reconstruction decodes. Every
    /// later reconstruction must sample the same SRAM window that
    /// `measurement` was taken from.
    ///
    /// # Arguments
    ///
    /// * `code_offset` - Randomly chosen secret payload
    /// * `measurement` - Reference PUF measurement of `HELPER_LEN` bytes
    /// * `helper` - Output buffer of `HELPER_LEN` bytes
    pub fn generate_helper(
        code_offset: &[u8; SECRET_LEN],
        measurement: &[u8],
        helper: &mut [u8],
    ) -> PufResult<()> {
        if measurement.len() != HELPER_LEN {
            return Err(PufError::PUF_CORE_INVALID_MEASUREMENT_LEN);
        }
        if helper.len() != HELPER_LEN {
            return Err(PufError::PUF_CORE_INVALID_HELPER_LEN);
        }

        let mut inner_codeword = [0u8; GOLAY_LEN];
        <InnerCode as BlockCode>::encode(code_offset, &mut inner_codeword)?;
        let mut codeword = [0u8; HELPER_LEN];
        <OuterCode as BlockCode>::encode(&inner_codeword, &mut codeword)?;

        for (h, (c, m)) in helper.iter_mut().zip(codeword.iter().zip(measurement)) {
            *h = c ^ m;
        }

        inner_codeword.zeroize();
        codeword.zeroize();
        Ok(())
    }

    /// Generate helper data and persist it at the configured offset
    ///
    /// # Arguments
    ///
    /// * `storage` - Non-volatile storage driver
    /// * `code_offset` - Randomly chosen secret payload
    /// * `measurement` - Reference PUF measurement of `HELPER_LEN` bytes
    pub fn enroll(
        storage: &mut dyn NvStorage,
        code_offset: &[u8; SECRET_LEN],
        measurement: &[u8],
    ) -> PufResult<()> {
        let mut helper = [0u8; HELPER_LEN];
        Self::generate_helper(code_offset, measurement, &mut helper)?;

        storage.erase(HELPER_NV_START, HELPER_LEN)?;
        storage.write(HELPER_NV_START, &helper)
    }
}
