/*++

Licensed under the Apache-2.0 license.

File Name:

    dek_kat.rs

Abstract:

    File contains the Known Answer Test (KAT) for the DEK compression hash.

--*/

use puf_error::{PufError, PufResult};
use puf_hashes::dek_hash;

#[cfg_attr(rustfmt, rustfmt_skip)]
const KAT_DATA: [u8; 16] = [
    0xA5, 0xA5, 0xA5, 0xA5, 0x00, 0x01, 0x02, 0x03,
    0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B,
];

const EXPECTED_HASH: u32 = 0x1C65_666A;

/// DEK hash Known Answer Test
#[derive(Default, Debug)]
pub struct DekKat {}

impl DekKat {
    /// Execute the Known Answer Test for the DEK compression hash
    ///
    /// # Returns
    ///
    /// * `PufResult` - Result denoting the KAT outcome
    pub fn execute(&self) -> PufResult<()> {
        if dek_hash(&KAT_DATA) != EXPECTED_HASH {
            return Err(PufError::KAT_DEK_DIGEST_MISMATCH);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dek_kat() {
        DekKat::default().execute().unwrap();
    }
}
