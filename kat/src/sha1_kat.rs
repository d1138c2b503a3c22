/*++

Licensed under the Apache-2.0 license.

File Name:

    sha1_kat.rs

Abstract:

    File contains the Known Answer Test (KAT) for the SHA-1 digest.

--*/

use puf_error::{PufError, PufResult};
use puf_hashes::{Sha1, Sha1Digest};

const EXPECTED_DIGEST: Sha1Digest =
    Sha1Digest([0xda39a3ee, 0x5e6b4b0d, 0x3255bfef, 0x95601890, 0xafd80709]);

/// SHA-1 Known Answer Test
#[derive(Default, Debug)]
pub struct Sha1Kat {}

impl Sha1Kat {
    /// Execute the Known Answer Test for SHA-1
    ///
    /// Test vector source:
    /// https://csrc.nist.gov/CSRC/media/Projects/Cryptographic-Algorithm-Validation-Program/documents/shs/shabytetestvectors.zip
    ///
    /// # Arguments
    ///
    /// * `sha` - SHA-1 engine
    ///
    /// # Returns
    ///
    /// * `PufResult` - Result denoting the KAT outcome
    pub fn execute(&self, sha: &mut Sha1) -> PufResult<()> {
        self.kat_no_data(sha)
    }

    fn kat_no_data(&self, sha: &mut Sha1) -> PufResult<()> {
        let digest = sha
            .digest(&[])
            .map_err(|_| PufError::KAT_SHA1_DIGEST_FAILURE)?;

        if digest != EXPECTED_DIGEST {
            return Err(PufError::KAT_SHA1_DIGEST_MISMATCH);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha1_kat() {
        let mut sha = Sha1::default();
        Sha1Kat::default().execute(&mut sha).unwrap();
    }
}
