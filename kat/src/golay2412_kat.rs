/*++

Licensed under the Apache-2.0 license.

File Name:

    golay2412_kat.rs

Abstract:

    File contains the Known Answer Test (KAT) for the Golay(24,12) codec.

--*/

use puf_ecc::Golay2412;
use puf_error::{PufError, PufResult};

const KAT_MESSAGE: [u8; 3] = [0x12, 0x34, 0x56];
const EXPECTED_CODEWORD: [u8; 6] = [0x12, 0x36, 0x5F, 0x45, 0x6C, 0x73];

/// Golay(24,12) Known Answer Test
#[derive(Default, Debug)]
pub struct Golay2412Kat {}

impl Golay2412Kat {
    /// Execute the Known Answer Test for the Golay codec
    ///
    /// Checks the golden codeword and that a single bit error is
    /// corrected on decode.
    ///
    /// # Returns
    ///
    /// * `PufResult` - Result denoting the KAT outcome
    pub fn execute(&self) -> PufResult<()> {
        let mut codeword = [0u8; 6];
        Golay2412::encode(&KAT_MESSAGE, &mut codeword)
            .map_err(|_| PufError::KAT_GOLAY_ENCODE_MISMATCH)?;
        if codeword != EXPECTED_CODEWORD {
            return Err(PufError::KAT_GOLAY_ENCODE_MISMATCH);
        }

        codeword[1] ^= 0x40;

        let mut decoded = [0u8; 3];
        Golay2412::decode(&codeword, &mut decoded)
            .map_err(|_| PufError::KAT_GOLAY_DECODE_FAILURE)?;
        if decoded != KAT_MESSAGE {
            return Err(PufError::KAT_GOLAY_DECODE_FAILURE);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golay_kat() {
        Golay2412Kat::default().execute().unwrap();
    }
}
