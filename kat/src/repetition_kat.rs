/*++

Licensed under the Apache-2.0 license.

File Name:

    repetition_kat.rs

Abstract:

    File contains the Known Answer Test (KAT) for the repetition codec.

--*/

use puf_ecc::Repetition;
use puf_error::{PufError, PufResult};

// The KAT pins the codec implementation with its own fixed parameters; the
// deployed repetition factor is a deployment configuration, not part of
// the algorithm under test.
const KAT_COPIES: usize = 7;
const KAT_MESSAGE: [u8; 4] = [0xC3, 0x3C, 0x0F, 0xF0];

/// Repetition code Known Answer Test
#[derive(Default, Debug)]
pub struct RepetitionKat {}

impl RepetitionKat {
    /// Execute the Known Answer Test for the repetition codec
    ///
    /// Checks the round trip and that a fully corrupted copy is out-voted
    /// on decode.
    ///
    /// # Returns
    ///
    /// * `PufResult` - Result denoting the KAT outcome
    pub fn execute(&self) -> PufResult<()> {
        let mut codeword = [0u8; KAT_COPIES * KAT_MESSAGE.len()];
        Repetition::<KAT_COPIES>::encode(&KAT_MESSAGE, &mut codeword)
            .map_err(|_| PufError::KAT_REPETITION_DECODE_FAILURE)?;

        for byte in &mut codeword[2 * KAT_MESSAGE.len()..3 * KAT_MESSAGE.len()] {
            *byte = !*byte;
        }

        let mut decoded = [0u8; KAT_MESSAGE.len()];
        Repetition::<KAT_COPIES>::decode(&codeword, &mut decoded)
            .map_err(|_| PufError::KAT_REPETITION_DECODE_FAILURE)?;
        if decoded != KAT_MESSAGE {
            return Err(PufError::KAT_REPETITION_DECODE_FAILURE);
        }

        Ok(())
    }
}
