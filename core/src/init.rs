/*++

Licensed under the Apache-2.0 license.

File Name:

    init.rs

Abstract:

    File contains the top level PUF boot flow: measurement preservation,
    known answer tests, reset classification and the dispatch into seed
    and secret derivation.

--*/

use crate::classifier::{ResetClassifier, ResetReason};
use crate::config::{HELPER_LEN, SEED_OFFSET};
use crate::cprintln;
use crate::puf_env::PufEnv;
use crate::seed::SeedGenerator;
#[cfg(feature = "secret")]
use crate::secret::SecretGenerator;
use puf_error::{PufError, PufResult};
use puf_kat::DekKat;
#[cfg(feature = "secret")]
use puf_kat::{Golay2412Kat, RepetitionKat, Sha1Kat};

/// PUF Init Flow
pub struct PufInitFlow {}

impl PufInitFlow {
    /// Execute the PUF boot flow
    ///
    /// Runs at the earliest point after reset, before any kernel or
    /// scheduler initialization: no dynamic allocation, bounded stack, and
    /// no peripheral use except the single helper-data read performed by
    /// the secret generator, which the calling environment must guarantee
    /// is available at this boot stage.
    ///
    /// `ram` is the configured SRAM sampling region, which must never be
    /// zero-initialized by the loader. The leading `HELPER_LEN` bytes form
    /// the secret measurement window; the seed window of
    /// `seed_window_len` bytes starts at `SEED_OFFSET`.
    ///
    /// # Arguments
    ///
    /// * `env` - PUF context
    /// * `ram` - Raw SRAM sampling region
    /// * `seed_window_len` - Length of the seed sampling window in bytes
    ///
    /// # Returns
    ///
    /// * `ResetReason` - The classification this boot was dispatched on
    #[inline(never)]
    pub fn run(env: &mut PufEnv, ram: &[u8], seed_window_len: usize) -> PufResult<ResetReason> {
        cprintln!("[puf-init] ++");

        if seed_window_len == 0 {
            return Err(PufError::PUF_CORE_SEED_WINDOW_EMPTY);
        }
        let seed_window_end = SEED_OFFSET
            .checked_add(seed_window_len)
            .ok_or(PufError::PUF_CORE_RAM_WINDOW_TOO_SMALL)?;
        if ram.len() < HELPER_LEN || ram.len() < seed_window_end {
            return Err(PufError::PUF_CORE_RAM_WINDOW_TOO_SMALL);
        }

        // Preserve the raw pattern before later boot stages overwrite the
        // sampled region; enrollment tooling reads it back from here.
        env.state.measurement.copy_from_slice(&ram[..HELPER_LEN]);

        execute_kat(env)?;

        let reason = ResetClassifier::classify(env.state);
        match reason {
            ResetReason::PowerCycle => {
                cprintln!("[puf-init] power cycle, deriving from fresh pattern");

                #[cfg(feature = "secret")]
                SecretGenerator::generate(env, &ram[..HELPER_LEN])?;

                SeedGenerator::generate(env.state, &ram[SEED_OFFSET..seed_window_end])?;
            }
            ResetReason::SoftReset => {
                // The classifier already mutated the seed; a fresh
                // derivation here would reuse tainted entropy.
                cprintln!("[puf-init] soft reset, reusing mutated seed");
            }
        }

        cprintln!("[puf-init] --");
        Ok(reason)
    }
}

/// Execute the known answer tests for every primitive this boot relies on
///
/// # Arguments
///
/// * `env` - PUF context
#[cfg_attr(not(feature = "secret"), allow(unused_variables))]
fn execute_kat(env: &mut PufEnv) -> PufResult<()> {
    cprintln!("[kat] ++");

    DekKat::default().execute()?;

    #[cfg(feature = "secret")]
    {
        Sha1Kat::default().execute(&mut env.sha1)?;
        Golay2412Kat::default().execute()?;
        RepetitionKat::default().execute()?;
    }

    cprintln!("[kat] --");
    Ok(())
}
