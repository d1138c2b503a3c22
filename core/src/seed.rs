/*++

Licensed under the Apache-2.0 license.

File Name:

    seed.rs

Abstract:

    File contains the seed generator: compression of an uninitialized
    SRAM window into a 32-bit PRNG seed.

--*/

use crate::config::PUF_MARKER;
use crate::cprintln;
use crate::state::{PufState, SeedOrigin};
use puf_error::{PufError, PufResult};
use puf_hashes::dek_hash;

/// Seed Generator
#[derive(Default, Debug)]
pub struct SeedGenerator {}

impl SeedGenerator {
    /// Derive a fresh seed from an uninitialized SRAM pattern
    ///
    /// Compresses the pattern, stores the seed, writes the soft-reset
    /// marker for the next boot's classification, records the provenance
    /// and clears the soft-reset counter.
    ///
    /// Must only run after a power-cycle classification: on a soft reset
    /// the pattern is no longer fresh entropy (the marker write and the
    /// previous execution already tainted it).
    ///
    /// # Arguments
    ///
    /// * `state` - Reset-surviving PUF state
    /// * `pattern` - Uninitialized SRAM window to compress
    ///
    /// # Returns
    ///
    /// * `u32` - The derived seed
    pub fn generate(state: &mut PufState, pattern: &[u8]) -> PufResult<u32> {
        if pattern.is_empty() {
            return Err(PufError::PUF_CORE_SEED_WINDOW_EMPTY);
        }

        state.seed = dek_hash(pattern);
        state.marker = PUF_MARKER;
        state.seed_origin = SeedOrigin::GeneratedFromPattern.into();
        state.softreset_count = 0;

        cprintln!("[seed] generated from {} byte pattern", pattern.len());
        Ok(state.seed)
    }
}
