/*++

Licensed under the Apache-2.0 license.

File Name:

    classifier.rs

Abstract:

    File contains the reset classifier: the marker-based distinction
    between a soft reset and a power cycle, and the seed mutation applied
    on every detected soft reset.

--*/

use crate::cprintln;
use crate::state::{PufState, SeedOrigin};
use puf_hashes::dek_hash;

/// Reset Reason
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum ResetReason {
    /// Reboot after power loss; SRAM contents are fresh noise
    PowerCycle,

    /// Reboot without power loss; SRAM contents survived
    SoftReset,
}

/// Reset Classifier
///
/// Two states, one irreversible transition: a power cycle moves the device
/// into the soft-reset chain (the seed generator writes the marker), and
/// only an actual power loss, which destroys the marker, moves it back.
#[derive(Default, Debug)]
pub struct ResetClassifier {}

impl ResetClassifier {
    /// Classify the reset that led to the current boot
    ///
    /// A missing or mismatched marker means the RAM cells decayed: the
    /// counter is cleared and the caller is expected to derive a fresh
    /// seed. A matching marker means the previous boot's state survived:
    /// the soft-reset counter is incremented and the seed is mutated by
    /// XOR-ing in the counter and re-hashing, so no two soft reboots
    /// observe an identical seed.
    ///
    /// # Arguments
    ///
    /// * `state` - Reset-surviving PUF state
    pub fn classify(state: &mut PufState) -> ResetReason {
        if !state.marker_present() {
            state.seed_origin = SeedOrigin::PowerCycleFresh.into();
            state.softreset_count = 0;
            return ResetReason::PowerCycle;
        }

        state.seed_origin = SeedOrigin::SoftResetReuse.into();
        state.softreset_count = state.softreset_count.wrapping_add(1);

        // Alternative seed: no longer rooted in fresh hardware entropy,
        // but never byte-identical across the soft-reset chain. The hash
        // input is exactly the four little-endian bytes of seed ^ counter.
        let perturbed = state.seed ^ state.softreset_count;
        state.seed = dek_hash(&perturbed.to_le_bytes());

        cprintln!(
            "[classify] soft reset #{}, seed mutated",
            state.softreset_count
        );
        ResetReason::SoftReset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PUF_MARKER;

    #[test]
    fn test_missing_marker_classifies_power_cycle() {
        let mut state = PufState {
            softreset_count: 17,
            seed_origin: SeedOrigin::SoftResetReuse.into(),
            ..Default::default()
        };

        assert_eq!(
            ResetClassifier::classify(&mut state),
            ResetReason::PowerCycle
        );
        assert_eq!(state.seed_origin().unwrap(), SeedOrigin::PowerCycleFresh);
        assert_eq!(state.softreset_count, 0);
    }

    #[test]
    fn test_mismatched_marker_classifies_power_cycle() {
        let mut state = PufState {
            marker: PUF_MARKER ^ 1,
            ..Default::default()
        };

        assert_eq!(
            ResetClassifier::classify(&mut state),
            ResetReason::PowerCycle
        );
    }

    #[test]
    fn test_marker_classifies_soft_reset_and_counts() {
        let mut state = PufState {
            marker: PUF_MARKER,
            seed: 0x4432_1CC7,
            ..Default::default()
        };

        assert_eq!(
            ResetClassifier::classify(&mut state),
            ResetReason::SoftReset
        );
        assert_eq!(state.seed_origin().unwrap(), SeedOrigin::SoftResetReuse);
        assert_eq!(state.softreset_count, 1);
        assert_eq!(state.seed, 0x0023_7604);

        assert_eq!(
            ResetClassifier::classify(&mut state),
            ResetReason::SoftReset
        );
        assert_eq!(state.softreset_count, 2);
        assert_eq!(state.seed, 0x0042_DC60);
    }

    #[test]
    fn test_soft_reset_always_changes_seed() {
        let mut state = PufState {
            marker: PUF_MARKER,
            seed: 0xDEAD_BEEF,
            ..Default::default()
        };

        let mut previous = state.seed;
        for _ in 0..32 {
            ResetClassifier::classify(&mut state);
            assert_ne!(state.seed, previous);
            previous = state.seed;
        }
    }
}
