/*++

Licensed under the Apache-2.0 license.

File Name:

    secret_flow_tests.rs

Abstract:

    File contains end-to-end tests of enrollment and secret identifier
    reconstruction, including the golden vector and the noise boundary.

--*/

#![cfg(feature = "secret")]

use puf_core::config::{HELPER_LEN, HELPER_NV_START, SECRET_LEN, SEED_RAM_LEN};
use puf_core::{Enrollment, PufEnv, PufInitFlow, PufState, ResetReason, SecretGenerator};
use puf_error::PufError;
use puf_storage::{NvStorage, RamNvStorage};

const CODE_OFFSET: [u8; SECRET_LEN] = [1; SECRET_LEN];

/// Helper blob for `CODE_OFFSET` over the reference measurement.
#[cfg_attr(rustfmt, rustfmt_skip)]
const GOLDEN_HELPER: [u8; HELPER_LEN] = [
    0x02, 0x08, 0xCC, 0x08, 0x0E, 0xF5, 0x2C, 0x36, 0xE6, 0x52, 0x58, 0x83,
    0x56, 0x5C, 0xB8, 0x7C, 0x62, 0xA9, 0x80, 0x8A, 0x52, 0x86, 0x8C, 0x77,
    0xAA, 0xB0, 0x64, 0xD0, 0xD6, 0x1D, 0xD4, 0xDE, 0x3E, 0xFA, 0xE0, 0x2B,
    0xFE, 0x04, 0xD0, 0x04, 0x0A, 0xF1, 0x28, 0x32, 0xEA, 0x2E, 0x54, 0x9F,
    0x52, 0x58, 0xBC, 0x78, 0x7E, 0xA5, 0x7C, 0x86, 0x56, 0x82, 0x88, 0x73,
    0xA6, 0xAC, 0x68, 0xAC, 0xD2, 0x19, 0xD0, 0xDA, 0x02, 0xF6, 0xFC, 0x27,
    0xFA, 0x00, 0xD4, 0x00, 0x06, 0xCD, 0x24, 0x2E, 0xEE, 0x2A, 0x50, 0x9B,
];

/// SHA-1 of the reference measurement (the noise-free reconstruction).
#[cfg_attr(rustfmt, rustfmt_skip)]
const GOLDEN_ID: [u8; 20] = [
    0x1F, 0x2C, 0x17, 0x4A, 0x36, 0x87, 0xD3, 0xB1, 0x11, 0x8A,
    0x13, 0x87, 0x79, 0xF2, 0x54, 0x27, 0x3F, 0xC7, 0x8F, 0x6C,
];

/// SHA-1 of the bitwise complement of the reference measurement; what the
/// pipeline reconstructs when a majority of repetition copies is inverted.
#[cfg_attr(rustfmt, rustfmt_skip)]
const COMPLEMENT_ID: [u8; 20] = [
    0x8B, 0x03, 0xFE, 0xAD, 0x47, 0xC5, 0xB0, 0xDD, 0x9D, 0x6D,
    0xE9, 0xB1, 0x6E, 0x0A, 0xE6, 0xEC, 0xE1, 0xF9, 0x78, 0x7B,
];

fn reference_measurement() -> [u8; HELPER_LEN] {
    let mut measurement = [0u8; HELPER_LEN];
    for (i, byte) in measurement.iter_mut().enumerate() {
        *byte = ((i * 7 + 3) & 0xFF) as u8;
    }
    measurement
}

fn enrolled_storage() -> RamNvStorage<128> {
    let mut storage = RamNvStorage::<128>::default();
    Enrollment::enroll(&mut storage, &CODE_OFFSET, &reference_measurement()).unwrap();
    storage
}

#[test]
fn test_enrollment_writes_golden_helper_blob() {
    let storage = enrolled_storage();
    let mut helper = [0u8; HELPER_LEN];
    storage.read(HELPER_NV_START, &mut helper).unwrap();
    assert_eq!(helper, GOLDEN_HELPER);
}

#[test]
fn test_reconstruction_yields_golden_identifier() {
    let mut storage = enrolled_storage();
    let mut state = PufState::default();
    let mut env = PufEnv::new(&mut storage, &mut state);

    SecretGenerator::generate(&mut env, &reference_measurement()).unwrap();
    assert_eq!(state.secret_id, GOLDEN_ID);
}

#[test]
fn test_reconstruction_corrects_in_capacity_noise() {
    let mut storage = enrolled_storage();
    let mut state = PufState::default();
    let mut env = PufEnv::new(&mut storage, &mut state);

    // Three of the seven repetition copies fully inverted: the four
    // intact copies win every majority vote.
    let mut measurement = reference_measurement();
    for copy in [1, 3, 5] {
        for byte in &mut measurement[copy * 12..(copy + 1) * 12] {
            *byte ^= 0xFF;
        }
    }

    SecretGenerator::generate(&mut env, &measurement).unwrap();
    assert_eq!(state.secret_id, GOLDEN_ID);
}

#[test]
fn test_reconstruction_tolerates_scattered_bit_noise() {
    let mut storage = enrolled_storage();
    let mut state = PufState::default();
    let mut env = PufEnv::new(&mut storage, &mut state);

    // A few flips per copy, never more than three copies per bit position.
    let mut measurement = reference_measurement();
    measurement[0] ^= 0x01;
    measurement[12] ^= 0x01;
    measurement[24] ^= 0x01;
    measurement[7] ^= 0x80;
    measurement[31] ^= 0x80;
    measurement[55] ^= 0x10;
    measurement[83] ^= 0x42;

    SecretGenerator::generate(&mut env, &measurement).unwrap();
    assert_eq!(state.secret_id, GOLDEN_ID);
}

#[test]
fn test_excess_noise_silently_changes_identifier() {
    let mut storage = enrolled_storage();
    let mut state = PufState::default();
    let mut env = PufEnv::new(&mut storage, &mut state);

    // Four of seven copies inverted: every majority vote flips, and the
    // complemented codeword is itself a valid codeword, so the decode
    // accepts it. The pipeline must complete without signaling an error
    // and deterministically reconstructs the complemented measurement.
    let mut measurement = reference_measurement();
    for copy in [0, 1, 3, 5] {
        for byte in &mut measurement[copy * 12..(copy + 1) * 12] {
            *byte ^= 0xFF;
        }
    }

    SecretGenerator::generate(&mut env, &measurement).unwrap();
    assert_ne!(state.secret_id, GOLDEN_ID);
    assert_eq!(state.secret_id, COMPLEMENT_ID);
}

#[test]
fn test_wipe_secret_destroys_identifier() {
    let mut storage = enrolled_storage();
    let mut state = PufState::default();
    let mut env = PufEnv::new(&mut storage, &mut state);

    SecretGenerator::generate(&mut env, &reference_measurement()).unwrap();
    assert_ne!(state.secret_id, [0u8; 20]);

    state.wipe_secret();
    assert_eq!(state.secret_id, [0u8; 20]);
}

#[test]
fn test_measurement_length_validated() {
    let mut storage = enrolled_storage();
    let mut state = PufState::default();
    let mut env = PufEnv::new(&mut storage, &mut state);

    assert_eq!(
        SecretGenerator::generate(&mut env, &[0u8; HELPER_LEN - 1]),
        Err(PufError::PUF_CORE_INVALID_MEASUREMENT_LEN)
    );

    let mut helper = [0u8; HELPER_LEN];
    assert_eq!(
        Enrollment::generate_helper(&CODE_OFFSET, &[0u8; 3], &mut helper),
        Err(PufError::PUF_CORE_INVALID_MEASUREMENT_LEN)
    );
    assert_eq!(
        Enrollment::generate_helper(
            &CODE_OFFSET,
            &reference_measurement(),
            &mut helper[..HELPER_LEN - 1]
        ),
        Err(PufError::PUF_CORE_INVALID_HELPER_LEN)
    );
}

#[test]
fn test_storage_read_failure_propagates() {
    // Device too small to hold the helper blob; the single read fails and
    // the core does not retry.
    let mut storage = RamNvStorage::<16>::default();
    let mut state = PufState::default();
    let mut env = PufEnv::new(&mut storage, &mut state);

    assert_eq!(
        SecretGenerator::generate(&mut env, &reference_measurement()),
        Err(PufError::STORAGE_OUT_OF_BOUNDS)
    );
}

#[test]
fn test_boot_flow_reconstructs_secret_then_seed() {
    // Simulated SRAM: the leading HELPER_LEN bytes are the enrolled
    // window, the seed window follows.
    let mut ram = [0u8; HELPER_LEN + SEED_RAM_LEN];
    ram[..HELPER_LEN].copy_from_slice(&reference_measurement());
    for (i, byte) in ram[HELPER_LEN..].iter_mut().enumerate() {
        *byte = (i & 0xFF) as u8;
    }

    let mut storage = enrolled_storage();
    let mut state = PufState::default();
    let mut env = PufEnv::new(&mut storage, &mut state);

    let reason = PufInitFlow::run(&mut env, &ram, SEED_RAM_LEN).unwrap();
    assert_eq!(reason, ResetReason::PowerCycle);
    assert_eq!(state.secret_id, GOLDEN_ID);
    assert_ne!(state.seed, 0);

    // A soft reset reuses the mutated seed and does not regenerate the
    // wiped secret.
    state.wipe_secret();
    let mut env = PufEnv::new(&mut storage, &mut state);
    let reason = PufInitFlow::run(&mut env, &ram, SEED_RAM_LEN).unwrap();
    assert_eq!(reason, ResetReason::SoftReset);
    assert_eq!(state.secret_id, [0u8; 20]);
}
