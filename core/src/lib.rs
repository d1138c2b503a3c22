/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the SRAM PUF core.

--*/

//! SRAM PUF core
//!
//! Transistor variations of SRAM cells lead to device-unique states after
//! power-on. This crate samples that start-up pattern at the earliest boot
//! stage and derives from it a 32-bit PRNG seed and, with the `secret`
//! feature, a stable 20-byte device identifier reconstructed against
//! enrolled helper data.
//!
//! High entropy is only available when the device comes out of an actual
//! power-off. A marker written into reset-surviving RAM detects reboots
//! without a power cycle; on such soft resets the previous seed is mutated
//! instead of re-derived, so the seed is never byte-identical across the
//! chain yet never pretends to be fresh entropy.
//!
//! The seed path is not cryptographically secure: the DEK compression is
//! reversible enough that PRNG output may leak parts of the start-up
//! pattern. The secret path exists for callers that need a device identity
//! and accept the enrollment precondition.

#![cfg_attr(not(feature = "std"), no_std)]

mod classifier;
pub mod config;
mod init;
pub mod print;
mod puf_env;
mod seed;
mod state;

cfg_if::cfg_if! {
    if #[cfg(feature = "secret")] {
        mod enroll;
        mod secret;

        pub use enroll::Enrollment;
        pub use secret::SecretGenerator;
    }
}

pub use classifier::{ResetClassifier, ResetReason};
pub use init::PufInitFlow;
pub use puf_env::PufEnv;
pub use seed::SeedGenerator;
pub use state::{PufState, SeedOrigin};
