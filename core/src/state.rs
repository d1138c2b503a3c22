/*++

Licensed under the Apache-2.0 license.

File Name:

    state.rs

Abstract:

    File contains the reset-surviving PUF state: the soft-reset marker,
    the derived seed with its provenance, the soft-reset counter, the
    secret identifier and the raw measurement holding area.

--*/

use crate::config::{HELPER_LEN, PUF_MARKER};
use puf_error::{PufError, PufResult};
use puf_hashes::SHA1_DIGEST_BYTE_SIZE;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};
#[cfg(feature = "secret")]
use zeroize::Zeroize;

/// Provenance of the current seed value
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u32)]
pub enum SeedOrigin {
    /// Seed was generated from a fresh SRAM start-up pattern
    GeneratedFromPattern = 0,

    /// Reboot without power cycle; the previous seed was mutated and reused
    SoftResetReuse = 1,

    /// Power cycle detected; a fresh generation is expected to follow
    PowerCycleFresh = 2,
}

impl From<SeedOrigin> for u32 {
    fn from(origin: SeedOrigin) -> Self {
        origin as u32
    }
}

impl TryFrom<u32> for SeedOrigin {
    type Error = PufError;

    fn try_from(val: u32) -> PufResult<Self> {
        match val {
            0 => Ok(SeedOrigin::GeneratedFromPattern),
            1 => Ok(SeedOrigin::SoftResetReuse),
            2 => Ok(SeedOrigin::PowerCycleFresh),
            _ => Err(PufError::PUF_CORE_INVALID_SEED_ORIGIN),
        }
    }
}

/// Reset-surviving PUF state
///
/// The boot sequence owns exactly one instance, placed in a RAM region the
/// linker must exclude from zero-initialization so its contents survive a
/// soft reset. On a true power cycle the underlying cells decay and every
/// field reads as noise; the marker mismatch is what makes that detectable.
///
/// The layout is fixed and carries no version information: field order,
/// widths and the configured `HELPER_LEN` must not change between images
/// that share a placement.
#[derive(Clone, FromBytes, Immutable, IntoBytes, KnownLayout)]
#[repr(C)]
pub struct PufState {
    /// Soft-reset marker; equals `PUF_MARKER` after a successful generation
    pub marker: u32,

    /// 32-bit PRNG seed
    pub seed: u32,

    /// Provenance code of the seed, see [`SeedOrigin`]
    pub seed_origin: u32,

    /// Consecutive soft resets since the last power cycle
    pub softreset_count: u32,

    /// Secret identifier; wipe with [`PufState::wipe_secret`] immediately
    /// after use
    pub secret_id: [u8; SHA1_DIGEST_BYTE_SIZE],

    /// Holding copy of the raw start-up pattern, preserved for enrollment
    /// tooling because later boot stages overwrite the sampled SRAM
    pub measurement: [u8; HELPER_LEN],
}

// The zerocopy layout guarantees hold only while the trailing byte arrays
// keep the struct free of padding.
const _: () =
    assert!(core::mem::size_of::<PufState>() == 16 + SHA1_DIGEST_BYTE_SIZE + HELPER_LEN);
const _: () = assert!(core::mem::size_of::<PufState>() % core::mem::align_of::<PufState>() == 0);

impl Default for PufState {
    /// An all-zero state, as used by host tests; the marker is absent, so
    /// the first classification reports a power cycle.
    fn default() -> Self {
        PufState {
            marker: 0,
            seed: 0,
            seed_origin: 0,
            softreset_count: 0,
            secret_id: [0u8; SHA1_DIGEST_BYTE_SIZE],
            measurement: [0u8; HELPER_LEN],
        }
    }
}

impl PufState {
    /// Map the state onto its linker-provided placement
    ///
    /// This is the warm/cold construction path used on hardware: `addr`
    /// must be the start of the never-zero-initialized region reserved for
    /// the PUF state. The contents are taken as-is; after a power cycle
    /// they are uninitialized noise by design.
    ///
    /// # Safety
    ///
    /// `addr` must point to at least `size_of::<PufState>()` bytes of
    /// readable and writable memory, aligned for `PufState`, and no other
    /// reference to that region may exist while the returned one lives.
    pub unsafe fn from_addr<'a>(addr: usize) -> &'a mut PufState {
        assert!(addr != 0);
        assert!(addr % core::mem::align_of::<PufState>() == 0);
        &mut *(addr as *mut PufState)
    }

    /// Check whether the soft-reset marker survived in memory
    pub fn marker_present(&self) -> bool {
        self.marker == PUF_MARKER
    }

    /// Decode the persisted seed provenance code
    pub fn seed_origin(&self) -> PufResult<SeedOrigin> {
        SeedOrigin::try_from(self.seed_origin)
    }

    /// Overwrite the secret identifier with zeroes
    ///
    /// Must be called as soon as the identifier has been consumed. The
    /// write goes through `zeroize` and cannot be optimized away even
    /// though the buffer is never read afterwards.
    #[cfg(feature = "secret")]
    pub fn wipe_secret(&mut self) {
        self.secret_id.zeroize();
    }
}
