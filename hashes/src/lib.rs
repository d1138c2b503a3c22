/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the SRAM PUF hash primitives.

--*/
#![cfg_attr(not(feature = "std"), no_std)]

mod dek;
mod sha1;

pub use dek::dek_hash;
pub use sha1::{Sha1, Sha1Digest, Sha1DigestOp, SHA1_BLOCK_BYTE_SIZE, SHA1_DIGEST_BYTE_SIZE};
