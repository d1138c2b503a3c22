/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the SRAM PUF Known Answer Tests.

--*/
#![cfg_attr(not(feature = "std"), no_std)]

mod dek_kat;
mod golay2412_kat;
mod repetition_kat;
mod sha1_kat;

pub use dek_kat::DekKat;
pub use golay2412_kat::Golay2412Kat;
pub use repetition_kat::RepetitionKat;
pub use sha1_kat::Sha1Kat;
