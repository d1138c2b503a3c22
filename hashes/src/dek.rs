/*++

Licensed under the Apache-2.0 license.

File Name:

    dek.rs

Abstract:

    File contains the DEK compression hash used to condense a noisy SRAM
    start-up pattern into a 32-bit PRNG seed.

--*/

/// Compress a byte buffer into a 32-bit value with the DEK hash
///
/// The accumulator is seeded with the buffer length; each byte is folded in
/// by rotating the accumulator left by five bits and XOR-ing the byte. This
/// hash is fast and allocation free but NOT cryptographically secure; it must
/// never be used to derive secret material.
///
/// # Arguments
///
/// * `data` - Buffer to compress
///
/// # Returns
///
/// * `u32` - Compressed value
pub fn dek_hash(data: &[u8]) -> u32 {
    let mut hash = data.len() as u32;
    for &byte in data {
        hash = hash.rotate_left(5) ^ u32::from(byte);
    }
    hash
}
