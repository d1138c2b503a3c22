/*++

Licensed under the Apache-2.0 license.

File Name:

    sha1.rs

Abstract:

    File contains a software SHA-1 implementation used to compress a
    corrected PUF response into a fixed-length secret identifier.

--*/

use puf_error::{PufError, PufResult};
use zeroize::Zeroize;

/// SHA-1 block size in bytes
pub const SHA1_BLOCK_BYTE_SIZE: usize = 64;

/// SHA-1 digest size in bytes
pub const SHA1_DIGEST_BYTE_SIZE: usize = 20;

const SHA1_BLOCK_LEN_OFFSET: usize = 56;

/// Maximum supported input size; bounds the bit-length arithmetic for the
/// fixed-size buffers this subsystem digests.
const SHA1_MAX_DATA_SIZE: usize = 64 * 1024;

/// SHA-1 digest
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Zeroize)]
pub struct Sha1Digest(pub [u32; 5]);

impl From<Sha1Digest> for [u8; SHA1_DIGEST_BYTE_SIZE] {
    #[inline(never)]
    fn from(value: Sha1Digest) -> Self {
        let mut result = [0u8; SHA1_DIGEST_BYTE_SIZE];
        for (chunk, word) in result.chunks_exact_mut(4).zip(value.0.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        result
    }
}

impl From<[u8; SHA1_DIGEST_BYTE_SIZE]> for Sha1Digest {
    #[inline(never)]
    fn from(value: [u8; SHA1_DIGEST_BYTE_SIZE]) -> Self {
        let mut result = Sha1Digest([0u32; 5]);
        for (word, chunk) in result.0.iter_mut().zip(value.chunks_exact(4)) {
            *word = u32::from_be_bytes(chunk.try_into().unwrap());
        }
        result
    }
}

/// SHA-1 Engine
#[derive(Default)]
pub struct Sha1 {
    compressor: Sha1Compressor,
}

impl Sha1 {
    /// Initialize a multi step digest operation
    ///
    /// # Returns
    ///
    /// * `Sha1DigestOp` - Object representing the digest operation
    pub fn digest_init(&mut self) -> PufResult<Sha1DigestOp<'_>> {
        Ok(Sha1DigestOp {
            sha: self,
            state: Sha1DigestState::Init,
            buf: [0u8; SHA1_BLOCK_BYTE_SIZE],
            buf_idx: 0,
            data_size: 0,
        })
    }

    /// Calculate the digest of the buffer
    ///
    /// # Arguments
    ///
    /// * `buf` - Buffer to calculate the digest over
    pub fn digest(&mut self, buf: &[u8]) -> PufResult<Sha1Digest> {
        if buf.len() > SHA1_MAX_DATA_SIZE {
            return Err(PufError::DRIVER_SHA1_MAX_DATA);
        }

        let mut first = true;
        let mut bytes_remaining = buf.len();

        loop {
            let offset = buf.len() - bytes_remaining;
            match bytes_remaining {
                0..=63 => {
                    // PANIC-FREE: Use buf.get() instead of buf[] as the compiler
                    // cannot reason about `offset` to optimize out the panic.
                    if let Some(slice) = buf.get(offset..) {
                        self.digest_partial_block(slice, first, buf.len())?;
                        break;
                    } else {
                        return Err(PufError::DRIVER_SHA1_INVALID_SLICE);
                    }
                }
                _ => {
                    // PANIC-FREE: As above.
                    if let Some(slice) = buf.get(offset..offset + SHA1_BLOCK_BYTE_SIZE) {
                        let block = <&[u8; SHA1_BLOCK_BYTE_SIZE]>::try_from(slice)
                            .map_err(|_| PufError::DRIVER_SHA1_INVALID_SLICE)?;
                        self.digest_block(block, first);
                        bytes_remaining -= SHA1_BLOCK_BYTE_SIZE;
                        first = false;
                    } else {
                        return Err(PufError::DRIVER_SHA1_INVALID_SLICE);
                    }
                }
            }
        }

        Ok(self.compressor.hash())
    }

    /// Calculate the digest of the last, possibly partial, block
    ///
    /// # Arguments
    ///
    /// * `slice` - Remaining input bytes, strictly shorter than a block
    /// * `first` - Flag indicating if this is the first block
    /// * `buf_size` - Total input size in bytes
    fn digest_partial_block(&mut self, slice: &[u8], first: bool, buf_size: usize) -> PufResult<()> {
        /// Set block length
        fn set_block_len(buf_size: usize, block: &mut [u8; SHA1_BLOCK_BYTE_SIZE]) {
            let bit_len = (buf_size as u64) << 3;
            block[SHA1_BLOCK_LEN_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());
        }

        // Construct the block
        let mut block = [0u8; SHA1_BLOCK_BYTE_SIZE];

        // PANIC-FREE: Following check optimizes out the panic in copy_from_slice
        if slice.len() > block.len() - 1 {
            return Err(PufError::DRIVER_SHA1_INDEX_OUT_OF_BOUNDS);
        }
        block[..slice.len()].copy_from_slice(slice);
        block[slice.len()] = 0b1000_0000;
        if slice.len() < SHA1_BLOCK_LEN_OFFSET {
            set_block_len(buf_size, &mut block);
        }

        self.digest_block(&block, first);

        // Add a padding block if the length did not fit
        if slice.len() >= SHA1_BLOCK_LEN_OFFSET {
            block.fill(0);
            set_block_len(buf_size, &mut block);
            self.digest_block(&block, false);
        }

        Ok(())
    }

    /// Compress one full block
    ///
    /// # Arguments
    ///
    /// * `block` - Block to compress
    /// * `first` - Flag indicating if this is the first block
    fn digest_block(&mut self, block: &[u8; SHA1_BLOCK_BYTE_SIZE], first: bool) {
        if first {
            self.compressor.reset();
        }
        self.compressor.compress(block);
    }
}

/// SHA-1 digest state
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Sha1DigestState {
    /// Initial state
    Init,

    /// Pending state
    Pending,

    /// Final state
    Final,
}

/// Multi step SHA-1 digest operation
pub struct Sha1DigestOp<'a> {
    /// SHA-1 Engine
    sha: &'a mut Sha1,

    /// State
    state: Sha1DigestState,

    /// Staging buffer
    buf: [u8; SHA1_BLOCK_BYTE_SIZE],

    /// Current staging buffer index
    buf_idx: usize,

    /// Data size
    data_size: usize,
}

impl Sha1DigestOp<'_> {
    /// Update the digest with data
    ///
    /// # Arguments
    ///
    /// * `data` - Data used to update the digest
    pub fn update(&mut self, data: &[u8]) -> PufResult<()> {
        if self.state == Sha1DigestState::Final {
            return Err(PufError::DRIVER_SHA1_INVALID_STATE);
        }

        if self.data_size + data.len() > SHA1_MAX_DATA_SIZE {
            return Err(PufError::DRIVER_SHA1_MAX_DATA);
        }

        for byte in data {
            self.data_size += 1;

            // PANIC-FREE: Following check optimizes out the panic in indexing `buf`
            if self.buf_idx >= self.buf.len() {
                return Err(PufError::DRIVER_SHA1_INDEX_OUT_OF_BOUNDS);
            }

            self.buf[self.buf_idx] = *byte;
            self.buf_idx += 1;

            // If the staging buffer is full, compress the accumulated block
            if self.buf_idx == self.buf.len() {
                let block = self.buf;
                self.sha.digest_block(&block, self.is_first());
                self.reset_buf_state();
            }
        }

        Ok(())
    }

    /// Finalize the digest operation
    pub fn finalize(mut self) -> PufResult<Sha1Digest> {
        if self.state == Sha1DigestState::Final {
            return Err(PufError::DRIVER_SHA1_INVALID_STATE);
        }

        if self.buf_idx > self.buf.len() {
            return Err(PufError::DRIVER_SHA1_INVALID_SLICE);
        }

        let block = self.buf;
        let first = self.is_first();
        self.sha
            .digest_partial_block(&block[..self.buf_idx], first, self.data_size)?;

        self.state = Sha1DigestState::Final;

        Ok(self.sha.compressor.hash())
    }

    /// Check if this is the first compression of the operation
    fn is_first(&self) -> bool {
        self.state == Sha1DigestState::Init
    }

    /// Reset internal buffer state
    fn reset_buf_state(&mut self) {
        self.buf.fill(0);
        self.buf_idx = 0;
        self.state = Sha1DigestState::Pending;
    }
}

/// SHA-1 compressor
///
/// Implementation based on the reference code in RFC 3174.
struct Sha1Compressor {
    /// Hash state
    hash: [u32; 5],
}

impl Default for Sha1Compressor {
    fn default() -> Self {
        Self {
            hash: [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0],
        }
    }
}

impl Sha1Compressor {
    /// Reset the compressor for a new operation
    fn reset(&mut self) {
        *self = Sha1Compressor::default();
    }

    /// Retrieve the current hash
    fn hash(&self) -> Sha1Digest {
        Sha1Digest(self.hash)
    }

    /// Compress one message block into the hash state
    ///
    /// # Arguments
    ///
    /// * `block` - Block to compress
    fn compress(&mut self, block: &[u8; SHA1_BLOCK_BYTE_SIZE]) {
        const K: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];

        let mut w = [0u32; 80];
        for (idx, chunk) in block.chunks_exact(4).enumerate() {
            w[idx] = u32::from_be_bytes(chunk.try_into().unwrap());
        }
        for idx in 16..80 {
            w[idx] = (w[idx - 3] ^ w[idx - 8] ^ w[idx - 14] ^ w[idx - 16]).rotate_left(1);
        }

        let mut a = self.hash[0];
        let mut b = self.hash[1];
        let mut c = self.hash[2];
        let mut d = self.hash[3];
        let mut e = self.hash[4];

        for (idx, word) in w.iter().enumerate() {
            let (f, k) = match idx / 20 {
                0 => ((b & c) | ((!b) & d), K[0]),
                1 => (b ^ c ^ d, K[1]),
                2 => ((b & c) | (b & d) | (c & d), K[2]),
                _ => (b ^ c ^ d, K[3]),
            };
            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(*word)
                .wrapping_add(k);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        self.hash[0] = self.hash[0].wrapping_add(a);
        self.hash[1] = self.hash[1].wrapping_add(b);
        self.hash[2] = self.hash[2].wrapping_add(c);
        self.hash[3] = self.hash[3].wrapping_add(d);
        self.hash[4] = self.hash[4].wrapping_add(e);
    }
}
