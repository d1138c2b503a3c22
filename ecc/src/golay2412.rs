/*++

Licensed under the Apache-2.0 license.

File Name:

    golay2412.rs

Abstract:

    File contains the extended binary Golay(24,12) block code used as the
    inner code of the PUF secret reconstruction pipeline.

--*/

use crate::BlockCode;
use puf_error::{PufError, PufResult};

/// Extended binary Golay(24,12) code
///
/// Systematic `[I | B]` form: a 24-bit codeword is the 12-bit message
/// followed by its 12 parity bits. Any error pattern of weight <= 3 per
/// codeword is corrected exactly; heavier patterns decode best effort with
/// no error signaled.
pub struct Golay2412;

/// Rows of the parity matrix B
///
/// Rows 0..11 are cyclic left shifts of `11011100010` with a trailing 1;
/// row 11 is eleven ones and a zero. B is symmetric and its own inverse
/// over GF(2), which the decoder relies on.
#[cfg_attr(rustfmt, rustfmt_skip)]
const PARITY: [u16; 12] = [
    0xDC5, 0xB8B, 0x717, 0xE2D, 0xC5B, 0x8B7,
    0x16F, 0x2DD, 0x5B9, 0xB71, 0x6E3, 0xFFE,
];

impl Golay2412 {
    /// Message bytes per encode step (two 12-bit symbols)
    pub const MESSAGE_BLOCK_SIZE: usize = 3;

    /// Codeword bytes per encode step (two 24-bit codewords)
    pub const CODEWORD_BLOCK_SIZE: usize = 6;

    /// Guaranteed correctable bit errors per 24-bit codeword
    pub const MAX_CORRECTABLE_ERRORS: usize = 3;

    /// Encode a message into Golay codewords
    ///
    /// # Arguments
    ///
    /// * `msg` - Message bytes, a multiple of `MESSAGE_BLOCK_SIZE`
    /// * `codeword` - Output buffer, exactly twice the message length
    pub fn encode(msg: &[u8], codeword: &mut [u8]) -> PufResult<()> {
        Self::check_lengths(msg.len(), codeword.len())?;

        for (m, c) in msg
            .chunks_exact(Self::MESSAGE_BLOCK_SIZE)
            .zip(codeword.chunks_exact_mut(Self::CODEWORD_BLOCK_SIZE))
        {
            let (m0, m1) = Self::unpack_symbols(m);
            Self::store_codeword(Self::encode_symbol(m0), &mut c[..3]);
            Self::store_codeword(Self::encode_symbol(m1), &mut c[3..]);
        }

        Ok(())
    }

    /// Decode Golay codewords, correcting up to three bit errors each
    ///
    /// # Arguments
    ///
    /// * `codeword` - Received codewords, a multiple of `CODEWORD_BLOCK_SIZE`
    /// * `msg` - Output buffer, exactly half the codeword length
    pub fn decode(codeword: &[u8], msg: &mut [u8]) -> PufResult<()> {
        Self::check_lengths(msg.len(), codeword.len())?;

        for (c, m) in codeword
            .chunks_exact(Self::CODEWORD_BLOCK_SIZE)
            .zip(msg.chunks_exact_mut(Self::MESSAGE_BLOCK_SIZE))
        {
            let m0 = Self::correct(Self::load_codeword(&c[..3]));
            let m1 = Self::correct(Self::load_codeword(&c[3..]));
            Self::pack_symbols(m0, m1, m);
        }

        Ok(())
    }

    fn check_lengths(msg_len: usize, codeword_len: usize) -> PufResult<()> {
        if msg_len == 0 || msg_len % Self::MESSAGE_BLOCK_SIZE != 0 {
            return Err(PufError::ECC_GOLAY_INVALID_MESSAGE_LEN);
        }
        if codeword_len != 2 * msg_len {
            return Err(PufError::ECC_GOLAY_INVALID_CODEWORD_LEN);
        }
        Ok(())
    }

    /// Split three message bytes into two 12-bit symbols
    fn unpack_symbols(m: &[u8]) -> (u16, u16) {
        let m0 = (u16::from(m[0]) << 4) | (u16::from(m[1]) >> 4);
        let m1 = ((u16::from(m[1]) & 0xF) << 8) | u16::from(m[2]);
        (m0, m1)
    }

    /// Pack two 12-bit symbols into three message bytes
    fn pack_symbols(m0: u16, m1: u16, out: &mut [u8]) {
        out[0] = (m0 >> 4) as u8;
        out[1] = (((m0 & 0xF) << 4) | (m1 >> 8)) as u8;
        out[2] = (m1 & 0xFF) as u8;
    }

    fn store_codeword(cw: u32, out: &mut [u8]) {
        out[0] = (cw >> 16) as u8;
        out[1] = (cw >> 8) as u8;
        out[2] = cw as u8;
    }

    fn load_codeword(input: &[u8]) -> u32 {
        (u32::from(input[0]) << 16) | (u32::from(input[1]) << 8) | u32::from(input[2])
    }

    /// Multiply a 12-bit row vector by B
    fn mul_parity(v: u16) -> u16 {
        let mut result = 0;
        for (idx, row) in PARITY.iter().enumerate() {
            if v & (1 << (11 - idx)) != 0 {
                result ^= row;
            }
        }
        result
    }

    /// Encode one 12-bit symbol into a 24-bit codeword `(m | mB)`
    fn encode_symbol(m: u16) -> u32 {
        (u32::from(m) << 12) | u32::from(Self::mul_parity(m))
    }

    /// Correct one received 24-bit codeword and return its 12-bit symbol
    ///
    /// Arithmetic syndrome decoding: with received word `(x, y)` the
    /// syndrome is `s = xB ^ y`. The four cases locate every error pattern
    /// of weight <= 3; anything heavier falls through uncorrected.
    fn correct(received: u32) -> u16 {
        let x = (received >> 12) as u16;
        let y = (received & 0xFFF) as u16;
        let s = Self::mul_parity(x) ^ y;

        // Errors confined to the parity half
        if s.count_ones() <= 3 {
            return x;
        }

        // One error in the message half, up to two in the parity half
        for (idx, row) in PARITY.iter().enumerate() {
            if (s ^ row).count_ones() <= 2 {
                return x ^ (1 << (11 - idx));
            }
        }

        // Errors confined to the message half (B is an involution)
        let q = Self::mul_parity(s);
        if q.count_ones() <= 3 {
            return x ^ q;
        }

        // One error in the parity half, up to two in the message half
        for row in PARITY.iter() {
            if (q ^ row).count_ones() <= 2 {
                return x ^ q ^ row;
            }
        }

        // Beyond correction capability; pass the message half through
        x
    }
}

impl BlockCode for Golay2412 {
    const MESSAGE_BLOCK_SIZE: usize = Golay2412::MESSAGE_BLOCK_SIZE;
    const CODEWORD_BLOCK_SIZE: usize = Golay2412::CODEWORD_BLOCK_SIZE;

    fn encode(msg: &[u8], codeword: &mut [u8]) -> PufResult<()> {
        Golay2412::encode(msg, codeword)
    }

    fn decode(codeword: &[u8], msg: &mut [u8]) -> PufResult<()> {
        Golay2412::decode(codeword, msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golay_known_codeword() {
        let msg = [0x12, 0x34, 0x56];
        let mut codeword = [0u8; 6];
        Golay2412::encode(&msg, &mut codeword).unwrap();
        assert_eq!(codeword, [0x12, 0x36, 0x5F, 0x45, 0x6C, 0x73]);
    }

    #[test]
    fn test_golay_round_trip() {
        let msg = [0x01, 0x01, 0x01, 0xFE, 0xDC, 0xBA];
        let mut codeword = [0u8; 12];
        let mut decoded = [0u8; 6];
        Golay2412::encode(&msg, &mut codeword).unwrap();
        Golay2412::decode(&codeword, &mut decoded).unwrap();
        assert_eq!(decoded, msg);
    }

    #[test]
    fn test_golay_corrects_all_triple_errors() {
        // Exhaustive over every error pattern of weight <= 3 in one codeword.
        let msg = [0x12, 0x34, 0x56];
        let mut codeword = [0u8; 6];
        Golay2412::encode(&msg, &mut codeword).unwrap();

        for a in 0..24 {
            for b in a..24 {
                for c in b..24 {
                    let mut tampered = codeword;
                    for bit in [a, b, c] {
                        tampered[bit / 8] ^= 1 << (7 - (bit % 8));
                    }
                    let mut decoded = [0u8; 3];
                    Golay2412::decode(&tampered, &mut decoded).unwrap();
                    assert_eq!(decoded, msg, "pattern ({a},{b},{c}) not corrected");
                }
            }
        }
    }

    #[test]
    fn test_golay_corrects_three_errors_per_codeword() {
        let msg = [0x12, 0x34, 0x56];
        let mut codeword = [0u8; 6];
        Golay2412::encode(&msg, &mut codeword).unwrap();

        // Three flips in each of the two 24-bit codewords.
        codeword[0] ^= 0x81;
        codeword[2] ^= 0x10;
        codeword[3] ^= 0x04;
        codeword[4] ^= 0x40;
        codeword[5] ^= 0x01;

        let mut decoded = [0u8; 3];
        Golay2412::decode(&codeword, &mut decoded).unwrap();
        assert_eq!(decoded, msg);
    }

    #[test]
    fn test_golay_four_errors_best_effort() {
        // One flip past the guarantee: the decode must complete without
        // signaling an error; the result is not the original message.
        let msg = [0x12, 0x34, 0x56];
        let mut codeword = [0u8; 6];
        Golay2412::encode(&msg, &mut codeword).unwrap();

        codeword[0] ^= 0x88;
        codeword[1] ^= 0x11;

        let mut decoded = [0u8; 3];
        Golay2412::decode(&codeword, &mut decoded).unwrap();
        assert_ne!(decoded, msg);
    }

    #[test]
    fn test_golay_length_validation() {
        let mut codeword = [0u8; 6];
        let mut msg = [0u8; 3];
        assert_eq!(
            Golay2412::encode(&[0u8; 4], &mut codeword),
            Err(PufError::ECC_GOLAY_INVALID_MESSAGE_LEN)
        );
        assert_eq!(
            Golay2412::encode(&[0u8; 3], &mut codeword[..4]),
            Err(PufError::ECC_GOLAY_INVALID_CODEWORD_LEN)
        );
        assert_eq!(
            Golay2412::decode(&[0u8; 7], &mut msg),
            Err(PufError::ECC_GOLAY_INVALID_CODEWORD_LEN)
        );
    }

    #[test]
    fn test_parity_matrix_is_symmetric_involution() {
        for i in 0..12 {
            for j in 0..12 {
                let b_ij = (PARITY[i] >> (11 - j)) & 1;
                let b_ji = (PARITY[j] >> (11 - i)) & 1;
                assert_eq!(b_ij, b_ji);
            }
            let unit = 1u16 << (11 - i);
            assert_eq!(Golay2412::mul_parity(Golay2412::mul_parity(unit)), unit);
        }
    }
}
