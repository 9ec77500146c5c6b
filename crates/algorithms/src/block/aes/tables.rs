//! Round tables for the table-driven AES
//!
//! All tables are derived at compile time by walking the multiplicative
//! group of GF(2^8): `x` steps through powers of 0x52 while `xi` steps
//! through powers of its inverse 0x05, so `xi` is always `x^-1` and the
//! S-box entry for `x` is the affine map of `xi`.

/// Forward and inverse round tables plus both S-boxes
pub(crate) struct Tables {
    /// `encrypt[i][x]` combines SubBytes and MixColumns for byte position `i`
    pub(crate) encrypt: [[u32; 256]; 4],
    /// `decrypt[i][s]` combines InvSubBytes and InvMixColumns for byte position `i`
    pub(crate) decrypt: [[u32; 256]; 4],
    pub(crate) sbox: [u8; 256],
    pub(crate) inv_sbox: [u8; 256],
}

pub(crate) static TABLES: Tables = Tables::generate();

impl Tables {
    const fn generate() -> Self {
        let mut encrypt = [[0u32; 256]; 4];
        let mut decrypt = [[0u32; 256]; 4];
        let mut sbox = [0u8; 256];
        let mut inv_sbox = [0u8; 256];

        // doubling table
        let mut d = [0usize; 256];
        let mut i = 0;
        while i < 256 {
            d[i] = if i & 0x80 != 0 { (i << 1) ^ 0x11b } else { i << 1 };
            i += 1;
        }

        let mut x = 0usize;
        let mut xi = 0usize;
        loop {
            let mut sx = xi ^ (xi << 1) ^ (xi << 2) ^ (xi << 3) ^ (xi << 4);
            sx = (sx >> 8) ^ (sx & 0xff) ^ 0x63;
            sbox[x] = sx as u8;
            inv_sbox[sx] = x as u8;

            let dsx = d[sx];
            let x2 = d[x];
            let x4 = d[x2];
            let x8 = d[x4];

            let mut tx = ((dsx << 24) ^ (sx << 16) ^ (sx << 8) ^ sx ^ dsx) as u32;
            let mut tisx = (((x8 ^ x4 ^ x2) << 24)
                ^ ((x8 ^ x) << 16)
                ^ ((x8 ^ x4 ^ x) << 8)
                ^ (x8 ^ x2 ^ x)) as u32;

            let mut t = 0;
            while t < 4 {
                encrypt[t][x] = tx;
                decrypt[t][sx] = tisx;
                tx = tx.rotate_right(8);
                tisx = tisx.rotate_right(8);
                t += 1;
            }

            // 0x05 is the last power of 0x52 before the walk wraps to 1
            if x == 5 {
                break;
            } else if x != 0 {
                x = x2 ^ d[d[d[x8 ^ x2]]];
                xi ^= d[d[xi]];
            } else {
                x = 1;
                xi = 1;
            }
        }

        Self {
            encrypt,
            decrypt,
            sbox,
            inv_sbox,
        }
    }

    /// Apply the S-box to each byte of a word
    #[inline(always)]
    pub(crate) fn sub_word(&self, w: u32) -> u32 {
        (self.sbox[(w >> 24) as usize] as u32) << 24
            | (self.sbox[((w >> 16) & 0xff) as usize] as u32) << 16
            | (self.sbox[((w >> 8) & 0xff) as usize] as u32) << 8
            | self.sbox[(w & 0xff) as usize] as u32
    }

    /// InvMixColumns of a round-key word
    #[inline(always)]
    pub(crate) fn inv_mix_word(&self, w: u32) -> u32 {
        self.decrypt[0][self.sbox[(w >> 24) as usize] as usize]
            ^ self.decrypt[1][self.sbox[((w >> 16) & 0xff) as usize] as usize]
            ^ self.decrypt[2][self.sbox[((w >> 8) & 0xff) as usize] as usize]
            ^ self.decrypt[3][self.sbox[(w & 0xff) as usize] as usize]
    }
}
