//! Word/byte conversions
//!
//! Every primitive in the workspace treats 32-bit words as big-endian groups of
//! four bytes.

/// Read a big-endian u32 from the first four bytes of `bytes`
#[inline]
pub fn u32_from_be_bytes(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Split a 16-byte block into four big-endian words
#[inline]
pub fn block_to_words(block: &[u8; 16]) -> [u32; 4] {
    [
        u32_from_be_bytes(&block[0..4]),
        u32_from_be_bytes(&block[4..8]),
        u32_from_be_bytes(&block[8..12]),
        u32_from_be_bytes(&block[12..16]),
    ]
}

/// Join four words into a 16-byte block
#[inline]
pub fn words_to_block(words: &[u32; 4]) -> [u8; 16] {
    let mut out = [0u8; 16];
    for (chunk, word) in out.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    out
}
