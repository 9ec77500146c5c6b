// Primitive-level use of the crate: nothing here needs the symmetric or
// random layers, so the same calls work in a no_std + alloc build.

use crypad_algorithms::kdf::legacy;
use crypad_algorithms::{Aes, BlockCipher, Cmac, HashFunction, Ocb, Pmac, Sha256};

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn main() -> Result<(), crypad_algorithms::Error> {
    // Single block under the FIPS-197 AES-128 key
    let key: Vec<u8> = (0u8..16).collect();
    let aes = Aes::new(&key)?;
    let block: [u8; 16] = core::array::from_fn(|i| (i as u8) * 0x11);
    let encrypted = aes.encrypt_array(&block);
    println!("{}: {}", aes.name(), hex(&encrypted));
    assert_eq!(aes.decrypt_array(&encrypted), block);

    // Hash, whole and word-oriented
    println!("SHA-256(\"abc\"): {}", hex(&Sha256::digest(b"abc")));
    let words = Sha256::hash_words_big_endian(&[0x6162_6380]);
    println!("first word of a word-oriented digest: {:08x}", words[0]);

    // MACs share the cipher
    let cmac = Cmac::new(&aes, 8)?;
    println!("CMAC: {}", hex(&cmac.tag(b"message")));
    println!("PMAC: {}", hex(&Pmac::new(&aes).compute(b"message")));

    // Password stretch then OCB
    let stretched = legacy::derive_key(b"password", &[1, 2, 3, 4, 5, 6, 7, 8])?;
    let ocb = Ocb::new(Aes::new(stretched.as_slice())?);
    let nonce = [0u8; 16];
    let (ciphertext, tag) = ocb.encrypt(&nonce, b"no_std friendly", b"")?;
    let plaintext = ocb.decrypt(&nonce, &ciphertext, b"", &tag)?;
    assert_eq!(&plaintext[..], b"no_std friendly");
    println!("OCB tag: {}", hex(&tag));

    Ok(())
}
