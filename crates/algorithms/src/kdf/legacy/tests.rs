use super::*;
use crate::hash::Sha256;

const SALT: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

fn derive_hex(password: &[u8]) -> String {
    hex::encode(derive_key(password, &SALT).unwrap().as_slice())
}

#[test]
fn test_short_passwords() {
    assert_eq!(derive_hex(b"password"), "9d4d88fdcce97572cd631139f932b855");
    assert_eq!(
        derive_hex(b"correct horse battery staple"),
        "989a9046fd34bf58c986b20820e85e37"
    );
}

#[test]
fn test_block_sized_password_is_not_hashed() {
    assert_eq!(derive_hex(&[b'x'; 64]), "29af0aaf35160b7450838dbd4195b0c8");
}

#[test]
fn test_long_passwords() {
    assert_eq!(derive_hex(&[b't'; 65]), "d2226099497a9f65f8ae8daca0ca7381");
    assert_eq!(derive_hex(&[b'y'; 70]), "a83229b83bf8c9004c863a46c6a1b92e");
    assert_eq!(derive_hex(&[b'r'; 76]), "46445a58c60b7224555e15bcfa88df08");
    assert_eq!(derive_hex(&[b'q'; 80]), "6d735875ec00e517e257ee02a35a4f96");
}

// Tails of 13, 14 and 15 words take the doubled-block path
#[test]
fn test_long_passwords_doubled_final_block() {
    assert_eq!(derive_hex(&[b'v'; 77]), "281864e37d7fd4accaeb0dc2f87c5aba");
    assert_eq!(derive_hex(&[b'z'; 78]), "ecc4a1fedeaff64d9c41d1bced56b4cf");
    assert_eq!(derive_hex(&[b'w'; 79]), "e50f68089e406fc80cf6ebd7d5fb242e");
    assert_eq!(derive_hex(&[b'u'; 93]), "7121477e7b9e2955dbbf891e8fb840a2");
    assert_eq!(derive_hex(&[b's'; 109]), "4ceeb825af4052d77d213f69fd328f23");
}

#[test]
fn test_prehash_matches_word_hash_for_short_tails() {
    for len in (65..=112).filter(|n| n % 16 <= 12) {
        let password: Vec<u8> = (0..len).map(|i| (i * 11 + 3) as u8).collect();
        let words: Vec<u32> = password.iter().map(|&b| b as u32).collect();
        let expected = Sha256::hash_words_big_endian(&words);
        let mut expected_bytes = [0u8; 32];
        for (chunk, w) in expected_bytes.chunks_exact_mut(4).zip(expected.iter()) {
            chunk.copy_from_slice(&w.to_be_bytes());
        }
        assert_eq!(prehash_long_password(&password), expected_bytes, "length {}", len);
    }
}

#[test]
fn test_prehash_diverges_for_long_tails() {
    for len in [77usize, 78, 79, 93, 109] {
        let password = vec![0x41u8; len];
        let words: Vec<u32> = password.iter().map(|&b| b as u32).collect();
        let standard = Sha256::hash_words_big_endian(&words);
        let mut standard_bytes = [0u8; 32];
        for (chunk, w) in standard_bytes.chunks_exact_mut(4).zip(standard.iter()) {
            chunk.copy_from_slice(&w.to_be_bytes());
        }
        assert_ne!(prehash_long_password(&password), standard_bytes);
    }
}

#[test]
fn test_salt_must_be_eight_bytes() {
    assert!(derive_key(b"pw", &[0u8; 7]).is_err());
    assert!(derive_key(b"pw", &[0u8; 16]).is_err());
    assert!(derive_key(b"", &SALT).is_ok());
}

#[test]
fn test_salt_changes_key() {
    let a = derive_key(b"password", &SALT).unwrap();
    let b = derive_key(b"password", &[8, 7, 6, 5, 4, 3, 2, 1]).unwrap();
    assert_ne!(a.as_slice(), b.as_slice());
}

#[test]
fn test_trait_object() {
    let kdf: &dyn KeyDerivationFunction = &LegacyKdf;
    let key = kdf.derive_key(b"password", &SALT).unwrap();
    assert_eq!(hex::encode(&key[..]), "9d4d88fdcce97572cd631139f932b855");
    assert_eq!(
        kdf.derive_key(b"password", &[0u8; 4]).unwrap_err().kind(),
        crypad_api::ErrorKind::InvalidParameters
    );
}
