//! Property-based tests for the AEAD modes and the password blob

use crypad_symmetric::{Aead, AeadConfig, AeadMode, AesAead, AesKey, KdfScheme, PasswordBox};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn mode() -> impl Strategy<Value = AeadMode> {
    prop_oneof![Just(AeadMode::Ocb), Just(AeadMode::Ccm)]
}

fn key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 16),
        prop::collection::vec(any::<u8>(), 24),
        prop::collection::vec(any::<u8>(), 32),
    ]
}

fn tag_len() -> impl Strategy<Value = usize> {
    (1usize..=4).prop_map(|n| n * 4)
}

proptest! {
    #[test]
    fn aead_roundtrip(
        mode in mode(),
        key in key(),
        tag_len in tag_len(),
        nonce_seed in any::<[u8; 16]>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..200),
        aad in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let key = AesKey::from_slice(&key).unwrap();
        let aead = AesAead::new(&key, AeadConfig::new(mode).with_tag_len(tag_len)).unwrap();
        let nonce = &nonce_seed[..mode.nonce_len()];

        let package = aead.encrypt(nonce, &plaintext, &aad).unwrap();
        prop_assert_eq!(package.tag.len(), tag_len);
        let opened = aead.decrypt(&package, &aad).unwrap();
        prop_assert_eq!(&opened[..], &plaintext[..]);
    }

    #[test]
    fn aead_is_deterministic(
        mode in mode(),
        key in key(),
        nonce_seed in any::<[u8; 16]>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..100),
    ) {
        let key = AesKey::from_slice(&key).unwrap();
        let aead = AesAead::new(&key, AeadConfig::new(mode)).unwrap();
        let nonce = &nonce_seed[..mode.nonce_len()];

        let a = aead.encrypt(nonce, &plaintext, b"").unwrap();
        let b = aead.encrypt(nonce, &plaintext, b"").unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn aead_detects_tampering(
        mode in mode(),
        key in key(),
        nonce_seed in any::<[u8; 16]>(),
        plaintext in prop::collection::vec(any::<u8>(), 1..100),
        flip in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let key = AesKey::from_slice(&key).unwrap();
        let aead = AesAead::new(&key, AeadConfig::new(mode)).unwrap();
        let nonce = &nonce_seed[..mode.nonce_len()];

        let mut package = aead.encrypt(nonce, &plaintext, b"").unwrap();
        let i = flip.index(package.payload.len());
        package.payload[i] ^= 1 << bit;
        prop_assert!(aead.decrypt(&package, b"").is_err());
    }

    #[test]
    fn aead_detects_tag_tampering(
        mode in mode(),
        key in key(),
        nonce_seed in any::<[u8; 16]>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..64),
        flip in any::<prop::sample::Index>(),
    ) {
        let key = AesKey::from_slice(&key).unwrap();
        let aead = AesAead::new(&key, AeadConfig::new(mode)).unwrap();
        let nonce = &nonce_seed[..mode.nonce_len()];

        let mut package = aead.encrypt(nonce, &plaintext, b"").unwrap();
        let i = flip.index(package.tag.len());
        package.tag[i] ^= 0x80;
        prop_assert!(aead.decrypt(&package, b"").is_err());
    }

    #[test]
    fn aead_detects_aad_tampering(
        mode in mode(),
        key in key(),
        nonce_seed in any::<[u8; 16]>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..64),
        aad in prop::collection::vec(any::<u8>(), 1..64),
        flip in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let key = AesKey::from_slice(&key).unwrap();
        let aead = AesAead::new(&key, AeadConfig::new(mode)).unwrap();
        let nonce = &nonce_seed[..mode.nonce_len()];

        let package = aead.encrypt(nonce, &plaintext, &aad).unwrap();
        let mut altered = aad.clone();
        altered[flip.index(aad.len())] ^= 1 << bit;
        prop_assert!(aead.decrypt(&package, &altered).is_err());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn password_box_roundtrip(
        mode in mode(),
        password in "[ -~]{0,80}",
        plaintext in prop::collection::vec(any::<u8>(), 0..100),
        seed in any::<u64>(),
    ) {
        let pad = PasswordBox::new(AeadConfig::new(mode), KdfScheme::Legacy);
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let blob = pad.seal(&password, &plaintext, b"", &mut rng).unwrap();
        let opened = pad.open(&password, &blob, b"").unwrap();
        prop_assert_eq!(&opened[..], &plaintext[..]);
    }
}
