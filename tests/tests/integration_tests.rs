//! End-to-end flows across the crypad crates

use crypad_api::ErrorKind;
use crypad_params::utils::kdf::KDF_SALT_SIZE;
use crypad_params::utils::symmetric::{BLOB_TAG_SLOT_SIZE, OCB_BLOB_NONCE_SIZE};
use crypad_random::{global, EventKind, FortunaRng, GeneratorConfig, RandomEvent, Readiness};
use crypad_symmetric::{
    derive_key, generate_salt, Aead, AeadConfig, AeadMode, AesAead, AesKey, CiphertextPackage,
    KdfScheme, PasswordBox,
};
use crypad_tests::fixtures::{fixture_bytes, seeded_generator};
use std::sync::{Arc, Mutex};

#[test]
fn password_box_with_generator_randomness() {
    let (mut generator, _) = seeded_generator(1);
    let pad = PasswordBox::default();
    let note = b"meeting moved to thursday";

    let blob = {
        let mut rng = FortunaRng::new(&mut generator);
        pad.seal("hunter2", note, b"", &mut rng).unwrap()
    };
    assert_eq!(
        blob.len(),
        KDF_SALT_SIZE + BLOB_TAG_SLOT_SIZE + 1 + OCB_BLOB_NONCE_SIZE + note.len()
    );
    assert_eq!(blob[KDF_SALT_SIZE + BLOB_TAG_SLOT_SIZE] as usize, OCB_BLOB_NONCE_SIZE);

    let opened = pad.open("hunter2", &blob, b"").unwrap();
    assert_eq!(&opened[..], note);

    let err = pad.open("hunter3", &blob, b"").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AuthenticationFailure);
}

#[test]
fn ccm_password_box_with_adata() {
    let (mut generator, _) = seeded_generator(2);
    let pad = PasswordBox::new(AeadConfig::new(AeadMode::Ccm).with_tag_len(8), KdfScheme::Legacy);
    let mut rng = FortunaRng::new(&mut generator);
    let blob = pad.seal("pw", b"payload", b"v1", &mut rng).unwrap();

    assert_eq!(&pad.open("pw", &blob, b"v1").unwrap()[..], b"payload");
    assert!(pad.open("pw", &blob, b"v2").is_err());
}

#[test]
fn unseeded_generator_cannot_seal() {
    let mut generator = crypad_random::Fortuna::new(GeneratorConfig::default()).unwrap();
    assert_eq!(generator.is_ready(None), Readiness::NOT_READY);
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let mut rng = FortunaRng::new(&mut generator);
        PasswordBox::default().seal("pw", b"x", b"", &mut rng)
    }));
    assert!(result.is_err());
}

#[test]
fn derived_key_drives_both_modes() {
    let (mut generator, _) = seeded_generator(3);
    let mut rng = FortunaRng::new(&mut generator);
    let salt = generate_salt(&mut rng);
    let key = derive_key("correct horse battery staple", &salt, KdfScheme::Legacy).unwrap();
    assert_eq!(key.as_bytes().len(), 16);

    for mode in [AeadMode::Ocb, AeadMode::Ccm] {
        let aead = AesAead::new(&key, AeadConfig::new(mode)).unwrap();
        let package = aead
            .encrypt_with_random_nonce(&mut rng, b"attack at dawn", b"hdr")
            .unwrap();
        assert_eq!(package.nonce.len(), mode.nonce_len());

        let wire = package.to_wire().unwrap();
        assert_eq!(
            hex::encode(&wire[1..1 + package.nonce.len()]),
            hex::encode(&package.nonce)
        );
        let parsed = CiphertextPackage::from_wire(&wire, &package.tag).unwrap();
        assert_eq!(&aead.decrypt(&parsed, b"hdr").unwrap()[..], b"attack at dawn");
    }
}

#[test]
fn keys_from_fixture_bytes_interoperate() {
    let key = AesKey::from_slice(&fixture_bytes(4, 32)).unwrap();
    let nonce = fixture_bytes(5, 16);
    let aead = AesAead::new(&key, AeadConfig::default()).unwrap();
    let package = aead.encrypt(&nonce, b"", b"").unwrap();
    assert!(package.payload.is_empty());
    assert!(aead.decrypt(&package, b"").unwrap().is_empty());

    let tag = aead.sign(b"manifest").unwrap();
    assert!(aead.verify(b"manifest", &tag).unwrap());
    assert!(!aead.verify(b"manifesto", &tag).unwrap());
}

#[test]
fn pbkdf2_scheme_is_not_legacy_compatible() {
    let (mut generator, _) = seeded_generator(6);
    let mut rng = FortunaRng::new(&mut generator);
    let modern = PasswordBox::new(AeadConfig::default(), KdfScheme::Pbkdf2 { iterations: 1_000 });
    let blob = modern.seal("pw", b"data", b"", &mut rng).unwrap();

    assert_eq!(&modern.open("pw", &blob, b"").unwrap()[..], b"data");
    assert!(PasswordBox::default().open("pw", &blob, b"").is_err());
}

#[test]
fn seeded_event_reaches_listener_through_global() {
    global::teardown();
    global::init(GeneratorConfig::default()).unwrap();

    let seen = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&seen);
    global::with_generator(|g| {
        g.subscribe(EventKind::Seeded, move |event| {
            *sink.lock().unwrap() = Some(*event);
        })
    })
    .unwrap();

    global::with_generator(|g| g.add_entropy(fixture_words(), Some(300), Some("test")))
        .unwrap();
    assert_eq!(
        *seen.lock().unwrap(),
        Some(RandomEvent::Seeded { strength: 300 })
    );

    let blob = global::with_generator(|g| {
        let mut rng = FortunaRng::new(g);
        PasswordBox::default().seal("pw", b"global", b"", &mut rng)
    })
    .unwrap()
    .unwrap();
    assert_eq!(&PasswordBox::default().open("pw", &blob, b"").unwrap()[..], b"global");

    assert!(global::teardown());
}

fn fixture_words() -> Vec<u32> {
    fixture_bytes(7, 64)
        .chunks_exact(4)
        .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}
