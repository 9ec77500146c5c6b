use super::*;
use crate::block::Aes;

fn nist_key() -> Aes {
    Aes::new(&hex::decode("404142434445464748494a4b4c4d4e4f").unwrap()).unwrap()
}

fn seq(start: u8, n: usize) -> Vec<u8> {
    (0..n).map(|i| start + i as u8).collect()
}

#[test]
fn test_sp800_38c_example_1() {
    let ccm = Ccm::with_tag_len(nist_key(), 4).unwrap();
    let nonce = seq(0x10, 7);
    let adata = seq(0x00, 8);
    let pt = seq(0x20, 4);

    let (ct, mac) = ccm.encrypt(&nonce, &pt, &adata).unwrap();
    assert_eq!(hex::encode(&ct), "7162015b4dac255d");
    assert_eq!(mac.len(), 4);

    let opened = ccm.decrypt(&nonce, &ct, &adata, &mac).unwrap();
    assert_eq!(&opened[..], &pt[..]);
}

#[test]
fn test_sp800_38c_example_3() {
    let ccm = Ccm::with_tag_len(nist_key(), 8).unwrap();
    let nonce = seq(0x10, 12);
    let adata = seq(0x00, 20);
    let pt = seq(0x20, 24);

    let (ct, mac) = ccm.encrypt(&nonce, &pt, &adata).unwrap();
    assert_eq!(
        hex::encode(&ct),
        "e3b201a9f5b71a7a9b1ceaeccd97e70b6176aad9a4428aa5484392fbc1b09951"
    );
    assert_eq!(&ccm.decrypt(&nonce, &ct, &adata, &mac).unwrap()[..], &pt[..]);
}

#[test]
fn test_raw_mac_is_unencrypted_tag() {
    let ccm = Ccm::new(nist_key());
    let nonce = seq(0x10, 13);
    let (ct, mac) = ccm.encrypt(&nonce, b"some payload bytes", b"hdr").unwrap();

    let s0 = ccm
        .cipher()
        .encrypt_array(&Ccm::<Aes>::counter_block(&nonce, 2, 0));
    let enc_tag = &ct[ct.len() - 16..];
    for i in 0..16 {
        assert_eq!(enc_tag[i], mac[i] ^ s0[i]);
    }
}

#[test]
fn test_empty_payload_and_adata() {
    let ccm = Ccm::new(nist_key());
    let nonce = seq(0x10, 13);
    let (ct, mac) = ccm.encrypt(&nonce, b"", b"").unwrap();
    assert_eq!(ct.len(), 16);
    assert!(ccm.decrypt(&nonce, &ct, b"", &mac).unwrap().is_empty());
}

#[test]
fn test_adata_length_boundaries() {
    // 14 bytes of adata fills exactly one block with its length prefix
    let ccm = Ccm::new(nist_key());
    let nonce = seq(0x10, 11);
    for len in [1usize, 14, 15, 30, 300] {
        let adata: Vec<u8> = (0..len).map(|i| i as u8).collect();
        let (ct, mac) = ccm.encrypt(&nonce, b"payload", &adata).unwrap();
        assert_eq!(&ccm.decrypt(&nonce, &ct, &adata, &mac).unwrap()[..], b"payload");
    }
}

#[test]
fn test_tamper_detection() {
    let ccm = Ccm::new(nist_key());
    let nonce = seq(0x10, 13);
    let (ct, mac) = ccm.encrypt(&nonce, b"attack at dawn", b"ad").unwrap();

    for i in 0..ct.len() {
        let mut bad = ct.clone();
        bad[i] ^= 0x01;
        assert!(matches!(
            ccm.decrypt(&nonce, &bad, b"ad", &mac),
            Err(Error::Authentication { .. })
        ));
    }
    assert!(ccm.decrypt(&nonce, &ct, b"AD", &mac).is_err());
    let mut other_nonce = nonce.clone();
    other_nonce[0] ^= 1;
    assert!(ccm.decrypt(&other_nonce, &ct, b"ad", &mac).is_err());
}

#[test]
fn test_detached_mac_is_checked() {
    let ccm = Ccm::with_tag_len(nist_key(), 8).unwrap();
    let nonce = seq(0x10, 13);
    let (ct, mac) = ccm.encrypt(&nonce, b"attack at dawn", b"ad").unwrap();

    for i in 0..mac.len() {
        for bit in 0..8 {
            let mut bad = mac.clone();
            bad[i] ^= 1 << bit;
            assert!(matches!(
                ccm.decrypt(&nonce, &ct, b"ad", &bad),
                Err(Error::Authentication { .. })
            ));
        }
    }
    assert!(ccm.decrypt(&nonce, &ct, b"ad", &mac[..4]).is_err());
    assert!(ccm.decrypt(&nonce, &ct, b"ad", &[]).is_err());
}

#[test]
fn test_empty_adata_sets_no_adata_flag() {
    // with no associated data the MAC is CBC-MAC over B0 and the payload only
    let ccm = Ccm::new(nist_key());
    let nonce = seq(0x10, 13);
    let (_, mac) = ccm.encrypt(&nonce, b"", b"").unwrap();

    let mut b0 = [0u8; AES_BLOCK_SIZE];
    b0[0] = (((16 - 2) / 2) << 3) | 1;
    b0[1..14].copy_from_slice(&nonce);
    assert_eq!(mac, ccm.cipher().encrypt_array(&b0).to_vec());
}

#[test]
fn test_ciphertext_shorter_than_tag() {
    let ccm = Ccm::with_tag_len(nist_key(), 8).unwrap();
    let nonce = seq(0x10, 13);
    assert!(matches!(
        ccm.decrypt(&nonce, &[0u8; 7], b"", &[0u8; 8]),
        Err(Error::Truncated { minimum: 8, actual: 7, .. })
    ));
}

#[test]
fn test_invalid_parameters() {
    assert!(Ccm::with_tag_len(nist_key(), 6).is_err());
    assert!(Ccm::with_tag_len(nist_key(), 20).is_err());
    assert!(Ccm::with_tag_len(nist_key(), 0).is_err());

    let ccm = Ccm::new(nist_key());
    assert!(ccm.encrypt(&[0u8; 6], b"x", b"").is_err());
    assert!(ccm.encrypt(&[0u8; 14], b"x", b"").is_err());
}

#[test]
fn test_payload_exceeds_length_field() {
    // a 13-byte nonce leaves two length bytes
    let ccm = Ccm::new(nist_key());
    let big = vec![0u8; 1 << 16];
    assert!(ccm.encrypt(&[0u8; 13], &big, b"").is_err());
    assert!(ccm.encrypt(&[0u8; 12], &big, b"").is_ok());
}

#[test]
fn test_cmac_shares_key_and_tag_length() {
    let ccm = Ccm::with_tag_len(nist_key(), 8).unwrap();
    let cmac = ccm.cmac().unwrap();
    assert_eq!(cmac.tag_len(), 8);
    let direct = Cmac::new(nist_key(), 8).unwrap();
    assert_eq!(cmac.tag(b"message"), direct.tag(b"message"));
}

#[test]
fn test_authenticated_cipher_trait() {
    let ccm = Ccm::new(nist_key());
    let nonce = seq(0x10, 13);
    let sealed = ccm.seal(&nonce, b"trait path", b"ad").unwrap();
    assert_eq!(sealed.ciphertext.len(), 10 + 16);
    assert_eq!(sealed.tag.len(), 16);
    assert_eq!(ccm.algorithm(), "AES-CCM");

    let opened = ccm.open(&nonce, &sealed.ciphertext, b"ad", &sealed.tag).unwrap();
    assert_eq!(&opened[..], b"trait path");
    assert!(ccm.open(&nonce, &sealed.ciphertext, b"ad", &[]).is_err());

    let mut bad = sealed.ciphertext.clone();
    bad[0] ^= 0x80;
    assert_eq!(
        ccm.open(&nonce, &bad, b"ad", &sealed.tag).unwrap_err().kind(),
        crypad_api::ErrorKind::AuthenticationFailure
    );
}

#[test]
fn test_debug_hides_key() {
    let rendered = format!("{:?}", Ccm::new(nist_key()));
    assert!(rendered.contains("tag_len"));
    assert!(!rendered.contains("4041"));
}
