//! End-to-end behaviour of cipher sessions

use std::sync::{Arc, Mutex};
use std::thread;

use cipher_session::{CipherChoice, CipherError, CipherSession, ModeChoice, Padding, SessionError};
use proptest::prelude::*;

fn session_with(key: &[u8], iv: &[u8]) -> CipherSession {
    CipherSession::new(CipherChoice::Blowfish, ModeChoice::Cbc)
        .unwrap()
        .with_key(key)
        .unwrap()
        .with_iv(iv)
        .unwrap()
}

#[test]
fn unsupported_ids_are_rejected() {
    assert_eq!(
        CipherSession::from_ids(999, 1).unwrap_err(),
        SessionError::UnsupportedCipher(999)
    );
    assert_eq!(
        CipherSession::from_ids(1, 999).unwrap_err(),
        SessionError::UnsupportedMode(999)
    );
}

#[test]
fn from_ids_builds_blowfish_cbc() {
    let session = CipherSession::from_ids(1, 1).unwrap();
    assert_eq!(session.cipher(), CipherChoice::Blowfish);
    assert_eq!(session.mode(), ModeChoice::Cbc);
    assert_eq!(session.padding(), Padding::Zero);
    assert_eq!(session.iv_size(), 8);
    assert_eq!(session.iv().map(<[u8]>::len), Some(8));
}

#[test]
fn empty_key_and_iv_are_rejected() {
    let mut session = CipherSession::from_ids(1, 1).unwrap();
    assert_eq!(
        session.set_key(b"").unwrap_err(),
        SessionError::Cipher(CipherError::EmptyKey)
    );
    assert_eq!(
        session.set_iv(b"").unwrap_err(),
        SessionError::Cipher(CipherError::EmptyIv)
    );
}

#[test]
fn non_hex_input_is_rejected() {
    let session = session_with(b"testkey123", &[0u8; 8]);
    assert!(matches!(
        session.decrypt("zz"),
        Err(SessionError::Cipher(CipherError::InvalidHexInput(_)))
    ));
}

#[test]
fn independent_sessions_get_different_ivs() {
    let a = CipherSession::from_ids(1, 1).unwrap();
    let b = CipherSession::from_ids(1, 1).unwrap();
    assert_ne!(a.iv(), b.iv());
}

#[test]
fn generated_iv_roundtrips() {
    let session = CipherSession::from_ids(1, 1)
        .unwrap()
        .with_key(b"another key")
        .unwrap();

    let wire = session.encrypt(b"payload with a random iv").unwrap();
    assert_eq!(session.decrypt(&wire).unwrap(), b"payload with a random iv");
}

#[test]
fn different_ivs_give_different_ciphertext() {
    let a = session_with(b"testkey123", &[0u8; 8]);
    let b = session_with(b"testkey123", &[1u8; 8]);
    assert_ne!(a.encrypt(b"same text").unwrap(), b.encrypt(b"same text").unwrap());
}

#[test]
fn zero_padding_loses_trailing_nuls() {
    let session = session_with(b"testkey123", &[0u8; 8]);
    let wire = session.encrypt(b"abc\0\0").unwrap();
    assert_eq!(session.decrypt(&wire).unwrap(), b"abc");

    let session = session.with_padding(Padding::Pkcs7);
    let wire = session.encrypt(b"abc\0\0").unwrap();
    assert_eq!(session.decrypt(&wire).unwrap(), b"abc\0\0");
}

#[test]
fn pkcs7_rejects_zero_padded_ciphertext() {
    let zero = session_with(b"testkey123", &[0u8; 8]);
    let wire = zero.encrypt(b"12345678").unwrap();

    let pkcs7 = zero.clone().with_padding(Padding::Pkcs7);
    assert_eq!(
        pkcs7.decrypt(&wire).unwrap_err(),
        SessionError::Cipher(CipherError::InvalidPadding)
    );
}

#[test]
fn empty_plaintext_encrypts_to_empty_hex() {
    let session = session_with(b"testkey123", &[0u8; 8]);
    assert_eq!(session.encrypt(b"").unwrap(), "");
    assert!(session.decrypt("").unwrap().is_empty());
}

#[test]
fn one_session_per_thread() {
    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            thread::spawn(move || {
                let session = session_with(&[i + 1; 16], &[i; 8]);
                let message = vec![b'a' + i; 100];
                let wire = session.encrypt(&message).unwrap();
                session.decrypt(&wire).unwrap() == message
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn shared_session_behind_mutex() {
    let shared = Arc::new(Mutex::new(session_with(b"shared key", &[3u8; 8])));

    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let mut session = shared.lock().unwrap();
                session.set_iv(&[i; 8]).unwrap();
                let wire = session.encrypt(b"locked").unwrap();
                session.decrypt(&wire).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), b"locked");
    }
}

fn valid_key() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 4..=56)
}

fn plaintext_without_trailing_zero() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=200).prop_map(|mut v| {
        while v.last() == Some(&0) {
            v.pop();
        }
        v
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn encrypt_then_decrypt_restores_plaintext(
        key in valid_key(),
        iv in any::<[u8; 8]>(),
        plaintext in plaintext_without_trailing_zero()
    ) {
        let session = session_with(&key, &iv);
        let wire = session.encrypt(&plaintext).unwrap();
        prop_assert_eq!(wire.len() % 16, 0);
        prop_assert_eq!(session.decrypt(&wire).unwrap(), plaintext);
    }

    #[test]
    fn pkcs7_restores_any_plaintext(
        key in valid_key(),
        iv in any::<[u8; 8]>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..=200)
    ) {
        let session = session_with(&key, &iv).with_padding(Padding::Pkcs7);
        let wire = session.encrypt(&plaintext).unwrap();
        prop_assert_eq!(wire.len() % 16, 0);
        prop_assert_eq!(session.decrypt(&wire).unwrap(), plaintext);
    }
}
