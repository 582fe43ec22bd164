//! Block-level properties of the Blowfish permutation

use blowfish::{Blowfish, BLOCK_SIZE};
use cipher_modes::{BlockCipher, CipherModes, Padding};
use proptest::prelude::*;

fn valid_key() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 4..=56)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn decrypt_inverts_encrypt(key in valid_key(), block in any::<[u8; BLOCK_SIZE]>()) {
        let cipher = Blowfish::new(&key).unwrap();
        let mut buffer = block;
        cipher.encrypt_block(&mut buffer);
        cipher.decrypt_block(&mut buffer);
        prop_assert_eq!(buffer, block);
    }

    #[test]
    fn cbc_roundtrip(
        key in valid_key(),
        iv in any::<[u8; BLOCK_SIZE]>(),
        data in prop::collection::vec(any::<u8>(), 0..=128)
    ) {
        let cipher = Blowfish::new(&key).unwrap();
        let ciphertext = CipherModes::cbc_encrypt(&cipher, &data, &iv, Padding::Pkcs7).unwrap();
        prop_assert_eq!(ciphertext.len() % BLOCK_SIZE, 0);
        prop_assert_eq!(
            CipherModes::cbc_decrypt(&cipher, &ciphertext, &iv, Padding::Pkcs7).unwrap(),
            data
        );
    }
}

#[test]
fn different_keys_give_different_blocks() {
    let mut a = *b"HELLO!!\0";
    let mut b = a;
    Blowfish::new(b"testkey123").unwrap().encrypt_block(&mut a);
    Blowfish::new(b"testkey124").unwrap().encrypt_block(&mut b);
    assert_ne!(a, b);
}

#[test]
fn ecb_matches_reference_vector() {
    let cipher = Blowfish::new(b"testkey123").unwrap();
    let ciphertext = CipherModes::ecb_encrypt(&cipher, b"HELLO!!", Padding::Zero).unwrap();
    assert_eq!(hex::encode(ciphertext), "7938dd116544897a");
}
