//! ECB mode tests: NIST SP 800-38A F.1 known answers, block independence,
//! and the input-validation contract.

use crate::aes::{ecb_decrypt, ecb_encrypt, Variant, AES_BLOCK_SIZE, MAX_BUFFER_SIZE};
use crate::error::Error;

/// The four-block SP 800-38A test plaintext, 64 bytes.
const PLAINTEXT: &str = "6bc1bee22e409f96e93d7e117393172a\
                         ae2d8a571e03ac9c9eb76fac45af8e51\
                         30c81c46a35ce411e5fbc1191a0a52ef\
                         f69f2445df4f9b17ad2b417be66c3710";

fn buf(s: &str) -> Vec<u8> {
    hex::decode(s.replace(char::is_whitespace, "")).expect("invalid hex in test vector")
}

#[test]
fn test_ecb_encrypt_sp800_38a_f1_1_aes128() {
    let key = buf("2b7e151628aed2a6abf7158809cf4f3c");
    let mut data = buf(PLAINTEXT);

    ecb_encrypt(&mut data, &key, Variant::Aes128).expect("encryption failed");

    assert_eq!(
        data,
        buf("3ad77bb40d7a3660a89ecaf32466ef97\
             f5d3d58503b9699de785895a96fdbaaf\
             43b1cd7f598ece23881b00e3ed030688\
             7b0c785e27e8ad3f8223207104725dd4"),
        "ciphertext does not match SP 800-38A F.1.1"
    );
}

#[test]
fn test_ecb_encrypt_sp800_38a_f1_3_aes192() {
    let key = buf("8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b");
    let mut data = buf(PLAINTEXT);

    ecb_encrypt(&mut data, &key, Variant::Aes192).expect("encryption failed");

    assert_eq!(
        data,
        buf("bd334f1d6e45f25ff712a214571fa5cc\
             974104846d0ad3ad7734ecb3ecee4eef\
             ef7afd2270e2e60adce0ba2face6444e\
             9a4b41ba738d6c72fb16691603c18e0e"),
        "ciphertext does not match SP 800-38A F.1.3"
    );
}

#[test]
fn test_ecb_encrypt_sp800_38a_f1_5_aes256() {
    let key = buf("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4");
    let mut data = buf(PLAINTEXT);

    ecb_encrypt(&mut data, &key, Variant::Aes256).expect("encryption failed");

    assert_eq!(
        data,
        buf("f3eed1bdb5d2a03c064b5a7e3db181f8\
             591ccb10d410ed26dc5ba74a31362870\
             b6ed21b99ca6f4f9f153e7b1beafed1d\
             23304b7a39f9f3ff067d8d8f9e24ecc7"),
        "ciphertext does not match SP 800-38A F.1.5"
    );
}

#[test]
fn test_ecb_decrypt_inverts_sp800_38a_f1_2_aes128() {
    let key = buf("2b7e151628aed2a6abf7158809cf4f3c");
    let mut data = buf("3ad77bb40d7a3660a89ecaf32466ef97\
                        f5d3d58503b9699de785895a96fdbaaf\
                        43b1cd7f598ece23881b00e3ed030688\
                        7b0c785e27e8ad3f8223207104725dd4");

    ecb_decrypt(&mut data, &key, Variant::Aes128).expect("decryption failed");

    assert_eq!(data, buf(PLAINTEXT));
}

#[test]
fn test_ecb_is_deterministic() {
    let key = buf("2b7e151628aed2a6abf7158809cf4f3c");
    let mut first = buf(PLAINTEXT);
    let mut second = buf(PLAINTEXT);

    ecb_encrypt(&mut first, &key, Variant::Aes128).expect("encryption failed");
    ecb_encrypt(&mut second, &key, Variant::Aes128).expect("encryption failed");

    assert_eq!(first, second);
}

#[test]
fn test_ecb_modifying_one_block_only_affects_that_block() {
    let key = buf("2b7e151628aed2a6abf7158809cf4f3c");
    let mut base = buf(PLAINTEXT);
    let mut tweaked = buf(PLAINTEXT);
    tweaked[AES_BLOCK_SIZE] ^= 0x01; // first byte of block 1

    ecb_encrypt(&mut base, &key, Variant::Aes128).expect("encryption failed");
    ecb_encrypt(&mut tweaked, &key, Variant::Aes128).expect("encryption failed");

    assert_eq!(base[..16], tweaked[..16], "block 0 changed");
    assert_ne!(base[16..32], tweaked[16..32], "block 1 did not change");
    assert_eq!(base[32..], tweaked[32..], "blocks 2..4 changed");
}

#[test]
fn test_ecb_rejects_bad_buffers_without_mutation() {
    let key = [0u8; 16];

    let mut empty: [u8; 0] = [];
    assert!(matches!(
        ecb_encrypt(&mut empty, &key, Variant::Aes128),
        Err(Error::InvalidArgument(_))
    ));

    let mut unaligned = [0x55u8; 24];
    let before = unaligned;
    assert!(matches!(
        ecb_encrypt(&mut unaligned, &key, Variant::Aes128),
        Err(Error::InvalidArgument(_))
    ));
    assert_eq!(unaligned, before, "buffer was modified on a rejected call");

    let mut oversize = [0x55u8; MAX_BUFFER_SIZE + AES_BLOCK_SIZE];
    let before = oversize;
    assert!(matches!(
        ecb_decrypt(&mut oversize, &key, Variant::Aes128),
        Err(Error::InvalidArgument(_))
    ));
    assert_eq!(oversize, before, "buffer was modified on a rejected call");
}
