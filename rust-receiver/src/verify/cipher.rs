//! AES-256-CBC payload encryption and decryption.
//!
//! Payloads travel as lowercase hex ciphertext. The cipher is keyed
//! directly by the shared secret's raw bytes; the IV comes from
//! [`derive_iv`](super::keys::derive_iv).

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;

use super::keys::IV_LEN;
use crate::error::DecryptionError;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// AES-256 key size in bytes. The shared secret must be exactly this long.
pub const KEY_LEN: usize = 32;

fn key_bytes(secret_key: &str) -> Result<&[u8], DecryptionError> {
    let bytes = secret_key.as_bytes();
    if bytes.len() != KEY_LEN {
        return Err(DecryptionError::KeyLength {
            expected: KEY_LEN,
            actual: bytes.len(),
        });
    }
    Ok(bytes)
}

/// Decrypt hex-encoded ciphertext into a UTF-8 plaintext string.
pub fn decrypt_hex(
    secret_key: &str,
    iv: &[u8; IV_LEN],
    ciphertext_hex: &str,
) -> Result<String, DecryptionError> {
    let key = key_bytes(secret_key)?;
    let ciphertext = hex::decode(ciphertext_hex)?;

    let decryptor =
        Aes256CbcDec::new_from_slices(key, iv).map_err(|_| DecryptionError::Cipher)?;
    let plaintext = decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
        .map_err(|_| DecryptionError::Cipher)?;

    String::from_utf8(plaintext).map_err(|_| DecryptionError::PlaintextEncoding)
}

/// Encrypt a plaintext string into lowercase hex ciphertext.
///
/// Counterpart of [`decrypt_hex`]. Senders and tests use it to produce
/// payloads the receiver accepts.
pub fn encrypt_hex(
    secret_key: &str,
    iv: &[u8; IV_LEN],
    plaintext: &str,
) -> Result<String, DecryptionError> {
    let key = key_bytes(secret_key)?;

    let encryptor =
        Aes256CbcEnc::new_from_slices(key, iv).map_err(|_| DecryptionError::Cipher)?;
    let ciphertext = encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    Ok(hex::encode(ciphertext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::keys::derive_iv;

    const SECRET_KEY: &str = "01234567890123456789012345678901";

    #[test]
    fn test_encrypt_decrypt_round_trip() {
        let iv = derive_iv(SECRET_KEY);
        let plaintext = r#"{"event":"zup.end_step","data":{"stepId":"s1"}}"#;

        let ciphertext = encrypt_hex(SECRET_KEY, &iv, plaintext).unwrap();
        let decrypted = decrypt_hex(SECRET_KEY, &iv, &ciphertext).unwrap();

        assert_eq!(decrypted, plaintext);
        assert_eq!(ciphertext.len() % 32, 0); // hex of block-aligned ciphertext
        assert!(ciphertext.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_round_trip_empty_plaintext() {
        let iv = derive_iv(SECRET_KEY);

        let ciphertext = encrypt_hex(SECRET_KEY, &iv, "").unwrap();
        let decrypted = decrypt_hex(SECRET_KEY, &iv, &ciphertext).unwrap();

        assert_eq!(decrypted, "");
    }

    #[test]
    fn test_key_length_enforced() {
        let iv = derive_iv(SECRET_KEY);

        let err = decrypt_hex("too-short", &iv, "00").unwrap_err();
        assert!(matches!(
            err,
            DecryptionError::KeyLength { expected: 32, actual: 9 }
        ));

        let err = encrypt_hex("too-short", &iv, "payload").unwrap_err();
        assert!(matches!(err, DecryptionError::KeyLength { .. }));
    }

    #[test]
    fn test_decrypt_rejects_non_hex_ciphertext() {
        let iv = derive_iv(SECRET_KEY);

        let err = decrypt_hex(SECRET_KEY, &iv, "not hex!").unwrap_err();
        assert!(matches!(err, DecryptionError::CiphertextEncoding(_)));
    }

    #[test]
    fn test_decrypt_rejects_unaligned_ciphertext() {
        let iv = derive_iv(SECRET_KEY);

        // 8 bytes is not a whole AES block
        let err = decrypt_hex(SECRET_KEY, &iv, "0011223344556677").unwrap_err();
        assert!(matches!(err, DecryptionError::Cipher));
    }

    #[test]
    fn test_decrypt_rejects_empty_ciphertext() {
        let iv = derive_iv(SECRET_KEY);

        let err = decrypt_hex(SECRET_KEY, &iv, "").unwrap_err();
        assert!(matches!(err, DecryptionError::Cipher));
    }

    #[test]
    fn test_decrypt_rejects_non_utf8_plaintext() {
        let iv = derive_iv(SECRET_KEY);

        // Encrypt raw non-UTF-8 bytes through the cipher directly
        let encryptor = Aes256CbcEnc::new_from_slices(SECRET_KEY.as_bytes(), &iv).unwrap();
        let ciphertext = encryptor.encrypt_padded_vec_mut::<Pkcs7>(&[0xff, 0xfe, 0xc0]);

        let err = decrypt_hex(SECRET_KEY, &iv, &hex::encode(ciphertext)).unwrap_err();
        assert!(matches!(err, DecryptionError::PlaintextEncoding));
    }
}
