//! Strict reader for `openssh-key-v1` containers
//!
//! Accepts exactly what the encoder writes: one unencrypted Ed25519 key.
//! Every structural check OpenSSH performs on load is repeated here.

use tracing::debug;

use super::armor::dearmor;
use super::container::{CIPHER_NONE, KDF_NONE, MAGIC, NUM_KEYS};
use super::padding::{self, BLOCK_SIZE};
use super::wire::Reader;
use crate::crypto::{Ed25519KeyPair, KEY_ALGORITHM, PRIVATE_KEY_LEN, PUBLIC_KEY_LEN, SEED_LEN};
use crate::error::{EdkeyError, Result};

/// A key recovered from a container
#[derive(Debug)]
pub struct DecodedKey {
    /// The (duplicated) check integer
    pub checkint: u32,
    pub keypair: Ed25519KeyPair,
    pub comment: String,
    /// Number of pad bytes at the end of the private block
    pub pad_len: usize,
}

/// Parse PEM text produced by [`super::to_pem`] or `ssh-keygen`
pub fn from_pem(text: &str) -> Result<DecodedKey> {
    decode_container(&dearmor(text)?)
}

/// Parse a binary `openssh-key-v1` container
pub fn decode_container(data: &[u8]) -> Result<DecodedKey> {
    let body = data
        .strip_prefix(MAGIC)
        .ok_or_else(|| EdkeyError::Malformed("нет сигнатуры openssh-key-v1".into()))?;

    let mut reader = Reader::new(body);

    let cipher = reader.read_str()?;
    if cipher != CIPHER_NONE {
        return Err(EdkeyError::Unsupported(format!("шифр '{}'", cipher)));
    }

    let kdf = reader.read_str()?;
    if kdf != KDF_NONE {
        return Err(EdkeyError::Unsupported(format!("kdf '{}'", kdf)));
    }

    let kdf_options = reader.read_bytes()?;
    if !kdf_options.is_empty() {
        return Err(EdkeyError::Unsupported("непустые параметры KDF".into()));
    }

    let num_keys = reader.read_u32()?;
    if num_keys != NUM_KEYS {
        return Err(EdkeyError::Unsupported(format!("ключей в контейнере: {}", num_keys)));
    }

    let public_key_blob = reader.read_bytes()?;
    let private_key_block = reader.read_bytes()?;
    reader.finish()?;

    let header_public = decode_public_blob(public_key_blob)?;
    let decoded = decode_private_block(private_key_block)?;

    if decoded.keypair.public_key_bytes() != header_public {
        return Err(EdkeyError::Malformed(
            "открытый ключ в заголовке не совпадает с закрытой секцией".into(),
        ));
    }

    debug!(
        checkint = decoded.checkint,
        comment_len = decoded.comment.len(),
        pad_len = decoded.pad_len,
        "decoded openssh-key-v1 container"
    );

    Ok(decoded)
}

fn decode_public_blob(blob: &[u8]) -> Result<&[u8]> {
    let mut reader = Reader::new(blob);

    let algorithm = reader.read_str()?;
    if algorithm != KEY_ALGORITHM {
        return Err(EdkeyError::UnsupportedKeyType(algorithm.to_string()));
    }

    let public = reader.read_bytes()?;
    reader.finish()?;
    Ok(public)
}

fn decode_private_block(block: &[u8]) -> Result<DecodedKey> {
    if block.len() % BLOCK_SIZE != 0 {
        return Err(EdkeyError::Malformed(format!(
            "длина закрытого блока {} не кратна {}",
            block.len(),
            BLOCK_SIZE
        )));
    }

    let mut reader = Reader::new(block);

    let check1 = reader.read_u32()?;
    let check2 = reader.read_u32()?;
    if check1 != check2 {
        return Err(EdkeyError::CheckintMismatch(check1, check2));
    }

    let keytype = reader.read_str()?;
    if keytype != KEY_ALGORITHM {
        return Err(EdkeyError::UnsupportedKeyType(keytype.to_string()));
    }

    let public: [u8; PUBLIC_KEY_LEN] = reader.read_bytes()?.try_into().map_err(|_| {
        EdkeyError::Malformed(format!("открытый ключ должен занимать {} байт", PUBLIC_KEY_LEN))
    })?;

    let private: [u8; PRIVATE_KEY_LEN] = reader.read_bytes()?.try_into().map_err(|_| {
        EdkeyError::Malformed(format!("закрытый ключ должен занимать {} байт", PRIVATE_KEY_LEN))
    })?;

    if private[SEED_LEN..] != public {
        return Err(EdkeyError::Malformed(
            "закрытый ключ не содержит свой открытый ключ".into(),
        ));
    }

    let comment = reader.read_str()?.to_string();

    let pad = reader.rest();
    if !padding::is_valid_pad(pad) {
        return Err(EdkeyError::BadPadding);
    }

    Ok(DecodedKey {
        checkint: check1,
        keypair: Ed25519KeyPair::new(public, private),
        comment,
        pad_len: pad.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openssh::container::build_container;
    use crate::openssh::wire::{encode_record, Field};

    fn zero_keypair() -> Ed25519KeyPair {
        Ed25519KeyPair::from_expanded([0u8; PRIVATE_KEY_LEN])
    }

    /// Offset of the private block's length prefix in a container built
    /// from `zero_keypair()`
    fn private_block_offset() -> usize {
        // magic + "none" + "none" + "" + u32 + string(51-byte blob)
        MAGIC.len() + 8 + 8 + 4 + 4 + 4 + 51
    }

    #[test]
    fn test_decode_built_container() {
        let keypair = zero_keypair();
        let container = build_container(&keypair, "hello", 1234).unwrap();

        let decoded = decode_container(&container).unwrap();

        assert_eq!(decoded.checkint, 1234);
        assert_eq!(decoded.comment, "hello");
        assert_eq!(decoded.keypair.public_key_bytes(), keypair.public_key_bytes());
        assert_eq!(decoded.keypair.private_key_bytes(), keypair.private_key_bytes());
    }

    #[test]
    fn test_decode_reports_pad_len() {
        let keypair = zero_keypair();
        for comment_len in 0..BLOCK_SIZE {
            let comment = "c".repeat(comment_len);
            let container = build_container(&keypair, &comment, 0).unwrap();
            let decoded = decode_container(&container).unwrap();
            assert_eq!(decoded.pad_len, padding::pad_len(131 + comment_len));
        }
    }

    #[test]
    fn test_rejects_bad_magic() {
        let mut container = build_container(&zero_keypair(), "", 0).unwrap();
        container[0] = b'O';
        assert!(matches!(decode_container(&container), Err(EdkeyError::Malformed(_))));
    }

    #[test]
    fn test_rejects_checkint_mismatch() {
        let mut container = build_container(&zero_keypair(), "", 0).unwrap();
        // Last byte of check2
        let check2_end = private_block_offset() + 4 + 8 - 1;
        container[check2_end] = 1;

        assert!(matches!(
            decode_container(&container),
            Err(EdkeyError::CheckintMismatch(0, 1))
        ));
    }

    #[test]
    fn test_rejects_bad_padding() {
        let mut container = build_container(&zero_keypair(), "", 0).unwrap();
        let last = container.len() - 1;
        container[last] = 9;
        assert!(matches!(decode_container(&container), Err(EdkeyError::BadPadding)));
    }

    #[test]
    fn test_rejects_truncated() {
        let container = build_container(&zero_keypair(), "", 0).unwrap();
        let truncated = &container[..container.len() - 3];
        assert!(matches!(decode_container(truncated), Err(EdkeyError::Truncated)));
    }

    #[test]
    fn test_rejects_trailing_data() {
        let mut container = build_container(&zero_keypair(), "", 0).unwrap();
        container.push(0);
        assert!(matches!(
            decode_container(&container),
            Err(EdkeyError::TrailingData(1))
        ));
    }

    #[test]
    fn test_rejects_encrypted_container() {
        let mut container = MAGIC.to_vec();
        container.extend(encode_record(&[
            Field::Bytes(b"aes256-ctr"),
            Field::Bytes(b"bcrypt"),
            Field::Bytes(b"salt"),
            Field::U32(1),
        ]));
        assert!(matches!(decode_container(&container), Err(EdkeyError::Unsupported(_))));
    }

    #[test]
    fn test_rejects_multiple_keys() {
        let mut container = MAGIC.to_vec();
        container.extend(encode_record(&[
            Field::Bytes(b"none"),
            Field::Bytes(b"none"),
            Field::Bytes(b""),
            Field::U32(2),
        ]));
        assert!(matches!(decode_container(&container), Err(EdkeyError::Unsupported(_))));
    }

    #[test]
    fn test_rejects_other_key_types() {
        let blob = encode_record(&[Field::Bytes(b"ssh-rsa"), Field::Bytes(&[1, 2, 3])]);
        let mut container = MAGIC.to_vec();
        container.extend(encode_record(&[
            Field::Bytes(b"none"),
            Field::Bytes(b"none"),
            Field::Bytes(b""),
            Field::U32(1),
            Field::Bytes(&blob),
            Field::Bytes(&[0u8; 8]),
        ]));

        match decode_container(&container) {
            Err(EdkeyError::UnsupportedKeyType(alg)) => assert_eq!(alg, "ssh-rsa"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_header_public_mismatch() {
        let keypair = zero_keypair();
        let mut container = build_container(&keypair, "", 0).unwrap();
        // Last byte of the public key inside the header blob
        let header_pub_end = private_block_offset() - 1;
        container[header_pub_end] = 0xFF;
        assert!(matches!(decode_container(&container), Err(EdkeyError::Malformed(_))));
    }
}
