//! `openssh-key-v1` container assembly
//!
//! Layout (see PROTOCOL.key in the OpenSSH sources):
//! ```text
//! "openssh-key-v1\0"
//! string  ciphername        "none"
//! string  kdfname           "none"
//! string  kdfoptions        ""
//! uint32  number of keys    1
//! string  public key blob
//! string  private key block
//!     uint32 check1, uint32 check2
//!     string keytype, string pub, string priv, string comment
//!     byte[] padding 1, 2, 3, ...
//! ```

use tracing::debug;
use zeroize::Zeroizing;

use super::padding::{self, BLOCK_SIZE};
use super::wire::{encode_record, record_len, Field};
use crate::crypto::{Ed25519KeyPair, KEY_ALGORITHM};
use crate::error::{EdkeyError, Result};

/// Leading magic, including the NUL terminator
pub const MAGIC: &[u8] = b"openssh-key-v1\0";

/// Only unencrypted containers are written
pub const CIPHER_NONE: &str = "none";
pub const KDF_NONE: &str = "none";

/// Multi-key containers are not supported
pub const NUM_KEYS: u32 = 1;

/// Longest comment accepted, in bytes
pub const MAX_COMMENT_LEN: usize = 0x800_0000;

/// The private section of the container, before padding
#[derive(Clone, Copy)]
pub struct PrivateKeyRecord<'a> {
    pub checkint: u32,
    pub public: &'a [u8],
    pub private: &'a [u8],
    pub comment: &'a str,
}

impl<'a> PrivateKeyRecord<'a> {
    pub fn new(keypair: &'a Ed25519KeyPair, comment: &'a str, checkint: u32) -> Self {
        Self {
            checkint,
            public: keypair.public_key_bytes(),
            private: keypair.private_key_bytes(),
            comment,
        }
    }

    /// Record fields in wire order, excluding the pad
    fn fields(&self) -> [Field<'a>; 6] {
        [
            Field::U32(self.checkint),
            Field::U32(self.checkint),
            Field::Bytes(KEY_ALGORITHM.as_bytes()),
            Field::Bytes(self.public),
            Field::Bytes(self.private),
            Field::Bytes(self.comment.as_bytes()),
        ]
    }

    /// Encoded length without the pad
    pub fn unpadded_len(&self) -> usize {
        record_len(&self.fields())
    }

    /// Encode the record with its trailing pad
    pub fn encode(&self) -> Zeroizing<Vec<u8>> {
        let unpadded_len = self.unpadded_len();
        let pad = padding::padding_for(unpadded_len);

        let [check1, check2, keytype, public, private, comment] = self.fields();
        let block = Zeroizing::new(encode_record(&[
            check1,
            check2,
            keytype,
            public,
            private,
            comment,
            Field::Raw(&pad),
        ]));

        debug!(
            comment_len = self.comment.len(),
            unpadded_len,
            pad_len = pad.len(),
            block_len = block.len(),
            "encoded private key block"
        );
        debug_assert_eq!(block.len() % BLOCK_SIZE, 0);

        block
    }
}

/// The outer container wrapping one public key blob and one private block
pub struct ContainerHeader<'a> {
    pub public_key_blob: &'a [u8],
    pub private_key_block: &'a [u8],
}

impl ContainerHeader<'_> {
    /// Encode magic and header fields
    pub fn encode(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(encode_record(&[
            Field::Raw(MAGIC),
            Field::Bytes(CIPHER_NONE.as_bytes()),
            Field::Bytes(KDF_NONE.as_bytes()),
            Field::Bytes(b""),
            Field::U32(NUM_KEYS),
            Field::Bytes(self.public_key_blob),
            Field::Bytes(self.private_key_block),
        ]))
    }
}

/// Reject comments OpenSSH could not load
///
/// `ssh` caps every buffer at 128 MiB (SSHBUF_SIZE_MAX), so a longer
/// comment can never produce a usable file.
pub fn check_comment_len(len: usize) -> Result<()> {
    if len > MAX_COMMENT_LEN {
        return Err(EdkeyError::CommentTooLong(len));
    }
    Ok(())
}

/// Build the binary `openssh-key-v1` container for `keypair`
///
/// The key type needs no check here: [`Ed25519KeyPair`] can only hold
/// Ed25519 keys, and other algorithms are rejected when converting into it.
///
/// # Errors
/// Returns CommentTooLong if `comment` exceeds [`MAX_COMMENT_LEN`].
pub fn build_container(
    keypair: &Ed25519KeyPair,
    comment: &str,
    checkint: u32,
) -> Result<Zeroizing<Vec<u8>>> {
    check_comment_len(comment.len())?;

    let private_key_block = PrivateKeyRecord::new(keypair, comment, checkint).encode();
    let public_key_blob = keypair.public_key_blob();

    let container = ContainerHeader {
        public_key_blob: &public_key_blob,
        private_key_block: &private_key_block,
    }
    .encode();

    debug!(container_len = container.len(), "built openssh-key-v1 container");
    Ok(container)
}
