//! OpenSSH private key format (`openssh-key-v1`)
//!
//! Encoding is a single linear pass:
//! checkint -> private record -> padding -> container header -> PEM armor

pub mod armor;
pub mod container;
pub mod decode;
pub mod padding;
pub mod wire;

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::crypto::{checkint, Ed25519KeyPair};
use crate::error::Result;

pub use armor::{armor, dearmor, PEM_LABEL};
pub use container::{build_container, MAX_COMMENT_LEN};
pub use decode::{decode_container, from_pem, DecodedKey};

/// Encode `keypair` as an OpenSSH private key file, drawing the checkint
/// from the operating system RNG
///
/// The returned text can be written to a file and passed to `ssh -i`. It
/// holds the private key and is wiped when dropped.
pub fn to_pem(keypair: &Ed25519KeyPair, comment: &str) -> Result<Zeroizing<String>> {
    to_pem_with_rng(keypair, comment, &mut OsRng)
}

/// Like [`to_pem`], drawing the checkint from `rng`
pub fn to_pem_with_rng<R: RngCore + ?Sized>(
    keypair: &Ed25519KeyPair,
    comment: &str,
    rng: &mut R,
) -> Result<Zeroizing<String>> {
    to_pem_with_checkint(keypair, comment, checkint::draw(rng))
}

/// Like [`to_pem`], with a caller-chosen checkint
///
/// Output is byte-for-byte reproducible for the same inputs.
pub fn to_pem_with_checkint(
    keypair: &Ed25519KeyPair,
    comment: &str,
    checkint: u32,
) -> Result<Zeroizing<String>> {
    let container = build_container(keypair, comment, checkint)?;
    Ok(armor(&container))
}
