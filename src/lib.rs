//! edkey - Ed25519 keys as OpenSSH private key files
//!
//! This crate turns an Ed25519 key pair and a comment into the
//! `openssh-key-v1` format understood by `ssh`, `ssh-keygen` and
//! `ssh-add`:
//! - Unencrypted containers only (cipher and KDF "none")
//! - One key per file
//! - Caller-supplied randomness for the check integer
//!
//! ```no_run
//! use edkey::{to_pem, Ed25519KeyPair};
//! use rand::rngs::OsRng;
//!
//! let keypair = Ed25519KeyPair::generate(&mut OsRng);
//! let pem = to_pem(&keypair, "me@example.com")?;
//! std::fs::write("id_ed25519", pem.as_bytes())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod crypto;
pub mod error;
pub mod openssh;

pub use crypto::Ed25519KeyPair;
pub use error::{EdkeyError, Result};
pub use openssh::{
    build_container, decode_container, from_pem, to_pem, to_pem_with_checkint, to_pem_with_rng,
    DecodedKey,
};
