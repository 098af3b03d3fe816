//! Key material for edkey
//!
//! This module provides:
//! - The Ed25519 key pair accepted by the encoder
//! - Check integer generation from a caller-supplied RNG

pub mod checkint;
mod keys;

pub use keys::{Ed25519KeyPair, KEY_ALGORITHM, PRIVATE_KEY_LEN, PUBLIC_KEY_LEN, SEED_LEN};
