//! Configuration and storage for edkey
//!
//! Handles:
//! - Default identity file locations
//! - Writing and reading identity files

mod storage;

pub use storage::{default_identity_path, public_key_path, read_identity, write_identity};
