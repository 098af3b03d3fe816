//! Check integer for the private key record
//!
//! For encrypted keys the duplicated checkint lets a decryptor confirm it
//! derived the right key. With cipher "none" it only has to be present
//! twice and equal, but parsers verify that, so it is always written.

use rand::RngCore;

/// Draw a fresh checkint from the caller's randomness source
pub fn draw<R: RngCore + ?Sized>(rng: &mut R) -> u32 {
    rng.next_u32()
}
