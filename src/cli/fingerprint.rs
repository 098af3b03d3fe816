//! Отпечаток ключа в формате ssh-keygen -l

use std::path::Path;

use edkey::error::Result;
use edkey::DecodedKey;

use super::load_key;

/// Размер ключа Ed25519 в битах
const KEY_BITS: u32 = 256;

pub fn run(path: &Path) -> Result<()> {
    let decoded = load_key(path)?;
    println!("{}", fingerprint_line(&decoded));
    Ok(())
}

/// "256 SHA256:... comment (ED25519)", как печатает ssh-keygen -lf
pub fn fingerprint_line(decoded: &DecodedKey) -> String {
    format!(
        "{} {} {} (ED25519)",
        KEY_BITS,
        decoded.keypair.fingerprint(),
        decoded.comment
    )
}
