//! Отображение публичного SSH-ключа

use std::path::Path;

use edkey::error::Result;

use super::load_key;

pub fn run(path: &Path) -> Result<()> {
    let decoded = load_key(path)?;

    // Только сама строка, чтобы вывод можно было перенаправить в .pub
    println!("{}", decoded.keypair.public_key_openssh(&decoded.comment));

    Ok(())
}
