//! Разбор структуры файла приватного ключа

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use edkey::error::Result;
use edkey::DecodedKey;

use super::load_key;

/// Сводка по ключу для вывода
#[derive(Debug, Serialize)]
pub struct KeySummary {
    pub key_type: &'static str,
    pub fingerprint: String,
    pub public_key: String,
    pub comment: String,
    pub checkint: u32,
    pub pad_len: usize,
}

impl From<&DecodedKey> for KeySummary {
    fn from(decoded: &DecodedKey) -> Self {
        Self {
            key_type: decoded.keypair.algorithm(),
            fingerprint: decoded.keypair.fingerprint(),
            public_key: decoded.keypair.public_key_openssh(""),
            comment: decoded.comment.clone(),
            checkint: decoded.checkint,
            pad_len: decoded.pad_len,
        }
    }
}

pub fn run(path: &Path, json: bool) -> Result<()> {
    let decoded = load_key(path)?;
    let summary = KeySummary::from(&decoded);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", "=== openssh-key-v1 ===".cyan().bold());
    println!();
    println!("{:<14} {}", "Шифр:".bold(), "none");
    println!("{:<14} {}", "KDF:".bold(), "none");
    println!("{:<14} {}", "Тип ключа:".bold(), summary.key_type);
    println!("{:<14} {}", "Отпечаток:".bold(), summary.fingerprint);
    println!("{:<14} {:#010x}", "Checkint:".bold(), summary.checkint);
    println!("{:<14} {}", "Комментарий:".bold(), summary.comment);
    println!("{:<14} {}", "Выравнивание:".bold(), summary.pad_len);
    println!();
    super::print_public_key(&summary.public_key);

    Ok(())
}
