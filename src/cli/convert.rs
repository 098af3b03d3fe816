//! Создание файла ключа из существующего seed

use colored::Colorize;

use edkey::error::Result;
use edkey::Ed25519KeyPair;

use super::{save_keypair, OutputArgs};

pub fn run(seed_hex: &str, args: &OutputArgs) -> Result<()> {
    println!("{}", "=== Конвертация seed в ключ OpenSSH ===".cyan().bold());
    println!();

    let keypair = Ed25519KeyPair::from_seed_hex(seed_hex)?;
    save_keypair(&keypair, args)
}
