//! Генерация нового ключа Ed25519

use colored::Colorize;
use rand::rngs::OsRng;

use edkey::error::Result;
use edkey::Ed25519KeyPair;

use super::{save_keypair, OutputArgs};

pub fn run(args: &OutputArgs) -> Result<()> {
    println!("{}", "=== Генерация ключа Ed25519 ===".cyan().bold());
    println!();

    let keypair = Ed25519KeyPair::generate(&mut OsRng);
    tracing::debug!(fingerprint = %keypair.fingerprint(), "generated key pair");

    save_keypair(&keypair, args)?;

    println!();
    println!(
        "Для подключения выполните: {}",
        format!("ssh -i {} user@host", args.private_path()?.display()).cyan()
    );

    Ok(())
}
