//! Реализация CLI команд

pub mod convert;
pub mod fingerprint;
pub mod generate;
pub mod inspect;
pub mod pubkey;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use colored::Colorize;

use edkey::config;
use edkey::error::Result;
use edkey::{DecodedKey, Ed25519KeyPair};

/// Куда и с каким комментарием сохранить ключ
#[derive(Args)]
pub struct OutputArgs {
    /// Файл приватного ключа [по умолчанию: ~/.ssh/id_ed25519]
    #[arg(short, long, env = "EDKEY_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Комментарий ключа (как ssh-keygen -C)
    #[arg(short = 'C', long, env = "EDKEY_COMMENT", default_value = "")]
    pub comment: String,

    /// Перезаписать существующие файлы
    #[arg(long)]
    pub force: bool,
}

impl OutputArgs {
    /// Путь к файлу приватного ключа
    pub fn private_path(&self) -> Result<PathBuf> {
        match &self.output {
            Some(path) => Ok(path.clone()),
            None => config::default_identity_path(),
        }
    }
}

/// Закодировать ключ и записать пару файлов
pub fn save_keypair(keypair: &Ed25519KeyPair, args: &OutputArgs) -> Result<()> {
    let path = args.private_path()?;

    print!("{}", "Кодирование в формат OpenSSH... ".cyan());
    io::stdout().flush()?;

    let private_pem = edkey::to_pem(keypair, &args.comment)?;
    let public_line = keypair.public_key_openssh(&args.comment);
    println!("{}", "готово".green());

    print!("{}", "Сохранение файлов ключа... ".cyan());
    io::stdout().flush()?;

    config::write_identity(&path, &private_pem, &public_line, args.force)?;
    println!("{}", "готово".green());

    println!();
    println!("Приватный ключ: {}", path.display().to_string().cyan());
    println!(
        "Публичный ключ: {}",
        config::public_key_path(&path).display().to_string().cyan()
    );
    println!("Отпечаток:      {}", keypair.fingerprint().bold());
    println!();
    print_public_key(&public_line);

    Ok(())
}

/// Прочитать и разобрать файл приватного ключа
pub fn load_key(path: &Path) -> Result<DecodedKey> {
    let text = config::read_identity(path)?;
    edkey::from_pem(&text)
}

/// Вывести публичный ключ в рамке
pub fn print_public_key(public_line: &str) {
    println!("{}", "─".repeat(60).dimmed());
    println!("{}", public_line);
    println!("{}", "─".repeat(60).dimmed());
}
