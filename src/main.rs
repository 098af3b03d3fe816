use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::OutputArgs;
use edkey::Result;

#[derive(Parser)]
#[command(name = "edkey")]
#[command(author = "Oleg")]
#[command(version)]
#[command(about = "Ключи Ed25519 в формате приватного ключа OpenSSH", long_about = None)]
struct Cli {
    /// Подробный вывод (уровень debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Сгенерировать новый ключ Ed25519
    Generate {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Создать файл ключа из существующего 32-байтного seed
    Convert {
        /// Seed в шестнадцатеричном виде (64 символа)
        #[arg(long, env = "EDKEY_SEED_HEX", hide_env_values = true)]
        seed_hex: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Показать публичный ключ из файла приватного ключа
    Pubkey {
        /// Файл приватного ключа
        path: PathBuf,
    },

    /// Показать отпечаток ключа (как ssh-keygen -l)
    Fingerprint {
        /// Файл приватного ключа
        path: PathBuf,
    },

    /// Разобрать структуру файла приватного ключа
    Inspect {
        /// Файл приватного ключа
        path: PathBuf,

        /// Вывод в формате JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{} {}", "Ошибка:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Логи идут в stderr, чтобы не смешиваться с выводом ключей
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate { output } => cli::generate::run(&output),
        Commands::Convert { seed_hex, output } => cli::convert::run(&seed_hex, &output),
        Commands::Pubkey { path } => cli::pubkey::run(&path),
        Commands::Fingerprint { path } => cli::fingerprint::run(&path),
        Commands::Inspect { path, json } => cli::inspect::run(&path, json),
    }
}
