use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EdkeyError>;

#[derive(Debug, Error)]
pub enum EdkeyError {
    #[error("Неподдерживаемый тип ключа: {0} (поддерживается только ssh-ed25519)")]
    UnsupportedKeyType(String),

    #[error("Комментарий слишком длинный: {0} байт")]
    CommentTooLong(usize),

    #[error("Неверная PEM-обёртка: {0}")]
    Pem(String),

    #[error("Неожиданный конец данных")]
    Truncated,

    #[error("Лишние данные после последнего поля ({0} байт)")]
    TrailingData(usize),

    #[error("Повреждённый контейнер ключа: {0}")]
    Malformed(String),

    #[error("Неподдерживаемый контейнер ключа: {0}")]
    Unsupported(String),

    #[error("Контрольные числа не совпадают ({0:#010x} != {1:#010x})")]
    CheckintMismatch(u32, u32),

    #[error("Неверное выравнивание в блоке закрытого ключа")]
    BadPadding,

    #[error("Неверный seed: {0}")]
    InvalidSeed(String),

    #[error("Файл '{}' уже существует. Используйте --force для перезаписи.", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Не удалось определить домашний каталог")]
    NoHomeDir,

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ошибка JSON: {0}")]
    Json(#[from] serde_json::Error),
}
