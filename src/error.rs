use thiserror::Error;

/// Fatal errors of the menu loop. Recoverable situations (unknown menu
/// choice, empty list) are reported to the user and never reach here.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("jumlah nilai tidak valid: {input:?}")]
    InvalidCount { input: String },

    #[error("angka tidak valid: {input:?}")]
    InvalidNumber { input: String },

    #[error("input berakhir sebelum program selesai")]
    EndOfInput,

    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
