use thiserror::Error;

/// Errors raised while building datasets, mining, or reporting.
///
/// The mining engine itself only ever returns `InvalidInput`; `Io` comes from
/// reading transaction files and writing reports.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_input<S: Into<String>>(reason: S) -> Error {
        Error::InvalidInput(reason.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
