use std::io;
use std::path::PathBuf;

/// Exit status when the input file cannot be read.
pub const EXIT_READ: u8 = 72;

/// Exit status when the output file cannot be written.
pub const EXIT_WRITE: u8 = 73;

/// Exit status for bad command line usage.
pub const EXIT_USAGE: u8 = 64;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("can not open {} for reading: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("can not open {} for writing: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("{0}")]
    Usage(String),
}

impl Error {
    pub fn usage(msg: impl Into<String>) -> Self {
        Error::Usage(msg.into())
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Read { .. } => EXIT_READ,
            Error::Write { .. } => EXIT_WRITE,
            Error::Usage(_) => EXIT_USAGE,
        }
    }
}
