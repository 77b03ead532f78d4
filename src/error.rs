//! Errors surfaced by the command-line front end.
//!
//! The converter and assembler are total; only argument handling and file
//! I/O can fail.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// Wrong number of arguments or an unknown flag
    Usage(String),
    /// Input path does not end in `.md`
    InvalidExtension(PathBuf),
    /// Input path does not exist
    FileNotFound(PathBuf),
    /// Reading the input or writing the output failed
    Processing { path: PathBuf, source: io::Error },
    /// A config file given on the command line could not be used
    Config { path: PathBuf, message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage(usage) => write!(f, "{usage}"),
            Error::InvalidExtension(path) => {
                write!(f, "{} is not a Markdown file (expected .md)", path.display())
            }
            Error::FileNotFound(path) => write!(f, "File not found: {}", path.display()),
            Error::Processing { path, source } => {
                write!(f, "Failed to process {}: {source}", path.display())
            }
            Error::Config { path, message } => {
                write!(f, "Invalid config {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Processing { source, .. } => Some(source),
            _ => None,
        }
    }
}
