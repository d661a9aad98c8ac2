//! Error handling

use std::path::PathBuf;

use crate::formats::ImageFormat;

/// Hard failures: the caller asked for something that can't work here.
///
/// Remote download failures are not errors, see [`crate::fetch::DownloadResult`].
#[derive(Debug)]
pub enum FillThisError {
    /// The requested format isn't one of the supported ones
    InvalidFormat(String),
    /// Target directory is missing, not a directory or read-only
    DirectoryUnavailable(PathBuf),
    /// No HTTP backend was compiled in or configured
    TransportUnavailable,
    /// Local filesystem failures
    Io(std::io::Error),
}

impl std::fmt::Display for FillThisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(format) => {
                let allowed = ImageFormat::ALL
                    .iter()
                    .map(|format| format.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "Invalid image format \"{format}\". Allowed formats are: {allowed}"
                )
            }
            Self::DirectoryUnavailable(dir) => {
                write!(f, "Cannot write to directory \"{}\"", dir.display())
            }
            Self::TransportUnavailable => {
                write!(f, "No HTTP transport available, enable the ureq or reqwest feature")
            }
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for FillThisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FillThisError {
    fn from(err: std::io::Error) -> Self {
        FillThisError::Io(err)
    }
}
