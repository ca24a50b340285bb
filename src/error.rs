//! Error kinds for send-image.
//!
//! Every kind ends the program with exit code 1; none is retried.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Environment variable {0} is not set")]
    MissingApiKey(&'static str),

    /// Wrong argument count or an unexpected flag. Holds the rendered
    /// message, usage line included.
    #[error("{}", .0.trim_end())]
    Usage(String),

    #[error("{}", .0.trim_end())]
    ArgumentFormat(String),

    #[error("Error opening file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error creating request")]
    Request(#[source] reqwest::Error),

    #[error("Error sending request")]
    Transport(#[source] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
