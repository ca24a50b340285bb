//! Command line arguments: `send-image <X> <Y> <IMAGE_PATH>`.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::error::{Error, Result};

/// Upload an image together with its x/y coordinates.
#[derive(Debug, Parser)]
#[command(name = "send-image")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    #[arg(value_name = "X", allow_hyphen_values = true)]
    pub x: i64,

    #[arg(value_name = "Y", allow_hyphen_values = true)]
    pub y: i64,

    #[arg(value_name = "IMAGE_PATH")]
    pub image_path: PathBuf,
}

impl Cli {
    /// Parse a full argv (program name first). Non-integer coordinates,
    /// dash-prefixed ones included, give [`Error::ArgumentFormat`];
    /// anything else malformed gives [`Error::Usage`].
    pub fn parse_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        // `--` would otherwise be swallowed as an escape, letting four
        // tokens through.
        if args.iter().skip(1).any(|arg| arg == "--") {
            let err = Cli::command().error(ErrorKind::UnknownArgument, "unexpected argument '--' found");
            return Err(err.into());
        }
        Cli::try_parse_from(args).map_err(Error::from)
    }
}

impl From<clap::Error> for Error {
    fn from(err: clap::Error) -> Self {
        let message = err.render().to_string();
        match err.kind() {
            ErrorKind::ValueValidation | ErrorKind::InvalidValue => Error::ArgumentFormat(message),
            _ => Error::Usage(message),
        }
    }
}
