// Library root
// -----------
// The binary (`main.rs`) is a thin wrapper over these modules.
//
// Module responsibilities:
// - `config`: the API key and endpoint, passed explicitly to the uploader.
// - `cli`: positional argument parsing (x, y, image path).
// - `api`: reads the image and performs the single multipart upload.
// - `ui`: terminal output, i.e. the spinner and the status line.
// - `error`: the error kinds every step can fail with.
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;

pub use error::{Error, Result};
