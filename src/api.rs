// API client module: a small blocking HTTP client that uploads one image
// and its coordinates to the send-image endpoint.

use hyper::ext::ReasonPhrase;
use log::{debug, info};
use reqwest::blocking::{multipart, Client, ClientBuilder, Request, Response};
use reqwest::StatusCode;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Name of the multipart field holding the image.
pub const IMAGE_FIELD: &str = "image";

const IMAGE_MIME: &str = "application/octet-stream";

/// An image read fully into memory, with the base name used as the
/// multipart filename.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Read the whole file. The handle is closed before this returns.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| Error::Io {
            path: PathBuf::from(path),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| IMAGE_FIELD.to_string());
        debug!("read {} bytes from {}", bytes.len(), path.display());
        Ok(ImageUpload { file_name, bytes })
    }
}

/// Status of a completed exchange: the code plus the reason text the
/// server actually sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseStatus {
    pub code: StatusCode,
    pub reason: String,
}

impl ResponseStatus {
    /// hyper only keeps the reason phrase when it differs from the
    /// canonical one, so fall back to that.
    fn from_response(response: &Response) -> Self {
        let code = response.status();
        let reason = match response.extensions().get::<ReasonPhrase>() {
            Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
            None => code.canonical_reason().unwrap_or_default().to_string(),
        };
        ResponseStatus { code, reason }
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reason.is_empty() {
            write!(f, "{}", self.code.as_u16())
        } else {
            write!(f, "{} {}", self.code.as_u16(), self.reason)
        }
    }
}

/// Client settings for uploads. No total timeout: a slow upload runs
/// until the server answers or the connection drops.
pub fn client_builder() -> ClientBuilder {
    Client::builder().timeout(None)
}

/// Holds the blocking reqwest client and the run configuration.
pub struct Uploader {
    client: Client,
    config: Config,
}

impl Uploader {
    /// Create an uploader over [`client_builder`]: no timeout, no retry,
    /// default redirect policy.
    pub fn new(config: Config) -> Result<Self> {
        let client = client_builder().build().map_err(Error::Request)?;
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: Config, client: Client) -> Self {
        Uploader { client, config }
    }

    /// Assemble the POST to `<endpoint>?x=<x>&y=<y>` with a single
    /// `image` part. Invalid URLs or header values surface here.
    pub fn build_request(&self, x: i64, y: i64, image: &ImageUpload) -> Result<Request> {
        let part = multipart::Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(IMAGE_MIME)
            .map_err(Error::Request)?;
        let form = multipart::Form::new().part(IMAGE_FIELD, part);

        let request = self
            .client
            .post(&self.config.endpoint)
            .query(&[("x", x), ("y", y)])
            .header(API_KEY_HEADER, &self.config.api_key)
            .multipart(form)
            .build()
            .map_err(Error::Request)?;
        debug!("built {} {}", request.method(), request.url());
        Ok(request)
    }

    /// Send the request and return the status. Any status the server
    /// answers with counts as success; only a failed exchange is an error.
    pub fn send(&self, request: Request) -> Result<ResponseStatus> {
        let response = self.client.execute(request).map_err(Error::Transport)?;
        let status = ResponseStatus::from_response(&response);
        info!("server answered {}", status);
        Ok(status)
    }

    /// Read `path`, upload it with the coordinates and return the status.
    pub fn upload(&self, x: i64, y: i64, path: &Path) -> Result<ResponseStatus> {
        let image = ImageUpload::read(path)?;
        let request = self.build_request(x, y, &image)?;
        info!(
            "uploading {} ({} bytes) to {}",
            image.file_name,
            image.bytes.len(),
            self.config.endpoint
        );
        self.send(request)
    }
}
