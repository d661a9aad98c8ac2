//! HTTP backends that stream a URL into a writer.
//!
//! Which backends exist is decided by cargo features: `ureq` (default) and
//! `reqwest`. With neither, [`default_transport`] reports
//! [`FillThisError::TransportUnavailable`].

use std::fmt;
use std::io::Write;

use crate::error::FillThisError;

/// Why a download didn't produce an image.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DownloadFailure {
    /// The final response after redirects wasn't a 2xx
    Status(u16),
    /// Connection, TLS, redirect loop...
    Transport(String),
    /// Writing the body out failed
    Io(String),
}

impl fmt::Display for DownloadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(status) => write!(f, "server responded with HTTP {status}"),
            Self::Transport(message) => write!(f, "transport error: {message}"),
            Self::Io(message) => write!(f, "write error: {message}"),
        }
    }
}

/// Fetch-to-writer primitive.
///
/// Implementations follow redirects and only return `Ok` when the final
/// response has a success status and the body was fully written.
pub trait Transport {
    /// Streams `url` into `sink`, returning the number of bytes written.
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64, DownloadFailure>;
}

/// Streaming backend on top of a `ureq` agent.
#[cfg(feature = "ureq")]
#[derive(Debug)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

#[cfg(feature = "ureq")]
impl UreqTransport {
    /// An agent with ureq's default redirect and timeout policy.
    pub fn new() -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }
}

#[cfg(feature = "ureq")]
impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "ureq")]
impl Transport for UreqTransport {
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64, DownloadFailure> {
        let mut response = self
            .agent
            .get(url)
            .call()
            .map_err(|err| DownloadFailure::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadFailure::Status(status.as_u16()));
        }

        let mut reader = response.body_mut().as_reader();
        std::io::copy(&mut reader, sink).map_err(|err| DownloadFailure::Io(err.to_string()))
    }
}

/// Blocking `reqwest` backend.
#[cfg(feature = "reqwest")]
#[derive(Debug)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "reqwest")]
impl ReqwestTransport {
    /// Fails with `TransportUnavailable` if the client can't be set up (TLS backend etc).
    pub fn new() -> Result<Self, FillThisError> {
        let client = reqwest::blocking::Client::builder().build().map_err(|err| {
            tracing::warn!("Failed to build reqwest client: {}", err);
            FillThisError::TransportUnavailable
        })?;
        Ok(Self { client })
    }
}

#[cfg(feature = "reqwest")]
impl Transport for ReqwestTransport {
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64, DownloadFailure> {
        let mut response = self
            .client
            .get(url)
            .send()
            .map_err(|err| DownloadFailure::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadFailure::Status(status.as_u16()));
        }

        response
            .copy_to(sink)
            .map_err(|err| DownloadFailure::Transport(err.to_string()))
    }
}

/// The preferred compiled-in backend: ureq, then reqwest.
#[cfg(feature = "ureq")]
pub fn default_transport() -> Result<Box<dyn Transport>, FillThisError> {
    Ok(Box::new(UreqTransport::new()))
}

/// The preferred compiled-in backend: ureq, then reqwest.
#[cfg(all(feature = "reqwest", not(feature = "ureq")))]
pub fn default_transport() -> Result<Box<dyn Transport>, FillThisError> {
    Ok(Box::new(ReqwestTransport::new()?))
}

/// The preferred compiled-in backend: ureq, then reqwest.
#[cfg(not(any(feature = "ureq", feature = "reqwest")))]
pub fn default_transport() -> Result<Box<dyn Transport>, FillThisError> {
    Err(FillThisError::TransportUnavailable)
}
