//! Placeholder image URLs and downloads for fillthis.io

#![allow(clippy::multiple_crate_versions)]
#![deny(clippy::all)]
#![deny(clippy::complexity)]
#![deny(clippy::correctness)]
#![deny(clippy::disallowed_methods)]
#![deny(clippy::expect_used)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::panic)]
#![deny(clippy::perf)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::unreachable)]
#![deny(clippy::unwrap_used)]
#![deny(warnings)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod formats;
pub mod provider;
pub mod sources;
pub mod transport;
pub mod urls;

pub use error::FillThisError;
pub use fetch::{DownloadFailed, DownloadResult};
pub use formats::ImageFormat;
pub use provider::FillThis;
pub use urls::{Font, ImageRequest};
