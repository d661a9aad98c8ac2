//! The `FillThis` provider: collaborators wired together behind four calls.

use std::path::Path;

use tracing::warn;

use crate::error::FillThisError;
use crate::fetch::{DownloadResult, fetch_image};
use crate::formats::{ImageFormat, supported_formats};
use crate::sources::{LoremWords, SeedSource, UuidSeeds, WordSource};
use crate::transport::{Transport, default_transport};
use crate::urls::{ImageRequest, build_image_url, build_video_url};

/// Placeholder image provider for fillthis.io.
///
/// ```no_run
/// use fillthis::{FillThis, ImageRequest};
///
/// let provider = FillThis::new();
/// let url = provider.image_url(&ImageRequest::new(800, 600).word("Hello"))?;
/// let saved = provider.image(None, &ImageRequest::new(300, 300), true)?;
/// # Ok::<(), fillthis::FillThisError>(())
/// ```
pub struct FillThis {
    seeds: Box<dyn SeedSource>,
    words: Box<dyn WordSource>,
    transport: Option<Box<dyn Transport>>,
}

impl Default for FillThis {
    fn default() -> Self {
        Self::new()
    }
}

impl FillThis {
    /// UUID seeds, lorem words and the compiled-in HTTP backend.
    pub fn new() -> Self {
        let transport = match default_transport() {
            Ok(transport) => Some(transport),
            Err(err) => {
                warn!("Downloads disabled: {}", err);
                None
            }
        };
        Self {
            seeds: Box::new(UuidSeeds),
            words: Box::new(LoremWords),
            transport,
        }
    }

    /// Replaces the seed source.
    #[must_use]
    pub fn with_seeds(mut self, seeds: impl SeedSource + 'static) -> Self {
        self.seeds = Box::new(seeds);
        self
    }

    /// Replaces the word source.
    #[must_use]
    pub fn with_words(mut self, words: impl WordSource + 'static) -> Self {
        self.words = Box::new(words);
        self
    }

    /// Replaces the HTTP backend.
    #[must_use]
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Drops the HTTP backend; downloads then fail with `TransportUnavailable`.
    #[must_use]
    pub fn without_transport(mut self) -> Self {
        self.transport = None;
        self
    }

    /// See [`build_image_url`].
    pub fn image_url(&self, request: &ImageRequest) -> Result<String, FillThisError> {
        build_image_url(request, self.seeds.as_ref(), self.words.as_ref())
    }

    /// See [`build_video_url`].
    pub fn video_url(&self) -> String {
        build_video_url(self.seeds.as_ref())
    }

    /// See [`fetch_image`].
    pub fn image(
        &self,
        directory: Option<&Path>,
        request: &ImageRequest,
        full_path: bool,
    ) -> Result<DownloadResult, FillThisError> {
        fetch_image(
            self.transport.as_deref(),
            directory,
            request,
            full_path,
            self.seeds.as_ref(),
            self.words.as_ref(),
        )
    }

    /// Formats a request may ask for.
    pub fn formats(&self) -> Vec<ImageFormat> {
        supported_formats()
    }
}
