//! Building fillthis.io URLs.
//!
//! | Request | Path | Query |
//! |---|---|---|
//! | category given | `/i/category/<category>` | `?seed=<uuid>` |
//! | 0 x 0 | `/i` | `?text=...` or none |
//! | N x N | `/i/N.png` | `?text=...` or none |
//! | W x H | `/i/WxH.png` | `?text=...` or none |
//! | video | `/video.mp4` | `?seed=<uuid>` |
//!
//! Known quirks, kept for compatibility with existing callers:
//! - a category request is seed-addressed, so width, height, text and font
//!   are dropped from it;
//! - standard images always end in `.png`, the requested format is only
//!   validated;
//! - `gray` is accepted but no URL shape uses it.
//!
//! Text and category values are form-urlencoded: spaces become `+`, and
//! `*`, `-`, `.`, `_` are left as is, so `*` is sent literally rather than
//! as `%2A`.

use tracing::debug;

use crate::constants::{
    BASE_URL, DEFAULT_FORMAT, DEFAULT_HEIGHT, DEFAULT_WIDTH, STANDARD_FORMAT,
};
use crate::error::FillThisError;
use crate::formats::ImageFormat;
use crate::sources::{SeedSource, WordSource};

/// Fonts the service can render the text parameter with.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum Font {
    /// lato
    Lato,
    /// lora
    Lora,
    /// montserrat
    Montserrat,
    /// noto-sans
    NotoSans,
    /// open-sans
    OpenSans,
    /// oswald
    Oswald,
    /// playfair-display
    PlayfairDisplay,
    /// poppins
    Poppins,
    /// pt-sans
    PtSans,
    /// raleway
    Raleway,
    /// roboto
    Roboto,
    /// source-sans-pro
    SourceSansPro,
}

impl Font {
    /// Value of the `font` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Font::Lato => "lato",
            Font::Lora => "lora",
            Font::Montserrat => "montserrat",
            Font::NotoSans => "noto-sans",
            Font::OpenSans => "open-sans",
            Font::Oswald => "oswald",
            Font::PlayfairDisplay => "playfair-display",
            Font::Poppins => "poppins",
            Font::PtSans => "pt-sans",
            Font::Raleway => "raleway",
            Font::Roboto => "roboto",
            Font::SourceSansPro => "source-sans-pro",
        }
    }
}

impl std::fmt::Display for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything that shapes an image URL.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImageRequest {
    /// Logical width, `0` together with a zero height means "service default"
    pub width: u32,
    /// Logical height
    pub height: u32,
    /// Category name, including the special `"all"`
    pub category: Option<String>,
    /// Append a random word to the text
    pub randomize: bool,
    /// Text to render, placed before the random word
    pub word: Option<String>,
    /// Gray background. Accepted, not yet used by any URL shape.
    pub gray: bool,
    /// One of jpg, jpeg, png, webp, any case
    pub format: String,
    /// Font for the text
    pub font: Option<Font>,
}

impl Default for ImageRequest {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            category: None,
            randomize: true,
            word: None,
            gray: false,
            format: DEFAULT_FORMAT.to_string(),
            font: None,
        }
    }
}

impl ImageRequest {
    /// A request for the given size, other fields at their defaults.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Sets the category.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets whether a random word is appended to the text.
    #[must_use]
    pub fn randomize(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    /// Sets the text.
    #[must_use]
    pub fn word(mut self, word: impl Into<String>) -> Self {
        self.word = Some(word.into());
        self
    }

    /// Sets the gray flag.
    #[must_use]
    pub fn gray(mut self, gray: bool) -> Self {
        self.gray = gray;
        self
    }

    /// Sets the format; validated when the URL is built.
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Sets the font.
    #[must_use]
    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }
}

fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

fn standard_path(width: u32, height: u32) -> String {
    if width == 0 && height == 0 {
        return "/i".to_string();
    }
    let size = if width == height {
        width.to_string()
    } else {
        format!("{width}x{height}")
    };
    format!("/i/{size}.{}", STANDARD_FORMAT.extension())
}

/// Builds the URL for `request`.
///
/// Fails with [`FillThisError::InvalidFormat`] before either source is
/// consulted. Performs no network access.
pub fn build_image_url(
    request: &ImageRequest,
    seeds: &dyn SeedSource,
    words: &dyn WordSource,
) -> Result<String, FillThisError> {
    let format: ImageFormat = request.format.parse()?;

    let url = match &request.category {
        Some(category) => format!(
            "{BASE_URL}/i/category/{}?seed={}",
            encode(category),
            seeds.seed()
        ),
        None => {
            let mut text = Vec::new();
            if let Some(word) = &request.word {
                text.push(word.clone());
            }
            if request.randomize {
                text.push(words.word());
            }

            let mut params = Vec::new();
            if !text.is_empty() {
                params.push(format!("text={}", encode(&text.join(" "))));
            }
            if let Some(font) = request.font {
                params.push(format!("font={font}"));
            }

            let query = if params.is_empty() {
                String::new()
            } else {
                format!("?{}", params.join("&"))
            };
            format!(
                "{BASE_URL}{}{query}",
                standard_path(request.width, request.height)
            )
        }
    };

    debug!("Built image URL {} (requested format {})", url, format);
    Ok(url)
}

/// `<base>/video.mp4?seed=<seed>`
pub fn build_video_url(seeds: &dyn SeedSource) -> String {
    format!("{BASE_URL}/video.mp4?seed={}", seeds.seed())
}

/// Listing of every category the service knows.
pub fn categories_url() -> String {
    format!("{BASE_URL}/categories")
}

/// Listing of the images in one category.
pub fn category_images_url(category: &str) -> String {
    format!("{BASE_URL}/categories/{}/images", encode(category))
}
