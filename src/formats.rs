//! Supported image formats and their numeric image-type codes.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::FillThisError;

/// Image-type code for JPEG files.
pub const IMAGETYPE_JPEG: u8 = 2;
/// Image-type code for PNG files.
pub const IMAGETYPE_PNG: u8 = 3;
/// Image-type code for WebP files.
pub const IMAGETYPE_WEBP: u8 = 18;

/// A format the service accepts.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum ImageFormat {
    /// `jpg`
    Jpg,
    /// `jpeg`
    Jpeg,
    /// `png`
    Png,
    /// `webp`
    Webp,
}

impl ImageFormat {
    /// Every supported format, in table order.
    pub const ALL: [ImageFormat; 4] = [
        ImageFormat::Jpg,
        ImageFormat::Jpeg,
        ImageFormat::Png,
        ImageFormat::Webp,
    ];

    /// Lower-case identifier as used in URLs and file extensions.
    pub fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Jpg => "jpg",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
            ImageFormat::Webp => "webp",
        }
    }

    /// File extension for images of this format; both JPEG spellings map to `jpg`.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Jpg | ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Webp => "webp",
        }
    }

    /// Numeric image-type code; `jpg` and `jpeg` share one.
    pub fn type_code(self) -> u8 {
        match self {
            ImageFormat::Jpg | ImageFormat::Jpeg => IMAGETYPE_JPEG,
            ImageFormat::Png => IMAGETYPE_PNG,
            ImageFormat::Webp => IMAGETYPE_WEBP,
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageFormat {
    type Err = FillThisError;

    /// Case-insensitive; anything outside the table is `InvalidFormat`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lowered = value.to_ascii_lowercase();
        ImageFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == lowered)
            .ok_or_else(|| FillThisError::InvalidFormat(value.to_string()))
    }
}

static FORMAT_TABLE: LazyLock<BTreeMap<&'static str, u8>> = LazyLock::new(|| {
    ImageFormat::ALL
        .into_iter()
        .map(|format| (format.as_str(), format.type_code()))
        .collect()
});

/// Format name to image-type code.
pub fn format_table() -> &'static BTreeMap<&'static str, u8> {
    &FORMAT_TABLE
}

/// The formats a request may ask for.
pub fn supported_formats() -> Vec<ImageFormat> {
    ImageFormat::ALL.to_vec()
}

/// Sniffs an existing file's magic bytes and maps it onto the table.
///
/// Returns `Ok(None)` for readable files that aren't one of the supported
/// formats. JPEG files classify as [`ImageFormat::Jpg`].
pub fn classify_file(path: &Path) -> Result<Option<ImageFormat>, FillThisError> {
    let reader = image::ImageReader::open(path)?.with_guessed_format()?;
    let format = match reader.format() {
        Some(image::ImageFormat::Jpeg) => Some(ImageFormat::Jpg),
        Some(image::ImageFormat::Png) => Some(ImageFormat::Png),
        Some(image::ImageFormat::WebP) => Some(ImageFormat::Webp),
        _ => None,
    };
    Ok(format)
}
