//! Shared constants for the fillthis.io service
//!

use crate::formats::ImageFormat;

/// Origin every generated URL starts with.
pub const BASE_URL: &str = "https://fillthis.io";

/// Width used when a request doesn't specify one.
pub const DEFAULT_WIDTH: u32 = 640;

/// Height used when a request doesn't specify one.
pub const DEFAULT_HEIGHT: u32 = 480;

/// Format used when a request doesn't specify one.
pub const DEFAULT_FORMAT: &str = "png";

/// Category name the service treats as "pick from every category".
pub const ALL_CATEGORIES: &str = "all";

/// Categories the service was known to serve.
///
/// Informational only: any string is accepted as a category, and unknown
/// names fall back to a placeholder server-side.
pub const KNOWN_CATEGORIES: &[&str] = &[
    "abstract",
    "animals",
    "business",
    "cats",
    "city",
    "food",
    "nightlife",
    "fashion",
    "people",
    "nature",
    "sports",
    "technics",
    "transport",
    "anime",
];

/// Format of standard images and downloads, whatever format was requested.
pub const STANDARD_FORMAT: ImageFormat = ImageFormat::Png;

/// Environment variable consulted for the host part of download filenames.
pub const HOST_ID_ENV: &str = "HOSTNAME";
