//! CLI parser
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::constants::{DEFAULT_FORMAT, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::urls::{Font, ImageRequest};

#[derive(Parser, Debug)]
/// CLI Options
pub struct CliOptions {
    #[clap(long, global = true, help = "Enable debug logging", env = "FILLTHIS_DEBUG")]
    /// Enable debug logging. Env: FILLTHIS_DEBUG
    pub debug: bool,

    #[command(subcommand)]
    /// What to do
    pub command: Command,
}

#[derive(Subcommand, Debug)]
/// Subcommands
pub enum Command {
    /// Print an image URL
    Url(ImageArgs),
    /// Download an image and print where it was saved
    Download {
        #[command(flatten)]
        /// The image to fetch
        image: ImageArgs,
        #[clap(long, short, env = "FILLTHIS_OUTPUT_DIR")]
        /// Directory to save into, defaults to the system temp dir.
        /// Env: FILLTHIS_OUTPUT_DIR
        output_dir: Option<PathBuf>,
        #[clap(long)]
        /// Print only the file name instead of the full path
        filename_only: bool,
    },
    /// Print a video URL
    Video,
    /// Print the supported formats and their image-type codes as JSON
    Formats,
    /// Print the category listing URL, or the image listing URL of one category
    Categories {
        /// Category to list images for
        category: Option<String>,
        #[clap(long, conflicts_with = "category")]
        /// Print the category names known to exist instead
        known: bool,
    },
}

#[derive(Args, Debug)]
/// Options shaping an image URL
pub struct ImageArgs {
    #[clap(long, short = 'W', default_value_t = DEFAULT_WIDTH)]
    /// Width in pixels, 0 together with a 0 height asks for the service default
    pub width: u32,
    #[clap(long, short = 'H', default_value_t = DEFAULT_HEIGHT)]
    /// Height in pixels
    pub height: u32,
    #[clap(long, short)]
    /// Category, "all" picks from every category. Size and text are ignored then.
    pub category: Option<String>,
    #[clap(long)]
    /// Don't append a random word to the text
    pub no_random: bool,
    #[clap(long, short)]
    /// Text to render on the image
    pub word: Option<String>,
    #[clap(long)]
    /// Gray background (accepted, currently has no effect)
    pub gray: bool,
    #[clap(long, short, default_value = DEFAULT_FORMAT)]
    /// jpg, jpeg, png or webp
    pub format: String,
    #[clap(long, value_enum)]
    /// Font for the text
    pub font: Option<Font>,
}

impl ImageArgs {
    /// The request these options describe.
    pub fn to_request(&self) -> ImageRequest {
        ImageRequest {
            width: self.width,
            height: self.height,
            category: self.category.clone(),
            randomize: !self.no_random,
            word: self.word.clone(),
            gray: self.gray,
            format: self.format.clone(),
            font: self.font,
        }
    }
}
