use std::process::ExitCode;

use clap::Parser;
use fillthis::cli::{CliOptions, Command};
use fillthis::config::setup_logging;
use fillthis::constants::{ALL_CATEGORIES, KNOWN_CATEGORIES};
use fillthis::formats::format_table;
use fillthis::urls::{categories_url, category_images_url};
use fillthis::{DownloadResult, FillThis};
use tracing::error;

fn run(cli: &CliOptions) -> anyhow::Result<ExitCode> {
    let provider = FillThis::new();

    match &cli.command {
        Command::Url(image) => println!("{}", provider.image_url(&image.to_request())?),
        Command::Download {
            image,
            output_dir,
            filename_only,
        } => match provider.image(output_dir.as_deref(), &image.to_request(), !filename_only)? {
            DownloadResult::Saved { path, .. } => println!("{}", path.display()),
            DownloadResult::Failed(failed) => {
                error!("Error downloading {}: {}", failed.url, failed.reason);
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Video => println!("{}", provider.video_url()),
        Command::Formats => println!("{}", serde_json::to_string_pretty(format_table())?),
        Command::Categories { known: true, .. } => {
            for category in KNOWN_CATEGORIES.iter().chain([&ALL_CATEGORIES]) {
                println!("{category}");
            }
        }
        Command::Categories { category, .. } => match category {
            Some(category) => println!("{}", category_images_url(category)),
            None => println!("{}", categories_url()),
        },
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = CliOptions::parse();

    let _ = setup_logging(cli.debug);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            error!("Application error: {}", err);
            ExitCode::FAILURE
        }
    }
}
