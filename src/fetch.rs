//! Downloading generated images to disk.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::constants::{HOST_ID_ENV, STANDARD_FORMAT};
use crate::error::FillThisError;
use crate::sources::{SeedSource, WordSource};
use crate::transport::{DownloadFailure, Transport};
use crate::urls::{ImageRequest, build_image_url};

/// A download that reached the network but didn't produce a file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DownloadFailed {
    /// The URL that was requested
    pub url: String,
    /// What went wrong
    pub reason: DownloadFailure,
}

/// Outcome of [`fetch_image`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DownloadResult {
    /// The image is on disk
    Saved {
        /// Full path, or just the file name when `full_path` is false
        path: PathBuf,
        /// Whether `path` is the full path
        full_path: bool,
    },
    /// Nothing was left on disk
    Failed(DownloadFailed),
}

impl DownloadResult {
    /// The saved path, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            DownloadResult::Saved { path, .. } => Some(path),
            DownloadResult::Failed(_) => None,
        }
    }

    /// True when the image was written.
    pub fn is_saved(&self) -> bool {
        matches!(self, DownloadResult::Saved { .. })
    }
}

/// Mode bits can claim write access the current user doesn't have, so a
/// scratch file is created and removed to confirm it.
fn check_directory(dir: &Path) -> Result<(), FillThisError> {
    let unavailable = || FillThisError::DirectoryUnavailable(dir.to_path_buf());
    match fs::metadata(dir) {
        Ok(metadata) if metadata.is_dir() && !metadata.permissions().readonly() => {}
        _ => return Err(unavailable()),
    }

    let scratch = dir.join(format!(".fillthis-{}", Uuid::new_v4().simple()));
    if let Err(err) = File::create_new(&scratch) {
        debug!("{} is not writable: {}", dir.display(), err);
        return Err(unavailable());
    }
    if let Err(err) = fs::remove_file(&scratch) {
        warn!("Failed to remove {}: {}", scratch.display(), err);
    }
    Ok(())
}

/// md5 of host id plus a per-call token, as 32 hex characters with `.png`.
fn download_filename() -> String {
    let host = std::env::var(HOST_ID_ENV).unwrap_or_default();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_nanos())
        .unwrap_or_default();
    let token = format!("{host}{nanos:x}{}", Uuid::new_v4().simple());
    format!(
        "{:x}.{}",
        md5::compute(token.as_bytes()),
        STANDARD_FORMAT.extension()
    )
}

/// Builds the URL for `request` and streams it into `directory`.
///
/// `directory` defaults to the system temp dir. Misconfiguration is an `Err`:
/// an unusable directory (checked before anything else), an invalid format,
/// or a missing transport (both checked before a file is created).
/// Remote failures come back as [`DownloadResult::Failed`], with the partial
/// file already removed.
pub fn fetch_image(
    transport: Option<&dyn Transport>,
    directory: Option<&Path>,
    request: &ImageRequest,
    full_path: bool,
    seeds: &dyn SeedSource,
    words: &dyn WordSource,
) -> Result<DownloadResult, FillThisError> {
    let dir = directory
        .map(Path::to_path_buf)
        .unwrap_or_else(std::env::temp_dir);
    check_directory(&dir)?;

    let filename = download_filename();
    let filepath = dir.join(&filename);

    let url = build_image_url(request, seeds, words)?;
    let transport = transport.ok_or(FillThisError::TransportUnavailable)?;

    debug!("Downloading {} to {}", url, filepath.display());
    let mut file = File::create(&filepath)?;
    let result = transport.fetch(&url, &mut file).and_then(|bytes| {
        file.sync_all()
            .map(|()| bytes)
            .map_err(|err| DownloadFailure::Io(err.to_string()))
    });
    drop(file);

    match result {
        Ok(bytes) => {
            info!("Saved {} ({} bytes)", filepath.display(), bytes);
            let path = if full_path {
                filepath
            } else {
                PathBuf::from(filename)
            };
            Ok(DownloadResult::Saved { path, full_path })
        }
        Err(reason) => {
            warn!("Download of {} failed: {}", url, reason);
            if let Err(err) = fs::remove_file(&filepath) {
                warn!("Failed to remove {}: {}", filepath.display(), err);
            }
            Ok(DownloadResult::Failed(DownloadFailed { url, reason }))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::io::Write;

    use super::*;
    use crate::config::setup_logging;

    /// Writes `body`, then answers with `status`.
    struct StubTransport {
        body: &'static [u8],
        status: u16,
        calls: Cell<usize>,
        urls: RefCell<Vec<String>>,
    }

    impl StubTransport {
        fn new(body: &'static [u8], status: u16) -> Self {
            Self {
                body,
                status,
                calls: Cell::new(0),
                urls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for StubTransport {
        fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64, DownloadFailure> {
            self.calls.set(self.calls.get() + 1);
            self.urls.borrow_mut().push(url.to_string());
            sink.write_all(self.body)
                .map_err(|err| DownloadFailure::Io(err.to_string()))?;
            if (200..300).contains(&self.status) {
                Ok(self.body.len() as u64)
            } else {
                Err(DownloadFailure::Status(self.status))
            }
        }
    }

    fn seeds() -> String {
        "seed".to_string()
    }

    fn words() -> String {
        "lorem".to_string()
    }

    fn entries(dir: &Path) -> Vec<PathBuf> {
        fs::read_dir(dir)
            .expect("read dir")
            .map(|entry| entry.expect("entry").path())
            .collect()
    }

    fn request() -> ImageRequest {
        ImageRequest::new(800, 600).randomize(false).word("TestImage")
    }

    #[test]
    fn missing_directory_makes_no_network_calls() {
        let _ = setup_logging(true);
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("does-not-exist");
        let transport = StubTransport::new(b"png", 200);

        let result = fetch_image(
            Some(&transport),
            Some(&missing),
            &request(),
            true,
            &seeds,
            &words,
        );
        assert!(matches!(
            result,
            Err(FillThisError::DirectoryUnavailable(path)) if path == missing
        ));
        assert_eq!(transport.calls.get(), 0);
    }

    #[test]
    fn read_only_directory_makes_no_network_calls() {
        let dir = tempfile::tempdir().expect("tempdir");
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).expect("create dir");
        let mut permissions = fs::metadata(&locked).expect("metadata").permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&locked, permissions.clone()).expect("set read-only");
        let transport = StubTransport::new(b"png", 200);

        let result = fetch_image(
            Some(&transport),
            Some(&locked),
            &request(),
            true,
            &seeds,
            &words,
        );

        #[allow(clippy::permissions_set_readonly_false)]
        permissions.set_readonly(false);
        fs::set_permissions(&locked, permissions).expect("restore permissions");

        assert!(matches!(
            result,
            Err(FillThisError::DirectoryUnavailable(path)) if path == locked
        ));
        assert_eq!(transport.calls.get(), 0);
        assert!(entries(&locked).is_empty());
    }

    #[test]
    fn writability_check_leaves_no_scratch_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        check_directory(dir.path()).expect("writable");
        assert!(entries(dir.path()).is_empty());
    }

    #[test]
    fn file_is_not_a_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let not_a_dir = dir.path().join("plain.txt");
        fs::write(&not_a_dir, b"hello").expect("write file");
        let transport = StubTransport::new(b"png", 200);

        let result = fetch_image(
            Some(&transport),
            Some(&not_a_dir),
            &request(),
            true,
            &seeds,
            &words,
        );
        assert!(matches!(result, Err(FillThisError::DirectoryUnavailable(_))));
        assert_eq!(transport.calls.get(), 0);
    }

    #[test]
    fn failed_download_leaves_nothing_behind() {
        let _ = setup_logging(true);
        let dir = tempfile::tempdir().expect("tempdir");
        let transport = StubTransport::new(b"partial bytes", 503);

        let result = fetch_image(
            Some(&transport),
            Some(dir.path()),
            &request(),
            true,
            &seeds,
            &words,
        )
        .expect("not a hard failure");

        assert_eq!(
            result,
            DownloadResult::Failed(DownloadFailed {
                url: "https://fillthis.io/i/800x600.png?text=TestImage".to_string(),
                reason: DownloadFailure::Status(503),
            })
        );
        assert!(!result.is_saved());
        assert!(entries(dir.path()).is_empty());
        assert_eq!(transport.calls.get(), 1);
    }

    #[test]
    fn saves_with_full_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let transport = StubTransport::new(b"\x89PNG fake", 200);

        let result = fetch_image(
            Some(&transport),
            Some(dir.path()),
            &request(),
            true,
            &seeds,
            &words,
        )
        .expect("download");

        let path = result.path().expect("saved").to_path_buf();
        assert_eq!(path.parent(), Some(dir.path()));
        assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("png"));
        let stem = path.file_stem().and_then(|stem| stem.to_str()).expect("stem");
        assert_eq!(stem.len(), 32);
        assert!(stem.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(fs::read(&path).expect("read image"), b"\x89PNG fake");
        assert_eq!(
            transport.urls.borrow().as_slice(),
            ["https://fillthis.io/i/800x600.png?text=TestImage"]
        );
    }

    #[test]
    fn saves_with_file_name_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        let transport = StubTransport::new(b"image", 200);

        let result = fetch_image(
            Some(&transport),
            Some(dir.path()),
            &request(),
            false,
            &seeds,
            &words,
        )
        .expect("download");

        let DownloadResult::Saved { path, full_path } = result else {
            panic!("expected a saved image");
        };
        assert!(!full_path);
        assert_eq!(path.components().count(), 1);
        assert!(dir.path().join(&path).is_file());
    }

    #[test]
    fn every_call_gets_a_new_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let transport = StubTransport::new(b"image", 200);
        for _ in 0..3 {
            fetch_image(
                Some(&transport),
                Some(dir.path()),
                &request(),
                true,
                &seeds,
                &words,
            )
            .expect("download");
        }
        assert_eq!(entries(dir.path()).len(), 3);
    }

    #[test]
    fn invalid_format_creates_no_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let transport = StubTransport::new(b"image", 200);

        let result = fetch_image(
            Some(&transport),
            Some(dir.path()),
            &request().format("tiff"),
            true,
            &seeds,
            &words,
        );
        assert!(matches!(result, Err(FillThisError::InvalidFormat(_))));
        assert!(entries(dir.path()).is_empty());
        assert_eq!(transport.calls.get(), 0);
    }

    #[test]
    fn missing_transport_creates_no_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = fetch_image(None, Some(dir.path()), &request(), true, &seeds, &words);
        assert!(matches!(result, Err(FillThisError::TransportUnavailable)));
        assert!(entries(dir.path()).is_empty());
    }

    #[test]
    fn defaults_to_the_temp_dir() {
        let transport = StubTransport::new(b"image", 200);
        let result = fetch_image(Some(&transport), None, &request(), true, &seeds, &words)
            .expect("download");
        let path = result.path().expect("saved").to_path_buf();
        assert_eq!(path.parent(), Some(std::env::temp_dir().as_path()));
        fs::remove_file(&path).expect("clean up");
    }

    #[test]
    fn filenames_are_md5_shaped() {
        let first = download_filename();
        let second = download_filename();
        assert_ne!(first, second);
        assert!(first.ends_with(".png"));
        assert_eq!(first.len(), 36);
    }
}
