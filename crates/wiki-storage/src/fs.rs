//! Filesystem storage implementation.
//!
//! Provides [`FsStorage`], which keeps each page as `<title>.txt` in a single
//! root directory.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::page::Page;
use crate::storage::{Storage, StorageError};
use crate::title::Title;

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Permission bits for newly created page files (owner read/write).
#[cfg(unix)]
const PAGE_FILE_MODE: u32 = 0o600;

/// Filesystem storage implementation.
///
/// Every call goes to disk; nothing is cached between requests. Writes are
/// not atomic, so a concurrent load may observe a partially written file.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use wiki_storage::{FsStorage, Storage, Title};
///
/// let storage = FsStorage::new(PathBuf::from("pages"));
/// let page = storage.load(&Title::parse("Home")?)?;
/// ```
#[derive(Debug, Clone)]
pub struct FsStorage {
    /// Directory holding the page files.
    root: PathBuf,
}

impl FsStorage {
    /// Create a new filesystem storage rooted at `root`.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Full path of the file backing `title`.
    fn page_path(&self, title: &Title) -> PathBuf {
        self.root.join(title.file_name())
    }

    fn open_for_write(path: &Path) -> std::io::Result<fs::File> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(PAGE_FILE_MODE);
        }
        options.open(path)
    }
}

impl Storage for FsStorage {
    fn load(&self, title: &Title) -> Result<Page, StorageError> {
        let path = self.page_path(title);
        let body = fs::read(&path)
            .map_err(|e| StorageError::io(e, Some(path.clone())).with_backend(BACKEND))?;
        Ok(Page::new(title.clone(), body))
    }

    fn save(&self, page: &Page) -> Result<(), StorageError> {
        let path = self.page_path(&page.title);
        let mut file = Self::open_for_write(&path)
            .map_err(|e| StorageError::io(e, Some(path.clone())).with_backend(BACKEND))?;
        file.write_all(&page.body)
            .map_err(|e| StorageError::io(e, Some(path.clone())).with_backend(BACKEND))?;
        tracing::debug!(path = %path.display(), bytes = page.body.len(), "Saved page");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::StorageErrorKind;

    fn assert_send_sync<T: Send + Sync>() {}

    fn title(value: &str) -> Title {
        Title::parse(value).unwrap()
    }

    #[test]
    fn test_fs_storage_is_send_sync() {
        assert_send_sync::<FsStorage>();
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(temp_dir.path().to_path_buf());
        let body = b"Hello World\r\n\x00\xff binary tail".to_vec();

        storage
            .save(&Page::new(title("TestPage"), body.clone()))
            .unwrap();
        let page = storage.load(&title("TestPage")).unwrap();

        assert_eq!(page.title, title("TestPage"));
        assert_eq!(page.body, body);
    }

    #[test]
    fn test_save_writes_title_txt() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(temp_dir.path().to_path_buf());

        storage
            .save(&Page::new(title("TestPage"), "Hello World"))
            .unwrap();

        let content = fs::read_to_string(temp_dir.path().join("TestPage.txt")).unwrap();
        assert_eq!(content, "Hello World");
    }

    #[test]
    fn test_save_overwrites_longer_content() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(temp_dir.path().to_path_buf());

        storage
            .save(&Page::new(title("Page"), "a much longer first version"))
            .unwrap();
        storage.save(&Page::new(title("Page"), "short")).unwrap();

        assert_eq!(storage.load(&title("Page")).unwrap().body, b"short");
    }

    #[test]
    fn test_save_is_idempotent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(temp_dir.path().to_path_buf());
        let page = Page::new(title("Page"), "same content");

        storage.save(&page).unwrap();
        let once = fs::read(temp_dir.path().join("Page.txt")).unwrap();
        storage.save(&page).unwrap();
        let twice = fs::read(temp_dir.path().join("Page.txt")).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_save_empty_body() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(temp_dir.path().to_path_buf());

        storage.save(&Page::empty(title("Blank"))).unwrap();

        assert!(storage.load(&title("Blank")).unwrap().body.is_empty());
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(temp_dir.path().to_path_buf());

        let err = storage.load(&title("Missing")).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.backend, Some("Fs"));
        assert_eq!(
            err.path.as_deref(),
            Some(temp_dir.path().join("Missing.txt").as_path())
        );
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(temp_dir.path().join("does-not-exist"));

        let err = storage.save(&Page::new(title("Page"), "x")).unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::NotFound);
        assert!(err.to_string().starts_with("[Fs] "));
    }

    #[test]
    fn test_load_directory_is_not_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("Dir.txt")).unwrap();
        let storage = FsStorage::new(temp_dir.path().to_path_buf());

        let err = storage.load(&title("Dir")).unwrap_err();

        assert!(!err.is_not_found());
    }

    #[cfg(unix)]
    #[test]
    fn test_save_uses_owner_only_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(temp_dir.path().to_path_buf());

        storage.save(&Page::new(title("Secret"), "x")).unwrap();

        let mode = fs::metadata(temp_dir.path().join("Secret.txt"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
