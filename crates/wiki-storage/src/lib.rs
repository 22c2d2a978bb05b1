//! Page storage for the wiki server.
//!
//! This crate provides a [`Storage`] trait for loading and saving pages, keyed
//! by a validated [`Title`]. Because a [`Title`] can only be built from an
//! alphanumeric string, no storage backend ever sees a key containing path
//! separators or `..`.
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Title`] and [`Page`], the only data model of the wiki
//! - [`Storage`] trait with `load()` and `save()` methods
//! - [`FsStorage`] implementation keeping one `<title>.txt` file per page
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use wiki_storage::{FsStorage, Page, Storage, Title};
//!
//! let storage = FsStorage::new(PathBuf::from("pages"));
//! let title = Title::parse("FrontPage")?;
//! storage.save(&Page::new(title.clone(), b"Hello".to_vec()))?;
//! let page = storage.load(&title)?;
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod page;
mod storage;
mod title;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use page::Page;
pub use storage::{Storage, StorageError, StorageErrorKind};
pub use title::{InvalidTitle, Title};
