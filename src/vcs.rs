//! Version-control operations used by the sync.
//!
//! The orchestrator only needs a handful of operations, so they sit behind the
//! [`Vcs`] trait. [`Svn`] runs the real `svn` client; tests use a fake that
//! mirrors fixture directories on disk.

mod error;
mod svn;

use std::path::Path;

pub use error::VcsError;
pub use svn::Svn;

/// The version-control operations a sync run performs.
///
/// `recursive = false` fetches only a directory's immediate files; its
/// subdirectories must then be brought in with explicit `update` calls.
pub trait Vcs {
    /// Check out `url` into the new working copy `dest`.
    fn checkout(&self, url: &str, dest: &Path, recursive: bool) -> Result<(), VcsError>;

    /// Update (or bring into a sparse working copy) the path `path`.
    fn update(&self, path: &Path, recursive: bool) -> Result<(), VcsError>;

    /// Fetch the contents of the remote file at `url`.
    fn cat(&self, url: &str) -> Result<String, VcsError>;

    /// Schedule `path` for addition. Already-versioned files are not an error.
    fn add(&self, path: &Path) -> Result<(), VcsError>;

    /// Create the versioned directory `path`, including missing parents.
    fn mkdir_parents(&self, path: &Path) -> Result<(), VcsError>;
}

impl<V: Vcs + ?Sized> Vcs for &V {
    fn checkout(&self, url: &str, dest: &Path, recursive: bool) -> Result<(), VcsError> {
        (**self).checkout(url, dest, recursive)
    }

    fn update(&self, path: &Path, recursive: bool) -> Result<(), VcsError> {
        (**self).update(path, recursive)
    }

    fn cat(&self, url: &str) -> Result<String, VcsError> {
        (**self).cat(url)
    }

    fn add(&self, path: &Path) -> Result<(), VcsError> {
        (**self).add(path)
    }

    fn mkdir_parents(&self, path: &Path) -> Result<(), VcsError> {
        (**self).mkdir_parents(path)
    }
}
