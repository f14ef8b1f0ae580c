//! Test helpers for staging waypoint files on disk.

use camino::{Utf8Path, Utf8PathBuf};
use meridian_core::test_support::sample_capitals_json;
use tempfile::TempDir;

/// Write `contents` to `path`, creating parent directories.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent directories");
    }
    std::fs::write(path, contents).expect("write fixture file");
}

/// Temporary directory holding waypoint fixtures.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write the eight sample capitals and return their path.
    pub(super) fn capitals(&self) -> Utf8PathBuf {
        let path = self.path("capitals.json");
        write_utf8(&path, sample_capitals_json().as_bytes());
        path
    }
}
