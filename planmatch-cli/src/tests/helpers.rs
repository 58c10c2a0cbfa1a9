//! Test helpers for staging catalog and profile files on disk.

use camino::{Utf8Path, Utf8PathBuf};
use planmatch_core::test_support::{beginner_strength_profile, mock_templates};
use planmatch_core::{PlanTemplate, UserProfile};
use tempfile::TempDir;

/// Write raw bytes to `path`, creating parent directories.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent directories");
    }
    std::fs::write(path, contents).expect("write test file");
}

/// Temporary directory holding a catalog and a profile.
#[derive(Debug)]
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

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn catalog_path(&self) -> Utf8PathBuf {
        self.root.join("catalog.json")
    }

    pub(super) fn profile_path(&self) -> Utf8PathBuf {
        self.root.join("profile.json")
    }

    pub(super) fn write_catalog(&self, templates: &[PlanTemplate]) {
        let payload = serde_json::to_string_pretty(templates).expect("serialise catalog");
        write_utf8(&self.catalog_path(), payload.as_bytes());
    }

    pub(super) fn write_profile(&self, profile: &UserProfile) {
        let payload = serde_json::to_string_pretty(profile).expect("serialise profile");
        write_utf8(&self.profile_path(), payload.as_bytes());
    }

    /// Stage the mock catalog and the beginner strength profile.
    pub(super) fn with_defaults() -> Self {
        let workspace = Self::new();
        workspace.write_catalog(&mock_templates());
        workspace.write_profile(&beginner_strength_profile());
        workspace
    }
}
