//! Output path resolution.
//!
//! Every run writes into a slug-scoped subtree of the output root so
//! artifacts for different clients never collide. Resolution is idempotent:
//! rerunning for the same slug reuses the directory and overwrites the
//! fixed-name artifacts, leaving unrelated files alone.

use std::path::{Path, PathBuf};

use crate::error::{ReportError, Result};
use crate::taxonomy::Category;

/// Default output root directory.
pub const DEFAULT_OUTPUT_ROOT: &str = "output";

/// Fixed file name of the paginated report document.
pub const REPORT_FILE_NAME: &str = "audit-report-mvp.pdf";

/// Resolved per-client output directory and artifact paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    dir: PathBuf,
}

impl OutputLayout {
    /// Resolve (and create) `<root>/<slug>/`.
    pub fn resolve(root: &Path, slug: &str) -> Result<Self> {
        let dir = root.join(slug);
        std::fs::create_dir_all(&dir).map_err(|source| ReportError::output_write(&dir, source))?;
        Ok(Self { dir })
    }

    /// The resolved client directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the PDF artifact.
    #[must_use]
    pub fn report_path(&self) -> PathBuf {
        self.dir.join(REPORT_FILE_NAME)
    }

    /// Path of the radar chart artifact for a category.
    #[must_use]
    pub fn chart_path(&self, category: Category) -> PathBuf {
        self.dir.join(category.chart_file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_creates_directory() {
        let root = tempfile::tempdir().expect("create temp dir");
        let layout = OutputLayout::resolve(root.path(), "acme-inc").expect("resolve");
        assert!(layout.dir().is_dir());
        assert!(layout.dir().ends_with("acme-inc"));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let root = tempfile::tempdir().expect("create temp dir");
        let first = OutputLayout::resolve(root.path(), "acme-inc").expect("first");
        let second = OutputLayout::resolve(root.path(), "acme-inc").expect("second");
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_preserves_unrelated_files() {
        let root = tempfile::tempdir().expect("create temp dir");
        let layout = OutputLayout::resolve(root.path(), "acme-inc").expect("resolve");
        let unrelated = layout.dir().join("notes.txt");
        std::fs::write(&unrelated, "keep me").expect("write");

        OutputLayout::resolve(root.path(), "acme-inc").expect("re-resolve");
        assert_eq!(std::fs::read_to_string(&unrelated).expect("read"), "keep me");
    }

    #[test]
    fn test_artifact_paths() {
        let root = tempfile::tempdir().expect("create temp dir");
        let layout = OutputLayout::resolve(root.path(), "client").expect("resolve");
        assert!(layout.report_path().ends_with("client/audit-report-mvp.pdf"));
        assert!(layout
            .chart_path(Category::Users)
            .ends_with("client/radar_users.png"));
    }
}
