//! Exclusion rules applied to every candidate file

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Layout;

/// Why a candidate was left in place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkipReason {
    /// The file is the root documentation file
    RootDoc,
    /// The file lies under an excluded directory
    ExcludedDir,
    /// The file is a reserved file such as the pull request template
    ReservedFile,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::RootDoc => "root documentation file",
            Self::ExcludedDir => "excluded directory",
            Self::ReservedFile => "reserved file",
        };
        f.write_str(s)
    }
}

/// A file name that is never relocated when it sits under a given directory name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedFile {
    /// Name of an ancestor directory, at any depth below the root
    pub dir_name: String,
    /// File name
    pub file_name: String,
}

impl ReservedFile {
    /// GitHub's pull request template
    #[must_use]
    pub fn pull_request_template() -> Self {
        Self {
            dir_name: ".github".to_string(),
            file_name: "PULL_REQUEST_TEMPLATE.md".to_string(),
        }
    }

    /// Check `rel_path` (relative to the root) against this entry
    #[must_use]
    pub fn matches(&self, rel_path: &Path) -> bool {
        if rel_path.file_name().is_none_or(|n| n != self.file_name.as_str()) {
            return false;
        }

        rel_path
            .parent()
            .is_some_and(|parent| parent.iter().any(|c| c == self.dir_name.as_str()))
    }
}

/// Exclusion rules evaluated per candidate; any match skips the file
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    root_dir: PathBuf,
    root_doc: PathBuf,
    excluded_dirs: Vec<PathBuf>,
    reserved: Vec<ReservedFile>,
}

impl ExclusionRules {
    /// Build the rules for a layout
    #[must_use]
    pub fn from_layout(layout: &Layout) -> Self {
        Self {
            root_dir: layout.root_dir.clone(),
            root_doc: layout.root_doc.clone(),
            excluded_dirs: layout.excluded_dirs.clone(),
            reserved: vec![ReservedFile::pull_request_template()],
        }
    }

    /// Whether `dir` is, or lies under, an excluded directory
    #[must_use]
    pub fn is_excluded_dir(&self, dir: &Path) -> bool {
        self.excluded_dirs.iter().any(|excluded| dir.starts_with(excluded))
    }

    /// Return the first rule that skips `path`, if any
    #[must_use]
    pub fn check(&self, path: &Path) -> Option<SkipReason> {
        if path == self.root_doc {
            return Some(SkipReason::RootDoc);
        }

        if path.parent().is_some_and(|parent| self.is_excluded_dir(parent)) {
            return Some(SkipReason::ExcludedDir);
        }

        let rel_path = path.strip_prefix(&self.root_dir).unwrap_or(path);
        if self.reserved.iter().any(|r| r.matches(rel_path)) {
            return Some(SkipReason::ReservedFile);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> ExclusionRules {
        let root = PathBuf::from("/repo");
        ExclusionRules {
            root_doc: root.join("README.md"),
            excluded_dirs: vec![root.join("docs"), root.join("vendor")],
            reserved: vec![ReservedFile::pull_request_template()],
            root_dir: root,
        }
    }

    #[test]
    fn test_root_doc_skipped() {
        assert_eq!(
            rules().check(Path::new("/repo/README.md")),
            Some(SkipReason::RootDoc)
        );
    }

    #[test]
    fn test_nested_readme_not_skipped() {
        assert_eq!(rules().check(Path::new("/repo/crates/a/README.md")), None);
    }

    #[test]
    fn test_excluded_dir_at_any_depth() {
        let rules = rules();
        assert_eq!(
            rules.check(Path::new("/repo/docs/index.md")),
            Some(SkipReason::ExcludedDir)
        );
        assert_eq!(
            rules.check(Path::new("/repo/vendor/lib/deep/CHANGELOG.md")),
            Some(SkipReason::ExcludedDir)
        );
    }

    #[test]
    fn test_excluded_dir_matches_whole_components() {
        // "docs-old" shares a prefix with "docs" but is a different directory
        assert_eq!(rules().check(Path::new("/repo/docs-old/a.md")), None);
    }

    #[test]
    fn test_pull_request_template_skipped() {
        let rules = rules();
        assert_eq!(
            rules.check(Path::new("/repo/.github/PULL_REQUEST_TEMPLATE.md")),
            Some(SkipReason::ReservedFile)
        );
        assert_eq!(
            rules.check(Path::new("/repo/.github/templates/PULL_REQUEST_TEMPLATE.md")),
            Some(SkipReason::ReservedFile)
        );
    }

    #[test]
    fn test_pull_request_template_outside_github_moves() {
        assert_eq!(rules().check(Path::new("/repo/PULL_REQUEST_TEMPLATE.md")), None);
    }

    #[test]
    fn test_other_github_markdown_moves() {
        assert_eq!(rules().check(Path::new("/repo/.github/CONTRIBUTING.md")), None);
    }

    #[test]
    fn test_reserved_dir_above_root_ignored() {
        let root = PathBuf::from("/home/.github/repo");
        let rules = ExclusionRules {
            root_doc: root.join("README.md"),
            excluded_dirs: vec![root.join("docs")],
            reserved: vec![ReservedFile::pull_request_template()],
            root_dir: root,
        };

        assert_eq!(
            rules.check(Path::new("/home/.github/repo/PULL_REQUEST_TEMPLATE.md")),
            None
        );
    }

    #[test]
    fn test_is_excluded_dir() {
        let rules = rules();
        assert!(rules.is_excluded_dir(Path::new("/repo/docs")));
        assert!(rules.is_excluded_dir(Path::new("/repo/docs/guide")));
        assert!(!rules.is_excluded_dir(Path::new("/repo/src")));
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(SkipReason::ExcludedDir.to_string(), "excluded directory");
    }
}
