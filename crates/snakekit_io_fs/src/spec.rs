//! Rename specification models and top-level error types.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Destination folder name used when none is given.
pub const C_OUTPUT_FOLDER_DEFAULT: &str = "snake_case";

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Pattern matching mode for include/exclude lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumRenamePatternMode {
    /// Shell-like wildcards (`*`, `?`, character classes).
    #[default]
    Glob,
    /// Regular expression pattern.
    Regex,
    /// Substring match.
    Literal,
}

/// Terminal state of one `rename_tree` call.
#[derive(Debug, Clone)]
pub enum EnumRenameOutcome {
    /// The existing destination was kept because confirmation was declined.
    Cancelled,
    /// Traversal finished; per-file failures live in the report.
    Completed(crate::report::ReportRename),
}

impl EnumRenameOutcome {
    /// Report of a completed run.
    pub fn report(&self) -> Option<&crate::report::ReportRename> {
        match self {
            Self::Cancelled => None,
            Self::Completed(report) => Some(report),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Progress notification emitted while walking the source tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventRename<'a> {
    /// Dry run: `path_src` would be copied to `path_dst`.
    Planned { path_src: &'a Path, path_dst: &'a Path },
    /// File copied with metadata.
    Copied { path_src: &'a Path, path_dst: &'a Path },
    /// File copy failed; traversal continues.
    Failed {
        path_src: &'a Path,
        path_dst: &'a Path,
        message: &'a str,
    },
    /// Destination directory ensured.
    DirCreated { path_dst: &'a Path },
    /// Destination directory could not be created; its subtree is skipped.
    DirFailed {
        path_src: &'a Path,
        path_dst: &'a Path,
        message: &'a str,
    },
    /// Pre-existing destination deleted after confirmation.
    DestinationRemoved { path_dst: &'a Path },
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// Input options for `rename_tree`.
#[derive(Debug, Clone)]
pub struct SpecRenameOptions {
    /// Name of the folder created next to the source root.
    pub output_folder: String,
    /// Include patterns applied to source file basename.
    pub patterns_include_files: Option<Vec<String>>,
    /// Exclude patterns applied to source file basename.
    pub patterns_exclude_files: Option<Vec<String>>,
    /// Exclude patterns applied to source directory basename.
    pub patterns_exclude_dirs: Option<Vec<String>>,
    /// Pattern interpretation mode.
    pub rule_pattern: EnumRenamePatternMode,
    /// Do not mutate filesystem; report what would happen.
    pub if_dry_run: bool,
}

impl Default for SpecRenameOptions {
    fn default() -> Self {
        Self {
            output_folder: C_OUTPUT_FOLDER_DEFAULT.to_string(),
            patterns_include_files: None,
            patterns_exclude_files: None,
            patterns_exclude_dirs: None,
            rule_pattern: EnumRenamePatternMode::Glob,
            if_dry_run: false,
        }
    }
}

/// One per-file failure with path + error text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRenameError {
    /// Failed source path.
    pub path: PathBuf,
    /// User-facing error text.
    pub exception: String,
}

/// "Top-level call failed" errors (input validation / setup stage).
#[derive(Debug, Error)]
pub enum RenameTreeError {
    /// Source path does not exist.
    #[error("Path {} does not exist", .0.display())]
    SourceNotFound(PathBuf),
    /// Source path is not a directory.
    #[error("Source is not a directory: {}", .0.display())]
    SourceNotDirectory(PathBuf),
    /// Output folder is not a plain single-component name.
    #[error("Invalid output folder name: `{0}`")]
    InvalidOutputFolder(String),
    /// Invalid include/exclude pattern.
    #[error("{0}")]
    InvalidPattern(String),
    /// Destination would be inside the source tree or contain it.
    #[error(
        "Source and destination directories overlap: {} <-> {}",
        .dir_source.display(),
        .dir_destination.display()
    )]
    SourceDestinationOverlap {
        /// Source root directory.
        dir_source: PathBuf,
        /// Computed destination directory.
        dir_destination: PathBuf,
    },
    /// Confirmed deletion of the existing destination failed.
    #[error("Failed to delete existing destination {}: {message}", .path.display())]
    DestinationRemoveFailed {
        /// Destination path that could not be removed.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// Destination root directory creation failed.
    #[error("Failed to initialize destination {}: {message}", .path.display())]
    DestinationInitFailed {
        /// Destination path that failed initialization.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{C_OUTPUT_FOLDER_DEFAULT, EnumRenamePatternMode, RenameTreeError, SpecRenameOptions};

    #[test]
    fn spec_rename_options_default_is_live_glob() {
        let spec_options = SpecRenameOptions::default();
        assert_eq!(spec_options.output_folder, C_OUTPUT_FOLDER_DEFAULT);
        assert_eq!(spec_options.rule_pattern, EnumRenamePatternMode::Glob);
        assert!(!spec_options.if_dry_run);
        assert!(spec_options.patterns_include_files.is_none());
    }

    #[test]
    fn rename_tree_error_messages_name_the_path() {
        let err = RenameTreeError::SourceNotFound(PathBuf::from("/nope/icons"));
        assert_eq!(err.to_string(), "Path /nope/icons does not exist");

        let err = RenameTreeError::SourceDestinationOverlap {
            dir_source: PathBuf::from("/a/icons"),
            dir_destination: PathBuf::from("/a/icons"),
        };
        assert_eq!(
            err.to_string(),
            "Source and destination directories overlap: /a/icons <-> /a/icons"
        );
    }
}
