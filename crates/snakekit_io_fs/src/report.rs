//! Rename report models and mutable report builder.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::spec::SpecRenameError;

/// Aggregate counters and diagnostics for one `rename_tree` run.
#[derive(Debug, Default, Clone)]
pub struct ReportRename {
    /// Destination root of the run.
    pub path_dir_dst: PathBuf,
    /// Number of files visited (copy attempts in live mode, plan lines in dry run).
    pub cnt_processed: u64,
    /// Number of files copied successfully.
    pub cnt_copied: u64,
    /// Number of destination directories ensured.
    pub cnt_dirs_created: u64,
    /// Non-fatal warnings collected during traversal/copy.
    pub warnings: Vec<String>,
    /// Per-file failures.
    pub errors: Vec<SpecRenameError>,
}

impl ReportRename {
    /// Number of collected hard errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Number of collected warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_processed".to_string(), self.cnt_processed);
        dict_counts.insert("cnt_copied".to_string(), self.cnt_copied);
        dict_counts.insert("cnt_dirs_created".to_string(), self.cnt_dirs_created);
        dict_counts.insert("cnt_errors".to_string(), self.error_count() as u64);
        dict_counts.insert("cnt_warnings".to_string(), self.warning_count() as u64);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        let dict_counts = self.to_dict();
        format!(
            "{prefix} processed={} copied={} dirs={} errors={} warnings={}",
            dict_counts["cnt_processed"],
            dict_counts["cnt_copied"],
            dict_counts["cnt_dirs_created"],
            dict_counts["cnt_errors"],
            dict_counts["cnt_warnings"]
        )
    }
}

impl fmt::Display for ReportRename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[RENAME]"))
    }
}

/// Mutable accumulator for rename statistics.
#[derive(Debug, Default, Clone)]
pub(crate) struct ReportRenameBuilder {
    cnt_processed: u64,
    cnt_copied: u64,
    cnt_dirs_created: u64,
    errors: Vec<SpecRenameError>,
    warnings: Vec<String>,
}

impl ReportRenameBuilder {
    pub(crate) fn add_processed(&mut self) {
        self.cnt_processed += 1;
    }

    pub(crate) fn add_copied(&mut self) {
        self.cnt_copied += 1;
    }

    pub(crate) fn add_dir_created(&mut self) {
        self.cnt_dirs_created += 1;
    }

    /// Add warning message; it is logged as it is recorded.
    pub(crate) fn add_warning(&mut self, warning: String) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    /// Add one path-scoped error.
    pub(crate) fn add_error(&mut self, path: PathBuf, exception: String) {
        log::error!("{}: {exception}", path.display());
        self.errors.push(SpecRenameError { path, exception });
    }

    /// Finalize builder into immutable report.
    pub(crate) fn build(self, path_dir_dst: PathBuf) -> ReportRename {
        ReportRename {
            path_dir_dst,
            cnt_processed: self.cnt_processed,
            cnt_copied: self.cnt_copied,
            cnt_dirs_created: self.cnt_dirs_created,
            errors: self.errors,
            warnings: self.warnings,
        }
    }
}
