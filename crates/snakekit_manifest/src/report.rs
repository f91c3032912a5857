use std::fmt;
use std::path::PathBuf;

/// Summary of one `write_manifest` run.
#[derive(Debug, Default, Clone)]
pub struct ReportManifest {
    /// Manifest file written.
    pub path_file_manifest: PathBuf,
    pub cnt_icons: usize,
    pub cnt_types: usize,
    pub cnt_categories: usize,
    /// Missing type folders and unreadable category folders.
    pub warnings: Vec<String>,
}

impl ReportManifest {
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} icons={} types={} categories={} warnings={}",
            self.cnt_icons,
            self.cnt_types,
            self.cnt_categories,
            self.warning_count()
        )
    }
}

impl fmt::Display for ReportManifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[MANIFEST]"))
    }
}
