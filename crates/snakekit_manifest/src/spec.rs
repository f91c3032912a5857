use std::collections::BTreeSet;
use std::path::PathBuf;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Icon style folders scanned directly under the icons root, in scan order.
pub const TUP_ICON_TYPES: [&str; 6] = [
    "bold",
    "bold_duotone",
    "broken",
    "line_duotone",
    "linear",
    "outline",
];
/// Category folders with this prefix are not listed.
pub const C_CATEGORY_SKIP_PREFIX: &str = "sp_";
pub const C_ICON_EXTENSION: &str = ".svg";
/// Prefix of every record `path`, relative to where the manifest is served.
pub const C_ICON_PATH_PREFIX_DEFAULT: &str = "icons/solar";
pub const C_MANIFEST_FILE_DEFAULT: &str = "manifest.json";

////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// Input options for [`crate::write_manifest`].
#[derive(Debug, Clone)]
pub struct SpecManifestOptions {
    /// Type folders to scan, in order.
    pub icon_types: Vec<String>,
    /// Prefix joined in front of `<type>/<category>/<file>` in each record.
    pub path_prefix: String,
}

impl Default for SpecManifestOptions {
    fn default() -> Self {
        Self {
            icon_types: TUP_ICON_TYPES.iter().map(|t| t.to_string()).collect(),
            path_prefix: C_ICON_PATH_PREFIX_DEFAULT.to_string(),
        }
    }
}

/// One icon entry of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecIconRecord {
    pub path: String,
    #[serde(rename = "type")]
    pub icon_type: String,
    pub category: String,
    pub name: String,
}

/// Serialized manifest document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecManifest {
    /// UTC generation time, RFC 3339 with milliseconds and a `Z` suffix.
    pub generated: String,
    pub total_count: usize,
    /// Distinct record types, sorted.
    pub types: Vec<String>,
    /// Distinct record categories, sorted.
    pub categories: Vec<String>,
    pub icons: Vec<SpecIconRecord>,
}

impl SpecManifest {
    pub fn from_icons(icons: Vec<SpecIconRecord>, generated: DateTime<Utc>) -> Self {
        let types: BTreeSet<&str> = icons.iter().map(|i| i.icon_type.as_str()).collect();
        let categories: BTreeSet<&str> = icons.iter().map(|i| i.category.as_str()).collect();
        Self {
            generated: generated.to_rfc3339_opts(SecondsFormat::Millis, true),
            total_count: icons.len(),
            types: types.into_iter().map(str::to_string).collect(),
            categories: categories.into_iter().map(str::to_string).collect(),
            icons,
        }
    }

    /// Pretty JSON with two-space indentation and no trailing newline.
    pub fn to_json_pretty(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Icons directory {} does not exist", .0.display())]
    IconsDirNotFound(PathBuf),
    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write manifest {}: {message}", .path.display())]
    WriteFailed { path: PathBuf, message: String },
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
