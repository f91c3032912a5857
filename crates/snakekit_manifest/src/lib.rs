//! `snakekit_manifest` v1:
//! JSON manifest of a normalized icon tree (`<type>/<category>/<name>.svg`).
//!
//! Modules:
//! - `scan`   : tree scan, manifest assembly and writing
//! - `spec`   : options/records/errors
//! - `report` : run-time report model

pub mod report;
pub mod scan;
pub mod spec;

pub use report::ReportManifest;
pub use scan::{scan_icons, write_manifest};
pub use spec::{
    C_CATEGORY_SKIP_PREFIX, C_ICON_EXTENSION, C_ICON_PATH_PREFIX_DEFAULT, C_MANIFEST_FILE_DEFAULT,
    ManifestError, SpecIconRecord, SpecManifest, SpecManifestOptions, TUP_ICON_TYPES,
};
