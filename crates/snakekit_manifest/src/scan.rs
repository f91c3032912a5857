//! Icon tree scan and manifest writing.

use std::fs;
use std::path::Path;

use chrono::Utc;
use log::{info, warn};

use crate::report::ReportManifest;
use crate::spec::{
    C_CATEGORY_SKIP_PREFIX, C_ICON_EXTENSION, ManifestError, SpecIconRecord, SpecManifest,
    SpecManifestOptions,
};

fn push_warning(l_warnings: &mut Vec<String>, warning: String) {
    warn!("{warning}");
    l_warnings.push(warning);
}

/// Sorted names of the entries under `path_dir` accepted by `keep(name, is_dir)`.
fn list_names<F>(path_dir: &Path, keep: F) -> std::io::Result<Vec<String>>
where
    F: Fn(&str, bool) -> bool,
{
    let mut l_names = Vec::new();
    for entry_res in fs::read_dir(path_dir)? {
        let entry = entry_res?;
        let c_name = entry.file_name().to_string_lossy().to_string();
        let b_is_dir = entry.file_type()?.is_dir();
        if keep(&c_name, b_is_dir) {
            l_names.push(c_name);
        }
    }
    l_names.sort();
    Ok(l_names)
}

fn join_record_path(path_prefix: &str, parts: [&str; 3]) -> String {
    std::iter::once(path_prefix.trim_end_matches('/'))
        .chain(parts)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Collect icon records from `<path_dir_icons>/<type>/<category>/*.svg`.
///
/// Types are visited in `icon_types` order; categories and files in name
/// order. Symlinked and `sp_`-prefixed category folders are skipped. A
/// missing type folder or an unreadable folder becomes a warning.
pub fn scan_icons(
    path_dir_icons: &Path,
    spec_mf_options: &SpecManifestOptions,
) -> (Vec<SpecIconRecord>, Vec<String>) {
    let mut l_icons = Vec::new();
    let mut l_warnings = Vec::new();

    for icon_type in &spec_mf_options.icon_types {
        let path_type = path_dir_icons.join(icon_type);
        if !path_type.is_dir() {
            push_warning(&mut l_warnings, format!("Type folder not found: {icon_type}"));
            continue;
        }

        let l_categories = match list_names(&path_type, |name, b_is_dir| {
            b_is_dir && !name.starts_with(C_CATEGORY_SKIP_PREFIX)
        }) {
            Ok(v) => v,
            Err(e) => {
                push_warning(
                    &mut l_warnings,
                    format!("Could not read {}: {e}", path_type.display()),
                );
                continue;
            }
        };

        for category in l_categories {
            let path_category = path_type.join(&category);
            let l_files = match list_names(&path_category, |name, b_is_dir| {
                !b_is_dir && name.ends_with(C_ICON_EXTENSION)
            }) {
                Ok(v) => v,
                Err(e) => {
                    push_warning(
                        &mut l_warnings,
                        format!("Could not read {}: {e}", path_category.display()),
                    );
                    continue;
                }
            };

            for name_file in l_files {
                l_icons.push(SpecIconRecord {
                    path: join_record_path(
                        &spec_mf_options.path_prefix,
                        [icon_type.as_str(), category.as_str(), name_file.as_str()],
                    ),
                    icon_type: icon_type.clone(),
                    category: category.clone(),
                    // First occurrence only: `a.svg.svg` keeps its inner `.svg`.
                    name: name_file.replacen(C_ICON_EXTENSION, "", 1),
                });
            }
        }
    }

    (l_icons, l_warnings)
}

/// Scan `path_dir_icons` and write the manifest JSON to `path_file_manifest`.
pub fn write_manifest<P, Q>(
    path_dir_icons: P,
    path_file_manifest: Q,
    spec_mf_options: &SpecManifestOptions,
) -> Result<ReportManifest, ManifestError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let path_dir_icons = path_dir_icons.as_ref();
    let path_file_manifest = path_file_manifest.as_ref();
    if !path_dir_icons.is_dir() {
        return Err(ManifestError::IconsDirNotFound(path_dir_icons.to_path_buf()));
    }

    info!("Scanning icons under {}", path_dir_icons.display());
    let (l_icons, l_warnings) = scan_icons(path_dir_icons, spec_mf_options);
    let manifest = SpecManifest::from_icons(l_icons, Utc::now());
    let c_json = manifest.to_json_pretty()?;

    fs::write(path_file_manifest, c_json).map_err(|e| ManifestError::WriteFailed {
        path: path_file_manifest.to_path_buf(),
        message: e.to_string(),
    })?;

    let report = ReportManifest {
        path_file_manifest: path_file_manifest.to_path_buf(),
        cnt_icons: manifest.total_count,
        cnt_types: manifest.types.len(),
        cnt_categories: manifest.categories.len(),
        warnings: l_warnings,
    };
    info!("{report}");
    Ok(report)
}
