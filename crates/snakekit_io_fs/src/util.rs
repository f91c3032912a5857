use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use globset::{Glob, GlobMatcher};
use regex::Regex;
use snakekit_naming::to_snake_case;

use crate::spec::{EnumRenamePatternMode, RenameTreeError};

////////////////////////////////////////////////////////////////////////////////
// #region PatternMatching

#[derive(Debug, Clone)]
pub(crate) enum TypeRenamePatternSeq {
    Literal(Vec<String>),
    Glob(Vec<GlobMatcher>),
    Regex(Vec<Regex>),
}

#[derive(Debug, Clone, Default)]
pub(crate) struct SpecRenamePatterns {
    pub(crate) patterns_include_files: Option<TypeRenamePatternSeq>,
    pub(crate) patterns_exclude_files: Option<TypeRenamePatternSeq>,
    pub(crate) patterns_exclude_dirs: Option<TypeRenamePatternSeq>,
}

impl SpecRenamePatterns {
    pub(crate) fn from_raw(
        patterns_include_files: Option<&[String]>,
        patterns_exclude_files: Option<&[String]>,
        patterns_exclude_dirs: Option<&[String]>,
        rule_pattern: EnumRenamePatternMode,
    ) -> Result<Self, RenameTreeError> {
        Ok(Self {
            patterns_include_files: _compile(patterns_include_files, rule_pattern)?,
            patterns_exclude_files: _compile(patterns_exclude_files, rule_pattern)?,
            patterns_exclude_dirs: _compile(patterns_exclude_dirs, rule_pattern)?,
        })
    }

    /// Source file basename is filtered out by include/exclude lists.
    pub(crate) fn should_skip_file(&self, name_file: &str) -> bool {
        let b_included = match &self.patterns_include_files {
            None => true,
            Some(patterns) => _is_pattern_matching(name_file, patterns),
        };
        !b_included
            || self
                .patterns_exclude_files
                .as_ref()
                .is_some_and(|patterns| _is_pattern_matching(name_file, patterns))
    }

    /// Source directory basename is filtered out by the exclude list.
    pub(crate) fn should_skip_dir(&self, name_dir: &str) -> bool {
        self.patterns_exclude_dirs
            .as_ref()
            .is_some_and(|patterns| _is_pattern_matching(name_dir, patterns))
    }
}

fn _compile(
    patterns: Option<&[String]>,
    rule_pattern: EnumRenamePatternMode,
) -> Result<Option<TypeRenamePatternSeq>, RenameTreeError> {
    let Some(patterns) = patterns else {
        return Ok(None);
    };
    if patterns.is_empty() {
        return Ok(None);
    }

    match rule_pattern {
        EnumRenamePatternMode::Literal => {
            Ok(Some(TypeRenamePatternSeq::Literal(patterns.to_vec())))
        }
        EnumRenamePatternMode::Glob => {
            let mut l_glob = Vec::with_capacity(patterns.len());
            for pattern in patterns {
                let matcher = Glob::new(pattern)
                    .map_err(|e| {
                        RenameTreeError::InvalidPattern(format!(
                            "Invalid pattern in include/exclude: {e}"
                        ))
                    })?
                    .compile_matcher();
                l_glob.push(matcher);
            }
            Ok(Some(TypeRenamePatternSeq::Glob(l_glob)))
        }
        EnumRenamePatternMode::Regex => {
            let mut l_regex = Vec::with_capacity(patterns.len());
            for pattern in patterns {
                let regex = Regex::new(pattern).map_err(|e| {
                    RenameTreeError::InvalidPattern(format!(
                        "Invalid pattern in include/exclude: {e}"
                    ))
                })?;
                l_regex.push(regex);
            }
            Ok(Some(TypeRenamePatternSeq::Regex(l_regex)))
        }
    }
}

fn _is_pattern_matching(value: &str, patterns: &TypeRenamePatternSeq) -> bool {
    match patterns {
        TypeRenamePatternSeq::Literal(v) => v.iter().any(|p| value.contains(p.as_str())),
        TypeRenamePatternSeq::Glob(v) => v.iter().any(|p| p.is_match(value)),
        TypeRenamePatternSeq::Regex(v) => v.iter().any(|p| p.is_match(value)),
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region PathUtilities

fn _is_relative_to_base(path: &Path, base: &Path) -> bool {
    path.starts_with(base)
}

fn _absolutize_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(path)
}

/// Resolve `path`, falling back to its resolved parent when `path` itself
/// does not exist yet.
fn _normalize_path(path: &Path) -> PathBuf {
    if let Ok(resolved) = fs::canonicalize(path) {
        return resolved;
    }
    if let (Some(path_parent), Some(name)) = (path.parent(), path.file_name())
        && let Ok(resolved_parent) = fs::canonicalize(path_parent)
    {
        return resolved_parent.join(name);
    }
    _absolutize_path(path)
}

pub(crate) fn is_overlap(src: &Path, dst: &Path) -> bool {
    let src_resolved = _normalize_path(src);
    let dst_resolved = _normalize_path(dst);
    _is_relative_to_base(&dst_resolved, &src_resolved)
        || _is_relative_to_base(&src_resolved, &dst_resolved)
}

/// Output folder must be exactly one normal path component.
pub(crate) fn validate_output_folder(output_folder: &str) -> Result<(), RenameTreeError> {
    let mut iter_components = Path::new(output_folder).components();
    match (iter_components.next(), iter_components.next()) {
        (Some(Component::Normal(_)), None)
            if !output_folder.contains('/') && !output_folder.contains('\\') =>
        {
            Ok(())
        }
        _ => Err(RenameTreeError::InvalidOutputFolder(
            output_folder.to_string(),
        )),
    }
}

/// Destination root: a sibling of the resolved source root named `output_folder`.
pub(crate) fn derive_destination_root(
    path_dir_src: &Path,
    output_folder: &str,
) -> Result<(PathBuf, PathBuf), RenameTreeError> {
    let path_dir_src_resolved = fs::canonicalize(path_dir_src)
        .map_err(|_| RenameTreeError::SourceNotFound(path_dir_src.to_path_buf()))?;
    let path_parent = path_dir_src_resolved.parent().ok_or_else(|| {
        RenameTreeError::DestinationInitFailed {
            path: path_dir_src_resolved.join(output_folder),
            message: "Source root has no parent directory.".to_string(),
        }
    })?;
    let path_dir_dst = path_parent.join(output_folder);
    Ok((path_dir_src_resolved, path_dir_dst))
}

/// Map a source entry to its destination by normalizing every path segment
/// relative to `path_dir_src`.
///
/// # Examples
/// ```ignore
/// let dst = derive_destination_path(
///     Path::new("/in/icons/Folder One/My File.TXT"),
///     Path::new("/in/icons"),
///     Path::new("/in/out"),
/// );
/// assert_eq!(dst, Path::new("/in/out/folder_one/my_file.txt"));
/// ```
pub(crate) fn derive_destination_path(
    path_src: &Path,
    path_dir_src: &Path,
    path_dir_dst: &Path,
) -> PathBuf {
    let path_rel = path_src.strip_prefix(path_dir_src).unwrap_or(path_src);
    let mut path_dst = path_dir_dst.to_path_buf();
    for part_rel in path_rel.components() {
        if let Component::Normal(name) = part_rel {
            path_dst.push(to_snake_case(&name.to_string_lossy()));
        }
    }
    path_dst
}

/// Remove an existing destination entry (directory tree, file or symlink).
pub(crate) fn remove_existing_destination(path_dst: &Path) -> Result<(), io::Error> {
    let meta_dst = fs::symlink_metadata(path_dst)?;
    if meta_dst.is_dir() {
        fs::remove_dir_all(path_dst)
    } else {
        fs::remove_file(path_dst)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region FileCopy

/// Copy bytes, permissions and access/modify times; on Linux also extended
/// attributes. Symlinked sources are followed.
pub(crate) fn copy_file_with_metadata(
    path_file_src: &Path,
    path_file_dst: &Path,
) -> Result<(), io::Error> {
    use filetime::{FileTime, set_file_times};

    fs::copy(path_file_src, path_file_dst)?;

    let stat_src = fs::metadata(path_file_src)?;
    let file_time_access = FileTime::from_last_access_time(&stat_src);
    let file_time_modify = FileTime::from_last_modification_time(&stat_src);
    set_file_times(path_file_dst, file_time_access, file_time_modify)?;

    #[cfg(target_os = "linux")]
    {
        copy_xattrs_linux(path_file_src, path_file_dst);
    }
    Ok(())
}

#[cfg(target_os = "linux")]
fn copy_xattrs_linux(path_file_src: &Path, path_file_dst: &Path) {
    let iter_xattr_names = match xattr::list(path_file_src) {
        Ok(v) => v,
        Err(_) => return,
    };

    for name in iter_xattr_names {
        let Some(raw_value) = xattr::get(path_file_src, &name).ok().flatten() else {
            continue;
        };
        let _ = xattr::set(path_file_dst, &name, &raw_value);
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
