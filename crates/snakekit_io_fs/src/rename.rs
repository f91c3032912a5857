//! Filesystem tree traversal and snake-case copy orchestration.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use snakekit_naming::is_snake_case;

use crate::report::ReportRenameBuilder;
use crate::spec::{EnumRenameOutcome, EventRename, RenameTreeError, SpecRenameOptions};
use crate::util::{
    SpecRenamePatterns, copy_file_with_metadata, derive_destination_path,
    derive_destination_root, is_overlap, remove_existing_destination, validate_output_folder,
};

#[derive(Debug, Clone)]
struct SpecDirEntry {
    path_dir_src_sub: PathBuf,
    name_dir: String,
}

#[derive(Debug, Clone)]
struct SpecFileEntry {
    path_file_src: PathBuf,
    name_file: String,
    if_special: bool,
}

#[derive(Debug)]
struct SpecRenameContext<'a> {
    path_dir_src: PathBuf,
    path_dir_dst: PathBuf,
    spec_rn_options: &'a SpecRenameOptions,
    spec_rn_pats: SpecRenamePatterns,
    builder_rn_report: ReportRenameBuilder,
    set_paths_dst: HashSet<PathBuf>,
}

/// Copy the tree under `dir_source` into `parent(dir_source)/output_folder`,
/// normalizing every directory and file name with
/// [`snakekit_naming::to_snake_case`].
///
/// This function performs:
/// 1. Input validation and destination derivation (no side effects on failure).
/// 2. Conflict handling: in live mode an existing destination is passed to
///    `confirm`; `false` ends the run as [`EnumRenameOutcome::Cancelled`],
///    `true` deletes the destination recursively.
/// 3. Top-down traversal. Files of a directory are handled before its
///    subdirectories; entries are visited in name order.
/// 4. Report aggregation.
///
/// Dry-run mode emits [`EventRename::Planned`] per file and never touches the
/// filesystem. Per-file copy failures are reported through
/// [`EventRename::Failed`] and the report and never abort the walk; a
/// directory that cannot be created yields [`EventRename::DirFailed`] and its
/// subtree is skipped.
///
/// Returns [`RenameTreeError`] only for setup failures.
pub fn rename_tree<P, C, O>(
    dir_source: P,
    spec_rn_options: &SpecRenameOptions,
    confirm: C,
    mut observer: O,
) -> Result<EnumRenameOutcome, RenameTreeError>
where
    P: AsRef<Path>,
    C: FnOnce(&Path) -> bool,
    O: FnMut(&EventRename<'_>),
{
    let path_dir_src_raw = dir_source.as_ref();
    if !path_dir_src_raw.exists() {
        return Err(RenameTreeError::SourceNotFound(
            path_dir_src_raw.to_path_buf(),
        ));
    }
    if !path_dir_src_raw.is_dir() {
        return Err(RenameTreeError::SourceNotDirectory(
            path_dir_src_raw.to_path_buf(),
        ));
    }
    validate_output_folder(&spec_rn_options.output_folder)?;
    let spec_rn_pats = SpecRenamePatterns::from_raw(
        spec_rn_options.patterns_include_files.as_deref(),
        spec_rn_options.patterns_exclude_files.as_deref(),
        spec_rn_options.patterns_exclude_dirs.as_deref(),
        spec_rn_options.rule_pattern,
    )?;

    let (path_dir_src, path_dir_dst) =
        derive_destination_root(path_dir_src_raw, &spec_rn_options.output_folder)?;
    if is_overlap(&path_dir_src, &path_dir_dst) {
        return Err(RenameTreeError::SourceDestinationOverlap {
            dir_source: path_dir_src,
            dir_destination: path_dir_dst,
        });
    }

    let if_dry_run = spec_rn_options.if_dry_run;
    let mut builder_rn_report = ReportRenameBuilder::default();
    let b_dst_exists = fs::symlink_metadata(&path_dir_dst).is_ok();

    if b_dst_exists && if_dry_run {
        builder_rn_report.add_warning(format!(
            "Output folder {} already exists; a live run asks before deleting it.",
            path_dir_dst.display()
        ));
    } else if b_dst_exists {
        if !confirm(&path_dir_dst) {
            info!(
                "Kept existing output folder {}; operation cancelled",
                path_dir_dst.display()
            );
            return Ok(EnumRenameOutcome::Cancelled);
        }
        remove_existing_destination(&path_dir_dst).map_err(|e| {
            RenameTreeError::DestinationRemoveFailed {
                path: path_dir_dst.clone(),
                message: e.to_string(),
            }
        })?;
        info!("Deleted existing {}", path_dir_dst.display());
        observer(&EventRename::DestinationRemoved {
            path_dst: &path_dir_dst,
        });
    }

    info!(
        "{}Renaming {} -> {}",
        if if_dry_run { "DRY RUN - " } else { "" },
        path_dir_src.display(),
        path_dir_dst.display()
    );

    if !if_dry_run {
        fs::create_dir_all(&path_dir_dst).map_err(|e| RenameTreeError::DestinationInitFailed {
            path: path_dir_dst.clone(),
            message: e.to_string(),
        })?;
        builder_rn_report.add_dir_created();
        observer(&EventRename::DirCreated {
            path_dst: &path_dir_dst,
        });
    }

    let mut spec_rn_ctx = SpecRenameContext {
        path_dir_src: path_dir_src.clone(),
        path_dir_dst: path_dir_dst.clone(),
        spec_rn_options,
        spec_rn_pats,
        builder_rn_report,
        set_paths_dst: HashSet::new(),
    };

    walk_directory(&path_dir_src, &mut spec_rn_ctx, &mut observer);

    let report = spec_rn_ctx.builder_rn_report.build(path_dir_dst);
    info!("{report}");
    Ok(EnumRenameOutcome::Completed(report))
}

fn walk_directory<O>(path_root: &Path, spec_rn_ctx: &mut SpecRenameContext<'_>, observer: &mut O)
where
    O: FnMut(&EventRename<'_>),
{
    let mut l_dirs: Vec<SpecDirEntry> = Vec::new();
    let mut l_files: Vec<SpecFileEntry> = Vec::new();

    let iter_entries = match fs::read_dir(path_root) {
        Ok(iter) => iter,
        Err(e) => {
            spec_rn_ctx.builder_rn_report.add_warning(format!(
                "Failed to read directory {} ({e})",
                path_root.display()
            ));
            return;
        }
    };

    for _entry_res in iter_entries {
        let entry = match _entry_res {
            Ok(v) => v,
            Err(e) => {
                spec_rn_ctx.builder_rn_report.add_warning(format!(
                    "Failed to read directory entry under {} ({e})",
                    path_root.display()
                ));
                continue;
            }
        };

        let path_entry = entry.path();
        let c_name = entry.file_name().to_string_lossy().to_string();
        let cfg_file_type = match entry.file_type() {
            Ok(v) => v,
            Err(e) => {
                spec_rn_ctx
                    .builder_rn_report
                    .add_warning(format!("Failed to inspect {} ({e})", path_entry.display()));
                continue;
            }
        };

        let b_is_symlink = cfg_file_type.is_symlink();
        if b_is_symlink && path_entry.is_dir() {
            spec_rn_ctx.builder_rn_report.add_warning(format!(
                "Symlinked directory not followed: {}",
                path_entry.display()
            ));
        } else if cfg_file_type.is_dir() {
            l_dirs.push(SpecDirEntry {
                path_dir_src_sub: path_entry,
                name_dir: c_name,
            });
        } else {
            // Broken symlinks land here too and fail at copy time.
            l_files.push(SpecFileEntry {
                path_file_src: path_entry,
                name_file: c_name,
                if_special: !(cfg_file_type.is_file() || b_is_symlink),
            });
        }
    }

    l_dirs.sort_by(|a, b| a.name_dir.cmp(&b.name_dir));
    l_files.sort_by(|a, b| a.name_file.cmp(&b.name_file));

    l_dirs.retain(|d| !spec_rn_ctx.spec_rn_pats.should_skip_dir(&d.name_dir));
    l_files.retain(|f| !spec_rn_ctx.spec_rn_pats.should_skip_file(&f.name_file));

    for _file_entry in l_files {
        handle_file_entry(_file_entry, spec_rn_ctx, observer);
    }

    for _dir_entry in l_dirs {
        let path_next = _dir_entry.path_dir_src_sub.clone();
        if handle_dir_entry(_dir_entry, spec_rn_ctx, observer) {
            walk_directory(&path_next, spec_rn_ctx, observer);
        }
    }
}

/// Record `path_dst` as taken; warn when an earlier entry already mapped to it.
fn register_destination(path_src: &Path, path_dst: &Path, spec_rn_ctx: &mut SpecRenameContext<'_>) {
    if !spec_rn_ctx.set_paths_dst.insert(path_dst.to_path_buf()) {
        spec_rn_ctx.builder_rn_report.add_warning(format!(
            "Name collision: {} maps onto already used {}",
            path_src.display(),
            path_dst.display()
        ));
    }
}

fn log_renamed(name_src: &str, path_dst: &Path) {
    if !is_snake_case(name_src) {
        debug!("rename {name_src:?} -> {}", path_dst.display());
    }
}

fn handle_dir_entry<O>(
    spec_dir_entry: SpecDirEntry,
    spec_rn_ctx: &mut SpecRenameContext<'_>,
    observer: &mut O,
) -> bool
where
    O: FnMut(&EventRename<'_>),
{
    let path_dir_dst_sub = derive_destination_path(
        &spec_dir_entry.path_dir_src_sub,
        &spec_rn_ctx.path_dir_src,
        &spec_rn_ctx.path_dir_dst,
    );
    log_renamed(&spec_dir_entry.name_dir, &path_dir_dst_sub);
    register_destination(
        &spec_dir_entry.path_dir_src_sub,
        &path_dir_dst_sub,
        spec_rn_ctx,
    );

    if spec_rn_ctx.spec_rn_options.if_dry_run {
        return true;
    }

    if let Err(e) = fs::create_dir_all(&path_dir_dst_sub) {
        let message = e.to_string();
        observer(&EventRename::DirFailed {
            path_src: &spec_dir_entry.path_dir_src_sub,
            path_dst: &path_dir_dst_sub,
            message: &message,
        });
        spec_rn_ctx
            .builder_rn_report
            .add_error(spec_dir_entry.path_dir_src_sub, message);
        return false;
    }
    spec_rn_ctx.builder_rn_report.add_dir_created();
    observer(&EventRename::DirCreated {
        path_dst: &path_dir_dst_sub,
    });
    true
}

fn handle_file_entry<O>(
    spec_file_entry: SpecFileEntry,
    spec_rn_ctx: &mut SpecRenameContext<'_>,
    observer: &mut O,
) where
    O: FnMut(&EventRename<'_>),
{
    spec_rn_ctx.builder_rn_report.add_processed();

    let path_file_src = spec_file_entry.path_file_src;
    let path_file_dst = derive_destination_path(
        &path_file_src,
        &spec_rn_ctx.path_dir_src,
        &spec_rn_ctx.path_dir_dst,
    );
    log_renamed(&spec_file_entry.name_file, &path_file_dst);
    register_destination(&path_file_src, &path_file_dst, spec_rn_ctx);

    if spec_rn_ctx.spec_rn_options.if_dry_run {
        if spec_file_entry.if_special {
            spec_rn_ctx.builder_rn_report.add_warning(format!(
                "Special file will fail to copy: {}",
                path_file_src.display()
            ));
        }
        observer(&EventRename::Planned {
            path_src: &path_file_src,
            path_dst: &path_file_dst,
        });
        return;
    }

    // Opening a FIFO for reading blocks, so special files are never opened.
    let res_copy = if spec_file_entry.if_special {
        Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file (FIFO, socket or device)",
        ))
    } else {
        copy_file_with_metadata(&path_file_src, &path_file_dst)
    };

    match res_copy {
        Ok(()) => {
            spec_rn_ctx.builder_rn_report.add_copied();
            observer(&EventRename::Copied {
                path_src: &path_file_src,
                path_dst: &path_file_dst,
            });
        }
        Err(e) => {
            let message = e.to_string();
            observer(&EventRename::Failed {
                path_src: &path_file_src,
                path_dst: &path_file_dst,
                message: &message,
            });
            spec_rn_ctx
                .builder_rn_report
                .add_error(path_file_src, message);
        }
    }
}
