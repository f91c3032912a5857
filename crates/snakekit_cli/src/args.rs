//! Command line arguments and their mapping onto [`SpecRenameOptions`].

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use snakekit_io_fs::{C_OUTPUT_FOLDER_DEFAULT, EnumRenamePatternMode, SpecRenameOptions};
use snakekit_manifest::{C_ICON_PATH_PREFIX_DEFAULT, SpecManifestOptions};

/// Pattern interpretation for `--include-file` / `--exclude-*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliPatternMode {
    Glob,
    Regex,
    Literal,
}

impl From<CliPatternMode> for EnumRenamePatternMode {
    fn from(value: CliPatternMode) -> Self {
        match value {
            CliPatternMode::Glob => Self::Glob,
            CliPatternMode::Regex => Self::Regex,
            CliPatternMode::Literal => Self::Literal,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "snakekit")]
#[command(version)]
#[command(
    about = "Copy a directory tree next to itself with every folder and file name in snake_case"
)]
pub struct CliArgs {
    /// Directory to scan
    #[arg(required_unless_present = "print_name")]
    pub root_path: Option<PathBuf>,

    /// Name of the destination folder, created next to ROOT_PATH
    #[arg(short, long, default_value = C_OUTPUT_FOLDER_DEFAULT)]
    pub output_folder: String,

    /// Only print what would be copied
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Delete an existing destination folder without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Only copy files whose source name matches (repeatable)
    #[arg(long = "include-file", value_name = "PATTERN")]
    pub patterns_include_files: Vec<String>,

    /// Skip files whose source name matches (repeatable)
    #[arg(long = "exclude-file", value_name = "PATTERN")]
    pub patterns_exclude_files: Vec<String>,

    /// Skip directories whose source name matches (repeatable)
    #[arg(long = "exclude-dir", value_name = "PATTERN")]
    pub patterns_exclude_dirs: Vec<String>,

    /// How include/exclude patterns are interpreted
    #[arg(long, value_enum, default_value_t = CliPatternMode::Glob)]
    pub pattern_mode: CliPatternMode,

    /// Print the normalized form of NAME and exit (repeatable)
    #[arg(long, value_name = "NAME")]
    pub print_name: Vec<String>,

    /// Write an icon manifest of ROOT_PATH to FILE instead of copying
    #[arg(long, value_name = "FILE", conflicts_with_all = ["dry_run", "yes"])]
    pub manifest: Option<PathBuf>,

    /// Prefix of each icon path recorded in the manifest
    #[arg(long, value_name = "PREFIX", default_value = C_ICON_PATH_PREFIX_DEFAULT)]
    pub manifest_prefix: String,

    /// Type folder scanned for the manifest (repeatable, default: all Solar types)
    #[arg(long = "icon-type", value_name = "TYPE")]
    pub icon_types: Vec<String>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

fn non_empty(patterns: &[String]) -> Option<Vec<String>> {
    if patterns.is_empty() {
        None
    } else {
        Some(patterns.to_vec())
    }
}

impl CliArgs {
    pub fn to_rename_options(&self) -> SpecRenameOptions {
        SpecRenameOptions {
            output_folder: self.output_folder.clone(),
            patterns_include_files: non_empty(&self.patterns_include_files),
            patterns_exclude_files: non_empty(&self.patterns_exclude_files),
            patterns_exclude_dirs: non_empty(&self.patterns_exclude_dirs),
            rule_pattern: self.pattern_mode.into(),
            if_dry_run: self.dry_run,
        }
    }

    pub fn to_manifest_options(&self) -> SpecManifestOptions {
        let mut spec_mf_options = SpecManifestOptions {
            path_prefix: self.manifest_prefix.clone(),
            ..SpecManifestOptions::default()
        };
        if !self.icon_types.is_empty() {
            spec_mf_options.icon_types = self.icon_types.clone();
        }
        spec_mf_options
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;
    use snakekit_io_fs::EnumRenamePatternMode;

    use super::CliArgs;

    #[test]
    fn cli_args_defaults_map_to_live_run() {
        let cli_args = CliArgs::try_parse_from(["snakekit", "icons/SVG"]).expect("parse");
        assert_eq!(cli_args.root_path, Some(PathBuf::from("icons/SVG")));

        let spec_rn_options = cli_args.to_rename_options();
        assert_eq!(spec_rn_options.output_folder, "snake_case");
        assert!(!spec_rn_options.if_dry_run);
        assert!(spec_rn_options.patterns_exclude_dirs.is_none());
        assert_eq!(spec_rn_options.rule_pattern, EnumRenamePatternMode::Glob);
    }

    #[test]
    fn cli_args_all_flags() {
        let cli_args = CliArgs::try_parse_from([
            "snakekit",
            "icons/SVG",
            "-o",
            "solar",
            "--dry-run",
            "--exclude-dir",
            r"^\.git$",
            "--exclude-dir",
            "^node_modules$",
            "--include-file",
            r"\.svg$",
            "--pattern-mode",
            "regex",
            "-vv",
        ])
        .expect("parse");
        assert_eq!(cli_args.verbose, 2);

        let spec_rn_options = cli_args.to_rename_options();
        assert_eq!(spec_rn_options.output_folder, "solar");
        assert!(spec_rn_options.if_dry_run);
        assert_eq!(spec_rn_options.rule_pattern, EnumRenamePatternMode::Regex);
        assert_eq!(
            spec_rn_options.patterns_exclude_dirs,
            Some(vec![r"^\.git$".to_string(), "^node_modules$".to_string()])
        );
        assert_eq!(
            spec_rn_options.patterns_include_files,
            Some(vec![r"\.svg$".to_string()])
        );
    }

    #[test]
    fn cli_args_root_required_unless_print_name() {
        assert!(CliArgs::try_parse_from(["snakekit"]).is_err());

        let cli_args =
            CliArgs::try_parse_from(["snakekit", "--print-name", "My File.PNG"]).expect("parse");
        assert!(cli_args.root_path.is_none());
        assert_eq!(cli_args.print_name, vec!["My File.PNG".to_string()]);
    }

    #[test]
    fn cli_args_manifest_mode_options() {
        let cli_args = CliArgs::try_parse_from([
            "snakekit",
            "icons/solar",
            "--manifest",
            "manifest.json",
            "--icon-type",
            "bold",
        ])
        .expect("parse");
        assert_eq!(cli_args.manifest, Some(PathBuf::from("manifest.json")));

        let spec_mf_options = cli_args.to_manifest_options();
        assert_eq!(spec_mf_options.icon_types, vec!["bold".to_string()]);
        assert_eq!(spec_mf_options.path_prefix, "icons/solar");

        let cli_args = CliArgs::try_parse_from(["snakekit", "x", "--manifest", "m.json"])
            .expect("parse");
        assert_eq!(cli_args.to_manifest_options().icon_types.len(), 6);

        assert!(
            CliArgs::try_parse_from(["snakekit", "x", "--manifest", "m.json", "--dry-run"])
                .is_err()
        );
    }

    #[test]
    fn cli_args_quiet_conflicts_with_verbose() {
        assert!(CliArgs::try_parse_from(["snakekit", "x", "-q", "-v"]).is_err());
    }
}
