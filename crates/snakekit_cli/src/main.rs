use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use snakekit_io_fs::{EnumRenameOutcome, rename_tree};
use snakekit_log::{EnumLogVerbosity, init_logging};
use snakekit_manifest::write_manifest;
use snakekit_naming::to_snake_case;

mod args;
mod prompt;
mod render;

use args::CliArgs;
use prompt::confirm_overwrite;
use render::{ConsoleRenderer, write_manifest_summary};

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();
    init_logging(EnumLogVerbosity::from_flags(cli_args.quiet, cli_args.verbose));
    run(&cli_args)
}

/// Parent of the resolved source root; console paths are shown relative to it.
fn derive_display_base(path_root: &Path) -> PathBuf {
    fs::canonicalize(path_root)
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .or_else(|| path_root.parent().map(Path::to_path_buf))
        .unwrap_or_default()
}

fn ask_on_terminal(path_dst: &Path, if_assume_yes: bool) -> bool {
    if if_assume_yes {
        info!("--yes given, deleting {}", path_dst.display());
        return true;
    }
    let stdin = io::stdin();
    match confirm_overwrite(path_dst, &mut stdin.lock(), &mut io::stdout()) {
        Ok(b_confirmed) => b_confirmed,
        Err(e) => {
            warn!("Could not read confirmation ({e}); keeping {}", path_dst.display());
            false
        }
    }
}

fn run(cli_args: &CliArgs) -> Result<()> {
    if !cli_args.print_name.is_empty() {
        let mut stdout = io::stdout().lock();
        for name in &cli_args.print_name {
            writeln!(stdout, "{}", to_snake_case(name))?;
        }
        return Ok(());
    }

    let path_root = cli_args
        .root_path
        .as_deref()
        .context("ROOT_PATH is required unless --print-name is given")?;
    if let Some(path_file_manifest) = cli_args.manifest.as_deref() {
        println!("Scanning icons...");
        let report = write_manifest(path_root, path_file_manifest, &cli_args.to_manifest_options())
            .with_context(|| format!("Failed to build manifest for {}", path_root.display()))?;
        write_manifest_summary(&mut io::stdout().lock(), &report)
            .context("Failed to write summary to stdout")?;
        return Ok(());
    }

    let spec_rn_options = cli_args.to_rename_options();
    let mut renderer = ConsoleRenderer::new(
        io::stdout(),
        derive_display_base(path_root),
        spec_rn_options.if_dry_run,
    );

    let outcome = rename_tree(
        path_root,
        &spec_rn_options,
        |path_dst| ask_on_terminal(path_dst, cli_args.yes),
        |event| renderer.on_event(event),
    )
    .with_context(|| format!("Failed to process {}", path_root.display()))?;

    match outcome {
        EnumRenameOutcome::Cancelled => {
            println!("Operation cancelled.");
        }
        EnumRenameOutcome::Completed(report) => {
            renderer
                .finish(&report)
                .context("Failed to write summary to stdout")?;
        }
    }
    Ok(())
}
