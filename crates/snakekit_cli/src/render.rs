//! Human-readable console output for rename events and the final summary.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use snakekit_io_fs::{EventRename, ReportRename};
use snakekit_manifest::ReportManifest;

const C_BANNER_RULE: &str =
    "============================================================";

fn display_relative<'p>(path_base: &Path, path: &'p Path) -> std::path::Display<'p> {
    path.strip_prefix(path_base).unwrap_or(path).display()
}

/// Writes one block per event; paths are shown relative to `path_base`
/// (the parent of the source root).
pub struct ConsoleRenderer<W: Write> {
    writer: W,
    path_base: PathBuf,
    if_dry_run: bool,
    if_header_written: bool,
    err_write: Option<io::Error>,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(writer: W, path_base: PathBuf, if_dry_run: bool) -> Self {
        Self {
            writer,
            path_base,
            if_dry_run,
            if_header_written: false,
            err_write: None,
        }
    }

    fn ensure_header(&mut self) -> io::Result<()> {
        if self.if_header_written {
            return Ok(());
        }
        self.if_header_written = true;
        writeln!(
            self.writer,
            "{}Processing files and folders...\n",
            if self.if_dry_run { "DRY RUN - " } else { "" }
        )
    }

    fn write_event(&mut self, event: &EventRename<'_>) -> io::Result<()> {
        match *event {
            EventRename::DestinationRemoved { path_dst } => {
                writeln!(self.writer, "Deleted existing {}\n", path_dst.display())
            }
            EventRename::DirCreated { .. } => self.ensure_header(),
            EventRename::Planned { path_src, path_dst } => {
                self.ensure_header()?;
                writeln!(
                    self.writer,
                    "Would copy: {}",
                    display_relative(&self.path_base, path_src)
                )?;
                writeln!(
                    self.writer,
                    "        to: {}\n",
                    display_relative(&self.path_base, path_dst)
                )
            }
            EventRename::Copied { path_src, path_dst } => {
                self.ensure_header()?;
                writeln!(
                    self.writer,
                    "\u{2713} Copied: {}",
                    display_relative(&self.path_base, path_src)
                )?;
                writeln!(
                    self.writer,
                    "      to: {}\n",
                    display_relative(&self.path_base, path_dst)
                )
            }
            EventRename::Failed {
                path_src, message, ..
            } => {
                self.ensure_header()?;
                writeln!(
                    self.writer,
                    "\u{2717} Error copying {}: {message}\n",
                    display_relative(&self.path_base, path_src)
                )
            }
            EventRename::DirFailed {
                path_src, message, ..
            } => {
                self.ensure_header()?;
                writeln!(
                    self.writer,
                    "\u{2717} Error creating folder for {}: {message}\n",
                    display_relative(&self.path_base, path_src)
                )
            }
        }
    }

    /// Render one event; the first write failure is kept for [`Self::finish`].
    pub fn on_event(&mut self, event: &EventRename<'_>) {
        if self.err_write.is_some() {
            return;
        }
        if let Err(e) = self.write_event(event) {
            self.err_write = Some(e);
        }
    }

    /// Write the summary block and surface any earlier write failure.
    ///
    /// Warnings are only counted here; their text goes to the log.
    pub fn finish(mut self, report: &ReportRename) -> io::Result<W> {
        if let Some(e) = self.err_write.take() {
            return Err(e);
        }
        self.ensure_header()?;

        let c_verb = if self.if_dry_run { "Would copy" } else { "Copied" };
        writeln!(self.writer, "\n{c_verb} {} files", report.cnt_processed)?;
        if self.if_dry_run {
            writeln!(self.writer, "\n{C_BANNER_RULE}")?;
            writeln!(self.writer, "This was a DRY RUN. No files were actually copied.")?;
            writeln!(self.writer, "To apply changes, run again without --dry-run")?;
            writeln!(self.writer, "{C_BANNER_RULE}")?;
        } else {
            writeln!(
                self.writer,
                "\n\u{2713} All files copied to: {}",
                report.path_dir_dst.display()
            )?;
        }
        writeln!(self.writer, "{report}")?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Summary block printed after a manifest has been written.
pub fn write_manifest_summary<W: Write>(writer: &mut W, report: &ReportManifest) -> io::Result<()> {
    writeln!(
        writer,
        "\u{2713} Generated {}",
        report.path_file_manifest.display()
    )?;
    writeln!(writer, "  - Total icons: {}", report.cnt_icons)?;
    writeln!(writer, "  - Types: {}", report.cnt_types)?;
    writeln!(writer, "  - Categories: {}", report.cnt_categories)?;
    writeln!(writer, "{report}")?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use snakekit_io_fs::{EventRename, ReportRename};
    use snakekit_manifest::ReportManifest;

    use super::{ConsoleRenderer, write_manifest_summary};

    fn render(if_dry_run: bool, l_events: &[EventRename<'_>], report: &ReportRename) -> String {
        let mut renderer = ConsoleRenderer::new(Vec::new(), PathBuf::from("/data"), if_dry_run);
        for event in l_events {
            renderer.on_event(event);
        }
        let raw = renderer.finish(report).expect("finish");
        String::from_utf8(raw).expect("utf8")
    }

    #[test]
    fn console_renderer_dry_run_lines_are_relative() {
        let report = ReportRename {
            cnt_processed: 1,
            ..ReportRename::default()
        };
        let c_out = render(
            true,
            &[EventRename::Planned {
                path_src: Path::new("/data/SVG/Bold/Arrow Up.svg"),
                path_dst: Path::new("/data/solar/bold/arrow_up.svg"),
            }],
            &report,
        );

        assert!(c_out.starts_with("DRY RUN - Processing files and folders...\n"));
        assert!(c_out.contains("Would copy: SVG/Bold/Arrow Up.svg\n"));
        assert!(c_out.contains("        to: solar/bold/arrow_up.svg\n"));
        assert!(c_out.contains("\nWould copy 1 files\n"));
        assert!(c_out.contains("This was a DRY RUN. No files were actually copied."));
        assert!(c_out.ends_with("[RENAME] processed=1 copied=0 dirs=0 errors=0 warnings=0\n"));
    }

    #[test]
    fn console_renderer_live_marks_success_and_failure() {
        let report = ReportRename {
            path_dir_dst: PathBuf::from("/data/solar"),
            cnt_processed: 2,
            cnt_copied: 1,
            cnt_dirs_created: 1,
            ..ReportRename::default()
        };
        let c_out = render(
            false,
            &[
                EventRename::DirCreated {
                    path_dst: Path::new("/data/solar"),
                },
                EventRename::Copied {
                    path_src: Path::new("/data/SVG/A.svg"),
                    path_dst: Path::new("/data/solar/a.svg"),
                },
                EventRename::Failed {
                    path_src: Path::new("/data/SVG/B.svg"),
                    path_dst: Path::new("/data/solar/b.svg"),
                    message: "Permission denied",
                },
            ],
            &report,
        );

        assert!(c_out.starts_with("Processing files and folders...\n"));
        assert!(c_out.contains("\u{2713} Copied: SVG/A.svg\n      to: solar/a.svg\n"));
        assert!(c_out.contains("\u{2717} Error copying SVG/B.svg: Permission denied\n"));
        assert!(c_out.contains("\nCopied 2 files\n"));
        assert!(c_out.contains("\u{2713} All files copied to: /data/solar\n"));
    }

    #[test]
    fn console_renderer_reports_folder_failure() {
        let report = ReportRename {
            path_dir_dst: PathBuf::from("/data/solar"),
            errors: vec![snakekit_io_fs::SpecRenameError {
                path: PathBuf::from("/data/SVG/A"),
                exception: "File exists (os error 17)".to_string(),
            }],
            ..ReportRename::default()
        };
        let c_out = render(
            false,
            &[EventRename::DirFailed {
                path_src: Path::new("/data/SVG/A"),
                path_dst: Path::new("/data/solar/a"),
                message: "File exists (os error 17)",
            }],
            &report,
        );

        assert!(c_out.contains("\u{2717} Error creating folder for SVG/A: File exists (os error 17)\n"));
        assert!(c_out.ends_with("errors=1 warnings=0\n"));
    }

    #[test]
    fn console_renderer_counts_warnings_without_repeating_them() {
        let report = ReportRename {
            warnings: vec!["Name collision: a maps onto already used b".to_string()],
            ..ReportRename::default()
        };
        let c_out = render(true, &[], &report);

        assert!(!c_out.contains("Name collision"));
        assert!(c_out.ends_with("warnings=1\n"));
    }

    #[test]
    fn manifest_summary_lists_counts() {
        let report = ReportManifest {
            path_file_manifest: PathBuf::from("manifest.json"),
            cnt_icons: 3,
            cnt_types: 2,
            cnt_categories: 2,
            warnings: vec![],
        };
        let mut raw = Vec::new();
        write_manifest_summary(&mut raw, &report).expect("summary");
        let c_out = String::from_utf8(raw).expect("utf8");

        assert!(c_out.starts_with("\u{2713} Generated manifest.json\n  - Total icons: 3\n"));
        assert!(c_out.ends_with("[MANIFEST] icons=3 types=2 categories=2 warnings=0\n"));
    }
}
