//! Interactive confirmation before an existing destination is deleted.

use std::io::{self, BufRead, Write};
use std::path::Path;

/// The only answer that allows the delete.
pub const C_CONFIRM_ANSWER: &str = "yes";

/// Ask whether `path_dst` may be deleted.
///
/// Only the exact line `yes` confirms; `Yes`, `y`, an empty line and EOF all
/// decline. The line terminator is not part of the answer.
pub fn confirm_overwrite<R, W>(path_dst: &Path, reader: &mut R, writer: &mut W) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        writer,
        "\u{26a0}\u{fe0f}  Output folder {} already exists.",
        path_dst.display()
    )?;
    write!(writer, "Do you want to delete it and continue? (yes/no): ")?;
    writer.flush()?;

    let mut c_line = String::new();
    if reader.read_line(&mut c_line)? == 0 {
        writeln!(writer)?;
        return Ok(false);
    }
    let c_answer = c_line.trim_end_matches(['\n', '\r']);
    Ok(c_answer == C_CONFIRM_ANSWER)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::Path;

    use super::confirm_overwrite;

    fn ask(input: &str) -> (bool, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut writer = Vec::new();
        let b_confirmed =
            confirm_overwrite(Path::new("/data/solar"), &mut reader, &mut writer).expect("prompt");
        (b_confirmed, String::from_utf8(writer).expect("utf8"))
    }

    #[test]
    fn confirm_overwrite_accepts_exact_yes_only() {
        assert!(ask("yes\n").0);
        assert!(ask("yes\r\n").0);
        assert!(ask("yes").0);
        for answer in ["Yes\n", "YES\n", "y\n", "Y\n", "no\n", "\n", " yes\n", "yes \n"] {
            assert!(!ask(answer).0, "{answer:?} must decline");
        }
    }

    #[test]
    fn confirm_overwrite_eof_declines() {
        assert!(!ask("").0);
    }

    #[test]
    fn confirm_overwrite_prints_question() {
        let (_, c_out) = ask("no\n");
        assert!(c_out.contains("Output folder /data/solar already exists."));
        assert!(c_out.ends_with("Do you want to delete it and continue? (yes/no): "));
    }
}
