//! `snakekit_naming` v1:
//! Pure name normalization for file and directory names.
//!
//! Output base names match `[a-z][a-z0-9_]*` with no trailing underscore.
//! The extension after the last `.` is only lowercased.

/// Base name used when nothing survives normalization.
pub const C_NAME_FALLBACK: &str = "unnamed";
/// Prefix inserted in front of a base name starting with a digit.
pub const C_DIGIT_PREFIX: char = 'n';
/// Characters rewritten to a word boundary before filtering.
pub const TUP_NAME_SEPARATORS: [char; 3] = [',', '-', '_'];

////////////////////////////////////////////////////////////////////////////////
// #region Normalize

/// Split `name` at its last `.` into `(base, extension)`.
///
/// Only one split happens, so `archive.tar.gz` yields `("archive.tar", Some("gz"))`.
/// A trailing dot yields an empty extension, a name without dots yields `None`.
pub fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rsplit_once('.') {
        Some((name_base, name_ext)) => (name_base, Some(name_ext)),
        None => (name, None),
    }
}

/// Convert an arbitrary file or directory name to snake case.
///
/// The base name goes through these steps:
/// 1. `,`, `-` and `_` become spaces.
/// 2. Everything other than ASCII letters, ASCII digits and whitespace is dropped
///    (interior dots included).
/// 3. Lowercase, then whitespace runs become a single `_` with none at the ends.
/// 4. A leading digit gets the `n` prefix, an empty result becomes `unnamed`.
///
/// A non-empty extension is lowercased verbatim and reattached.
///
/// # Examples
/// ```
/// use snakekit_naming::to_snake_case;
///
/// assert_eq!(to_snake_case("My-File, Name_v2.PNG"), "my_file_name_v2.png");
/// assert_eq!(to_snake_case("3d_model.OBJ"), "n3d_model.obj");
/// assert_eq!(to_snake_case("---...png"), "unnamed.png");
/// ```
pub fn to_snake_case(name: &str) -> String {
    let (name_base, name_ext) = split_extension(name);
    let c_base = normalize_base(name_base);

    match name_ext {
        Some(name_ext) if !name_ext.is_empty() => {
            format!("{c_base}.{}", name_ext.to_lowercase())
        }
        _ => c_base,
    }
}

/// Whitespace as matched by a Unicode `\s` class: the Unicode `White_Space`
/// set plus the information separators U+001C..=U+001F.
fn is_name_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn normalize_base(name_base: &str) -> String {
    let c_filtered: String = name_base
        .chars()
        .map(|c| {
            if TUP_NAME_SEPARATORS.contains(&c) {
                ' '
            } else {
                c
            }
        })
        .filter(|&c| c.is_ascii_alphanumeric() || is_name_space(c))
        .map(|c| c.to_ascii_lowercase())
        .collect();

    // No underscore survives the separator pass, so joining whitespace runs
    // also trims underscores at both ends.
    let mut c_base = c_filtered
        .split(is_name_space)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    if c_base.starts_with(|c: char| c.is_ascii_digit()) {
        c_base.insert(0, C_DIGIT_PREFIX);
    }
    if c_base.is_empty() {
        return C_NAME_FALLBACK.to_string();
    }
    c_base
}

/// Whether the base part of `name` already satisfies the snake case contract.
///
/// The extension is not inspected.
pub fn is_snake_case(name: &str) -> bool {
    let (name_base, _) = split_extension(name);
    let mut iter_chars = name_base.chars();
    let Some(c_first) = iter_chars.next() else {
        return false;
    };

    c_first.is_ascii_lowercase()
        && iter_chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        && !name_base.ends_with('_')
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{C_NAME_FALLBACK, is_snake_case, split_extension, to_snake_case};

    #[test]
    fn to_snake_case_empty_and_blank_map_to_fallback() {
        assert_eq!(to_snake_case(""), C_NAME_FALLBACK);
        assert_eq!(to_snake_case("   "), C_NAME_FALLBACK);
        assert_eq!(to_snake_case("\t \n"), C_NAME_FALLBACK);
        assert_eq!(to_snake_case(",-_"), C_NAME_FALLBACK);
    }

    #[test]
    fn to_snake_case_prefixes_leading_digit() {
        assert_eq!(to_snake_case("3d_model.OBJ"), "n3d_model.obj");
        assert_eq!(to_snake_case("2024 Report"), "n2024_report");
    }

    #[test]
    fn to_snake_case_collapses_separators() {
        assert_eq!(to_snake_case("My-File, Name_v2.PNG"), "my_file_name_v2.png");
        assert_eq!(to_snake_case("a-b_c"), "a_b_c");
        assert_eq!(to_snake_case("  Leading and   trailing  "), "leading_and_trailing");
        assert_eq!(to_snake_case("__init__"), "init");
    }

    #[test]
    fn to_snake_case_unicode_space_classes_become_boundaries() {
        assert_eq!(to_snake_case("a\u{1f}b"), "a_b");
        assert_eq!(to_snake_case("a\u{1c}\u{1d}\u{1e}b"), "a_b");
        assert_eq!(to_snake_case("Tab\tName"), "tab_name");
        assert_eq!(to_snake_case("No\u{a0}Break\u{3000}Wide"), "no_break_wide");
        assert_eq!(to_snake_case("\u{1f}"), C_NAME_FALLBACK);
    }

    #[test]
    fn to_snake_case_punctuation_only_base_keeps_extension() {
        assert_eq!(to_snake_case("---...png"), "unnamed.png");
        assert_eq!(to_snake_case(".gitignore"), "unnamed.gitignore");
    }

    #[test]
    fn to_snake_case_drops_non_ascii_and_symbols() {
        assert_eq!(to_snake_case("Café Crème!.svg"), "caf_crme.svg");
        assert_eq!(to_snake_case("Arrow → Right"), "arrow_right");
        assert_eq!(to_snake_case("(Copy) #2"), "copy_2");
        assert_eq!(to_snake_case("😀"), C_NAME_FALLBACK);
    }

    #[test]
    fn to_snake_case_keeps_extension_verbatim_apart_from_case() {
        assert_eq!(to_snake_case("Notes.Backup TXT"), "notes.backup txt");
        assert_eq!(to_snake_case("photo.JPEG"), "photo.jpeg");
    }

    #[test]
    fn to_snake_case_trailing_dot_drops_extension() {
        assert_eq!(to_snake_case("Readme."), "readme");
        assert_eq!(to_snake_case("."), C_NAME_FALLBACK);
    }

    /// Known quirk: the inner `.tar` dot is deleted by the character filter
    /// instead of being kept as part of a double extension.
    #[test]
    fn to_snake_case_multi_dot_name_loses_inner_dot() {
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", Some("gz")));
        assert_eq!(to_snake_case("archive.tar.gz"), "archivetar.gz");
        assert_eq!(to_snake_case("v1.2.3"), "v12.3");
    }

    #[test]
    fn to_snake_case_directory_names_without_dot() {
        assert_eq!(to_snake_case("Folder One"), "folder_one");
        assert_eq!(to_snake_case("Bold Duotone"), "bold_duotone");
        assert_eq!(split_extension("Folder One"), ("Folder One", None));
    }

    #[test]
    fn is_snake_case_checks_base_only() {
        assert!(is_snake_case("folder_one"));
        assert!(is_snake_case("n3d_model.OBJ"));
        assert!(!is_snake_case(""));
        assert!(!is_snake_case("_hidden"));
        assert!(!is_snake_case("trailing_"));
        assert!(!is_snake_case("Upper"));
        assert!(!is_snake_case("9lives"));
    }

    #[test]
    fn to_snake_case_fuzz_like_randomized_inputs_hold_contract() {
        const L_POOL: [char; 24] = [
            'a', 'Z', 'q', '0', '7', ' ', '\t', ',', '-', '_', '.', '!', '#', '(', ')', 'é',
            'ß', '→', '😀', '\u{3000}', 'M', 'x', '9', '.',
        ];

        let mut n_state: u64 = 0x2545_F491_4F6C_DD1D;
        for _ in 0..500 {
            n_state = n_state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let n_len = (n_state >> 59) as usize;
            let mut c_name = String::new();
            for n_idx in 0..n_len {
                let n_pick = (n_state.rotate_left(n_idx as u32 * 5) % L_POOL.len() as u64) as usize;
                c_name.push(L_POOL[n_pick]);
            }

            let c_once = to_snake_case(&c_name);
            assert!(is_snake_case(&c_once), "{c_name:?} -> {c_once:?}");
            assert_eq!(to_snake_case(&c_once), c_once, "not idempotent for {c_name:?}");
        }
    }
}
