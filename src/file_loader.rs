//! Discovery and validation of level files on disk.

use std::{fs, path::Path};

use color_eyre::eyre::{OptionExt as _, Result};

use crate::level::Level;

/// Scans a directory for `.maze` files and loads the valid ones.
///
/// This function searches for files with the `.maze` extension in the given directory, validates
/// their contents, and appends them to the levels collection for user selection. Files that fail
/// validation are skipped silently so one broken file cannot hide the rest.
pub(crate) fn fetch_levels(directory: &Path, levels: &mut Vec<Level>) -> Result<()> {
    for file in fs::read_dir(directory)? {
        match file {
            Ok(file)
                if !file.file_type()?.is_dir()
                    && file
                        .file_name()
                        .to_str()
                        .ok_or_eyre("failed to convert osstring to string slice")?
                        .ends_with(".maze") =>
            {
                let contents = fs::read_to_string(file.path())?;

                if check_validity(contents.trim()) {
                    levels.push(Level::new(file.file_name(), &contents)?);
                }
            }
            Err(err) => return Err(err.into()),
            _ => {}
        }
    }

    Ok(())
}

/// Validates the content of a level file.
///
/// This function checks that the level satisfies the format the simulation relies on:
/// - All rows share the same nonzero length
/// - At least one obstacle (`#`) and one floor cell (`-`) are present
/// - Exactly one player spawn (`@`), one pursuer spawn (`$`) and one exit (`.`) exist
///
/// Any other symbol is legal and parses as floor, so it does not fail validation.
pub(crate) fn check_validity(input: &str) -> bool {
    let lines: Vec<&str> = input.lines().collect();

    let Some(first_line) = lines.first() else {
        return false;
    };
    let expected_width = first_line.len();
    if expected_width == 0 {
        return false;
    }

    for line in &lines {
        if line.len() != expected_width {
            return false;
        }
    }

    for mandatory in ['#', '-'] {
        if input.matches(mandatory).count() == 0 {
            return false;
        }
    }

    for unique in ['@', '$', '.'] {
        if input.matches(unique).count() != 1 {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_validity_accepts_minimal_level() {
        assert!(check_validity("#@-\n-$."));
    }

    #[test]
    fn test_check_validity_accepts_default_level() {
        let content = Level::default().rows.join("\n");
        assert!(check_validity(&content));
    }

    #[test]
    fn test_check_validity_rejects_empty_input() {
        assert!(!check_validity(""));
    }

    #[test]
    fn test_check_validity_rejects_ragged_rows() {
        assert!(!check_validity("#@-\n-$.."));
    }

    #[test]
    fn test_check_validity_rejects_missing_player() {
        assert!(!check_validity("#--\n-$."));
    }

    #[test]
    fn test_check_validity_rejects_missing_pursuer() {
        assert!(!check_validity("#@-\n--."));
    }

    #[test]
    fn test_check_validity_rejects_missing_exit() {
        assert!(!check_validity("#@-\n-$-"));
    }

    #[test]
    fn test_check_validity_rejects_duplicate_markers() {
        assert!(!check_validity("#@@\n-$."));
        assert!(!check_validity("#@$\n-$."));
        assert!(!check_validity("#@.\n-$."));
    }

    #[test]
    fn test_check_validity_rejects_missing_terrain() {
        // No obstacle at all, then no floor at all.
        assert!(!check_validity("-@-\n-$."));
        assert!(!check_validity("#@#\n#$."));
    }

    #[test]
    fn test_check_validity_tolerates_unknown_symbols() {
        // Unrecognized symbols parse as floor and are not a format violation.
        assert!(check_validity("#@x\n-$."));
    }
}
