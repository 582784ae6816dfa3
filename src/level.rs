//! Level data and the built-in default level.
//!
//! This module contains the `Level` struct used to carry a playable level's display name and its
//! textual rows, together with the default level compiled into the binary so the game always has
//! something to play.

use std::{ffi::OsString, sync::LazyLock};

use color_eyre::eyre::{OptionExt as _, Result};

/// Playable level container.
///
/// This structure pairs a display name, extracted from a file name, with the level's rows in their
/// textual form. It is used within a vector to get a kind of ordered hashmap keyed by name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd)]
pub(crate) struct Level {
    /// Display name of the level.
    ///
    /// This field holds the file name of the level with the file extension stripped off.
    pub name: String,
    /// Level content as rows of symbols.
    ///
    /// This field holds the actual level stored as a vector of strings, each string representing
    /// one row of the tile grid.
    pub rows: Vec<String>,
}

impl Default for Level {
    fn default() -> Self {
        Self::new("Default.maze".into(), *DEFAULT_LEVEL).expect("failed to create default level")
    }
}

impl Level {
    /// Builds a new level from a file name and multiline string content.
    ///
    /// This function splits the provided data into individual rows and derives the display name by
    /// removing the `.maze` extension from the file name.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - The `OsString` cannot be converted to a string slice
    /// - The file name doesn't carry the expected `.maze` extension
    pub(crate) fn new(file_name: OsString, data: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for line in data.lines() {
            rows.push(line.to_owned());
        }

        let mut name = file_name
            .to_str()
            .ok_or_eyre("failed to convert osstring to string slice")?
            .to_owned();
        name.truncate({
            name.rfind(".maze")
                .ok_or_eyre("failed to find extension in file name")?
        });

        Ok(Self { name, rows })
    }
}

/// Built-in level used when no level files are present.
///
/// This static holds the default level loaded in both the main game and the level menu. One `@`
/// marks the player spawn, one `$` the pursuer spawn and one `.` the exit; `#` cells are
/// impassable.
static DEFAULT_LEVEL: LazyLock<&str> = LazyLock::new(|| {
    "\
#####################
#@--------#--------.#
#-###-###-#-###-###-#
#---#-#-----#-----#-#
###-#-#-###-#-###-#-#
#---#-#-#---#-#---#-#
#-###-#-#-###-#-###-#
#-#---#-#-#---#---#-#
#-#-###-#-#-#####-#-#
#-------$-----------#
#####################"
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        let level = Level::default();

        assert_eq!(level.name, "Default");
        assert_eq!(level.rows.len(), 11);
        for row in &level.rows {
            assert_eq!(row.len(), 21, "default level rows should be uniform");
        }
    }

    #[test]
    fn test_default_level_has_unique_markers() {
        let content = Level::default().rows.join("\n");

        for marker in ['@', '$', '.'] {
            assert_eq!(
                content.matches(marker).count(),
                1,
                "default level should carry exactly one {marker}"
            );
        }
    }

    #[test]
    fn test_new_valid_input() {
        let level = Level::new(OsString::from("crypt.maze"), "#@-\n-$.")
            .expect("failed to create level");

        assert_eq!(level.name, "crypt");
        assert_eq!(level.rows, vec!["#@-", "-$."]);
    }

    #[test]
    fn test_new_empty_data() {
        let level =
            Level::new(OsString::from("empty.maze"), "").expect("failed to create level");

        assert_eq!(level.name, "empty");
        assert_eq!(level.rows.len(), 0);
    }

    #[test]
    fn test_new_missing_extension() {
        assert!(Level::new(OsString::from("noextension"), "#@-").is_err());
    }

    #[test]
    fn test_new_wrong_extension() {
        assert!(Level::new(OsString::from("crypt.txt"), "#@-").is_err());
    }

    #[test]
    fn test_new_multiple_extensions() {
        let level = Level::new(OsString::from("crypt.backup.maze"), "#@-")
            .expect("failed to create level");

        assert_eq!(level.name, "crypt.backup");
    }
}
