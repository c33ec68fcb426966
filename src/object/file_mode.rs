use std::fmt;

/// Describes the file type of a tree entry.
///
/// Trees use a variation on the Unix file permissions flags to denote an entry's
/// intended type on disk. The following values are recognized:
///
/// * `0o100644` - normal file
/// * `0o100755` - executable file
/// * `0o120000` - symbolic link
/// * `0o040000` - tree (subdirectory)
///
/// The tree builder only produces `Normal` and `Tree`; the others are accepted
/// when decoding trees written by other tools.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FileMode {
    Normal,
    Executable,
    SymbolicLink,
    Tree,
}

impl FileMode {
    /// Convert from file-mode integer to `FileMode` enum.
    ///
    /// Returns `None` if the value is not one of the recognized constants.
    pub fn from_value(value: u32) -> Option<FileMode> {
        match value {
            0o100644 => Some(FileMode::Normal),
            0o100755 => Some(FileMode::Executable),
            0o120000 => Some(FileMode::SymbolicLink),
            0o040000 => Some(FileMode::Tree),
            _ => None,
        }
    }

    /// Parse the octal digits of a tree entry's mode field.
    ///
    /// Returns `None` for an empty slice, a non-octal digit,
    /// or a value that isn't a recognized mode.
    pub fn from_octal_slice(digits: &[u8]) -> Option<FileMode> {
        if digits.is_empty() || digits.len() > 7 {
            return None;
        }

        let mut value = 0u32;
        for &d in digits {
            match d {
                b'0'..=b'7' => value = value * 8 + u32::from(d - b'0'),
                _ => return None,
            }
        }

        FileMode::from_value(value)
    }

    /// Convert from `FileMode` enum to file-mode integer.
    pub fn to_value(self) -> u32 {
        match self {
            FileMode::Normal => 0o100644,
            FileMode::Executable => 0o100755,
            FileMode::SymbolicLink => 0o120000,
            FileMode::Tree => 0o040000,
        }
    }

    /// Returns true if entries with this mode point at a tree.
    pub fn is_tree(self) -> bool {
        self == FileMode::Tree
    }
}

/// Formats the mode the way it is written into tree payloads:
/// octal, without leading zeros (`40000` for a subdirectory).
///
/// Use `{:06o}` on `to_value()` for the zero-padded listing form.
impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:o}", self.to_value())
    }
}
