use std::borrow::Cow;

use super::id::ID_LEN;
use super::{FileMode, Id};
use crate::{Error, Result};

/// One named child of a tree: a blob or a nested tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeEntry {
    mode: FileMode,
    name: Vec<u8>,
    id: Id,
}

impl TreeEntry {
    pub fn new<N: Into<Vec<u8>>>(mode: FileMode, name: N, id: Id) -> TreeEntry {
        TreeEntry {
            mode,
            name: name.into(),
            id,
        }
    }

    pub fn mode(&self) -> FileMode {
        self.mode
    }

    /// Returns the raw name bytes as stored in the tree.
    pub fn name(&self) -> &[u8] {
        &self.name
    }

    /// Returns the name for display, replacing invalid UTF-8 sequences.
    pub fn name_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    fn validate_name(&self) -> Result<()> {
        let reason = if self.name.is_empty() {
            "empty name"
        } else if self.name.contains(&b'/') {
            "name contains `/`"
        } else if self.name.contains(&0) {
            "name contains NUL"
        } else if self.name == b"." || self.name == b".." {
            "reserved name"
        } else {
            return Ok(());
        };

        Err(Error::InvalidEntry(format!(
            "{} (`{}`)",
            reason,
            self.name_lossy()
        )))
    }
}

/// A directory snapshot: entries sorted by name, names unique.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    /// Builds a tree from entries given in any order.
    ///
    /// Entries are sorted by plain byte-wise comparison of their names.
    /// A directory named `foo` therefore sorts before a file named `foo.txt`,
    /// which differs from the order command-line git uses.
    ///
    /// Fails with `Error::DuplicateEntry` if two entries share a name and with
    /// `Error::InvalidEntry` if a name is empty, `.`, `..`, or contains `/` or NUL.
    pub fn new(mut entries: Vec<TreeEntry>) -> Result<Tree> {
        for entry in &entries {
            entry.validate_name()?;
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));

        if let Some(pair) = entries.windows(2).find(|pair| pair[0].name == pair[1].name) {
            return Err(Error::DuplicateEntry(pair[0].name_lossy().into_owned()));
        }

        Ok(Tree { entries })
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the entry with the given name.
    pub fn get<N: AsRef<[u8]>>(&self, name: N) -> Option<&TreeEntry> {
        let name = name.as_ref();
        self.entries.iter().find(|e| e.name == name)
    }

    pub(crate) fn payload(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(self.entries.len() * (ID_LEN + 16));

        for entry in &self.entries {
            payload.extend_from_slice(entry.mode.to_string().as_bytes());
            payload.push(b' ');
            payload.extend_from_slice(&entry.name);
            payload.push(0);
            payload.extend_from_slice(entry.id.as_bytes());
        }

        payload
    }

    /// Parses a tree payload entry by entry: mode up to the first space,
    /// name up to the next NUL, then exactly 20 raw digest bytes.
    ///
    /// Entries are kept in stored order; no sorting or uniqueness check is applied.
    pub(crate) fn parse(payload: &[u8]) -> Result<Tree> {
        let mut entries = Vec::new();
        let mut offset = 0;

        while offset < payload.len() {
            let rest = &payload[offset..];
            let truncated = Error::TruncatedTree { offset };

            let space = match rest.iter().position(|b| *b == b' ') {
                Some(n) => n,
                None => return Err(truncated),
            };

            let mode = FileMode::from_octal_slice(&rest[..space]).ok_or_else(|| {
                Error::InvalidEntry(format!(
                    "unrecognized mode `{}` at byte {}",
                    String::from_utf8_lossy(&rest[..space]),
                    offset
                ))
            })?;

            let rest = &rest[space + 1..];
            let nul = match rest.iter().position(|b| *b == 0) {
                Some(n) => n,
                None => return Err(truncated),
            };

            let name = &rest[..nul];
            let rest = &rest[nul + 1..];
            if rest.len() < ID_LEN {
                return Err(truncated);
            }

            tracing::trace!(name = %String::from_utf8_lossy(name), "parsed tree entry");

            entries.push(TreeEntry {
                mode,
                name: name.to_vec(),
                id: Id::new(&rest[..ID_LEN])?,
            });

            offset += space + 1 + nul + 1 + ID_LEN;
        }

        Ok(Tree { entries })
    }
}
