//! The object model: blobs, trees, and commits, each identified by the
//! SHA-1 digest of its serialized form.
//!
//! A serialized object is `"{kind} {payload length}\0{payload}"`. That byte
//! sequence is what gets digested and, compressed, what gets stored.

use std::str;

mod attribution;
pub use attribution::{Attribution, Identity};

pub mod codec;

mod commit;
pub use commit::Commit;

mod file_mode;
pub use file_mode::FileMode;

mod id;
pub use id::{Id, ParseIdError, HEX_LEN, ID_LEN};

mod kind;
pub use kind::Kind;

pub(crate) mod parse_utils;

mod tree;
pub use tree::{Tree, TreeEntry};

use crate::{Error, Result};

/// A decoded object of one of the three fixed kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Object {
    Blob(Vec<u8>),
    Tree(Tree),
    Commit(Commit),
}

impl Object {
    /// Return the kind of the object.
    pub fn kind(&self) -> Kind {
        match self {
            Object::Blob(_) => Kind::Blob,
            Object::Tree(_) => Kind::Tree,
            Object::Commit(_) => Kind::Commit,
        }
    }

    /// Returns the canonical payload (the serialized form minus its header).
    pub fn payload(&self) -> Vec<u8> {
        match self {
            Object::Blob(content) => content.clone(),
            Object::Tree(tree) => tree.payload(),
            Object::Commit(commit) => commit.payload(),
        }
    }

    /// Serializes the object and computes its ID.
    ///
    /// This is functionally equivalent to the
    /// [`git hash-object`](https://git-scm.com/docs/git-hash-object) command
    /// without the `-w` option that would write the object to the repo.
    pub fn encode(&self) -> (Id, Vec<u8>) {
        let serialized = match self {
            Object::Blob(content) => serialize(Kind::Blob, content),
            Object::Tree(tree) => serialize(Kind::Tree, &tree.payload()),
            Object::Commit(commit) => serialize(Kind::Commit, &commit.payload()),
        };

        (codec::digest(&serialized), serialized)
    }

    /// Returns the ID this object has (or would have) in a store.
    pub fn id(&self) -> Id {
        self.encode().0
    }

    /// Reconstructs an object from its serialized form. See `decode_object`.
    pub fn decode(serialized: &[u8]) -> Result<Object> {
        let (kind, payload) = parse_header(serialized)?;

        match kind {
            Kind::Blob => Ok(Object::Blob(payload.to_vec())),
            Kind::Tree => Ok(Object::Tree(Tree::parse(payload)?)),
            Kind::Commit => Ok(Object::Commit(Commit::parse(payload)?)),
        }
    }

    pub fn as_blob(&self) -> Option<&[u8]> {
        match self {
            Object::Blob(content) => Some(content.as_slice()),
            _ => None,
        }
    }

    pub fn as_tree(&self) -> Option<&Tree> {
        match self {
            Object::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    pub fn as_commit(&self) -> Option<&Commit> {
        match self {
            Object::Commit(commit) => Some(commit),
            _ => None,
        }
    }
}

/// Wraps `payload` in the `"{kind} {len}\0"` header.
fn serialize(kind: Kind, payload: &[u8]) -> Vec<u8> {
    let header = format!("{} {}\0", kind, payload.len());

    let mut serialized = Vec::with_capacity(header.len() + payload.len());
    serialized.extend_from_slice(header.as_bytes());
    serialized.extend_from_slice(payload);
    serialized
}

/// Splits a serialized object into its kind and payload.
///
/// Fails with `Error::MalformedHeader` if there is no `"{kind} {len}\0"` prefix,
/// the kind is unknown, or the declared length differs from the payload length.
pub fn parse_header(serialized: &[u8]) -> Result<(Kind, &[u8])> {
    let nul = serialized
        .iter()
        .position(|b| *b == 0)
        .ok_or_else(|| malformed_header("missing NUL after header".to_string()))?;

    let (header, payload) = (&serialized[..nul], &serialized[nul + 1..]);

    let (kind, len) = parse_utils::split_once(header, &b' ');
    let kind = Kind::from_bytes(kind).ok_or_else(|| {
        malformed_header(format!(
            "unknown object kind `{}`",
            String::from_utf8_lossy(kind)
        ))
    })?;

    if len.is_empty() || !len.iter().all(u8::is_ascii_digit) {
        return Err(malformed_header(format!(
            "invalid length `{}`",
            String::from_utf8_lossy(len)
        )));
    }

    let declared: usize = str::from_utf8(len)
        .ok()
        .and_then(|len| len.parse().ok())
        .ok_or_else(|| malformed_header("length out of range".to_string()))?;

    if declared != payload.len() {
        return Err(malformed_header(format!(
            "declared length {} but payload has {} bytes",
            declared,
            payload.len()
        )));
    }

    Ok((kind, payload))
}

fn malformed_header(reason: String) -> Error {
    Error::MalformedHeader(reason)
}

/// Wraps raw bytes in a blob header and computes the blob's ID.
pub fn encode_blob(raw: &[u8]) -> (Id, Vec<u8>) {
    let serialized = serialize(Kind::Blob, raw);
    (codec::digest(&serialized), serialized)
}

/// Sorts `entries` by name, rejects duplicate names, and serializes the tree.
pub fn encode_tree(entries: Vec<TreeEntry>) -> Result<(Id, Vec<u8>)> {
    Ok(Object::Tree(Tree::new(entries)?).encode())
}

/// Serializes a commit stamped with the current time and local time zone.
///
/// Two calls with identical arguments made in different seconds
/// produce different IDs.
pub fn encode_commit(
    tree: &Id,
    parent: Option<&Id>,
    author: &Identity,
    committer: &Identity,
    message: &str,
) -> (Id, Vec<u8>) {
    let commit = Commit::new(
        *tree,
        parent.copied(),
        Attribution::now(author),
        Attribution::now(committer),
        message,
    );

    Object::Commit(commit).encode()
}

/// Parses a serialized object: header first, then the payload per kind.
pub fn decode_object(serialized: &[u8]) -> Result<Object> {
    Object::decode(serialized)
}
