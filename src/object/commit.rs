use std::str;

use super::parse_utils::{header, next_line};
use super::{Attribution, Id};
use crate::{Error, Result};

/// A snapshot record: one tree, at most one parent, who and when, and a message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Commit {
    tree: Id,
    parent: Option<Id>,
    author: Attribution,
    committer: Attribution,
    message: String,
}

impl Commit {
    pub fn new(
        tree: Id,
        parent: Option<Id>,
        author: Attribution,
        committer: Attribution,
        message: &str,
    ) -> Commit {
        Commit {
            tree,
            parent,
            author,
            committer,
            message: message.to_string(),
        }
    }

    pub fn tree(&self) -> &Id {
        &self.tree
    }

    pub fn parent(&self) -> Option<&Id> {
        self.parent.as_ref()
    }

    pub fn author(&self) -> &Attribution {
        &self.author
    }

    pub fn committer(&self) -> &Attribution {
        &self.committer
    }

    /// Returns the message without the newline that terminates it in the payload.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn payload(&self) -> Vec<u8> {
        let mut text = format!("tree {}\n", self.tree);

        if let Some(parent) = &self.parent {
            text.push_str(&format!("parent {}\n", parent));
        }

        text.push_str(&format!("author {}\n", self.author));
        text.push_str(&format!("committer {}\n", self.committer));

        if !self.message.is_empty() {
            text.push('\n');
            text.push_str(&self.message);
            text.push('\n');
        }

        text.into_bytes()
    }

    pub(crate) fn parse(payload: &[u8]) -> Result<Commit> {
        let (line, rest) = next_line(payload).ok_or_else(|| malformed("missing tree line"))?;
        let tree = header(line, b"tree").ok_or_else(|| malformed("missing tree line"))?;
        let tree = parse_id(tree, "tree")?;

        let (mut line, mut rest) = next_line(rest).ok_or_else(|| malformed("missing author"))?;

        let parent = match header(line, b"parent") {
            Some(parent) => {
                let parent = parse_id(parent, "parent")?;
                let (l, r) = next_line(rest).ok_or_else(|| malformed("missing author"))?;
                if header(l, b"parent").is_some() {
                    return Err(malformed("more than one parent"));
                }
                line = l;
                rest = r;
                Some(parent)
            }
            None => None,
        };

        let author = parse_attribution(line, b"author")?;

        let (line, rest) = next_line(rest).ok_or_else(|| malformed("missing committer"))?;
        let committer = parse_attribution(line, b"committer")?;

        let message = match rest {
            [] => "",
            [b'\n', message @ ..] => {
                let message = match message.last() {
                    Some(b'\n') => &message[..message.len() - 1],
                    _ => message,
                };
                str::from_utf8(message).map_err(|_| malformed("message is not UTF-8"))?
            }
            _ => return Err(malformed("expected blank line before message")),
        };

        Ok(Commit::new(tree, parent, author, committer, message))
    }
}

fn malformed(reason: &str) -> Error {
    Error::MalformedCommit(reason.to_string())
}

fn parse_id(hex: &[u8], field: &str) -> Result<Id> {
    Id::from_hex(hex).map_err(|e| Error::MalformedCommit(format!("{} ID: {}", field, e)))
}

fn parse_attribution(line: &[u8], name: &[u8]) -> Result<Attribution> {
    let field = String::from_utf8_lossy(name);

    let value =
        header(line, name).ok_or_else(|| Error::MalformedCommit(format!("missing {}", field)))?;

    Attribution::parse(value)
        .ok_or_else(|| Error::MalformedCommit(format!("unparseable {} line", field)))
}
