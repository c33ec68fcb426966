//! Identity used when stamping commits.

use std::env;

use crate::object::Identity;

const DEFAULT_NAME: &str = "minigit";
const DEFAULT_EMAIL: &str = "minigit@localhost";

/// Author and committer identity for new commits.
///
/// Pass one into `build::commit_tree`. Nothing in the library reads the
/// environment on its own; the binary calls `Config::from_env` once at startup.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub author: Identity,
    pub committer: Identity,
}

impl Default for Config {
    fn default() -> Config {
        let identity = Identity::new(DEFAULT_NAME, DEFAULT_EMAIL);
        Config {
            author: identity.clone(),
            committer: identity,
        }
    }
}

impl Config {
    /// Resolves identities from the `GIT_AUTHOR_*` and `GIT_COMMITTER_*`
    /// environment variables.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Resolves identities through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// Unset or empty committer fields fall back to the author's. Unset or
    /// empty author fields fall back to the built-in default identity.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let author = Identity {
            name: get("GIT_AUTHOR_NAME").unwrap_or_else(|| DEFAULT_NAME.to_string()),
            email: get("GIT_AUTHOR_EMAIL").unwrap_or_else(|| DEFAULT_EMAIL.to_string()),
        };

        let committer = Identity {
            name: get("GIT_COMMITTER_NAME").unwrap_or_else(|| author.name.clone()),
            email: get("GIT_COMMITTER_EMAIL").unwrap_or_else(|| author.email.clone()),
        };

        Config { author, committer }
    }
}
