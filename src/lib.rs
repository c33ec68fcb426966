//! A minimal content-addressable object database.
//!
//! Objects (blobs, trees, and commits) are identified by the SHA-1 digest of
//! their serialized form and stored zlib-compressed under
//! `.git/objects/<2 hex digits>/<38 hex digits>`, the same loose-object
//! layout command-line git uses.
//!
//! ```no_run
//! use minigit::build::{commit_tree, write_tree};
//! use minigit::config::Config;
//! use minigit::store::OnDisk;
//!
//! # fn main() -> minigit::Result<()> {
//! let mut store = OnDisk::open(".")?;
//! let tree = write_tree(&mut store, std::path::Path::new("."))?;
//! let commit = commit_tree(&mut store, &tree, None, "snapshot", &Config::from_env())?;
//! println!("{}", commit);
//! # Ok(())
//! # }
//! ```

pub mod build;
pub mod config;
pub mod object;
pub mod store;

mod error;
pub use error::{Error, Result};
