//! Builders that turn a working directory into stored objects.
//!
//! Both builders take the store as an explicit argument and never look one
//! up on their own.

mod commit;
pub use commit::commit_tree;

mod tree;
pub use tree::write_tree;
