use crate::config::Config;
use crate::object::{encode_commit, Id};
use crate::store::ObjectStore;
use crate::Result;

/// Creates and stores a commit for `tree`, returning the commit's ID.
///
/// The author and committer come from `config` and are stamped with the
/// current time. Neither `tree` nor `parent` is checked against the store.
pub fn commit_tree<S: ObjectStore>(
    store: &mut S,
    tree: &Id,
    parent: Option<&Id>,
    message: &str,
    config: &Config,
) -> Result<Id> {
    let (id, serialized) = encode_commit(tree, parent, &config.author, &config.committer, message);
    store.put_serialized(&id, &serialized)?;

    tracing::info!(%id, %tree, parent = ?parent.map(Id::to_hex), "created commit");
    Ok(id)
}
