use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use crate::object::{FileMode, Id, Object, Tree, TreeEntry};
use crate::store::{ObjectStore, GIT_DIR_NAME};
use crate::{Error, Result};

/// Snapshots the directory at `dir` into `store` and returns the ID of
/// the top-level tree.
///
/// Walks the directory bottom-up. Every regular file becomes a blob with
/// mode `100644` and every subdirectory becomes a tree. Entries named `.git`
/// are skipped at every level. Symbolic links and other special files are
/// skipped with a warning.
///
/// Any file system error aborts the walk and is reported with the path
/// that caused it. Objects written before the failure stay in the store.
pub fn write_tree<S: ObjectStore>(store: &mut S, dir: &Path) -> Result<Id> {
    let mut entries: Vec<TreeEntry> = Vec::new();

    for dir_entry in fs::read_dir(dir).map_err(Error::at_path(dir))? {
        let dir_entry = dir_entry.map_err(Error::at_path(dir))?;
        let path = dir_entry.path();
        let name = dir_entry.file_name();

        if name == GIT_DIR_NAME {
            tracing::debug!(path = %path.display(), "skipping metadata directory");
            continue;
        }

        let file_type = dir_entry.file_type().map_err(Error::at_path(&path))?;

        let entry = if file_type.is_dir() {
            TreeEntry::new(FileMode::Tree, name_bytes(&name, &path)?, write_tree(store, &path)?)
        } else if file_type.is_file() {
            let content = fs::read(&path).map_err(Error::at_path(&path))?;
            let id = store.persist_blob(&content)?;
            TreeEntry::new(FileMode::Normal, name_bytes(&name, &path)?, id)
        } else {
            tracing::warn!(path = %path.display(), "skipping file that is neither regular nor a directory");
            continue;
        };

        tracing::trace!(
            mode = %entry.mode(),
            name = %entry.name_lossy(),
            id = %entry.id(),
            "tree entry"
        );
        entries.push(entry);
    }

    let tree = Tree::new(entries)?;
    let id = store.persist(&Object::Tree(tree))?;

    tracing::debug!(dir = %dir.display(), %id, "wrote tree");
    Ok(id)
}

#[cfg(unix)]
fn name_bytes(name: &OsStr, _path: &Path) -> Result<Vec<u8>> {
    use std::os::unix::ffi::OsStrExt;
    Ok(name.as_bytes().to_vec())
}

#[cfg(not(unix))]
fn name_bytes(name: &OsStr, path: &Path) -> Result<Vec<u8>> {
    name.to_str()
        .map(|name| name.as_bytes().to_vec())
        .ok_or_else(|| Error::InvalidEntry(format!("non-UTF-8 file name at {}", path.display())))
}
