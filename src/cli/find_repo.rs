use std::path::Path;

use minigit::store::{OnDisk, GIT_DIR_NAME};
use minigit::{Error, Result};

// Discover a store starting from the given path.
//
// Walks from `path` towards the file system root and opens the first
// directory that contains a `.git` directory. Fails with
// `GitDirDoesntExist` naming `path/.git` if no ancestor has one.
pub(crate) fn from_path<P: AsRef<Path>>(path: P) -> Result<OnDisk> {
    let path = path.as_ref();

    match path
        .ancestors()
        .find(|dir| dir.join(GIT_DIR_NAME).is_dir())
    {
        Some(work_dir) => OnDisk::open(work_dir),
        None => Err(Error::GitDirDoesntExist(path.join(GIT_DIR_NAME))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    #[test]
    fn simple_case() {
        let temp = tempfile::tempdir().unwrap();
        OnDisk::init(temp.path()).unwrap();

        let store = from_path(temp.path()).unwrap();
        assert_eq!(store.work_dir(), temp.path());
    }

    #[test]
    fn from_nested_dir() {
        let temp = tempfile::tempdir().unwrap();
        OnDisk::init(temp.path()).unwrap();

        let nested = temp.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();

        let store = from_path(&nested).unwrap();
        assert_eq!(store.work_dir(), temp.path());
        assert_eq!(store.git_dir(), temp.path().join(".git").as_path());
    }

    #[test]
    fn git_dir_doesnt_exist() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path();

        match from_path(path).unwrap_err() {
            Error::GitDirDoesntExist(err_path) => assert_eq!(err_path, path.join(".git")),
            err => panic!("Unexpected error response: {:?}", err),
        }
    }

    #[test]
    fn git_file_is_not_a_repo() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join(".git"), "gitdir: elsewhere\n").unwrap();

        assert!(from_path(temp.path()).is_err());
    }
}
