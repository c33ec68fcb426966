//! A store that keeps objects on the local file system.
//!
//! It intentionally uses the same `.git` folder layout as command-line git for
//! loose objects, so results may be compared for similar operations. Pack files,
//! refs, and the index are not supported.

use std::fs::{self, DirBuilder, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::ObjectStore;
use crate::object::Id;
use crate::{Error, Result};

/// Name of the metadata directory inside a work dir.
///
/// The tree builder never descends into an entry with this name.
pub const GIT_DIR_NAME: &str = ".git";

#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Handle for a store on the local file system.
///
/// Construct one with `init` or `open` and pass it to every operation that
/// reads or writes objects. Nothing in this crate locates a store implicitly.
#[derive(Debug)]
pub struct OnDisk {
    work_dir: PathBuf,
    git_dir: PathBuf,
}

impl OnDisk {
    /// Opens an existing store.
    ///
    /// `work_dir` should be the top-level working directory. A `.git` directory should
    /// exist at this path. Use `init` to create an empty store if necessary.
    pub fn open<P: AsRef<Path>>(work_dir: P) -> Result<Self> {
        let work_dir = work_dir.as_ref().to_path_buf();
        if !work_dir.is_dir() {
            return Err(Error::WorkDirDoesntExist(work_dir));
        }

        let git_dir = work_dir.join(GIT_DIR_NAME);
        if !git_dir.is_dir() {
            return Err(Error::GitDirDoesntExist(git_dir));
        }

        Ok(OnDisk { work_dir, git_dir })
    }

    /// Creates a new, empty store on the local file system.
    ///
    /// Lays out `objects/`, `refs/`, and a `HEAD` file pointing at
    /// `refs/heads/master`. Refs are created for compatibility but never read.
    pub fn init<P: AsRef<Path>>(work_dir: P) -> Result<Self> {
        let work_dir = work_dir.as_ref().to_path_buf();
        let git_dir = work_dir.join(GIT_DIR_NAME);
        if git_dir.exists() {
            return Err(Error::GitDirShouldntExist(git_dir));
        }

        create_dir_all(&git_dir)?;
        create_dir_all(&git_dir.join("objects"))?;
        create_dir_all(&git_dir.join("refs"))?;
        create_head(&git_dir)?;

        tracing::info!(git_dir = %git_dir.display(), "initialized empty store");

        Ok(OnDisk { work_dir, git_dir })
    }

    /// Return the working directory for this store.
    pub fn work_dir(&self) -> &Path {
        self.work_dir.as_path()
    }

    /// Return the path to the `.git` directory.
    pub fn git_dir(&self) -> &Path {
        self.git_dir.as_path()
    }

    pub fn objects_dir(&self) -> PathBuf {
        self.git_dir.join("objects")
    }

    /// Returns `objects/<first 2 hex digits>/<remaining 38 hex digits>`.
    pub fn object_path(&self, id: &Id) -> PathBuf {
        let (bucket, entry) = id.loose_path_parts();
        let mut path = self.objects_dir();
        path.push(bucket);
        path.push(entry);
        path
    }
}

impl ObjectStore for OnDisk {
    fn put(&mut self, id: &Id, compressed: &[u8]) -> Result<()> {
        let path = self.object_path(id);
        if path.exists() {
            tracing::debug!(%id, "object already stored");
            return Ok(());
        }

        if let Some(bucket) = path.parent() {
            create_dir_all(bucket)?;
        }

        let mut file = match create_new_file(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                tracing::debug!(%id, "object appeared while writing");
                return Ok(());
            }
            Err(err) => return Err(Error::at_path(path)(err)),
        };

        file.write_all(compressed).map_err(Error::at_path(&path))?;

        tracing::debug!(%id, bytes = compressed.len(), "wrote loose object");
        Ok(())
    }

    fn get(&self, id: &Id) -> Result<Vec<u8>> {
        let path = self.object_path(id);
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(Error::ObjectNotFound(*id)),
            Err(err) => Err(Error::at_path(path)(err)),
        }
    }

    fn exists(&self, id: &Id) -> bool {
        self.object_path(id).is_file()
    }
}

fn create_head(git_dir: &Path) -> Result<()> {
    let head_path = git_dir.join("HEAD");
    let head_txt = "ref: refs/heads/master\n";

    let mut file = create_new_file(&head_path).map_err(Error::at_path(&head_path))?;
    file.write_all(head_txt.as_bytes())
        .map_err(Error::at_path(&head_path))
}

fn create_dir_all(path: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    builder.create(path).map_err(Error::at_path(path))
}

fn create_new_file(path: &Path) -> io::Result<fs::File> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    options.open(path)
}
