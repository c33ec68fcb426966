use std::io::Write;

use crate::{App, Result};

use clap::{ArgMatches, SubCommand};
use minigit::build;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("write-tree")
        .about("Create a tree object from the working directory")
}

pub(crate) fn run(app: &mut App, _args: &ArgMatches) -> Result<()> {
    let mut store = app.open_store()?;
    let work_dir = store.work_dir().to_path_buf();

    let id = build::write_tree(&mut store, &work_dir)?;
    writeln!(app, "{}", id)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::App;

    #[test]
    fn snapshots_whole_work_dir_from_subdir() {
        let temp = tempfile::tempdir().unwrap();
        App::run_with_args(temp.path(), vec!["init"]).unwrap();

        fs::write(temp.path().join("a.txt"), "x").unwrap();
        fs::create_dir(temp.path().join("b")).unwrap();

        let stdout = App::run_with_args(temp.path().join("b"), vec!["write-tree"]).unwrap();
        assert_eq!(stdout, b"3f1eb7f3481b40d298e79291a8d71ab98fbecfa0\n");

        assert!(temp
            .path()
            .join(".git/objects/3f/1eb7f3481b40d298e79291a8d71ab98fbecfa0")
            .is_file());
        assert!(temp
            .path()
            .join(".git/objects/4b/825dc642cb6eb9a060e54bf8d69288fbee4904")
            .is_file());
    }

    #[test]
    fn error_no_store() {
        let temp = tempfile::tempdir().unwrap();

        let err = App::run_with_args(temp.path(), vec!["write-tree"]).unwrap_err();
        assert!(
            err.to_string().contains(".git dir doesn't exist"),
            "\nincorrect error message:\n\n{}",
            err
        );
    }
}
