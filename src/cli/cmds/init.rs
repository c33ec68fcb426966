use std::io::Write;

use crate::{App, Result};

use clap::{Arg, ArgMatches, SubCommand};
use minigit::store::OnDisk;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("init")
        .about("Create an empty object store")
        .arg(
            Arg::with_name("directory")
                .help("The directory to create the store in (default: current directory)"),
        )
}

pub(crate) fn run(app: &mut App, args: &ArgMatches) -> Result<()> {
    let path = match args.value_of("directory") {
        Some(dir) => app.resolve(dir),
        None => app.cwd.clone(),
    };

    OnDisk::init(&path)?;

    writeln!(
        app,
        "Initialized empty Git repository in {}",
        path.display()
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::App;

    #[test]
    fn creates_store() {
        let temp = tempfile::tempdir().unwrap();
        let r_path = temp.path().join("repo");
        let r_pathstr = r_path.to_str().unwrap();

        let stdout = App::run_with_args(temp.path(), vec!["init", r_pathstr]).unwrap();

        let expected_std = format!("Initialized empty Git repository in {}\n", r_pathstr);
        assert_eq!(stdout, expected_std.as_bytes());

        assert!(r_path.join(".git/objects").is_dir());
        assert!(r_path.join(".git/refs").is_dir());
        assert_eq!(
            fs::read_to_string(r_path.join(".git/HEAD")).unwrap(),
            "ref: refs/heads/master\n"
        );
    }

    #[test]
    fn defaults_to_cwd() {
        let temp = tempfile::tempdir().unwrap();

        App::run_with_args(temp.path(), vec!["init"]).unwrap();
        assert!(temp.path().join(".git/objects").is_dir());
    }

    #[test]
    fn relative_to_cwd() {
        let temp = tempfile::tempdir().unwrap();

        App::run_with_args(temp.path(), vec!["init", "nested/repo"]).unwrap();
        assert!(temp.path().join("nested/repo/.git/HEAD").is_file());
    }

    #[test]
    fn matches_another_init() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();

        App::run_with_args(a.path(), vec!["init"]).unwrap();
        App::run_with_args(b.path(), vec!["init"]).unwrap();

        assert!(!dir_diff::is_different(a.path(), b.path()).unwrap());
    }

    #[test]
    fn error_already_exists() {
        let temp = tempfile::tempdir().unwrap();
        App::run_with_args(temp.path(), vec!["init"]).unwrap();

        let err = App::run_with_args(temp.path(), vec!["init"]).unwrap_err();
        assert!(
            err.to_string().contains(".git dir already exists"),
            "\nincorrect error message:\n\n{}",
            err
        );
    }

    #[test]
    fn error_too_many_args() {
        let temp = tempfile::tempdir().unwrap();
        let err = App::run_with_args(temp.path(), vec!["init", "here", "and there"]).unwrap_err();

        let errmsg = err.to_string();
        assert!(
            errmsg.contains("wasn't expected"),
            "\nincorrect error message:\n\n{}",
            errmsg
        );
    }
}
