use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[cfg(test)]
use std::ffi::OsString;

use crate::{cmds, find_repo, Result};

use clap::{crate_version, AppSettings, ArgMatches};
use minigit::config::Config;
use minigit::object::Id;
use minigit::store::OnDisk;

pub(crate) fn clap_app<'a, 'b>() -> clap::App<'a, 'b> {
    let app = clap::App::new("minigit")
        .version(crate_version!())
        .about("Stores and inspects content-addressed objects in a .git directory")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .setting(AppSettings::VersionlessSubcommands);

    cmds::add_subcommands(app)
}

/// Everything a subcommand may touch: parsed arguments, the standard
/// streams, the directory the command runs in, and the commit identity.
pub(crate) struct App<'a> {
    pub arg_matches: ArgMatches<'a>,
    pub stdin: &'a mut dyn Read,
    pub stdout: &'a mut dyn Write,
    pub cwd: PathBuf,
    pub config: Config,
}

impl<'a> App<'a> {
    pub fn run(&mut self) -> Result<()> {
        cmds::dispatch(self)
    }

    /// Resolves a path argument relative to the command's directory.
    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.cwd.join(path)
    }

    /// Opens the store enclosing the command's directory.
    pub fn open_store(&self) -> Result<OnDisk> {
        Ok(find_repo::from_path(&self.cwd)?)
    }

    #[cfg(test)]
    pub fn run_with_stdin_and_args<P, I, T>(cwd: P, stdin: Vec<u8>, args: I) -> Result<Vec<u8>>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let argv = std::iter::once(OsString::from("minigit"))
            .chain(args.into_iter().map(Into::into))
            .collect::<Vec<OsString>>();

        let mut input = std::io::Cursor::new(stdin);
        let mut output: Vec<u8> = Vec::new();

        let mut app = App {
            arg_matches: clap_app().get_matches_from_safe(argv)?,
            stdin: &mut input,
            stdout: &mut output,
            cwd: cwd.as_ref().to_path_buf(),
            config: Config::default(),
        };
        app.run()?;
        drop(app);

        Ok(output)
    }

    #[cfg(test)]
    pub fn run_with_args<P, I, T>(cwd: P, args: I) -> Result<Vec<u8>>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        App::run_with_stdin_and_args(cwd, Vec::new(), args)
    }
}

/// Parses the full hex object ID given for argument `name`.
pub(crate) fn id_arg(args: &ArgMatches, name: &str) -> Result<Id> {
    let hex = args.value_of(name).unwrap_or_default();
    Id::from_hex(hex).map_err(|err| format!("invalid {} `{}`: {}", name, hex, err).into())
}

impl<'a> Write for App<'a> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.stdout.write(buf)
    }

    #[cfg(not(tarpaulin_include))]
    fn flush(&mut self) -> std::io::Result<()> {
        self.stdout.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use assert_cmd::Command;
    use predicates::prelude::*;

    fn with_app<F: FnOnce(&mut App)>(cwd: &Path, f: F) {
        let mut stdin = std::io::Cursor::new(Vec::new());
        let mut stdout = Vec::new();
        let mut app = App {
            arg_matches: clap_app().get_matches_from(vec!["minigit", "write-tree"]),
            stdin: &mut stdin,
            stdout: &mut stdout,
            cwd: cwd.to_path_buf(),
            config: Config::default(),
        };
        f(&mut app);
    }

    #[test]
    fn resolve_relative_and_absolute() {
        let temp = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();

        with_app(temp.path(), |app| {
            assert_eq!(app.resolve("a/b"), temp.path().join("a/b"));
            assert_eq!(app.resolve(elsewhere.path()), elsewhere.path());
        });
    }

    #[test]
    fn open_store_from_nested_dir() {
        let temp = tempfile::tempdir().unwrap();
        OnDisk::init(temp.path()).unwrap();
        let nested = temp.path().join("x/y");
        std::fs::create_dir_all(&nested).unwrap();

        with_app(&nested, |app| {
            assert_eq!(app.open_store().unwrap().work_dir(), temp.path());
        });
    }

    #[test]
    fn id_arg_names_the_argument() {
        let matches = clap_app().get_matches_from(vec!["minigit", "ls-tree", "abc"]);
        let (_, sub) = matches.subcommand();

        let err = id_arg(sub.unwrap(), "tree").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid tree `abc`: value is less than 40 digits long"
        );
    }

    #[test]
    fn id_arg_accepts_full_hex() {
        let hex = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";
        let matches = clap_app().get_matches_from(vec!["minigit", "ls-tree", hex]);
        let (_, sub) = matches.subcommand();

        assert_eq!(id_arg(sub.unwrap(), "tree").unwrap().to_string(), hex);
    }

    #[test]
    fn no_subcommand_prints_help() {
        let mut cmd = Command::cargo_bin("minigit").unwrap();
        cmd.assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::starts_with("minigit 0."))
            .stderr(predicate::str::contains("USAGE:"));
    }

    #[test]
    fn version() {
        let mut cmd = Command::cargo_bin("minigit").unwrap();
        cmd.arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("minigit 0."))
            .stderr("");
    }
}
