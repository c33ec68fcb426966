use std::{fs, path::Path};

use assert_cmd::Command;
use tempfile::TempDir;

#[allow(dead_code)]
pub const AUTHOR_NAME: &str = "A U Thor";
#[allow(dead_code)]
pub const AUTHOR_EMAIL: &str = "author@example.com";

// A `minigit` command rooted at `dir` with a fixed author identity
// and logging left at its default level.
pub fn minigit(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("minigit").unwrap();
    cmd.current_dir(dir)
        .env_remove("MINIGIT_LOG")
        .env_remove("GIT_COMMITTER_NAME")
        .env_remove("GIT_COMMITTER_EMAIL")
        .env("GIT_AUTHOR_NAME", AUTHOR_NAME)
        .env("GIT_AUTHOR_EMAIL", AUTHOR_EMAIL);
    cmd
}

// Runs `cmd`, asserts that it succeeded, and returns stdout minus
// the trailing newline.
#[allow(dead_code)]
pub fn stdout_line(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap().trim_end().to_string()
}

#[allow(dead_code)]
pub fn init_empty_repo() -> TempDir {
    let temp = tempfile::tempdir().unwrap();
    minigit(temp.path()).arg("init").assert().success();
    temp
}

// Lays out a small work dir:
//
// ```
// a.txt        "x"
// b/           (empty)
// src/lib.rs   "pub fn f() {}\n"
// ```
#[allow(dead_code)]
pub fn populate_work_dir(path: &Path) {
    fs::write(path.join("a.txt"), "x").unwrap();
    fs::create_dir_all(path.join("b")).unwrap();
    fs::create_dir_all(path.join("src")).unwrap();
    fs::write(path.join("src/lib.rs"), "pub fn f() {}\n").unwrap();
}
