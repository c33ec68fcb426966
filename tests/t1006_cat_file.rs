use std::fs;

use predicates::prelude::*;

mod common;

fn write_blob(path: &std::path::Path, content: &str) -> String {
    common::stdout_line(
        common::minigit(path)
            .args(&["hash-object", "-w", "--stdin"])
            .write_stdin(content.to_string()),
    )
}

#[test]
fn blob_round_trip() {
    let temp = common::init_empty_repo();
    let id = write_blob(temp.path(), "hello\nworld");
    assert_eq!(id, "9db7df02b6026626607ed9643ea24af9dc09c2c9");

    common::minigit(temp.path())
        .args(&["cat-file", "-p", &id])
        .assert()
        .success()
        .stdout("hello\nworld");

    common::minigit(temp.path())
        .args(&["cat-file", "-t", &id])
        .assert()
        .success()
        .stdout("blob\n");

    common::minigit(temp.path())
        .args(&["cat-file", "-s", &id])
        .assert()
        .success()
        .stdout("11\n");
}

#[test]
fn tree_pretty_print() {
    let temp = common::init_empty_repo();
    common::populate_work_dir(temp.path());

    let tree = common::stdout_line(common::minigit(temp.path()).arg("write-tree"));

    common::minigit(temp.path())
        .args(&["cat-file", "-p", &tree])
        .assert()
        .success()
        .stdout(
            "100644 blob c1b0730e0133447badcfd47fd144e254807b06e1\ta.txt\n\
             040000 tree 4b825dc642cb6eb9a060e54bf8d69288fbee4904\tb\n\
             040000 tree 7872c7eb616a8c97786877555e9e419a05e83f5a\tsrc\n",
        );

    common::minigit(temp.path())
        .args(&["cat-file", "-t", &tree])
        .assert()
        .success()
        .stdout("tree\n");
}

#[test]
fn missing_object() {
    let temp = common::init_empty_repo();

    common::minigit(temp.path())
        .args(&["cat-file", "-p", "d670460b4b4aece5915caf5c68d12f560a9fe3e4"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr("ERROR: object d670460b4b4aece5915caf5c68d12f560a9fe3e4 not found\n");
}

#[test]
fn corrupt_object() {
    let temp = common::init_empty_repo();
    let id = write_blob(temp.path(), "test content\n");

    let object_path = temp
        .path()
        .join(".git/objects/d6/70460b4b4aece5915caf5c68d12f560a9fe3e4");
    let stored = fs::read(&object_path).unwrap();
    fs::write(&object_path, &stored[..stored.len() - 4]).unwrap();

    common::minigit(temp.path())
        .args(&["cat-file", "-p", &id])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("ERROR: corrupt object"));
}
