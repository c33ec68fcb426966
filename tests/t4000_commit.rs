use predicates::prelude::*;

mod common;

#[test]
fn snapshot_and_commit() {
    let temp = common::init_empty_repo();
    common::populate_work_dir(temp.path());

    let tree = common::stdout_line(common::minigit(temp.path()).arg("write-tree"));
    assert_eq!(tree, "fbc9fdb18f1865f18badaf835bef7b4696682558");

    common::minigit(temp.path())
        .args(&["ls-tree", "--name-only", &tree])
        .assert()
        .success()
        .stdout("a.txt\nb\nsrc\n");

    let first = common::stdout_line(
        common::minigit(temp.path()).args(&["commit-tree", &tree, "-m", "init"]),
    );
    assert_eq!(first.len(), 40);

    let payload = common::stdout_line(common::minigit(temp.path()).args(&["cat-file", "-p", &first]));
    let lines: Vec<&str> = payload.lines().collect();

    assert_eq!(lines[0], format!("tree {}", tree));
    assert!(lines[1].starts_with(&format!(
        "author {} <{}> ",
        common::AUTHOR_NAME,
        common::AUTHOR_EMAIL
    )));
    assert!(lines[2].starts_with(&format!(
        "committer {} <{}> ",
        common::AUTHOR_NAME,
        common::AUTHOR_EMAIL
    )));
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], "init");
    assert_eq!(lines.len(), 5);

    let second = common::stdout_line(
        common::minigit(temp.path()).args(&["commit-tree", &tree, "-p", &first, "-m", "again"]),
    );

    common::minigit(temp.path())
        .args(&["cat-file", "-p", &second])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("\nparent {}\n", first)))
        .stdout(predicate::str::ends_with("\n\nagain\n"));

    common::minigit(temp.path())
        .args(&["cat-file", "-t", &second])
        .assert()
        .success()
        .stdout("commit\n");
}

#[test]
fn write_tree_skips_git_dir() {
    let temp = common::init_empty_repo();

    // Only `.git` is present, so the snapshot is the empty tree.
    common::minigit(temp.path())
        .arg("write-tree")
        .assert()
        .success()
        .stdout("4b825dc642cb6eb9a060e54bf8d69288fbee4904\n");
}

#[test]
fn commit_tree_rejects_bad_id() {
    let temp = common::init_empty_repo();

    common::minigit(temp.path())
        .args(&["commit-tree", "XYZ"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("ERROR: "));
}

#[test]
fn logs_go_to_stderr() {
    let temp = common::init_empty_repo();
    common::populate_work_dir(temp.path());

    common::minigit(temp.path())
        .env("MINIGIT_LOG", "debug")
        .arg("write-tree")
        .assert()
        .success()
        .stdout("fbc9fdb18f1865f18badaf835bef7b4696682558\n")
        .stderr(predicate::str::contains("wrote tree"));
}
