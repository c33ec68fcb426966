use std::io::Write;

use crate::app::id_arg;
use crate::{App, Result};

use clap::{Arg, ArgMatches, SubCommand};
use minigit::object::Tree;
use minigit::store::ObjectStore;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("ls-tree")
        .about("List the contents of a tree object")
        .arg(
            Arg::with_name("name-only")
                .long("name-only")
                .help("List only filenames, one per line"),
        )
        .arg(
            Arg::with_name("tree")
                .required(true)
                .help("The full hex ID of the tree to list"),
        )
}

pub(crate) fn run(app: &mut App, args: &ArgMatches) -> Result<()> {
    let id = id_arg(args, "tree")?;
    let store = app.open_store()?;
    let object = store.load(&id)?;
    let tree = object
        .as_tree()
        .ok_or_else(|| format!("object {} is a {}, not a tree", id, object.kind()))?;

    write_entries(app, tree, args.is_present("name-only"))
}

/// One line per entry: `<mode> <kind> <id>\t<name>`, or just the name.
pub(crate) fn write_entries(app: &mut App, tree: &Tree, name_only: bool) -> Result<()> {
    for entry in tree.entries() {
        if !name_only {
            let kind = if entry.mode().is_tree() { "tree" } else { "blob" };
            write!(app, "{:06o} {} {}\t", entry.mode().to_value(), kind, entry.id())?;
        }

        app.write_all(entry.name())?;
        app.write_all(b"\n")?;
    }

    Ok(())
}
