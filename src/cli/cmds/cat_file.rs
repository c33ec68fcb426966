use std::io::Write;

use crate::app::id_arg;
use crate::{App, Result};

use clap::{Arg, ArgGroup, ArgMatches, SubCommand};
use minigit::object::Object;
use minigit::store::ObjectStore;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("cat-file")
        .about("Provide content, type, or size of a stored object")
        .arg(
            Arg::with_name("p")
                .short("p")
                .help("Pretty-print the contents of <object> based on its type"),
        )
        .arg(
            Arg::with_name("t")
                .short("t")
                .help("Show the object type identified by <object>"),
        )
        .arg(
            Arg::with_name("s")
                .short("s")
                .help("Show the object size identified by <object>"),
        )
        .group(ArgGroup::with_name("mode").args(&["p", "t", "s"]).required(true))
        .arg(
            Arg::with_name("object")
                .required(true)
                .help("The full hex ID of the object to show"),
        )
}

pub(crate) fn run(app: &mut App, args: &ArgMatches) -> Result<()> {
    let id = id_arg(args, "object")?;
    let store = app.open_store()?;
    let object = store.load(&id)?;

    if args.is_present("t") {
        writeln!(app, "{}", object.kind())?;
    } else if args.is_present("s") {
        writeln!(app, "{}", object.payload().len())?;
    } else {
        pretty_print(app, &object)?;
    }

    Ok(())
}

fn pretty_print(app: &mut App, object: &Object) -> Result<()> {
    match object {
        Object::Blob(content) => app.write_all(content)?,
        Object::Tree(tree) => super::ls_tree::write_entries(app, tree, false)?,
        Object::Commit(_) => app.write_all(&object.payload())?,
    }

    Ok(())
}
