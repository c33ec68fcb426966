use std::io::Write;

use crate::app::id_arg;
use crate::{App, Result};

use clap::{Arg, ArgMatches, SubCommand};
use minigit::build;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("commit-tree")
        .about("Create a new commit object")
        .arg(
            Arg::with_name("tree")
                .required(true)
                .help("The full hex ID of an existing tree object"),
        )
        .arg(
            Arg::with_name("p")
                .short("p")
                .value_name("parent")
                .takes_value(true)
                .help("The ID of the parent commit"),
        )
        .arg(
            Arg::with_name("m")
                .short("m")
                .value_name("message")
                .takes_value(true)
                .help("The commit log message"),
        )
}

pub(crate) fn run(app: &mut App, args: &ArgMatches) -> Result<()> {
    let tree = id_arg(args, "tree")?;
    let parent = if args.is_present("p") {
        Some(id_arg(args, "p")?)
    } else {
        None
    };
    let message = args.value_of("m").unwrap_or_default();

    let mut store = app.open_store()?;
    let id = build::commit_tree(&mut store, &tree, parent.as_ref(), message, &app.config)?;

    writeln!(app, "{}", id)?;

    Ok(())
}
