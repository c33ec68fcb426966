use std::{
    fs,
    io::{Read, Write},
};

use crate::{App, Result};

use clap::{Arg, ArgGroup, ArgMatches, SubCommand};
use minigit::object::encode_blob;
use minigit::store::ObjectStore;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("hash-object")
        .about("Compute object ID and optionally creates a blob from a file")
        .arg(
            Arg::with_name("w")
                .short("w")
                .help("Actually write the object into the object database"),
        )
        .arg(
            Arg::with_name("stdin")
                .long("stdin")
                .help("Read the object from standard input instead of from a file"),
        )
        .arg(Arg::with_name("file"))
        .group(
            ArgGroup::with_name("source")
                .args(&["stdin", "file"])
                .required(true),
        )
}

pub(crate) fn run(app: &mut App, args: &ArgMatches) -> Result<()> {
    let content = content_from_args(app, args)?;

    let id = if args.is_present("w") {
        let mut store = app.open_store()?;
        store.persist_blob(&content)?
    } else {
        encode_blob(&content).0
    };

    writeln!(app, "{}", id)?;

    Ok(())
}

fn content_from_args(app: &mut App, args: &ArgMatches) -> Result<Vec<u8>> {
    match args.value_of_os("file") {
        Some(file) => {
            let path = app.resolve(file);
            let content = fs::read(&path).map_err(|err| format!("{}: {}", path.display(), err))?;
            Ok(content)
        }
        None => {
            let mut content = Vec::new();
            app.stdin.read_to_end(&mut content)?;
            Ok(content)
        }
    }
}
