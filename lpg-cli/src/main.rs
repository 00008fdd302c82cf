//! A command line interface to LPG delivery route sequencing and pricing.

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

mod commands;

use crate::cli::*;

fn main() {
    let matches = get_app().get_matches();

    run_subcommand(matches);
}

mod cli {
    use super::commands::import::{get_import_app, run_import};
    use super::commands::quote::{get_quote_app, run_quote};
    use super::commands::route::{get_route_app, run_route};
    use super::commands::track::{get_track_app, run_track};
    use clap::{ArgMatches, Command};
    use lpg_core::prelude::GenericResult;
    use std::process;

    pub fn get_app() -> Command {
        Command::new("LPG Delivery")
            .version(env!("CARGO_PKG_VERSION"))
            .author(env!("CARGO_PKG_AUTHORS"))
            .about("A command line interface to LPG delivery route sequencing and pricing")
            .subcommand(get_route_app())
            .subcommand(get_quote_app())
            .subcommand(get_track_app())
            .subcommand(get_import_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        let result: GenericResult<()> = match arg_matches.subcommand() {
            Some(("route", route_matches)) => run_route(route_matches),
            Some(("quote", quote_matches)) => run_quote(quote_matches),
            Some(("track", track_matches)) => run_track(track_matches),
            Some(("import", import_matches)) => run_import(import_matches),
            _ => Err("no subcommand was used. Use -h to print help information.".into()),
        };

        if let Err(err) = result {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
