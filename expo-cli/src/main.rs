//! A command line interface to the attraction distribution solver.

#[cfg(test)]
#[path = "../tests/unit/main_test.rs"]
mod main_test;

mod commands;

use crate::cli::{get_app, run_subcommand};

fn main() {
    run_subcommand(get_app().get_matches());
}

mod cli {
    use super::commands::create_write_buffer;
    use super::commands::solve::{get_solve_app, run_solve};
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Attraction Distribution Solver")
            .version(env!("CARGO_PKG_VERSION"))
            .author("Ilya Builuk <ilya.builuk@gmail.com>")
            .about("A command line interface to GRASP solver which distributes themed attractions across spaces")
            .subcommand(get_solve_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        let result = match arg_matches.subcommand() {
            Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
            _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
        };

        if let Err(err) = result {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
