//! Main CLI application

use crate::error::Result;
use crate::events::ConsoleSink;
use crate::node::{NodeLoader, DEFAULT_NODE_ROOT};
use crate::runner::{Engine, Outcome};
use clap::{Arg, ArgAction, ArgMatches, Command};
use colored::Colorize;
use std::path::PathBuf;

/// Build the clap command
fn build_command() -> Command {
    Command::new("boxkite")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A declarative task-tree runner")
        .arg(
            Arg::new("node")
                .value_name("NODE")
                .help("Path to the root node definition file")
                .required(true),
        )
        .arg(
            Arg::new("boxkite-path")
                .short('b')
                .long("boxkite-path")
                .value_name("DIR")
                .help("Directory where node definitions live")
                .default_value(DEFAULT_NODE_ROOT),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print the final result")
                .action(ArgAction::SetTrue),
        )
}

/// Run the root node from parsed arguments
fn run_with_matches(matches: &ArgMatches) -> Result<Outcome> {
    let root_node = matches
        .get_one::<String>("node")
        .map(PathBuf::from)
        .unwrap_or_default();
    let node_root = matches
        .get_one::<String>("boxkite-path")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_NODE_ROOT));
    let quiet = matches.get_flag("quiet");

    let (events, sink) = ConsoleSink::spawn(quiet);
    let mut engine = Engine::new(NodeLoader::new(node_root), events);

    let result = engine.run(&root_node);

    // Close the channel and let the sink flush everything it has received
    drop(engine);
    let _ = sink.join();

    let outcome = result?;
    report(&outcome);
    Ok(outcome)
}

/// Print the top-level result
fn report(outcome: &Outcome) {
    let status = if outcome.success {
        "SUCCESS".green()
    } else {
        "FAILURE".red()
    };
    println!("{}: {}", status, outcome.message.trim_end());
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<Outcome> {
    let matches = build_command().get_matches();
    run_with_matches(&matches)
}
