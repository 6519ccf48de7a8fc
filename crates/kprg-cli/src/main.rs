//! kprg CLI
//!
//! Converts a Keccak PRG test-vector report into a JSON array of records.

use clap::{Arg, ArgAction, Command, value_parser};
use kprg_cli::{DEFAULT_INPUT, Options};
use std::path::PathBuf;
use std::process;

fn main() {
    let matches = Command::new("kprg")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract Keccak PRG test vectors as JSON")
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("Report to read")
                .default_value(DEFAULT_INPUT)
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write records to FILE instead of stdout")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .help("Pretty-print the JSON output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Exit with status 2 when any diagnostic was produced")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Do not print diagnostics")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("diagnostics-json")
                .long("diagnostics-json")
                .value_name("FILE")
                .help("Also write diagnostics to FILE as JSON")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .get_matches();

    let options = Options {
        input: matches
            .get_one::<PathBuf>("file")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
        output: matches.get_one::<PathBuf>("output").cloned(),
        pretty: matches.get_flag("pretty"),
        strict: matches.get_flag("strict"),
        quiet: matches.get_flag("quiet"),
        diagnostics_json: matches.get_one::<PathBuf>("diagnostics-json").cloned(),
    };

    match kprg_cli::run(&options) {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("kprg: {e:#}");
            process::exit(1);
        }
    }
}
