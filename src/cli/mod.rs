use std::{
    ffi::OsString,
    io::{self, Write},
    process::ExitCode,
};

use clap::{arg, Command};
use miette::Result;
use tracing_subscriber::{filter::LevelFilter, prelude::*};

mod run;

use crate::dial::Simulation;
use run::run_file;

pub const DEFAULT_INSTRUCTIONS_PATH: &str = "cmd/first/instructions.txt";

pub fn cli() -> Command {
    Command::new("safecrack")
        .about("Counts how many times the safe dial stops on zero")
        .version("0.1.0")
        .arg(
            arg!(-i --instructions <PATH> "Instructions file to simulate")
                .default_value(DEFAULT_INSTRUCTIONS_PATH)
                .allow_hyphen_values(true),
        )
        .arg(arg!(-d --debug "Print debug information"))
}

/// Rewrites the single-dash `-instructions` spelling into `--instructions`.
///
/// An argument that is the value of a preceding `-i`/`--instructions` is
/// passed through untouched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut expects_value = false;
    args.into_iter()
        .map(|arg| {
            let normalized = match arg.to_str() {
                _ if expects_value => None,
                Some("-instructions") => Some(OsString::from("--instructions")),
                Some(value) => value
                    .strip_prefix("-instructions=")
                    .map(|path| OsString::from(format!("--instructions={path}"))),
                None => None,
            };
            let arg = normalized.unwrap_or(arg);
            expects_value = !expects_value
                && matches!(arg.to_str(), Some("-i" | "--instructions"));
            arg
        })
        .collect()
}

fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let stderr_format = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(level);

    tracing_subscriber::registry().with(stderr_format).init();
}

pub fn parse_cli() -> ExitCode {
    let matches = cli().get_matches_from(normalize_args(std::env::args_os()));

    let debug = matches.get_flag("debug");
    init_logging(debug);

    let instructions_path = matches
        .get_one::<String>("instructions")
        .map(String::as_str)
        .unwrap_or(DEFAULT_INSTRUCTIONS_PATH);

    report(
        run_file(instructions_path),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

/// Prints the outcome of a run and picks the process exit code.
pub fn report(
    result: Result<Simulation>,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> ExitCode {
    let written = match &result {
        Ok(simulation) => writeln!(stdout, "Password appears {} times", simulation.hits),
        Err(error) => writeln!(stderr, "Error: {error}"),
    };

    match (result, written) {
        (Ok(_), Ok(())) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
