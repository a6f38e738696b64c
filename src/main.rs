mod cli;
mod dial;
mod parser;
mod reader;
mod shared;

use std::process::ExitCode;

fn main() -> ExitCode {
    cli::parse_cli()
}
