//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use meridian_cli::CliError;

fn main() {
    match meridian_cli::run() {
        Ok(()) => {}
        // Clap owns help, version and usage output and their exit codes.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("meridian: {err}");
            std::process::exit(1);
        }
    }
}
