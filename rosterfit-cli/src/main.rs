//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use rosterfit_cli::CliError;

#[expect(clippy::print_stderr, reason = "the binary reports fatal errors")]
fn main() {
    sensible_env_logger::init!();
    match rosterfit_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("rosterfit: {err}");
            std::process::exit(1);
        }
    }
}
