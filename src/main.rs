//! filesift - file selection, trash, display and duplicate image detection
//!
//! Entry point for the filesift CLI application.

use clap::Parser;
use filesift::{
    cli::Cli,
    error::{ExitCode, StructuredError},
};

fn main() {
    // Argument errors (unknown sort order, conflicting actions) exit with
    // status 2 through clap.
    let cli = Cli::parse();
    let json_errors = cli.json_errors;

    match filesift::run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            let exit_code = ExitCode::for_error(&err);

            if json_errors {
                let structured = StructuredError::new(&err, exit_code);
                if let Ok(json) = serde_json::to_string_pretty(&structured) {
                    eprintln!("{}", json);
                } else {
                    eprintln!("[{}] Error: {:#}", exit_code.code_prefix(), err);
                }
            } else {
                eprintln!("[{}] Error: {:#}", exit_code.code_prefix(), err);
            }

            std::process::exit(exit_code.as_i32());
        }
    }
}
