use devtool::cli;
use devtool::commands::handle_analyze;
use devtool::errors::{DevtoolError, EXIT_FAILURE};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::parse_args();
    cli::init_logging(cli.verbose);

    match handle_analyze(cli.into_analyze_config()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(report_error(&err)),
    }
}

// Validation failures go to stdout; anything else gets the full chain on stderr
fn report_error(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<DevtoolError>() {
        Some(e) if e.is_validation() => {
            println!("Error: {e}");
            e.exit_code()
        }
        Some(e) => {
            eprintln!("Error: {err:#}");
            e.exit_code()
        }
        None => {
            eprintln!("Error: {err:#}");
            EXIT_FAILURE
        }
    }
}
