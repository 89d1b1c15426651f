use clap::Parser;
use clap::error::ErrorKind;

use charset_guard::cli::Cli;
use charset_guard::commands::run_check;
use charset_guard::{EXIT_PARAMETER_ERROR, EXIT_VALID};

/// Environment variable holding the tracing filter, e.g. `debug`.
const LOG_ENV: &str = "CHARSET_GUARD_LOG";

fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_VALID,
                _ => EXIT_PARAMETER_ERROR,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    std::process::exit(run_check(&cli));
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    // Logs go to stderr so stdout stays parseable.
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
