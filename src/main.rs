//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `abuseipdb_etl` library that handles:
//! - Environment variable loading (.env file)
//! - Configuration and command-line resolution
//! - Logger initialization
//! - Exit code mapping and user-facing output
//!
//! All pipeline functionality is implemented in the library crate.

use std::process;

use abuseipdb_etl::initialization::init_logger_with;
use abuseipdb_etl::{run_lookup, EtlError, Invocation, InvocationError};

#[tokio::main]
async fn main() {
    // .env in the working directory first, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    // Configuration errors are reported ahead of command-line errors
    let invocation = match Invocation::from_args(std::env::args_os(), |name| {
        std::env::var(name).ok()
    }) {
        Ok(invocation) => invocation,
        Err(InvocationError::Usage(e)) => e.exit(),
        Err(InvocationError::Config(e)) => fail(EtlError::from(e)),
    };

    let cli = &invocation.cli;
    if let Err(e) = init_logger_with(cli.log_level.clone().into(), cli.log_format.clone()) {
        fail(EtlError::from(e));
    }

    match run_lookup(&invocation.config, invocation.lookup_request()).await {
        Ok(report) => {
            println!(
                "Data successfully loaded into {} (document {}) in {:.1}s",
                report.collection, report.document_id, report.elapsed_seconds
            );
        }
        Err(e) => fail(e),
    }
}

fn fail(error: EtlError) -> ! {
    log::error!("{} stage failed: {}", error.kind(), error);
    eprintln!("abuseipdb_etl error: {}", error);
    process::exit(error.exit_code());
}
