//! mclaunch CLI entry point.

use std::ffi::OsString;
use std::process::ExitCode;

use mclaunch::dispatch::{run_module, ENTRY_MODULE};
use mclaunch::error::FAILURE_EXIT_CODE;
use mclaunch::interpreter::locate;
use mclaunch::preflight::{
    require_dependency, require_minor_version, INTERPRETER, REQUIRED_DEPENDENCIES,
    REQUIRED_MINOR_VERSION,
};
use mclaunch::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by the `RUST_LOG` environment variable. The
/// default is WARN and the writer is stderr, so in normal operation the
/// fixed diagnostics stay the launcher's only output and stdout belongs to
/// the entry module alone.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mclaunch=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Run every preflight check, then hand off to the entry module.
///
/// Checks run strictly in order; the first failure is returned without
/// running anything after it. On Unix a successful handoff never returns.
fn launch(args: &[OsString]) -> Result<i32> {
    let python = locate(INTERPRETER)?;
    require_minor_version(&python, REQUIRED_MINOR_VERSION)?;
    for name in REQUIRED_DEPENDENCIES {
        require_dependency(&python, name)?;
    }
    run_module(&python, ENTRY_MODULE, args)
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    tracing::debug!(?args, "launcher starting");

    match launch(&args) {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}
