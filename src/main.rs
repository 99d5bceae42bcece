//! tpu-nightly - Manage the nightly date in a TPU requirements file

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = tpu_nightly::cli::run() {
        eprintln!("error: {:#}", e);
        ExitCode::from(e.exit_code())
    } else {
        ExitCode::SUCCESS
    }
}
