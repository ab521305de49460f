use std::io;
use std::process;

use wacom_hwdb::{run, DATA_DIR};

/// Prints the hwdb file for the tablets in the source tree's `data` directory.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let status = run(DATA_DIR, io::stdout().lock(), io::stderr().lock());

    process::exit(status);
}
