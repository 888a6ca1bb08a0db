use std::process;

use arrayfile::{exit_code, run_with_args};

fn main() {
    pretty_env_logger::init();

    let result = run_with_args(std::env::args_os());
    if let Err(err) = &result {
        eprintln!("error: {err:#}");
    }
    process::exit(exit_code(&result));
}
