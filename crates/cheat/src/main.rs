//! # cheat
//!
//! Terminal client for the `cheatapp` library. All logic lives in [`cli`]; this file only
//! maps a failed run to a message on stderr and exit code 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
