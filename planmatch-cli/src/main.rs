//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = planmatch_cli::run() {
        eprintln!("planmatch: {err}");
        std::process::exit(1);
    }
}
