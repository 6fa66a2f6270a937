//! benchdiff CLI entry point.

fn main() {
    if let Err(e) = benchdiff_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
