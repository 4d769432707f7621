//! Binary entrypoint for amalgam-cli.

fn main() {
    if let Err(err) = amalgam_cli::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
