use clap::Parser;
use tally::{repl, selftest};

/// tally is a minimal command-line calculator for binary arithmetic
/// expressions such as `12 + 3.5`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Runs the built-in self-tests and exits with a non-zero status if any
    /// of them fail.
    #[arg(long)]
    test: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if args.test {
        std::process::exit(i32::from(!selftest::run()));
    }

    if let Err(e) = repl::run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
