use clap::Parser;
use inkdash::cli::commands::Cli;
use inkdash::cli::{handlers, init_tracing};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
