use clap::Parser;
use lglmatrix::{init_logging, run, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_level(), cli.log_json) {
        eprintln!("Failed to initialize logging: {e:#}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}
