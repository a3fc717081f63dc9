use clap::Parser;
use greeter::app::{handle_fatal_error, init_logging, AppConfig};
use greeter::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    init_logging(&AppConfig::new(verbose));

    if let Err(e) = execute(cli) {
        handle_fatal_error(e, verbose);
    }
}
