//! itlogbook main entrypoint.

use clap::Parser;
use itlogbook::cli::parser::Cli;
use itlogbook::ui::messages::report;
use itlogbook::{init_tracing, run};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        report(&e);
        std::process::exit(1);
    }
}
