use clap::Parser;

use line_checker::cli::Cli;
use line_checker::commands::run_check;
use line_checker::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let exit_code = run_check(&cli);

    std::process::exit(exit_code);
}
