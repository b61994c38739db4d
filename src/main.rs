use clap::Parser;
use std::process;

use pmtrack::cli::commands::{Cli, Commands};
use pmtrack::{cli, logging};

fn main() {
    logging::init();

    let cli_args = Cli::parse();
    let json_output = cli_args.json;

    let exit_code = match cli_args.command {
        Commands::Init => cli::init::run(json_output),
        Commands::Task(cmd) => cli::task::run(cmd, json_output),
        Commands::Summary => cli::summary::run(json_output),
        Commands::Catalog(cmd) => cli::catalog::run(cmd, json_output),
        Commands::Watch { limit } => cli::watch::run(limit, json_output),
        Commands::Reset => cli::reset::run(json_output),
    };

    process::exit(exit_code);
}
