//! Lexispell CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use lexispell::cli::args::LexispellArgs;
use lexispell::cli::commands::execute_command;

fn main() {
    let args = LexispellArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // --quiet
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // -v
        _ => LevelFilter::Debug, // -vv and more
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
