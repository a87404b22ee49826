// src/main.rs
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use num_words::{app, cli, logging};

fn main() -> ExitCode {
    let args = cli::Args::parse();
    logging::init(args.verbose);

    let mut stdout = io::stdout().lock();
    match app::run(args, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if app::is_usage_error(&err) {
                let _ = cli::usage(&mut stdout, &cli::program_name());
                let _ = stdout.flush();
            }
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
