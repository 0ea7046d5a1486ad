//! dirtree - CLI entry point
//!
//! Parses arguments, loads the config file, sets up logging and hands the
//! resolved flags and paths to [`dirtree::run`]. Every error that reaches
//! this point is fatal and ends the process with a failure status.

#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use dirtree::{cli, run, Args, Config, Result};
use env_logger::Env;
use std::error::Error;
use std::io::{self, BufWriter};
use std::process;

fn main() {
    // Initialize logger with RUST_LOG env var support
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    colored::control::set_override(atty::is(atty::Stream::Stderr));

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => e.exit(),
        Err(e) => {
            e.print().ok();
            process::exit(1);
        }
    };

    if args.help {
        eprint!("{}", cli::usage());
        process::exit(1);
    }

    if let Err(e) = run_cli(&args) {
        log::error!("Error: {}", e);
        eprintln!("{} {}", "Error:".red().bold(), e);

        // Print chain of errors if any
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("  Caused by: {}", err);
            source = err.source();
        }

        process::exit(1);
    }
}

/// Load the config file and run the listing on buffered stdout
fn run_cli(args: &Args) -> Result<()> {
    let config = Config::load()?;
    let stdout = io::stdout();
    let out = BufWriter::with_capacity(8192, stdout.lock());
    run(args, &config, out)?;
    Ok(())
}
