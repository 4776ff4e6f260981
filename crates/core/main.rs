#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::{path::PathBuf, process};

mod app;
mod commands;
mod interact;
mod render;

use commands::Commands;

use bookfinder::{LookupController, ProviderKind};

use clap::{Args, Parser};
use log::{debug, trace};

fn main() {
    if let Err(err) = try_main() {
        debug!("{:?}", err);
        eprintln!("{}", err);
        process::exit(2);
    }
}

fn try_main() -> eyre::Result<()> {
    let Cli {
        command,
        global_opts:
            GlobalOpts {
                config,
                provider,
                base_url,
                timeout,
                verbosity,
                quiet,
            },
    } = Cli::parse();

    setup_errlog(verbosity as usize, quiet)?;

    let config = app::resolve_config(config, provider, base_url, timeout)?;
    let mut controller = LookupController::new(config)?;
    trace!(
        "Using the {} provider at '{}'",
        controller.config().provider,
        controller.config().base_url()
    );

    let message = command.execute(&mut controller, quiet)?;
    if !message.is_empty() {
        println!("{message}");
    }
    Ok(())
}

fn setup_errlog(verbosity: usize, quiet: bool) -> eyre::Result<()> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet { 0 } else { verbosity + 1 };

    stderrlog::new().verbosity(verbosity).init()?;
    Ok(())
}

#[derive(Parser)]
#[clap(name = "bookfinder")]
#[clap(about = "Look up book information by ISBN from the terminal")]
#[clap(version, author)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(flatten)]
    global_opts: GlobalOpts,
}

#[derive(Debug, Args)]
struct GlobalOpts {
    /// Path to a TOML configuration file
    ///
    /// Recognised keys are `provider`, `base-url` and `timeout-secs`. Options given on the
    /// command line take precedence over the file.
    #[clap(short, long, parse(from_os_str), global = true)]
    config: Option<PathBuf>,

    /// The book-metadata provider to query: `open-library` (A) or `book-info` (B)
    #[clap(short, long, global = true)]
    provider: Option<ProviderKind>,

    /// Base URL of the provider, defaults to the provider's public or local address
    #[clap(short, long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[clap(short, long, global = true)]
    timeout: Option<u64>,

    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences), global = true)]
    verbosity: u8,

    /// Prevents the program from writing progress to stderr, errors will still be printed.
    #[clap(short, long, global = true)]
    quiet: bool,
}
