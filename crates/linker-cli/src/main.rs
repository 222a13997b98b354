//! Desktop Linker CLI - command-line front end for the desktop-linker library.
//!
//! Stands in for the graphical shell: it takes already-chosen paths, calls the
//! library, and prints the created shortcut or the reason it failed.

mod commands;

use anyhow::Result;
use clap::Parser;
use desktop_linker::config::AppConfig;
use desktop_linker::LinkerError;
use std::path::PathBuf;
use tracing::{debug, error, Level};
use tracing_subscriber::FmtSubscriber;

use commands::Command;

#[derive(Parser, Debug)]
#[command(name = "desktop-linker")]
#[command(about = "Create desktop shortcuts for files, folders and installed applications")]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Write shortcuts here instead of the XDG Desktop directory
    #[arg(long, global = true)]
    desktop_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging (stderr, so stdout stays clean for results)
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    debug!("Starting {}", AppConfig::APP_NAME);

    let mut builder = desktop_linker::DesktopLinker::builder();
    if let Some(dir) = args.desktop_dir {
        builder = builder.desktop_dir(dir);
    }
    let linker = builder.build();

    let mut stdout = std::io::stdout().lock();
    match commands::run(&linker, args.command, &mut stdout) {
        Err(err)
            if err
                .downcast_ref::<LinkerError>()
                .is_some_and(LinkerError::is_missing_selection) =>
        {
            // Nothing to create; report like a usage error
            error!("{}", err);
            std::process::exit(2);
        }
        result => result,
    }
}
