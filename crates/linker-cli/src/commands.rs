//! Subcommands and their output.

use anyhow::{Context, Result};
use clap::Subcommand;
use desktop_linker::{DesktopLinker, LinkerError, ShortcutRequest};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List installed applications
    Apps {
        /// Only show applications whose name, comment or generic name contains this
        #[arg(short, long)]
        query: Option<String>,

        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a shortcut to a file or folder
    File {
        /// File or folder the shortcut opens
        target: PathBuf,

        /// Icon image (PNG, SVG, XPM)
        #[arg(short, long)]
        icon: Option<PathBuf>,

        /// Shortcut name (defaults to the file name)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Create a shortcut to an installed application
    App {
        /// Path to the application's .desktop file, or its exact name
        source: String,

        /// Icon image replacing the application's icon
        #[arg(short, long)]
        icon: Option<PathBuf>,

        /// Shortcut name (defaults to the application name)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Print the directory shortcuts are written to
    DesktopDir,
}

/// Run one command, writing results to `out`.
pub fn run(linker: &DesktopLinker, command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Apps { query, json } => list_apps(linker, query.as_deref(), json, out),
        Command::File { target, icon, name } => {
            if !target.exists() {
                debug!("Target {} does not exist", target.display());
                return Err(LinkerError::NoTargetSelected.into());
            }
            let request = with_overrides(ShortcutRequest::file(target), icon, name);
            create(linker, &request, out)
        }
        Command::App { source, icon, name } => {
            let source = resolve_app_source(linker, &source)?;
            let request = with_overrides(ShortcutRequest::app(source), icon, name);
            create(linker, &request, out)
        }
        Command::DesktopDir => {
            let dir = linker.resolve_desktop_dir()?;
            writeln!(out, "{}", dir.display())?;
            Ok(())
        }
    }
}

fn list_apps(
    linker: &DesktopLinker,
    query: Option<&str>,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let catalog = linker.discover_apps();
    let catalog = linker.filter_apps(&catalog, query.unwrap_or_default());

    if json {
        serde_json::to_writer_pretty(&mut *out, &catalog).context("serialize catalog")?;
        writeln!(out)?;
        return Ok(());
    }

    for entry in &catalog {
        writeln!(
            out,
            "{}\t{}",
            entry.name().unwrap_or_default(),
            entry.source_path().display()
        )?;
    }
    Ok(())
}

fn with_overrides(
    mut request: ShortcutRequest,
    icon: Option<PathBuf>,
    name: Option<String>,
) -> ShortcutRequest {
    if let Some(icon) = icon {
        request = request.with_icon(icon);
    }
    if let Some(name) = name {
        request = request.with_name(name);
    }
    request
}

/// A `.desktop` path as given, or the source of the catalog entry with that name.
fn resolve_app_source(linker: &DesktopLinker, source: &str) -> Result<PathBuf> {
    let path = Path::new(source);
    if path.is_file() {
        return Ok(path.to_path_buf());
    }

    let catalog = linker.discover_apps();
    catalog
        .find_by_name(source)
        .map(|entry| entry.source_path().to_path_buf())
        .ok_or_else(|| LinkerError::NoAppSelected.into())
}

fn create(linker: &DesktopLinker, request: &ShortcutRequest, out: &mut impl Write) -> Result<()> {
    let created = linker
        .create(request)
        .with_context(|| format!("create shortcut for {}", request.path().display()))?;
    info!("Shortcut created: {}", created.name);
    writeln!(out, "{}", created.path.display())?;
    Ok(())
}
