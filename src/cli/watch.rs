//! Watch command implementation.
//!
//! Re-runs the conversion whenever the input file is written, for a live
//! view of the result in an image viewer that reloads on change.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use clap::Args;
use notify::event::ModifyKind;
use notify::{Event, EventKind, RecursiveMode, Watcher};

use crate::config::Settings;
use crate::error::{DarkError, Result};
use crate::output::{display_path, Printer};
use crate::render::resolve_output;

use super::convert::{convert, ConvertArgs};

/// Re-convert an image every time it changes
#[derive(Args, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub convert: ConvertArgs,
}

pub fn run(args: WatchArgs, settings: &Settings, printer: &Printer) -> Result<()> {
    let input = &args.convert.input;
    let name = input.file_name().ok_or_else(|| DarkError::Watch {
        message: format!("{} is not a file", display_path(input)),
    })?;
    check_output(&args.convert, settings)?;

    // Watch the parent directory: saving may replace the file itself.
    let dir = match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
    let mut watcher = notify::recommended_watcher(tx).map_err(watch_error)?;
    watcher
        .watch(dir, RecursiveMode::NonRecursive)
        .map_err(watch_error)?;

    printer.info("Watching", &display_path(input));
    convert_reporting(&args.convert, settings, printer);

    for event in rx {
        match event {
            Ok(event) if touches(&event, name) => {
                convert_reporting(&args.convert, settings, printer);
            }
            Ok(_) => {}
            Err(e) => printer.warning("Watch", &e.to_string()),
        }
    }

    Ok(())
}

/// Reject an output that resolves to the watched input.
fn check_output(args: &ConvertArgs, settings: &Settings) -> Result<PathBuf> {
    let (output, format) = args.target(settings);
    let (output, _) = resolve_output(&output, format)?;

    if same_file(&args.input, &output) {
        return Err(DarkError::Watch {
            message: format!(
                "output {} would overwrite the watched input",
                display_path(&output)
            ),
        });
    }
    Ok(output)
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Convert once; failures are reported and do not stop the watch.
fn convert_reporting(args: &ConvertArgs, settings: &Settings, printer: &Printer) {
    if let Err(e) = convert(args, settings, printer) {
        printer.error("Failed", &e.to_string());
    }
}

/// Whether `event` changes the contents of a file called `name`.
pub fn touches(event: &Event, name: &OsStr) -> bool {
    let content_change = match event.kind {
        EventKind::Create(_) => true,
        EventKind::Modify(ModifyKind::Metadata(_)) => false,
        EventKind::Modify(_) => true,
        _ => false,
    };

    content_change
        && event
            .paths
            .iter()
            .any(|path| path.file_name() == Some(name))
}

fn watch_error(e: notify::Error) -> DarkError {
    DarkError::Watch {
        message: e.to_string(),
    }
}
