//! Init command implementation.
//!
//! Writes a `darkicon.yaml` holding the default settings.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Settings, CONFIG_FILENAME};
use crate::error::{DarkError, Result};
use crate::output::{display_path, Printer};

/// Write a darkicon.yaml with the default settings
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing darkicon.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let settings_path = args.path.join(CONFIG_FILENAME);

    if settings_path.exists() && !args.force {
        return Err(DarkError::Exists {
            path: settings_path,
        });
    }

    let mut yaml = String::from("# darkicon settings. Colours accept names, #hex, or R,G,B.\n");
    yaml.push_str(&Settings::default().to_yaml()?);

    fs::write(&settings_path, yaml).map_err(|e| DarkError::Io {
        path: settings_path.clone(),
        message: format!("Failed to write settings: {}", e),
    })?;

    printer.status("Created", &display_path(&settings_path));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_writes_defaults() {
        let dir = tempdir().unwrap();
        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        run(args, &Printer::quiet()).unwrap();

        let settings = Settings::load(&dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "white: red\n").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        let err = run(args, &Printer::quiet()).unwrap_err();
        assert!(matches!(err, DarkError::Exists { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "white: red\n");
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "white: red\n").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };
        run(args, &Printer::quiet()).unwrap();

        let settings = Settings::discover(dir.path()).unwrap();
        assert_eq!(settings.white, "#1a1a1a");
    }
}
