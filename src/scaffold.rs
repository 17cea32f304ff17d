use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::tokenizer::fragment_path;

/// Files touched by [`scaffold`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffolded {
    pub fragment: PathBuf,
    pub source: PathBuf,
    /// Invocation line appended to the main source
    pub invocation: String,
}

/// Create a boilerplate fragment for a new device and register it in the main source
///
/// Purely numeric dimensions get a `px` unit. An existing fragment is never overwritten.
pub fn scaffold(config: &Config, name: &str, width: &str, height: &str) -> Result<Scaffolded> {
    if !is_device_name(name) {
        return Err(Error::InvalidDevice {
            reason: format!("name '{name}' may only contain letters, digits and '-'"),
        });
    }
    let width = dimension(width)?;
    let height = dimension(height)?;

    let fragment = fragment_path(&config.device_dir, name);
    if fragment.exists() {
        return Err(Error::DeviceExists { path: fragment });
    }

    fs::create_dir_all(&config.device_dir).map_err(|source| Error::CreateDir {
        path: config.device_dir.clone(),
        source,
    })?;
    fs::write(&fragment, fragment_template(name)).map_err(|source| Error::Write {
        path: fragment.clone(),
        source,
    })?;
    info!("created device fragment {}", fragment.display());

    let invocation = format!("$$device(name: \"{name}\", width: {width}, height: {height})");
    append_line(&config.source, &invocation)?;
    info!("registered device {name} in {}", config.source.display());

    Ok(Scaffolded {
        fragment,
        source: config.source.clone(),
        invocation,
    })
}

fn fragment_template(name: &str) -> String {
    format!("/* Styles for {name} */\nbody {{\n    /* Add styles here */\n}}\n")
}

fn append_line(path: &Path, line: &str) -> Result<()> {
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(write_err)?;
    write!(file, "\n{line}\n").map_err(write_err)
}

fn is_device_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn dimension(value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '%') {
        return Err(Error::InvalidDevice {
            reason: format!("dimension '{value}' may only contain letters, digits and '%'"),
        });
    }

    if value.chars().all(|c| c.is_ascii_digit()) {
        Ok(format!("{value}px"))
    } else {
        Ok(value.to_owned())
    }
}
