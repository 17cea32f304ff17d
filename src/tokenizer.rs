use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::ast::{DeviceCall, DeviceToken, Token};
use crate::error::{Error, Result};
use crate::parser::DmcssParser;

/// Extension shared by main sources and device fragments
pub const FRAGMENT_EXTENSION: &str = "dmcss";

/// Output of [`tokenize`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenized {
    /// Device tokens in invocation order
    pub tokens: Vec<DeviceToken>,
    /// Source with every well-formed device invocation removed
    pub residual: String,
}

/// Location of the fragment for device `name`
pub fn fragment_path(device_dir: &Path, name: &str) -> PathBuf {
    device_dir.join(format!("{name}.{FRAGMENT_EXTENSION}"))
}

/// Extract device invocations from import-resolved source and load their fragments
///
/// Malformed invocations are ordinary text and stay in the residual. Each match is
/// removed exactly once, so repeated identical invocations yield one token each.
pub fn tokenize(source: &str, device_dir: &Path) -> Result<Tokenized> {
    let parsed = DmcssParser::parse_input(source)?;

    let mut tokens = Vec::new();
    let mut residual = String::with_capacity(source.len());
    for token in &parsed {
        match token {
            Token::Device(call) => tokens.push(load_device(call, device_dir)?),
            other => residual.push_str(other.lexeme()),
        }
    }

    Ok(Tokenized { tokens, residual })
}

/// Names of all well-formed device invocations, in order
///
/// No fragment is read. A source without any invocation is an error.
pub fn device_names(source: &str) -> Result<Vec<String>> {
    let names: Vec<String> = DmcssParser::parse_input(source)?
        .into_iter()
        .filter_map(|token| match token {
            Token::Device(call) => Some(call.name.to_owned()),
            _ => None,
        })
        .collect();

    if names.is_empty() {
        return Err(Error::NoDevices);
    }
    Ok(names)
}

fn load_device(call: &DeviceCall, device_dir: &Path) -> Result<DeviceToken> {
    let path = fragment_path(device_dir, call.name);
    let body = fs::read_to_string(&path).map_err(|source| Error::DeviceFragment {
        name: call.name.to_owned(),
        path: path.clone(),
        source,
    })?;

    debug!(
        "device {} ({} x {}) from {}",
        call.name,
        call.width,
        call.height,
        path.display()
    );
    Ok(DeviceToken::new(call, &body))
}
