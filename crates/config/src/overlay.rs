//! Local `.env` overlay: `KEY=VALUE` lines layered over the process environment.

use std::{collections::BTreeMap, io::ErrorKind, path::Path};

use tracing::debug;

use crate::error::{GenerateError, Result};

/// Parse overlay text into a key/value map.
///
/// Blank lines and `#` comments are skipped. Each remaining line is split on
/// its first `=`, so `FOO=bar=baz` yields `FOO` -> `bar=baz`. Key and value
/// are trimmed. Lines without `=` or with an empty key are ignored, and a
/// repeated key keeps its last value.
pub fn parse_overlay(content: &str) -> BTreeMap<String, String> {
    let mut vars = BTreeMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        vars.insert(key.to_string(), value.trim().to_string());
    }
    vars
}

/// Read and parse the overlay at `path`. A missing file is not an error.
pub fn load_overlay(path: &Path) -> Result<Option<BTreeMap<String, String>>> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no overlay file, skipping");
            return Ok(None);
        },
        Err(source) => {
            return Err(GenerateError::Read {
                path: path.to_path_buf(),
                source,
            });
        },
    };
    let vars = parse_overlay(&content);
    debug!(path = %path.display(), count = vars.len(), "loaded overlay");
    Ok(Some(vars))
}
