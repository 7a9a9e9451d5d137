//! Where catalog text comes from.
//!
//! Builds embed the default catalog; `DT_PALETTE_COMPONENTS` (or an explicit
//! path) swaps in a file on disk that is re-read on every reload.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Environment variable naming a catalog file to use instead of the embedded one.
pub const COMPONENTS_ENV: &str = "DT_PALETTE_COMPONENTS";

const EMBEDDED_COMPONENTS: &str = include_str!("../config/device_tree_components.json");

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum ComponentSource {
    /// `config/device_tree_components.json` as compiled into the crate.
    #[default]
    Embedded,
    File(PathBuf),
    /// Catalog text handed over by the caller.
    Inline(String),
}

impl ComponentSource {
    /// Honor `DT_PALETTE_COMPONENTS` when it is set to a non-empty path.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var_os(COMPONENTS_ENV))
    }

    fn from_env_value(value: Option<OsString>) -> Self {
        match value {
            Some(path) if !path.is_empty() => ComponentSource::File(PathBuf::from(path)),
            _ => ComponentSource::Embedded,
        }
    }

    /// Read the catalog text.
    pub fn read(&self) -> Result<String> {
        match self {
            ComponentSource::Embedded => Ok(EMBEDDED_COMPONENTS.to_string()),
            ComponentSource::File(path) => fs::read_to_string(path)
                .with_context(|| format!("reading components file {}", path.display())),
            ComponentSource::Inline(text) => Ok(text.clone()),
        }
    }
}

impl fmt::Display for ComponentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentSource::Embedded => f.write_str("embedded components catalog"),
            ComponentSource::File(path) => write!(f, "{}", path.display()),
            ComponentSource::Inline(_) => f.write_str("inline components catalog"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_value_selects_file_only_when_non_empty() {
        assert_eq!(
            ComponentSource::from_env_value(None),
            ComponentSource::Embedded
        );
        assert_eq!(
            ComponentSource::from_env_value(Some(OsString::new())),
            ComponentSource::Embedded
        );
        assert_eq!(
            ComponentSource::from_env_value(Some(OsString::from("/tmp/palette.json"))),
            ComponentSource::File(PathBuf::from("/tmp/palette.json"))
        );
    }

    #[test]
    fn embedded_source_reads_bundled_catalog() {
        let text = ComponentSource::Embedded.read().unwrap();
        assert!(text.contains("\"soc-main\""));
    }

    #[test]
    fn missing_file_error_names_path() {
        let source = ComponentSource::File(PathBuf::from("/nonexistent/palette.json"));
        let err = source.read().unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/palette.json"));
        assert_eq!(source.to_string(), "/nonexistent/palette.json");
    }
}
