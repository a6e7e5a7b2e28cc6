use crate::err::Result;
use serde::{Deserialize, Serialize};
use std::{path::Path, str::FromStr};

/// Settings for a run, read from a TOML file such as
///
/// ```toml
/// trace = true
/// step_limit = 5000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    /// print every intermediate state
    pub trace: bool,
    /// stop after this many rewrites; `None` runs until done
    pub step_limit: Option<usize>,
}

impl Default for Conf {
    fn default() -> Self {
        Conf { trace: false, step_limit: Some(100_000) }
    }
}

impl FromStr for Conf {
    type Err = crate::err::DriverError;
    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

impl Conf {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading configuration from `{}`.", path.display());
        std::fs::read_to_string(path)?.parse()
    }
    /// Load from `path` if one is given, otherwise fall back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            | Some(path) => Self::load(path),
            | None => {
                log::warn!("No configuration given; using the defaults.");
                Ok(Conf::default())
            }
        }
    }
}
