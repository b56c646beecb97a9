//! Credential and settings loading
//!
//! Settings live in a `security.properties` file next to the puzzle inputs:
//!
//! ```text
//! # copied from the browser cookie
//! aoc.session=53616c7465645f5f...
//! aoc.year=2022
//! ```
//!
//! The `AOC_SESSION` environment variable overrides `aoc.session`.

use crate::error::UtilsError;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use zeroize::Zeroizing;

/// Name of the properties file holding the session token
pub const PROPERTIES_FILE: &str = "security.properties";

/// Environment variable overriding the session property
pub const SESSION_ENV: &str = "AOC_SESSION";

pub const SESSION_KEY: &str = "aoc.session";
pub const YEAR_KEY: &str = "aoc.year";
pub const BASE_URL_KEY: &str = "aoc.base-url";
pub const RESOURCES_KEY: &str = "aoc.resources";
pub const STORE_INPUT_KEY: &str = "aoc.input.store";

/// Parsed `key=value` properties
///
/// Supports the subset of the `.properties` format that credential files
/// use: `=` or `:` separators, `#`/`!` comment lines and surrounding
/// whitespace. Escapes and line continuations are not interpreted.
#[derive(Default)]
pub struct Properties {
    entries: HashMap<String, Zeroizing<String>>,
}

impl Properties {
    /// Parse properties text; later keys replace earlier ones
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
            .map(|line| {
                let (key, value) = split_entry(line);
                (key.to_string(), Zeroizing::new(value.to_string()))
            })
            .collect();

        Self { entries }
    }

    /// Read and parse a properties file
    pub fn read(path: &Path) -> io::Result<Self> {
        let text = Zeroizing::new(fs::read_to_string(path)?);
        Ok(Self::parse(&text))
    }

    /// Value of a key, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|value| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

/// Process configuration for the helpers
#[derive(Default)]
pub struct Settings {
    /// Session cookie value (zeroized on drop)
    session: Option<Zeroizing<String>>,
    /// Year used when a namespace names none
    pub default_year: Option<u16>,
    /// Server to talk to instead of adventofcode.com
    pub base_url: Option<String>,
    /// Directory holding `year…/day…` input files
    pub resource_root: Option<PathBuf>,
    /// Write remotely fetched inputs to the resource root
    pub store_fetched_input: bool,
}

impl Settings {
    /// Build settings from parsed properties
    pub fn from_properties(properties: &Properties) -> Result<Self, UtilsError> {
        let default_year = properties
            .get(YEAR_KEY)
            .map(|value| parse_value(YEAR_KEY, value))
            .transpose()?;
        let store_fetched_input = properties
            .get(STORE_INPUT_KEY)
            .map(|value| parse_value(STORE_INPUT_KEY, value))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            session: properties
                .get(SESSION_KEY)
                .filter(|session| !session.is_empty())
                .map(|session| Zeroizing::new(session.to_string())),
            default_year,
            base_url: properties.get(BASE_URL_KEY).map(str::to_string),
            resource_root: properties.get(RESOURCES_KEY).map(PathBuf::from),
            store_fetched_input,
        })
    }

    /// Load settings from the first existing properties file
    ///
    /// No file at all yields default settings; the session can still come
    /// from the environment.
    pub fn load(candidates: &[PathBuf]) -> Result<Self, UtilsError> {
        let mut settings = Self::default();

        for path in candidates {
            match Properties::read(path) {
                Ok(properties) => {
                    debug!(path = %path.display(), keys = properties.len(), "loaded properties");
                    settings = Self::from_properties(&properties)?;
                    break;
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(source) => {
                    return Err(UtilsError::Io {
                        path: path.clone(),
                        source,
                    });
                }
            }
        }

        Ok(settings.with_session_override(std::env::var(SESSION_ENV).ok()))
    }

    /// Replace the session with a non-empty override
    pub fn with_session_override(mut self, session: Option<String>) -> Self {
        if let Some(session) = session.map(Zeroizing::new) {
            self.set_session(session);
        }
        self
    }

    /// Use a session obtained elsewhere, e.g. a prompt; blank values are ignored
    pub fn set_session(&mut self, session: Zeroizing<String>) {
        let trimmed = session.trim();
        if !trimmed.is_empty() {
            self.session = Some(Zeroizing::new(trimmed.to_string()));
        }
    }

    /// Session token for remote operations
    pub fn session(&self) -> Result<&str, UtilsError> {
        self.session
            .as_deref()
            .map(String::as_str)
            .ok_or(UtilsError::MissingSession)
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("session", &self.session.as_ref().map(|_| "<redacted>"))
            .field("default_year", &self.default_year)
            .field("base_url", &self.base_url)
            .field("resource_root", &self.resource_root)
            .field("store_fetched_input", &self.store_fetched_input)
            .finish()
    }
}

/// Split a line at the first `=`, `:` or whitespace after the key
fn split_entry(line: &str) -> (&str, &str) {
    let key_end = line
        .find(|c: char| c == '=' || c == ':' || c.is_whitespace())
        .unwrap_or(line.len());
    let (key, rest) = line.split_at(key_end);
    let rest = rest.trim_start();
    let value = rest
        .strip_prefix(|c: char| c == '=' || c == ':')
        .unwrap_or(rest);
    (key, value.trim())
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, UtilsError> {
    value.parse().map_err(|_| UtilsError::InvalidProperty {
        key: key.to_string(),
        value: value.to_string(),
    })
}
