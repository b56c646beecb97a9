//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use aoc_utils::{AocContext, PROPERTIES_FILE, ResourceStore, Settings};
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

/// Resolved runtime configuration
pub struct Config {
    /// Directory holding the puzzle inputs
    pub resource_root: PathBuf,
    /// Settings loaded from the properties file and environment
    pub settings: Settings,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, loading the properties file
    pub fn from_args(args: &Args) -> Result<Self, CliError> {
        let resource_root = expand_tilde(&args.resources);
        let properties = args
            .properties
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| resource_root.join(PROPERTIES_FILE));

        let settings = Settings::load(&[properties])?;
        let resource_root = settings.resource_root.clone().unwrap_or(resource_root);

        Ok(Config {
            resource_root,
            settings,
            quiet: args.quiet,
        })
    }

    /// Prompt for a session unless one is configured
    pub fn ensure_session(&mut self, reason: &str) -> Result<(), CliError> {
        if !self.settings.has_session() {
            let session = prompt_session(reason)?;
            self.settings.set_session(session);
        }
        Ok(())
    }

    /// Local inputs, for checking before a session is needed
    pub fn store(&self) -> ResourceStore {
        ResourceStore::new(self.resource_root.clone())
    }

    /// Build the helper context
    pub fn into_context(self) -> Result<AocContext, CliError> {
        Ok(AocContext::new(self.settings, self.resource_root)?)
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

/// Prompt user for session token
fn prompt_session(reason: &str) -> Result<Zeroizing<String>, CliError> {
    eprintln!("{}", reason);
    let session = Zeroizing::new(
        rpassword::prompt_password("Enter AOC session key: ")
            .map_err(|e| CliError::Config(format!("Failed to read session: {}", e)))?,
    );
    if session.trim().is_empty() {
        return Err(CliError::Config("Session token is required.".to_string()));
    }
    Ok(session)
}
