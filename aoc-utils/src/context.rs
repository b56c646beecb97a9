//! Process-wide helper state

use crate::date::PuzzleDate;
use crate::error::{DateError, UtilsError};
use crate::input::ResourceStore;
use crate::settings::{PROPERTIES_FILE, Settings};
use aoc_http_client::AocClient;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

static GLOBAL: OnceLock<AocContext> = OnceLock::new();

/// Settings, local inputs and the HTTP client used by the helpers
///
/// The macros share one context per process, built on first use from the
/// calling crate's resource directory. Tests and tools can build their own
/// with [`AocContext::new`].
#[derive(Debug)]
pub struct AocContext {
    pub(crate) settings: Settings,
    pub(crate) store: ResourceStore,
    pub(crate) client: AocClient,
}

impl AocContext {
    /// Create a context reading inputs from one directory
    ///
    /// `resource_root` is used unless the settings name their own.
    pub fn new(settings: Settings, resource_root: PathBuf) -> Result<Self, UtilsError> {
        Self::with_roots(settings, vec![resource_root])
    }

    /// Create a context searching several input directories in order
    ///
    /// An `aoc.resources` setting replaces all of them.
    pub fn with_roots(
        settings: Settings,
        resource_roots: Vec<PathBuf>,
    ) -> Result<Self, UtilsError> {
        let builder = AocClient::builder();
        let builder = match &settings.base_url {
            Some(url) => builder.base_url(url.as_str())?,
            None => builder,
        };
        let client = builder.build()?;
        let store = match &settings.resource_root {
            Some(root) => ResourceStore::new(root.clone()),
            None => ResourceStore::with_roots(resource_roots),
        };

        Ok(Self {
            settings,
            store,
            client,
        })
    }

    /// The process-wide context, loading settings on first use
    ///
    /// `crate_dir` is the calling crate's manifest directory; `test_build`
    /// searches `tests/resources` before `resources`.
    pub fn global(crate_dir: &str, test_build: bool) -> Result<&'static AocContext, UtilsError> {
        if let Some(context) = GLOBAL.get() {
            return Ok(context);
        }

        let roots = resource_roots(Path::new(crate_dir), test_build);
        let candidates: Vec<PathBuf> = roots
            .iter()
            .map(|root| root.join(PROPERTIES_FILE))
            .collect();
        let settings = Settings::load(&candidates)?;
        debug!(?settings, ?roots, "initialising helper context");

        let context = AocContext::with_roots(settings, roots)?;
        Ok(GLOBAL.get_or_init(|| context))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &ResourceStore {
        &self.store
    }

    pub fn client(&self) -> &AocClient {
        &self.client
    }

    /// Resolve a namespace with the configured default year
    pub fn resolve_date(&self, namespace: &str) -> Result<PuzzleDate, DateError> {
        PuzzleDate::from_namespace(namespace, self.settings.default_year)
    }
}

/// Input directories of a crate: `resources`, preceded by `tests/resources`
/// for test builds
pub fn resource_roots(crate_dir: &Path, test_build: bool) -> Vec<PathBuf> {
    let main = crate_dir.join("resources");
    if test_build {
        vec![crate_dir.join("tests").join("resources"), main]
    } else {
        vec![main]
    }
}
