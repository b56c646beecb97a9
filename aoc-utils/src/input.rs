//! Puzzle input loading: local resource files first, the server second

use crate::context::AocContext;
use crate::date::{Level, PuzzleDate};
use crate::error::UtilsError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Directories of local puzzle inputs, searched in order
///
/// Directory structure: `{root}/year{year}/day{day:02}` for the shared input
/// and `{root}/year{year}/day{day:02}a` / `…b` for part-specific inputs.
/// Files have no extension. Fetched inputs are written to the first root.
#[derive(Debug, Clone)]
pub struct ResourceStore {
    roots: Vec<PathBuf>,
}

impl ResourceStore {
    pub fn new(root: PathBuf) -> Self {
        Self { roots: vec![root] }
    }

    /// Store over several roots; earlier roots win
    pub fn with_roots(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// The first root, where inputs are stored
    pub fn root(&self) -> &Path {
        self.roots.first().map_or(Path::new(""), PathBuf::as_path)
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    fn day_file(root: &Path, date: PuzzleDate, suffix: &str) -> PathBuf {
        root.join(format!("year{}", date.year()))
            .join(format!("day{:02}{}", date.day(), suffix))
    }

    /// Path of the input shared by both levels under the first root
    pub fn shared_path(&self, date: PuzzleDate) -> PathBuf {
        Self::day_file(self.root(), date, "")
    }

    /// Path of the input of a single level under the first root
    pub fn part_path(&self, date: PuzzleDate, level: Level) -> PathBuf {
        Self::day_file(self.root(), date, &level.file_suffix().to_string())
    }

    /// Shared input from the first root that has it
    ///
    /// A missing file is the normal case; other read failures are logged and
    /// also treated as absent.
    pub fn get(&self, date: PuzzleDate) -> Option<String> {
        self.roots.iter().find_map(|root| {
            let path = Self::day_file(root, date, "");
            match fs::read_to_string(&path) {
                Ok(content) => {
                    debug!(path = %path.display(), "using local input");
                    Some(content)
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    debug!(path = %path.display(), "no local input");
                    None
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "cannot read local input");
                    None
                }
            }
        })
    }

    /// Part-specific input from the first root that has it; it only exists locally
    pub fn get_part(&self, date: PuzzleDate, level: Level) -> Result<String, UtilsError> {
        let suffix = level.file_suffix().to_string();
        for root in &self.roots {
            let path = Self::day_file(root, date, &suffix);
            match fs::read_to_string(&path) {
                Ok(content) => return Ok(content),
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(source) => return Err(UtilsError::Io { path, source }),
            }
        }

        Err(UtilsError::MissingPartInput {
            path: self.part_path(date, level),
        })
    }

    /// Store the shared input under the first root
    pub fn put(&self, date: PuzzleDate, input: &str) -> Result<(), UtilsError> {
        let path = self.shared_path(date);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|source| UtilsError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        fs::write(&path, input).map_err(|source| UtilsError::Io { path, source })
    }
}

impl AocContext {
    /// Input shared by both levels of a puzzle
    ///
    /// Prefers the local resource file; otherwise fetches the input from the
    /// server once. Errors only when no source is left.
    pub fn read_puzzle_input(&self, date: PuzzleDate) -> Result<String, UtilsError> {
        if let Some(input) = self.store.get(date) {
            return Ok(input);
        }

        let input = self
            .client
            .get_input(date.year(), date.day(), self.settings.session()?)
            .inspect_err(|e| warn!(%date, error = %e, "cannot fetch input from server"))?;
        info!(%date, bytes = input.len(), "fetched input from server");

        if self.settings.store_fetched_input
            && let Err(e) = self.store.put(date, &input)
        {
            warn!(%date, error = %e, "cannot store fetched input");
        }

        Ok(input)
    }

    /// Input of a single level, read from its `a`/`b` resource file
    pub fn read_part_input(&self, date: PuzzleDate, level: Level) -> Result<String, UtilsError> {
        self.store.get_part(date, level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date() -> PuzzleDate {
        PuzzleDate::new(2022, 6).unwrap()
    }

    #[test]
    fn test_path_format() {
        let store = ResourceStore::new(PathBuf::from("/inputs"));

        assert_eq!(
            store.shared_path(date()),
            PathBuf::from("/inputs/year2022/day06")
        );
        assert_eq!(
            store.part_path(date(), Level::One),
            PathBuf::from("/inputs/year2022/day06a")
        );
        assert_eq!(
            store.part_path(PuzzleDate::new(2021, 17).unwrap(), Level::Two),
            PathBuf::from("/inputs/year2021/day17b")
        );
    }

    #[test]
    fn test_store_roundtrip() {
        let temp = TempDir::new().unwrap();
        let store = ResourceStore::new(temp.path().to_path_buf());

        assert!(store.get(date()).is_none());

        let input = "mjqjpqmgbljsphdztnvjfqwrcgsmlb\n";
        store.put(date(), input).unwrap();

        assert_eq!(store.get(date()), Some(input.to_string()));
    }

    #[test]
    fn test_unreadable_input_is_absent() {
        let temp = TempDir::new().unwrap();
        let store = ResourceStore::new(temp.path().to_path_buf());
        // a directory where the file should be
        fs::create_dir_all(store.shared_path(date())).unwrap();

        assert!(store.get(date()).is_none());
    }

    #[test]
    fn test_roots_are_searched_in_order() {
        let test_root = TempDir::new().unwrap();
        let main_root = TempDir::new().unwrap();
        let store = ResourceStore::with_roots(vec![
            test_root.path().to_path_buf(),
            main_root.path().to_path_buf(),
        ]);
        let main = ResourceStore::new(main_root.path().to_path_buf());
        main.put(date(), "main").unwrap();
        fs::write(main.part_path(date(), Level::One), "main a").unwrap();

        assert_eq!(store.get(date()).as_deref(), Some("main"));
        assert_eq!(store.get_part(date(), Level::One).unwrap(), "main a");

        store.put(date(), "test").unwrap();
        assert_eq!(store.get(date()).as_deref(), Some("test"));
        assert!(test_root.path().join("year2022").join("day06").exists());
    }

    #[test]
    fn test_missing_part_input_names_first_root() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let store = ResourceStore::with_roots(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);

        match store.get_part(date(), Level::One) {
            Err(UtilsError::MissingPartInput { path }) => {
                assert!(path.starts_with(first.path()));
            }
            other => panic!("Expected MissingPartInput, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_part_input() {
        let temp = TempDir::new().unwrap();
        let store = ResourceStore::new(temp.path().to_path_buf());

        let result = store.get_part(date(), Level::Two);
        match result {
            Err(UtilsError::MissingPartInput { path }) => {
                assert!(path.ends_with("year2022/day06b"));
            }
            other => panic!("Expected MissingPartInput, got {:?}", other),
        }
    }

    #[test]
    fn test_part_inputs_are_separate() {
        let temp = TempDir::new().unwrap();
        let store = ResourceStore::new(temp.path().to_path_buf());
        fs::create_dir_all(temp.path().join("year2022")).unwrap();
        fs::write(store.part_path(date(), Level::One), "first").unwrap();
        fs::write(store.part_path(date(), Level::Two), "second").unwrap();

        assert_eq!(store.get_part(date(), Level::One).unwrap(), "first");
        assert_eq!(store.get_part(date(), Level::Two).unwrap(), "second");
        assert!(store.get(date()).is_none());
    }
}
