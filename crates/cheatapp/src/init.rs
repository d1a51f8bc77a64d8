//! # Context Setup
//!
//! A UI client needs three things before it can call the [`CheatApi`]: a data directory,
//! the configuration stored in it, and a [`Library`] of catalogs. [`initialize`] resolves
//! the first two and leaves catalog discovery to the client, which is handed the resolved
//! catalog directory.
//!
//! ## Data Directory Resolution
//!
//! 1. `data_override` (the CLI's `--data`) if given
//! 2. The `CHEAT_DATA_DIR` environment variable, if set and non-empty
//! 3. The OS data directory (via the `directories` crate)
//! 4. `./.cheat` when the OS gives no home for application data
//!
//! ## Catalog Directory Resolution
//!
//! `catalogs_override` (the CLI's `--catalogs`) wins; otherwise `catalog-dir` from the
//! config, resolved against the data directory (see [`CheatConfig::catalog_dir`]).
//!
//! Configuration errors never stop startup: an unreadable `config.json` is logged and
//! defaults are used.

use crate::api::{CheatApi, CheatPaths};
use crate::config::CheatConfig;
use crate::library::Library;
use crate::store::fs_backend::FsBackend;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DATA_DIR_ENV: &str = "CHEAT_DATA_DIR";
const FALLBACK_DATA_DIR: &str = ".cheat";

pub struct CheatContext {
    pub api: CheatApi<FsBackend>,
    pub config: CheatConfig,
}

/// Resolves paths and config, asks `load_library` for the catalogs in the resolved
/// catalog directory, and opens the bookmark store in the data directory.
pub fn initialize<F>(
    data_override: Option<PathBuf>,
    catalogs_override: Option<PathBuf>,
    load_library: F,
) -> CheatContext
where
    F: FnOnce(&Path) -> Library,
{
    let env_dir = std::env::var(DATA_DIR_ENV).ok();
    let data = resolve_data_dir(data_override, env_dir, default_data_dir);

    let config = CheatConfig::load(&data).unwrap_or_else(|e| {
        warn!(dir = %data.display(), error = %e, "unreadable config, using defaults");
        CheatConfig::default()
    });
    let catalogs = catalogs_override.unwrap_or_else(|| config.catalog_dir(&data));
    debug!(data = %data.display(), catalogs = %catalogs.display(), "resolved paths");

    let library = load_library(&catalogs);
    let backend = FsBackend::new(data.clone());
    let api = CheatApi::new(library, backend, CheatPaths { data, catalogs });

    CheatContext { api, config }
}

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "cheat", "cheat")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
}

fn resolve_data_dir<F>(
    data_override: Option<PathBuf>,
    env_dir: Option<String>,
    os_default: F,
) -> PathBuf
where
    F: FnOnce() -> PathBuf,
{
    if let Some(dir) = data_override {
        return dir;
    }
    match env_dir {
        Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => os_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Catalog;
    use std::fs;
    use tempfile::TempDir;

    fn os_default() -> PathBuf {
        PathBuf::from("/os/data")
    }

    #[test]
    fn override_beats_environment() {
        let dir = resolve_data_dir(
            Some(PathBuf::from("/explicit")),
            Some("/from-env".into()),
            os_default,
        );
        assert_eq!(dir, PathBuf::from("/explicit"));
    }

    #[test]
    fn environment_beats_os_default() {
        let dir = resolve_data_dir(None, Some("/from-env".into()), os_default);
        assert_eq!(dir, PathBuf::from("/from-env"));
    }

    #[test]
    fn blank_environment_is_ignored() {
        let dir = resolve_data_dir(None, Some("  ".into()), os_default);
        assert_eq!(dir, PathBuf::from("/os/data"));
    }

    #[test]
    fn initialize_uses_configured_catalog_dir() {
        let data = TempDir::new().unwrap();
        fs::write(
            data.path().join("config.json"),
            r#"{"catalog-dir":"sheets"}"#,
        )
        .unwrap();

        let mut seen = PathBuf::new();
        let ctx = initialize(Some(data.path().to_path_buf()), None, |dir| {
            seen = dir.to_path_buf();
            Library::new().with_catalog("python", Catalog::new("Python", ""))
        });

        assert_eq!(seen, data.path().join("sheets"));
        assert_eq!(ctx.api.paths().catalogs, data.path().join("sheets"));
        assert_eq!(ctx.api.library().len(), 1);
    }

    #[test]
    fn catalogs_override_wins_and_bad_config_falls_back() {
        let data = TempDir::new().unwrap();
        fs::write(data.path().join("config.json"), "{ nope").unwrap();

        let ctx = initialize(
            Some(data.path().to_path_buf()),
            Some(PathBuf::from("/elsewhere")),
            |_| Library::new(),
        );
        assert_eq!(ctx.api.paths().catalogs, PathBuf::from("/elsewhere"));
        assert_eq!(ctx.config, CheatConfig::default());
    }
}
