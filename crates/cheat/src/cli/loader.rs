use cheatapp::library::Library;
use cheatapp::model::Catalog;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Loads every `*.json` file in `dir` as a catalog whose id is the file stem.
///
/// A missing directory gives an empty library. Files that cannot be read or parsed are
/// skipped with a warning.
pub fn load_library(dir: &Path) -> Library {
    let mut library = Library::new();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "no catalog directory");
            return library;
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    for path in paths {
        let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
            warn!(path = %path.display(), "skipping catalog with non UTF-8 name");
            continue;
        };
        match read_catalog(&path) {
            Ok(catalog) => {
                debug!(id, sections = catalog.sections.len(), "loaded catalog");
                library.insert(id, catalog);
            }
            Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable catalog"),
        }
    }

    library
}

fn read_catalog(path: &Path) -> cheatapp::error::Result<Catalog> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
