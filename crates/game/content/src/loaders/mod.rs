//! Loaders for reading content overrides from RON files.

pub mod catalog;
pub mod narrative;
pub mod tables;

pub use catalog::CatalogLoader;
pub use narrative::NarrativeLoader;
pub use tables::TablesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))
}
