use super::ContentSource;
use crate::error::{Result, ShowroomError};
use crate::model::{Catalog, ContentItem, ContentKind};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Catalog backed by a JSON file.
///
/// A missing file reads as an empty catalog, which the listing pages render
/// as their "Coming Soon" state.
pub struct JsonFileSource {
    path: PathBuf,
    catalog: Catalog,
}

impl JsonFileSource {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let catalog = Self::read_catalog(&path)?;
        Ok(Self { path, catalog })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_catalog(path: &Path) -> Result<Catalog> {
        if !path.exists() {
            warn!(path = %path.display(), "content file not found, using empty catalog");
            return Ok(Catalog::default());
        }
        let content = fs::read_to_string(path).map_err(ShowroomError::Io)?;
        let catalog: Catalog =
            serde_json::from_str(&content).map_err(ShowroomError::Serialization)?;
        info!(
            path = %path.display(),
            products = catalog.products.len(),
            blogs = catalog.blogs.len(),
            "content loaded"
        );
        Ok(catalog)
    }
}

impl ContentSource for JsonFileSource {
    fn items(&self, kind: ContentKind) -> Result<Vec<ContentItem>> {
        Ok(self.catalog.items(kind).to_vec())
    }

    fn refresh(&mut self) -> Result<()> {
        debug!(path = %self.path.display(), "refreshing content");
        self.catalog = Self::read_catalog(&self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemId;

    fn write(dir: &Path, json: &str) -> PathBuf {
        let path = dir.join("content.json");
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn reads_both_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            r#"{"products": [{"id": 1, "name": "Edge Box"}], "blogs": [{"id": "b1", "title": "Post"}]}"#,
        );

        let source = JsonFileSource::open(&path).unwrap();
        let products = source.items(ContentKind::Products).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, ItemId::from("1"));
        assert_eq!(source.items(ContentKind::Blogs).unwrap()[0].title, "Post");
    }

    #[test]
    fn missing_file_is_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::open(dir.path().join("nope.json")).unwrap();
        assert!(source.items(ContentKind::Products).unwrap().is_empty());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "{not json");
        assert!(matches!(
            JsonFileSource::open(&path),
            Err(ShowroomError::Serialization(_))
        ));
    }

    #[test]
    fn serves_cached_data_until_refreshed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), r#"{"blogs": [{"id": 1, "title": "Old"}]}"#);
        let mut source = JsonFileSource::open(&path).unwrap();

        write(dir.path(), r#"{"blogs": [{"id": 1, "title": "New"}]}"#);
        assert_eq!(source.items(ContentKind::Blogs).unwrap()[0].title, "Old");

        source.refresh().unwrap();
        assert_eq!(source.items(ContentKind::Blogs).unwrap()[0].title, "New");
    }
}
