//! Content pack loader.

use std::path::Path;

use crate::ContentPack;
use crate::loaders::{LoadResult, read_file};

/// Loader for content packs from RON files.
pub struct ContentLoader;

impl ContentLoader {
    /// Load and validate a content pack from a RON file.
    pub fn load(path: &Path) -> LoadResult<ContentPack> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid content pack {}: {}", path.display(), e))
    }

    /// Parse and validate a content pack from RON text.
    pub fn parse(content: &str) -> LoadResult<ContentPack> {
        let pack: ContentPack = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse content pack RON: {}", e))?;
        pack.validate()?;
        Ok(pack)
    }

    /// Render a pack as pretty RON, e.g. to bootstrap a data directory.
    pub fn to_ron(pack: &ContentPack) -> LoadResult<String> {
        ron::ser::to_string_pretty(pack, ron::ser::PrettyConfig::default())
            .map_err(|e| anyhow::anyhow!("Failed to serialize content pack: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_pack_survives_ron() {
        let pack = ContentPack::standard();
        let text = ContentLoader::to_ron(&pack).unwrap();
        assert_eq!(ContentLoader::parse(&text).unwrap(), pack);
    }

    #[test]
    fn inconsistent_pack_is_rejected() {
        let mut pack = ContentPack::standard();
        pack.items.retain(|(id, _)| id != "sword");
        let text = ContentLoader::to_ron(&pack).unwrap();
        let error = ContentLoader::parse(&text).unwrap_err();
        assert!(error.to_string().contains("sword"), "{error}");
    }

    #[test]
    fn missing_file_mentions_path() {
        let error = ContentLoader::load(Path::new("/nonexistent/content.ron")).unwrap_err();
        assert!(error.to_string().contains("/nonexistent/content.ron"));
    }
}
