use bevy::prelude::*;
use serde::Deserialize;

/// Catalog of placeable template assets from `assets.json`. Entry
/// order defines the 1-based ids placement records refer to.
#[derive(Asset, TypePath, Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct AssetCatalog {
    pub entries: Vec<CatalogEntry>,
}

/// One template asset: a display name and the glTF file it loads from.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub filepath: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialises_catalog_list() {
        let json = r#"[
            {"name": "olive tree", "filepath": "models/olive_tree.glb"},
            {"name": "house", "filepath": "models/house.glb"}
        ]"#;
        let catalog: AssetCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.entries.len(), 2);
        assert_eq!(catalog.entries[1].name, "house");
    }
}
