use bevy::prelude::*;
use serde::Deserialize;

/// Optional per-map atmosphere settings from `config.json`. Maps
/// without the file (or without a water height) get no water plane.
#[derive(Asset, TypePath, Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    pub water_height: Option<f32>,
    pub water_color: Option<[f32; 3]>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialises_partial_config() {
        let config: MapConfig = serde_json::from_str(r#"{"waterHeight": 2.5}"#).unwrap();
        assert_eq!(config.water_height, Some(2.5));
        assert_eq!(config.water_color, None);
    }

    #[test]
    fn empty_config_means_no_water() {
        let config: MapConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.water_height, None);
    }
}
