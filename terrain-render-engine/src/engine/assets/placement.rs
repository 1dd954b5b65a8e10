use bevy::prelude::*;
use serde::{Deserialize, Deserializer, de};

/// Marker string requesting independent random rotation on all axes.
const FULL_ROTATION: &str = "full";

/// Object placement list loaded from `maps/<map>/placement.json`.
#[derive(Asset, TypePath, Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct PlacementManifest {
    pub records: Vec<PlacementRecord>,
}

/// One placed object. `asset_id` is the 1-based index into the
/// template catalog; it is converted to 0-based indexing at the
/// placement boundary and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRecord {
    pub asset_id: i64,
    pub position: Point3,
    pub rotation: Rotation,
    pub scale: Point3,
}

/// `{x, y, z}` triple as the JSON files spell it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Point3> for Vec3 {
    fn from(point: Point3) -> Vec3 {
        Vec3::new(point.x, point.y, point.z)
    }
}

/// Rotation field of a placement record: either a yaw angle in
/// radians around the vertical axis, or the literal `"full"` marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rotation {
    Yaw(f32),
    Full,
}

impl<'de> Deserialize<'de> for Rotation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Angle(f32),
            Marker(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Angle(angle) => Ok(Rotation::Yaw(angle)),
            Raw::Marker(marker) if marker == FULL_ROTATION => Ok(Rotation::Full),
            Raw::Marker(marker) => Err(de::Error::custom(format!(
                "unknown rotation marker {marker:?}, expected a number or \"full\""
            ))),
        }
    }
}
