//! Placement of template asset clones from placement records.
//!
//! Records address templates by 1-based catalog id. Each realised
//! record spawns an independent scene clone, so mutating one placed
//! instance never affects another or the template itself. There is no
//! dedup: running the same batch twice doubles the placed objects.

use std::f32::consts::TAU;

use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use bevy::scene::SceneInstance;
use rand::Rng;
use thiserror::Error;

use crate::engine::assets::placement::{PlacementRecord, Rotation};

/// Placement failures. An unknown id only skips its own record while
/// the rest of the batch continues; an empty template list aborts the
/// whole batch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("placement record {index} references asset id {asset_id}, catalog has {available} assets")]
    UnknownAssetId {
        index: usize,
        asset_id: i64,
        available: usize,
    },
    #[error("placement list has {records} records but no template assets are loaded")]
    MissingTemplateAssets { records: usize },
}

/// Marker attached to the root of every placed clone.
#[derive(Component)]
pub struct PlacedObject;

/// Tag set once a placed clone's sub-tree has been made shadow-casting.
#[derive(Component)]
pub struct ShadowsApplied;

/// Convert a 1-based external asset id into a 0-based template index.
pub fn resolve_asset_index(
    index: usize,
    asset_id: i64,
    available: usize,
) -> Result<usize, PlacementError> {
    if asset_id < 1 || asset_id as usize > available {
        return Err(PlacementError::UnknownAssetId {
            index,
            asset_id,
            available,
        });
    }
    Ok(asset_id as usize - 1)
}

/// Transform for one record: position and scale applied verbatim,
/// rotation either a yaw angle around the vertical axis or, for the
/// `"full"` marker, independent random angles in `[0, 2π)` per axis.
pub fn resolve_transform<R: Rng>(record: &PlacementRecord, rng: &mut R) -> Transform {
    let rotation = match record.rotation {
        Rotation::Yaw(angle) => Quat::from_rotation_y(angle),
        Rotation::Full => Quat::from_euler(
            EulerRot::XYZ,
            rng.random_range(0.0..TAU),
            rng.random_range(0.0..TAU),
            rng.random_range(0.0..TAU),
        ),
    };
    Transform {
        translation: record.position.into(),
        rotation,
        scale: record.scale.into(),
    }
}

/// Realise every placement record, in list order, as an independent
/// scene clone inserted into the scene.
///
/// Returns the per-record errors that were skipped. An empty template
/// list with a non-empty record list is fatal and inserts nothing.
pub fn spawn_placements<R: Rng>(
    commands: &mut Commands,
    records: &[PlacementRecord],
    templates: &[Handle<Scene>],
    rng: &mut R,
) -> Result<Vec<PlacementError>, PlacementError> {
    if templates.is_empty() && !records.is_empty() {
        return Err(PlacementError::MissingTemplateAssets {
            records: records.len(),
        });
    }

    let mut skipped = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let template = match resolve_asset_index(index, record.asset_id, templates.len()) {
            Ok(template_index) => &templates[template_index],
            Err(error) => {
                warn!("Skipping placement record: {error}");
                skipped.push(error);
                continue;
            }
        };

        commands.spawn((
            SceneRoot(template.clone()),
            resolve_transform(record, rng),
            PlacedObject,
        ));
    }
    Ok(skipped)
}

/// Recursive visitor that makes every mesh under a placed clone cast
/// shadows once its scene instance has finished spawning. Casting is
/// the renderer's default; stripping `NotShadowCaster` keeps clones
/// casting even when a template opted out.
pub fn mark_shadow_casters(
    mut commands: Commands,
    scene_spawner: Res<SceneSpawner>,
    placed: Query<(Entity, &SceneInstance), (With<PlacedObject>, Without<ShadowsApplied>)>,
    children: Query<&Children>,
    meshes: Query<(), With<Mesh3d>>,
) {
    for (root, instance) in &placed {
        if !scene_spawner.instance_is_ready(**instance) {
            continue;
        }
        for entity in children.iter_descendants(root) {
            if meshes.contains(entity) {
                commands.entity(entity).remove::<NotShadowCaster>();
            }
        }
        commands.entity(root).insert(ShadowsApplied);
    }
}
