//! Directional sun, ambient fill and shadow map configuration.

use bevy::pbr::DirectionalLightShadowMap;
use bevy::prelude::*;

use constants::render_settings::{
    AMBIENT_BRIGHTNESS, AMBIENT_COLOR, SHADOW_MAP_SIZE, SUN_POSITION,
};

/// Spawn the shadow-casting sun aimed at the map centre plus the warm
/// ambient fill.
pub fn spawn_lighting(commands: &mut Commands) {
    let sun_position = Vec3::from_array(SUN_POSITION);
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(sun_position).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: AMBIENT_COLOR,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });
    commands.insert_resource(DirectionalLightShadowMap {
        size: SHADOW_MAP_SIZE,
    });
}
