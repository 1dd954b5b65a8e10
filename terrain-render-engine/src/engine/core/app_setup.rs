use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::assets::asset_catalog::AssetCatalog;
use crate::engine::assets::map_assets::{MapAssets, MapSelection};
use crate::engine::assets::map_config::MapConfig;
use crate::engine::assets::placement::PlacementManifest;
use crate::engine::assets::surface_descriptor::SurfaceDescriptor;
use crate::engine::camera::orbit_camera::{OrbitCamera, camera_controller, spawn_camera};
use crate::engine::core::app_state::{AppState, MapNameText, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::descriptor_loader::{check_descriptor_loading, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::template_loader::load_templates;
use crate::engine::scene::builder::build_scene_when_ready;
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::scene::placement::mark_shadow_casters;
use constants::maps::DEFAULT_MAP;
use constants::render_settings::CLEAR_COLOR;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Every JSON contract shares the .json extension; typed loads
        // pick the matching loader per asset type.
        .add_plugins(JsonAssetPlugin::<SurfaceDescriptor>::new(&["json"]))
        .add_plugins(JsonAssetPlugin::<PlacementManifest>::new(&["json"]))
        .add_plugins(JsonAssetPlugin::<AssetCatalog>::new(&["json"]))
        .add_plugins(JsonAssetPlugin::<MapConfig>::new(&["json"]))
        .insert_resource(ClearColor(CLEAR_COLOR))
        .insert_resource(select_map())
        .init_resource::<MapAssets>()
        .init_resource::<LoadingProgress>()
        .init_resource::<OrbitCamera>();

    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                check_descriptor_loading,
                load_templates,
                build_scene_when_ready,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            (camera_controller, mark_shadow_casters).run_if(in_state(AppState::Running)),
        );

    app
}

/// Map picked from the first command-line argument on native builds;
/// web builds always open the default map.
fn select_map() -> MapSelection {
    #[cfg(not(target_arch = "wasm32"))]
    if let Some(name) = std::env::args().nth(1) {
        return MapSelection { name };
    }

    MapSelection {
        name: DEFAULT_MAP.to_string(),
    }
}

fn setup(mut commands: Commands, map: Res<MapSelection>) {
    spawn_lighting(&mut commands);
    spawn_camera(&mut commands);
    create_map_overlay(&mut commands, &map.name);
}

/// Small overlay naming the map being viewed.
fn create_map_overlay(commands: &mut Commands, map_name: &str) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(map_name.to_string()),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 1.0, 1.0)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                MapNameText,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
