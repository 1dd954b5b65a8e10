use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

use constants::render_settings::{
    ORTHO_VIEWPORT_HEIGHT, PITCH_SENSITIVITY, YAW_SENSITIVITY, ZOOM_SENSITIVITY,
};

/// Orbit state around the map centre. Right-drag orbits, the wheel
/// zooms the orthographic viewport.
#[derive(Resource)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus: Vec3::ZERO,
            yaw: std::f32::consts::FRAC_PI_4,
            pitch: -0.6,
            distance: 400.0,
        }
    }
}

impl OrbitCamera {
    /// Pull back far enough to keep the whole map footprint in front
    /// of the near plane.
    pub fn frame_extent(&mut self, extent: Vec2) {
        self.focus = Vec3::ZERO;
        self.distance = extent.length().max(1.0) * 1.2;
    }

    /// Camera transform for the current orbit state, looking at the
    /// focus point.
    pub fn transform(&self) -> Transform {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0);
        let translation = self.focus + rotation * (Vec3::Z * self.distance);
        Transform {
            translation,
            rotation,
            ..default()
        }
    }
}

/// Spawn the scene camera with the fixed-size orthographic framing.
pub fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: ORTHO_VIEWPORT_HEIGHT,
            },
            ..OrthographicProjection::default_3d()
        }),
        OrbitCamera::default().transform(),
    ));
}

/// Right-drag orbits around the focus point, the wheel scales the
/// orthographic viewport. Pitch is clamped shy of straight down and
/// of the horizon.
pub fn camera_controller(
    mut orbit: ResMut<OrbitCamera>,
    mut camera_query: Query<(&mut Transform, &mut Projection), With<Camera3d>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
) {
    let Ok((mut camera_transform, mut projection)) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
        orbit.yaw -= mouse_delta.x * YAW_SENSITIVITY;
        orbit.pitch = (orbit.pitch - mouse_delta.y * PITCH_SENSITIVITY).clamp(-1.55, -0.05);
    }

    let mut scroll = 0.0;
    for event in scroll_events.read() {
        scroll += match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y * 0.05,
        };
    }
    if scroll.abs() > f32::EPSILON {
        if let Projection::Orthographic(ortho) = projection.as_mut() {
            ortho.scale = (ortho.scale * (1.0 - scroll * ZOOM_SENSITIVITY)).clamp(0.05, 20.0);
        }
    }

    *camera_transform = orbit.transform();
}
