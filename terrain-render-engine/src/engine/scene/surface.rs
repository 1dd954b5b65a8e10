//! Heightmap-to-triangle-mesh surface generation.
//!
//! Every grid cell becomes two triangles with unshared vertices:
//!
//! ```text
//!    |v2 |v1
//! ---|---|---           tr1 = v0, v1, v2
//!    |v0 |v3
//! ---|---|---           tr2 = v0, v3, v1
//!    |   |
//! ```
//!
//! Winding is counter-clockwise seen from above so normals point up.
//! Adjacent cells repeat their shared edge vertices instead of
//! indexing them, and the UV buffer reuses the same emission order.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;

use crate::engine::assets::surface_descriptor::{SurfaceDataError, SurfaceDescriptor};
use constants::render_settings::GROUND_COLOR;

/// Marker for the terrain ground mesh.
#[derive(Component)]
pub struct TerrainSurface;

/// Triangle-soup buffers for a terrain surface. Buffer order matches
/// triangle emission order; no vertex is shared between triangles.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGeometry {
    pub positions: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub normals: Vec<[f32; 3]>,
}

impl SurfaceGeometry {
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// Build the triangle soup for a heightmap grid.
///
/// Pure function of the descriptor: `2 * (width-1) * (height-1)`
/// triangles, flat normals duplicated across each triangle's corners.
/// A malformed grid fails without producing any buffers.
pub fn build_surface_geometry(
    descriptor: &SurfaceDescriptor,
) -> Result<SurfaceGeometry, SurfaceDataError> {
    descriptor.validate()?;

    let quads = (descriptor.width - 1) * (descriptor.height - 1);
    let mut positions = Vec::with_capacity(quads * 6);
    let mut uvs = Vec::with_capacity(quads * 6);

    for j in 0..descriptor.height - 1 {
        for i in 0..descriptor.width - 1 {
            let [v0, v1, v2, v3] = cell_corners(descriptor, i, j);
            positions.extend_from_slice(&[v0, v1, v2, v0, v3, v1]);

            let [uv0, uv1, uv2, uv3] = cell_uvs(descriptor.width, descriptor.height, i, j);
            uvs.extend_from_slice(&[uv0, uv1, uv2, uv0, uv3, uv1]);
        }
    }

    let normals = flat_normals(&positions);
    Ok(SurfaceGeometry {
        positions,
        uvs,
        normals,
    })
}

/// The four corner points of cell `(i, j)`; `i` runs along x, `j`
/// along z, samples scale to elevation on y.
fn cell_corners(descriptor: &SurfaceDescriptor, i: usize, j: usize) -> [[f32; 3]; 4] {
    let pixel_size = descriptor.pixel_size;
    let half_width = descriptor.width as f32 / 2.0;
    let half_height = descriptor.height as f32 / 2.0;

    let x0 = (i as f32 - half_width) * pixel_size;
    let z0 = (j as f32 + 1.0 - half_height) * pixel_size;
    let x1 = x0 + pixel_size;
    let z1 = z0 - pixel_size;

    [
        [x0, descriptor.elevation(j + 1, i), z0],
        [x1, descriptor.elevation(j, i + 1), z1],
        [x0, descriptor.elevation(j, i), z1],
        [x1, descriptor.elevation(j + 1, i + 1), z0],
    ]
}

/// Texture coordinates for the cell corners, normalised to the grid
/// and laid out to match `cell_corners`.
fn cell_uvs(width: usize, height: usize, i: usize, j: usize) -> [[f32; 2]; 4] {
    let u = i as f32 / width as f32;
    let v = (height as f32 - j as f32) / height as f32;
    let du = 1.0 / width as f32;
    let dv = 1.0 / height as f32;

    [
        [u, v - dv],
        [u + du, v],
        [u, v],
        [u + du, v - dv],
    ]
}

/// One normal per triangle, repeated for each of its three corners.
/// Degenerate triangles fall back to straight up.
fn flat_normals(positions: &[[f32; 3]]) -> Vec<[f32; 3]> {
    let mut normals = Vec::with_capacity(positions.len());
    for triangle in positions.chunks_exact(3) {
        let a = Vec3::from_array(triangle[0]);
        let b = Vec3::from_array(triangle[1]);
        let c = Vec3::from_array(triangle[2]);
        let normal = (b - a).cross(c - a).try_normalize().unwrap_or(Vec3::Y);
        normals.extend_from_slice(&[normal.to_array(); 3]);
    }
    normals
}

/// Convert the buffers into a renderable triangle-list mesh.
pub fn surface_mesh(geometry: &SurfaceGeometry) -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, geometry.positions.clone());
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, geometry.uvs.clone());
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, geometry.normals.clone());
    mesh
}

/// Build the surface mesh for `descriptor` and insert exactly one
/// ground entity into the scene. The ground is double-sided and
/// receives shadows; it uses the map texture when one loaded and a
/// uniform ground colour otherwise. Fails without touching the scene
/// when the descriptor is malformed.
pub fn spawn_surface(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    descriptor: &SurfaceDescriptor,
    texture: Option<Handle<Image>>,
) -> Result<(), SurfaceDataError> {
    let geometry = build_surface_geometry(descriptor)?;
    info!("Surface mesh built: {} triangles", geometry.triangle_count());

    let material = StandardMaterial {
        base_color: match texture {
            Some(_) => Color::WHITE,
            None => GROUND_COLOR,
        },
        base_color_texture: texture,
        double_sided: true,
        cull_mode: None,
        perceptual_roughness: 1.0,
        ..default()
    };

    commands.spawn((
        Mesh3d(meshes.add(surface_mesh(&geometry))),
        MeshMaterial3d(materials.add(material)),
        Transform::default(),
        TerrainSurface,
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_descriptor(width: usize, height: usize, sample: u8) -> SurfaceDescriptor {
        SurfaceDescriptor {
            height_map: vec![vec![sample; width]; height],
            width,
            height,
            max_height: 10.0,
            pixel_size: 1.0,
        }
    }

    #[test]
    fn emits_two_triangles_per_cell() {
        for (width, height) in [(2, 2), (3, 2), (4, 7), (5, 5)] {
            let geometry = build_surface_geometry(&flat_descriptor(width, height, 64)).unwrap();
            let expected = 2 * (width - 1) * (height - 1);
            assert_eq!(geometry.triangle_count(), expected);
            assert_eq!(geometry.positions.len(), 3 * expected);
            assert_eq!(geometry.uvs.len(), 3 * expected);
            assert_eq!(geometry.normals.len(), 3 * expected);
        }
    }

    #[test]
    fn minimal_grid_matches_the_corner_formula() {
        let descriptor = SurfaceDescriptor {
            height_map: vec![vec![0, 255], vec![255, 0]],
            width: 2,
            height: 2,
            max_height: 10.0,
            pixel_size: 1.0,
        };
        let geometry = build_surface_geometry(&descriptor).unwrap();

        let v0 = [-1.0, 10.0, 0.0];
        let v1 = [0.0, 10.0, -1.0];
        let v2 = [-1.0, 0.0, -1.0];
        let v3 = [0.0, 0.0, 0.0];
        assert_eq!(geometry.positions, vec![v0, v1, v2, v0, v3, v1]);

        let mut elevations: Vec<f32> = [v0, v1, v2, v3].iter().map(|v| v[1]).collect();
        elevations.sort_by(f32::total_cmp);
        assert_eq!(elevations, vec![0.0, 0.0, 10.0, 10.0]);
    }

    #[test]
    fn horizontal_spacing_equals_pixel_size_exactly() {
        let mut descriptor = flat_descriptor(4, 4, 100);
        descriptor.pixel_size = 2.5;
        let geometry = build_surface_geometry(&descriptor).unwrap();

        // Within one cell: v1 sits one pixel right of and one pixel in
        // front of v0.
        for cell in geometry.positions.chunks_exact(6) {
            let (v0, v1, v2) = (cell[0], cell[1], cell[2]);
            assert_eq!(v1[0] - v0[0], 2.5);
            assert_eq!(v0[2] - v1[2], 2.5);
            assert_eq!(v2[0], v0[0]);
        }

        // Across cells in one row: v0 advances by exactly one pixel.
        let first_v0 = geometry.positions[0];
        let second_v0 = geometry.positions[6];
        assert_eq!(second_v0[0] - first_v0[0], 2.5);
        assert_eq!(second_v0[2], first_v0[2]);
    }

    #[test]
    fn flat_grid_normals_all_point_up() {
        let geometry = build_surface_geometry(&flat_descriptor(5, 4, 200)).unwrap();
        for normal in &geometry.normals {
            let n = Vec3::from_array(*normal);
            assert!(n.abs_diff_eq(Vec3::Y, 1e-6), "normal was {n:?}");
        }
    }

    #[test]
    fn elevation_scales_to_max_height() {
        let mut descriptor = flat_descriptor(2, 2, 255);
        descriptor.max_height = 42.0;
        let geometry = build_surface_geometry(&descriptor).unwrap();
        for position in &geometry.positions {
            assert_eq!(position[1], 42.0);
        }

        descriptor.height_map = vec![vec![0; 2]; 2];
        let geometry = build_surface_geometry(&descriptor).unwrap();
        for position in &geometry.positions {
            assert_eq!(position[1], 0.0);
        }
    }

    #[test]
    fn uv_layout_matches_the_corner_layout() {
        let geometry = build_surface_geometry(&flat_descriptor(2, 2, 0)).unwrap();
        let uv0 = [0.0, 0.5];
        let uv1 = [0.5, 1.0];
        let uv2 = [0.0, 1.0];
        let uv3 = [0.5, 0.5];
        assert_eq!(geometry.uvs, vec![uv0, uv1, uv2, uv0, uv3, uv1]);
    }

    #[test]
    fn extent_and_center_match_the_generated_footprint() {
        let mut descriptor = flat_descriptor(5, 4, 0);
        descriptor.pixel_size = 2.0;
        let geometry = build_surface_geometry(&descriptor).unwrap();

        let fold_axis = |axis: usize| {
            geometry
                .positions
                .iter()
                .fold((f32::MAX, f32::MIN), |(min, max), position| {
                    (min.min(position[axis]), max.max(position[axis]))
                })
        };
        let (min_x, max_x) = fold_axis(0);
        let (min_z, max_z) = fold_axis(2);

        // 5x4 samples make 4x3 cells of two world units each.
        assert_eq!(max_x - min_x, descriptor.extent().x);
        assert_eq!(max_z - min_z, descriptor.extent().y);
        assert_eq!(descriptor.extent(), Vec2::new(8.0, 6.0));

        assert_eq!((min_x + max_x) / 2.0, descriptor.center().x);
        assert_eq!((min_z + max_z) / 2.0, descriptor.center().y);
    }

    #[test]
    fn malformed_grid_produces_no_buffers() {
        let descriptor = SurfaceDescriptor {
            height_map: vec![vec![0, 0], vec![0]],
            width: 2,
            height: 2,
            max_height: 1.0,
            pixel_size: 1.0,
        };
        assert!(build_surface_geometry(&descriptor).is_err());
    }

    #[test]
    fn mesh_carries_all_three_attributes() {
        let geometry = build_surface_geometry(&flat_descriptor(3, 3, 10)).unwrap();
        let mesh = surface_mesh(&geometry);
        assert_eq!(
            mesh.attribute(Mesh::ATTRIBUTE_POSITION).unwrap().len(),
            geometry.positions.len()
        );
        assert_eq!(
            mesh.attribute(Mesh::ATTRIBUTE_UV_0).unwrap().len(),
            geometry.uvs.len()
        );
        assert_eq!(
            mesh.attribute(Mesh::ATTRIBUTE_NORMAL).unwrap().len(),
            geometry.normals.len()
        );
    }
}
