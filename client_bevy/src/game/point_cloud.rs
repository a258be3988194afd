//! Point cloud rendering as one mesh of camera-facing quads.
//!
//! Colors and indices are written once at mount. Positions are rebuilt every
//! frame from the displaced point positions and the camera basis.

use bevy::asset::RenderAssetUsages;
use bevy::camera::visibility::NoFrustumCulling;
use bevy::mesh::{Indices, PrimitiveTopology, VertexAttributeValues};
use bevy::prelude::*;

use minigame_shared::field::PointCloud;
use minigame_shared::vec3::Vec3 as CoreVec3;

use crate::coord::to_world;

use super::core::{AppView, MainCamera, MinigameEntity};
use super::scene::{init_scene, SceneState};
use super::UpdateSet;

pub struct PointCloudPlugin;

#[derive(Component)]
pub(crate) struct PointCloudMesh;

impl Plugin for PointCloudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(AppView::Minigame),
            spawn_point_cloud.after(init_scene),
        )
        .add_systems(Update, relax_field_system.in_set(UpdateSet::Simulate))
        .add_systems(Update, update_cloud_mesh.in_set(UpdateSet::Visuals));
    }
}

/// Four corners per point, counter-clockwise as seen along `-(right x up)`.
pub(crate) fn billboard_positions(
    points: &[CoreVec3],
    right: Vec3,
    up: Vec3,
    size: f32,
    out: &mut Vec<[f32; 3]>,
) {
    let r = right * (size * 0.5);
    let u = up * (size * 0.5);

    out.clear();
    out.reserve(points.len() * 4);
    for p in points {
        let c = to_world(*p);
        out.push((c - r - u).to_array());
        out.push((c + r - u).to_array());
        out.push((c + r + u).to_array());
        out.push((c - r + u).to_array());
    }
}

pub(crate) fn quad_indices(count: usize) -> Vec<u32> {
    let mut indices = Vec::with_capacity(count * 6);
    for i in 0..count as u32 {
        let base = i * 4;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    indices
}

pub(crate) fn build_cloud_mesh(cloud: &PointCloud, right: Vec3, up: Vec3, size: f32) -> Mesh {
    let mut positions = Vec::new();
    billboard_positions(cloud.current(), right, up, size, &mut positions);

    let colors: Vec<[f32; 4]> = cloud
        .colors()
        .iter()
        .flat_map(|&[r, g, b]| [[r, g, b, 1.0]; 4])
        .collect();
    let normals = vec![(-up.cross(right)).to_array(); positions.len()];

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
    .with_inserted_indices(Indices::U32(quad_indices(cloud.len())))
}

fn spawn_point_cloud(
    mut commands: Commands,
    scene: Option<Res<SceneState>>,
    q_camera: Query<&Transform, With<MainCamera>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(scene) = scene else {
        return;
    };
    let Ok(camera) = q_camera.single() else {
        return;
    };

    let size = scene.game.config().point_size;
    let mesh = build_cloud_mesh(scene.game.cloud(), *camera.right(), *camera.up(), size);

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            cull_mode: None,
            ..default()
        })),
        Transform::default(),
        // Vertices move every frame, so the mount-time bounds are stale.
        NoFrustumCulling,
        PointCloudMesh,
        MinigameEntity,
    ));
}

fn relax_field_system(scene: Option<ResMut<SceneState>>) {
    if let Some(mut scene) = scene {
        scene.game.relax_field();
    }
}

fn update_cloud_mesh(
    scene: Option<Res<SceneState>>,
    q_camera: Query<&Transform, With<MainCamera>>,
    q_cloud: Query<&Mesh3d, With<PointCloudMesh>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let Some(scene) = scene else {
        return;
    };
    let Ok(camera) = q_camera.single() else {
        return;
    };
    let Ok(handle) = q_cloud.single() else {
        return;
    };
    let Some(mesh) = meshes.get_mut(&handle.0) else {
        return;
    };

    let size = scene.game.config().point_size;
    if let Some(VertexAttributeValues::Float32x3(positions)) =
        mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
    {
        billboard_positions(
            scene.game.cloud().current(),
            *camera.right(),
            *camera.up(),
            size,
            positions,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minigame_shared::vec3::vec3;

    #[test]
    fn quad_is_centered_on_point_with_side_length() {
        let mut out = Vec::new();
        billboard_positions(&[vec3(1.0, 2.0, 3.0)], Vec3::X, Vec3::Y, 0.1, &mut out);
        assert_eq!(out.len(), 4);

        let center = out.iter().fold(Vec3::ZERO, |acc, p| acc + Vec3::from_array(*p)) / 4.0;
        assert!((center - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-6);

        let side = Vec3::from_array(out[1]) - Vec3::from_array(out[0]);
        assert!((side.length() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn quads_lie_in_camera_plane() {
        let transform = Transform::from_xyz(3.0, 4.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y);
        let forward = *transform.forward();
        let mut out = Vec::new();
        billboard_positions(
            &[vec3(0.0, 0.0, 0.0)],
            *transform.right(),
            *transform.up(),
            0.5,
            &mut out,
        );
        for corner in &out {
            assert!(Vec3::from_array(*corner).dot(forward).abs() < 1e-5);
        }
    }

    #[test]
    fn buffer_is_reused_and_overwritten() {
        let mut out = vec![[9.0; 3]; 12];
        billboard_positions(&[vec3(0.0, 0.0, 0.0)], Vec3::X, Vec3::Y, 1.0, &mut out);
        assert_eq!(out.len(), 4);
        assert_eq!(out[0], [-0.5, -0.5, 0.0]);
    }

    #[test]
    fn indices_form_two_triangles_per_quad() {
        assert_eq!(quad_indices(2), vec![0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7]);
    }

    #[test]
    fn mesh_has_four_vertices_per_point() {
        let cloud = PointCloud::from_rest(
            vec![vec3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0)],
            vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        );
        let mesh = build_cloud_mesh(&cloud, Vec3::X, Vec3::Y, 0.1);
        assert_eq!(mesh.count_vertices(), 8);
        assert_eq!(mesh.indices().map(|i| i.len()), Some(12));
    }
}
