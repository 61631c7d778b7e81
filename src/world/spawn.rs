//! World domain: scene entities for the ground and platforms.

use bevy::prelude::*;

use crate::world::platform::Terrain;

/// Marker for the ground plane mesh
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for platform meshes
#[derive(Component, Debug)]
pub struct PlatformMesh;

pub(crate) fn spawn_world_scene(
    mut commands: Commands,
    terrain: Res<Terrain>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_size = terrain.ground_half_extent * 2.0;
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(ground_size, ground_size))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x10, 0x1a, 0x2b),
            metallic: 0.2,
            perceptual_roughness: 0.8,
            ..default()
        })),
        Transform::IDENTITY,
    ));

    let platform_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x1d, 0x2c, 0x4d),
        metallic: 0.3,
        perceptual_roughness: 0.4,
        ..default()
    });
    let spawn_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x2a, 0x3b, 0x63),
        perceptual_roughness: 0.5,
        ..default()
    });

    // The spawn platform is always appended last
    let spawn_index = terrain.platforms.len().saturating_sub(1);

    for (index, platform) in terrain.platforms.iter().enumerate() {
        let size = platform.size();
        let material = if index == spawn_index {
            spawn_material.clone()
        } else {
            platform_material.clone()
        };

        commands.spawn((
            PlatformMesh,
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(material),
            Transform::from_translation(platform.center()),
        ));
    }

    info!("Spawned {} platforms", terrain.platforms.len());
}
