use bevy::pbr::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;
use constants::emissive::NEON_CYAN;
use constants::render_settings::{BACKGROUND_COLOUR, EMISSIVE_GAIN};
use constants::scene::{
    BACKGROUND_PLANE_NAME, BACKGROUND_PLANE_POSITION, BACKGROUND_PLANE_SCALE,
    BACKGROUND_PLANE_SIZE, LABEL_POSITION, LABEL_SCALE, LETTER_POSITION, LETTER_SCALE,
    SIGN_ROTATION_X,
};

use super::sign_meshes::{SignMesh, SignMeshIndex, SignMeshes, SignPart};
use crate::engine::assets::sign_catalog::SignCatalog;
use crate::engine::emissive::{EmissiveLimits, EmissiveRecord};

#[derive(Component)]
pub struct BackgroundPlane;

/// Root of the sign group. Despawning it tears the sign down.
#[derive(Component)]
pub struct NeonSign;

/// Grey backdrop behind the sign, facing the camera.
pub fn create_background_plane(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let material = materials.add(StandardMaterial {
        base_color: BACKGROUND_COLOUR,
        ..default()
    });

    commands.spawn((
        Name::new(BACKGROUND_PLANE_NAME),
        BackgroundPlane,
        Mesh3d(meshes.add(Rectangle::new(BACKGROUND_PLANE_SIZE, BACKGROUND_PLANE_SIZE))),
        MeshMaterial3d(material),
        Transform::from_translation(Vec3::from_array(BACKGROUND_PLANE_POSITION))
            .with_scale(Vec3::from_array(BACKGROUND_PLANE_SCALE)),
    ));
}

/// Spawn the label and every resolved letter under a [`NeonSign`] root.
///
/// Returns the mesh table in spawn order: the label first (when present), then
/// the letters. Each letter gets its own copy of the neon material so its glow
/// can change independently.
pub fn spawn_neon_sign(
    commands: &mut Commands,
    catalog: &SignCatalog,
    materials: &mut Assets<StandardMaterial>,
    limits: &EmissiveLimits,
) -> SignMeshes {
    let mut table = SignMeshes::default();
    let rotation = Quat::from_rotation_x(SIGN_ROTATION_X);
    let root = commands
        .spawn((
            Name::new("NeonSign"),
            NeonSign,
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    if let Some(geometry) = &catalog.label {
        let material = catalog
            .label_material
            .clone()
            .unwrap_or_else(|| materials.add(StandardMaterial::default()));
        let color = materials
            .get(&material)
            .map(|label| Color::LinearRgba(label.emissive))
            .unwrap_or(Color::BLACK);

        let entity = commands
            .spawn((
                Name::new("SignLabel"),
                Mesh3d(geometry.clone()),
                MeshMaterial3d(material.clone()),
                Transform::from_translation(Vec3::from_array(LABEL_POSITION))
                    .with_rotation(rotation)
                    .with_scale(Vec3::from_array(LABEL_SCALE)),
                ChildOf(root),
            ))
            .id();
        let id = table.push(SignMesh {
            entity,
            part: SignPart::Label,
            geometry: geometry.clone(),
            material,
            emissive: EmissiveRecord::new(color, limits),
        });
        commands.entity(entity).insert(SignMeshIndex(id));
    }

    let template = catalog
        .neon_material
        .as_ref()
        .and_then(|handle| materials.get(handle))
        .cloned()
        .unwrap_or_default();

    for (index, geometry) in &catalog.letters {
        let emissive = EmissiveRecord::new(NEON_CYAN, limits);
        let material = materials.add(StandardMaterial {
            emissive: emissive.to_linear(EMISSIVE_GAIN),
            ..template.clone()
        });

        let entity = commands
            .spawn((
                Name::new(format!("SignLetter{index}")),
                Mesh3d(geometry.clone()),
                MeshMaterial3d(material.clone()),
                Transform::from_translation(Vec3::from_array(LETTER_POSITION))
                    .with_rotation(rotation)
                    .with_scale(Vec3::from_array(LETTER_SCALE)),
                NotShadowCaster,
                NotShadowReceiver,
                ChildOf(root),
            ))
            .id();
        let id = table.push(SignMesh {
            entity,
            part: SignPart::Letter(*index),
            geometry: geometry.clone(),
            material,
            emissive,
        });
        commands.entity(entity).insert(SignMeshIndex(id));
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scene::sign_meshes::MeshId;
    use bevy::ecs::system::RunSystemOnce;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Mesh>()
            .init_asset::<StandardMaterial>();
        app
    }

    fn catalog_with_letters(app: &mut App, letters: &[usize]) -> SignCatalog {
        let mut meshes = app.world_mut().resource_mut::<Assets<Mesh>>();
        SignCatalog {
            label: Some(meshes.add(Cuboid::default())),
            label_material: None,
            neon_material: None,
            letters: letters
                .iter()
                .map(|index| (*index, meshes.add(Cuboid::default())))
                .collect(),
        }
    }

    #[test]
    fn label_comes_first_and_letters_get_their_own_material() {
        let mut app = test_app();
        let catalog = catalog_with_letters(&mut app, &[0, 1, 2, 3, 4, 5]);

        let table = app
            .world_mut()
            .run_system_once(
                move |mut commands: Commands, mut materials: ResMut<Assets<StandardMaterial>>| {
                    spawn_neon_sign(
                        &mut commands,
                        &catalog,
                        &mut materials,
                        &EmissiveLimits::default(),
                    )
                },
            )
            .unwrap();

        assert_eq!(table.len(), 7);
        assert_eq!(table.get(MeshId(0)).map(|m| m.part), Some(SignPart::Label));
        assert_eq!(table.get(MeshId(6)).map(|m| m.part), Some(SignPart::Letter(5)));

        let letter_materials: Vec<_> = table
            .iter()
            .filter(|(_, mesh)| mesh.part != SignPart::Label)
            .map(|(_, mesh)| mesh.material.id())
            .collect();
        for (i, material) in letter_materials.iter().enumerate() {
            assert!(!letter_materials[i + 1..].contains(material));
        }

        let world = app.world_mut();
        for (id, mesh) in table.iter() {
            let entity = world.entity(mesh.entity);
            assert_eq!(entity.get::<SignMeshIndex>().map(|index| index.0), Some(id));
            assert!(entity.get::<ChildOf>().is_some());
        }
        let roots = world
            .query_filtered::<Entity, With<NeonSign>>()
            .iter(world)
            .count();
        assert_eq!(roots, 1);
    }

    #[test]
    fn unresolved_letters_are_left_out() {
        let mut app = test_app();
        let mut catalog = catalog_with_letters(&mut app, &[0, 2]);
        catalog.label = None;

        let table = app
            .world_mut()
            .run_system_once(
                move |mut commands: Commands, mut materials: ResMut<Assets<StandardMaterial>>| {
                    spawn_neon_sign(
                        &mut commands,
                        &catalog,
                        &mut materials,
                        &EmissiveLimits::default(),
                    )
                },
            )
            .unwrap();

        let parts: Vec<_> = table.iter().map(|(_, mesh)| mesh.part).collect();
        assert_eq!(parts, vec![SignPart::Letter(0), SignPart::Letter(2)]);
        assert!(table.label_geometry().is_none());
    }
}
