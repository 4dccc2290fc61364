use bevy::prelude::*;
use constants::render_settings::EMISSIVE_GAIN;

use crate::engine::scene::sign_meshes::SignMeshes;

/// Copy each row's emissive colour and intensity into its material.
///
/// Materials are only touched when the value differs, so unchanged letters do
/// not trigger a re-upload.
pub fn sync_sign_materials(
    sign_meshes: Res<SignMeshes>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !sign_meshes.is_changed() {
        return;
    }

    for (_, mesh) in sign_meshes.iter() {
        let emissive = mesh.emissive.to_linear(EMISSIVE_GAIN);
        let needs_update = materials
            .get(&mesh.material)
            .is_some_and(|material| material.emissive != emissive);
        if !needs_update {
            continue;
        }
        if let Some(material) = materials.get_mut(&mesh.material) {
            material.emissive = emissive;
        }
    }
}
