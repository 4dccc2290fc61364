//! Rendering glue between the sign's emissive model and Bevy's PBR and bloom passes.

use bevy::prelude::*;

use crate::engine::assets::sign_config::SignBloom;
use crate::engine::core::app_state::SignSet;
use crate::engine::scene::sign_meshes::SignMeshes;

/// Bloom pass configuration from the resolved sign settings.
pub mod bloom;

/// Emissive record to `StandardMaterial` synchronisation, run after all writes of the frame.
pub mod emissive_sync;

pub struct SignRenderPlugin;

impl Plugin for SignRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                bloom::apply_bloom_settings.run_if(resource_exists::<SignBloom>),
                emissive_sync::sync_sign_materials
                    .in_set(SignSet::Sync)
                    .run_if(resource_exists::<SignMeshes>),
            ),
        );
    }
}
