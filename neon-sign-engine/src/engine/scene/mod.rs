//! Sign scene graph and the mesh table that mirrors it.
//!
//! The backdrop and the `NeonSign` group are spawned once the glTF catalogue
//! resolves. Every mesh in the group gets a row in [`sign_meshes::SignMeshes`],
//! which the flicker, hover and click logic address by index.

use bevy::prelude::*;

/// Index-addressed table of the sign's meshes and their emissive records.
pub mod sign_meshes;

/// Backdrop plane and sign group spawning.
///
/// Clones the neon material per letter and records each spawned mesh in the table.
pub mod spawn;

/// Observer releasing flicker and interaction state when the sign root is removed.
pub mod teardown;

pub struct SignScenePlugin;

impl Plugin for SignScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<sign_meshes::SignMeshes>()
            .add_observer(teardown::tear_down_sign);
    }
}
