use bevy::prelude::*;

use super::sign_meshes::SignMeshes;
use super::spawn::NeonSign;
use crate::engine::flicker::FlickerSequencer;
use crate::tools::interaction::SignInteraction;

/// Release everything that refers to the sign once its root goes away.
///
/// The sequencer's timer and pending restores are dropped, the mesh table is
/// emptied and the interaction context removed, so the pointer handlers stop
/// acting on the next frame.
pub fn tear_down_sign(
    _trigger: Trigger<OnRemove, NeonSign>,
    mut commands: Commands,
    sequencer: Option<ResMut<FlickerSequencer>>,
    meshes: Option<ResMut<SignMeshes>>,
) {
    if let Some(mut sequencer) = sequencer {
        sequencer.cancel();
    }
    if let Some(mut meshes) = meshes {
        meshes.clear();
    }
    commands.remove_resource::<FlickerSequencer>();
    commands.remove_resource::<SignInteraction>();
    info!("Neon sign torn down");
}
