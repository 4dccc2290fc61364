use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

/// Lifecycle of the sign. Advances one way only: `Loading → PowerUp → Interactive`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum SignState {
    #[default]
    Loading,
    /// Power-up flicker is running; pointer hover is ignored.
    PowerUp,
    Interactive,
}

/// Per-frame ordering of the sign systems.
///
/// Interaction writes land after the flicker and click handlers, and materials
/// are synchronised from the final values.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignSet {
    Input,
    Flicker,
    Click,
    Interaction,
    Sync,
}

pub struct SignSchedulePlugin;

impl Plugin for SignSchedulePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<SignState>().configure_sets(
            Update,
            (
                SignSet::Input,
                SignSet::Flicker,
                SignSet::Click,
                SignSet::Interaction,
                SignSet::Sync,
            )
                .chain(),
        );
    }
}

#[derive(Component)]
pub struct FpsText;

// Leave loading once configuration and scene are both in place
pub fn transition_to_power_up(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<SignState>>,
) {
    if loading_progress.is_complete() {
        info!("→ Transitioning to PowerUp state");
        next_state.set(SignState::PowerUp);
    }
}
