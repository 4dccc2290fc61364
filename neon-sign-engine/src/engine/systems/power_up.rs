use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::engine::core::app_state::{SignSet, SignState};
use crate::engine::emissive::EmissiveLimits;
use crate::engine::flicker::{FlickerPhase, FlickerSequencer, FlickerStatus, FlickerTiming};
use crate::engine::scene::sign_meshes::SignMeshes;

/// Random source for picking which mesh each flicker tick pulses.
#[derive(Resource)]
pub struct FlickerRng(pub SmallRng);

impl Default for FlickerRng {
    fn default() -> Self {
        Self(SmallRng::from_os_rng())
    }
}

pub fn start_flicker(mut commands: Commands, timing: Option<Res<FlickerTiming>>) {
    let timing = timing.map(|timing| *timing).unwrap_or_default();
    let mut sequencer = FlickerSequencer::new(timing);
    sequencer.start();
    info!(
        "Power-up flicker started: {} ticks every {:?}",
        timing.total_ticks(),
        timing.interval
    );
    commands.insert_resource(sequencer);
}

// Keeps running after the sequence ends so late restores still land
pub fn advance_flicker(
    time: Res<Time>,
    mut sequencer: ResMut<FlickerSequencer>,
    mut sign_meshes: ResMut<SignMeshes>,
    limits: Res<EmissiveLimits>,
    mut rng: ResMut<FlickerRng>,
    mut next_state: ResMut<NextState<SignState>>,
) {
    let status = sequencer.advance(time.delta(), &mut sign_meshes, &limits, &mut rng.0);
    if status == FlickerStatus::Finished {
        info!(
            "→ Power-up flicker finished after {} ticks, transitioning to Interactive",
            sequencer.ticks()
        );
        next_state.set(SignState::Interactive);
    }
}

/// The sequencer still has ticks to fire or restores to land.
pub fn flicker_in_progress(sequencer: Option<Res<FlickerSequencer>>) -> bool {
    sequencer.is_some_and(|sequencer| {
        sequencer.phase() != FlickerPhase::Done || sequencer.pending_restores() > 0
    })
}

pub struct PowerUpPlugin;

impl Plugin for PowerUpPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FlickerRng>()
            .add_systems(OnEnter(SignState::PowerUp), start_flicker)
            .add_systems(
                Update,
                advance_flicker.in_set(SignSet::Flicker).run_if(
                    flicker_in_progress
                        .and(resource_exists::<SignMeshes>)
                        .and(resource_exists::<EmissiveLimits>),
                ),
            );
    }
}
