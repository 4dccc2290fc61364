//! Pointer interaction with the neon sign.
//!
//! Hover and click handling only runs once the power-up flicker has finished.
//! Each frame the pointer ray is cast against the sign group, the nearest
//! selectable letter becomes the hover target, and left clicks lock or release
//! the hovered letter.
//!
//! ## Frame Flow
//!
//! ```text
//! SignSet::Input
//!   ├─> update_pointer_ray()      cursor → world ray
//!   └─> emit_pointer_down()       mouse buttons → PointerDownEvent
//! SignSet::Click                  (Interactive state only)
//!   └─> handle_pointer_down()     toggle hovered letter in the clicked set
//! SignSet::Interaction            (Interactive state only)
//!   ├─> cast_sign_ray()           ordered hits, backdrop and label filtered later
//!   └─> update_sign_interaction() hover boost, decay, clicked override, sweep
//! ```
//!
//! Clicks are handled before the hover update, so a letter released this frame
//! is immediately treated as an ordinary hover candidate.

use bevy::prelude::*;

use crate::engine::core::app_state::{SignSet, SignState};
use interaction::{
    RayCastStats, SignHits, SignInteraction, cast_sign_ray, handle_pointer_down,
    update_sign_interaction,
};
use pointer::{PointerDownEvent, PointerRay, emit_pointer_down, update_pointer_ray};

/// Set of letters locked on by click.
///
/// Toggles membership and writes the clicked colour and intensity.
pub mod click_registry;

/// Hover state machine and the ray cast feeding it.
///
/// Picks the nearest selectable hit, applies hover boost and decay, then forces
/// clicked and idle letters to their levels.
pub mod interaction;

/// Cursor ray and pointer-down events.
pub mod pointer;

pub struct SignToolsPlugin;

impl Plugin for SignToolsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerRay>()
            .init_resource::<SignHits>()
            .init_resource::<RayCastStats>()
            .add_event::<PointerDownEvent>()
            .add_systems(
                Update,
                (
                    (update_pointer_ray, emit_pointer_down).in_set(SignSet::Input),
                    handle_pointer_down.in_set(SignSet::Click).run_if(
                        in_state(SignState::Interactive).and(resource_exists::<SignInteraction>),
                    ),
                    (cast_sign_ray, update_sign_interaction)
                        .chain()
                        .in_set(SignSet::Interaction)
                        .run_if(
                            in_state(SignState::Interactive)
                                .and(resource_exists::<SignInteraction>),
                        ),
                ),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::core::app_state::SignSchedulePlugin;
    use crate::engine::emissive::EmissiveLimits;
    use crate::engine::scene::sign_meshes::tests::sign_table;
    use crate::engine::scene::sign_meshes::{MeshId, SignMeshes};
    use bevy::state::app::StatesPlugin;

    fn aim_at_sign(mut pointer_ray: ResMut<PointerRay>) {
        pointer_ray.0 = Some(Ray3d::new(Vec3::new(0.0, 0.4, 3.0), Dir3::NEG_Z));
    }

    fn tools_app() -> App {
        let limits = EmissiveLimits::default();
        let mut app = App::new();
        app.add_plugins((
            MinimalPlugins,
            StatesPlugin,
            AssetPlugin::default(),
            SignSchedulePlugin,
            SignToolsPlugin,
        ))
        .init_asset::<Mesh>()
        .init_resource::<ButtonInput<MouseButton>>()
        .insert_resource(sign_table(6, &limits))
        .insert_resource(limits)
        .insert_resource(SignInteraction::default());
        app
    }

    fn enter(app: &mut App, state: SignState) {
        app.world_mut()
            .resource_mut::<NextState<SignState>>()
            .set(state);
        app.update();
    }

    #[test]
    fn no_ray_is_cast_until_the_sign_is_interactive() {
        let mut app = tools_app();
        app.add_systems(
            Update,
            aim_at_sign
                .after(SignSet::Input)
                .before(SignSet::Interaction),
        );

        app.update();
        enter(&mut app, SignState::PowerUp);
        for _ in 0..5 {
            app.update();
        }
        assert_eq!(app.world().resource::<RayCastStats>().queries, 0);

        enter(&mut app, SignState::Interactive);
        app.update();
        assert!(app.world().resource::<RayCastStats>().queries >= 2);
    }

    #[test]
    fn left_click_locks_the_hovered_letter() {
        let mut app = tools_app();
        enter(&mut app, SignState::Interactive);
        app.world_mut().resource_mut::<SignInteraction>().hovered = Some(MeshId(2));

        app.world_mut().send_event(PointerDownEvent {
            button: MouseButton::Right,
        });
        app.world_mut().send_event(PointerDownEvent {
            button: MouseButton::Left,
        });
        app.update();

        let limits = *app.world().resource::<EmissiveLimits>();
        let interaction = app.world().resource::<SignInteraction>();
        assert_eq!(interaction.clicks.len(), 1);
        assert!(interaction.clicks.contains(MeshId(2)));
        assert_eq!(
            app.world().resource::<SignMeshes>().intensity(MeshId(2)),
            Some(limits.clicked_intensity)
        );
    }

    #[test]
    fn clicks_during_power_up_do_nothing() {
        let mut app = tools_app();
        enter(&mut app, SignState::PowerUp);
        app.world_mut().resource_mut::<SignInteraction>().hovered = Some(MeshId(4));

        app.world_mut().send_event(PointerDownEvent {
            button: MouseButton::Left,
        });
        app.update();

        assert!(app.world().resource::<SignInteraction>().clicks.is_empty());
    }

    #[test]
    fn clicks_are_ignored_once_the_context_is_gone() {
        let mut app = tools_app();
        enter(&mut app, SignState::Interactive);
        app.world_mut().resource_mut::<SignInteraction>().hovered = Some(MeshId(3));
        app.world_mut().remove_resource::<SignInteraction>();

        app.world_mut().send_event(PointerDownEvent {
            button: MouseButton::Left,
        });
        app.update();

        let limits = *app.world().resource::<EmissiveLimits>();
        assert_eq!(
            app.world().resource::<SignMeshes>().intensity(MeshId(3)),
            Some(limits.dimmed)
        );
    }
}
