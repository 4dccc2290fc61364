use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// World-space ray from the active camera through the cursor, refreshed every frame.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PointerRay(pub Option<Ray3d>);

/// A mouse button went down this frame.
#[derive(Event, Debug, Clone, Copy)]
pub struct PointerDownEvent {
    pub button: MouseButton,
}

pub fn update_pointer_ray(
    mut pointer_ray: ResMut<PointerRay>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
) {
    pointer_ray.0 = None;

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok((cam_xf, camera)) = cameras.single() else {
        return;
    };

    pointer_ray.0 = camera.viewport_to_world(cam_xf, cursor_pos).ok();
}

pub fn emit_pointer_down(
    buttons: Res<ButtonInput<MouseButton>>,
    mut pointer_events: EventWriter<PointerDownEvent>,
) {
    for button in buttons.get_just_pressed() {
        pointer_events.write(PointerDownEvent { button: *button });
    }
}
