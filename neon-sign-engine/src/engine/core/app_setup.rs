// Standard library and external crates
use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::render_settings::{CAMERA_LOOK_AT, CAMERA_POSITION};

// Crate engine modules
use crate::engine::assets::sign_config::SignConfig;
use crate::engine::core::app_state::{
    FpsText, SignSchedulePlugin, SignState, transition_to_power_up,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::render::SignRenderPlugin;
use crate::engine::scene::SignScenePlugin;
use crate::engine::systems::power_up::PowerUpPlugin;

// Loading
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::sign_creator::create_sign_when_ready;
use crate::engine::loading::sign_loader::{SignLoader, resolve_config_system, start_loading};

// Crate tools modules
use crate::tools::SignToolsPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SignConfig as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SignConfig>::new(&["config.json"]))
        .add_plugins(SignSchedulePlugin)
        .add_plugins(SignScenePlugin)
        .add_plugins(SignRenderPlugin)
        .add_plugins(PowerUpPlugin)
        .add_plugins(SignToolsPlugin);

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<SignLoader>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                // Loading phase systems
                resolve_config_system,
                create_sign_when_ready,
                transition_to_power_up,
            )
                .chain()
                .run_if(in_state(SignState::Loading)),
        );

    // Native conveniences: FPS overlay and escape to quit.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, (fps_text_update_system, exit_on_escape));
    }

    app
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}

// Bloom needs an HDR target; the pass itself is attached once config resolves.
fn create_bloom_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            hdr: true,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(CAMERA_POSITION))
            .looking_at(Vec3::from_array(CAMERA_LOOK_AT), Vec3::Y),
    ));
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    spawn_lighting(&mut commands);
    create_bloom_camera(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

#[cfg(not(target_arch = "wasm32"))]
fn exit_on_escape(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        info!("Escape pressed, exiting");
        exit.write(AppExit::Success);
    }
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
