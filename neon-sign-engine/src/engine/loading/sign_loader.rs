use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;
use constants::path::{SIGN_CONFIG_PATH, SIGN_GLTF_PATH};

use crate::engine::assets::sign_config::{ResolvedConfig, SignConfig};
use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct SignLoader {
    pub gltf: Option<Handle<Gltf>>,
    pub config: Option<Handle<SignConfig>>,
}

// Request the sign scene and its runtime config
pub fn start_loading(mut sign_loader: ResMut<SignLoader>, asset_server: Res<AssetServer>) {
    info!("Loading sign scene from {SIGN_GLTF_PATH}");
    sign_loader.gltf = Some(asset_server.load(SIGN_GLTF_PATH));
    sign_loader.config = Some(asset_server.load(SIGN_CONFIG_PATH));
}

/// Validated settings for a loaded config, or the built-in defaults if it is rejected.
pub fn resolve_or_default(config: &SignConfig) -> ResolvedConfig {
    match config.resolve() {
        Ok(resolved) => resolved,
        Err(err) => {
            warn!("Sign config rejected ({err}), using defaults");
            ResolvedConfig::default()
        }
    }
}

// Publish emissive, flicker and bloom settings once the config settles either way
pub fn resolve_config_system(
    mut loading_progress: ResMut<LoadingProgress>,
    sign_loader: Res<SignLoader>,
    configs: Res<Assets<SignConfig>>,
    asset_server: Res<AssetServer>,
    mut commands: Commands,
) {
    if loading_progress.config_resolved {
        return;
    }
    let Some(handle) = sign_loader.config.as_ref() else {
        return;
    };

    let resolved = if let Some(config) = configs.get(handle) {
        info!("✓ Sign config loaded");
        resolve_or_default(config)
    } else if matches!(asset_server.load_state(handle), LoadState::Failed(_)) {
        warn!("Sign config {SIGN_CONFIG_PATH} unavailable, using defaults");
        ResolvedConfig::default()
    } else {
        return;
    };

    commands.insert_resource(resolved.limits);
    commands.insert_resource(resolved.timing);
    commands.insert_resource(resolved.bloom);
    loading_progress.config_resolved = true;
}
