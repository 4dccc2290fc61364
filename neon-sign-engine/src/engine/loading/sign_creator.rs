use bevy::asset::LoadState;
use bevy::gltf::{Gltf, GltfMesh, GltfNode};
use bevy::prelude::*;

use crate::engine::assets::sign_catalog::{SignCatalog, resolve_catalog};
use crate::engine::emissive::EmissiveLimits;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::sign_loader::SignLoader;
use crate::engine::scene::spawn::{create_background_plane, spawn_neon_sign};
use crate::tools::interaction::SignInteraction;

pub fn create_sign_when_ready(
    mut loading_progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    sign_loader: Res<SignLoader>,
    limits: Option<Res<EmissiveLimits>>,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    gltf_nodes: Res<Assets<GltfNode>>,
    gltf_meshes: Res<Assets<GltfMesh>>,
) {
    if loading_progress.scene_spawned || !loading_progress.config_resolved {
        return;
    }
    // Limits are inserted through commands, so they land a frame after the config resolves.
    let Some(limits) = limits else {
        return;
    };
    let Some(handle) = sign_loader.gltf.as_ref() else {
        return;
    };

    let catalog = if let Some(gltf) = gltfs.get(handle) {
        let (catalog, errors) = resolve_catalog(gltf, &gltf_nodes, &gltf_meshes);
        for err in &errors {
            error!("Sign catalogue: {err}");
        }
        catalog
    } else if let LoadState::Failed(err) = asset_server.load_state(handle) {
        error!("Sign scene failed to load: {err}");
        SignCatalog::default()
    } else {
        return;
    };

    create_background_plane(&mut commands, &mut meshes, &mut materials);
    let sign_meshes = spawn_neon_sign(&mut commands, &catalog, &mut materials, &limits);
    info!("Neon sign ready with {} meshes", sign_meshes.len());

    commands.insert_resource(sign_meshes);
    commands.insert_resource(SignInteraction::default());
    loading_progress.scene_spawned = true;
}
