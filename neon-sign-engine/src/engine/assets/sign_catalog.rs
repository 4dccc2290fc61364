use bevy::gltf::{Gltf, GltfMesh, GltfNode};
use bevy::prelude::*;
use constants::scene::{LABEL_MATERIAL, LABEL_NODE, LETTER_NODES, NEON_MATERIAL};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("glTF node `{0}` not found")]
    MissingNode(&'static str),
    #[error("glTF node `{0}` has no mesh")]
    NodeWithoutMesh(&'static str),
    #[error("mesh of glTF node `{0}` has no primitives")]
    EmptyMesh(&'static str),
    #[error("glTF material `{0}` not found")]
    MissingMaterial(&'static str),
}

/// Named geometry and materials the sign is built from.
#[derive(Debug, Clone, Default)]
pub struct SignCatalog {
    pub label: Option<Handle<Mesh>>,
    pub label_material: Option<Handle<StandardMaterial>>,
    /// Template cloned per letter.
    pub neon_material: Option<Handle<StandardMaterial>>,
    /// Letter geometry paired with the letter's position in the sign.
    pub letters: Vec<(usize, Handle<Mesh>)>,
}

/// Resolve the named entries of a loaded glTF.
///
/// Entries that cannot be resolved are left out and reported, so a partial file
/// still yields a usable catalog.
pub fn resolve_catalog(
    gltf: &Gltf,
    nodes: &Assets<GltfNode>,
    meshes: &Assets<GltfMesh>,
) -> (SignCatalog, Vec<CatalogError>) {
    let mut errors = Vec::new();
    let mut catalog = SignCatalog::default();

    match node_geometry(gltf, nodes, meshes, LABEL_NODE) {
        Ok(mesh) => catalog.label = Some(mesh),
        Err(err) => errors.push(err),
    }

    for (index, name) in LETTER_NODES.into_iter().enumerate() {
        match node_geometry(gltf, nodes, meshes, name) {
            Ok(mesh) => catalog.letters.push((index, mesh)),
            Err(err) => errors.push(err),
        }
    }

    catalog.label_material = gltf.named_materials.get(LABEL_MATERIAL).cloned();
    if catalog.label_material.is_none() {
        errors.push(CatalogError::MissingMaterial(LABEL_MATERIAL));
    }
    catalog.neon_material = gltf.named_materials.get(NEON_MATERIAL).cloned();
    if catalog.neon_material.is_none() {
        errors.push(CatalogError::MissingMaterial(NEON_MATERIAL));
    }

    (catalog, errors)
}

fn node_geometry(
    gltf: &Gltf,
    nodes: &Assets<GltfNode>,
    meshes: &Assets<GltfMesh>,
    name: &'static str,
) -> Result<Handle<Mesh>, CatalogError> {
    let node = gltf
        .named_nodes
        .get(name)
        .and_then(|handle| nodes.get(handle))
        .ok_or(CatalogError::MissingNode(name))?;
    let mesh = node
        .mesh
        .as_ref()
        .and_then(|handle| meshes.get(handle))
        .ok_or(CatalogError::NodeWithoutMesh(name))?;
    mesh.primitives
        .first()
        .map(|primitive| primitive.mesh.clone())
        .ok_or(CatalogError::EmptyMesh(name))
}
