use std::collections::HashSet;

use bevy::prelude::*;
use constants::emissive::NEON_CYAN;

use crate::engine::emissive::EmissiveLimits;
use crate::engine::scene::sign_meshes::{MeshId, SignMeshes};

/// Result of handling one primary pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing was hovered.
    Ignored,
    /// The hovered mesh joined the clicked set.
    Locked(MeshId),
    /// The hovered mesh left the clicked set.
    Released(MeshId),
}

/// Meshes locked on by click. Unordered; entered and left only through [`ClickRegistry::toggle`].
#[derive(Debug, Default, Clone)]
pub struct ClickRegistry {
    clicked: HashSet<MeshId>,
}

impl ClickRegistry {
    pub fn contains(&self, mesh: MeshId) -> bool {
        self.clicked.contains(&mesh)
    }

    pub fn len(&self) -> usize {
        self.clicked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clicked.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = MeshId> + '_ {
        self.clicked.iter().copied()
    }

    /// Flip membership of the currently hovered mesh.
    ///
    /// Locking turns the mesh cyan at clicked intensity; releasing drops it straight
    /// to the dimmed floor.
    pub fn toggle(
        &mut self,
        hovered: Option<MeshId>,
        meshes: &mut SignMeshes,
        limits: &EmissiveLimits,
    ) -> ClickOutcome {
        let Some(mesh) = hovered else {
            return ClickOutcome::Ignored;
        };

        if self.clicked.remove(&mesh) {
            meshes.set_intensity(mesh, limits.dimmed, limits);
            ClickOutcome::Released(mesh)
        } else {
            self.clicked.insert(mesh);
            meshes.set_color(mesh, NEON_CYAN);
            meshes.set_intensity(mesh, limits.clicked_intensity, limits);
            ClickOutcome::Locked(mesh)
        }
    }
}
