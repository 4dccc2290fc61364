use bevy::prelude::*;

use crate::engine::emissive::{EmissiveLimits, EmissiveRecord};

/// Index of a mesh in the [`SignMeshes`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(pub usize);

/// Which surface of the sign a table row represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignPart {
    /// Static label glyph behind the tubes. Pulsed by the flicker, never hoverable.
    Label,
    /// Neon letter, numbered in sign order.
    Letter(usize),
}

#[derive(Debug, Clone)]
pub struct SignMesh {
    pub entity: Entity,
    pub part: SignPart,
    pub geometry: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
    pub emissive: EmissiveRecord,
}

/// Marks a spawned entity with its row in the sign mesh table.
#[derive(Component, Debug, Clone, Copy)]
pub struct SignMeshIndex(pub MeshId);

/// Index-addressed table of every mesh in the sign group.
///
/// Hover and click state refer to rows by [`MeshId`] only. The scene owns the
/// entities; rows are appended at spawn and dropped all at once on teardown.
#[derive(Resource, Default, Debug)]
pub struct SignMeshes {
    meshes: Vec<SignMesh>,
}

impl SignMeshes {
    pub fn push(&mut self, mesh: SignMesh) -> MeshId {
        self.meshes.push(mesh);
        MeshId(self.meshes.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    pub fn get(&self, id: MeshId) -> Option<&SignMesh> {
        self.meshes.get(id.0)
    }

    pub fn get_mut(&mut self, id: MeshId) -> Option<&mut SignMesh> {
        self.meshes.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MeshId, &SignMesh)> {
        self.meshes
            .iter()
            .enumerate()
            .map(|(index, mesh)| (MeshId(index), mesh))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (MeshId, &mut SignMesh)> {
        self.meshes
            .iter_mut()
            .enumerate()
            .map(|(index, mesh)| (MeshId(index), mesh))
    }

    /// Geometry of the label row, which hit testing must skip.
    pub fn label_geometry(&self) -> Option<AssetId<Mesh>> {
        self.meshes
            .iter()
            .find(|mesh| mesh.part == SignPart::Label)
            .map(|mesh| mesh.geometry.id())
    }

    pub fn intensity(&self, id: MeshId) -> Option<f32> {
        self.get(id).map(|mesh| mesh.emissive.intensity)
    }

    /// Write an intensity through the emissive model. Unknown ids are ignored.
    pub fn set_intensity(&mut self, id: MeshId, value: f32, limits: &EmissiveLimits) -> bool {
        match self.get_mut(id) {
            Some(mesh) => {
                mesh.emissive.set_intensity(value, limits);
                true
            }
            None => false,
        }
    }

    pub fn set_color(&mut self, id: MeshId, color: Color) -> bool {
        match self.get_mut(id) {
            Some(mesh) => {
                mesh.emissive.set_color(color);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.meshes.clear();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use constants::emissive::NEON_CYAN;

    /// Table of one label followed by `letters` letters, with entity ids starting at 100.
    pub(crate) fn sign_table(letters: usize, limits: &EmissiveLimits) -> SignMeshes {
        let mut table = SignMeshes::default();
        let parts = std::iter::once(SignPart::Label).chain((0..letters).map(SignPart::Letter));
        for (index, part) in parts.enumerate() {
            table.push(SignMesh {
                entity: Entity::from_raw(100 + index as u32),
                part,
                geometry: Handle::default(),
                material: Handle::default(),
                emissive: EmissiveRecord::new(NEON_CYAN, limits),
            });
        }
        table
    }

    #[test]
    fn rows_are_addressed_by_insertion_index() {
        let limits = EmissiveLimits::default();
        let table = sign_table(6, &limits);
        assert_eq!(table.len(), 7);
        assert_eq!(table.get(MeshId(0)).map(|m| m.part), Some(SignPart::Label));
        assert_eq!(
            table.get(MeshId(3)).map(|m| m.entity),
            Some(Entity::from_raw(103))
        );
        assert!(table.get(MeshId(7)).is_none());
    }

    #[test]
    fn writes_to_missing_rows_are_ignored() {
        let limits = EmissiveLimits::default();
        let mut table = sign_table(1, &limits);
        assert!(!table.set_intensity(MeshId(9), 0.5, &limits));
        assert!(!table.set_color(MeshId(9), Color::WHITE));
        assert!(table.set_intensity(MeshId(1), 0.5, &limits));
        assert_eq!(table.intensity(MeshId(1)), Some(0.5));
    }
}
