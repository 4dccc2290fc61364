use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings};
use bevy::prelude::*;

use super::click_registry::{ClickOutcome, ClickRegistry};
use super::pointer::{PointerDownEvent, PointerRay};
use crate::engine::emissive::EmissiveLimits;
use crate::engine::scene::sign_meshes::{MeshId, SignMeshIndex, SignMeshes};
use crate::engine::scene::spawn::BackgroundPlane;

/// One intersection along the pointer ray. Hits are stored nearest first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignHit {
    pub entity: Entity,
    /// Table row the hit entity was spawned for, if any.
    pub mesh: Option<MeshId>,
    pub geometry: Option<AssetId<Mesh>>,
    pub is_background: bool,
}

/// Intersections found by this frame's pointer ray.
#[derive(Resource, Default, Debug)]
pub struct SignHits {
    pub hits: Vec<SignHit>,
}

/// Count of ray casts issued against the sign.
#[derive(Resource, Default, Debug)]
pub struct RayCastStats {
    pub queries: u64,
}

/// Hover target and clicked set, handed to every system that reacts to the pointer.
///
/// Systems read this at dispatch time, so a click always sees the hover state of
/// the frame it lands in.
#[derive(Resource, Default, Debug)]
pub struct SignInteraction {
    pub hovered: Option<MeshId>,
    pub clicks: ClickRegistry,
}

impl SignInteraction {
    fn hovered_unclicked(&self) -> Option<MeshId> {
        self.hovered.filter(|mesh| !self.clicks.contains(*mesh))
    }

    /// Run one frame of hover handling, then force clicked and idle meshes to their levels.
    pub fn apply_frame(
        &mut self,
        candidate: Option<MeshId>,
        meshes: &mut SignMeshes,
        limits: &EmissiveLimits,
    ) {
        match candidate {
            Some(found) => {
                if self.hovered != Some(found) && !self.clicks.contains(found) {
                    self.hovered = Some(found);
                }
                if let Some(hovered) = self.hovered_unclicked() {
                    meshes.set_intensity(hovered, limits.max_intensity, limits);
                }
            }
            None => {
                if let Some(hovered) = self.hovered_unclicked() {
                    let still_fading = meshes
                        .get_mut(hovered)
                        .is_some_and(|mesh| mesh.emissive.decay(limits));
                    if !still_fading {
                        self.hovered = None;
                    }
                }
            }
        }

        // Clicked and idle levels are written last so they win the frame.
        for clicked in self.clicks.iter() {
            meshes.set_intensity(clicked, limits.clicked_intensity, limits);
        }
        for (id, mesh) in meshes.iter_mut() {
            if !self.clicks.contains(id) && self.hovered != Some(id) {
                mesh.emissive.set_intensity(limits.dimmed, limits);
            }
        }
    }

    pub fn toggle_hovered(
        &mut self,
        meshes: &mut SignMeshes,
        limits: &EmissiveLimits,
    ) -> ClickOutcome {
        self.clicks.toggle(self.hovered, meshes, limits)
    }
}

/// First hit that is a selectable sign mesh. The label and the backdrop never qualify.
pub fn pick_candidate(hits: &[SignHit], meshes: &SignMeshes) -> Option<MeshId> {
    let label_geometry = meshes.label_geometry();
    hits.iter()
        .filter(|hit| !hit.is_background)
        .filter(|hit| label_geometry.is_none() || hit.geometry != label_geometry)
        .find_map(|hit| {
            hit.mesh
                .filter(|id| meshes.get(*id).is_some_and(|row| row.entity == hit.entity))
        })
}

pub fn cast_sign_ray(
    pointer_ray: Res<PointerRay>,
    targets: Query<(Option<&Mesh3d>, Option<&SignMeshIndex>, Has<BackgroundPlane>)>,
    mut ray_cast: MeshRayCast,
    mut sign_hits: ResMut<SignHits>,
    mut stats: ResMut<RayCastStats>,
) {
    sign_hits.hits.clear();
    let Some(ray) = pointer_ray.0 else {
        return;
    };

    let filter = |entity: Entity| {
        targets
            .get(entity)
            .is_ok_and(|(_, index, background)| index.is_some() || background)
    };
    let settings = MeshRayCastSettings::default()
        .with_filter(&filter)
        .never_early_exit();

    stats.queries += 1;
    for (entity, _) in ray_cast.cast_ray(ray, &settings) {
        let Ok((mesh, index, background)) = targets.get(*entity) else {
            continue;
        };
        sign_hits.hits.push(SignHit {
            entity: *entity,
            mesh: index.map(|index| index.0),
            geometry: mesh.map(|mesh| mesh.0.id()),
            is_background: background,
        });
    }
}

pub fn update_sign_interaction(
    sign_hits: Res<SignHits>,
    mut interaction: ResMut<SignInteraction>,
    mut meshes: ResMut<SignMeshes>,
    limits: Res<EmissiveLimits>,
) {
    let candidate = pick_candidate(&sign_hits.hits, &meshes);
    let previous = interaction.hovered;
    interaction.apply_frame(candidate, &mut meshes, &limits);

    if interaction.hovered != previous {
        let regime = interaction
            .hovered
            .and_then(|mesh| meshes.intensity(mesh))
            .map(|intensity| limits.regime(intensity));
        debug!(
            "Hover changed: {:?} -> {:?} ({:?})",
            previous, interaction.hovered, regime
        );
    }
}

pub fn handle_pointer_down(
    mut events: EventReader<PointerDownEvent>,
    mut interaction: ResMut<SignInteraction>,
    mut meshes: ResMut<SignMeshes>,
    limits: Res<EmissiveLimits>,
) {
    for event in events.read() {
        if event.button != MouseButton::Left {
            continue;
        }
        match interaction.toggle_hovered(&mut meshes, &limits) {
            ClickOutcome::Ignored => {}
            ClickOutcome::Locked(mesh) => info!(
                "Letter {:?} locked on ({} locked)",
                mesh,
                interaction.clicks.len()
            ),
            ClickOutcome::Released(mesh) => info!(
                "Letter {:?} released ({} locked)",
                mesh,
                interaction.clicks.len()
            ),
        }
    }
}
