use bevy::core_pipeline::bloom::{Bloom, BloomCompositeMode, BloomPrefilter};
use bevy::prelude::*;
use constants::render_settings::{BLOOM_INTENSITY_SCALE, BLOOM_MAX_RADIUS, BloomConfig};

use crate::engine::assets::sign_config::SignBloom;

/// Map authored bloom parameters onto Bevy's bloom pass.
///
/// Luminance threshold and smoothing become the prefilter, and the radius
/// controls how far the glow spreads across the mip chain.
pub fn bloom_from_config(config: &BloomConfig) -> Bloom {
    Bloom {
        intensity: (config.intensity * BLOOM_INTENSITY_SCALE).clamp(0.0, 1.0),
        high_pass_frequency: (config.radius / BLOOM_MAX_RADIUS).clamp(0.0, 1.0),
        prefilter: BloomPrefilter {
            threshold: config.luminance_threshold.max(0.0),
            threshold_softness: config.luminance_smoothing.clamp(0.0, 1.0),
        },
        composite_mode: BloomCompositeMode::Additive,
        ..Bloom::NATURAL
    }
}

// Bloom is attached once, to cameras that do not have it yet
pub fn apply_bloom_settings(
    mut commands: Commands,
    sign_bloom: Res<SignBloom>,
    cameras: Query<Entity, (With<Camera3d>, Without<Bloom>)>,
) {
    for camera in &cameras {
        commands.entity(camera).insert(bloom_from_config(&sign_bloom.0));
        info!("Bloom attached to camera {camera}");
    }
}
