use bevy::color::Color;

/// Bloom pass parameters as authored for the sign.
///
/// `radius` is expressed in the authoring tool's units and is normalised against
/// [`BLOOM_MAX_RADIUS`] when the pass is configured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomConfig {
    pub intensity: f32,
    pub luminance_threshold: f32,
    pub luminance_smoothing: f32,
    pub radius: f32,
}

pub const BLOOM_SETTINGS: BloomConfig = BloomConfig {
    intensity: 1.5,
    luminance_threshold: 0.0,
    luminance_smoothing: 1.0,
    radius: 15.0,
};

/// Authored bloom intensity is multiplied by this before it reaches the renderer.
pub const BLOOM_INTENSITY_SCALE: f32 = 0.2;

/// Radius at which the bloom spreads across the full mip chain.
pub const BLOOM_MAX_RADIUS: f32 = 15.0;

/// Emissive intensity is multiplied by this before it is written to a material,
/// so that the authored 0.05..0.6 range crosses the bloom threshold.
pub const EMISSIVE_GAIN: f32 = 40.0;

pub const CAMERA_POSITION: [f32; 3] = [0.0, 0.4, 3.0];
pub const CAMERA_LOOK_AT: [f32; 3] = [0.0, 0.4, 0.0];

pub const BACKGROUND_COLOUR: Color = Color::srgb(0.267, 0.267, 0.267);
