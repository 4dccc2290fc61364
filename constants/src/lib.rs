/// Glow levels for the sign's emissive materials.
pub mod emissive;

/// Timing of the power-up flicker sequence.
pub mod flicker;

/// Asset file locations.
pub mod path;

/// Post-process and camera settings.
pub mod render_settings;

/// Named glTF entries and the scene layout of the sign.
pub mod scene;
