use bevy::color::Color;

/// Resting glow of a letter that is neither hovered nor clicked.
pub const DIMMED_INTENSITY: f32 = 0.05;

/// Glow of a hovered letter, and of a letter pulsed by the flicker.
pub const MAX_INTENSITY: f32 = 0.5;

/// Glow of a letter locked on by click.
pub const CLICKED_INTENSITY: f32 = 0.6;

/// Intensity lost per frame once the pointer leaves a hovered letter.
pub const DECAY_RATE: f32 = 0.05;

/// Tolerance used to snap a decaying intensity onto the dimmed floor.
pub const INTENSITY_EPSILON: f32 = 1e-4;

/// Neon tube colour (#00ffff).
pub const NEON_CYAN: Color = Color::srgb(0.0, 1.0, 1.0);
