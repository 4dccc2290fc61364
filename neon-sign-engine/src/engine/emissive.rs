use bevy::prelude::*;
use constants::emissive::{
    CLICKED_INTENSITY, DECAY_RATE, DIMMED_INTENSITY, INTENSITY_EPSILON, MAX_INTENSITY,
};

/// Glow levels shared by every sign mesh. Fixed once configuration has loaded.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct EmissiveLimits {
    pub dimmed: f32,
    pub max_intensity: f32,
    pub clicked_intensity: f32,
    /// Intensity removed per frame while a released hover fades out.
    pub decay_rate: f32,
}

impl Default for EmissiveLimits {
    fn default() -> Self {
        Self {
            dimmed: DIMMED_INTENSITY,
            max_intensity: MAX_INTENSITY,
            clicked_intensity: CLICKED_INTENSITY,
            decay_rate: DECAY_RATE,
        }
    }
}

impl EmissiveLimits {
    /// Upper clamp bound for any write.
    pub fn ceiling(&self) -> f32 {
        self.max_intensity.max(self.clicked_intensity)
    }

    /// Check the levels are usable: finite, ordered, and with a positive decay step.
    pub fn validate(&self) -> Result<(), &'static str> {
        let values = [
            self.dimmed,
            self.max_intensity,
            self.clicked_intensity,
            self.decay_rate,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err("emissive levels must be finite");
        }
        if self.dimmed < 0.0 {
            return Err("dimmed intensity must not be negative");
        }
        if self.dimmed > self.max_intensity || self.dimmed > self.clicked_intensity {
            return Err("dimmed intensity must not exceed the hover or clicked intensity");
        }
        if self.decay_rate <= 0.0 {
            return Err("decay rate must be positive");
        }
        Ok(())
    }

    /// Classify an intensity into the regime it represents.
    pub fn regime(&self, intensity: f32) -> EmissiveRegime {
        if (intensity - self.clicked_intensity).abs() <= INTENSITY_EPSILON
            && self.clicked_intensity > self.max_intensity
        {
            EmissiveRegime::Clicked
        } else if intensity > self.dimmed + INTENSITY_EPSILON
            && intensity <= self.max_intensity + INTENSITY_EPSILON
        {
            EmissiveRegime::HoverBoosted
        } else if (intensity - self.dimmed).abs() <= INTENSITY_EPSILON {
            EmissiveRegime::Dimmed
        } else {
            EmissiveRegime::Undefined
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmissiveRegime {
    Dimmed,
    HoverBoosted,
    Clicked,
    /// Outside every regime. Never expected once the sign is interactive.
    Undefined,
}

/// Emissive colour and intensity of one sign mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissiveRecord {
    pub color: Color,
    pub intensity: f32,
}

impl EmissiveRecord {
    pub fn new(color: Color, limits: &EmissiveLimits) -> Self {
        Self {
            color,
            intensity: limits.dimmed,
        }
    }

    /// Write an intensity clamped into `[dimmed, ceiling]`. Non-finite values land on the floor.
    pub fn set_intensity(&mut self, value: f32, limits: &EmissiveLimits) {
        self.intensity = if value.is_finite() {
            value.clamp(limits.dimmed, limits.ceiling())
        } else {
            limits.dimmed
        };
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn is_above_floor(&self, limits: &EmissiveLimits) -> bool {
        self.intensity > limits.dimmed
    }

    /// Step intensity one decay increment toward the dimmed floor.
    ///
    /// Returns `false` when the record was already resting on the floor.
    pub fn decay(&mut self, limits: &EmissiveLimits) -> bool {
        if !self.is_above_floor(limits) {
            return false;
        }
        let next = self.intensity - limits.decay_rate;
        if next <= limits.dimmed + INTENSITY_EPSILON {
            self.intensity = limits.dimmed;
        } else {
            self.intensity = next;
        }
        true
    }

    /// Linear emissive value handed to the material, scaled by `gain`.
    pub fn to_linear(&self, gain: f32) -> LinearRgba {
        let base = self.color.to_linear();
        LinearRgba::rgb(
            base.red * self.intensity * gain,
            base.green * self.intensity * gain,
            base.blue * self.intensity * gain,
        )
    }
}
