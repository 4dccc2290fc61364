use std::time::Duration;

use bevy::prelude::*;
use constants::emissive::{CLICKED_INTENSITY, DECAY_RATE, DIMMED_INTENSITY, MAX_INTENSITY};
use constants::flicker::{FLICKER_DURATION_MS, FLICKER_INTERVAL_MS};
use constants::render_settings::{BLOOM_SETTINGS, BloomConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::emissive::EmissiveLimits;
use crate::engine::flicker::FlickerTiming;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid emissive levels: {0}")]
    Emissive(&'static str),
    #[error("flicker interval must be greater than zero")]
    ZeroFlickerInterval,
    #[error("invalid bloom setting `{0}`")]
    Bloom(&'static str),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EmissiveSection {
    pub dimmed: f32,
    pub max_intensity: f32,
    pub clicked_intensity: f32,
    pub decay_rate: f32,
}

impl Default for EmissiveSection {
    fn default() -> Self {
        Self {
            dimmed: DIMMED_INTENSITY,
            max_intensity: MAX_INTENSITY,
            clicked_intensity: CLICKED_INTENSITY,
            decay_rate: DECAY_RATE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FlickerSection {
    pub interval_ms: u64,
    pub duration_ms: u64,
}

impl Default for FlickerSection {
    fn default() -> Self {
        Self {
            interval_ms: FLICKER_INTERVAL_MS,
            duration_ms: FLICKER_DURATION_MS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BloomSection {
    pub intensity: f32,
    pub luminance_threshold: f32,
    pub luminance_smoothing: f32,
    pub radius: f32,
}

impl Default for BloomSection {
    fn default() -> Self {
        Self {
            intensity: BLOOM_SETTINGS.intensity,
            luminance_threshold: BLOOM_SETTINGS.luminance_threshold,
            luminance_smoothing: BLOOM_SETTINGS.luminance_smoothing,
            radius: BLOOM_SETTINGS.radius,
        }
    }
}

/// Runtime overrides for the sign, loaded from JSON. Every field is optional.
#[derive(Asset, TypePath, Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SignConfig {
    pub emissive: EmissiveSection,
    pub flicker: FlickerSection,
    pub bloom: BloomSection,
}

/// Bloom parameters handed to the camera once configuration resolves.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SignBloom(pub BloomConfig);

impl Default for SignBloom {
    fn default() -> Self {
        Self(BLOOM_SETTINGS)
    }
}

/// Fully validated settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedConfig {
    pub limits: EmissiveLimits,
    pub timing: FlickerTiming,
    pub bloom: SignBloom,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            limits: EmissiveLimits::default(),
            timing: FlickerTiming::default(),
            bloom: SignBloom::default(),
        }
    }
}

impl SignConfig {
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        let limits = EmissiveLimits {
            dimmed: self.emissive.dimmed,
            max_intensity: self.emissive.max_intensity,
            clicked_intensity: self.emissive.clicked_intensity,
            decay_rate: self.emissive.decay_rate,
        };
        limits.validate().map_err(ConfigError::Emissive)?;

        if self.flicker.interval_ms == 0 {
            return Err(ConfigError::ZeroFlickerInterval);
        }
        let timing = FlickerTiming {
            interval: Duration::from_millis(self.flicker.interval_ms),
            duration: Duration::from_millis(self.flicker.duration_ms),
        };

        let bloom = &self.bloom;
        if !bloom.intensity.is_finite() || bloom.intensity < 0.0 {
            return Err(ConfigError::Bloom("intensity"));
        }
        if !bloom.luminance_threshold.is_finite() {
            return Err(ConfigError::Bloom("luminance_threshold"));
        }
        if !bloom.luminance_smoothing.is_finite() || bloom.luminance_smoothing < 0.0 {
            return Err(ConfigError::Bloom("luminance_smoothing"));
        }
        if !bloom.radius.is_finite() || bloom.radius < 0.0 {
            return Err(ConfigError::Bloom("radius"));
        }

        Ok(ResolvedConfig {
            limits,
            timing,
            bloom: SignBloom(BloomConfig {
                intensity: bloom.intensity,
                luminance_threshold: bloom.luminance_threshold,
                luminance_smoothing: bloom.luminance_smoothing,
                radius: bloom.radius,
            }),
        })
    }
}
