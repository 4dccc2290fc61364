/// glTF scene holding the sign geometry and materials.
pub const SIGN_GLTF_PATH: &str = "final.gltf";

/// Optional runtime overrides for the glow levels, flicker timing and bloom.
pub const SIGN_CONFIG_PATH: &str = "neon_sign.config.json";
