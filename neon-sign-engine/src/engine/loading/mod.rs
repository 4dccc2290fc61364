//! Asset loading and scene creation for the neon sign.
//!
//! Requests the glTF scene and the runtime config, publishes the resolved
//! settings, then spawns the sign once both have settled, successfully or not.

/// Loading progress tracking resource for the transition out of `Loading`.
pub mod progress;

/// Sign scene creation from the resolved glTF catalogue.
///
/// Spawns the backdrop and sign group and installs the mesh table and interaction context.
pub mod sign_creator;

/// glTF and config requests, and config resolution with default fallback.
pub mod sign_loader;
