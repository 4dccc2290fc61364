//! Runtime systems for the sign lifecycle and diagnostics.
//!
//! Provides the power-up flicker driver and the native FPS overlay.

/// FPS tracking for the native UI overlay.
pub mod fps_tracking;

/// Power-up flicker driver and the transition to interactive mode.
///
/// Starts the sequencer on entering `PowerUp` and advances it with frame time.
pub mod power_up;
