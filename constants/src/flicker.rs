/// Cadence of the power-up flicker, and the delay before a pulsed letter dims again.
pub const FLICKER_INTERVAL_MS: u64 = 100;

/// Total length of the power-up flicker.
pub const FLICKER_DURATION_MS: u64 = 7000;
