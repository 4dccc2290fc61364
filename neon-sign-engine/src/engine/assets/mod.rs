//! Asset descriptions for the neon sign.
//!
//! Handles the named entries read from the sign's glTF and the JSON runtime
//! config with its validation.

/// Named glTF nodes and materials resolved into mesh and material handles.
pub mod sign_catalog;

/// JSON runtime config with per-section defaults and validation.
pub mod sign_config;
