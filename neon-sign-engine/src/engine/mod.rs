pub mod assets;
pub mod core;
pub mod loading;
pub mod render;
pub mod scene;
pub mod systems;

pub mod emissive;
pub mod flicker;
