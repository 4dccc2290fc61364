use bevy::prelude::*;

#[derive(Resource, Default, Debug)]
pub struct LoadingProgress {
    pub config_resolved: bool,
    pub scene_spawned: bool,
}

impl LoadingProgress {
    pub fn is_complete(&self) -> bool {
        self.config_resolved && self.scene_spawned
    }
}
