use bevy::prelude::*;

/// Loading stage flags, in the order the pipeline systems run:
/// descriptors, templates, then scene build.
#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub descriptors_loaded: bool,
    pub templates_requested: bool,
    pub templates_loaded: bool,
    pub scene_built: bool,
    pub load_failed: bool,
}
