use std::sync::Arc;

use crate::application::{
    region_service::RegionService, walk_difficulty_service::WalkDifficultyService,
    walk_service::WalkService,
};

#[derive(Clone)]
pub struct AppState {
    pub region_service: Arc<RegionService>,
    pub walk_difficulty_service: Arc<WalkDifficultyService>,
    pub walk_service: Arc<WalkService>,
}

impl AppState {
    pub fn new(
        region_service: Arc<RegionService>,
        walk_difficulty_service: Arc<WalkDifficultyService>,
        walk_service: Arc<WalkService>,
    ) -> Self {
        Self {
            region_service,
            walk_difficulty_service,
            walk_service,
        }
    }
}
