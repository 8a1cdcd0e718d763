use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    errors::DomainError,
    region::{Region, RegionData},
    walk::{Walk, WalkData},
    walk_difficulty::{WalkDifficulty, WalkDifficultyData},
};

pub mod in_memory_repositories;
pub mod postgres_repositories;

/// CRUD over regions. `Ok(None)` is the not-found signal; callers must
/// check it explicitly rather than treat it as an error.
#[async_trait]
pub trait RegionRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Region>, DomainError>;
    async fn get(&self, id: Uuid) -> Result<Option<Region>, DomainError>;
    async fn add(&self, data: RegionData) -> Result<Region, DomainError>;
    async fn update(&self, id: Uuid, data: RegionData) -> Result<Option<Region>, DomainError>;
    async fn delete(&self, id: Uuid) -> Result<Option<Region>, DomainError>;
}

#[async_trait]
pub trait WalkDifficultyRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<WalkDifficulty>, DomainError>;
    async fn get(&self, id: Uuid) -> Result<Option<WalkDifficulty>, DomainError>;
    async fn add(&self, data: WalkDifficultyData) -> Result<WalkDifficulty, DomainError>;
    async fn update(
        &self,
        id: Uuid,
        data: WalkDifficultyData,
    ) -> Result<Option<WalkDifficulty>, DomainError>;
    async fn delete(&self, id: Uuid) -> Result<Option<WalkDifficulty>, DomainError>;
}

#[async_trait]
pub trait WalkRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Walk>, DomainError>;
    async fn get(&self, id: Uuid) -> Result<Option<Walk>, DomainError>;
    async fn add(&self, data: WalkData) -> Result<Walk, DomainError>;
    async fn update(&self, id: Uuid, data: WalkData) -> Result<Option<Walk>, DomainError>;
    async fn delete(&self, id: Uuid) -> Result<Option<Walk>, DomainError>;
}
