use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    domain::{
        errors::DomainError,
        region::{Region, RegionData},
        walk::{Walk, WalkData},
        walk_difficulty::{WalkDifficulty, WalkDifficultyData},
    },
    infrastructure::{RegionRepository, WalkDifficultyRepository, WalkRepository},
};

// Map-backed stand-ins for the Postgres repositories, used by the contract
// tests and handy for local development without a database.

#[derive(Default)]
pub struct InMemoryRegionRepository {
    regions: RwLock<HashMap<Uuid, Region>>,
}

impl InMemoryRegionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RegionRepository for InMemoryRegionRepository {
    async fn get_all(&self) -> Result<Vec<Region>, DomainError> {
        Ok(self.regions.read().await.values().cloned().collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Region>, DomainError> {
        Ok(self.regions.read().await.get(&id).cloned())
    }

    async fn add(&self, data: RegionData) -> Result<Region, DomainError> {
        let region = data.into_region(Uuid::new_v4());
        self.regions
            .write()
            .await
            .insert(region.id, region.clone());
        Ok(region)
    }

    async fn update(&self, id: Uuid, data: RegionData) -> Result<Option<Region>, DomainError> {
        let mut regions = self.regions.write().await;
        let Some(existing) = regions.get_mut(&id) else {
            return Ok(None);
        };

        *existing = data.into_region(id);
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Region>, DomainError> {
        Ok(self.regions.write().await.remove(&id))
    }
}

#[derive(Default)]
pub struct InMemoryWalkDifficultyRepository {
    difficulties: RwLock<HashMap<Uuid, WalkDifficulty>>,
}

impl InMemoryWalkDifficultyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WalkDifficultyRepository for InMemoryWalkDifficultyRepository {
    async fn get_all(&self) -> Result<Vec<WalkDifficulty>, DomainError> {
        Ok(self.difficulties.read().await.values().cloned().collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<WalkDifficulty>, DomainError> {
        Ok(self.difficulties.read().await.get(&id).cloned())
    }

    async fn add(&self, data: WalkDifficultyData) -> Result<WalkDifficulty, DomainError> {
        let difficulty = data.into_walk_difficulty(Uuid::new_v4());
        self.difficulties
            .write()
            .await
            .insert(difficulty.id, difficulty.clone());
        Ok(difficulty)
    }

    async fn update(
        &self,
        id: Uuid,
        data: WalkDifficultyData,
    ) -> Result<Option<WalkDifficulty>, DomainError> {
        let mut difficulties = self.difficulties.write().await;
        let Some(existing) = difficulties.get_mut(&id) else {
            return Ok(None);
        };

        *existing = data.into_walk_difficulty(id);
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<WalkDifficulty>, DomainError> {
        Ok(self.difficulties.write().await.remove(&id))
    }
}

#[derive(Default)]
pub struct InMemoryWalkRepository {
    walks: RwLock<HashMap<Uuid, Walk>>,
}

impl InMemoryWalkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WalkRepository for InMemoryWalkRepository {
    async fn get_all(&self) -> Result<Vec<Walk>, DomainError> {
        Ok(self.walks.read().await.values().cloned().collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Walk>, DomainError> {
        Ok(self.walks.read().await.get(&id).cloned())
    }

    async fn add(&self, data: WalkData) -> Result<Walk, DomainError> {
        let walk = data.into_walk(Uuid::new_v4());
        self.walks.write().await.insert(walk.id, walk.clone());
        Ok(walk)
    }

    async fn update(&self, id: Uuid, data: WalkData) -> Result<Option<Walk>, DomainError> {
        let mut walks = self.walks.write().await;
        let Some(existing) = walks.get_mut(&id) else {
            return Ok(None);
        };

        *existing = data.into_walk(id);
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Walk>, DomainError> {
        Ok(self.walks.write().await.remove(&id))
    }
}
