use std::sync::Arc;

use uuid::Uuid;

use crate::{
    application::dto::{WalkDifficultyRequest, WalkDifficultyResponse},
    domain::errors::DomainError,
    infrastructure::WalkDifficultyRepository,
};

#[derive(Clone)]
pub struct WalkDifficultyService {
    repository: Arc<dyn WalkDifficultyRepository>,
}

impl WalkDifficultyService {
    pub fn new(repository: Arc<dyn WalkDifficultyRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_walk_difficulties(
        &self,
    ) -> Result<Vec<WalkDifficultyResponse>, DomainError> {
        let difficulties = self.repository.get_all().await?;
        Ok(difficulties
            .into_iter()
            .map(WalkDifficultyResponse::from)
            .collect())
    }

    pub async fn get_walk_difficulty(
        &self,
        id: Uuid,
    ) -> Result<WalkDifficultyResponse, DomainError> {
        let Some(difficulty) = self.repository.get(id).await? else {
            return Err(DomainError::NotFound);
        };
        Ok(WalkDifficultyResponse::from(difficulty))
    }

    pub async fn add_walk_difficulty(
        &self,
        request: WalkDifficultyRequest,
    ) -> Result<WalkDifficultyResponse, DomainError> {
        request.validate()?;

        let created = self.repository.add(request.into_data()).await?;
        Ok(WalkDifficultyResponse::from(created))
    }

    pub async fn update_walk_difficulty(
        &self,
        id: Uuid,
        request: WalkDifficultyRequest,
    ) -> Result<WalkDifficultyResponse, DomainError> {
        request.validate()?;

        let Some(updated) = self.repository.update(id, request.into_data()).await? else {
            return Err(DomainError::NotFound);
        };
        Ok(WalkDifficultyResponse::from(updated))
    }

    pub async fn delete_walk_difficulty(
        &self,
        id: Uuid,
    ) -> Result<WalkDifficultyResponse, DomainError> {
        let Some(deleted) = self.repository.delete(id).await? else {
            return Err(DomainError::NotFound);
        };
        Ok(WalkDifficultyResponse::from(deleted))
    }
}
