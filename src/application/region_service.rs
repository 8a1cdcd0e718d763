use std::sync::Arc;

use uuid::Uuid;

use crate::{
    application::dto::{RegionRequest, RegionResponse},
    domain::errors::DomainError,
    infrastructure::RegionRepository,
};

#[derive(Clone)]
pub struct RegionService {
    repository: Arc<dyn RegionRepository>,
}

impl RegionService {
    pub fn new(repository: Arc<dyn RegionRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_regions(&self) -> Result<Vec<RegionResponse>, DomainError> {
        let regions = self.repository.get_all().await?;
        Ok(regions.into_iter().map(RegionResponse::from).collect())
    }

    pub async fn get_region(&self, id: Uuid) -> Result<RegionResponse, DomainError> {
        let Some(region) = self.repository.get(id).await? else {
            return Err(DomainError::NotFound);
        };
        Ok(RegionResponse::from(region))
    }

    pub async fn add_region(&self, request: RegionRequest) -> Result<RegionResponse, DomainError> {
        request.validate()?;

        let created = self.repository.add(request.into_data()).await?;
        Ok(RegionResponse::from(created))
    }

    pub async fn update_region(
        &self,
        id: Uuid,
        request: RegionRequest,
    ) -> Result<RegionResponse, DomainError> {
        request.validate()?;

        let Some(updated) = self.repository.update(id, request.into_data()).await? else {
            return Err(DomainError::NotFound);
        };
        Ok(RegionResponse::from(updated))
    }

    pub async fn delete_region(&self, id: Uuid) -> Result<RegionResponse, DomainError> {
        let Some(deleted) = self.repository.delete(id).await? else {
            return Err(DomainError::NotFound);
        };
        Ok(RegionResponse::from(deleted))
    }
}
