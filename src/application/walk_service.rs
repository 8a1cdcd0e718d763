use std::sync::Arc;

use uuid::Uuid;

use crate::{
    application::dto::{WalkRequest, WalkResponse},
    domain::errors::{DomainError, FieldViolation},
    infrastructure::{RegionRepository, WalkDifficultyRepository, WalkRepository},
};

/// Walk validation cross-checks the referenced region and difficulty, so
/// this service holds all three repositories.
#[derive(Clone)]
pub struct WalkService {
    walks: Arc<dyn WalkRepository>,
    regions: Arc<dyn RegionRepository>,
    difficulties: Arc<dyn WalkDifficultyRepository>,
}

impl WalkService {
    pub fn new(
        walks: Arc<dyn WalkRepository>,
        regions: Arc<dyn RegionRepository>,
        difficulties: Arc<dyn WalkDifficultyRepository>,
    ) -> Self {
        Self {
            walks,
            regions,
            difficulties,
        }
    }

    pub async fn list_walks(&self) -> Result<Vec<WalkResponse>, DomainError> {
        let walks = self.walks.get_all().await?;
        Ok(walks.into_iter().map(WalkResponse::from).collect())
    }

    pub async fn get_walk(&self, id: Uuid) -> Result<WalkResponse, DomainError> {
        let Some(walk) = self.walks.get(id).await? else {
            return Err(DomainError::NotFound);
        };
        Ok(WalkResponse::from(walk))
    }

    pub async fn add_walk(&self, request: WalkRequest) -> Result<WalkResponse, DomainError> {
        self.validate_walk(&request).await?;

        let created = self.walks.add(request.into_data()).await?;
        Ok(WalkResponse::from(created))
    }

    pub async fn update_walk(
        &self,
        id: Uuid,
        request: WalkRequest,
    ) -> Result<WalkResponse, DomainError> {
        self.validate_walk(&request).await?;

        let Some(updated) = self.walks.update(id, request.into_data()).await? else {
            return Err(DomainError::NotFound);
        };
        Ok(WalkResponse::from(updated))
    }

    pub async fn delete_walk(&self, id: Uuid) -> Result<WalkResponse, DomainError> {
        let Some(deleted) = self.walks.delete(id).await? else {
            return Err(DomainError::NotFound);
        };
        Ok(WalkResponse::from(deleted))
    }

    /// Runs the field rules, then resolves both references against their
    /// stores. All checks run regardless of earlier failures so the
    /// violation list is complete.
    async fn validate_walk(&self, request: &WalkRequest) -> Result<(), DomainError> {
        let mut violations = request.field_violations();

        if self.regions.get(request.region_id).await?.is_none() {
            violations.push(FieldViolation::new(
                "region_id",
                "region_id does not reference an existing region",
            ));
        }
        if self
            .difficulties
            .get(request.walk_difficulty_id)
            .await?
            .is_none()
        {
            violations.push(FieldViolation::new(
                "walk_difficulty_id",
                "walk_difficulty_id does not reference an existing walk difficulty",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::dto::{RegionRequest, WalkDifficultyRequest},
        application::{
            region_service::RegionService, walk_difficulty_service::WalkDifficultyService,
        },
        infrastructure::in_memory_repositories::{
            InMemoryRegionRepository, InMemoryWalkDifficultyRepository, InMemoryWalkRepository,
        },
    };

    struct Fixture {
        walk_service: WalkService,
        region_id: Uuid,
        walk_difficulty_id: Uuid,
    }

    async fn fixture() -> Fixture {
        let regions = Arc::new(InMemoryRegionRepository::new());
        let difficulties = Arc::new(InMemoryWalkDifficultyRepository::new());
        let walks = Arc::new(InMemoryWalkRepository::new());

        let region = RegionService::new(regions.clone())
            .add_region(RegionRequest {
                code: "WGN".to_string(),
                name: "Wellington".to_string(),
                area: 100.0,
                lat: -41.3,
                long: 174.8,
                population: 200_000,
            })
            .await
            .unwrap();

        let difficulty = WalkDifficultyService::new(difficulties.clone())
            .add_walk_difficulty(WalkDifficultyRequest {
                code: "Easy".to_string(),
            })
            .await
            .unwrap();

        Fixture {
            walk_service: WalkService::new(walks, regions, difficulties),
            region_id: region.id,
            walk_difficulty_id: difficulty.id,
        }
    }

    fn skyline(region_id: Uuid, walk_difficulty_id: Uuid) -> WalkRequest {
        WalkRequest {
            name: "Skyline Track".to_string(),
            length: 12.5,
            region_id,
            walk_difficulty_id,
        }
    }

    #[tokio::test]
    async fn add_walk_with_resolvable_references_succeeds() {
        let fixture = fixture().await;

        let created = fixture
            .walk_service
            .add_walk(skyline(fixture.region_id, fixture.walk_difficulty_id))
            .await
            .unwrap();

        let fetched = fixture.walk_service.get_walk(created.id).await.unwrap();
        assert_eq!(fetched.name, "Skyline Track");
        assert_eq!(fetched.region_id, fixture.region_id);
    }

    #[tokio::test]
    async fn unknown_region_reference_is_a_violation_even_when_other_fields_are_valid() {
        let fixture = fixture().await;

        let result = fixture
            .walk_service
            .add_walk(skyline(Uuid::new_v4(), fixture.walk_difficulty_id))
            .await;

        let Err(DomainError::Validation(violations)) = result else {
            panic!("expected a validation error");
        };
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "region_id");
    }

    #[tokio::test]
    async fn all_violations_are_reported_together() {
        let fixture = fixture().await;

        let request = WalkRequest {
            name: "  ".to_string(),
            length: -1.0,
            region_id: Uuid::new_v4(),
            walk_difficulty_id: Uuid::new_v4(),
        };

        let Err(DomainError::Validation(violations)) = fixture.walk_service.add_walk(request).await
        else {
            panic!("expected a validation error");
        };

        let fields: Vec<_> = violations.iter().map(|violation| violation.field).collect();
        assert_eq!(
            fields,
            vec!["name", "length", "region_id", "walk_difficulty_id"]
        );
    }

    #[tokio::test]
    async fn update_walk_on_missing_id_reports_not_found() {
        let fixture = fixture().await;

        let result = fixture
            .walk_service
            .update_walk(
                Uuid::new_v4(),
                skyline(fixture.region_id, fixture.walk_difficulty_id),
            )
            .await;

        assert!(matches!(result, Err(DomainError::NotFound)));
    }
}
