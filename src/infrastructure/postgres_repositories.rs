use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
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

// Every operation is a single autocommitted statement; mutations use
// RETURNING so the caller gets the persisted snapshot without a second
// round trip.

#[derive(Clone)]
pub struct PostgresRegionRepository {
    pool: PgPool,
}

impl PostgresRegionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegionRepository for PostgresRegionRepository {
    async fn get_all(&self) -> Result<Vec<Region>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, code, name, area, lat, long, population FROM regions ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.iter().map(row_to_region).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Region>, DomainError> {
        let maybe_row =
            sqlx::query("SELECT id, code, name, area, lat, long, population FROM regions WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(maybe_row.as_ref().map(row_to_region))
    }

    async fn add(&self, data: RegionData) -> Result<Region, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO regions (id, code, name, area, lat, long, population)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, code, name, area, lat, long, population
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.code)
        .bind(data.name)
        .bind(data.area)
        .bind(data.lat)
        .bind(data.long)
        .bind(data.population)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row_to_region(&row))
    }

    async fn update(&self, id: Uuid, data: RegionData) -> Result<Option<Region>, DomainError> {
        let maybe_row = sqlx::query(
            r#"
            UPDATE regions
            SET code = $2, name = $3, area = $4, lat = $5, long = $6, population = $7
            WHERE id = $1
            RETURNING id, code, name, area, lat, long, population
            "#,
        )
        .bind(id)
        .bind(data.code)
        .bind(data.name)
        .bind(data.area)
        .bind(data.lat)
        .bind(data.long)
        .bind(data.population)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(maybe_row.as_ref().map(row_to_region))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Region>, DomainError> {
        let maybe_row = sqlx::query(
            r#"
            DELETE FROM regions
            WHERE id = $1
            RETURNING id, code, name, area, lat, long, population
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(maybe_row.as_ref().map(row_to_region))
    }
}

#[derive(Clone)]
pub struct PostgresWalkDifficultyRepository {
    pool: PgPool,
}

impl PostgresWalkDifficultyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WalkDifficultyRepository for PostgresWalkDifficultyRepository {
    async fn get_all(&self) -> Result<Vec<WalkDifficulty>, DomainError> {
        let rows = sqlx::query("SELECT id, code FROM walk_difficulties ORDER BY code")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.iter().map(row_to_walk_difficulty).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<WalkDifficulty>, DomainError> {
        let maybe_row = sqlx::query("SELECT id, code FROM walk_difficulties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(maybe_row.as_ref().map(row_to_walk_difficulty))
    }

    async fn add(&self, data: WalkDifficultyData) -> Result<WalkDifficulty, DomainError> {
        let row = sqlx::query(
            "INSERT INTO walk_difficulties (id, code) VALUES ($1, $2) RETURNING id, code",
        )
        .bind(Uuid::new_v4())
        .bind(data.code)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row_to_walk_difficulty(&row))
    }

    async fn update(
        &self,
        id: Uuid,
        data: WalkDifficultyData,
    ) -> Result<Option<WalkDifficulty>, DomainError> {
        let maybe_row = sqlx::query(
            "UPDATE walk_difficulties SET code = $2 WHERE id = $1 RETURNING id, code",
        )
        .bind(id)
        .bind(data.code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(maybe_row.as_ref().map(row_to_walk_difficulty))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<WalkDifficulty>, DomainError> {
        let maybe_row =
            sqlx::query("DELETE FROM walk_difficulties WHERE id = $1 RETURNING id, code")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(maybe_row.as_ref().map(row_to_walk_difficulty))
    }
}

#[derive(Clone)]
pub struct PostgresWalkRepository {
    pool: PgPool,
}

impl PostgresWalkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WalkRepository for PostgresWalkRepository {
    async fn get_all(&self) -> Result<Vec<Walk>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, name, length, region_id, walk_difficulty_id FROM walks ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.iter().map(row_to_walk).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Walk>, DomainError> {
        let maybe_row = sqlx::query(
            "SELECT id, name, length, region_id, walk_difficulty_id FROM walks WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(maybe_row.as_ref().map(row_to_walk))
    }

    async fn add(&self, data: WalkData) -> Result<Walk, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO walks (id, name, length, region_id, walk_difficulty_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, length, region_id, walk_difficulty_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.name)
        .bind(data.length)
        .bind(data.region_id)
        .bind(data.walk_difficulty_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row_to_walk(&row))
    }

    async fn update(&self, id: Uuid, data: WalkData) -> Result<Option<Walk>, DomainError> {
        let maybe_row = sqlx::query(
            r#"
            UPDATE walks
            SET name = $2, length = $3, region_id = $4, walk_difficulty_id = $5
            WHERE id = $1
            RETURNING id, name, length, region_id, walk_difficulty_id
            "#,
        )
        .bind(id)
        .bind(data.name)
        .bind(data.length)
        .bind(data.region_id)
        .bind(data.walk_difficulty_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(maybe_row.as_ref().map(row_to_walk))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Walk>, DomainError> {
        let maybe_row = sqlx::query(
            r#"
            DELETE FROM walks
            WHERE id = $1
            RETURNING id, name, length, region_id, walk_difficulty_id
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(maybe_row.as_ref().map(row_to_walk))
    }
}

fn row_to_region(row: &PgRow) -> Region {
    Region {
        id: row.get::<Uuid, _>("id"),
        code: row.get::<String, _>("code"),
        name: row.get::<String, _>("name"),
        area: row.get::<f64, _>("area"),
        lat: row.get::<f64, _>("lat"),
        long: row.get::<f64, _>("long"),
        population: row.get::<i64, _>("population"),
    }
}

fn row_to_walk_difficulty(row: &PgRow) -> WalkDifficulty {
    WalkDifficulty {
        id: row.get::<Uuid, _>("id"),
        code: row.get::<String, _>("code"),
    }
}

fn row_to_walk(row: &PgRow) -> Walk {
    Walk {
        id: row.get::<Uuid, _>("id"),
        name: row.get::<String, _>("name"),
        length: row.get::<f64, _>("length"),
        region_id: row.get::<Uuid, _>("region_id"),
        walk_difficulty_id: row.get::<Uuid, _>("walk_difficulty_id"),
    }
}

fn map_sqlx_error(error: sqlx::Error) -> DomainError {
    DomainError::storage(error.to_string())
}
