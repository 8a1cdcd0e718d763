use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    errors::{DomainError, FieldViolation},
    region::{Region, RegionData},
    walk::{Walk, WalkData},
    walk_difficulty::{WalkDifficulty, WalkDifficultyData},
};

// The same request shape serves POST and PUT for each resource: both verbs
// carry every non-identifier field.

#[derive(Debug, Deserialize)]
pub struct RegionRequest {
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

impl RegionRequest {
    /// Evaluates every rule; violations accumulate instead of
    /// short-circuiting so the response can name all offending fields.
    pub fn field_violations(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        if self.code.trim().is_empty() {
            violations.push(FieldViolation::new("code", "code must not be blank"));
        }
        if self.name.trim().is_empty() {
            violations.push(FieldViolation::new("name", "name must not be blank"));
        }
        if self.area <= 0.0 {
            violations.push(FieldViolation::new("area", "area must be greater than zero"));
        }
        if self.population < 0 {
            violations.push(FieldViolation::new(
                "population",
                "population must not be negative",
            ));
        }

        violations
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let violations = self.field_violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(violations))
        }
    }

    pub fn into_data(self) -> RegionData {
        RegionData {
            code: self.code,
            name: self.name,
            area: self.area,
            lat: self.lat,
            long: self.long,
            population: self.population,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegionResponse {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

impl From<Region> for RegionResponse {
    fn from(value: Region) -> Self {
        Self {
            id: value.id,
            code: value.code,
            name: value.name,
            area: value.area,
            lat: value.lat,
            long: value.long,
            population: value.population,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WalkDifficultyRequest {
    pub code: String,
}

impl WalkDifficultyRequest {
    pub fn field_violations(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        if self.code.trim().is_empty() {
            violations.push(FieldViolation::new("code", "code must not be blank"));
        }

        violations
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let violations = self.field_violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(violations))
        }
    }

    pub fn into_data(self) -> WalkDifficultyData {
        WalkDifficultyData { code: self.code }
    }
}

#[derive(Debug, Serialize)]
pub struct WalkDifficultyResponse {
    pub id: Uuid,
    pub code: String,
}

impl From<WalkDifficulty> for WalkDifficultyResponse {
    fn from(value: WalkDifficulty) -> Self {
        Self {
            id: value.id,
            code: value.code,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WalkRequest {
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

impl WalkRequest {
    /// Field-local rules only. Whether `region_id` and
    /// `walk_difficulty_id` resolve is checked by `WalkService`, which
    /// appends to this list before deciding validity.
    pub fn field_violations(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        if self.name.trim().is_empty() {
            violations.push(FieldViolation::new("name", "name must not be blank"));
        }
        if self.length < 0.0 {
            violations.push(FieldViolation::new(
                "length",
                "length must not be negative",
            ));
        }

        violations
    }

    pub fn into_data(self) -> WalkData {
        WalkData {
            name: self.name,
            length: self.length,
            region_id: self.region_id,
            walk_difficulty_id: self.walk_difficulty_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WalkResponse {
    pub id: Uuid,
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

impl From<Walk> for WalkResponse {
    fn from(value: Walk) -> Self {
        Self {
            id: value.id,
            name: value.name,
            length: value.length,
            region_id: value.region_id,
            walk_difficulty_id: value.walk_difficulty_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_region() -> RegionRequest {
        RegionRequest {
            code: "WGN".to_string(),
            name: "Wellington".to_string(),
            area: 100.0,
            lat: -41.3,
            long: 174.8,
            population: 200_000,
        }
    }

    #[test]
    fn valid_region_has_no_violations() {
        assert!(valid_region().field_violations().is_empty());
    }

    #[test]
    fn zero_area_violates_the_area_field() {
        let mut request = valid_region();
        request.area = 0.0;

        let violations = request.field_violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "area");
    }

    #[test]
    fn negative_population_is_the_only_violation() {
        let mut request = valid_region();
        request.area = 5.0;
        request.population = -1;

        let violations = request.field_violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "population");
    }

    #[test]
    fn blank_fields_are_all_reported_at_once() {
        let request = RegionRequest {
            code: "   ".to_string(),
            name: String::new(),
            area: -1.0,
            lat: 0.0,
            long: 0.0,
            population: -5,
        };

        let fields: Vec<_> = request
            .field_violations()
            .iter()
            .map(|violation| violation.field)
            .collect();
        assert_eq!(fields, vec!["code", "name", "area", "population"]);
    }

    #[test]
    fn blank_difficulty_code_is_rejected() {
        let request = WalkDifficultyRequest {
            code: " ".to_string(),
        };
        assert_eq!(request.field_violations().len(), 1);
        assert!(request.validate().is_err());
    }

    #[test]
    fn negative_walk_length_violates_the_length_field() {
        let request = WalkRequest {
            name: "Skyline".to_string(),
            length: -0.5,
            region_id: Uuid::new_v4(),
            walk_difficulty_id: Uuid::new_v4(),
        };

        let violations = request.field_violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "length");
    }

    #[test]
    fn zero_walk_length_is_allowed() {
        let request = WalkRequest {
            name: "Lookout Loop".to_string(),
            length: 0.0,
            region_id: Uuid::new_v4(),
            walk_difficulty_id: Uuid::new_v4(),
        };
        assert!(request.field_violations().is_empty());
    }
}
