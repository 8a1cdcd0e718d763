use uuid::Uuid;

/// A walk track. `region_id` and `walk_difficulty_id` are checked against
/// their stores at add/update time only; there is no cascade afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Walk {
    pub id: Uuid,
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct WalkData {
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

impl WalkData {
    pub fn into_walk(self, id: Uuid) -> Walk {
        Walk {
            id,
            name: self.name,
            length: self.length,
            region_id: self.region_id,
            walk_difficulty_id: self.walk_difficulty_id,
        }
    }
}
