use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct WalkDifficulty {
    pub id: Uuid,
    pub code: String,
}

#[derive(Debug, Clone)]
pub struct WalkDifficultyData {
    pub code: String,
}

impl WalkDifficultyData {
    pub fn into_walk_difficulty(self, id: Uuid) -> WalkDifficulty {
        WalkDifficulty {
            id,
            code: self.code,
        }
    }
}
