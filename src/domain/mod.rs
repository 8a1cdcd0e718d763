pub mod errors;
pub mod region;
pub mod walk;
pub mod walk_difficulty;
