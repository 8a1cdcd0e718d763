pub mod dto;
pub mod region_service;
pub mod walk_difficulty_service;
pub mod walk_service;
