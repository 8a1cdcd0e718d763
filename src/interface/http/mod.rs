pub mod problem;
pub mod regions_handler;
pub mod walk_difficulties_handler;
pub mod walks_handler;
