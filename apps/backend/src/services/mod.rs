pub mod generator;
pub mod story;
pub mod story_cache;
