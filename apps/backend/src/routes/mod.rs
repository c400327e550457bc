pub mod backup;
pub mod quiz;
pub mod story;
pub mod words;
