pub mod bubble;
pub mod herb;
pub mod pulse;
