pub mod quiz;
pub mod stats;
pub mod welcome;
