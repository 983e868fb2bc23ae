pub mod estimate;
pub mod eta;
