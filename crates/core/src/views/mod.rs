pub mod day_column;
pub mod lanes;
