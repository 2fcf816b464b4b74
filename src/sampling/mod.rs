pub mod generator;

pub use generator::{generate_sample_data, FrequencyDistribution};
