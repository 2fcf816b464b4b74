pub mod app;
pub mod chart;
pub mod comparison;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod fonts;
pub mod lexicon;
pub mod narrative;
pub mod pairing;
pub mod report;
pub mod sampling;
pub mod types {
    pub mod collocation;
}

pub use dashboard::Dashboard;
pub use error::{DashboardError, Result};
pub use types::collocation::{CollocationRecord, Comparison, WordPanel};
