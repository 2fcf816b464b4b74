use rand::Rng;
use rand_distr::StandardNormal;
use tracing::debug;

use crate::error::{DashboardError, Result};
use crate::lexicon::Lexicon;
use crate::types::collocation::CollocationRecord;

pub const DEFAULT_MEAN: f64 = 50.0;
pub const DEFAULT_STD_DEV: f64 = 15.0;

/// Normal distribution that frequency draws come from before rounding and
/// flooring at zero.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyDistribution {
    mean: f64,
    std_dev: f64,
}

impl Default for FrequencyDistribution {
    fn default() -> Self {
        FrequencyDistribution {
            mean: DEFAULT_MEAN,
            std_dev: DEFAULT_STD_DEV,
        }
    }
}

impl FrequencyDistribution {
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() || !std_dev.is_finite() || std_dev < 0.0 {
            return Err(DashboardError::InvalidDistribution { mean, std_dev });
        }
        Ok(FrequencyDistribution { mean, std_dev })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// One rounded draw, clamped so it is never below zero.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        let z: f64 = rng.sample(StandardNormal);
        let value = (self.mean + self.std_dev * z).round();
        value.max(0.0) as u32
    }
}

/// Builds one record per (word, collocate) combination, in lexicon order.
pub fn generate_sample_data<R: Rng + ?Sized>(
    lexicon: &Lexicon,
    distribution: &FrequencyDistribution,
    rng: &mut R,
) -> Vec<CollocationRecord> {
    let mut records = Vec::with_capacity(lexicon.combination_count());
    for entry in lexicon.entries() {
        for collocate in entry.collocates {
            records.push(CollocationRecord {
                word: entry.word.to_string(),
                collocate: collocate.to_string(),
                frequency: distribution.draw(rng),
            });
        }
    }
    debug!(
        records = records.len(),
        mean = distribution.mean(),
        std_dev = distribution.std_dev(),
        "generated sample collocation data"
    );
    records
}
