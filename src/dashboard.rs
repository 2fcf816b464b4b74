//! Page state behind the GUI: selections, the current sample table and the
//! comparison derived from it. Every interaction recomputes the whole page,
//! sample data included.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::comparison::compare;
use crate::lexicon::Lexicon;
use crate::pairing::default_partner_index;
use crate::sampling::{generate_sample_data, FrequencyDistribution};
use crate::types::collocation::{CollocationRecord, Comparison};

/// Sidebar menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Menu {
    #[default]
    Collocation,
}

impl Menu {
    pub const ALL: [Menu; 1] = [Menu::Collocation];

    pub fn label(self) -> &'static str {
        match self {
            Menu::Collocation => "연어 분석",
        }
    }
}

pub struct Dashboard {
    lexicon: Lexicon,
    distribution: FrequencyDistribution,
    rng: StdRng,
    words: Vec<String>,
    first_idx: usize,
    second_idx: usize,
    records: Vec<CollocationRecord>,
    comparison: Comparison,
    generation: u64,
}

impl Dashboard {
    pub fn new(lexicon: Lexicon, distribution: FrequencyDistribution, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let words = lexicon.sorted_words();
        let second_idx = words
            .first()
            .map_or(0, |first| default_partner_index(first, &words));
        let mut dashboard = Dashboard {
            lexicon,
            distribution,
            rng,
            words,
            first_idx: 0,
            second_idx,
            records: Vec::new(),
            comparison: Comparison::default(),
            generation: 0,
        };
        dashboard.recompute();
        dashboard
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn first_index(&self) -> usize {
        self.first_idx
    }

    pub fn second_index(&self) -> usize {
        self.second_idx
    }

    pub fn first_word(&self) -> &str {
        self.words.get(self.first_idx).map_or("", String::as_str)
    }

    pub fn second_word(&self) -> &str {
        self.words.get(self.second_idx).map_or("", String::as_str)
    }

    pub fn records(&self) -> &[CollocationRecord] {
        &self.records
    }

    pub fn comparison(&self) -> &Comparison {
        &self.comparison
    }

    /// Number of times the sample table has been drawn.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Changing the first word resets the second to its counterpart.
    pub fn select_first(&mut self, idx: usize) {
        if idx >= self.words.len() {
            return;
        }
        self.first_idx = idx;
        self.second_idx = default_partner_index(&self.words[idx], &self.words);
        self.recompute();
    }

    pub fn select_second(&mut self, idx: usize) {
        if idx >= self.words.len() {
            return;
        }
        self.second_idx = idx;
        self.recompute();
    }

    pub fn select_words(&mut self, first: &str, second: Option<&str>) -> bool {
        let Some(first_idx) = self.words.iter().position(|w| w == first) else {
            return false;
        };
        self.select_first(first_idx);
        if let Some(second) = second {
            let Some(second_idx) = self.words.iter().position(|w| w == second) else {
                return false;
            };
            self.select_second(second_idx);
        }
        true
    }

    /// Redraws the sample table and rebuilds the comparison.
    pub fn recompute(&mut self) {
        self.records = generate_sample_data(&self.lexicon, &self.distribution, &mut self.rng);
        self.generation += 1;
        let (first, second) = (self.first_word().to_string(), self.second_word().to_string());
        self.comparison = compare(&self.records, &first, &second);
        debug!(
            generation = self.generation,
            first = %first,
            second = %second,
            "recomputed comparison"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> Dashboard {
        Dashboard::new(Lexicon::builtin(), FrequencyDistribution::default(), Some(11))
    }

    #[test]
    fn opens_on_first_word_and_its_partner() {
        let d = dashboard();
        assert_eq!(d.first_word(), "꽃");
        assert_eq!(d.second_word(), "플라워");
        assert_eq!(d.records().len(), 30);
        assert_eq!(d.generation(), 1);
        assert!(d.comparison().narrative.contains("화훼 산업"));
    }

    #[test]
    fn first_selection_presets_second() {
        let mut d = dashboard();
        let idx = d.words().iter().position(|w| w == "주인").unwrap();
        d.select_first(idx);
        assert_eq!(d.second_word(), "오너");
        assert!(d.comparison().narrative.contains("소유 관계"));
    }

    #[test]
    fn each_interaction_regenerates() {
        let mut d = dashboard();
        let before = d.records().to_vec();
        d.select_second(2);
        assert_eq!(d.generation(), 2);
        assert_ne!(d.records(), before.as_slice());
        assert_eq!(d.second_word(), "아름다움");
        assert_eq!(d.comparison().second.word, "아름다움");
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut d = dashboard();
        d.select_first(99);
        d.select_second(99);
        assert_eq!(d.first_word(), "꽃");
        assert_eq!(d.generation(), 1);
    }

    #[test]
    fn select_words_by_name() {
        let mut d = dashboard();
        assert!(d.select_words("꽃", Some("아름다움")));
        assert_eq!(d.comparison().first.word, "꽃");
        assert!(d.comparison().narrative.contains("'꽃'와(과) '아름다움'"));
        assert!(!d.select_words("사과", None));
    }

    #[test]
    fn seeded_dashboards_agree() {
        let a = dashboard();
        let b = dashboard();
        assert_eq!(a.records(), b.records());
    }

    #[test]
    fn menu_has_single_collocation_entry() {
        assert_eq!(Menu::ALL.len(), 1);
        assert_eq!(Menu::default().label(), "연어 분석");
    }
}
