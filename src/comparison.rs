use crate::narrative::select_narrative;
use crate::types::collocation::{CollocationRecord, Comparison, WordPanel};

/// Records for `word`, highest frequency first. Ties keep generation order.
pub fn collocates_for(records: &[CollocationRecord], word: &str) -> Vec<CollocationRecord> {
    let mut rows: Vec<CollocationRecord> = records
        .iter()
        .filter(|r| r.word == word)
        .cloned()
        .collect();
    rows.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    rows
}

pub fn word_panel(records: &[CollocationRecord], word: &str) -> WordPanel {
    WordPanel {
        word: word.to_string(),
        rows: collocates_for(records, word),
    }
}

pub fn compare(records: &[CollocationRecord], first: &str, second: &str) -> Comparison {
    Comparison {
        first: word_panel(records, first),
        second: word_panel(records, second),
        narrative: select_narrative(first, second).text().into_owned(),
    }
}

impl Comparison {
    pub fn title(&self) -> String {
        format!("'{}'와(과) '{}'의 연어 비교", self.first.word, self.second.word)
    }
}

impl WordPanel {
    pub fn heading(&self) -> String {
        format!("'{}'의 연어", self.word)
    }

    pub fn chart_title(&self) -> String {
        format!("'{}'의 연어 빈도", self.word)
    }

    pub fn max_frequency(&self) -> u32 {
        self.rows.iter().map(|r| r.frequency).max().unwrap_or(0)
    }
}
