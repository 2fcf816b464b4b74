//! Default selection for the second word selector.
//!
//! Picking a word in the first selector pre-selects its native/loanword
//! counterpart in the second. Words without a counterpart, or whose
//! counterpart is missing from the option list, fall back to index 0.

use crate::lexicon::Lexicon;

/// word -> preferred counterpart. Each pair is listed in both directions.
pub const PAIR_DEFAULTS: &[(&str, &str)] = &[
    ("주인", "오너"),
    ("오너", "주인"),
    ("아름다움", "뷰티"),
    ("뷰티", "아름다움"),
    ("꽃", "플라워"),
    ("플라워", "꽃"),
];

pub fn preferred_partner(word: &str) -> Option<&'static str> {
    PAIR_DEFAULTS
        .iter()
        .find(|(from, _)| *from == word)
        .map(|(_, to)| *to)
}

pub fn default_partner_index(word1: &str, words: &[String]) -> usize {
    preferred_partner(word1)
        .and_then(|partner| words.iter().position(|w| w == partner))
        .unwrap_or(0)
}

/// A row of `PAIR_DEFAULTS` that names a word the lexicon does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingIssue {
    pub word: &'static str,
    pub partner: &'static str,
    pub missing: &'static str,
}

/// Lists table rows that would silently fall back to index 0.
pub fn validate_pairings(lexicon: &Lexicon) -> Vec<PairingIssue> {
    validate_table(PAIR_DEFAULTS, lexicon)
}

fn validate_table(table: &[(&'static str, &'static str)], lexicon: &Lexicon) -> Vec<PairingIssue> {
    let mut issues = Vec::new();
    for &(word, partner) in table {
        for name in [word, partner] {
            if !lexicon.contains(name) {
                issues.push(PairingIssue { word, partner, missing: name });
            }
        }
    }
    issues
}
