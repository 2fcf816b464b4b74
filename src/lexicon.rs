//! The fixed demonstration dictionary: six words, five collocates each.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexiconEntry {
    pub word: &'static str,
    pub collocates: &'static [&'static str],
}

/// Native words and their loanword counterparts, in presentation order.
pub const BUILTIN_ENTRIES: &[LexiconEntry] = &[
    LexiconEntry { word: "주인", collocates: &["집의", "가게의", "애완동물의", "회사의", "권리의"] },
    LexiconEntry { word: "오너", collocates: &["리스크", "쉐프", "베네핏", "시스템", "오피니언"] },
    LexiconEntry { word: "아름다움", collocates: &["내면의", "자연의", "한국적", "예술적", "순수한"] },
    LexiconEntry { word: "뷰티", collocates: &["아이템", "제품", "트렌드", "에디터", "유튜버"] },
    LexiconEntry { word: "꽃", collocates: &["예쁜", "들판의", "봄", "꽃잎", "향기로운"] },
    LexiconEntry { word: "플라워", collocates: &["이벤트", "샵", "박스", "디자인", "브리딩"] },
];

#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    entries: &'static [LexiconEntry],
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    pub fn builtin() -> Self {
        Lexicon { entries: BUILTIN_ENTRIES }
    }

    pub fn from_entries(entries: &'static [LexiconEntry]) -> Self {
        Lexicon { entries }
    }

    pub fn entries(&self) -> &'static [LexiconEntry] {
        self.entries
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|e| e.word == word)
    }

    /// Distinct words sorted by code point, which is the order the selectors show.
    pub fn sorted_words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.entries.iter().map(|e| e.word.to_string()).collect();
        words.sort();
        words.dedup();
        words
    }

    pub fn combination_count(&self) -> usize {
        self.entries.iter().map(|e| e.collocates.len()).sum()
    }
}
