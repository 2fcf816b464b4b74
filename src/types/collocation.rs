use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollocationRecord {
    pub word: String,
    pub collocate: String,
    pub frequency: u32,
}

/// The collocates of one selected word, highest frequency first.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WordPanel {
    pub word: String,
    pub rows: Vec<CollocationRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    pub first: WordPanel,
    pub second: WordPanel,
    pub narrative: String,
}
