use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

// ===== POS LABEL MAP =====
// Universal Dependencies part-of-speech tags (https://universaldependencies.org/u/pos/).
// The declaration order below is the order report sections are printed in.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

impl PosTag {
    /// Every reported tag, in section order
    pub const ALL: [PosTag; 17] = [
        PosTag::Adj,
        PosTag::Adp,
        PosTag::Adv,
        PosTag::Aux,
        PosTag::Cconj,
        PosTag::Det,
        PosTag::Intj,
        PosTag::Noun,
        PosTag::Num,
        PosTag::Part,
        PosTag::Pron,
        PosTag::Propn,
        PosTag::Punct,
        PosTag::Sconj,
        PosTag::Sym,
        PosTag::Verb,
        PosTag::X,
    ];

    /// Tag code as emitted by the tagger (e.g. "NOUN")
    pub fn code(self) -> &'static str {
        match self {
            PosTag::Adj => "ADJ",
            PosTag::Adp => "ADP",
            PosTag::Adv => "ADV",
            PosTag::Aux => "AUX",
            PosTag::Cconj => "CCONJ",
            PosTag::Det => "DET",
            PosTag::Intj => "INTJ",
            PosTag::Noun => "NOUN",
            PosTag::Num => "NUM",
            PosTag::Part => "PART",
            PosTag::Pron => "PRON",
            PosTag::Propn => "PROPN",
            PosTag::Punct => "PUNCT",
            PosTag::Sconj => "SCONJ",
            PosTag::Sym => "SYM",
            PosTag::Verb => "VERB",
            PosTag::X => "X",
        }
    }

    /// Human-readable label used in section titles
    pub fn label(self) -> &'static str {
        match self {
            PosTag::Adj => "adjective",
            PosTag::Adp => "adposition",
            PosTag::Adv => "adverb",
            PosTag::Aux => "auxiliary",
            PosTag::Cconj => "coordinating conjunction",
            PosTag::Det => "determiner",
            PosTag::Intj => "interjection",
            PosTag::Noun => "noun",
            PosTag::Num => "numeral",
            PosTag::Part => "particle",
            PosTag::Pron => "pronoun",
            PosTag::Propn => "proper noun",
            PosTag::Punct => "punctuation",
            PosTag::Sconj => "subordinating conjunction",
            PosTag::Sym => "symbol",
            PosTag::Verb => "verb",
            PosTag::X => "other",
        }
    }

    /// Look up a tag by its code. Case-sensitive; anything outside the
    /// universal set (including tagger extras like "SPACE") is `None`.
    pub fn from_code(code: &str) -> Option<PosTag> {
        PosTag::ALL.iter().copied().find(|tag| tag.code() == code)
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ===== DOCUMENT MODEL =====

/// One annotated unit of text produced by a language analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub is_stop: bool,
    pub is_space: bool,
    /// Raw tag string from the tagger; may fall outside the universal set
    pub pos: String,
}

impl Token {
    pub fn new(text: &str, pos: &str) -> Self {
        Self {
            text: text.to_string(),
            is_stop: false,
            is_space: false,
            pos: pos.to_string(),
        }
    }

    pub fn stop(mut self) -> Self {
        self.is_stop = true;
        self
    }

    pub fn space(mut self) -> Self {
        self.is_space = true;
        self
    }
}

/// Annotated result of analyzing one file's text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub text: String,
    pub tokens: Vec<Token>,
}

impl Document {
    pub fn new(text: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            text: text.into(),
            tokens,
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

// ===== REPORT MODEL =====

/// One row of a frequency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PosSection {
    pub tag: PosTag,
    pub entries: Vec<WordCount>,
}

/// Everything printed for a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub content_words: Vec<WordCount>,
    /// One section per `PosTag::ALL` entry, same order
    pub by_pos: Vec<PosSection>,
}
