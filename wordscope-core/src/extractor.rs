// Word extraction - turns an annotated Document into plain word lists.
//
// Both extractors preserve document order and keep duplicates; counting
// happens later in the counter module.

use crate::types::{Document, PosTag, Token};

/// ASCII punctuation characters, in code-point order
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A token counts as punctuation when its text appears inside `PUNCTUATION`.
/// That covers every single punctuation character as well as contiguous
/// runs such as "()" or ",-".
pub fn is_punctuation(text: &str) -> bool {
    PUNCTUATION.contains(text)
}

fn is_content_word(token: &Token) -> bool {
    !token.is_stop && !token.is_space && !is_punctuation(&token.text)
}

/// Words that are neither stop words, whitespace, nor punctuation
pub fn content_words(doc: &Document) -> Vec<String> {
    doc.tokens
        .iter()
        .filter(|token| is_content_word(token))
        .map(|token| token.text.clone())
        .collect()
}

/// Words whose tag equals `pos_code` exactly. Unknown codes match nothing.
pub fn words_by_pos(doc: &Document, pos_code: &str) -> Vec<String> {
    doc.tokens
        .iter()
        .filter(|token| token.pos == pos_code)
        .map(|token| token.text.clone())
        .collect()
}

pub fn words_for_tag(doc: &Document, tag: PosTag) -> Vec<String> {
    words_by_pos(doc, tag.code())
}
