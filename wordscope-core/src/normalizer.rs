/// Strip every newline character from raw document text.
///
/// Only `\n` is removed; carriage returns and other whitespace are left for
/// the tokenizer to deal with, so "a\nb" becomes "ab".
pub fn clean_text(text: &str) -> String {
    text.replace('\n', "")
}
