use crate::types::WordCount;
use std::collections::HashMap;

/// Count exact-string occurrences and return the `top` most frequent words.
///
/// Counting is case-sensitive. Rows are ordered by descending count; equal
/// counts keep the order in which the words first appeared in `words`.
/// Asking for more rows than there are distinct words returns all of them.
pub fn most_common_words<S: AsRef<str>>(words: &[S], top: usize) -> Vec<WordCount> {
    if top == 0 {
        return Vec::new();
    }

    // Rows in first-seen order; the map only points back into `rows`
    let mut rows: Vec<WordCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for word in words {
        let word = word.as_ref();
        match index.get(word) {
            Some(&i) => rows[i].count += 1,
            None => {
                index.insert(word, rows.len());
                rows.push(WordCount::new(word, 1));
            }
        }
    }

    // `sort_by` is stable, which is what keeps first-seen order among ties
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows.truncate(top);
    rows
}
