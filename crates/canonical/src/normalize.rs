/// Normalize a string for indexing and comparison.
///
/// Every character that is not a word character (Unicode letter, digit, or
/// underscore) or a literal space is dropped, and the survivors are
/// lowercased. No Unicode composition, diacritic stripping, or whitespace
/// collapsing happens here; two strings that differ only in case or
/// punctuation normalize to the same form, nothing else does.
///
/// Total over any input, including the empty string, and idempotent.
///
/// ```
/// use canonical::normalize;
/// assert_eq!(normalize("FooBar!"), "foobar");
/// assert_eq!(normalize(&normalize("FooBar!")), "foobar");
/// ```
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        // Lowercasing can expand one character into several (e.g. İ), and
        // the expansion may contain combining marks that are not word
        // characters. Filtering after lowercasing keeps the result stable
        // under a second pass.
        for lower in ch.to_lowercase() {
            if is_word_char(lower) || lower == ' ' {
                out.push(lower);
            }
        }
    }
    out
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
