/// Formats a raw reading identifier for display by upper-casing the first
/// letter of every whitespace-separated word, e.g. `"active power"` becomes
/// `"Active Power"`.
///
/// Words are split on ASCII whitespace only. Only ASCII letters are changed
/// and nothing is lower-cased, so the result of a second pass equals the
/// first. Whitespace is kept exactly as given.
pub fn reading_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;
    for c in raw.chars() {
        if c.is_ascii_whitespace() {
            at_word_start = true;
            out.push(c);
        } else {
            out.push(if at_word_start { c.to_ascii_uppercase() } else { c });
            at_word_start = false;
        }
    }
    out
}
