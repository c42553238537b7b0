//! Tokenizer for command lines.
//!
//! Splits a raw line into tokens on whitespace, treating a
//! double-quoted run as a single token with the quotes stripped.
//! Tokenization never fails: an unterminated quote simply swallows the
//! rest of the line into the open token.

/// Split a command line into non-empty tokens.
///
/// Whitespace outside double quotes separates tokens; whitespace inside
/// a quoted run is preserved. Empty input yields an empty vec.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
