//! Tokenizer for transformation argument lists.
//!
//! The inner text of a call like `replace(d, ['is','was'])` is split on
//! top-level commas into typed arguments. Commas inside single-quoted
//! literals or inside `[...]` array literals do not split. The tokenizer is
//! deliberately lenient: malformed quotes and brackets never fail, they just
//! fall back to bare-string treatment.

/// One parsed transformation argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// A quoted literal or bare token, quotes removed.
    Str(String),
    /// A `[...]` array literal of string elements.
    Array(Vec<String>),
}

/// Tokenize a raw argument string into an ordered argument list.
///
/// Empty or whitespace-only input yields no arguments.
pub fn parse_args(text: &str) -> Vec<Arg> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    split_top_level(text).into_iter().map(parse_token).collect()
}

/// Split on commas, ignoring those inside single quotes or brackets.
///
/// An unterminated quote swallows the rest of the text into one token.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_quote = false;
    let mut depth = 0usize;

    for (i, c) in text.char_indices() {
        match c {
            '\'' => in_quote = !in_quote,
            '[' if !in_quote => depth += 1,
            ']' if !in_quote => depth = depth.saturating_sub(1),
            ',' if !in_quote && depth == 0 => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

fn parse_token(token: &str) -> Arg {
    let token = token.trim();

    if let Some(inner) = token.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
        if inner.trim().is_empty() {
            return Arg::Array(Vec::new());
        }
        let elements = split_top_level(inner)
            .into_iter()
            .map(|element| unquote(element.trim()).to_string())
            .collect();
        return Arg::Array(elements);
    }

    Arg::Str(unquote(token).to_string())
}

/// Strip a single pair of enclosing single quotes, if present.
fn unquote(token: &str) -> &str {
    token
        .strip_prefix('\'')
        .and_then(|t| t.strip_suffix('\''))
        .unwrap_or(token)
}
