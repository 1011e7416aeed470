//! Template scanning.
//!
//! Finds `{{...}}` regions left to right and replaces each with the
//! evaluator's output. A region is `{{`, a run of characters containing no
//! brace, then the first following `}}`. The scanner is hand written so the
//! non-greedy region match does not depend on a regex engine: when a `{{`
//! never closes, the leading brace is emitted as literal text and scanning
//! resumes one character later, the same restart a regex engine would do.

use serde_json::Value;

use crate::core::eval::eval_placeholder;

/// Render a template against a data document.
pub fn render(template: &str, data: &Value) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        let (literal, candidate) = rest.split_at(open);
        output.push_str(literal);

        match placeholder_body(&candidate[2..]) {
            Some(body) => {
                output.push_str(&eval_placeholder(body, data));
                rest = &candidate[2 + body.len() + 2..];
            }
            None => {
                // Unterminated or brace-broken region stays literal
                output.push('{');
                rest = &candidate[1..];
            }
        }
    }

    output.push_str(rest);
    output
}

/// The placeholder body, when `text` starts with a braceless run closed by
/// `}}`.
fn placeholder_body(text: &str) -> Option<&str> {
    let end = text.find(['{', '}'])?;
    if text[end..].starts_with("}}") {
        Some(&text[..end])
    } else {
        None
    }
}
