//! Core rendering pipeline.
//!
//! Rendering is a single pass: the scanner finds `{{...}}` regions, the
//! evaluator classifies each body as a key path or a transformation call,
//! the resolver walks the data document, and the transformation set turns
//! resolved values into display text.
//!
//! ## Module Structure
//!
//! - `scan`: template scanner ({{...}} region detection)
//! - `eval`: placeholder evaluator and display-string conversion
//! - `resolve`: dot-path resolution over the data document
//! - `args`: transformation argument tokenizer
//! - `transform`: the fixed transformation set (default, date, replace)

pub mod args;
pub mod eval;
pub mod resolve;
pub mod scan;
pub mod transform;

pub use args::{Arg, parse_args};
pub use eval::display;
pub use resolve::resolve;
pub use scan::render;
pub use transform::{ERROR_TOKEN, Transform};

use serde_json::{Map, Value};

/// Format a template against a data document.
///
/// The total entry point: an absent template renders to the empty string,
/// an absent data document is treated as an empty object, and rendering
/// itself never fails. Unresolved placeholders become empty strings and
/// failing transformations become the `#ERROR` sentinel, in-band.
pub fn format(template: Option<&str>, data: Option<&Value>) -> String {
    let Some(template) = template else {
        return String::new();
    };
    match data {
        Some(data) => render(template, data),
        None => render(template, &Value::Object(Map::new())),
    }
}
