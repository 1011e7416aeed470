//! Stencil - message template rendering for JSON data
//!
//! Stencil is a CLI tool and library for rendering templates containing
//! `{{...}}` placeholders against a JSON data document. A placeholder body
//! is a dot-separated key path (`{{user.name}}`, `{{items.0}}`) or a call
//! to one of a fixed set of transformations
//! (`{{default(user.nick,'anonymous')}}`, `{{date(joined)}}`,
//! `{{replace(text, ['a','b'])}}`).
//!
//! Rendering is total: unresolved paths become empty strings, failing
//! transformations become the in-band `#ERROR` sentinel, and malformed
//! placeholders pass through as literal text.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `core`: Core rendering pipeline (scanner, evaluator, resolver,
//!   transformations)

pub mod cli;
pub mod core;

pub use crate::core::{format, render};
