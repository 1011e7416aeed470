//! CLI argument definitions using clap.
//!
//! The interface is a single rendering invocation: a template from the
//! command line or a file, a data document from a JSON file or inline JSON,
//! and the rendered text on stdout.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Template text containing {{...}} placeholders
    pub template: Option<String>,

    /// Read the template from a file instead of the command line
    #[arg(long, value_name = "FILE", conflicts_with = "template")]
    pub template_file: Option<PathBuf>,

    /// JSON file supplying the data document
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Inline JSON data document (takes precedence over --data)
    #[arg(long, value_name = "JSON")]
    pub data_json: Option<String>,
}
