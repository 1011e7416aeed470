//! Command-line interface layer.
//!
//! A thin harness around [`crate::format`]: it loads the template and data
//! document named on the command line, renders, and prints the result. The
//! harness does not interpret the rendered text — a `#ERROR` sentinel in the
//! output is printed as-is.

use std::fs;

use anyhow::{Context, Result};
use serde_json::Value;

mod args;
mod exit_status;

pub use args::Arguments;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let template = load_template(&args)?;
    let data = load_data(&args)?;

    println!("{}", crate::format(template.as_deref(), data.as_ref()));

    Ok(ExitStatus::Success)
}

fn load_template(args: &Arguments) -> Result<Option<String>> {
    if let Some(path) = &args.template_file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read template file: {:?}", path))?;
        return Ok(Some(content));
    }
    Ok(args.template.clone())
}

fn load_data(args: &Arguments) -> Result<Option<Value>> {
    if let Some(json) = &args.data_json {
        let value =
            serde_json::from_str(json).context("Failed to parse --data-json as JSON")?;
        return Ok(Some(value));
    }
    if let Some(path) = &args.data {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read data file: {:?}", path))?;
        let value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON data file: {:?}", path))?;
        return Ok(Some(value));
    }
    Ok(None)
}
