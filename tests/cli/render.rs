use anyhow::Result;
use predicates::prelude::*;

use crate::CliTest;

#[test]
fn test_renders_template_with_inline_data() -> Result<()> {
    let test = CliTest::new()?;

    test.command()
        .arg("Hello {{user.name}}!")
        .args(["--data-json", r#"{"user":{"name":"Ada"}}"#])
        .assert()
        .success()
        .stdout("Hello Ada!\n");

    Ok(())
}

#[test]
fn test_renders_template_with_data_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("data.json", r#"{"items": ["apple", "banana"]}"#)?;

    test.command()
        .arg("First: {{items.0}}")
        .args(["--data", "data.json"])
        .assert()
        .success()
        .stdout("First: apple\n");

    Ok(())
}

#[test]
fn test_renders_template_from_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("greeting.tmpl", "Hi {{default(name,'there')}}")?;

    test.command()
        .args(["--template-file", "greeting.tmpl"])
        .assert()
        .success()
        .stdout("Hi there\n");

    Ok(())
}

#[test]
fn test_inline_data_takes_precedence_over_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("data.json", r#"{"name": "file"}"#)?;

    test.command()
        .arg("{{name}}")
        .args(["--data", "data.json"])
        .args(["--data-json", r#"{"name": "inline"}"#])
        .assert()
        .success()
        .stdout("inline\n");

    Ok(())
}

#[test]
fn test_no_template_prints_empty_line() -> Result<()> {
    let test = CliTest::new()?;

    test.command().assert().success().stdout("\n");

    Ok(())
}

#[test]
fn test_no_data_treated_as_empty_document() -> Result<()> {
    let test = CliTest::new()?;

    test.command()
        .arg("{{missing}}<{{default(missing,'X')}}>")
        .assert()
        .success()
        .stdout("<X>\n");

    Ok(())
}

#[test]
fn test_error_sentinel_passes_through_with_success() -> Result<()> {
    // The CLI does not interpret the rendered text
    let test = CliTest::new()?;

    test.command()
        .arg("{{bogus(x)}}")
        .args(["--data-json", r#"{"x": 1}"#])
        .assert()
        .success()
        .stdout("#ERROR\n");

    Ok(())
}

#[test]
fn test_missing_data_file_fails() -> Result<()> {
    let test = CliTest::new()?;

    test.command()
        .arg("{{name}}")
        .args(["--data", "nope.json"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Error:"));

    Ok(())
}

#[test]
fn test_invalid_json_data_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("data.json", "{ not json }")?;

    test.command()
        .arg("{{name}}")
        .args(["--data", "data.json"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Failed to parse JSON data file"));

    Ok(())
}

#[test]
fn test_template_and_template_file_conflict() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("greeting.tmpl", "hi")?;

    test.command()
        .arg("inline template")
        .args(["--template-file", "greeting.tmpl"])
        .assert()
        .failure();

    Ok(())
}

#[test]
fn test_date_transformation_end_to_end() -> Result<()> {
    let test = CliTest::new()?;

    test.command()
        .arg("Member since {{date(joined)}}")
        .args(["--data-json", r#"{"joined": 1678886400}"#])
        .assert()
        .success()
        .stdout("Member since 3/15/2023\n");

    Ok(())
}
