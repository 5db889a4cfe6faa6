use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, run};

fn project() -> Result<CliTest> {
    let test = CliTest::with_file(
        "admin/i18n.json",
        r#"{
  "$supplements": ["catalog/i18n.json"],
  "en": {"A": "Apple", "B": "Banana"},
  "fr": {"A": "Pomme"},
  "am": {}
}"#,
    )?;
    test.write_file(
        "admin/catalog/i18n.json",
        r#"{
  "$supplements": ["../leaf.json"],
  "en": {"B": "Banana2", "C": "Cherry"},
  "fr": {"C": "Cerise"}
}"#,
    )?;
    test.write_file(
        "admin/leaf.json",
        r#"{"en": {"L": "Leaf"}, "pt": {"L": "Folha"}, "fr": {"C": "Cerise!"}}"#,
    )?;
    Ok(test)
}

#[test]
fn test_merge_prints_effective_dictionary() -> Result<()> {
    let test = project()?;

    let result = run(&mut test.merge_command("admin/i18n.json"))?;
    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);

    let merged: Value = serde_json::from_str(&result.stdout)?;
    assert_eq!(
        merged,
        json!({
            "am": {},
            "en": {"A": "Apple", "B": "Banana2", "C": "Cherry", "L": "Leaf"},
            "fr": {"A": "Pomme", "C": "Cerise!"},
            "pt": {"L": "Folha"}
        })
    );

    Ok(())
}

#[test]
fn test_merge_writes_output_file() -> Result<()> {
    let test = project()?;
    test.write_file("out/.keep", "")?;

    let result = run(test
        .merge_command("admin/i18n.json")
        .args(["--output", "out/merged.json"]))?;
    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    assert!(
        result
            .stdout
            .contains("Merged admin/i18n.json (4 locales, 7 entries) into out/merged.json")
    );

    let written: Value = serde_json::from_str(&test.read_file("out/merged.json")?)?;
    assert_eq!(written["en"]["B"], "Banana2");
    assert!(test.root().join("out/merged.json").is_file());

    Ok(())
}

#[test]
fn test_merge_output_into_missing_directory_fails() -> Result<()> {
    let test = project()?;

    let result = run(test
        .merge_command("admin/i18n.json")
        .args(["--output", "nowhere/merged.json"]))?;
    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("Failed to write merged dictionary"));

    Ok(())
}

#[test]
fn test_merge_protect_primary_rejects_override() -> Result<()> {
    let test = project()?;

    let result = run(test
        .merge_command("admin/i18n.json")
        .arg("--protect-primary"))?;
    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("Failed to resolve admin/i18n.json"));
    assert!(result.stderr.contains("overrides protected locale 'en'"));
    assert!(result.stdout.is_empty());

    Ok(())
}

#[test]
fn test_merge_missing_module() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(&mut test.merge_command("nope/i18n.json"))?;
    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("Failed to read dictionary file"));

    Ok(())
}

#[test]
fn test_merge_malformed_supplement() -> Result<()> {
    let test = CliTest::with_file(
        "app/i18n.json",
        r#"{"$supplements": ["broken.json"], "en": {"A": "Apple"}}"#,
    )?;
    test.write_file("app/broken.json", r#"{"en": {"A": 1}}"#)?;

    let result = run(&mut test.merge_command("app/i18n.json"))?;
    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("missing supplement"));

    Ok(())
}
