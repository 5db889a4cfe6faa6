use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(test.command().arg("init"))?;
    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Created .tdictrc.json"));

    let content = test.read_file(".tdictrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["primaryLocale"], "en");
    assert_eq!(parsed["includes"][0], "**/i18n.json");
    assert_eq!(parsed["protectPrimaryLocale"], false);
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".tdictrc.json", "{}")?;

    let result = run(test.command().arg("init"))?;
    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("Error: .tdictrc.json already exists"));
    assert_eq!(test.read_file(".tdictrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    run(test.command().arg("init"))?;
    test.write_file("app/i18n.json", r#"{"en": {"Close": "Close"}, "pt": {"Close": "Fechar"}}"#)?;

    let result = run(&mut test.check_command())?;
    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("Checked 1 dictionary module - no issues found"));

    Ok(())
}
