use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

fn project() -> Result<CliTest> {
    let test = CliTest::with_file(
        "stats/i18n.json",
        r#"{
  "$supplements": ["shared.json"],
  "en": {"reportsReceivedStats": "Avg %(average)s, Min %(min)s"},
  "fr": {"reportsReceivedStats": "Moyenne %(average)s, Min %(min)s"}
}"#,
    )?;
    test.write_file(
        "stats/shared.json",
        r#"{"en": {"Close": "Close"}, "pt": {"Close": "Fechar"}}"#,
    )?;
    Ok(test)
}

#[test]
fn test_lookup_formats_placeholders() -> Result<()> {
    let test = project()?;

    let result = run(test
        .lookup_command("stats/i18n.json", "reportsReceivedStats")
        .args(["--locale", "fr", "--arg", "average=3", "--arg", "min=1"]))?;
    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "Moyenne 3, Min 1\n");

    Ok(())
}

#[test]
fn test_lookup_keeps_unknown_placeholders() -> Result<()> {
    let test = project()?;

    let result = run(test
        .lookup_command("stats/i18n.json", "reportsReceivedStats")
        .args(["--arg", "average=3"]))?;
    assert_eq!(result.stdout, "Avg 3, Min %(min)s\n");

    Ok(())
}

#[test]
fn test_lookup_uses_supplements() -> Result<()> {
    let test = project()?;

    let result = run(test
        .lookup_command("stats/i18n.json", "Close")
        .args(["--locale", "pt"]))?;
    assert_eq!(result.stdout, "Fechar\n");

    Ok(())
}

#[test]
fn test_lookup_falls_back_to_primary() -> Result<()> {
    let test = project()?;

    let result = run(test
        .lookup_command("stats/i18n.json", "Close")
        .args(["--locale", "am"]))?;
    assert_eq!(result.code, Some(0));
    assert_eq!(result.stdout, "Close\n");

    Ok(())
}

#[test]
fn test_lookup_unknown_key_returns_key() -> Result<()> {
    let test = project()?;

    let result = run(&mut test.lookup_command("stats/i18n.json", "Not here"))?;
    assert_eq!(result.code, Some(0));
    assert_eq!(result.stdout, "Not here\n");
    assert!(result.stderr.contains("key not found"));

    Ok(())
}

#[test]
fn test_lookup_rejects_malformed_arg() -> Result<()> {
    let test = project()?;

    let result = run(test
        .lookup_command("stats/i18n.json", "Close")
        .args(["--arg", "average"]))?;
    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("expected NAME=VALUE"));

    Ok(())
}
