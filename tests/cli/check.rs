use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const ADMIN: &str = r#"{
  "$supplements": ["../catalog/i18n.json"],
  "en": {
    "Users": "Users",
    "Banana": "Banana"
  },
  "fr": {
    "Users": "Utilisateurs",
    "Group": "Groupe"
  }
}"#;

const CATALOG: &str = r#"{
  "en": {
    "Catalog": "Catalog",
    "Banana": "Banana2"
  },
  "fr": {
    "Catalog": "Catalog"
  }
}"#;

fn admin_project() -> Result<CliTest> {
    let test = CliTest::with_file("admin/i18n.json", ADMIN)?;
    test.write_file("catalog/i18n.json", CATALOG)?;
    Ok(test)
}

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_file(
        "app/i18n.json",
        r#"{"$supplements": ["../shared/i18n.json"], "en": {"Close": "Close"}, "pt": {"Close": "Fechar"}}"#,
    )?;
    test.write_file(
        "shared/i18n.json",
        r#"{"en": {"Leaf": "Leaf"}, "pt": {"Leaf": "Folha"}}"#,
    )?;

    let result = run(&mut test.check_command())?;
    assert_eq!(result.code, Some(0));
    assert!(
        result
            .stdout
            .contains("Checked 2 dictionary modules - no issues found")
    );

    Ok(())
}

#[test]
fn test_reports_warnings_without_failing() -> Result<()> {
    let test = admin_project()?;

    let result = run(&mut test.check_command())?;
    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);

    let out = &result.stdout;
    assert!(out.contains(r#"warning: "Group"  unknown-key"#));
    assert!(out.contains("--> admin/i18n.json:9:5"));
    assert!(out.contains(r#"warning: "Banana"  primary-override"#));
    assert!(out.contains(r#"replaced by "Banana2" from catalog/i18n.json"#));
    assert!(out.contains(r#"warning: "Catalog"  untranslated"#));
    assert!(out.contains("3 problems (0 errors, 3 warnings)"));

    Ok(())
}

#[test]
fn test_protect_primary_turns_override_into_error() -> Result<()> {
    let test = admin_project()?;

    let result = run(test.check_command().arg("--protect-primary"))?;
    assert_eq!(result.code, Some(1));
    assert!(result.stdout.contains(r#"error: "Banana"  primary-override"#));
    assert!(!result.stdout.contains("supplement-error"));

    Ok(())
}

#[test]
fn test_protect_primary_from_config() -> Result<()> {
    let test = admin_project()?;
    test.write_file(".tdictrc.json", r#"{"protectPrimaryLocale": true}"#)?;

    let result = run(test.check_command().arg("primary-override"))?;
    assert_eq!(result.code, Some(1));
    assert!(result.stdout.contains("1 problem (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_protect_primary_with_rule_subset_reports_rejected_merge() -> Result<()> {
    let test = CliTest::with_file(
        "admin/i18n.json",
        r#"{
  "$supplements": ["../catalog/i18n.json"],
  "en": {"Banana": "Banana"},
  "fr": {"Catalog": "Catalogue"}
}"#,
    )?;
    test.write_file("catalog/i18n.json", CATALOG)?;

    let result = run(test.check_command().args(["unknown-key", "--protect-primary"]))?;
    assert_eq!(result.code, Some(1), "stdout: {}", result.stdout);

    let out = &result.stdout;
    assert!(out.contains("supplement-error"));
    assert!(out.contains(
        r#"supplement catalog/i18n.json overrides protected locale 'en' for key "Banana""#
    ));
    assert!(out.contains("--> admin/i18n.json\n"));
    // Catalog is still known through the supplement's primary table.
    assert!(!out.contains("unknown-key"));
    assert!(out.contains("1 problem (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_selected_rules_only() -> Result<()> {
    let test = admin_project()?;

    let result = run(test.check_command().arg("unknown-key"))?;
    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("unknown-key"));
    assert!(!result.stdout.contains("untranslated"));
    assert!(!result.stdout.contains("primary-override"));

    Ok(())
}

#[test]
fn test_placeholder_mismatch_fails() -> Result<()> {
    let test = CliTest::with_file(
        "stats/i18n.json",
        r#"{
  "en": {
    "Select %(dimensionText)s": "Select %(dimensionText)s"
  },
  "pt": {
    "Select %(dimensionText)s": "Selecionar %(dimensao)s"
  }
}"#,
    )?;

    let result = run(&mut test.check_command())?;
    assert_eq!(result.code, Some(1));
    assert!(
        result
            .stdout
            .contains(r#"error: "Select %(dimensionText)s"  placeholder-mismatch"#)
    );
    assert!(result.stdout.contains("pt expects [dimensionText], got [dimensao]"));
    assert!(result.stdout.contains("--> stats/i18n.json:6:5"));

    Ok(())
}

#[test]
fn test_unknown_locale_from_config() -> Result<()> {
    let test = CliTest::with_file(
        "app/i18n.json",
        r#"{
  "en": {"Close": "Close"},
  "es": {"Close": "Cerrar"}
}"#,
    )?;
    test.write_file(".tdictrc.json", r#"{"locales": ["am", "fr", "pt"]}"#)?;

    let result = run(&mut test.check_command())?;
    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains(r#"warning: "es"  unknown-locale"#));
    assert!(result.stdout.contains("--> app/i18n.json:3:3"));
    assert!(result.stdout.contains("allowed locales: am, fr, pt"));

    Ok(())
}

#[test]
fn test_missing_supplement() -> Result<()> {
    let test = CliTest::with_file(
        "app/i18n.json",
        r#"{"$supplements": ["../gone/i18n.json"], "en": {"Close": "Close"}}"#,
    )?;

    let result = run(&mut test.check_command())?;
    assert_eq!(result.code, Some(1));
    assert!(result.stdout.contains("supplement-error"));
    assert!(result.stdout.contains("supplement gone/i18n.json not found"));
    assert!(result.stdout.contains("--> app/i18n.json\n"));
    assert!(!result.stdout.contains("parse-error"));

    Ok(())
}

#[test]
fn test_unparsable_supplement() -> Result<()> {
    let test = CliTest::with_file(
        "app/i18n.json",
        r#"{"$supplements": ["../broken/i18n.json"], "en": {"Close": "Close"}}"#,
    )?;
    test.write_file("broken/i18n.json", r#"{"en": "#)?;

    let result = run(&mut test.check_command())?;
    assert_eq!(result.code, Some(1));
    assert!(
        result
            .stdout
            .contains("supplement broken/i18n.json could not be parsed")
    );
    assert!(!result.stdout.contains("not found"));
    assert!(result.stdout.contains("parse-error"));

    Ok(())
}

#[test]
fn test_supplement_cycle() -> Result<()> {
    let test = CliTest::with_file(
        "a/i18n.json",
        r#"{"$supplements": ["../b/i18n.json"], "en": {"A": "Apple"}}"#,
    )?;
    test.write_file(
        "b/i18n.json",
        r#"{"$supplements": ["../a/i18n.json"], "en": {"B": "Banana"}}"#,
    )?;

    let result = run(&mut test.check_command())?;
    assert_eq!(result.code, Some(1));
    assert!(
        result
            .stdout
            .contains("supplement cycle: a/i18n.json -> b/i18n.json -> a/i18n.json")
    );
    assert!(
        result
            .stdout
            .contains("supplement cycle: b/i18n.json -> a/i18n.json -> b/i18n.json")
    );

    Ok(())
}

#[test]
fn test_parse_error() -> Result<()> {
    let test = CliTest::with_file("broken/i18n.json", r#"{"en": "#)?;
    test.write_file("ok/i18n.json", r#"{"en": {"A": "Apple"}}"#)?;

    let result = run(&mut test.check_command())?;
    assert_eq!(result.code, Some(1));
    assert!(result.stdout.contains("parse-error"));
    assert!(result.stdout.contains("--> broken/i18n.json"));
    assert!(!result.stderr.contains("could not be parsed"));

    Ok(())
}

#[test]
fn test_ignored_directories_are_skipped() -> Result<()> {
    let test = CliTest::with_file("app/i18n.json", r#"{"en": {"A": "Apple"}}"#)?;
    test.write_file("node_modules/pkg/i18n.json", r#"{"en": "#)?;

    let result = run(&mut test.check_command())?;
    assert_eq!(result.code, Some(0));
    assert!(
        result
            .stdout
            .contains("Checked 1 dictionary module - no issues found")
    );

    Ok(())
}

#[test]
fn test_primary_locale_override() -> Result<()> {
    let test = CliTest::with_file(
        "app/i18n.json",
        r#"{"pt": {"Fechar": "Fechar"}, "en": {"Fechar": "Close", "Open": "Open"}}"#,
    )?;

    let result = run(test.check_command().args(["--primary-locale", "pt"]))?;
    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains(r#"warning: "Open"  unknown-key"#));

    Ok(())
}
