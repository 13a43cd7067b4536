use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Created .keyscanrc.json"));

    let content = test.read_file(".keyscanrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(
        parsed,
        json!({
            "includes": [],
            "ignores": ["**/node_modules/**", "**/dist/**", "**/build/**"],
            "ignoreTestFiles": true,
            "sourceRoot": "./",
            "outputDir": "./i18n-extract"
        })
    );
    assert!(content.contains("\n  \"includes\""), "2-space indentation");
    assert!(content.ends_with("}\n"));

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".keyscanrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".keyscanrc.json already exists"));
    assert_eq!(test.read_file(".keyscanrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("src/app.tsx", r#"export const A = () => <p>{t("a")}</p>;"#)?;

    let output = test.extract_command().output()?;
    assert!(
        output.status.success(),
        "Extract should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert_eq!(test.read_json("i18n-extract/keys.json")?, json!(["a"]));

    Ok(())
}
