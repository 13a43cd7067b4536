use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

const APP: &str = r#"import { Trans, useTranslation } from "react-i18next";
import i18next from "i18next";

export function App({ name }: { name: string }) {
  const { t } = useTranslation();
  return (
    <main>
      <h1>{t("home.title")}</h1>
      <p>{i18next.t("home.subtitle")}</p>
      <Trans i18nKey="home.welcome">Welcome back</Trans>
      <Trans>Plain text key</Trans>
    </main>
  );
}
"#;

#[test]
fn test_extract_clean_project() -> Result<()> {
    let test = CliTest::with_file("src/App.tsx", APP)?;

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Extracted 4 keys from 1 source file"));

    let keys = test.read_file("i18n-extract/keys.json")?;
    insta::assert_snapshot!(keys, @r#"
    [
      "Plain text key",
      "home.subtitle",
      "home.title",
      "home.welcome"
    ]
    "#);
    assert_eq!(test.read_file("i18n-extract/warnings.json")?, "[]\n");
    assert_eq!(test.read_file("i18n-extract/errors.json")?, "[]\n");

    Ok(())
}

#[test]
fn test_extract_reports_warnings_and_errors() -> Result<()> {
    let test = CliTest::with_file(
        "src/Page.jsx",
        r#"export const Page = () => (
  <div>
    {t(`legacy.key`)}
    {t(`items.${kind}`)}
    {t(dynamicKey)}
    <Trans i18nKey="rich"><b>bold</b></Trans>
  </div>
);
"#,
    )?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    let out = stdout(&output);
    assert!(out.contains("warning: \"legacy.key\"  template-literal"));
    assert!(out.contains("--> ./src/Page.jsx:3"));
    assert!(out.contains("error: \"t(`items.${kind}`)\"  template-literal"));
    assert!(out.contains("error: \"t(dynamicKey)\"  unsupported-argument"));
    assert!(out.contains("error: \"rich\"  trans-children"));
    assert!(out.contains("4 problems (3 errors, 1 warning)"));

    assert_eq!(
        test.read_json("i18n-extract/keys.json")?,
        json!(["legacy.key"])
    );
    assert_eq!(
        test.read_json("i18n-extract/warnings.json")?,
        json!([{
            "key": "legacy.key",
            "reason": "TemplateLiteral with no expressions",
            "filePath": "./src/Page.jsx",
            "line": 3
        }])
    );
    assert_eq!(
        test.read_json("i18n-extract/errors.json")?,
        json!([
            {
                "key": "t(`items.${kind}`)",
                "reason": "TemplateLiteral with expressions",
                "filePath": "./src/Page.jsx",
                "line": 4
            },
            {
                "key": "t(dynamicKey)",
                "reason": "Unsupported argument type",
                "filePath": "./src/Page.jsx",
                "line": 5
            },
            {
                "key": "rich",
                "reason": "Complex children in <Trans>",
                "filePath": "./src/Page.jsx",
                "line": 6
            }
        ])
    );

    Ok(())
}

#[test]
fn test_extract_continues_past_parse_failure() -> Result<()> {
    let test = CliTest::with_file("src/ok.ts", r#"t("still.found");"#)?;
    test.write_file("src/broken.tsx", "export function ( {")?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("parse-error"));
    assert!(stdout(&output).contains("--> ./src/broken.tsx"));

    assert_eq!(
        test.read_json("i18n-extract/keys.json")?,
        json!(["still.found"])
    );
    assert_eq!(test.read_json("i18n-extract/errors.json")?, json!([]));

    Ok(())
}

#[test]
fn test_extract_filters_existing_keys() -> Result<()> {
    let test = CliTest::with_file("src/a.ts", r#"t("old"); t("new"); t("nested.known");"#)?;
    test.write_file(
        "locales/en.json",
        r#"{ "old": "Old", "nested": { "known": "Known" } }"#,
    )?;

    let output = test
        .extract_command()
        .args(["--existing-keys", "locales/en.json"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Extracted 3 keys from 1 source file (1 new)"));

    assert_eq!(test.read_json("i18n-extract/keys.json")?, json!(["new"]));

    Ok(())
}

#[test]
fn test_extract_bad_existing_keys_is_internal_error() -> Result<()> {
    let test = CliTest::with_file("src/a.ts", r#"t("k");"#)?;
    test.write_file("keys.json", "not json")?;

    let output = test
        .extract_command()
        .args(["--existing-keys", "keys.json"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse existing keys file"));
    assert!(!test.root().join("i18n-extract").exists());

    Ok(())
}

#[test]
fn test_extract_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("src/a.ts", r#"t("k");"#)?;

    let output = test.extract_command().arg("--dry-run").output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Dry run: no files written"));
    assert!(!test.root().join("i18n-extract").exists());

    Ok(())
}

#[test]
fn test_extract_respects_config_file() -> Result<()> {
    let test = CliTest::with_file(
        ".keyscanrc.json",
        r#"{ "includes": ["src"], "outputDir": "./reports", "ignoreTestFiles": true }"#,
    )?;
    test.write_file("src/a.tsx", r#"t("in.src");"#)?;
    test.write_file("src/a.test.tsx", r#"t("in.test");"#)?;
    test.write_file("scripts/build.js", r#"t("in.scripts");"#)?;
    test.write_file("node_modules/lib/index.js", r#"t("in.deps");"#)?;

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(test.read_json("reports/keys.json")?, json!(["in.src"]));
    assert!(!test.root().join("i18n-extract").exists());

    Ok(())
}

#[test]
fn test_extract_output_dir_flag_overrides_config() -> Result<()> {
    let test = CliTest::with_file(".keyscanrc.json", r#"{ "outputDir": "./reports" }"#)?;
    test.write_file("a.js", r#"i18next.t("x");"#)?;

    let output = test
        .extract_command()
        .args(["--output-dir", "custom"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(test.read_json("custom/keys.json")?, json!(["x"]));
    assert!(!test.root().join("reports").exists());

    Ok(())
}

#[test]
fn test_extract_with_source_root() -> Result<()> {
    let test = CliTest::with_file("web/src/a.tsx", r#"t("web.key");"#)?;
    test.write_file("web/.keyscanrc.json", r#"{ "outputDir": "./out" }"#)?;
    test.write_file("other/b.tsx", r#"t("other.key");"#)?;

    let output = test
        .extract_command()
        .args(["--source-root", "web"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(test.read_json("web/out/keys.json")?, json!(["web.key"]));

    Ok(())
}

#[test]
fn test_extract_invalid_config_is_internal_error() -> Result<()> {
    let test = CliTest::with_file(".keyscanrc.json", r#"{ "ignores": ["[oops"] }"#)?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid glob pattern in 'ignores'"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("extract"));

    Ok(())
}
