use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

fn setup_sample(test: &CliTest) -> Result<()> {
    test.write_file(
        "src/components/Cart.tsx",
        r#"
export function Cart({ items }) {
    return (
        <div>
            <h1>{t("cart.title")}</h1>
            <p>{t("cart.items", { count: items.length })}</p>
        </div>
    );
}
"#,
    )?;
    test.write_file(
        "src/greet.ts",
        r#"
export const greet = (name: string) => i18n.t(`hello.${name}`, { name });
export const bye = () => t("farewell");
"#,
    )
}

#[test]
fn test_sync_creates_translation_files() -> Result<()> {
    let test = CliTest::with_languages(&["en", "fr"])?;
    setup_sample(&test)?;

    let output = test.sync_command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Extracted 4 key(s) from 2 source file(s)"));

    insta::assert_snapshot!(test.read_file("public/translations/en.json")?, @r#"
    {
      "cart.items_one": "",
      "cart.items_other": "",
      "cart.title": "",
      "farewell": "",
      "hello.${}": ""
    }
    "#);
    assert_eq!(
        test.read_json("public/translations/fr.json")?,
        json!({
            "cart.items_many": "",
            "cart.items_one": "",
            "cart.items_other": "",
            "cart.title": "",
            "farewell": "",
            "hello.${}": ""
        })
    );

    Ok(())
}

#[test]
fn test_sync_keeps_existing_translations() -> Result<()> {
    let test = CliTest::with_languages(&["en"])?;
    setup_sample(&test)?;
    test.write_file(
        "public/translations/en.json",
        r#"{"farewell": "Goodbye", "legacy": "Still here"}"#,
    )?;

    let output = test.sync_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_json("public/translations/en.json")?,
        json!({
            "cart.items_one": "",
            "cart.items_other": "",
            "cart.title": "",
            "farewell": "Goodbye",
            "hello.${}": "",
            "legacy": "Still here"
        })
    );

    Ok(())
}

#[test]
fn test_second_sync_is_noop() -> Result<()> {
    let test = CliTest::with_languages(&["en"])?;
    setup_sample(&test)?;

    test.sync_command().output()?;
    // Compact formatting the writer never produces
    let compact = r#"{"cart.items_one":"","cart.items_other":"","cart.title":"","farewell":"","hello.${}":""}"#;
    test.write_file("public/translations/en.json", compact)?;

    let output = test.sync_command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("translation files are up to date"));
    assert_eq!(test.read_file("public/translations/en.json")?, compact);

    Ok(())
}

#[test]
fn test_sync_dry_run_reports_without_writing() -> Result<()> {
    let test = CliTest::with_languages(&["en"])?;
    setup_sample(&test)?;

    let output = test.sync_command().arg("--dry-run").output()?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("public/translations/en.json: 5 missing key(s)"));
    assert!(out.contains("Would add 5 key(s) in 1 file(s)."));
    assert!(!test.root().join("public/translations/en.json").exists());

    Ok(())
}

#[test]
fn test_sync_parse_error_aborts_run() -> Result<()> {
    let test = CliTest::with_languages(&["en"])?;
    setup_sample(&test)?;
    test.write_file("src/broken.ts", "export const x = t(\"broken\";\n")?;

    let output = test.sync_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("failed to parse"), "stderr: {}", err);
    assert!(err.contains("broken.ts:1"), "stderr: {}", err);
    assert!(!test.root().join("public/translations/en.json").exists());

    Ok(())
}

#[test]
fn test_sync_corrupt_translation_file_is_isolated() -> Result<()> {
    let test = CliTest::with_languages(&["en", "it"])?;
    test.write_file("src/a.ts", r#"t("farewell");"#)?;
    test.write_file("public/translations/en.json", "{ not json")?;

    let output = test.sync_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("is corrupt"));
    assert_eq!(test.read_file("public/translations/en.json")?, "{ not json");
    assert_eq!(
        test.read_json("public/translations/it.json")?,
        json!({"farewell": ""})
    );

    Ok(())
}

#[test]
fn test_sync_cli_overrides() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("app/index.js", r#"translate("title"); t("ignored");"#)?;

    let output = test
        .sync_command()
        .args(["--src-path", "app"])
        .args(["--translations-path", "locales"])
        .args(["--language", "de"])
        .args(["--function-name", "translate"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(test.read_json("locales/de.json")?, json!({"title": ""}));
    assert!(!test.root().join("locales/en.json").exists());

    Ok(())
}

#[test]
fn test_sync_contexts() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18nsyncrc.json",
        r#"{"languages": ["en"], "contexts": true}"#,
    )?;
    test.write_file(
        "src/admin.tsx",
        r#"t("title"); t("title", { context: "admin", user }); t("menu", { context: "admin" });"#,
    )?;

    let output = test.sync_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_json("public/translations/en.json")?,
        json!({"title": ""})
    );
    assert_eq!(
        test.read_json("public/translations/admin/en.json")?,
        json!({"menu": "", "title": ""})
    );

    Ok(())
}

#[test]
fn test_sync_missing_source_root_is_error() -> Result<()> {
    let test = CliTest::with_languages(&["en"])?;

    let output = test.sync_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("failed to walk"));

    Ok(())
}

#[test]
fn test_sync_invalid_config_is_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nsyncrc.json", r#"{"languages": []}"#)?;

    let output = test.sync_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("'languages' must contain at least one language tag"));

    Ok(())
}

#[test]
fn test_sync_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18nsyncrc.json",
        r#"{"languages": ["en"], "ignores": ["generated"]}"#,
    )?;
    test.write_file("src/a.ts", r#"t("kept");"#)?;
    test.write_file("src/generated/b.ts", r#"t("skipped"); t("broken""#)?;

    let output = test.sync_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_json("public/translations/en.json")?,
        json!({"kept": ""})
    );

    Ok(())
}
