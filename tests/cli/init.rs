use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Created .i18nsyncrc.json"));

    let content = test.read_file(".i18nsyncrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["srcPath"], "src");
    assert_eq!(parsed["translationsPath"], "public/translations");
    assert_eq!(parsed["languages"], serde_json::json!(["en", "it"]));
    assert_eq!(parsed["functionName"], "t");
    assert!(content.ends_with('\n'));

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nsyncrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".i18nsyncrc.json already exists"));
    assert_eq!(test.read_file(".i18nsyncrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("src/app.tsx", r#"export const App = () => <p>{t("title")}</p>;"#)?;

    let output = test.sync_command().output()?;
    assert!(
        output.status.success(),
        "Sync should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("public/translations/en.json").exists());
    assert!(test.root().join("public/translations/it.json").exists());

    Ok(())
}
