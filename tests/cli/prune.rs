use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

fn setup(test: &CliTest) -> Result<()> {
    test.write_file("src/a.tsx", r#"t("kept"); t("items", { count });"#)?;
    test.write_file(
        "public/translations/en.json",
        r#"{"items": "Items", "items_one": "One item", "items_other": "Items", "kept": "Kept", "stale": "Stale"}"#,
    )
}

#[test]
fn test_prune_dry_run_lists_stale_keys() -> Result<()> {
    let test = CliTest::with_languages(&["en"])?;
    setup(&test)?;
    let before = test.read_file("public/translations/en.json")?;

    let output = test.prune_command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    insta::assert_snapshot!(stdout(&output), @r"
    public/translations/en.json:
      - items
      - stale
    Would delete 2 key(s) in 1 file(s).
    Run with --apply to delete these keys.
    ");
    assert_eq!(test.read_file("public/translations/en.json")?, before);

    Ok(())
}

#[test]
fn test_prune_apply_removes_stale_keys() -> Result<()> {
    let test = CliTest::with_languages(&["en"])?;
    setup(&test)?;

    let output = test.prune_command().arg("--apply").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Deleted 2 key(s) in 1 file(s)."));
    assert_eq!(
        test.read_json("public/translations/en.json")?,
        json!({"items_one": "One item", "items_other": "Items", "kept": "Kept"})
    );

    Ok(())
}

#[test]
fn test_prune_clean_project() -> Result<()> {
    let test = CliTest::with_languages(&["en", "it"])?;
    test.write_file("src/a.ts", r#"t("kept");"#)?;
    test.sync_command().output()?;

    let output = test.prune_command().arg("--apply").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("No unused keys found"));

    Ok(())
}
