use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_update_adds_keys_from_changed_file() -> Result<()> {
    let test = CliTest::with_languages(&["en"])?;
    test.write_file("src/a.ts", r#"t("a.title");"#)?;
    test.write_file("src/b.tsx", r#"t("b.items", { count: n });"#)?;
    test.write_file("public/translations/en.json", r#"{"existing": "Existing"}"#)?;

    let output = test.update_command().arg("src/b.tsx").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Processed 1 changed file(s), added 2 key(s)"));
    // Only the changed file is extracted
    assert_eq!(
        test.read_json("public/translations/en.json")?,
        json!({"b.items_one": "", "b.items_other": "", "existing": "Existing"})
    );

    Ok(())
}

#[test]
fn test_update_never_removes_keys() -> Result<()> {
    let test = CliTest::with_languages(&["en"])?;
    test.write_file("src/a.ts", r#"t("old");"#)?;
    test.sync_command().output()?;

    test.write_file("src/a.ts", r#"t("new");"#)?;
    let output = test.update_command().arg("src/a.ts").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_json("public/translations/en.json")?,
        json!({"new": "", "old": ""})
    );

    Ok(())
}

#[test]
fn test_update_skips_files_outside_source_root() -> Result<()> {
    let test = CliTest::with_languages(&["en"])?;
    test.write_file("scripts/build.ts", r#"t("script");"#)?;
    test.write_file("src/styles.css", "body { color: red; }")?;

    let output = test
        .update_command()
        .args(["scripts/build.ts", "src/styles.css", "-v"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Skipped scripts/build.ts"), "stdout: {}", out);
    assert!(out.contains("Skipped src/styles.css"), "stdout: {}", out);
    assert!(!test.root().join("public/translations/en.json").exists());

    Ok(())
}

#[test]
fn test_update_parse_error_is_error() -> Result<()> {
    let test = CliTest::with_languages(&["en"])?;
    test.write_file("src/a.ts", "t(\"unterminated\"\n")?;

    let output = test.update_command().arg("src/a.ts").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("failed to parse"));
    assert!(!test.root().join("public/translations/en.json").exists());

    Ok(())
}

#[test]
fn test_update_resolves_files_against_root() -> Result<()> {
    let test = CliTest::with_languages(&["en"])?;
    test.write_file("src/a.ts", r#"t("from.root");"#)?;
    let elsewhere = tempfile::TempDir::new()?;

    let output = test
        .update_command()
        .current_dir(elsewhere.path())
        .arg("--root")
        .arg(test.root())
        .arg("src/a.ts")
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Processed 1 changed file(s), added 1 key(s)"));
    assert_eq!(
        test.read_json("public/translations/en.json")?,
        json!({"from.root": ""})
    );

    Ok(())
}

#[test]
fn test_update_skips_ignored_and_escaping_paths() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18nsyncrc.json",
        r#"{"languages": ["en"], "ignores": ["generated"]}"#,
    )?;
    test.write_file("src/generated/b.ts", r#"t("generated");"#)?;
    test.write_file("scripts/build.ts", r#"t("script");"#)?;

    let output = test
        .update_command()
        .args(["src/generated/b.ts", "src/../scripts/build.ts"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(!test.root().join("public/translations/en.json").exists());

    Ok(())
}
