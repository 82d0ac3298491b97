use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["baseUrl"], "https://www.dict.cc/");
    assert_eq!(parsed["scriptType"], "text/javascript");
    assert_eq!(parsed["sourceVariable"], "c1Arr");
    assert_eq!(parsed["targetVariable"], "c2Arr");

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout)?, "\u{2713} Created .dictrc.json\n");

    assert!(test.root().join(".dictrc.json").exists());
    let content = test.read_file(".dictrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".dictrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8(output.stderr)?,
        "Error: .dictrc.json already exists\n"
    );
    assert_eq!(test.read_file(".dictrc.json")?, "{}");

    Ok(())
}
