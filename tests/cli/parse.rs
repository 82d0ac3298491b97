use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, result_page};

#[test]
fn test_parse_prints_table() -> Result<()> {
    let page = result_page(
        r#"var c1Arr = new Array("","house","home","");
var c2Arr = new Array("","Haus","Heim","Leer");"#,
    );
    let test = CliTest::with_file("page.html", &page)?;

    let output = test.parse_command("page.html").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "\
+-------+------+
|  EN   |  DE  |
+-------+------+
| house | Haus |
| home  | Heim |
+-------+------+
"
    );
    assert_eq!(String::from_utf8(output.stderr)?, "");

    Ok(())
}

#[test]
fn test_parse_json_output() -> Result<()> {
    let page = result_page(
        r#"var c1Arr = new Array("Straße", x, "Weg");
var c2Arr = new Array("street", "path");"#,
    );
    let test = CliTest::with_file("page.html", &page)?;

    let output = test
        .parse_command("page.html")
        .args(["--format", "json"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let value: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        value,
        json!([
            { "source": "Straße", "target": "street" },
            { "source": "Weg", "target": "path" },
        ])
    );

    Ok(())
}

#[test]
fn test_parse_label_overrides() -> Result<()> {
    let page = result_page(
        r#"var c1Arr = new Array("cat");
var c2Arr = new Array("chat");"#,
    );
    let test = CliTest::with_file("page.html", &page)?;

    let output = test
        .parse_command("page.html")
        .args(["--source-label", "en", "--target-label", "fr"])
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("| EN  |  FR  |"), "{stdout}");
    assert!(stdout.contains("| cat | chat |"), "{stdout}");

    Ok(())
}

#[test]
fn test_parse_without_data_script_exits_one() -> Result<()> {
    let test = CliTest::with_file(
        "page.html",
        "<html><body><p>Keine Einträge gefunden!</p></body></html>",
    )?;

    let output = test.parse_command("page.html").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "\
+----+----+
| EN | DE |
+----+----+
"
    );
    assert_eq!(
        String::from_utf8(output.stderr)?,
        "warning: no translations found for \"page.html\"\n"
    );

    Ok(())
}

#[test]
fn test_parse_length_mismatch_exits_one() -> Result<()> {
    let page = result_page(
        r#"var c1Arr = new Array("a","b","c");
var c2Arr = new Array("x","y");"#,
    );
    let test = CliTest::with_file("page.html", &page)?;

    let output = test.parse_command("page.html").output()?;
    assert_eq!(output.status.code(), Some(1));

    Ok(())
}

#[test]
fn test_parse_malformed_script_exits_two() -> Result<()> {
    let page = result_page(r#"var c1Arr = new Array("a",;"#);
    let test = CliTest::with_file("page.html", &page)?;

    let output = test.parse_command("page.html").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(output.stdout, b"");
    let stderr = String::from_utf8(output.stderr)?;
    assert!(
        stderr.starts_with(
            "Error: Dictionary page format not recognized: failed to parse inline script at"
        ),
        "{stderr}"
    );

    Ok(())
}

#[test]
fn test_parse_uses_config_sentinels() -> Result<()> {
    let test = CliTest::with_file(
        "page.html",
        r#"<script>var srcTerms = new Array("chien"); var dstTerms = new Array("dog");</script>"#,
    )?;
    test.write_file(
        ".dictrc.json",
        r#"{
  "scriptType": null,
  "marker": "var srcTerms",
  "sourceVariable": "srcTerms",
  "targetVariable": "dstTerms",
  "sourceLabel": "fr",
  "targetLabel": "en"
}"#,
    )?;

    let output = test.parse_command("page.html").output()?;
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("| chien | dog |"), "{stdout}");

    Ok(())
}

#[test]
fn test_parse_invalid_config_exits_two() -> Result<()> {
    let test = CliTest::with_file("page.html", "<html></html>")?;
    test.write_file(".dictrc.json", r#"{ "baseUrl": "nowhere" }"#)?;

    let output = test.parse_command("page.html").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("baseUrl"));

    Ok(())
}

#[test]
fn test_parse_missing_file_exits_two() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.parse_command("missing.html").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("Failed to read file: missing.html"));

    Ok(())
}
