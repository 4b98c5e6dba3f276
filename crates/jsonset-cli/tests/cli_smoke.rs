use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

const CUSTOMER: &str = r#"{"customer":[{"name":"Ada","age":36,"tags":["x"]}],"total":1}"#;

fn write_tempfile(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create tempfile");
    write!(file, "{contents}").expect("write tempfile");
    file
}

fn jsonset() -> Command {
    let mut cmd = Command::cargo_bin("jsonset").expect("binary jsonset should be built");
    cmd.env_remove("JSONSET_LOG");
    cmd
}

#[test]
fn help_succeeds() {
    jsonset()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Replace values inside JSON documents by path."));
}

#[test]
fn path_is_formatted() {
    jsonset()
        .arg("path")
        .arg(r#"["customer",0,"name"]"#)
        .assert()
        .success()
        .stdout("$[\"customer\"][0][\"name\"]\n");
}

#[test]
fn root_path_is_dollar() {
    jsonset().arg("path").arg("[]").assert().success().stdout("$\n");
}

#[test]
fn negative_index_is_rejected() {
    jsonset()
        .arg("path")
        .arg("[-1]")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid path"));
}

#[test]
fn set_prints_pretty_document() {
    let doc = write_tempfile(r#"{"a":[1,2,3]}"#);
    jsonset()
        .arg("set")
        .arg(doc.path())
        .args(["--path", r#"["a",1]"#, "--value", "99"])
        .assert()
        .success()
        .stdout("{\n  \"a\": [\n    1,\n    99,\n    3\n  ]\n}\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn set_reads_value_from_stdin() {
    let doc = write_tempfile("{}");
    jsonset()
        .arg("set")
        .arg(doc.path())
        .args(["-p", r#"["a",0,"b"]"#])
        .write_stdin("5")
        .assert()
        .success()
        .stdout("{\n  \"a\": [\n    {\n      \"b\": 5\n    }\n  ]\n}\n");
}

#[test]
fn set_in_place_rewrites_file() {
    let doc = write_tempfile(CUSTOMER);
    jsonset()
        .arg("set")
        .arg(doc.path())
        .args(["-p", r#"["customer",0,"name"]"#, "--value", r#""Grace""#, "--in-place"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    let written = fs::read_to_string(doc.path()).expect("read back");
    let value: serde_json::Value = serde_json::from_str(&written).expect("valid JSON");
    assert_eq!(value["customer"][0]["name"], "Grace");
    assert_eq!(value["total"], 1);
}

#[test]
fn malformed_value_leaves_file_untouched() {
    let doc = write_tempfile(CUSTOMER);
    jsonset()
        .arg("set")
        .arg(doc.path())
        .args(["-p", r#"["total"]"#, "--value", "{oops", "-i"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid JSON value"));
    assert_eq!(fs::read_to_string(doc.path()).unwrap(), CUSTOMER);
}

#[test]
fn strict_flag_reports_type_conflict() {
    let doc = write_tempfile(CUSTOMER);
    jsonset()
        .arg("set")
        .arg(doc.path())
        .args(["-p", r#"["total","n"]"#, "--value", "1", "--strict"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("found number at $[\"total\"]: expected JSON object"));
}

#[test]
fn out_of_bounds_index_needs_pad() {
    let doc = write_tempfile("[1]");
    jsonset()
        .arg("set")
        .arg(doc.path())
        .args(["-p", "[2]", "--value", "3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("index 2 out of bounds"));

    jsonset()
        .arg("set")
        .arg(doc.path())
        .args(["-p", "[2]", "--value", "3", "--pad"])
        .assert()
        .success()
        .stdout("[\n  1,\n  null,\n  3\n]\n");
}

#[test]
fn pad_rejects_unbounded_index() {
    let doc = write_tempfile("[]");
    jsonset()
        .arg("set")
        .arg(doc.path())
        .args(["-p", &format!("[{}]", usize::MAX), "--value", "1", "--pad"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!("index {} out of bounds", usize::MAX)));
    assert_eq!(fs::read_to_string(doc.path()).unwrap(), "[]");
}

#[test]
fn show_of_nested_array_is_empty_object() {
    jsonset()
        .args(["show", "-"])
        .write_stdin("[[1,2]]")
        .assert()
        .success()
        .stdout("{}
JSON Path: $
");
}

#[test]
fn stdin_document_requires_value_flag() {
    jsonset()
        .args(["set", "-", "-p", "[]"])
        .write_stdin("{}")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--value is required"));
}

#[test]
fn show_prints_node_content_and_path() {
    let doc = write_tempfile(CUSTOMER);
    jsonset()
        .arg("show")
        .arg(doc.path())
        .args(["-p", r#"["customer",0]"#])
        .assert()
        .success()
        .stdout(
            "{\n  \"name\": \"Ada\",\n  \"age\": 36\n}\nJSON Path: $[\"customer\"][0]\n",
        );
}

#[test]
fn show_unwraps_scalar_nodes() {
    jsonset()
        .args(["show", "-", "-p", r#"["name"]"#])
        .write_stdin(r#"{"name":"Ada"}"#)
        .assert()
        .success()
        .stdout("\"Ada\"\nJSON Path: $[\"name\"]\n");
}

#[test]
fn show_missing_path_fails() {
    let doc = write_tempfile(CUSTOMER);
    jsonset()
        .arg("show")
        .arg(doc.path())
        .args(["-p", r#"["missing"]"#])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no value at $[\"missing\"]"));
}
