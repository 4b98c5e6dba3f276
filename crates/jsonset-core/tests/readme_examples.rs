use jsonset_core::{apply_edit, normalize_to_text, rows_of, Path, SetOptions};

#[test]
fn jsonset_core_readme_quickstart() -> Result<(), Box<dyn std::error::Error>> {
    let document = r#"{"customer":[{"name":"Ada"}]}"#;
    let path = Path::from_json_str(r#"["customer", 0, "name"]"#)?;
    assert_eq!(path.to_string(), r#"$["customer"][0]["name"]"#);

    let outcome = apply_edit(document, &path, r#""Grace""#, &SetOptions::default())?;
    assert!(outcome.has_changes);
    assert!(outcome.contents.contains(r#""name": "Grace""#));

    let shown = normalize_to_text(&rows_of(&serde_json::from_str(&outcome.contents)?));
    assert_eq!(shown, "{}");
    Ok(())
}
