use super::*;
use crate::error::LabelError;
use crate::excel::ExcelImporter;
use crate::parser::parse_custom_labels;
use std::fs;
use tempfile::TempDir;

const LABELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<CustomLabels xmlns="http://soap.sforce.com/2006/04/metadata">
    <labels>
        <fullName>K1</fullName>
        <categories>CatA</categories>
        <language>es</language>
        <protected>false</protected>
        <shortDescription>Desc1</shortDescription>
        <value>Hola</value>
    </labels>
    <labels>
        <fullName>K2</fullName>
        <categories>CatB</categories>
        <language>en</language>
        <protected>false</protected>
        <shortDescription>Desc2</shortDescription>
        <value>Hi</value>
    </labels>
</CustomLabels>
"#;

const EN_TRANSLATION_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Translations xmlns="http://soap.sforce.com/2006/04/metadata">
    <customLabels>
        <label>Hello</label>
        <name>K1</name>
    </customLabels>
</Translations>
"#;

fn create_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("labels")).unwrap();
    fs::create_dir_all(temp_dir.path().join("translations")).unwrap();
    fs::write(temp_dir.path().join("labels/CustomLabels.labels"), LABELS_XML).unwrap();
    fs::write(
        temp_dir.path().join("translations/en.translation"),
        EN_TRANSLATION_XML,
    )
    .unwrap();
    temp_dir
}

// =========================================================================
// export Tests
// =========================================================================

#[test]
fn test_export_writes_workbook() {
    let temp_dir = create_project();
    let output = temp_dir.path().join("out.xlsx");

    export(
        temp_dir.path().to_path_buf(),
        "en".to_string(),
        None,
        None,
        Some(output.clone()),
    )
    .unwrap();

    let table = ExcelImporter::new(&output).import().unwrap();
    assert_eq!(table.header().unwrap(), ["Translation key", "Description", "en"]);
    assert_eq!(table.data_rows()[0], ["K1", "Desc1", "Hello"]);
    assert_eq!(table.data_rows()[1], ["K2", "Desc2", "Hi"]);
}

#[test]
fn test_export_with_filters() {
    let temp_dir = create_project();
    let output = temp_dir.path().join("filtered.xlsx");

    export(
        temp_dir.path().to_path_buf(),
        "en, es".to_string(),
        Some("CatB".to_string()),
        Some("K".to_string()),
        Some(output.clone()),
    )
    .unwrap();

    let table = ExcelImporter::new(&output).import().unwrap();
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.data_rows()[0], ["K2", "Desc2", "Hi", ""]);
}

#[test]
fn test_export_empty_language_list() {
    let temp_dir = create_project();

    let result = export(
        temp_dir.path().to_path_buf(),
        " , ".to_string(),
        None,
        None,
        Some(temp_dir.path().join("never.xlsx")),
    );

    assert!(matches!(result, Err(LabelError::Validation(_))));
    assert!(!temp_dir.path().join("never.xlsx").exists());
}

#[test]
fn test_export_missing_labels_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("never.xlsx");

    let result = export(
        temp_dir.path().to_path_buf(),
        "en".to_string(),
        None,
        None,
        Some(output.clone()),
    );

    assert!(matches!(result, Err(LabelError::MissingFile { .. })));
    assert!(!output.exists());
}

// =========================================================================
// import Tests
// =========================================================================

#[test]
fn test_import_round_trip_leaves_values() {
    let temp_dir = create_project();
    let workbook = temp_dir.path().join("round.xlsx");
    export(
        temp_dir.path().to_path_buf(),
        "en,es".to_string(),
        None,
        None,
        Some(workbook.clone()),
    )
    .unwrap();

    let labels_path = temp_dir.path().join("labels/CustomLabels.labels");
    let before = parse_custom_labels(&labels_path).unwrap();

    import(temp_dir.path().to_path_buf(), workbook, false).unwrap();

    assert_eq!(parse_custom_labels(&labels_path).unwrap(), before);
}

#[test]
fn test_import_dry_run_keeps_file_bytes() {
    let temp_dir = create_project();
    let workbook = temp_dir.path().join("dry.xlsx");
    export(
        temp_dir.path().to_path_buf(),
        "en".to_string(),
        None,
        None,
        Some(workbook.clone()),
    )
    .unwrap();

    let labels_path = temp_dir.path().join("labels/CustomLabels.labels");
    import(temp_dir.path().to_path_buf(), workbook, true).unwrap();

    assert_eq!(fs::read_to_string(&labels_path).unwrap(), LABELS_XML);
}

#[test]
fn test_import_missing_workbook() {
    let temp_dir = create_project();

    let result = import(
        temp_dir.path().to_path_buf(),
        temp_dir.path().join("missing.xlsx"),
        false,
    );

    assert!(matches!(result, Err(LabelError::MissingFile { .. })));
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("labels/CustomLabels.labels")).unwrap(),
        LABELS_XML
    );
}

#[test]
fn test_import_missing_project() {
    let temp_dir = create_project();
    let workbook = temp_dir.path().join("wb.xlsx");
    export(
        temp_dir.path().to_path_buf(),
        "en".to_string(),
        None,
        None,
        Some(workbook.clone()),
    )
    .unwrap();

    let result = import(temp_dir.path().join("nope"), workbook, false);
    assert!(matches!(result, Err(LabelError::MissingFile { .. })));
}
