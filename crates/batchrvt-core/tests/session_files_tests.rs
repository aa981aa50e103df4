use anyhow::Result;
use batchrvt_core::*;
use batchrvt_types::{CentralFileOpenMode, ProcessingMode, ScriptData, WorksetConfiguration};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn sample(revit_file_path: &str) -> ScriptData {
    ScriptData {
        session_id: Some("session".to_string()),
        revit_file_path: Some(revit_file_path.to_string()),
        is_cloud_model: Some(true),
        cloud_project_id: Some("project-guid".to_string()),
        cloud_model_id: Some("model-guid".to_string()),
        progress_number: Some(0),
        progress_max: Some(4),
        associated_data: Some(vec![]),
        ..ScriptData::default()
    }
}

#[test]
fn test_load_from_missing_file_does_not_create_it() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("Session.ScriptData.missing.json");

    let mut data = sample("a.rvt");
    let err = data.load_from_file(&path).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(!path.exists());
    assert_eq!(data, sample("a.rvt"));
    Ok(())
}

#[test]
fn test_load_from_invalid_json_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, "{ \"revitFilePath\": ")?;

    let err = ScriptData::new().load_from_file(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Malformed);
    Ok(())
}

#[test]
fn test_save_then_load_every_option_combination() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("Session.ScriptData.combo.json");

    for processing_mode in ProcessingMode::ALL {
        for central_file_open_mode in CentralFileOpenMode::ALL {
            for workset_configuration in WorksetConfiguration::ALL {
                let original = ScriptData {
                    processing_mode: Some(processing_mode),
                    central_file_open_mode: Some(central_file_open_mode),
                    workset_configuration: Some(workset_configuration),
                    ..sample("combo.rvt")
                };
                original.save_to_file(&path)?;

                let mut loaded = ScriptData::new();
                loaded.load_from_file(&path)?;
                assert_eq!(loaded, original);
            }
        }
    }
    Ok(())
}

#[test]
fn test_save_overwrites_existing_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("data.json");
    std::fs::write(&path, "x".repeat(4096))?;

    sample("short.rvt").save_to_file(&path)?;

    let mut loaded = ScriptData::new();
    loaded.load_from_file(&path)?;
    assert_eq!(loaded, sample("short.rvt"));
    Ok(())
}

#[test]
fn test_empty_batch_round_trips_as_empty_array() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("batch").join("empty.json");

    save_many_to_file(&path, &[])?;
    assert_eq!(std::fs::read_to_string(&path)?.trim(), "[]");

    let loaded = load_many_from_file(&path)?;
    assert!(loaded.is_empty());
    Ok(())
}

#[test]
fn test_batch_preserves_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("batch.json");
    let records = vec![sample("first.rvt"), sample("second.rvt"), sample("third.rvt")];

    save_many_to_file(&path, &records)?;
    assert_eq!(load_many_from_file(&path)?, records);
    Ok(())
}

#[test]
fn test_batch_skips_non_object_elements() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("mixed.json");
    std::fs::write(
        &path,
        r#"[
            { "revitFilePath": "one.rvt" },
            42,
            "text",
            null,
            [ { "revitFilePath": "nested.rvt" } ],
            { "revitFilePath": "two.rvt", "unknown": true }
        ]"#,
    )?;

    let loaded = load_many_from_file(&path)?;
    let paths: Vec<_> = loaded
        .iter()
        .map(|data| data.revit_file_path.as_deref())
        .collect();
    assert_eq!(paths, vec![Some("one.rvt"), Some("two.rvt")]);
    Ok(())
}

#[test]
fn test_batch_failures_yield_no_partial_list() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let missing = temp_dir.path().join("missing.json");
    assert_eq!(
        load_many_from_file(&missing).unwrap_err().kind(),
        ErrorKind::NotFound
    );

    let object = temp_dir.path().join("object.json");
    std::fs::write(&object, "{}")?;
    assert_eq!(
        load_many_from_file(&object).unwrap_err().kind(),
        ErrorKind::Malformed
    );

    let truncated = temp_dir.path().join("truncated.json");
    std::fs::write(&truncated, r#"[ { "revitFilePath": "one.rvt" }, { "revit"#)?;
    assert!(load_many_from_file(&truncated).is_err());
    Ok(())
}

#[test]
fn test_progress_record_path_is_sibling() -> Result<()> {
    let dir = Path::new("/var/batchrvt/data");
    let path = progress_record_file_path(&dir.join("Session.ScriptData.ABC.json"))?;
    assert_eq!(path, dir.join("Session.ProgressRecord.ABC.json"));
    Ok(())
}

#[test]
fn test_progress_number_round_trips() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir
        .path()
        .join("nested")
        .join("Session.ProgressRecord.ABC.json");

    for value in [0, 1, -1, 42, i64::MAX, i64::MIN] {
        set_progress_number(&path, value)?;
        assert_eq!(get_progress_number(&path)?, value);
    }
    Ok(())
}

#[test]
fn test_progress_number_tolerates_surrounding_whitespace() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("progress.json");
    std::fs::write(&path, "  17\r\n")?;

    assert_eq!(get_progress_number(&path)?, 17);
    Ok(())
}

#[test]
fn test_progress_number_absent_for_missing_or_invalid() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let missing = temp_dir.path().join("missing.json");
    assert_eq!(get_progress_number(&missing).ok(), None);
    assert_eq!(
        get_progress_number(&missing).unwrap_err().kind(),
        ErrorKind::NotFound
    );

    let garbage = temp_dir.path().join("garbage.json");
    for content in ["twelve", "", "1.5", "12 13"] {
        std::fs::write(&garbage, content)?;
        assert_eq!(get_progress_number(&garbage).ok(), None, "{content:?}");
    }
    Ok(())
}

#[test]
fn test_unique_paths_differ() {
    let folder = PathBuf::from("/data");
    let first = unique_script_data_file_path(&folder);
    let second = unique_script_data_file_path(&folder);

    assert_ne!(first, second);
    assert_eq!(first.parent(), Some(folder.as_path()));
    assert!(session_id_from_script_data_file_path(&first).is_ok());
}

#[test]
fn test_create_script_data_file_assigns_session_id() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut data = ScriptData {
        task_data: Some("payload".to_string()),
        ..ScriptData::default()
    };

    let path = create_script_data_file(temp_dir.path(), &mut data)?;
    let session_id = session_id_from_script_data_file_path(&path)?;
    assert_eq!(data.session_id.as_deref(), Some(session_id.as_str()));

    let mut loaded = ScriptData::new();
    loaded.load_from_file(&path)?;
    assert_eq!(loaded, data);
    Ok(())
}

#[test]
fn test_create_script_data_file_keeps_existing_session_id() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut data = ScriptData {
        session_id: Some("preset".to_string()),
        ..ScriptData::default()
    };

    create_script_data_file(temp_dir.path(), &mut data)?;
    assert_eq!(data.session_id.as_deref(), Some("preset"));
    Ok(())
}

#[test]
fn test_batch_and_progress_accept_byte_order_mark() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let batch = temp_dir.path().join("bom-batch.json");
    std::fs::write(&batch, "\u{feff}[ { \"revitFilePath\": \"one.rvt\" } ]")?;
    let records = load_many_from_file(&batch)?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].revit_file_path.as_deref(), Some("one.rvt"));

    let progress = temp_dir.path().join("Session.ProgressRecord.BOM.json");
    std::fs::write(&progress, "\u{feff}7")?;
    assert_eq!(get_progress_number(&progress)?, 7);

    Ok(())
}

#[test]
fn test_progress_number_invalid_utf8_is_malformed() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("Session.ProgressRecord.BIN.json");
    std::fs::write(&path, [0xff, 0xfe, b'1'])?;

    assert_eq!(
        get_progress_number(&path).unwrap_err().kind(),
        ErrorKind::Malformed
    );
    Ok(())
}
