//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use std::path::Path;
use tempfile::tempdir;
use ui_detect::error::UiDetectError;
use ui_detect::{pipeline, scanner};

/// 存在しないフォルダをスキャンした場合
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"), false);
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, UiDetectError::FolderNotFound(_)));
}

/// 空のフォルダをスキャンした場合
#[test]
fn test_scan_empty_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = scanner::scan_folder(dir.path(), false);

    // 空フォルダはエラーではなく空のVecを返す
    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());
}

/// ファイルをフォルダとして指定した場合
#[test]
fn test_scan_file_as_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let file = dir.path().join("bp.json");
    std::fs::write(&file, "{}").unwrap();

    assert!(matches!(
        scanner::scan_folder(&file, false),
        Err(UiDetectError::FolderNotFound(_))
    ));
}

/// 存在しないブループリント
#[test]
fn test_detect_missing_file() {
    let result = pipeline::detect_file(Path::new("/nonexistent/blueprint.json"));
    assert!(matches!(result, Err(UiDetectError::FileNotFound(_))));
}

/// JSONとして壊れたブループリント
#[test]
fn test_detect_broken_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ \"description\": ").unwrap();

    assert!(matches!(pipeline::detect_file(&path), Err(UiDetectError::JsonParse(_))));
}

/// トップレベルが配列のブループリント
#[test]
fn test_detect_non_object_blueprint() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("list.json");
    std::fs::write(&path, "[\"dashboard\"]").unwrap();

    assert!(matches!(pipeline::detect_file(&path), Err(UiDetectError::InvalidBlueprint(_))));
}

/// UiDetectErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        UiDetectError::Config("テスト設定エラー".to_string()),
        UiDetectError::FileNotFound("bp.json".to_string()),
        UiDetectError::FolderNotFound("/path/to/folder".to_string()),
        UiDetectError::InvalidBlueprint("不正な形式".to_string()),
        UiDetectError::NoBlueprintsFound("フォルダ".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty());
    }

    let err = UiDetectError::FileNotFound("bp.json".to_string());
    assert_eq!(err.to_string(), "ファイルが見つかりません: bp.json");
}

/// From変換の確認
#[test]
fn test_error_from_conversions() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: UiDetectError = io_err.into();
    assert!(matches!(err, UiDetectError::Io(_)));

    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: UiDetectError = json_err.into();
    assert!(matches!(err, UiDetectError::JsonParse(_)));
}
