use crate::error::{Result, UiDetectError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct BlueprintFile {
    pub path: PathBuf,
    pub file_name: String,
}

const BLUEPRINT_EXTENSIONS: &[&str] = &["json", "JSON"];

/// フォルダ内のブループリント（*.json）を列挙
///
/// `recursive` が偽なら直下のみ。ファイル名順（同名は相対パス順）。
pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<BlueprintFile>> {
    if !folder.is_dir() {
        return Err(UiDetectError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() || !is_blueprint_file(path) {
            continue;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        files.push(BlueprintFile {
            path: path.to_path_buf(),
            file_name,
        });
    }

    files.sort_by(|a, b| a.file_name.cmp(&b.file_name).then_with(|| a.path.cmp(&b.path)));

    Ok(files)
}

/// 指定パスと同じファイルを一覧から除く
///
/// `./` や相対パスの違いを吸収するため正規化してから比較する。
pub fn exclude_path(files: &mut Vec<BlueprintFile>, path: &Path) {
    let target = normalize(path);
    files.retain(|f| normalize(&f.path) != target);
}

fn normalize(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn is_blueprint_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| BLUEPRINT_EXTENSIONS.iter().any(|&e| e == ext.to_string_lossy()))
        .unwrap_or(false)
}
