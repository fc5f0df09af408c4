use thiserror::Error;

#[derive(Error, Debug)]
pub enum UiDetectError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("ブループリントが不正: {0}")]
    InvalidBlueprint(String),

    #[error("ブループリントが見つかりません: {0}")]
    NoBlueprintsFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, UiDetectError>;
