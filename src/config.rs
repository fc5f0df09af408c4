use crate::error::{Result, UiDetectError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// ログレベルを上書きする環境変数
pub const LOG_ENV: &str = "UI_DETECT_LOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// ログレベル（trace/debug/info/warn/error、EnvFilter書式も可）
    pub log_level: String,
    /// 出力JSONを整形する
    pub pretty_output: bool,
    /// batch でサブフォルダも走査する
    pub recursive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            pretty_output: true,
            recursive: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| UiDetectError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("ui-detect").join("config.json"))
    }

    /// 有効なログレベル
    ///
    /// 環境変数を優先
    pub fn effective_log_level(&self) -> String {
        match std::env::var(LOG_ENV) {
            Ok(level) if !level.trim().is_empty() => level,
            _ => self.log_level.clone(),
        }
    }

    pub fn set_log_level(&mut self, level: String) -> Result<()> {
        if level.trim().is_empty() {
            return Err(UiDetectError::Config("ログレベルが空です".into()));
        }
        self.log_level = level;
        self.save()
    }

    pub fn set_pretty_output(&mut self, pretty: bool) -> Result<()> {
        self.pretty_output = pretty;
        self.save()
    }
}
