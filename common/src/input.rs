//! 入力ブループリントの型定義
//!
//! 呼び出し側から渡される緩い構造の入力。全フィールド省略可能。
//! 型の合わない値はフィールド単位で読み替えるか捨てる（文書全体は失敗させない）。

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// 検出の入力: プロジェクト説明と要件
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawInput {
    #[serde(deserialize_with = "lenient_opt_string")]
    pub id: Option<String>,

    #[serde(deserialize_with = "lenient_opt_string")]
    pub name: Option<String>,

    #[serde(deserialize_with = "lenient_string")]
    pub description: String,

    #[serde(deserialize_with = "lenient")]
    pub project_context: ProjectContext,

    /// 自由形式の要件（文字列部分のみコーパスに入る）
    pub requirements: Value,

    #[serde(deserialize_with = "lenient_strings")]
    pub functional_requirements: Vec<String>,

    pub technical_requirements: TechnicalRequirementsInput,

    #[serde(deserialize_with = "lenient_list")]
    pub design_requirements: Vec<DesignEntry>,

    #[serde(deserialize_with = "lenient_strings")]
    pub components: Vec<String>,

    #[serde(deserialize_with = "lenient")]
    pub architectural_guidelines: BTreeMap<String, Value>,

    #[serde(deserialize_with = "lenient")]
    pub performance_targets: BTreeMap<String, Value>,

    #[serde(deserialize_with = "lenient")]
    pub security_requirements: BTreeMap<String, Value>,

    /// 共有コンポーネント指定（真偽値以外は値の有無で判定）
    #[serde(deserialize_with = "lenient_flag")]
    pub shared: bool,

    #[serde(deserialize_with = "lenient_flag")]
    pub reusable: bool,
}

/// プロジェクト文脈
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectContext {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
}

/// 技術要件: `{category, specification}` の配列か、設定オブジェクトのどちらか
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TechnicalRequirementsInput {
    Entries(Vec<TechnicalEntry>),
    Settings(TechnicalSettings),
}

impl Default for TechnicalRequirementsInput {
    fn default() -> Self {
        TechnicalRequirementsInput::Entries(Vec::new())
    }
}

impl<'de> Deserialize<'de> for TechnicalRequirementsInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Array(items) => TechnicalRequirementsInput::Entries(
                items
                    .into_iter()
                    .filter(Value::is_object)
                    .filter_map(|v| serde_json::from_value(v).ok())
                    .collect(),
            ),
            Value::Object(_) => {
                let settings = serde_json::from_value(value).unwrap_or_default();
                TechnicalRequirementsInput::Settings(settings)
            }
            _ => TechnicalRequirementsInput::default(),
        })
    }
}

/// 技術要件エントリ（配列形式）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(deserialize_with = "lenient_string")]
    pub specification: String,
}

/// 技術要件（設定オブジェクト形式）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalSettings {
    #[serde(deserialize_with = "lenient_string")]
    pub framework: String,
    #[serde(deserialize_with = "lenient_string")]
    pub testing: String,
    #[serde(deserialize_with = "lenient_string")]
    pub performance: String,
    #[serde(deserialize_with = "lenient_string")]
    pub styling: String,
}

/// デザイン要件エントリ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub pattern: String,
    #[serde(deserialize_with = "lenient_string")]
    pub styling: String,
}

/// スカラー値をテキスト化（文字列・数値・真偽値のみ）
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// ヒントマップの値を表示用テキストに変換
pub fn hint_text(value: &Value) -> String {
    scalar_text(value).unwrap_or_else(|| value.to_string())
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(&value).unwrap_or_default())
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(&value).filter(|s| !s.is_empty()))
}

fn lenient_strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    })
}

fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::Array(_) | Value::Object(_) => true,
    })
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}
