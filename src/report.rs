//! 出力レポートの型定義

use serde::{Deserialize, Serialize};
use ui_detect_common::{BlueprintProfile, ComponentDetectionResult, Requirements};

/// ブループリント1件分の解析結果（検出結果はサブフィールドとして埋め込む）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintReport {
    pub id: String,
    pub name: String,
    pub description: String,
    /// type / category / dependencies / validation / metadata
    #[serde(flatten)]
    pub profile: BlueprintProfile,
    pub requirements: Requirements,
    pub component_detection: ComponentDetectionResult,
}

/// 読み込めなかったブループリント
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchFailure {
    pub file: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    /// RFC3339
    pub generated_at: String,
    pub reports: Vec<BlueprintReport>,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn new(reports: Vec<BlueprintReport>, failures: Vec<BatchFailure>) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            reports,
            failures,
        }
    }

    /// 全件の平均信頼度（0件なら0）
    pub fn average_confidence(&self) -> u8 {
        if self.reports.is_empty() {
            return 0;
        }
        let sum: f64 = self
            .reports
            .iter()
            .map(|r| r.component_detection.confidence as f64)
            .sum();
        (sum / self.reports.len() as f64).round() as u8
    }
}

/// JSON文字列に変換
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
