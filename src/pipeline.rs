//! ブループリント解析パイプライン
//!
//! ファイル読み込み → 要件解析 → コンポーネント検出 → レポート化。
//! 検出の前後で開始・完了・失敗のイベントをtracingで出力する。

use crate::error::{Result, UiDetectError};
use crate::report::{BatchFailure, BatchReport, BlueprintReport};
use crate::scanner::BlueprintFile;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use regex::Regex;
use serde_json::Value;
use std::path::Path;
use std::time::Instant;
use ui_detect_common::detector::FALLBACK_REASON;
use ui_detect_common::{
    blueprint_description, describe_blueprint, detect_parsed, extract_name, parse_requirements,
    PlaceholderCustomization, RawInput,
};

/// テレメトリのステージ名
pub const DETECTION_STAGE: &str = "component-detection";

/// ブループリントJSONを読み込む
///
/// トップレベルがオブジェクトでなければエラー。フィールド単位の型違いは許容する。
pub fn load_blueprint(path: &Path) -> Result<RawInput> {
    if !path.is_file() {
        return Err(UiDetectError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    parse_blueprint(&content)
}

pub fn parse_blueprint(content: &str) -> Result<RawInput> {
    let value: Value = serde_json::from_str(content)?;
    if !value.is_object() {
        return Err(UiDetectError::InvalidBlueprint(
            "トップレベルがJSONオブジェクトではありません".into(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}

/// 読み込み済みの入力からレポートを作成
///
/// 検出は失敗しても代替結果になるため、この関数はエラーを返さない。
pub fn build_report(input: &RawInput, fallback_id: &str) -> BlueprintReport {
    let name = extract_name(input);
    let id = blueprint_id(input, &name, fallback_id);

    tracing::info!(stage = DETECTION_STAGE, blueprint = %id, "detection started");
    let started = Instant::now();

    let requirements = parse_requirements(input);
    let profile = describe_blueprint(input, &requirements);
    let detection = detect_parsed(input, &requirements, &PlaceholderCustomization);
    let duration_ms = started.elapsed().as_millis() as u64;

    if is_degraded(&detection.reasoning) {
        tracing::warn!(
            stage = DETECTION_STAGE,
            blueprint = %id,
            error_message = FALLBACK_REASON,
            "detection failed"
        );
    } else {
        tracing::info!(
            stage = DETECTION_STAGE,
            blueprint = %id,
            duration_ms,
            confidence = detection.confidence,
            patterns = detection.detected_patterns.len(),
            "detection completed"
        );
    }

    BlueprintReport {
        id,
        name,
        description: blueprint_description(input),
        profile,
        requirements,
        component_detection: detection,
    }
}

/// ファイル1件を解析
pub fn detect_file(path: &Path) -> Result<BlueprintReport> {
    let fallback_id = file_stem(path);

    match load_blueprint(path) {
        Ok(input) => Ok(build_report(&input, &fallback_id)),
        Err(e) => {
            tracing::warn!(
                stage = DETECTION_STAGE,
                blueprint = %fallback_id,
                error_message = %e,
                "detection failed"
            );
            Err(e)
        }
    }
}

/// 複数ファイルを並列に解析（結果は入力順）
///
/// 読み込めないファイルは `failures` に記録し、処理は継続する。
pub fn detect_batch(files: &[BlueprintFile], show_progress: bool) -> BatchReport {
    let progress = if show_progress {
        let pb = ProgressBar::new(files.len() as u64);
        let template = "[{elapsed}] {bar:40.cyan/blue} {pos}/{len} {msg}";
        if let Ok(style) = ProgressStyle::default_bar().template(template) {
            pb.set_style(style.progress_chars("=>-"));
        }
        Some(pb)
    } else {
        None
    };

    let results: Vec<(String, Result<BlueprintReport>)> = files
        .par_iter()
        .map(|file| {
            let result = detect_file(&file.path);
            if let Some(pb) = &progress {
                pb.inc(1);
            }
            (file.path.display().to_string(), result)
        })
        .collect();

    if let Some(pb) = progress {
        pb.finish_with_message("done");
    }

    let mut reports = Vec::new();
    let mut failures = Vec::new();
    for (file, result) in results {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => failures.push(BatchFailure {
                file,
                error: e.to_string(),
            }),
        }
    }

    BatchReport::new(reports, failures)
}

fn is_degraded(reasoning: &[String]) -> bool {
    reasoning.len() == 1 && reasoning[0] == FALLBACK_REASON
}

/// レポートID: `id` → 名前のスラッグ → ファイル名
fn blueprint_id(input: &RawInput, name: &str, fallback_id: &str) -> String {
    if let Some(id) = input.id.as_deref().filter(|id| !id.trim().is_empty()) {
        return id.to_string();
    }

    let slug = slugify(name);
    if slug.is_empty() {
        fallback_id.to_string()
    } else {
        slug
    }
}

/// 英数字以外を `-` にまとめた小文字ID
pub fn slugify(text: &str) -> String {
    lazy_static::lazy_static! {
        static ref NON_ALNUM_RE: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
        static ref CAMEL_RE: Regex = Regex::new(r"([a-z0-9])([A-Z])").unwrap();
    }
    let split = CAMEL_RE.replace_all(text, "$1-$2").to_lowercase();
    NON_ALNUM_RE.replace_all(&split, "-").trim_matches('-').to_string()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "blueprint".to_string())
}
