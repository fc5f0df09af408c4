//! テキスト正規化
//!
//! 入力の文字列フィールドを順に連結し、小文字の単一コーパスにする。
//! 構造化フィールドはJSON文字列化せず、値の語だけを取り出す。

use crate::input::{RawInput, TechnicalRequirementsInput};
use regex::Regex;
use serde_json::Value;

/// 入力からパターン判定用のコーパスを生成
///
/// 順序: description → projectContext.description → requirements →
/// functionalRequirements → technicalRequirements → designRequirements
pub fn extract_corpus(input: &RawInput) -> String {
    let mut parts: Vec<String> = Vec::new();

    push_text(&mut parts, &input.description);
    push_text(&mut parts, &input.project_context.description);
    collect_words(&input.requirements, &mut parts);

    for req in &input.functional_requirements {
        push_text(&mut parts, req);
    }

    match &input.technical_requirements {
        TechnicalRequirementsInput::Entries(entries) => {
            for entry in entries {
                push_text(&mut parts, &entry.category);
                push_text(&mut parts, &entry.specification);
            }
        }
        TechnicalRequirementsInput::Settings(settings) => {
            push_text(&mut parts, &settings.framework);
            push_text(&mut parts, &settings.testing);
            push_text(&mut parts, &settings.performance);
            push_text(&mut parts, &settings.styling);
        }
    }

    for entry in &input.design_requirements {
        push_text(&mut parts, &entry.pattern);
        push_text(&mut parts, &entry.styling);
    }

    normalize_whitespace(&parts.join(" ").to_lowercase())
}

/// JSON値を再帰的にたどり、スカラー値だけを語として収集（キーは含めない）
pub fn collect_words(value: &Value, parts: &mut Vec<String>) {
    match value {
        Value::Null => {}
        Value::String(s) => push_text(parts, s),
        Value::Number(n) => parts.push(n.to_string()),
        Value::Bool(b) => parts.push(b.to_string()),
        Value::Array(items) => {
            for item in items {
                collect_words(item, parts);
            }
        }
        Value::Object(map) => {
            for item in map.values() {
                collect_words(item, parts);
            }
        }
    }
}

fn push_text(parts: &mut Vec<String>, text: &str) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        parts.push(trimmed.to_string());
    }
}

/// 連続する空白（改行・タブ含む）を半角スペース1つに
fn normalize_whitespace(text: &str) -> String {
    lazy_static::lazy_static! {
        static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    }
    WHITESPACE_RE.replace_all(text.trim(), " ").into_owned()
}
