//! UIパターン検出
//!
//! 1. コーパス全体をパターン判定ルールでスコアリング
//! 2. 機能要件ごとに固定フレーズ表で追加検出
//! 3. 種別ごとに統合し、信頼度の降順に並べる

use crate::rules::{PatternRule, PATTERN_RULES, REQUIREMENT_PHRASES};
use crate::types::{DetectedPattern, FunctionalRequirement, PatternKind};
use std::collections::HashMap;

/// パターン採用の閾値（スコアがこれを超えたもののみ採用）
pub const PATTERN_THRESHOLD: f64 = 0.3;

const KEYWORD_SCORE: f64 = 0.4;
const EXACT_MATCH_BONUS: f64 = 0.2;
const CONTEXT_SCORE: f64 = 0.3;
const FREQUENCY_WEIGHT: f64 = 0.2;

/// ルール1件分のスコア
#[derive(Debug, Clone, PartialEq)]
pub struct PatternScore {
    pub score: f64,
    pub matched_keywords: Vec<String>,
}

/// キーワードが空白区切り、または文字列の先頭・末尾にあるか
pub fn is_delimited(text: &str, keyword: &str) -> bool {
    text.contains(&format!(" {} ", keyword)) || text.starts_with(keyword) || text.ends_with(keyword)
}

/// コーパスを1ルールでスコアリング
///
/// - キーワード一致: +0.4（区切り一致ならさらに +0.2）
/// - 文脈フレーズ一致: +0.3
/// - 一致キーワード率 × 0.2
pub fn score_rule(corpus: &str, rule: &PatternRule) -> PatternScore {
    let mut score = 0.0;
    let mut matched_keywords = Vec::new();

    for keyword in rule.keywords {
        if corpus.contains(keyword) {
            score += KEYWORD_SCORE;
            matched_keywords.push(keyword.to_string());

            if is_delimited(corpus, keyword) {
                score += EXACT_MATCH_BONUS;
            }
        }
    }

    for phrase in rule.context_phrases {
        if corpus.contains(phrase) {
            score += CONTEXT_SCORE;
        }
    }

    if !rule.keywords.is_empty() {
        let frequency = matched_keywords.len() as f64 / rule.keywords.len() as f64;
        score += frequency * FREQUENCY_WEIGHT;
    }

    PatternScore { score, matched_keywords }
}

/// 0〜100の整数信頼度に丸める
pub fn to_confidence(value: f64) -> u8 {
    value.clamp(0.0, 100.0).round() as u8
}

/// コーパス全体からパターンを検出（閾値以下は除外）
pub fn match_patterns(corpus: &str) -> Vec<DetectedPattern> {
    PATTERN_RULES
        .iter()
        .filter_map(|rule| {
            let result = score_rule(corpus, rule);
            if result.score <= PATTERN_THRESHOLD {
                return None;
            }

            Some(DetectedPattern {
                kind: rule.kind,
                confidence: to_confidence(result.score * rule.base_weight * 100.0),
                description: describe_pattern(rule.kind, result.score, &result.matched_keywords),
                matched_keywords: result.matched_keywords,
            })
        })
        .collect()
}

fn describe_pattern(kind: PatternKind, score: f64, keywords: &[String]) -> String {
    let keyword_list = keywords.iter().take(3).cloned().collect::<Vec<_>>().join(", ");
    format!(
        "Detected {} pattern with {}% confidence based on keywords: {}",
        kind,
        (score * 100.0).round(),
        keyword_list
    )
}

/// 機能要件ごとに固定フレーズ表で検出
///
/// フレーズ全体、またはキーワードのいずれかを含めばヒット。信頼度は表の固定値。
pub fn extract_requirement_patterns(
    requirements: &[FunctionalRequirement],
) -> Vec<DetectedPattern> {
    let mut patterns = Vec::new();

    for req in requirements {
        let text = req.description.to_lowercase();

        for entry in REQUIREMENT_PHRASES {
            if text.contains(entry.phrase) || entry.keywords.iter().any(|k| text.contains(k)) {
                patterns.push(DetectedPattern {
                    kind: entry.kind,
                    confidence: entry.confidence,
                    matched_keywords: entry.keywords.iter().map(|k| k.to_string()).collect(),
                    description: entry.description.to_string(),
                });
            }
        }
    }

    patterns
}

/// 同じ種別のパターンを統合
///
/// 信頼度は最大値、キーワードは和集合、説明は `"; "` で連結。
/// 信頼度の降順に並べる（同点は最初の出現順）。
pub fn deduplicate_patterns(patterns: Vec<DetectedPattern>) -> Vec<DetectedPattern> {
    let mut merged: Vec<DetectedPattern> = Vec::new();
    let mut index: HashMap<PatternKind, usize> = HashMap::new();

    for pattern in patterns {
        match index.get(&pattern.kind) {
            Some(&i) => {
                let existing = &mut merged[i];
                existing.confidence = existing.confidence.max(pattern.confidence);
                for keyword in pattern.matched_keywords {
                    if !existing.matched_keywords.contains(&keyword) {
                        existing.matched_keywords.push(keyword);
                    }
                }
                existing.description = format!("{}; {}", existing.description, pattern.description);
            }
            None => {
                index.insert(pattern.kind, merged.len());
                merged.push(pattern);
            }
        }
    }

    merged.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    merged
}

/// コーパスと機能要件からパターンを検出して統合
pub fn detect_patterns(
    corpus: &str,
    requirements: &[FunctionalRequirement],
) -> Vec<DetectedPattern> {
    let mut patterns = match_patterns(corpus);
    let requirement_patterns = extract_requirement_patterns(requirements);
    tracing::debug!(
        corpus_hits = patterns.len(),
        requirement_hits = requirement_patterns.len(),
        "pattern matching finished"
    );

    patterns.extend(requirement_patterns);
    deduplicate_patterns(patterns)
}
