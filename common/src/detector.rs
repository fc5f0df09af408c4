//! コンポーネント検出のエントリポイント
//!
//! 正規化 → パターン検出 → コンポーネント分類 → テンプレート推薦 → 信頼度集計。
//! 途中で失敗（エラー・パニック）した場合は信頼度0の代替結果を返し、呼び出し側へは伝播しない。

use crate::blueprint::parse_requirements;
use crate::components::map_requirements;
use crate::error::Result;
use crate::input::RawInput;
use crate::patterns::detect_patterns;
use crate::templates::{recommend_templates, CustomizationProvider, PlaceholderCustomization};
use crate::text::extract_corpus;
use crate::types::{ComponentDetectionResult, ComponentRequirement, DetectedPattern, Requirements};
use std::panic::{self, AssertUnwindSafe};

/// 検出失敗時の理由
pub const FALLBACK_REASON: &str = "Component detection failed, using fallback";

/// 何も検出されなかった場合の理由
pub const LIMITED_REASON: &str = "Limited component requirements detected in blueprint";

/// コンポーネント要件がある場合の基準信頼度
const REQUIREMENT_CONFIDENCE: f64 = 80.0;

/// 入力からコンポーネント検出を行う（固定のカスタマイズ値を使用）
pub fn detect(input: &RawInput) -> ComponentDetectionResult {
    detect_with(input, &PlaceholderCustomization)
}

/// カスタマイズプロバイダを指定して検出
pub fn detect_with<P: CustomizationProvider + ?Sized>(
    input: &RawInput,
    provider: &P,
) -> ComponentDetectionResult {
    guarded(|| {
        let requirements = parse_requirements(input);
        run_detection(input, &requirements, provider)
    })
}

/// 解析済み要件を使って検出（要件を呼び出し側でも使う場合）
pub fn detect_parsed<P: CustomizationProvider + ?Sized>(
    input: &RawInput,
    requirements: &Requirements,
    provider: &P,
) -> ComponentDetectionResult {
    guarded(|| run_detection(input, requirements, provider))
}

/// 失敗時の代替結果
pub fn fallback_result() -> ComponentDetectionResult {
    ComponentDetectionResult {
        detected_patterns: Vec::new(),
        component_requirements: Vec::new(),
        template_recommendations: Vec::new(),
        confidence: 0,
        reasoning: vec![FALLBACK_REASON.to_string()],
    }
}

fn guarded<F>(run: F) -> ComponentDetectionResult
where
    F: FnOnce() -> Result<ComponentDetectionResult>,
{
    match panic::catch_unwind(AssertUnwindSafe(run)) {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "component detection failed, using fallback");
            fallback_result()
        }
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::warn!(error = %message, "component detection panicked, using fallback");
            fallback_result()
        }
    }
}

fn run_detection<P: CustomizationProvider + ?Sized>(
    input: &RawInput,
    requirements: &Requirements,
    provider: &P,
) -> Result<ComponentDetectionResult> {
    let corpus = extract_corpus(input);
    tracing::debug!(corpus_len = corpus.len(), "corpus extracted");

    let detected_patterns = detect_patterns(&corpus, &requirements.functional);
    let component_requirements = map_requirements(requirements);
    let template_recommendations =
        recommend_templates(&detected_patterns, &component_requirements, provider)?;

    let confidence = overall_confidence(&detected_patterns, &component_requirements);
    let reasoning = build_reasoning(&detected_patterns, &component_requirements);

    Ok(ComponentDetectionResult {
        detected_patterns,
        component_requirements,
        template_recommendations,
        confidence,
        reasoning,
    })
}

/// 全体の信頼度
///
/// (パターン信頼度の平均 + 要件があれば80) / 2 を四捨五入
pub fn overall_confidence(
    patterns: &[DetectedPattern],
    requirements: &[ComponentRequirement],
) -> u8 {
    let pattern_confidence = if patterns.is_empty() {
        0.0
    } else {
        patterns.iter().map(|p| p.confidence as f64).sum::<f64>() / patterns.len() as f64
    };
    let requirement_confidence = if requirements.is_empty() { 0.0 } else { REQUIREMENT_CONFIDENCE };

    ((pattern_confidence + requirement_confidence) / 2.0).round() as u8
}

/// 検出内容の説明文（空にはならない）
pub fn build_reasoning(
    patterns: &[DetectedPattern],
    requirements: &[ComponentRequirement],
) -> Vec<String> {
    let mut reasoning = Vec::new();

    if !patterns.is_empty() {
        let kinds: Vec<&str> = patterns.iter().map(|p| p.kind.as_str()).collect();
        reasoning.push(format!("Detected {} UI pattern(s): {}", patterns.len(), kinds.join(", ")));
    }

    if !requirements.is_empty() {
        let kinds: Vec<&str> = requirements.iter().map(|r| r.kind.as_str()).collect();
        reasoning.push(format!(
            "Identified {} component requirement(s): {}",
            requirements.len(),
            kinds.join(", ")
        ));
    }

    if reasoning.is_empty() {
        reasoning.push(LIMITED_REASON.to_string());
    }

    reasoning
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::{ComponentCategory, ComponentCustomization, PatternKind, Priority};

    fn pattern(kind: PatternKind, confidence: u8) -> DetectedPattern {
        DetectedPattern {
            kind,
            confidence,
            matched_keywords: vec![],
            description: String::new(),
        }
    }

    fn requirement(kind: &str) -> ComponentRequirement {
        ComponentRequirement {
            category: ComponentCategory::Form,
            kind: kind.to_string(),
            priority: Priority::Medium,
            description: String::new(),
            components: vec![],
            constraints: vec![],
            alternatives: vec![],
        }
    }

    struct FailingProvider;

    impl CustomizationProvider for FailingProvider {
        fn customize(&self, _: &ComponentRequirement, _: &str) -> Result<ComponentCustomization> {
            Err(Error::Detection("theme store offline".to_string()))
        }
    }

    struct PanickingProvider;

    impl CustomizationProvider for PanickingProvider {
        fn customize(&self, _: &ComponentRequirement, _: &str) -> Result<ComponentCustomization> {
            panic!("customization exploded");
        }
    }

    fn faulty_input() -> RawInput {
        RawInput {
            description: "admin dashboard".to_string(),
            functional_requirements: vec!["Submit the signup form".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_overall_confidence() {
        assert_eq!(overall_confidence(&[], &[]), 0);
        assert_eq!(overall_confidence(&[], &[requirement("form")]), 40);
        let patterns = [pattern(PatternKind::Chat, 90), pattern(PatternKind::Blog, 61)];
        assert_eq!(overall_confidence(&patterns, &[]), 38);
        assert_eq!(overall_confidence(&patterns, &[requirement("form")]), 78);
    }

    #[test]
    fn test_build_reasoning() {
        let reasoning = build_reasoning(
            &[pattern(PatternKind::Chat, 90)],
            &[requirement("form"), requirement("data")],
        );
        assert_eq!(
            reasoning,
            vec![
                "Detected 1 UI pattern(s): chat",
                "Identified 2 component requirement(s): form, data",
            ]
        );

        assert_eq!(build_reasoning(&[], &[]), vec![LIMITED_REASON]);
    }

    #[test]
    fn test_detect_empty_input() {
        let result = detect(&RawInput::default());
        assert!(result.detected_patterns.is_empty());
        assert!(result.component_requirements.is_empty());
        assert!(result.template_recommendations.is_empty());
        assert_eq!(result.confidence, 0);
        assert_eq!(result.reasoning, vec![LIMITED_REASON]);
    }

    #[test]
    fn test_provider_error_degrades() {
        let result = detect_with(&faulty_input(), &FailingProvider);
        assert_eq!(result, fallback_result());
    }

    #[test]
    fn test_provider_panic_degrades() {
        let result = detect_with(&faulty_input(), &PanickingProvider);
        assert_eq!(result, fallback_result());
        assert_eq!(result.reasoning, vec![FALLBACK_REASON]);
    }

    #[test]
    fn test_detect_parsed_matches_detect() {
        let input = faulty_input();
        let requirements = parse_requirements(&input);
        assert_eq!(detect_parsed(&input, &requirements, &PlaceholderCustomization), detect(&input));
    }
}
