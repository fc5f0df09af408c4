//! テンプレート推薦
//!
//! 検出パターンごとに対応テンプレートを列挙し、テンプレートIDごとに信頼度を統合する。
//! 各推薦にはコンポーネント要件1件につき1つの `ComponentMatch` を付ける。

use crate::error::Result;
use crate::rules::{template_name, templates_for};
use crate::types::{
    AnimationTokens, BehaviorCustomization, ColorTokens, ComponentCustomization, ComponentMatch,
    ComponentRequirement, ContentCustomization, DetectedPattern, SpacingTokens, StyleCustomization,
    TemplateRecommendation, TypographyTokens,
};
use std::collections::HashMap;

/// コンポーネント一致の基準信頼度
pub const BASELINE_MATCH_CONFIDENCE: u8 = 75;

/// コンポーネントのカスタマイズ内容を提供する
pub trait CustomizationProvider {
    fn customize(
        &self,
        requirement: &ComponentRequirement,
        template_id: &str,
    ) -> Result<ComponentCustomization>;
}

/// 固定のスタイルトークンを返すプロバイダ
///
/// テンプレートのテーマとは無関係な仮の値。
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderCustomization;

impl CustomizationProvider for PlaceholderCustomization {
    fn customize(
        &self,
        requirement: &ComponentRequirement,
        _template_id: &str,
    ) -> Result<ComponentCustomization> {
        Ok(ComponentCustomization {
            styling: StyleCustomization {
                colors: ColorTokens {
                    primary: "#3B82F6".into(),
                    secondary: "#6B7280".into(),
                    accent: "#10B981".into(),
                },
                typography: TypographyTokens {
                    font_family: "Inter".into(),
                    font_size: "1rem".into(),
                    font_weight: "400".into(),
                },
                spacing: SpacingTokens {
                    padding: "1rem".into(),
                    margin: "0.5rem".into(),
                    gap: "0.5rem".into(),
                },
                animation: AnimationTokens {
                    duration: "200ms".into(),
                    easing: "ease-in-out".into(),
                    intensity: "subtle".into(),
                },
            },
            behavior: BehaviorCustomization {
                interactions: vec!["hover".into(), "focus".into(), "click".into()],
                states: vec!["default".into(), "hover".into(), "active".into(), "disabled".into()],
                events: vec!["onClick".into(), "onChange".into(), "onSubmit".into()],
            },
            content: ContentCustomization {
                text: requirement.description.clone(),
                ..Default::default()
            },
        })
    }
}

/// 検出パターンからテンプレート推薦を生成（信頼度の降順）
pub fn recommend_templates<P: CustomizationProvider + ?Sized>(
    patterns: &[DetectedPattern],
    requirements: &[ComponentRequirement],
    provider: &P,
) -> Result<Vec<TemplateRecommendation>> {
    let mut recommendations: Vec<TemplateRecommendation> = Vec::new();
    let mut index: HashMap<&'static str, usize> = HashMap::new();

    for pattern in patterns {
        let reason = format!(
            "Pattern \"{}\" detected with {}% confidence",
            pattern.kind, pattern.confidence
        );

        for &template_id in templates_for(pattern.kind) {
            match index.get(template_id) {
                Some(&i) => {
                    let existing = &mut recommendations[i];
                    existing.confidence = existing.confidence.max(pattern.confidence);
                    existing.reasoning.push(reason.clone());
                }
                None => {
                    index.insert(template_id, recommendations.len());
                    recommendations.push(TemplateRecommendation {
                        template_id: template_id.to_string(),
                        name: template_name(template_id).to_string(),
                        confidence: pattern.confidence,
                        reasoning: vec![reason.clone()],
                        component_matches: component_matches(requirements, template_id, provider)?,
                    });
                }
            }
        }
    }

    recommendations.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    Ok(recommendations)
}

/// テンプレートに対するコンポーネント一致を生成
pub fn component_matches<P: CustomizationProvider + ?Sized>(
    requirements: &[ComponentRequirement],
    template_id: &str,
    provider: &P,
) -> Result<Vec<ComponentMatch>> {
    requirements
        .iter()
        .map(|req| {
            Ok(ComponentMatch {
                component_id: format!("{}-{}-{}", template_id, req.category, req.kind),
                name: format!("{} Component", req.kind),
                category: req.category,
                confidence: BASELINE_MATCH_CONFIDENCE,
                reasoning: vec![format!(
                    "Matches {} requirement: {}",
                    req.category, req.description
                )],
                customization: provider.customize(req, template_id)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::{ComponentCategory, PatternKind, Priority};

    fn pattern(kind: PatternKind, confidence: u8) -> DetectedPattern {
        DetectedPattern {
            kind,
            confidence,
            matched_keywords: vec![],
            description: String::new(),
        }
    }

    fn requirement() -> ComponentRequirement {
        ComponentRequirement {
            category: ComponentCategory::Display,
            kind: "display".to_string(),
            priority: Priority::Medium,
            description: "Show charts".to_string(),
            components: vec![],
            constraints: vec![],
            alternatives: vec![],
        }
    }

    struct FailingProvider;

    impl CustomizationProvider for FailingProvider {
        fn customize(
            &self,
            _: &ComponentRequirement,
            template_id: &str,
        ) -> Result<ComponentCustomization> {
            Err(Error::Detection(format!("no theme for {}", template_id)))
        }
    }

    #[test]
    fn test_dashboard_templates() {
        let patterns = [pattern(PatternKind::Dashboard, 95)];
        let recs = recommend_templates(&patterns, &[], &PlaceholderCustomization).unwrap();
        let ids: Vec<&str> = recs.iter().map(|r| r.template_id.as_str()).collect();
        assert_eq!(ids, vec!["linear", "apple", "corporate"]);
        assert_eq!(recs[0].name, "Linear");
        assert_eq!(recs[0].reasoning, vec!["Pattern \"dashboard\" detected with 95% confidence"]);
    }

    #[test]
    fn test_shared_template_raised_to_max() {
        // profile(60) → linear/apple/corporate, dashboard(90) → linear/apple/corporate
        let recs = recommend_templates(
            &[
                pattern(PatternKind::Profile, 60),
                pattern(PatternKind::Dashboard, 90),
                pattern(PatternKind::Auth, 70),
            ],
            &[],
            &PlaceholderCustomization,
        )
        .unwrap();

        let linear = recs.iter().find(|r| r.template_id == "linear").unwrap();
        assert_eq!(linear.confidence, 90);
        assert_eq!(linear.reasoning.len(), 3);

        let minimal = recs.iter().find(|r| r.template_id == "minimal").unwrap();
        assert_eq!(minimal.confidence, 70);

        let ids: std::collections::HashSet<&str> =
            recs.iter().map(|r| r.template_id.as_str()).collect();
        assert_eq!(ids.len(), recs.len());
        assert!(recs.windows(2).all(|w| w[0].confidence >= w[1].confidence));
    }

    #[test]
    fn test_component_matches_per_requirement() {
        let recs = recommend_templates(
            &[pattern(PatternKind::Chat, 90)],
            &[requirement()],
            &PlaceholderCustomization,
        )
        .unwrap();

        assert_eq!(recs.len(), 3);
        let first = &recs[0];
        assert_eq!(first.template_id, "spotify");
        assert_eq!(first.component_matches.len(), 1);

        let m = &first.component_matches[0];
        assert_eq!(m.component_id, "spotify-display-display");
        assert_eq!(m.name, "display Component");
        assert_eq!(m.confidence, BASELINE_MATCH_CONFIDENCE);
        assert_eq!(m.reasoning, vec!["Matches display requirement: Show charts"]);
        assert_eq!(m.customization.styling.colors.primary, "#3B82F6");
        assert_eq!(m.customization.content.text, "Show charts");
    }

    #[test]
    fn test_no_patterns_no_recommendations() {
        let recs = recommend_templates(&[], &[requirement()], &PlaceholderCustomization).unwrap();
        assert!(recs.is_empty());
    }

    #[test]
    fn test_provider_error_propagates() {
        let patterns = [pattern(PatternKind::Form, 80)];
        let result = recommend_templates(&patterns, &[requirement()], &FailingProvider);
        assert!(matches!(result, Err(Error::Detection(_))));
    }
}
