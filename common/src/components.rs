//! コンポーネント要件の分類
//!
//! 機能要件ごとに8区分の分類テーブルでスコアを計算し、最高スコアの区分に割り当てる。
//! 技術要件（アクセシビリティ・パフォーマンス）は全要件の制約に後付けする。

use crate::patterns::is_delimited;
use crate::rules::{TaxonomyEntry, ALTERNATIVE_RULES, TAXONOMY};
use crate::types::{
    ComponentCategory, ComponentRequirement, Priority, Requirements, TechnicalCategory,
};
use std::collections::HashSet;

/// 要件文と区分キーワードの一致スコア
///
/// 一致1件につき 1、区切り一致ならさらに 0.5。キーワード数で割る。
pub fn requirement_match_score(text: &str, keywords: &[&str]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }

    let score: f64 = keywords
        .iter()
        .filter(|k| text.contains(**k))
        .map(|k| if is_delimited(text, k) { 1.5 } else { 1.0 })
        .sum();

    score / keywords.len() as f64
}

/// 要件文を分類
///
/// スコアが厳密に最大の区分を返す（同点は表の先頭側）。
/// どの区分も0なら `None`（content/generic 扱いで要件は生成しない）。
pub fn classify_requirement(text: &str) -> Option<&'static TaxonomyEntry> {
    let text = text.to_lowercase();
    let mut best: Option<&'static TaxonomyEntry> = None;
    let mut highest = 0.0;

    for entry in TAXONOMY {
        let score = requirement_match_score(&text, entry.keywords);
        if score > highest {
            highest = score;
            best = Some(entry);
        }
    }

    best
}

/// 候補コンポーネント名から代替コンポーネントを生成（重複除去・出現順維持）
pub fn generate_alternatives(components: &[&str]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut alternatives = Vec::new();

    for component in components {
        let rule = ALTERNATIVE_RULES.iter().find(|(key, _)| component.contains(key));
        let Some((_, alts)) = rule else {
            continue;
        };
        for alt in *alts {
            if seen.insert(*alt) {
                alternatives.push(alt.to_string());
            }
        }
    }

    alternatives
}

/// 解析済み要件からコンポーネント要件を導出
pub fn map_requirements(requirements: &Requirements) -> Vec<ComponentRequirement> {
    let mut component_reqs = Vec::new();

    for req in &requirements.functional {
        if let Some(entry) = classify_requirement(&req.description) {
            component_reqs.push(ComponentRequirement {
                category: entry.category,
                kind: entry.category.as_str().to_string(),
                priority: req.priority,
                description: req.description.clone(),
                components: to_strings(entry.components),
                constraints: to_strings(entry.constraints),
                alternatives: generate_alternatives(entry.components),
            });
        }
    }

    // atomic / compound デザインは汎用コンポーネント要件を追加
    for design in &requirements.design {
        if design.pattern == "atomic" || design.pattern == "compound" {
            component_reqs.push(ComponentRequirement {
                category: ComponentCategory::Content,
                kind: "atomic-component".to_string(),
                priority: Priority::Medium,
                description: format!("Atomic design component with {} styling", design.styling),
                components: Vec::new(),
                constraints: to_strings(&["reusable", "consistent", "themeable"]),
                alternatives: Vec::new(),
            });
        }
    }

    for tech in &requirements.technical {
        match tech.category {
            TechnicalCategory::Accessibility => add_constraint(&mut component_reqs, "accessible"),
            TechnicalCategory::Performance => add_constraint(&mut component_reqs, "performant"),
            _ => {}
        }
    }

    tracing::debug!(count = component_reqs.len(), "component requirements mapped");
    component_reqs
}

fn add_constraint(component_reqs: &mut [ComponentRequirement], constraint: &str) {
    for req in component_reqs.iter_mut() {
        if !req.constraints.iter().any(|c| c == constraint) {
            req.constraints.push(constraint.to_string());
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DesignRequirement, FunctionalRequirement, TechnicalRequirement};

    fn functional(text: &str, priority: Priority) -> FunctionalRequirement {
        FunctionalRequirement {
            id: "func_1".to_string(),
            description: text.to_string(),
            acceptance_criteria: vec![],
            priority,
        }
    }

    fn technical(category: TechnicalCategory) -> TechnicalRequirement {
        TechnicalRequirement {
            id: "tech_1".to_string(),
            category,
            specification: String::new(),
            threshold: None,
            mandatory: true,
        }
    }

    #[test]
    fn test_requirement_match_score() {
        // "menu" 区切り一致 1.5 / 6
        let keywords = ["navigation", "header", "footer", "sidebar", "menu", "breadcrumb"];
        let score = requirement_match_score("a menu bar", &keywords);
        assert!((score - 0.25).abs() < 1e-9);
        assert_eq!(requirement_match_score("anything", &[]), 0.0);
    }

    #[test]
    fn test_classify_chat_as_interaction() {
        let entry = classify_requirement("Users must be able to chat with support").unwrap();
        assert_eq!(entry.category, ComponentCategory::Interaction);
        assert!(entry.components.contains(&"chat-window"));
    }

    #[test]
    fn test_classify_no_match() {
        assert!(classify_requirement("Be delightful").is_none());
        assert!(classify_requirement("").is_none());
    }

    #[test]
    fn test_classify_highest_score_wins() {
        // "grid" は display(1.5/8) と layout(1.5/6) に含まれ layout が高い
        let entry = classify_requirement("grid").unwrap();
        assert_eq!(entry.category, ComponentCategory::Layout);

        let entry = classify_requirement("data").unwrap();
        assert_eq!(entry.category, ComponentCategory::Data);
    }

    #[test]
    fn test_classify_tie_prefers_earlier_category() {
        // navigation と feedback がともに 1.5/6
        let entry = classify_requirement("header toast").unwrap();
        assert_eq!(entry.category, ComponentCategory::Navigation);
    }

    #[test]
    fn test_generate_alternatives_dedup() {
        let alts = generate_alternatives(&[
            "button-primary",
            "button-secondary",
            "link-button",
            "modal-dialog",
        ]);
        assert_eq!(alts, vec!["link-button", "icon-button", "toggle-button"]);

        let alts =
            generate_alternatives(&["input-field", "form-group", "submit-button", "form-wizard"]);
        assert_eq!(
            alts,
            vec![
                "form-wizard",
                "multi-step-form",
                "inline-form",
                "link-button",
                "icon-button",
                "toggle-button",
            ]
        );

        assert!(generate_alternatives(&["tooltip"]).is_empty());
    }

    #[test]
    fn test_map_requirements_basic() {
        let requirements = Requirements {
            functional: vec![
                functional("Display a sortable table of orders", Priority::High),
                functional("Be delightful", Priority::Low),
            ],
            ..Default::default()
        };

        let mapped = map_requirements(&requirements);
        assert_eq!(mapped.len(), 1);
        assert_eq!(mapped[0].category, ComponentCategory::Display);
        assert_eq!(mapped[0].kind, "display");
        assert_eq!(mapped[0].priority, Priority::High);
        assert_eq!(mapped[0].constraints, vec!["sortable", "filterable", "responsive"]);
        assert!(mapped[0].alternatives.contains(&"data-grid".to_string()));
        assert!(mapped[0].alternatives.contains(&"info-card".to_string()));
    }

    #[test]
    fn test_map_requirements_atomic_design() {
        let requirements = Requirements {
            design: vec![
                DesignRequirement {
                    id: "design_main".to_string(),
                    pattern: "atomic".to_string(),
                    styling: "tailwind".to_string(),
                    responsive: true,
                    theme: true,
                },
                DesignRequirement {
                    id: "design_2".to_string(),
                    pattern: "container".to_string(),
                    styling: "tailwind".to_string(),
                    responsive: true,
                    theme: true,
                },
            ],
            ..Default::default()
        };

        let mapped = map_requirements(&requirements);
        assert_eq!(mapped.len(), 1);
        assert_eq!(mapped[0].kind, "atomic-component");
        assert_eq!(mapped[0].category, ComponentCategory::Content);
        assert_eq!(mapped[0].description, "Atomic design component with tailwind styling");
    }

    #[test]
    fn test_technical_constraints_applied_once() {
        let requirements = Requirements {
            functional: vec![
                functional("Show a navigation menu", Priority::Medium),
                functional("Fetch data from the api", Priority::Medium),
            ],
            technical: vec![
                technical(TechnicalCategory::Accessibility),
                technical(TechnicalCategory::Performance),
                technical(TechnicalCategory::Accessibility),
                technical(TechnicalCategory::Security),
            ],
            ..Default::default()
        };

        let mapped = map_requirements(&requirements);
        assert_eq!(mapped.len(), 2);
        for req in &mapped {
            assert_eq!(req.constraints.iter().filter(|c| *c == "accessible").count(), 1);
            assert_eq!(req.constraints.iter().filter(|c| *c == "performant").count(), 1);
        }
        // navigation は元から accessible を持つ
        assert_eq!(
            mapped[0].constraints,
            vec!["responsive", "accessible", "mobile-friendly", "performant"]
        );
        assert_eq!(
            mapped[1].constraints,
            vec!["performant", "cached", "error-handled", "accessible"]
        );
    }
}
