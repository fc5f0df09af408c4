//! ブループリント要件パーサー
//!
//! RawInputから機能・技術・デザイン要件を組み立てる。
//! 優先度と受け入れ基準は要件文のキーワードから推定する。
//! 種類・依存・検証ルール・メタデータ（複雑度・見積もり・タグ）もここで導出する。

use crate::input::{hint_text, RawInput, TechnicalRequirementsInput};
use crate::types::{
    BlueprintCategory, BlueprintMetadata, BlueprintProfile, ComponentType, Complexity, Constraint,
    Dependencies, DependencyKind, DesignRequirement, ExternalDependency, FunctionalRequirement,
    InternalDependency, Priority, Requirements, TechnicalCategory, TechnicalRequirement, Validation,
    ValidationRule,
};
use serde_json::Value;

/// 既定のスタイリング
const DEFAULT_STYLING: &str = "tailwind";

/// 複雑度を1段階押し上げる機能要件のキーワード
const COMPLEX_KEYWORDS: &[&str] =
    &["filter", "sort", "paginate", "search", "grid", "multiple", "complex"];

/// RawInputから要件一式を解析
pub fn parse_requirements(input: &RawInput) -> Requirements {
    Requirements {
        functional: parse_functional(input),
        technical: parse_technical(input),
        design: parse_design(input),
    }
}

/// ブループリント名を決定
///
/// `name` → `projectContext.name` → 説明文の先頭3語（各語を大文字始まりで連結）
pub fn extract_name(input: &RawInput) -> String {
    if let Some(name) = &input.name {
        return name.clone();
    }
    if !input.project_context.name.is_empty() {
        return input.project_context.name.clone();
    }

    input
        .description
        .split_whitespace()
        .take(3)
        .map(capitalize)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn parse_functional(input: &RawInput) -> Vec<FunctionalRequirement> {
    let mut reqs: Vec<FunctionalRequirement> = input
        .functional_requirements
        .iter()
        .enumerate()
        .map(|(index, req)| FunctionalRequirement {
            id: format!("func_{}", index + 1),
            description: req.clone(),
            acceptance_criteria: acceptance_criteria(req),
            priority: infer_priority(req),
        })
        .collect();

    // コンポーネント一覧も機能要件として扱う
    reqs.extend(input.components.iter().enumerate().map(|(index, comp)| {
        FunctionalRequirement {
            id: format!("comp_{}", index + 1),
            description: format!("Include {}", comp),
            acceptance_criteria: vec![format!("{} is implemented and functional", comp)],
            priority: Priority::High,
        }
    }));

    reqs
}

fn parse_technical(input: &RawInput) -> Vec<TechnicalRequirement> {
    let mut reqs = Vec::new();

    match &input.technical_requirements {
        TechnicalRequirementsInput::Entries(entries) => {
            for (index, entry) in entries.iter().enumerate() {
                // 未知の区分は捨てる
                let Ok(category) = entry.category.parse::<TechnicalCategory>() else {
                    continue;
                };
                reqs.push(TechnicalRequirement {
                    id: format!("tech_{}", index + 1),
                    category,
                    specification: entry.specification.clone(),
                    threshold: None,
                    mandatory: true,
                });
            }
        }
        TechnicalRequirementsInput::Settings(settings) => {
            if !settings.framework.is_empty() {
                reqs.push(mandatory(
                    "tech_framework",
                    TechnicalCategory::Compatibility,
                    format!("Compatible with {}", settings.framework),
                ));
            }
            if !settings.testing.is_empty() {
                reqs.push(mandatory(
                    "tech_testing",
                    TechnicalCategory::Compatibility,
                    settings.testing.clone(),
                ));
            }
            if !settings.performance.is_empty() {
                reqs.push(mandatory(
                    "tech_performance",
                    TechnicalCategory::Performance,
                    settings.performance.clone(),
                ));
            }
        }
    }

    for (index, (key, value)) in input.performance_targets.iter().enumerate() {
        let threshold = hint_text(value);
        reqs.push(TechnicalRequirement {
            id: format!("perf_{}", index + 1),
            category: TechnicalCategory::Performance,
            specification: format!("{}: {}", key, threshold),
            threshold: Some(threshold),
            mandatory: true,
        });
    }

    reqs
}

fn mandatory(id: &str, category: TechnicalCategory, specification: String) -> TechnicalRequirement {
    TechnicalRequirement {
        id: id.to_string(),
        category,
        specification,
        threshold: None,
        mandatory: true,
    }
}

fn parse_design(input: &RawInput) -> Vec<DesignRequirement> {
    let mut reqs: Vec<DesignRequirement> = input
        .design_requirements
        .iter()
        .enumerate()
        .map(|(index, entry)| DesignRequirement {
            id: format!("design_{}", index + 1),
            pattern: entry.pattern.trim().to_lowercase(),
            styling: if entry.styling.is_empty() {
                DEFAULT_STYLING.to_string()
            } else {
                entry.styling.clone()
            },
            responsive: true,
            theme: true,
        })
        .collect();

    let has_styling = matches!(
        &input.technical_requirements,
        TechnicalRequirementsInput::Settings(s) if !s.styling.is_empty()
    );

    if !input.architectural_guidelines.is_empty() || has_styling {
        let pattern = input
            .architectural_guidelines
            .get("componentStructure")
            .map(hint_text)
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| "atomic".to_string());

        reqs.push(DesignRequirement {
            id: "design_main".to_string(),
            pattern: pattern.to_lowercase(),
            styling: DEFAULT_STYLING.to_string(),
            responsive: true,
            theme: true,
        });
    }

    reqs
}

/// 要件文から優先度を推定
pub fn infer_priority(requirement: &str) -> Priority {
    let req = requirement.to_lowercase();

    if req.contains("must") || req.contains("critical") || req.contains("required") {
        return Priority::Critical;
    }
    if req.contains("should") || req.contains("important") {
        return Priority::High;
    }
    if req.contains("could") || req.contains("nice to have") {
        return Priority::Low;
    }

    Priority::Medium
}

/// 要件文から受け入れ基準を生成
pub fn acceptance_criteria(requirement: &str) -> Vec<String> {
    let req = requirement.to_lowercase();
    let mut criteria = Vec::new();

    if req.contains("display") || req.contains("show") {
        criteria.push("Component renders without errors".to_string());
        criteria.push("Data is displayed correctly".to_string());
    }

    if req.contains("click") || req.contains("interact") {
        criteria.push("User interactions are handled properly".to_string());
        criteria.push("Appropriate feedback is provided".to_string());
    }

    if req.contains("form") || req.contains("input") {
        criteria.push("Form validation works correctly".to_string());
        criteria.push("Error messages are displayed appropriately".to_string());
    }

    if criteria.is_empty() {
        criteria.push("Requirement is fully implemented".to_string());
    }

    criteria
}

/// ブループリントの説明文（`description` → `projectContext.description`）
pub fn blueprint_description(input: &RawInput) -> String {
    if input.description.is_empty() {
        input.project_context.description.clone()
    } else {
        input.description.clone()
    }
}

/// 要件以外のブループリント情報を導出
pub fn describe_blueprint(input: &RawInput, requirements: &Requirements) -> BlueprintProfile {
    let kind = determine_type(input);
    let category = determine_category(input, kind);
    let dependencies = extract_dependencies(input);
    let complexity = calculate_complexity(requirements, &dependencies);

    BlueprintProfile {
        kind,
        category,
        validation: extract_validation(input),
        metadata: BlueprintMetadata {
            priority: rollup_priority(requirements, category),
            complexity,
            estimated_time: estimate_time(complexity, kind),
            tags: extract_tags(input, kind),
        },
        dependencies,
    }
}

/// 名前と説明文から種類を判定（先に一致したものを採用）
pub fn determine_type(input: &RawInput) -> ComponentType {
    let desc = input.description.to_lowercase();
    let name = input.name.as_deref().unwrap_or_default().to_lowercase();

    if name.contains("service") || desc.contains("service") {
        ComponentType::Service
    } else if name.contains("hook") || name.starts_with("use") || desc.contains("hook") {
        ComponentType::Hook
    } else if desc.contains("api") {
        ComponentType::Service
    } else if desc.contains("page") {
        ComponentType::Page
    } else if desc.contains("layout") {
        ComponentType::Layout
    } else if desc.contains("utility") || desc.contains("helper") {
        ComponentType::Utility
    } else if desc.contains("route") || desc.contains("endpoint") {
        ComponentType::ApiRoute
    } else {
        ComponentType::UiComponent
    }
}

pub fn determine_category(input: &RawInput, kind: ComponentType) -> BlueprintCategory {
    match kind {
        ComponentType::Service | ComponentType::Hook => BlueprintCategory::Core,
        _ if input.shared || input.reusable => BlueprintCategory::Shared,
        _ => BlueprintCategory::Feature,
    }
}

/// 依存関係
///
/// 内部: `-component` を含むコンポーネント名。外部: react は常に、Next系フレームワークなら next も。
pub fn extract_dependencies(input: &RawInput) -> Dependencies {
    let internal = input
        .components
        .iter()
        .filter(|comp| comp.contains("-component"))
        .map(|comp| InternalDependency {
            component_id: comp.clone(),
            kind: DependencyKind::Compose,
            required: true,
        })
        .collect();

    let mut external = vec![ExternalDependency {
        package: "react".to_string(),
        version: "^18.0.0".to_string(),
        kind: DependencyKind::Peer,
    }];

    if let TechnicalRequirementsInput::Settings(settings) = &input.technical_requirements {
        if settings.framework.to_lowercase().contains("next") {
            external.push(ExternalDependency {
                package: "next".to_string(),
                version: "^14.0.0".to_string(),
                kind: DependencyKind::Peer,
            });
        }
    }

    Dependencies { internal, external }
}

/// 検証ルールと制約
///
/// `securityRequirements` の必須項目 → ルール、`performanceTargets` → 制約
pub fn extract_validation(input: &RawInput) -> Validation {
    let rules = input
        .security_requirements
        .iter()
        .filter(|(_, value)| match value {
            Value::Bool(flag) => *flag,
            Value::String(s) => s == "required",
            _ => false,
        })
        .map(|(key, _)| ValidationRule {
            property: key.clone(),
            rule: "required".to_string(),
            error_message: format!("{} is required for security", key),
        })
        .collect();

    let constraints = input
        .performance_targets
        .iter()
        .map(|(key, value)| Constraint {
            kind: TechnicalCategory::Performance,
            limit: hint_text(value),
            metric: key.clone(),
        })
        .collect();

    Validation { rules, constraints }
}

/// 複雑度
///
/// 要件数 + 依存数×0.5 + 複雑キーワードを含む機能要件の数。3/6/10 で区切る。
pub fn calculate_complexity(
    requirements: &Requirements,
    dependencies: &Dependencies,
) -> Complexity {
    let requirement_count =
        requirements.functional.len() + requirements.technical.len() + requirements.design.len();
    let dependency_count = dependencies.internal.len() + dependencies.external.len();

    let bonus = requirements
        .functional
        .iter()
        .filter(|req| {
            let desc = req.description.to_lowercase();
            COMPLEX_KEYWORDS.iter().any(|k| desc.contains(k))
        })
        .count();

    let score = requirement_count as f64 + dependency_count as f64 * 0.5 + bonus as f64;

    if score < 3.0 {
        Complexity::Simple
    } else if score < 6.0 {
        Complexity::Moderate
    } else if score < 10.0 {
        Complexity::Complex
    } else {
        Complexity::VeryComplex
    }
}

/// ブループリント全体の優先度
///
/// core区分はCRITICAL。それ以外は機能要件の最高優先度（CRITICAL/HIGH）、なければMEDIUM。
pub fn rollup_priority(requirements: &Requirements, category: BlueprintCategory) -> Priority {
    if category == BlueprintCategory::Core {
        return Priority::Critical;
    }

    let has = |priority: Priority| requirements.functional.iter().any(|r| r.priority == priority);
    if has(Priority::Critical) {
        Priority::Critical
    } else if has(Priority::High) {
        Priority::High
    } else {
        Priority::Medium
    }
}

/// 見積もり時間（分）= 複雑度の基準時間 × 種類の係数
pub fn estimate_time(complexity: Complexity, kind: ComponentType) -> u32 {
    let base: f64 = match complexity {
        Complexity::Simple => 30.0,
        Complexity::Moderate => 60.0,
        Complexity::Complex => 120.0,
        Complexity::VeryComplex => 240.0,
    };
    let multiplier = match kind {
        ComponentType::UiComponent => 1.0,
        ComponentType::Service => 1.2,
        ComponentType::Hook => 0.8,
        ComponentType::Utility => 0.6,
        ComponentType::Layout => 1.1,
        ComponentType::Page => 1.5,
        ComponentType::ApiRoute => 0.9,
    };

    (base * multiplier).round() as u32
}

pub fn extract_tags(input: &RawInput, kind: ComponentType) -> Vec<String> {
    let mut tags = vec![kind.tag().to_string()];

    if let TechnicalRequirementsInput::Settings(settings) = &input.technical_requirements {
        if !settings.testing.is_empty() {
            tags.push("tested".to_string());
        }
    }
    if !input.design_requirements.is_empty() || !input.architectural_guidelines.is_empty() {
        tags.push("designed".to_string());
    }

    tags
}
