//! 検出結果の型定義
//!
//! - Requirements: ブループリントから解析した要件（機能・技術・デザイン）
//! - DetectedPattern: UIパターン検出結果
//! - ComponentRequirement: コンポーネント分類結果
//! - TemplateRecommendation: テンプレート推薦
//! - ComponentDetectionResult: 最終出力

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 要件の優先度
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

/// 技術要件の区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TechnicalCategory {
    Performance,
    Security,
    Accessibility,
    Compatibility,
}

impl TechnicalCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TechnicalCategory::Performance => "PERFORMANCE",
            TechnicalCategory::Security => "SECURITY",
            TechnicalCategory::Accessibility => "ACCESSIBILITY",
            TechnicalCategory::Compatibility => "COMPATIBILITY",
        }
    }
}

impl std::str::FromStr for TechnicalCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PERFORMANCE" => Ok(TechnicalCategory::Performance),
            "SECURITY" => Ok(TechnicalCategory::Security),
            "ACCESSIBILITY" => Ok(TechnicalCategory::Accessibility),
            "COMPATIBILITY" => Ok(TechnicalCategory::Compatibility),
            _ => Err(format!("Unknown technical category: {}", s)),
        }
    }
}

impl std::fmt::Display for TechnicalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 機能要件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionalRequirement {
    pub id: String,
    pub description: String,
    pub acceptance_criteria: Vec<String>,
    pub priority: Priority,
}

/// 技術要件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalRequirement {
    pub id: String,
    pub category: TechnicalCategory,
    pub specification: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<String>,
    pub mandatory: bool,
}

/// デザイン要件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignRequirement {
    pub id: String,
    pub pattern: String,
    pub styling: String,
    pub responsive: bool,
    pub theme: bool,
}

/// 解析済み要件一式
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Requirements {
    pub functional: Vec<FunctionalRequirement>,
    pub technical: Vec<TechnicalRequirement>,
    pub design: Vec<DesignRequirement>,
}

/// 生成対象の種類
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentType {
    #[default]
    UiComponent,
    Service,
    Hook,
    Utility,
    Layout,
    Page,
    ApiRoute,
}

impl ComponentType {
    /// タグ用の名前（ui-component など）
    pub fn tag(&self) -> &'static str {
        match self {
            ComponentType::UiComponent => "ui-component",
            ComponentType::Service => "service",
            ComponentType::Hook => "hook",
            ComponentType::Utility => "utility",
            ComponentType::Layout => "layout",
            ComponentType::Page => "page",
            ComponentType::ApiRoute => "api-route",
        }
    }
}

/// ブループリントの区分
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlueprintCategory {
    Core,
    #[default]
    Feature,
    Shared,
    External,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Complexity {
    #[default]
    Simple,
    Moderate,
    Complex,
    VeryComplex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DependencyKind {
    Compose,
    Peer,
}

/// 他コンポーネントへの依存
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalDependency {
    pub component_id: String,
    #[serde(rename = "type")]
    pub kind: DependencyKind,
    pub required: bool,
}

/// 外部パッケージへの依存
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalDependency {
    pub package: String,
    pub version: String,
    #[serde(rename = "type")]
    pub kind: DependencyKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dependencies {
    pub internal: Vec<InternalDependency>,
    pub external: Vec<ExternalDependency>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRule {
    pub property: String,
    pub rule: String,
    pub error_message: String,
}

/// 数値目標による制約
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    #[serde(rename = "type")]
    pub kind: TechnicalCategory,
    pub limit: String,
    pub metric: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Validation {
    pub rules: Vec<ValidationRule>,
    pub constraints: Vec<Constraint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintMetadata {
    pub priority: Priority,
    pub complexity: Complexity,
    /// 見積もり（分）
    pub estimated_time: u32,
    pub tags: Vec<String>,
}

/// 要件以外のブループリント情報（種類・依存・検証・メタデータ）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlueprintProfile {
    #[serde(rename = "type")]
    pub kind: ComponentType,
    pub category: BlueprintCategory,
    pub dependencies: Dependencies,
    pub validation: Validation,
    pub metadata: BlueprintMetadata,
}

/// UIパターンの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Dashboard,
    Ecommerce,
    Blog,
    Landing,
    Auth,
    Form,
    Navigation,
    Table,
    Modal,
    Card,
    Profile,
    Chat,
    Calendar,
    Gallery,
    Search,
    Settings,
}

impl PatternKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::Dashboard => "dashboard",
            PatternKind::Ecommerce => "ecommerce",
            PatternKind::Blog => "blog",
            PatternKind::Landing => "landing",
            PatternKind::Auth => "auth",
            PatternKind::Form => "form",
            PatternKind::Navigation => "navigation",
            PatternKind::Table => "table",
            PatternKind::Modal => "modal",
            PatternKind::Card => "card",
            PatternKind::Profile => "profile",
            PatternKind::Chat => "chat",
            PatternKind::Calendar => "calendar",
            PatternKind::Gallery => "gallery",
            PatternKind::Search => "search",
            PatternKind::Settings => "settings",
        }
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 検出されたUIパターン
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedPattern {
    #[serde(rename = "type")]
    pub kind: PatternKind,
    pub confidence: u8,
    pub matched_keywords: Vec<String>,
    pub description: String,
}

/// コンポーネント分類（8区分固定）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentCategory {
    Navigation,
    Form,
    Display,
    Interaction,
    Layout,
    Content,
    Feedback,
    Data,
}

impl ComponentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentCategory::Navigation => "navigation",
            ComponentCategory::Form => "form",
            ComponentCategory::Display => "display",
            ComponentCategory::Interaction => "interaction",
            ComponentCategory::Layout => "layout",
            ComponentCategory::Content => "content",
            ComponentCategory::Feedback => "feedback",
            ComponentCategory::Data => "data",
        }
    }
}

impl std::fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 機能要件から導出したコンポーネント要件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRequirement {
    pub category: ComponentCategory,
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: Priority,
    pub description: String,
    /// 候補コンポーネント名
    pub components: Vec<String>,
    pub constraints: Vec<String>,
    pub alternatives: Vec<String>,
}

/// コンポーネントのカスタマイズ内容
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentCustomization {
    pub styling: StyleCustomization,
    pub behavior: BehaviorCustomization,
    pub content: ContentCustomization,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleCustomization {
    pub colors: ColorTokens,
    pub typography: TypographyTokens,
    pub spacing: SpacingTokens,
    pub animation: AnimationTokens,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyTokens {
    pub font_family: String,
    pub font_size: String,
    pub font_weight: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpacingTokens {
    pub padding: String,
    pub margin: String,
    pub gap: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationTokens {
    pub duration: String,
    pub easing: String,
    pub intensity: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BehaviorCustomization {
    pub interactions: Vec<String>,
    pub states: Vec<String>,
    pub events: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentCustomization {
    pub text: String,
    pub icons: Vec<String>,
    pub data: BTreeMap<String, String>,
}

/// テンプレートとコンポーネント要件の対応
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMatch {
    pub component_id: String,
    pub name: String,
    pub category: ComponentCategory,
    pub confidence: u8,
    pub reasoning: Vec<String>,
    pub customization: ComponentCustomization,
}

/// テンプレート推薦
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRecommendation {
    pub template_id: String,
    pub name: String,
    pub confidence: u8,
    pub reasoning: Vec<String>,
    pub component_matches: Vec<ComponentMatch>,
}

/// 検出の最終出力
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDetectionResult {
    pub detected_patterns: Vec<DetectedPattern>,
    pub component_requirements: Vec<ComponentRequirement>,
    pub template_recommendations: Vec<TemplateRecommendation>,
    pub confidence: u8,
    pub reasoning: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_serialize() {
        assert_eq!(serde_json::to_string(&Priority::Critical).unwrap(), "\"CRITICAL\"");
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn test_technical_category_from_str() {
        assert_eq!(
            "accessibility".parse::<TechnicalCategory>(),
            Ok(TechnicalCategory::Accessibility)
        );
        assert_eq!(
            " Performance ".parse::<TechnicalCategory>(),
            Ok(TechnicalCategory::Performance)
        );
        assert!("LOOKS".parse::<TechnicalCategory>().is_err());
    }

    #[test]
    fn test_detected_pattern_serialize() {
        let pattern = DetectedPattern {
            kind: PatternKind::Ecommerce,
            confidence: 85,
            matched_keywords: vec!["cart".to_string()],
            description: "shop".to_string(),
        };

        let json = serde_json::to_string(&pattern).expect("シリアライズ失敗");
        assert!(json.contains("\"type\":\"ecommerce\""));
        assert!(json.contains("\"matchedKeywords\":[\"cart\"]"));
    }

    #[test]
    fn test_component_requirement_serialize() {
        let req = ComponentRequirement {
            category: ComponentCategory::Interaction,
            kind: "interaction".to_string(),
            priority: Priority::High,
            description: "Click to open".to_string(),
            components: vec![],
            constraints: vec!["accessible".to_string()],
            alternatives: vec![],
        };

        let json = serde_json::to_string(&req).expect("シリアライズ失敗");
        assert!(json.contains("\"category\":\"interaction\""));
        assert!(json.contains("\"type\":\"interaction\""));
        assert!(json.contains("\"priority\":\"HIGH\""));
    }

    #[test]
    fn test_detection_result_deserialize() {
        let json = r#"{
            "detectedPatterns": [],
            "componentRequirements": [],
            "templateRecommendations": [],
            "confidence": 0,
            "reasoning": ["Limited component requirements detected in blueprint"]
        }"#;

        let result: ComponentDetectionResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result.confidence, 0);
        assert_eq!(result.reasoning.len(), 1);
    }

    #[test]
    fn test_display_impls() {
        assert_eq!(PatternKind::Calendar.to_string(), "calendar");
        assert_eq!(ComponentCategory::Feedback.to_string(), "feedback");
        assert_eq!(TechnicalCategory::Security.to_string(), "SECURITY");
    }

    #[test]
    fn test_profile_serialize() {
        let profile = BlueprintProfile {
            kind: ComponentType::ApiRoute,
            validation: Validation {
                rules: vec![],
                constraints: vec![Constraint {
                    kind: TechnicalCategory::Performance,
                    limit: "2s".to_string(),
                    metric: "lcp".to_string(),
                }],
            },
            ..Default::default()
        };

        let json = serde_json::to_string(&profile).expect("シリアライズ失敗");
        assert!(json.contains("\"type\":\"API_ROUTE\""));
        assert!(json.contains("\"category\":\"FEATURE\""));
        assert!(json.contains("{\"type\":\"PERFORMANCE\",\"limit\":\"2s\",\"metric\":\"lcp\"}"));
        assert!(json.contains("\"estimatedTime\":0"));
        assert_eq!(ComponentType::UiComponent.tag(), "ui-component");
        assert!(Complexity::VeryComplex > Complexity::Moderate);
    }
}
