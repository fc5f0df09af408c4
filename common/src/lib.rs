//! UI Detect Common Library
//!
//! ブループリント（プロジェクト要件）からUIパターン・コンポーネント要件・
//! テンプレート推薦を導出する検出コア。I/Oを持たない純粋な処理のみ。

pub mod error;
pub mod input;
pub mod types;
pub mod rules;
pub mod blueprint;
pub mod text;
pub mod patterns;
pub mod components;
pub mod templates;
pub mod detector;

pub use error::{Error, Result};
pub use input::RawInput;
pub use types::{
    BlueprintProfile, ComponentCategory, ComponentCustomization, ComponentDetectionResult,
    ComponentMatch, ComponentRequirement, DetectedPattern, PatternKind, Priority, Requirements,
    TemplateRecommendation,
};
pub use blueprint::{blueprint_description, describe_blueprint, extract_name, parse_requirements};
pub use templates::{CustomizationProvider, PlaceholderCustomization};
pub use detector::{detect, detect_parsed, detect_with, fallback_result};
