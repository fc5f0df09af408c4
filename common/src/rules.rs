//! 検出ルール定義
//!
//! パターン判定・要件フレーズ・コンポーネント分類・テンプレート対応の固定テーブル。
//! すべて `'static` 定数で、実行時に変更されない。

use crate::types::{ComponentCategory, PatternKind};

/// UIパターン判定ルール
#[derive(Debug)]
pub struct PatternRule {
    pub kind: PatternKind,
    pub keywords: &'static [&'static str],
    pub context_phrases: &'static [&'static str],
    /// 宣言のみ。スコア計算には使わない
    pub negative_keywords: &'static [&'static str],
    pub base_weight: f64,
}

/// コーパス全体に対するパターン判定ルール
pub static PATTERN_RULES: &[PatternRule] = &[
    PatternRule {
        kind: PatternKind::Dashboard,
        keywords: &[
            "dashboard", "admin", "control panel", "metrics", "analytics", "charts", "graphs",
            "kpi", "performance", "monitoring", "reporting", "insights", "visualization",
        ],
        context_phrases: &[
            "management", "overview", "summary", "statistics", "business intelligence",
            "data visualization",
        ],
        negative_keywords: &["simple", "basic", "minimal"],
        base_weight: 0.9,
    },
    PatternRule {
        kind: PatternKind::Ecommerce,
        keywords: &[
            "shop", "store", "product", "cart", "checkout", "payment", "inventory", "catalog",
            "shopping", "buy", "purchase", "order", "customer", "retail",
        ],
        context_phrases: &[
            "retail", "commerce", "marketplace", "storefront", "online shop", "e-commerce",
        ],
        negative_keywords: &["blog", "article", "content"],
        base_weight: 0.85,
    },
    PatternRule {
        kind: PatternKind::Blog,
        keywords: &[
            "blog", "article", "post", "content", "editor", "publish", "author", "writing", "news",
            "journal",
        ],
        context_phrases: &["content management", "publishing", "editorial"],
        negative_keywords: &[],
        base_weight: 0.8,
    },
    PatternRule {
        kind: PatternKind::Landing,
        keywords: &[
            "landing", "hero", "cta", "conversion", "marketing", "signup", "lead", "funnel",
            "sales",
        ],
        context_phrases: &["marketing", "conversion", "lead generation"],
        negative_keywords: &[],
        base_weight: 0.85,
    },
    PatternRule {
        kind: PatternKind::Auth,
        keywords: &[
            "login", "register", "signup", "authentication", "password", "user", "account",
            "profile", "security",
        ],
        context_phrases: &["user management", "access control", "identity"],
        negative_keywords: &[],
        base_weight: 0.9,
    },
    PatternRule {
        kind: PatternKind::Form,
        keywords: &[
            "form", "input", "validation", "submit", "field", "survey", "questionnaire",
            "data entry",
        ],
        context_phrases: &["data collection", "user input", "submission"],
        negative_keywords: &[],
        base_weight: 0.8,
    },
    PatternRule {
        kind: PatternKind::Navigation,
        keywords: &[
            "nav", "menu", "header", "footer", "breadcrumb", "sidebar", "navigation", "menu bar",
        ],
        context_phrases: &["site structure", "navigation", "layout"],
        negative_keywords: &[],
        base_weight: 0.75,
    },
    PatternRule {
        kind: PatternKind::Table,
        keywords: &[
            "table", "grid", "list", "data", "rows", "columns", "sort", "filter", "spreadsheet",
        ],
        context_phrases: &["data display", "tabular", "information"],
        negative_keywords: &[],
        base_weight: 0.8,
    },
    PatternRule {
        kind: PatternKind::Modal,
        keywords: &[
            "modal", "dialog", "popup", "overlay", "lightbox", "window", "alert", "notification",
        ],
        context_phrases: &["interaction", "overlay", "focus"],
        negative_keywords: &[],
        base_weight: 0.7,
    },
    PatternRule {
        kind: PatternKind::Card,
        keywords: &["card", "tile", "widget", "panel", "container", "box", "item"],
        context_phrases: &["content display", "modular", "component"],
        negative_keywords: &[],
        base_weight: 0.7,
    },
    PatternRule {
        kind: PatternKind::Profile,
        keywords: &[
            "profile", "user", "account", "settings", "preferences", "personal", "dashboard",
        ],
        context_phrases: &["user management", "personalization"],
        negative_keywords: &[],
        base_weight: 0.85,
    },
    PatternRule {
        kind: PatternKind::Chat,
        keywords: &[
            "chat", "message", "conversation", "messaging", "communication", "support", "help",
        ],
        context_phrases: &["communication", "interaction", "real-time"],
        negative_keywords: &[],
        base_weight: 0.8,
    },
    PatternRule {
        kind: PatternKind::Calendar,
        keywords: &["calendar", "schedule", "booking", "appointment", "event", "date", "time"],
        context_phrases: &["scheduling", "time management", "events"],
        negative_keywords: &[],
        base_weight: 0.8,
    },
    PatternRule {
        kind: PatternKind::Gallery,
        keywords: &["gallery", "image", "photo", "media", "portfolio", "showcase", "display"],
        context_phrases: &["media display", "visual content", "showcase"],
        negative_keywords: &[],
        base_weight: 0.75,
    },
    PatternRule {
        kind: PatternKind::Search,
        keywords: &["search", "find", "filter", "query", "lookup", "discover", "explore"],
        context_phrases: &["information retrieval", "discovery", "exploration"],
        negative_keywords: &[],
        base_weight: 0.8,
    },
    PatternRule {
        kind: PatternKind::Settings,
        keywords: &[
            "settings", "configuration", "preferences", "options", "setup", "admin", "control",
        ],
        context_phrases: &["configuration", "administration", "control"],
        negative_keywords: &[],
        base_weight: 0.85,
    },
];

/// 機能要件単位のフレーズ判定（固定信頼度）
#[derive(Debug)]
pub struct RequirementPhrase {
    pub phrase: &'static str,
    pub kind: PatternKind,
    pub confidence: u8,
    pub keywords: &'static [&'static str],
    pub description: &'static str,
}

pub static REQUIREMENT_PHRASES: &[RequirementPhrase] = &[
    RequirementPhrase {
        phrase: "user profile",
        kind: PatternKind::Profile,
        confidence: 85,
        keywords: &["user", "profile"],
        description: "User profile management functionality detected",
    },
    RequirementPhrase {
        phrase: "chat messaging",
        kind: PatternKind::Chat,
        confidence: 90,
        keywords: &["chat", "message"],
        description: "Chat/messaging functionality detected",
    },
    RequirementPhrase {
        phrase: "calendar scheduling",
        kind: PatternKind::Calendar,
        confidence: 85,
        keywords: &["calendar", "schedule"],
        description: "Calendar and scheduling functionality detected",
    },
    RequirementPhrase {
        phrase: "image gallery",
        kind: PatternKind::Gallery,
        confidence: 80,
        keywords: &["gallery", "image", "photo"],
        description: "Image gallery functionality detected",
    },
    RequirementPhrase {
        phrase: "search functionality",
        kind: PatternKind::Search,
        confidence: 85,
        keywords: &["search", "find", "filter"],
        description: "Search functionality detected",
    },
    RequirementPhrase {
        phrase: "settings configuration",
        kind: PatternKind::Settings,
        confidence: 90,
        keywords: &["settings", "configuration", "preferences"],
        description: "Settings and configuration functionality detected",
    },
];

/// コンポーネント分類テーブルの1区分
#[derive(Debug)]
pub struct TaxonomyEntry {
    pub category: ComponentCategory,
    pub keywords: &'static [&'static str],
    pub components: &'static [&'static str],
    pub constraints: &'static [&'static str],
}

/// 分類テーブル（同点時は先頭側を採用するため順序に意味がある）
pub static TAXONOMY: &[TaxonomyEntry] = &[
    TaxonomyEntry {
        category: ComponentCategory::Navigation,
        keywords: &["navigation", "header", "footer", "sidebar", "menu", "breadcrumb"],
        components: &["navigation-header", "sidebar-menu", "breadcrumb", "pagination"],
        constraints: &["responsive", "accessible", "mobile-friendly"],
    },
    TaxonomyEntry {
        category: ComponentCategory::Form,
        keywords: &["form", "input", "validation", "submit", "field", "survey", "questionnaire"],
        components: &[
            "input-field", "form-group", "submit-button", "validation-message", "form-wizard",
        ],
        constraints: &["validation", "accessible", "responsive"],
    },
    TaxonomyEntry {
        category: ComponentCategory::Display,
        keywords: &["table", "grid", "list", "data", "chart", "graph", "card", "gallery"],
        components: &["data-table", "card-grid", "list-view", "chart-component", "image-gallery"],
        constraints: &["sortable", "filterable", "responsive"],
    },
    TaxonomyEntry {
        category: ComponentCategory::Interaction,
        keywords: &[
            "button", "link", "click", "action", "cta", "modal", "dialog", "chat", "conversation",
        ],
        components: &[
            "button-primary", "button-secondary", "link-button", "modal-dialog", "tooltip",
            "chat-window", "message-thread",
        ],
        constraints: &["accessible", "responsive", "hover-effects"],
    },
    TaxonomyEntry {
        category: ComponentCategory::Layout,
        keywords: &["layout", "container", "section", "grid", "flex", "responsive"],
        components: &["container", "grid-layout", "flex-layout", "responsive-wrapper"],
        constraints: &["responsive", "flexible", "mobile-first"],
    },
    TaxonomyEntry {
        category: ComponentCategory::Content,
        keywords: &["text", "content", "article", "blog", "editor", "rich-text"],
        components: &["text-block", "content-editor", "article-card", "rich-text-editor"],
        constraints: &["readable", "accessible", "seo-friendly"],
    },
    TaxonomyEntry {
        category: ComponentCategory::Feedback,
        keywords: &["notification", "alert", "message", "toast", "status", "progress"],
        components: &["notification-toast", "alert-banner", "progress-bar", "status-indicator"],
        constraints: &["accessible", "dismissible", "auto-hide"],
    },
    TaxonomyEntry {
        category: ComponentCategory::Data,
        keywords: &["api", "fetch", "data", "state", "cache", "storage"],
        components: &["data-provider", "api-client", "state-manager", "cache-service"],
        constraints: &["performant", "cached", "error-handled"],
    },
];

/// 候補コンポーネント名（部分一致）→ 代替コンポーネント
pub static ALTERNATIVE_RULES: &[(&str, &[&str])] = &[
    ("button", &["link-button", "icon-button", "toggle-button"]),
    ("form", &["form-wizard", "multi-step-form", "inline-form"]),
    ("table", &["data-grid", "virtual-table", "editable-table"]),
    ("card", &["info-card", "product-card", "feature-card"]),
];

/// パターン種別に対応するテンプレートID（優先順）
pub fn templates_for(kind: PatternKind) -> &'static [&'static str] {
    match kind {
        PatternKind::Dashboard => &["linear", "apple", "corporate"],
        PatternKind::Ecommerce => &["spotify", "ecommerce", "startup"],
        PatternKind::Blog => &["editorial", "minimal", "creative"],
        PatternKind::Landing => &["brutalist", "startup", "creative"],
        PatternKind::Auth => &["minimal", "corporate", "linear"],
        PatternKind::Form => &["linear", "corporate", "minimal"],
        PatternKind::Navigation => &["apple", "linear", "corporate"],
        PatternKind::Table => &["corporate", "linear", "startup"],
        PatternKind::Modal => &["minimal", "linear", "apple"],
        PatternKind::Card => &["spotify", "creative", "startup"],
        PatternKind::Profile => &["linear", "apple", "corporate"],
        PatternKind::Chat => &["spotify", "creative", "startup"],
        PatternKind::Calendar => &["linear", "corporate", "apple"],
        PatternKind::Gallery => &["creative", "minimal", "editorial"],
        PatternKind::Search => &["linear", "apple", "corporate"],
        PatternKind::Settings => &["corporate", "linear", "apple"],
    }
}

/// テンプレートIDから表示名を取得（未知のIDはそのまま）
pub fn template_name(template_id: &str) -> &str {
    match template_id {
        "linear" => "Linear",
        "apple" => "Apple",
        "spotify" => "Spotify",
        "mailchimp" => "Mailchimp",
        "brutalist" => "Brutalist",
        "corporate" => "Corporate",
        "ecommerce" => "E-commerce",
        "startup" => "Startup",
        "editorial" => "Editorial",
        "gaming" => "Gaming",
        "minimal" => "Minimal",
        "creative" => "Creative",
        "bold" => "Bold",
        "elegant" => "Elegant",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pattern_rules_unique_kinds() {
        let kinds: HashSet<PatternKind> = PATTERN_RULES.iter().map(|r| r.kind).collect();
        assert_eq!(kinds.len(), PATTERN_RULES.len());
        assert_eq!(PATTERN_RULES.len(), 16);
    }

    #[test]
    fn test_pattern_rules_well_formed() {
        for rule in PATTERN_RULES {
            assert!(!rule.keywords.is_empty(), "{} has no keywords", rule.kind);
            assert!(rule.base_weight > 0.0 && rule.base_weight <= 1.0);
            for keyword in rule.keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn test_taxonomy_covers_all_categories_in_order() {
        let categories: Vec<ComponentCategory> = TAXONOMY.iter().map(|e| e.category).collect();
        assert_eq!(
            categories,
            vec![
                ComponentCategory::Navigation,
                ComponentCategory::Form,
                ComponentCategory::Display,
                ComponentCategory::Interaction,
                ComponentCategory::Layout,
                ComponentCategory::Content,
                ComponentCategory::Feedback,
                ComponentCategory::Data,
            ]
        );
    }

    #[test]
    fn test_templates_for() {
        assert_eq!(templates_for(PatternKind::Dashboard), &["linear", "apple", "corporate"]);
        assert_eq!(templates_for(PatternKind::Chat), &["spotify", "creative", "startup"]);
    }

    #[test]
    fn test_template_name() {
        assert_eq!(template_name("ecommerce"), "E-commerce");
        assert_eq!(template_name("linear"), "Linear");
        assert_eq!(template_name("unknown-theme"), "unknown-theme");
    }
}
