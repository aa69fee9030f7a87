use crate::blocks::BlockContent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Visual theme settings for a site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
    #[serde(default = "default_secondary_color")]
    pub secondary_color: String,
    #[serde(default = "default_font_family")]
    pub font_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: default_primary_color(),
            secondary_color: default_secondary_color(),
            font_family: default_font_family(),
        }
    }
}

fn default_primary_color() -> String {
    "#6366F1".to_string()
}

fn default_secondary_color() -> String {
    "#8B5CF6".to_string()
}

fn default_font_family() -> String {
    "Inter".to_string()
}

/// Top-level tenant entity representing one generated website project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: u64,
    pub name: String,
    pub domain: String,
    #[serde(default)]
    pub ai_prompt: String,
    #[serde(default)]
    pub ai_context: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A named, ordered collection of blocks belonging to one site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: u64,
    pub site_id: u64,
    pub title: String,
    pub slug: String,
    pub order: u32,
    #[serde(default)]
    pub is_default: bool,
}

/// Per-block metadata used by the chat stub to decide relevance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiTriggerRules {
    #[serde(default)]
    pub show_when: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default = "default_priority")]
    pub priority: u8,
}

impl Default for AiTriggerRules {
    fn default() -> Self {
        Self {
            show_when: String::new(),
            keywords: Vec::new(),
            priority: default_priority(),
        }
    }
}

/// Default AI trigger priority (expected range 1-10, not enforced)
fn default_priority() -> u8 {
    1
}

/// One content unit on a page, positioned within an ordered list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: u64,
    pub page_id: u64,
    #[serde(flatten)]
    pub content: BlockContent,
    pub position: u32,
    #[serde(default)]
    pub ai_enabled: bool,
    #[serde(default)]
    pub ai_trigger_rules: AiTriggerRules,
}

impl Component {
    /// The serialized block-type tag of this component
    pub fn kind(&self) -> &str {
        self.content.kind()
    }
}

/// Caller-supplied fields for creating a site
#[derive(Debug, Clone)]
pub struct NewSite {
    pub name: String,
    pub domain: String,
    pub ai_prompt: String,
    pub ai_context: String,
    pub theme: Theme,
}

/// Caller-supplied fields for creating a page.
///
/// `order` and `is_default` are derived by the store from the site's existing
/// pages.
#[derive(Debug, Clone)]
pub struct NewPage {
    pub site_id: u64,
    pub title: String,
    pub slug: String,
}

/// Caller-supplied fields for creating a component.
///
/// `position` is derived from the page's existing components; AI triggering
/// starts disabled.
#[derive(Debug, Clone)]
pub struct NewComponent {
    pub page_id: u64,
    pub content: BlockContent,
}

/// Partial update for a site; unset fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct SiteUpdate {
    pub name: Option<String>,
    pub domain: Option<String>,
    pub ai_prompt: Option<String>,
    pub ai_context: Option<String>,
    pub theme: Option<Theme>,
    pub published: Option<bool>,
}

/// Partial update for a page; unset fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct PageUpdate {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub order: Option<u32>,
    pub is_default: Option<bool>,
}

/// Partial update for a component; unset fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct ComponentUpdate {
    pub content: Option<BlockContent>,
    pub position: Option<u32>,
    pub ai_enabled: Option<bool>,
    pub ai_trigger_rules: Option<AiTriggerRules>,
}
