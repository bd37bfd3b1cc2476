//! Tab configuration records served by `/tab-configs`.

use serde::{Deserialize, Serialize};

/// How a tab's content is produced
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentType {
    BuiltinComponent,
    Markdown,
    Iframe,
    QueryWidget,
    /// Any content type this client does not know about
    Other(String),
}

impl ContentType {
    pub fn as_str(&self) -> &str {
        match self {
            ContentType::BuiltinComponent => "builtin_component",
            ContentType::Markdown => "markdown",
            ContentType::Iframe => "iframe",
            ContentType::QueryWidget => "query_widget",
            ContentType::Other(name) => name.as_str(),
        }
    }
}

impl From<String> for ContentType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "builtin_component" => ContentType::BuiltinComponent,
            "markdown" => ContentType::Markdown,
            "iframe" => ContentType::Iframe,
            "query_widget" => ContentType::QueryWidget,
            _ => ContentType::Other(value),
        }
    }
}

impl From<ContentType> for String {
    fn from(value: ContentType) -> Self {
        match value {
            ContentType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dashboard tab definition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabConfig {
    /// Server id; registry fallbacks use negative synthetic ids
    pub id: i64,
    /// Unique tab key, also the registry lookup key for built-in tabs
    pub key: String,
    pub label: String,
    /// Icon name understood by the rendering layer
    pub icon: String,
    pub content_type: ContentType,
    /// Free-form per-content-type settings (`content`, `url`, ...)
    #[serde(default)]
    pub settings: serde_json::Value,
    #[serde(default = "default_visible")]
    pub is_visible: bool,
    #[serde(default)]
    pub is_system_default: bool,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub scope: String,
}

fn default_visible() -> bool {
    true
}

impl TabConfig {
    /// String setting by name, if present and a string
    pub fn setting_str(&self, name: &str) -> Option<&str> {
        self.settings.get(name).and_then(|v| v.as_str())
    }
}
