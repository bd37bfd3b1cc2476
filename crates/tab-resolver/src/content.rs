//! Tab content resolution
//!
//! Maps a tab configuration onto what the rendering layer should draw.
//! Resolution is total: every tab yields a payload, and a failure inside
//! one tab's content stays inside that tab.

use crate::config::{ContentType, TabConfig};
use crate::registry::TabRegistry;
use crate::sanitize::{sanitize_markdown, SanitizedHtml};
use serde::Serialize;

/// Sandbox applied to every embedded frame: no top navigation, no popups
pub const IFRAME_SANDBOX: &str = "allow-scripts allow-same-origin";

pub const COMING_SOON_TITLE: &str = "Coming soon";
pub const COMING_SOON_MESSAGE: &str = "Query widgets are not available yet.";
pub const UNSUPPORTED_TITLE: &str = "Unsupported tab";
pub const UNSUPPORTED_MESSAGE: &str = "This content type is not supported.";
pub const IFRAME_URL_MISSING_MESSAGE: &str = "Iframe URL not configured.";
pub const RENDER_ERROR_MESSAGE: &str = "Error rendering content";

/// Patient the dashboard is currently showing
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientContext {
    pub patient_id: String,
    pub patient_name: Option<String>,
}

impl PatientContext {
    pub fn new(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            patient_name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.patient_name = Some(name.into());
        self
    }
}

/// A built-in component to mount, with the resources it will fetch
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltinView {
    pub component: String,
    pub patient_id: String,
    pub resources: Vec<String>,
}

impl BuiltinView {
    pub fn new(component: &str, ctx: &PatientContext) -> Self {
        Self {
            component: component.to_string(),
            patient_id: ctx.patient_id.clone(),
            resources: Vec::new(),
        }
    }

    pub fn with_resource(mut self, path: String) -> Self {
        self.resources.push(path);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IframeFrame {
    pub src: String,
    pub sandbox: &'static str,
}

/// Fixed informational message in place of content
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    fn new(title: &str, message: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            message: message.into(),
        }
    }

    fn unsupported(content_type: &str) -> Self {
        Self::new(
            UNSUPPORTED_TITLE,
            format!("{} ({})", UNSUPPORTED_MESSAGE, content_type),
        )
    }
}

/// What the rendering layer draws for one tab
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderPayload {
    Builtin(BuiltinView),
    Html(SanitizedHtml),
    Iframe(IframeFrame),
    Notice(Notice),
    Error { message: String },
}

/// A tab's content, decided from its content type and settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TabContent {
    BuiltinComponent(String),
    Markdown(String),
    Iframe(Option<String>),
    QueryWidget,
    Unsupported(String),
}

impl TabContent {
    /// Markdown comes from `settings.content` (or `settings.markdown`),
    /// iframe targets from `settings.url`.
    pub fn from_config(tab: &TabConfig) -> Self {
        match &tab.content_type {
            ContentType::BuiltinComponent => TabContent::BuiltinComponent(tab.key.clone()),
            ContentType::Markdown => TabContent::Markdown(
                tab.setting_str("content")
                    .or_else(|| tab.setting_str("markdown"))
                    .unwrap_or_default()
                    .to_string(),
            ),
            ContentType::Iframe => TabContent::Iframe(tab.setting_str("url").map(str::to_string)),
            ContentType::QueryWidget => TabContent::QueryWidget,
            ContentType::Other(name) => TabContent::Unsupported(name.clone()),
        }
    }
}

/// Resolve one tab's render payload for the current patient.
pub fn render_tab_content(
    tab: &TabConfig,
    ctx: &PatientContext,
    registry: &TabRegistry,
) -> RenderPayload {
    match TabContent::from_config(tab) {
        TabContent::BuiltinComponent(key) => match registry.get(&key) {
            Some(descriptor) => RenderPayload::Builtin((descriptor.render)(ctx)),
            None => {
                tracing::debug!(key = %key, "built-in tab not in registry");
                RenderPayload::Notice(Notice::unsupported(tab.content_type.as_str()))
            }
        },
        TabContent::Markdown(text) => match sanitize_markdown(&text) {
            Ok(html) => RenderPayload::Html(html),
            Err(err) => {
                tracing::warn!(key = %tab.key, error = %err, "markdown tab failed to render");
                RenderPayload::Error {
                    message: RENDER_ERROR_MESSAGE.to_string(),
                }
            }
        },
        TabContent::Iframe(url) => match url.as_deref().map(str::trim).filter(|u| is_frameable(u)) {
            Some(src) => RenderPayload::Iframe(IframeFrame {
                src: src.to_string(),
                sandbox: IFRAME_SANDBOX,
            }),
            None => RenderPayload::Notice(Notice::new(UNSUPPORTED_TITLE, IFRAME_URL_MISSING_MESSAGE)),
        },
        TabContent::QueryWidget => {
            RenderPayload::Notice(Notice::new(COMING_SOON_TITLE, COMING_SOON_MESSAGE))
        }
        TabContent::Unsupported(name) => RenderPayload::Notice(Notice::unsupported(&name)),
    }
}

/// Frames may only load http(s) documents
fn is_frameable(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    (lower.starts_with("https://") || lower.starts_with("http://")) && !url.contains(char::is_whitespace)
}
