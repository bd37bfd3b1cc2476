//! Tab Resolver - Dynamic Dashboard Tabs
//!
//! Merges the tab configurations served by the backend with the static
//! registry of built-in tabs, and turns each tab into a render payload.
//!
//! - [`resolve_tabs`] decides the effective, ordered tab list
//! - [`render_tab_content`] resolves one tab's content by content type
//! - [`sanitize_markdown`] is the only path that produces HTML
//!
//! A failed or empty configuration fetch never leaves the dashboard
//! without tabs: the registry fallback always yields a full list.

pub mod config;
pub mod content;
pub mod registry;
pub mod resolve;
pub mod sanitize;

pub use config::{ContentType, TabConfig};
pub use content::{
    render_tab_content, BuiltinView, IframeFrame, Notice, PatientContext, RenderPayload,
    TabContent, IFRAME_SANDBOX,
};
pub use registry::{standard_registry, TabDescriptor, TabRegistry};
pub use resolve::{resolve_tabs, tabs_view, TabSource, TabsView};
pub use sanitize::{sanitize_markdown, SanitizeError, SanitizedHtml};
