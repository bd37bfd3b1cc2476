//! Effective tab list resolution.

use crate::config::{ContentType, TabConfig};
use crate::registry::TabRegistry;
use serde::Serialize;
use std::fmt::Display;

/// Spacing between synthetic display orders of registry fallbacks
pub const FALLBACK_ORDER_STEP: i32 = 10;

/// Scope assigned to registry fallback tabs
pub const FALLBACK_SCOPE: &str = "system";

/// Where the effective tab list came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TabSource {
    Remote,
    Registry,
}

/// Effective tab list.
///
/// A non-empty remote list wins: its visible entries sorted by ascending
/// `display_order` (stable, so equal orders keep server order). A missing
/// or empty remote list falls back to every registry entry, in registry
/// order, with `display_order = (i + 1) * 10` and `id = -(i + 1)` so the
/// synthetic ids can never collide with server ids.
pub fn resolve_tabs(remote: Option<&[TabConfig]>, registry: &TabRegistry) -> Vec<TabConfig> {
    resolve_with_source(remote, registry).0
}

fn resolve_with_source(
    remote: Option<&[TabConfig]>,
    registry: &TabRegistry,
) -> (Vec<TabConfig>, TabSource) {
    match remote {
        Some(configs) if !configs.is_empty() => {
            let mut tabs: Vec<TabConfig> =
                configs.iter().filter(|t| t.is_visible).cloned().collect();
            tabs.sort_by_key(|t| t.display_order);
            tracing::debug!(
                received = configs.len(),
                visible = tabs.len(),
                "using remote tab configuration"
            );
            (tabs, TabSource::Remote)
        }
        _ => {
            tracing::debug!(entries = registry.len(), "using registry tab fallback");
            (registry_fallback(registry), TabSource::Registry)
        }
    }
}

fn registry_fallback(registry: &TabRegistry) -> Vec<TabConfig> {
    registry
        .iter()
        .zip(1i32..)
        .map(|(descriptor, position)| TabConfig {
            id: -i64::from(position),
            key: descriptor.key.to_string(),
            label: descriptor.label_key.to_string(),
            icon: descriptor.icon.to_string(),
            content_type: ContentType::BuiltinComponent,
            settings: serde_json::Value::Null,
            is_visible: true,
            is_system_default: true,
            display_order: position * FALLBACK_ORDER_STEP,
            scope: FALLBACK_SCOPE.to_string(),
        })
        .collect()
}

/// Tab strip state for one render cycle
#[derive(Clone, Debug, PartialEq)]
pub enum TabsView {
    /// Configuration fetch still in flight; show the loading indicator
    Loading,
    Ready {
        tabs: Vec<TabConfig>,
        source: TabSource,
    },
}

impl TabsView {
    pub fn tabs(&self) -> &[TabConfig] {
        match self {
            TabsView::Loading => &[],
            TabsView::Ready { tabs, .. } => tabs,
        }
    }

    /// Tab matching `requested` key, or the first tab when the key is
    /// absent or no longer present.
    pub fn active(&self, requested: Option<&str>) -> Option<&TabConfig> {
        let tabs = self.tabs();
        requested
            .and_then(|key| tabs.iter().find(|t| t.key == key))
            .or_else(|| tabs.first())
    }
}

/// Build the tab strip from the state of the configuration fetch.
///
/// `None` means the fetch has not completed. A failed fetch is logged and
/// treated exactly like an empty response.
pub fn tabs_view<E: Display>(
    fetch: Option<Result<Vec<TabConfig>, E>>,
    registry: &TabRegistry,
) -> TabsView {
    let remote = match fetch {
        None => return TabsView::Loading,
        Some(Ok(configs)) => configs,
        Some(Err(err)) => {
            tracing::warn!(error = %err, "tab configuration fetch failed, using registry tabs");
            Vec::new()
        }
    };
    let (tabs, source) = resolve_with_source(Some(remote.as_slice()), registry);
    TabsView::Ready { tabs, source }
}
