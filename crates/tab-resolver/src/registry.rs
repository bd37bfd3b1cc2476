//! Static registry of built-in tabs
//!
//! The registry is read-only configuration: built once, never mutated,
//! shared by every render through [`standard_registry`].

use crate::content::{BuiltinView, PatientContext};
use once_cell::sync::Lazy;

/// Renders a built-in tab for the current patient
pub type RenderFn = fn(&PatientContext) -> BuiltinView;

/// Registry entry for a built-in tab
#[derive(Clone, Copy)]
pub struct TabDescriptor {
    pub key: &'static str,
    pub icon: &'static str,
    /// i18n key for the tab label
    pub label_key: &'static str,
    pub render: RenderFn,
}

impl std::fmt::Debug for TabDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabDescriptor")
            .field("key", &self.key)
            .field("icon", &self.icon)
            .field("label_key", &self.label_key)
            .finish_non_exhaustive()
    }
}

/// Ordered, immutable key -> descriptor table
#[derive(Clone, Debug, Default)]
pub struct TabRegistry {
    entries: Vec<TabDescriptor>,
}

impl TabRegistry {
    /// Build a registry from descriptors in display order.
    ///
    /// A later descriptor with an already-registered key is ignored.
    pub fn new(descriptors: impl IntoIterator<Item = TabDescriptor>) -> Self {
        let mut entries: Vec<TabDescriptor> = Vec::new();
        for descriptor in descriptors {
            if entries.iter().any(|e| e.key == descriptor.key) {
                tracing::warn!(key = descriptor.key, "duplicate tab key in registry ignored");
                continue;
            }
            entries.push(descriptor);
        }
        Self { entries }
    }

    /// The built-in practice-management tabs
    pub fn standard() -> Self {
        Self::new([
            builtin("overview", "layout-dashboard", "tabs.overview", render_overview),
            builtin("vitals", "activity", "tabs.vitals", render_vitals),
            builtin("labs", "flask-conical", "tabs.labs", render_labs),
            builtin("prescriptions", "pill", "tabs.prescriptions", render_prescriptions),
            builtin("insurance", "shield", "tabs.insurance", render_insurance),
            builtin("referrals", "send", "tabs.referrals", render_referrals),
            builtin("clinical_notes", "notebook-pen", "tabs.clinicalNotes", render_clinical_notes),
            builtin("longevity", "hourglass", "tabs.longevity", render_longevity),
        ])
    }

    pub fn get(&self, key: &str) -> Option<&TabDescriptor> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Descriptors in registry order
    pub fn iter(&self) -> impl Iterator<Item = &TabDescriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static STANDARD: Lazy<TabRegistry> = Lazy::new(TabRegistry::standard);

/// Process-wide standard registry
pub fn standard_registry() -> &'static TabRegistry {
    &STANDARD
}

fn builtin(
    key: &'static str,
    icon: &'static str,
    label_key: &'static str,
    render: RenderFn,
) -> TabDescriptor {
    TabDescriptor {
        key,
        icon,
        label_key,
        render,
    }
}

fn render_overview(ctx: &PatientContext) -> BuiltinView {
    BuiltinView::new("PatientOverview", ctx)
}

fn render_vitals(ctx: &PatientContext) -> BuiltinView {
    BuiltinView::new("VitalsPanel", ctx).with_resource(format!("/patients/{}/vitals", ctx.patient_id))
}

fn render_labs(ctx: &PatientContext) -> BuiltinView {
    BuiltinView::new("LabResultsPanel", ctx)
        .with_resource(format!("/patients/{}/lab-results", ctx.patient_id))
}

fn render_prescriptions(ctx: &PatientContext) -> BuiltinView {
    BuiltinView::new("PrescriptionsPanel", ctx)
}

fn render_insurance(ctx: &PatientContext) -> BuiltinView {
    BuiltinView::new("InsurancePanel", ctx)
}

fn render_referrals(ctx: &PatientContext) -> BuiltinView {
    BuiltinView::new("ReferralsPanel", ctx)
}

fn render_clinical_notes(ctx: &PatientContext) -> BuiltinView {
    BuiltinView::new("ClinicalNotesPanel", ctx)
}

fn render_longevity(ctx: &PatientContext) -> BuiltinView {
    BuiltinView::new("LongevityPanel", ctx)
        .with_resource(format!("/patients/{}/vitals", ctx.patient_id))
        .with_resource(format!("/patients/{}/lab-results", ctx.patient_id))
        .with_resource(format!("/patients/{}/longevity-data", ctx.patient_id))
}
