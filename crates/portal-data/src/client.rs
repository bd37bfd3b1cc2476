//! Fallback-applying access to a [`PatientDataSource`]
//!
//! The dashboard never shows a fetch error in place of a panel. Each
//! resource is fetched independently and a failure degrades to the empty
//! state for that resource:
//!
//! | resource        | on failure                  |
//! |-----------------|-----------------------------|
//! | vitals          | empty series                |
//! | lab results     | empty list                  |
//! | longevity data  | `LongevityData::default()`  |
//! | tab configs     | registry tabs               |
//!
//! The patient profile is the exception: without a date of birth there is
//! no report to compute, so its error is returned.

use crate::error::DataError;
use crate::source::PatientDataSource;
use chrono::NaiveDate;
use longevity_core::{LabResult, LongevityData, LongevityReport, VitalSnapshot};
use tab_resolver::{
    render_tab_content, tabs_view, PatientContext, RenderPayload, TabRegistry, TabsView,
};

pub struct PortalClient<'a, S> {
    source: S,
    registry: &'a TabRegistry,
}

impl<'a, S: PatientDataSource> PortalClient<'a, S> {
    pub fn new(source: S, registry: &'a TabRegistry) -> Self {
        Self { source, registry }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn vitals(&self, patient_id: &str) -> Vec<VitalSnapshot> {
        self.source.vitals(patient_id).unwrap_or_else(|err| {
            tracing::warn!(patient_id, error = %err, "vitals unavailable, showing empty series");
            Vec::new()
        })
    }

    pub fn lab_results(&self, patient_id: &str) -> Vec<LabResult> {
        self.source.lab_results(patient_id).unwrap_or_else(|err| {
            tracing::warn!(patient_id, error = %err, "lab results unavailable, showing none");
            Vec::new()
        })
    }

    /// `None` when no assessment could be fetched.
    ///
    /// A missing assessment scores the same as an empty one, so callers may
    /// pass this straight to the score composer.
    pub fn longevity_data(&self, patient_id: &str) -> Option<LongevityData> {
        match self.source.longevity_data(patient_id) {
            Ok(data) => Some(data),
            Err(err) => {
                tracing::warn!(patient_id, error = %err, "longevity data unavailable");
                None
            }
        }
    }

    /// Effective tab strip. A failed configuration fetch falls back to the
    /// registry tabs.
    pub fn tabs(&self) -> TabsView {
        tabs_view(Some(self.source.tab_configs()), self.registry)
    }

    /// Longevity panel report for `patient_id` as of `today`.
    pub fn longevity_report(
        &self,
        patient_id: &str,
        today: NaiveDate,
    ) -> Result<LongevityReport, DataError> {
        let profile = self.source.patient(patient_id)?;
        let vitals = self.vitals(patient_id);
        let labs = self.lab_results(patient_id);
        let data = self.longevity_data(patient_id);

        let report = LongevityReport::compute(&profile, &vitals, &labs, data.as_ref(), today);
        tracing::debug!(
            patient_id,
            vitals = vitals.len(),
            labs = labs.len(),
            score = report.longevity_score,
            "computed longevity report"
        );
        Ok(report)
    }

    /// Payload for the tab with `key` in the current tab strip, or `None`
    /// when no such tab is shown.
    pub fn render_tab(&self, key: &str, ctx: &PatientContext) -> Option<RenderPayload> {
        let view = self.tabs();
        let tab = view.tabs().iter().find(|t| t.key == key)?;
        Some(render_tab_content(tab, ctx, self.registry))
    }
}
