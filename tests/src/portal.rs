//! Portal Flow Tests
//!
//! End-to-end flows over a data directory laid out like the REST API:
//! report computation, partial outages and tab configuration fallbacks.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use longevity_core::ScoreBand;
    use portal_data::{
        DataError, FileDataSource, PatientDataSource, PortalClient, RetryPolicy,
    };
    use serde_json::json;
    use std::fs;
    use std::path::Path;
    use tab_resolver::{standard_registry, PatientContext, RenderPayload, TabSource, TabsView};
    use tempfile::TempDir;

    fn put(root: &Path, relative: &str, value: serde_json::Value) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
    }

    /// Data directory holding the athlete's full record
    fn athlete_directory() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        put(root, "patients/PAT-100.json", serde_json::to_value(athlete_profile()).unwrap());
        put(root, "patients/PAT-100/vitals.json", serde_json::to_value(athlete_vitals()).unwrap());
        put(root, "patients/PAT-100/lab-results.json", serde_json::to_value(athlete_labs()).unwrap());
        put(
            root,
            "patients/PAT-100/longevity-data.json",
            json!({"hrv": {"hrvScore": 55, "readinessScore": 80}}),
        );
        dir
    }

    fn client(dir: &TempDir) -> PortalClient<'static, FileDataSource> {
        let source = FileDataSource::new(dir.path()).with_retry(RetryPolicy::none());
        PortalClient::new(source, standard_registry())
    }

    #[test]
    fn test_full_record_report() {
        let dir = athlete_directory();
        let report = client(&dir).longevity_report("PAT-100", today()).unwrap();

        assert_eq!(report.patient_id, "PAT-100");
        assert_eq!(report.biological_age.biological_age, 33);
        assert_eq!(report.cardiovascular_risk, Some(5));
        assert_eq!(report.longevity_score, 79);
        assert_eq!(report.band, ScoreBand::Good);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["longevityScore"], 79);
        assert_eq!(value["biologicalAge"]["delta"], -7);
    }

    #[test]
    fn test_lab_outage_degrades_report() {
        let dir = athlete_directory();
        fs::write(dir.path().join("patients/PAT-100/lab-results.json"), "<html>502</html>").unwrap();

        let client = client(&dir);
        assert!(matches!(
            client.source().lab_results("PAT-100"),
            Err(DataError::Parse { .. })
        ));

        let report = client.longevity_report("PAT-100", today()).unwrap();
        // Vitals alone: -1 BP, -2 HR, -1 BMI
        assert_eq!(report.biological_age.delta, -4);
        assert_eq!(report.cardiovascular_risk, None);
        assert!(!report.has_optimal_labs);
        assert!(report.has_optimal_vitals);
        // 50 + 6 + 0 + 5 + 0 + 3
        assert_eq!(report.longevity_score, 64);
        assert_eq!(report.band, ScoreBand::Fair);
    }

    #[test]
    fn test_missing_profile_is_an_error() {
        let dir = athlete_directory();
        assert!(matches!(
            client(&dir).longevity_report("PAT-404", today()),
            Err(DataError::NotFound(_))
        ));
    }

    #[test]
    fn test_tab_configuration_flows() {
        let dir = athlete_directory();
        let client = client(&dir);

        // No configuration published yet
        match client.tabs() {
            TabsView::Ready { source, tabs } => {
                assert_eq!(source, TabSource::Registry);
                assert_eq!(tabs.len(), standard_registry().len());
            }
            TabsView::Loading => panic!("file fetch completes synchronously"),
        }

        // Empty list behaves like no list
        put(dir.path(), "tab-configs.json", json!([]));
        assert!(matches!(client.tabs(), TabsView::Ready { source: TabSource::Registry, .. }));

        // Practice customisation wins
        put(dir.path(), "tab-configs.json", serde_json::to_value(practice_tabs()).unwrap());
        let view = client.tabs();
        assert!(matches!(view, TabsView::Ready { source: TabSource::Remote, .. }));
        assert_eq!(view.tabs().len(), 5);
        assert_eq!(view.active(Some("insurance")).unwrap().key, "overview");

        let ctx = PatientContext::new("PAT-100");
        assert!(matches!(
            client.render_tab("policies", &ctx),
            Some(RenderPayload::Html(_))
        ));
        assert!(client.render_tab("insurance", &ctx).is_none());
    }
}
