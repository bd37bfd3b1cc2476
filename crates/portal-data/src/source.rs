//! Backend resources consumed by the portal.

use crate::error::DataError;
use longevity_core::{LabResult, LongevityData, PatientProfile, VitalSnapshot};
use tab_resolver::TabConfig;

/// A backend resource, addressed the way the REST API addresses it
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resource {
    Patient(String),
    Vitals(String),
    LabResults(String),
    LongevityData(String),
    TabConfigs,
}

impl Resource {
    /// REST path of the resource
    pub fn path(&self) -> String {
        match self {
            Resource::Patient(id) => format!("/patients/{}", id),
            Resource::Vitals(id) => format!("/patients/{}/vitals", id),
            Resource::LabResults(id) => format!("/patients/{}/lab-results", id),
            Resource::LongevityData(id) => format!("/patients/{}/longevity-data", id),
            Resource::TabConfigs => "/tab-configs".to_string(),
        }
    }

    pub fn patient_id(&self) -> Option<&str> {
        match self {
            Resource::Patient(id)
            | Resource::Vitals(id)
            | Resource::LabResults(id)
            | Resource::LongevityData(id) => Some(id),
            Resource::TabConfigs => None,
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

/// Access to the practice-management backend.
///
/// Implementations report failures; deciding what a failure means for the
/// dashboard is [`crate::PortalClient`]'s job.
pub trait PatientDataSource {
    fn patient(&self, patient_id: &str) -> Result<PatientProfile, DataError>;

    fn vitals(&self, patient_id: &str) -> Result<Vec<VitalSnapshot>, DataError>;

    fn lab_results(&self, patient_id: &str) -> Result<Vec<LabResult>, DataError>;

    fn longevity_data(&self, patient_id: &str) -> Result<LongevityData, DataError>;

    fn tab_configs(&self) -> Result<Vec<TabConfig>, DataError>;
}
