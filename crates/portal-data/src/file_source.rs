//! Directory-backed data source
//!
//! Serves the portal resources from JSON files laid out like the REST paths:
//!
//! ```text
//! <root>/patients/<id>.json
//! <root>/patients/<id>/vitals.json
//! <root>/patients/<id>/lab-results.json
//! <root>/patients/<id>/longevity-data.json
//! <root>/tab-configs.json
//! ```

use crate::error::DataError;
use crate::retry::RetryPolicy;
use crate::source::{PatientDataSource, Resource};
use longevity_core::{LabResult, LongevityData, PatientProfile, VitalSnapshot};
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tab_resolver::TabConfig;

#[derive(Debug, Clone)]
pub struct FileDataSource {
    root: PathBuf,
    retry: RetryPolicy,
}

impl FileDataSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `resource`
    pub fn path_for(&self, resource: &Resource) -> PathBuf {
        let relative = resource.path();
        self.root
            .join(format!("{}.json", relative.trim_start_matches('/')))
    }

    fn load<T: DeserializeOwned>(&self, resource: Resource) -> Result<T, DataError> {
        let name = resource.path();
        if resource.patient_id().is_some_and(|id| !is_plain_id(id)) {
            return Err(DataError::NotFound(name));
        }
        let path = self.path_for(&resource);
        self.retry.run(&name, || {
            let text = fs::read_to_string(&path).map_err(|source| {
                if source.kind() == io::ErrorKind::NotFound {
                    DataError::NotFound(name.clone())
                } else {
                    DataError::Io {
                        path: path.clone(),
                        source,
                    }
                }
            })?;
            serde_json::from_str(&text).map_err(|source| DataError::Parse {
                resource: name.clone(),
                source,
            })
        })
    }
}

/// Patient ids map onto file names; anything that could leave the data
/// directory is rejected.
fn is_plain_id(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && !id.contains(['/', '\\', '\0'])
}

impl PatientDataSource for FileDataSource {
    fn patient(&self, patient_id: &str) -> Result<PatientProfile, DataError> {
        self.load(Resource::Patient(patient_id.to_string()))
    }

    fn vitals(&self, patient_id: &str) -> Result<Vec<VitalSnapshot>, DataError> {
        self.load(Resource::Vitals(patient_id.to_string()))
    }

    fn lab_results(&self, patient_id: &str) -> Result<Vec<LabResult>, DataError> {
        self.load(Resource::LabResults(patient_id.to_string()))
    }

    fn longevity_data(&self, patient_id: &str) -> Result<LongevityData, DataError> {
        self.load(Resource::LongevityData(patient_id.to_string()))
    }

    fn tab_configs(&self) -> Result<Vec<TabConfig>, DataError> {
        self.load(Resource::TabConfigs)
    }
}
