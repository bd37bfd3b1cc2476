//! Lab test vocabulary
//!
//! Lab results arrive with free-text test names ("Fasting Glucose",
//! "Hemoglobin A1c (HbA1c)", "hs-CRP"). The analytics only understand a
//! handful of markers, recognised by case-insensitive substring match.

use crate::models::LabResult;
use serde::{Deserialize, Serialize};

/// Lab markers the longevity analytics know how to interpret
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabMarker {
    Glucose,
    HbA1c,
    CReactiveProtein,
    HdlCholesterol,
    LdlCholesterol,
    TotalCholesterol,
}

impl LabMarker {
    /// Every marker, in the order rules are evaluated
    pub const ALL: [LabMarker; 6] = [
        LabMarker::Glucose,
        LabMarker::HbA1c,
        LabMarker::CReactiveProtein,
        LabMarker::HdlCholesterol,
        LabMarker::LdlCholesterol,
        LabMarker::TotalCholesterol,
    ];

    /// Keyword rule for this marker against a free-text test name.
    ///
    /// Each rule stands alone, so one name may match several markers
    /// ("Hemoglobin A1c (est. avg glucose)" is both glucose and HbA1c).
    /// Glucose excludes anything mentioning "hba1c"; total cholesterol
    /// excludes HDL and LDL names.
    pub fn matches(&self, test_name: &str) -> bool {
        let name = test_name.to_lowercase();
        match self {
            LabMarker::Glucose => name.contains("glucose") && !name.contains("hba1c"),
            LabMarker::HbA1c => name.contains("hba1c") || name.contains("a1c"),
            LabMarker::CReactiveProtein => name.contains("crp") || name.contains("c-reactive"),
            LabMarker::HdlCholesterol => name.contains("hdl"),
            LabMarker::LdlCholesterol => name.contains("ldl"),
            LabMarker::TotalCholesterol => {
                name.contains("cholesterol") && !name.contains("hdl") && !name.contains("ldl")
            }
        }
    }

    /// Stricter match for a direct measurement of the marker.
    ///
    /// Derived results ("Non-HDL Cholesterol", "Cholesterol/HDL Ratio")
    /// share keywords with real measurements and are rejected.
    pub fn matches_measurement(&self, test_name: &str) -> bool {
        let name = test_name.to_lowercase();
        self.matches(&name)
            && !name.contains("non-hdl")
            && !name.contains("non hdl")
            && !name.contains("ratio")
    }

    /// Markers whose keyword rule matches `test_name`
    pub fn all_matching(test_name: &str) -> impl Iterator<Item = LabMarker> + '_ {
        Self::ALL.into_iter().filter(move |m| m.matches(test_name))
    }

    /// Markers that feed the biological-age estimate
    pub fn affects_biological_age(&self) -> bool {
        matches!(
            self,
            LabMarker::Glucose
                | LabMarker::HbA1c
                | LabMarker::CReactiveProtein
                | LabMarker::HdlCholesterol
        )
    }
}

/// A lab result paired with a recognised marker and parsed value
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerReading {
    pub marker: LabMarker,
    pub value: f64,
}

/// Recognised, numerically parseable readings in input order.
///
/// A result matching several keyword rules yields one reading per marker.
/// Results with unknown names or unparseable values are dropped here; that
/// is the only place malformed lab text is handled.
pub fn marker_readings(labs: &[LabResult]) -> impl Iterator<Item = MarkerReading> + '_ {
    labs.iter().flat_map(|lab| {
        let value = lab.numeric_value();
        LabMarker::all_matching(&lab.test_name)
            .filter_map(move |marker| value.map(|value| MarkerReading { marker, value }))
    })
}

/// Value of the most recent direct measurement of `marker`.
///
/// Results with a `result_date` win over undated ones; among equals the
/// later entry in the list wins, matching the backend's append order.
pub fn latest_value(labs: &[LabResult], marker: LabMarker) -> Option<f64> {
    labs.iter()
        .enumerate()
        .filter(|(_, lab)| marker.matches_measurement(&lab.test_name))
        .filter_map(|(idx, lab)| lab.numeric_value().map(|v| (lab.result_date, idx, v)))
        .max_by_key(|(date, idx, _)| (*date, *idx))
        .map(|(_, _, v)| v)
}
