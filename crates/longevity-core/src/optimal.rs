//! Optimal-range checks feeding the longevity score bonuses.

use crate::labs::{marker_readings, LabMarker};
use crate::models::{LabResult, VitalSnapshot};

/// Latest vitals sit in the optimal range.
///
/// Requires a recorded systolic pressure in [90, 120). Diastolic (< 80) and
/// resting heart rate ([50, 80]) are checked only when recorded.
pub fn has_optimal_vitals(latest: Option<&VitalSnapshot>) -> bool {
    let Some(vitals) = latest else {
        return false;
    };
    let Some(systolic) = vitals.systolic_bp else {
        return false;
    };

    (90..120).contains(&systolic)
        && vitals.diastolic_bp.map_or(true, |d| d < 80)
        && vitals.heart_rate.map_or(true, |hr| (50..=80).contains(&hr))
}

/// No recognised lab value falls in a band that ages the patient.
///
/// At least one glucose, HbA1c, CRP or HDL reading must be present;
/// an empty or unrecognised lab list is not "optimal".
pub fn has_optimal_labs(labs: &[LabResult]) -> bool {
    let mut seen = false;
    for reading in marker_readings(labs).filter(|r| r.marker.affects_biological_age()) {
        seen = true;
        let within = match reading.marker {
            LabMarker::Glucose => reading.value <= 100.0,
            LabMarker::HbA1c => reading.value <= 5.7,
            LabMarker::CReactiveProtein => reading.value <= 3.0,
            LabMarker::HdlCholesterol => reading.value >= 40.0,
            LabMarker::LdlCholesterol | LabMarker::TotalCholesterol => true,
        };
        if !within {
            return false;
        }
    }
    seen
}
