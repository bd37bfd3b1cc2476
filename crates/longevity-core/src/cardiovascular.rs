//! Cardiovascular Risk Estimation
//!
//! Simplified Framingham-style additive points model producing an
//! estimated 10-year cardiovascular event risk in percent.

use crate::labs::{latest_value, LabMarker};
use crate::models::{LabResult, VitalSnapshot};
use serde::{Deserialize, Serialize};

/// Lowest reported risk, percent
pub const MIN_CV_RISK: u8 = 1;

/// Highest reported risk, percent
pub const MAX_CV_RISK: u8 = 30;

/// HDL used for the cholesterol ratio when the recorded value is zero
const FALLBACK_HDL: f64 = 50.0;

/// Inputs for the cardiovascular risk estimate.
///
/// Every field is required. Callers without real cholesterol or history
/// values should not compute a risk at all; see [`CardiovascularRiskInput::from_sources`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardiovascularRiskInput {
    pub age: u32,
    pub gender: String,
    pub systolic_bp: u32,
    pub total_cholesterol: f64,
    pub hdl_cholesterol: f64,
    pub is_smoker: bool,
    pub has_diabetes: bool,
    pub on_bp_meds: bool,
}

/// Patient-reported or charted history used by the risk model.
///
/// `None` means the item was never recorded, which is different from a
/// recorded "no".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RiskHistory {
    pub is_smoker: Option<bool>,
    pub has_diabetes: Option<bool>,
    pub on_bp_meds: Option<bool>,
}

impl CardiovascularRiskInput {
    /// Assemble the input from fetched data.
    ///
    /// Systolic BP comes from the latest vitals, total cholesterol and HDL
    /// from the most recent direct measurements (non-HDL cholesterol and
    /// cholesterol ratios are never used). Returns `None` when any required
    /// value is unavailable.
    pub fn from_sources(
        age: u32,
        gender: &str,
        latest: Option<&VitalSnapshot>,
        labs: &[LabResult],
        history: &RiskHistory,
    ) -> Option<Self> {
        Some(Self {
            age,
            gender: gender.to_string(),
            systolic_bp: latest?.systolic_bp?,
            total_cholesterol: latest_value(labs, LabMarker::TotalCholesterol)?,
            hdl_cholesterol: latest_value(labs, LabMarker::HdlCholesterol)?,
            is_smoker: history.is_smoker?,
            has_diabetes: history.has_diabetes?,
            on_bp_meds: history.on_bp_meds?,
        })
    }
}

/// Estimated 10-year cardiovascular risk, percent, in `[1, 30]`.
pub fn calculate_cardiovascular_risk(input: &CardiovascularRiskInput) -> u8 {
    let mut points: i32 = match input.age {
        0..=39 => 0,
        40..=49 => 5,
        50..=59 => 10,
        60..=69 => 15,
        _ => 20,
    };

    points += if input.systolic_bp >= 160 {
        4
    } else if input.systolic_bp >= 140 {
        2
    } else if input.systolic_bp >= 130 {
        1
    } else {
        0
    };

    let hdl = if input.hdl_cholesterol.is_finite() && input.hdl_cholesterol != 0.0 {
        input.hdl_cholesterol
    } else {
        FALLBACK_HDL
    };
    let ratio = input.total_cholesterol / hdl;
    points += if ratio > 6.0 {
        4
    } else if ratio > 5.0 {
        2
    } else if ratio > 4.0 {
        1
    } else {
        0
    };

    if input.is_smoker {
        points += 3;
    }
    if input.has_diabetes {
        points += 3;
    }
    if input.on_bp_meds {
        points += 1;
    }
    if input.gender.trim().eq_ignore_ascii_case("male") {
        points += 2;
    }

    points.clamp(i32::from(MIN_CV_RISK), i32::from(MAX_CV_RISK)) as u8
}
