//! Longevity panel report
//!
//! Composes the estimators over the raw resources fetched for one patient.
//! Each input may be empty or absent (a fetch still pending or failed);
//! the report is then built from whatever is available.

use crate::biological_age::{estimate_biological_age, BiologicalAgeEstimate};
use crate::cardiovascular::{calculate_cardiovascular_risk, CardiovascularRiskInput, RiskHistory};
use crate::models::{latest_vitals, LabResult, LongevityData, VitalSnapshot};
use crate::optimal::{has_optimal_labs, has_optimal_vitals};
use crate::score::{score_breakdown, ScoreBand, ScoreBreakdown};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// CV risk used for scoring when the risk cannot be computed; earns 0 points
pub const NEUTRAL_CV_RISK: u8 = 10;

/// Demographics needed by the longevity panel
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfile {
    pub id: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    #[serde(default)]
    pub risk_history: RiskHistory,
}

/// Age in completed years on `on`; zero for dates before birth.
pub fn chronological_age(date_of_birth: NaiveDate, on: NaiveDate) -> u32 {
    let mut years = on.year() - date_of_birth.year();
    if (on.month(), on.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongevityReport {
    pub patient_id: String,
    pub chronological_age: u32,
    pub biological_age: BiologicalAgeEstimate,
    /// `None` when systolic BP, cholesterol or risk history is missing
    pub cardiovascular_risk: Option<u8>,
    pub has_optimal_vitals: bool,
    pub has_optimal_labs: bool,
    pub longevity_score: u8,
    pub band: ScoreBand,
    pub breakdown: ScoreBreakdown,
    pub vitals_recorded_at: Option<DateTime<Utc>>,
}

impl LongevityReport {
    pub fn compute(
        profile: &PatientProfile,
        vitals: &[VitalSnapshot],
        labs: &[LabResult],
        data: Option<&LongevityData>,
        today: NaiveDate,
    ) -> Self {
        let age = chronological_age(profile.date_of_birth, today);
        let latest = latest_vitals(vitals);

        let biological_age = estimate_biological_age(age, latest, labs);
        let cardiovascular_risk = CardiovascularRiskInput::from_sources(
            age,
            &profile.gender,
            latest,
            labs,
            &profile.risk_history,
        )
        .map(|input| calculate_cardiovascular_risk(&input));

        let optimal_vitals = has_optimal_vitals(latest);
        let optimal_labs = has_optimal_labs(labs);
        let breakdown = score_breakdown(
            biological_age.delta,
            cardiovascular_risk.unwrap_or(NEUTRAL_CV_RISK),
            optimal_vitals,
            optimal_labs,
            data,
        );

        Self {
            patient_id: profile.id.clone(),
            chronological_age: age,
            biological_age,
            cardiovascular_risk,
            has_optimal_vitals: optimal_vitals,
            has_optimal_labs: optimal_labs,
            longevity_score: breakdown.score,
            band: breakdown.band(),
            breakdown,
            vitals_recorded_at: latest.map(|v| v.recorded_at),
        }
    }
}
