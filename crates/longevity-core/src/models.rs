//! Patient data consumed by the longevity analytics.
//!
//! These types mirror the JSON resources served by the practice-management
//! backend (`/patients/{id}/vitals`, `/lab-results`, `/longevity-data`).
//! They are read-only inputs: nothing in this crate mutates them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single vital-signs reading
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalSnapshot {
    #[serde(rename = "systolicBP", alias = "systolicBp", default)]
    pub systolic_bp: Option<u32>,
    #[serde(rename = "diastolicBP", alias = "diastolicBp", default)]
    pub diastolic_bp: Option<u32>,
    #[serde(default)]
    pub heart_rate: Option<u32>,
    #[serde(default)]
    pub temperature_c: Option<f64>,
    #[serde(default)]
    pub respiratory_rate: Option<u32>,
    #[serde(default)]
    pub oxygen_saturation_pct: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    pub recorded_at: DateTime<Utc>,
    #[serde(default)]
    pub recorded_by: String,
}

impl VitalSnapshot {
    /// BMI derived from this snapshot's weight and height, if both are usable
    pub fn bmi(&self) -> Option<f64> {
        crate::bmi(self.weight_kg, self.height_cm)
    }
}

/// Most recent snapshot of a vitals time series (max `recorded_at`).
pub fn latest_vitals(series: &[VitalSnapshot]) -> Option<&VitalSnapshot> {
    series.iter().max_by_key(|v| v.recorded_at)
}

/// Lab result entry
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabResult {
    pub test_name: String,
    /// Value exactly as reported by the lab; `None` while pending
    #[serde(default, deserialize_with = "lab_value_text")]
    pub result: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub reference_range: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub result_date: Option<NaiveDate>,
}

impl LabResult {
    pub fn new(test_name: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            test_name: test_name.into(),
            result: Some(result.into()),
            ..Self::default()
        }
    }

    /// Parsed numeric value of `result`.
    ///
    /// Missing or non-numeric text ("pending", "<0.5", empty) yields `None`; the rules
    /// that depend on this result are then skipped.
    pub fn numeric_value(&self) -> Option<f64> {
        self.result
            .as_deref()?
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }
}

/// Lab systems send the value as text, as a bare number, or as null
/// while the result is pending.
fn lab_value_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawValue {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<RawValue>::deserialize(deserializer)?.map(|raw| match raw {
        RawValue::Text(text) => text,
        RawValue::Number(number) => number.to_string(),
    }))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExerciseFrequency {
    #[serde(rename = "5+/week")]
    FivePlusPerWeek,
    #[serde(rename = "3-4x/week")]
    ThreeToFourPerWeek,
    #[serde(rename = "1-2x/week")]
    OneToTwoPerWeek,
    #[serde(rename = "none")]
    Sedentary,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmokingStatus {
    Never,
    Former,
    Current,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlcoholStatus {
    #[serde(rename = "none")]
    Abstains,
    Occasional,
    Moderate,
    Heavy,
    #[serde(other)]
    Unknown,
}

/// Lifestyle questionnaire
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LifestyleAssessment {
    pub exercise_frequency: Option<ExerciseFrequency>,
    pub exercise_type: Option<String>,
    pub exercise_duration_minutes: Option<u32>,
    pub sleep_hours: Option<f64>,
    pub sleep_quality: Option<String>,
    pub smoking_status: Option<SmokingStatus>,
    pub pack_years: Option<f64>,
    pub alcohol_status: Option<AlcoholStatus>,
    pub vegetable_servings: Option<u32>,
    pub fruit_servings: Option<u32>,
    pub intermittent_fasting: Option<bool>,
}

/// Body composition scan (bioimpedance or DEXA)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BodyComposition {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub bmi: Option<f64>,
    pub body_fat_pct: Option<f64>,
    pub visceral_fat_level: Option<f64>,
    pub muscle_mass_kg: Option<f64>,
    pub waist_cm: Option<f64>,
    pub hip_cm: Option<f64>,
    pub metabolic_age: Option<u32>,
    pub bmr_kcal: Option<f64>,
    pub grip_strength_kg: Option<f64>,
}

impl BodyComposition {
    /// Recorded BMI, or one derived from weight and height
    pub fn effective_bmi(&self) -> Option<f64> {
        self.bmi
            .filter(|b| b.is_finite() && *b > 0.0)
            .or_else(|| crate::bmi(self.weight_kg, self.height_cm))
    }
}

/// Mental health screening summary
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MentalHealthScreening {
    #[serde(alias = "phq9")]
    pub phq9_score: Option<u32>,
    pub phq9_severity: Option<String>,
    #[serde(alias = "gad7")]
    pub gad7_score: Option<u32>,
    pub gad7_severity: Option<String>,
    pub pss_score: Option<u32>,
    pub wellbeing_score: Option<f64>,
    pub life_satisfaction: Option<f64>,
    pub purpose_score: Option<f64>,
    pub resilience_score: Option<f64>,
    pub cognitive_score: Option<f64>,
}

/// Social determinants of health
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialDeterminant {
    pub marital_status: Option<String>,
    pub living_arrangement: Option<String>,
    pub close_relationships: Option<u32>,
    pub loneliness_score: Option<f64>,
    pub sense_of_purpose: Option<f64>,
}

/// Advanced biomarker panel
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvancedBiomarkers {
    /// 25-OH vitamin D, ng/mL
    #[serde(rename = "vitaminD")]
    pub vitamin_d: Option<f64>,
    /// High-sensitivity CRP, mg/L
    #[serde(rename = "hsCRP", alias = "hsCrp")]
    pub hs_crp: Option<f64>,
    #[serde(rename = "homaIR", alias = "homaIr")]
    pub homa_ir: Option<f64>,
    /// PhenoAge minus chronological age, years
    pub pheno_age_delta: Option<f64>,
    pub omega3_index: Option<f64>,
    #[serde(rename = "apoB")]
    pub apo_b: Option<f64>,
    #[serde(rename = "lpA")]
    pub lp_a: Option<f64>,
    pub testosterone: Option<f64>,
    pub cortisol: Option<f64>,
}

/// Wearable heart-rate-variability summary
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HrvData {
    pub hrv_score: Option<f64>,
    pub readiness_score: Option<f64>,
}

/// Bundle returned by `/patients/{id}/longevity-data`.
///
/// Every section is optional. `LongevityData::default()` (all `None`) is
/// the value used when the resource could not be fetched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LongevityData {
    pub lifestyle: Option<LifestyleAssessment>,
    pub body_composition: Option<BodyComposition>,
    pub mental_health: Option<MentalHealthScreening>,
    pub social_determinants: Option<SocialDeterminant>,
    pub advanced_biomarkers: Option<AdvancedBiomarkers>,
    pub hrv: Option<HrvData>,
}

impl LongevityData {
    /// True when no section of the bundle was assessed
    pub fn is_empty(&self) -> bool {
        self.lifestyle.is_none()
            && self.body_composition.is_none()
            && self.mental_health.is_none()
            && self.social_determinants.is_none()
            && self.advanced_biomarkers.is_none()
            && self.hrv.is_none()
    }
}
