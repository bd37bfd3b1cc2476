//! Longevity Core - Patient Longevity Analytics
//!
//! Pure functions that turn a patient's vitals, lab results and optional
//! longevity assessments into display-ready metrics for the longevity panel.
//!
//! # Features
//!
//! - Biological age estimate with contributing factors
//! - Simplified Framingham-style 10-year cardiovascular risk
//! - Composite 0-100 longevity score with per-domain breakdown
//! - Report composition from raw fetched resources
//!
//! Nothing in this crate holds state or performs I/O. Every function can be
//! re-run on each render with the same inputs and will produce the same
//! output. Absent inputs are the normal "not assessed" state, never an error.
//!
//! # Example
//!
//! ```rust
//! use longevity_core::{estimate_biological_age, LabResult, VitalSnapshot};
//!
//! let vitals = VitalSnapshot {
//!     systolic_bp: Some(150),
//!     heart_rate: Some(55),
//!     ..VitalSnapshot::default()
//! };
//! let labs = vec![LabResult::new("HbA1c", "7.0")];
//!
//! let estimate = estimate_biological_age(50, Some(&vitals), &labs);
//! assert_eq!(estimate.biological_age, 55);
//! assert_eq!(estimate.delta, 7);
//! ```

pub mod biological_age;
pub mod cardiovascular;
pub mod labs;
pub mod models;
pub mod optimal;
pub mod report;
pub mod score;

// Re-export commonly used types for convenience
pub use biological_age::{estimate_biological_age, BiologicalAgeEstimate, INSUFFICIENT_DATA_FACTOR};
pub use cardiovascular::{calculate_cardiovascular_risk, CardiovascularRiskInput, RiskHistory};
pub use labs::LabMarker;
pub use models::{
    latest_vitals, AdvancedBiomarkers, AlcoholStatus, BodyComposition, ExerciseFrequency,
    HrvData, LabResult, LifestyleAssessment, LongevityData, MentalHealthScreening,
    SmokingStatus, SocialDeterminant, VitalSnapshot,
};
pub use optimal::{has_optimal_labs, has_optimal_vitals};
pub use report::{chronological_age, LongevityReport, PatientProfile};
pub use score::{calculate_longevity_score, score_breakdown, ScoreBand, ScoreBreakdown};

/// Body mass index from weight in kilograms and height in centimetres.
///
/// Returns `None` when either measurement is missing, zero or negative, so
/// callers can skip BMI-based rules without special-casing bad data.
pub fn bmi(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
    let weight = weight_kg.filter(|w| w.is_finite() && *w > 0.0)?;
    let height_m = height_cm.filter(|h| h.is_finite() && *h > 0.0)? / 100.0;
    Some(weight / (height_m * height_m))
}
