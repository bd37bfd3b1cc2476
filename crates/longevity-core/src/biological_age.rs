//! Biological Age Estimation
//!
//! Additive year-offset model: each risk or protective factor found in the
//! latest vitals or the lab history shifts the estimate by a fixed number
//! of years. Factors are reported in the order the rules are evaluated.
//!
//! # Rules
//!
//! | Input | Condition | Years |
//! |-------|-----------|-------|
//! | Systolic BP | > 140 / < 120 | +3 / -1 |
//! | Heart rate | < 60 / > 80 | -2 / +2 |
//! | BMI | >= 30 / [25, 30) / [18.5, 23) | +4 / +2 / -1 |
//! | Glucose | > 126 / > 100 | +3 / +1 |
//! | HbA1c | > 6.5 / > 5.7 | +4 / +2 |
//! | CRP | > 3 / < 1 | +2 / -1 |
//! | HDL | > 60 / < 40 | -2 / +2 |

use crate::labs::{marker_readings, LabMarker, MarkerReading};
use crate::models::{LabResult, VitalSnapshot};
use serde::{Deserialize, Serialize};

/// Biological age is never reported below this
pub const MIN_BIOLOGICAL_AGE: u32 = 18;

/// Sole factor reported when no rule fired
pub const INSUFFICIENT_DATA_FACTOR: &str = "Insufficient data for detailed analysis";

/// Result of a biological age estimate
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiologicalAgeEstimate {
    /// Estimated physiological age, at least `MIN_BIOLOGICAL_AGE`
    pub biological_age: u32,
    /// Sum of all modifiers; not affected by the lower clamp
    pub delta: i32,
    /// Human-readable explanation, one entry per modifier applied
    pub factors: Vec<String>,
}

impl BiologicalAgeEstimate {
    /// True when biological age is below chronological age
    pub fn is_younger(&self) -> bool {
        self.delta < 0
    }
}

#[derive(Default)]
struct Modifiers {
    total: i32,
    factors: Vec<String>,
}

impl Modifiers {
    fn apply(&mut self, years: i32, factor: &str) {
        self.total += years;
        self.factors.push(factor.to_string());
    }
}

/// Estimate biological age from chronological age, the latest vitals and
/// the lab history.
///
/// Missing vitals, missing height/weight, unknown lab names and
/// unparseable lab values simply skip the rules that need them.
pub fn estimate_biological_age(
    chronological_age: u32,
    latest: Option<&VitalSnapshot>,
    labs: &[LabResult],
) -> BiologicalAgeEstimate {
    let mut modifiers = Modifiers::default();

    if let Some(vitals) = latest {
        apply_vitals(&mut modifiers, vitals);
    }
    for reading in marker_readings(labs) {
        apply_lab(&mut modifiers, reading);
    }

    let delta = modifiers.total;
    let biological_age = (i64::from(chronological_age) + i64::from(delta))
        .max(i64::from(MIN_BIOLOGICAL_AGE));
    let factors = if modifiers.factors.is_empty() {
        vec![INSUFFICIENT_DATA_FACTOR.to_string()]
    } else {
        modifiers.factors
    };

    BiologicalAgeEstimate {
        biological_age: u32::try_from(biological_age).unwrap_or(u32::MAX),
        delta,
        factors,
    }
}

fn apply_vitals(modifiers: &mut Modifiers, vitals: &VitalSnapshot) {
    if let Some(systolic) = vitals.systolic_bp {
        if systolic > 140 {
            modifiers.apply(3, "Elevated blood pressure");
        } else if systolic < 120 {
            modifiers.apply(-1, "Optimal blood pressure");
        }
    }

    if let Some(hr) = vitals.heart_rate {
        if hr < 60 {
            modifiers.apply(-2, "Athletic heart rate");
        } else if hr > 80 {
            modifiers.apply(2, "Elevated resting heart rate");
        }
    }

    if let Some(bmi) = vitals.bmi() {
        if bmi >= 30.0 {
            modifiers.apply(4, "Obesity");
        } else if bmi >= 25.0 {
            modifiers.apply(2, "Overweight");
        } else if (18.5..23.0).contains(&bmi) {
            modifiers.apply(-1, "Optimal BMI");
        }
    }
}

fn apply_lab(modifiers: &mut Modifiers, reading: MarkerReading) {
    let value = reading.value;
    match reading.marker {
        LabMarker::Glucose => {
            if value > 126.0 {
                modifiers.apply(3, "High fasting glucose");
            } else if value > 100.0 {
                modifiers.apply(1, "Elevated fasting glucose");
            }
        }
        LabMarker::HbA1c => {
            if value > 6.5 {
                modifiers.apply(4, "Diabetic-range HbA1c");
            } else if value > 5.7 {
                modifiers.apply(2, "Prediabetic HbA1c");
            }
        }
        LabMarker::CReactiveProtein => {
            if value > 3.0 {
                modifiers.apply(2, "Elevated inflammation (CRP)");
            } else if value < 1.0 {
                modifiers.apply(-1, "Low inflammation (CRP)");
            }
        }
        LabMarker::HdlCholesterol => {
            if value > 60.0 {
                modifiers.apply(-2, "Protective HDL cholesterol");
            } else if value < 40.0 {
                modifiers.apply(2, "Low HDL cholesterol");
            }
        }
        LabMarker::LdlCholesterol | LabMarker::TotalCholesterol => {}
    }
}
