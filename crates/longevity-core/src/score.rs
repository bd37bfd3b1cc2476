//! Longevity Score
//!
//! Evidence-weighted composite 0-100 score. A base block built from the
//! biological age delta, cardiovascular risk and the optimal-range bonuses
//! is extended by optional assessment domains, each capped at its point
//! budget:
//!
//! | Domain | Budget |
//! |--------|--------|
//! | Lifestyle | 25 |
//! | Body composition | 10 |
//! | Mental health | 10 |
//! | Social connection | 10 |
//! | Advanced biomarkers | 15 |
//! | HRV | 5 |
//!
//! Budgets cap the reward only; penalties inside a domain are not floored.
//! This is a heuristic rubric, not a validated clinical instrument.

use crate::models::{
    AdvancedBiomarkers, AlcoholStatus, BodyComposition, ExerciseFrequency, HrvData,
    LifestyleAssessment, LongevityData, MentalHealthScreening, SmokingStatus, SocialDeterminant,
};
use serde::{Deserialize, Serialize};

/// Starting point before any adjustment
pub const BASE_SCORE: f64 = 50.0;

/// Points removed per year of biological age delta
pub const DELTA_WEIGHT: f64 = 1.5;

pub const LIFESTYLE_BUDGET: f64 = 25.0;
pub const BODY_COMPOSITION_BUDGET: f64 = 10.0;
pub const MENTAL_HEALTH_BUDGET: f64 = 10.0;
pub const SOCIAL_BUDGET: f64 = 10.0;
pub const BIOMARKER_BUDGET: f64 = 15.0;
pub const HRV_BUDGET: f64 = 5.0;

/// Qualitative band for a final score
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    NeedsAttention,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreBand::Excellent,
            65..=79 => ScoreBand::Good,
            50..=64 => ScoreBand::Fair,
            _ => ScoreBand::NeedsAttention,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::NeedsAttention => "Needs attention",
        }
    }
}

/// Per-component contributions behind a longevity score.
///
/// Domain fields are `None` when that domain was not assessed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub biological_age: f64,
    pub cardiovascular: f64,
    pub optimal_vitals: f64,
    pub optimal_labs: f64,
    pub lifestyle: Option<f64>,
    pub body_composition: Option<f64>,
    pub mental_health: Option<f64>,
    pub social: Option<f64>,
    pub biomarkers: Option<f64>,
    pub hrv: Option<f64>,
    /// Unclamped sum including the base
    pub raw_total: f64,
    /// Final clamped, rounded score
    pub score: u8,
}

impl ScoreBreakdown {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

/// Composite longevity score in `[0, 100]`.
pub fn calculate_longevity_score(
    biological_age_delta: i32,
    cv_risk: u8,
    has_optimal_vitals: bool,
    has_optimal_labs: bool,
    data: Option<&LongevityData>,
) -> u8 {
    score_breakdown(
        biological_age_delta,
        cv_risk,
        has_optimal_vitals,
        has_optimal_labs,
        data,
    )
    .score
}

/// Same computation as [`calculate_longevity_score`], keeping every
/// component so the panel can explain the result.
pub fn score_breakdown(
    biological_age_delta: i32,
    cv_risk: u8,
    has_optimal_vitals: bool,
    has_optimal_labs: bool,
    data: Option<&LongevityData>,
) -> ScoreBreakdown {
    let biological_age = -f64::from(biological_age_delta) * DELTA_WEIGHT;
    let cardiovascular = cv_risk_points(cv_risk);
    let optimal_vitals = if has_optimal_vitals { 5.0 } else { 0.0 };
    let optimal_labs = if has_optimal_labs { 5.0 } else { 0.0 };

    let capped = |points: f64, budget: f64| points.min(budget);
    let lifestyle = data
        .and_then(|d| d.lifestyle.as_ref())
        .map(|l| capped(lifestyle_points(l), LIFESTYLE_BUDGET));
    let body_composition = data
        .and_then(|d| d.body_composition.as_ref())
        .map(|b| capped(body_composition_points(b), BODY_COMPOSITION_BUDGET));
    let mental_health = data
        .and_then(|d| d.mental_health.as_ref())
        .map(|m| capped(mental_health_points(m), MENTAL_HEALTH_BUDGET));
    let social = data
        .and_then(|d| d.social_determinants.as_ref())
        .map(|s| capped(social_points(s), SOCIAL_BUDGET));
    let biomarkers = data
        .and_then(|d| d.advanced_biomarkers.as_ref())
        .map(|b| capped(biomarker_points(b), BIOMARKER_BUDGET));
    let hrv = data
        .and_then(|d| d.hrv.as_ref())
        .map(|h| capped(hrv_points(h), HRV_BUDGET));

    let raw_total = BASE_SCORE
        + biological_age
        + cardiovascular
        + optimal_vitals
        + optimal_labs
        + [lifestyle, body_composition, mental_health, social, biomarkers, hrv]
            .iter()
            .flatten()
            .sum::<f64>();

    ScoreBreakdown {
        biological_age,
        cardiovascular,
        optimal_vitals,
        optimal_labs,
        lifestyle,
        body_composition,
        mental_health,
        social,
        biomarkers,
        hrv,
        raw_total,
        score: raw_total.clamp(0.0, 100.0).round() as u8,
    }
}

/// Low-risk bands are checked before high-risk ones; exactly 10% earns nothing.
fn cv_risk_points(cv_risk: u8) -> f64 {
    if cv_risk < 5 {
        10.0
    } else if cv_risk < 10 {
        5.0
    } else if cv_risk > 20 {
        -10.0
    } else if cv_risk > 15 {
        -7.0
    } else if cv_risk > 10 {
        -3.0
    } else {
        0.0
    }
}

fn lifestyle_points(lifestyle: &LifestyleAssessment) -> f64 {
    let mut points = 0.0;

    points += match lifestyle.exercise_frequency {
        Some(ExerciseFrequency::FivePlusPerWeek) => 10.0,
        Some(ExerciseFrequency::ThreeToFourPerWeek) => 7.0,
        Some(ExerciseFrequency::OneToTwoPerWeek) => 3.0,
        Some(ExerciseFrequency::Sedentary) => -5.0,
        Some(ExerciseFrequency::Unknown) | None => 0.0,
    };

    if let Some(hours) = lifestyle.sleep_hours {
        points += if (7.0..=9.0).contains(&hours) {
            5.0
        } else if (6.0..=10.0).contains(&hours) {
            2.0
        } else {
            -3.0
        };
    }

    points += match lifestyle.smoking_status {
        Some(SmokingStatus::Never) => 5.0,
        Some(SmokingStatus::Former) => 2.0,
        Some(SmokingStatus::Current) => {
            let pack_years = lifestyle.pack_years.filter(|p| p.is_finite() && *p > 0.0);
            -(5.0 + pack_years.unwrap_or(0.0) / 2.0).min(15.0)
        }
        Some(SmokingStatus::Unknown) | None => 0.0,
    };

    points += match lifestyle.alcohol_status {
        Some(AlcoholStatus::Abstains) | Some(AlcoholStatus::Occasional) => 3.0,
        Some(AlcoholStatus::Heavy) => -5.0,
        Some(AlcoholStatus::Moderate) | Some(AlcoholStatus::Unknown) | None => 0.0,
    };

    if let Some(vegetables) = lifestyle.vegetable_servings {
        let fruit = lifestyle.fruit_servings.unwrap_or(0);
        if vegetables >= 5 && fruit >= 2 {
            points += 5.0;
        } else if vegetables >= 3 {
            points += 2.0;
        }
    }

    points
}

fn body_composition_points(body: &BodyComposition) -> f64 {
    let mut points = 0.0;

    if let Some(bmi) = body.effective_bmi() {
        if (18.5..=24.9).contains(&bmi) {
            points += 5.0;
        } else if (25.0..=29.9).contains(&bmi) {
            points += 1.0;
        } else if bmi < 18.5 || bmi >= 30.0 {
            points -= 3.0;
        }
    }

    if let Some(visceral) = body.visceral_fat_level.filter(|v| v.is_finite()) {
        points += if visceral <= 9.0 {
            5.0
        } else if visceral <= 14.0 {
            2.0
        } else {
            -3.0
        };
    }

    points
}

fn mental_health_points(mental: &MentalHealthScreening) -> f64 {
    let mut points = 0.0;

    if let Some(phq9) = mental.phq9_score {
        if phq9 <= 4 {
            points += 5.0;
        } else if phq9 <= 9 {
            points += 2.0;
        } else if phq9 >= 15 {
            points -= 5.0;
        }
    }

    if let (Some(purpose), Some(satisfaction)) = (mental.purpose_score, mental.life_satisfaction) {
        if purpose >= 8.0 && satisfaction >= 8.0 {
            points += 5.0;
        } else if purpose >= 6.0 && satisfaction >= 6.0 {
            points += 3.0;
        }
    }

    points
}

fn social_points(social: &SocialDeterminant) -> f64 {
    let mut points = 0.0;

    match social.close_relationships {
        Some(n) if n >= 5 => points += 5.0,
        Some(n) if n >= 2 => points += 3.0,
        _ => {}
    }

    if let Some(purpose) = social.sense_of_purpose {
        if purpose >= 8.0 {
            points += 5.0;
        } else if purpose >= 5.0 {
            points += 2.0;
        }
    }

    points
}

fn biomarker_points(markers: &AdvancedBiomarkers) -> f64 {
    let mut points = 0.0;

    if let Some(vitamin_d) = markers.vitamin_d.filter(|v| v.is_finite()) {
        if (40.0..=60.0).contains(&vitamin_d) {
            points += 3.0;
        } else if vitamin_d >= 30.0 {
            points += 1.0;
        } else if vitamin_d < 20.0 {
            points -= 2.0;
        }
    }

    if let Some(crp) = markers.hs_crp.filter(|v| v.is_finite()) {
        points += if crp < 1.0 {
            3.0
        } else if crp < 3.0 {
            1.0
        } else {
            -2.0
        };
    }

    // A zero HOMA-IR is a missing measurement, not perfect sensitivity
    if let Some(homa) = markers.homa_ir.filter(|v| v.is_finite() && *v > 0.0) {
        points += if homa < 1.5 {
            3.0
        } else if homa < 2.5 {
            1.0
        } else {
            -2.0
        };
    }

    if let Some(delta) = markers.pheno_age_delta.filter(|v| v.is_finite()) {
        if delta < 0.0 {
            points += 6.0;
        } else if delta <= 2.0 {
            points += 3.0;
        } else if delta > 5.0 {
            points -= 3.0;
        }
    }

    points
}

fn hrv_points(hrv: &HrvData) -> f64 {
    match hrv.hrv_score.filter(|v| v.is_finite()) {
        Some(score) if score >= 70.0 => 5.0,
        Some(score) if score >= 50.0 => 3.0,
        Some(score) if score < 30.0 => -2.0,
        _ => 0.0,
    }
}
