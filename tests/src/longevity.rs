//! Longevity Analytics Tests
//!
//! Worked clinical examples and the bounds every estimator must respect.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use longevity_core::*;
    use proptest::prelude::*;

    #[test]
    fn test_hypertensive_diabetic_worked_example() {
        let vitals = VitalSnapshot {
            systolic_bp: Some(150),
            heart_rate: Some(55),
            recorded_at: at(2024, 5, 1, 8),
            ..VitalSnapshot::default()
        };
        let labs = vec![LabResult::new("HbA1c", "7.0")];

        let estimate = estimate_biological_age(50, Some(&vitals), &labs);
        assert_eq!(estimate.biological_age, 55);
        assert_eq!(estimate.delta, 7);
        assert_eq!(
            estimate.factors,
            vec![
                "Elevated blood pressure".to_string(),
                "Athletic heart rate".to_string(),
                "Diabetic-range HbA1c".to_string(),
            ]
        );
    }

    #[test]
    fn test_older_male_smoker_cv_risk() {
        let input = CardiovascularRiskInput {
            age: 65,
            gender: "male".to_string(),
            systolic_bp: 145,
            total_cholesterol: 220.0,
            hdl_cholesterol: 35.0,
            is_smoker: true,
            has_diabetes: false,
            on_bp_meds: false,
        };
        assert_eq!(calculate_cardiovascular_risk(&input), 26);
    }

    #[test]
    fn test_athlete_uses_latest_vitals() {
        let vitals = athlete_vitals();
        let latest = latest_vitals(&vitals).unwrap();
        assert_eq!(latest.systolic_bp, Some(112));

        let estimate = estimate_biological_age(40, Some(latest), &athlete_labs());
        assert_eq!(estimate.delta, -7);
        assert_eq!(estimate.biological_age, 33);
        assert!(estimate.is_younger());
        assert_eq!(estimate.factors.len(), 5);
        assert!(estimate.factors.contains(&"Low inflammation (CRP)".to_string()));
        assert!(estimate.factors.contains(&"Protective HDL cholesterol".to_string()));
    }

    #[test]
    fn test_athlete_cv_risk_from_real_sources() {
        let profile = athlete_profile();
        let vitals = athlete_vitals();
        let input = CardiovascularRiskInput::from_sources(
            40,
            &profile.gender,
            latest_vitals(&vitals),
            &athlete_labs(),
            &profile.risk_history,
        )
        .unwrap();

        assert_eq!(input.systolic_bp, 112);
        assert_eq!(input.total_cholesterol, 180.0);
        assert_eq!(input.hdl_cholesterol, 68.0);
        assert_eq!(calculate_cardiovascular_risk(&input), 5);
    }

    #[test]
    fn test_unknown_smoking_history_blocks_cv_risk() {
        let mut profile = athlete_profile();
        profile.risk_history.is_smoker = None;
        let report =
            LongevityReport::compute(&profile, &athlete_vitals(), &athlete_labs(), None, today());
        assert_eq!(report.cardiovascular_risk, None);
        assert_eq!(report.breakdown.cardiovascular, 0.0);
    }

    #[test]
    fn test_athlete_report() {
        let data = LongevityData {
            hrv: Some(HrvData {
                hrv_score: Some(55.0),
                readiness_score: Some(80.0),
            }),
            ..LongevityData::default()
        };
        let report = LongevityReport::compute(
            &athlete_profile(),
            &athlete_vitals(),
            &athlete_labs(),
            Some(&data),
            today(),
        );

        assert_eq!(report.chronological_age, 40);
        assert_eq!(report.biological_age.biological_age, 33);
        assert_eq!(report.cardiovascular_risk, Some(5));
        assert!(report.has_optimal_vitals);
        assert!(report.has_optimal_labs);
        // 50 + 10.5 + 5 + 5 + 5 + 3 = 78.5
        assert_eq!(report.breakdown.raw_total, 78.5);
        assert_eq!(report.longevity_score, 79);
        assert_eq!(report.band, ScoreBand::Good);
        assert_eq!(report.breakdown.lifestyle, None);
        assert_eq!(report.breakdown.hrv, Some(3.0));
        assert_eq!(report.vitals_recorded_at, Some(at(2024, 5, 20, 9)));
    }

    #[test]
    fn test_unknown_categories_score_nothing() {
        let data: LongevityData = serde_json::from_str(
            r#"{
                "lifestyle": {
                    "exerciseFrequency": "whenever",
                    "smokingStatus": "vape",
                    "alcoholStatus": "socially"
                }
            }"#,
        )
        .unwrap();
        let lifestyle = data.lifestyle.as_ref().unwrap();
        assert_eq!(lifestyle.exercise_frequency, Some(ExerciseFrequency::Unknown));
        assert_eq!(lifestyle.smoking_status, Some(SmokingStatus::Unknown));

        let breakdown = score_breakdown(0, 10, false, false, Some(&data));
        assert_eq!(breakdown.lifestyle, Some(0.0));
        assert_eq!(breakdown.score, 50);
    }

    #[test]
    fn test_failed_longevity_fetch_scores_like_no_data() {
        let fallback = LongevityData::default();
        assert!(fallback.is_empty());
        assert_eq!(
            calculate_longevity_score(2, 12, true, false, Some(&fallback)),
            calculate_longevity_score(2, 12, true, false, None)
        );
    }

    #[test]
    fn test_worst_case_patient_floors_at_zero() {
        let data: LongevityData = serde_json::from_str(
            r#"{
                "lifestyle": {
                    "exerciseFrequency": "none",
                    "sleepHours": 4,
                    "smokingStatus": "current",
                    "packYears": 40,
                    "alcoholStatus": "heavy"
                },
                "bodyComposition": {"bmi": 36, "visceralFatLevel": 20},
                "mentalHealth": {"phq9Score": 22},
                "advancedBiomarkers": {"vitaminD": 12, "hsCRP": 6, "homaIR": 4.1, "phenoAgeDelta": 9},
                "hrv": {"hrvScore": 18}
            }"#,
        )
        .unwrap();
        let breakdown = score_breakdown(20, 30, false, false, Some(&data));
        assert!(breakdown.raw_total < 0.0);
        assert_eq!(breakdown.score, 0);
        assert_eq!(breakdown.band(), ScoreBand::NeedsAttention);
    }

    fn arb_vitals() -> impl Strategy<Value = VitalSnapshot> {
        (
            proptest::option::of(60u32..220),
            proptest::option::of(30u32..180),
            proptest::option::of(30.0f64..200.0),
            proptest::option::of(120.0f64..210.0),
        )
            .prop_map(|(systolic, heart_rate, weight, height)| VitalSnapshot {
                systolic_bp: systolic,
                heart_rate,
                weight_kg: weight,
                height_cm: height,
                recorded_at: at(2024, 1, 1, 0),
                ..VitalSnapshot::default()
            })
    }

    fn arb_labs() -> impl Strategy<Value = Vec<LabResult>> {
        let names = prop_oneof![
            Just("Glucose"),
            Just("HbA1c"),
            Just("hs-CRP"),
            Just("HDL"),
            Just("Vitamin B12"),
        ];
        proptest::collection::vec(
            (names, 0.0f64..400.0).prop_map(|(n, v)| LabResult::new(n, format!("{:.1}", v))),
            0..6,
        )
    }

    proptest! {
        #[test]
        fn prop_no_data_means_no_adjustment(age in 18u32..=120) {
            let estimate = estimate_biological_age(age, None, &[]);
            prop_assert_eq!(estimate.biological_age, age);
            prop_assert_eq!(estimate.delta, 0);
            prop_assert_eq!(
                estimate.factors,
                vec![INSUFFICIENT_DATA_FACTOR.to_string()]
            );
        }

        #[test]
        fn prop_biological_age_floor(age in 0u32..=120, vitals in arb_vitals(), labs in arb_labs()) {
            let estimate = estimate_biological_age(age, Some(&vitals), &labs);
            prop_assert!(estimate.biological_age >= 18);
            prop_assert_eq!(estimate, estimate_biological_age(age, Some(&vitals), &labs));
        }

        #[test]
        fn prop_cv_risk_bounds(
            age in 0u32..=130,
            male in any::<bool>(),
            systolic in 0u32..300,
            total in 0.0f64..500.0,
            hdl in 0.0f64..150.0,
            smoker in any::<bool>(),
            diabetes in any::<bool>(),
            meds in any::<bool>(),
        ) {
            let input = CardiovascularRiskInput {
                age,
                gender: if male { "male" } else { "female" }.to_string(),
                systolic_bp: systolic,
                total_cholesterol: total,
                hdl_cholesterol: hdl,
                is_smoker: smoker,
                has_diabetes: diabetes,
                on_bp_meds: meds,
            };
            let risk = calculate_cardiovascular_risk(&input);
            prop_assert!((1..=30).contains(&risk));
            prop_assert_eq!(risk, calculate_cardiovascular_risk(&input));
        }

        #[test]
        fn prop_score_bounds(
            delta in -200i32..200,
            cv in 0u8..=u8::MAX,
            vitals_ok in any::<bool>(),
            labs_ok in any::<bool>(),
            hrv in proptest::option::of(0.0f64..150.0),
        ) {
            let data = LongevityData {
                hrv: hrv.map(|score| HrvData { hrv_score: Some(score), readiness_score: None }),
                ..LongevityData::default()
            };
            let score = calculate_longevity_score(delta, cv, vitals_ok, labs_ok, Some(&data));
            prop_assert!(score <= 100);
            prop_assert_eq!(score, calculate_longevity_score(delta, cv, vitals_ok, labs_ok, Some(&data)));
        }
    }
}
