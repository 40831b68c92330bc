use coherence_core::{
    Alphabet, Choice, ClassificationPreset, CoefficientMode, CoherenceEngine, CoherenceLevel,
    EngineConfig,
};

fn three_symbol_engine() -> CoherenceEngine {
    CoherenceEngine::new(EngineConfig {
        alphabet: Alphabet::three_symbol(),
        ..EngineConfig::default()
    })
}

#[test]
fn test_report_serializes_to_flat_key_value_shape() {
    let choices = [Choice::A, Choice::A, Choice::A, Choice::B, Choice::B];
    let report = CoherenceEngine::default().generate_report(&choices).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["kappa"], 0.4083);
    assert_eq!(json["r"], 0.2);
    assert_eq!(json["total_count"], 5);
    assert_eq!(json["directional_count"], 5);
    assert_eq!(json["level"], "LOW");
    assert_eq!(json["color"], "#ef4444");
    assert_eq!(json["statistics"]["a_count"], 3);
    assert_eq!(json["statistics"]["b_count"], 2);
    assert_eq!(json["statistics"]["timeout_count"], 0);
    assert_eq!(json["statistics"]["total"], 5);
    assert_eq!(json["statistics"]["a_percentage"], "60.0%");
    assert_eq!(json["statistics"]["b_percentage"], "40.0%");
    assert_eq!(json["timeout_overload"], false);
    assert!(json["description"].is_string());
    assert!(json["emoji"].is_string());
    assert!(json["timestamp"].is_string());
}

#[test]
fn test_timeout_overload_flag_boundary() {
    let engine = three_symbol_engine();

    let mut choices = vec![Choice::A; 4];
    choices.extend(vec![Choice::Timeout; 5]);
    let report = engine.generate_report(&choices).unwrap();
    assert!(!report.timeout_overload);

    choices.push(Choice::Timeout);
    let report = engine.generate_report(&choices).unwrap();
    assert!(report.timeout_overload);
    assert_eq!(report.statistics.timeout_count, 6);
}

#[test]
fn test_bar_percent_scaling() {
    // 7 A / 1 B gives R = 0.75 exactly; simple mode keeps kappa = R
    let engine = CoherenceEngine::new(EngineConfig {
        coefficient_mode: CoefficientMode::Simple,
        classification_preset: ClassificationPreset::FourLevelR,
        ..EngineConfig::default()
    });
    let mut choices = vec![Choice::A; 7];
    choices.push(Choice::B);

    let report = engine.generate_report(&choices).unwrap();
    assert_eq!(report.kappa, 0.75);
    assert_eq!(report.bar_percent(), 50.0);
    assert_eq!(report.level, CoherenceLevel::Coherent);

    // Saturated kappa caps the bar at 100
    let report = CoherenceEngine::default()
        .generate_report(&[Choice::A; 5])
        .unwrap();
    assert_eq!(report.kappa, 10.0);
    assert_eq!(report.bar_percent(), 100.0);
}

#[test]
fn test_rounding_digits_affect_precision_not_classification() {
    let choices = [Choice::A, Choice::A, Choice::A, Choice::B, Choice::B];

    let four = CoherenceEngine::default().generate_report(&choices).unwrap();
    let three = CoherenceEngine::new(EngineConfig {
        round_digits: 3,
        ..EngineConfig::default()
    })
    .generate_report(&choices)
    .unwrap();

    assert_eq!(four.kappa, 0.4083);
    assert_eq!(three.kappa, 0.408);
    assert_eq!(four.level, three.level);
}

#[test]
fn test_engine_config_round_trips_through_serde() {
    let config = EngineConfig {
        coefficient_mode: CoefficientMode::SigmaCorrected,
        classification_preset: ClassificationPreset::FourLevelR,
        alphabet: Alphabet::three_symbol().with_labels("Azul", "Vermelho"),
        ..EngineConfig::default()
    };

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("sigma-corrected"));
    assert!(json.contains("four-level-r"));

    let restored: EngineConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, config);
}

#[test]
fn test_report_round_trips_through_serde() {
    let report = three_symbol_engine()
        .generate_report(&[Choice::A, Choice::B, Choice::Timeout])
        .unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let restored: coherence_core::CoherenceReport = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, report);
}
