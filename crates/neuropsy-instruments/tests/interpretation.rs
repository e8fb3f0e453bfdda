use neuropsy_instruments::interpretation::{
    DEFAULT_COLOR, DOMAIN_PLACEHOLDER, color_for, interpret, is_clinically_significant,
    percentile_rank, recommendation_for,
};
use neuropsy_instruments::scoring::ScoreType;

#[test]
fn clinical_significance_thresholds() {
    assert!(is_clinically_significant(65.0, ScoreType::TScore));
    assert!(!is_clinically_significant(64.0, ScoreType::TScore));
    assert!(!is_clinically_significant(80.0, ScoreType::Standard));
    assert!(is_clinically_significant(79.0, ScoreType::Standard));
    assert!(is_clinically_significant(5.0, ScoreType::Scaled));
    assert!(!is_clinically_significant(6.0, ScoreType::Scaled));
}

#[test]
fn domain_is_substituted() {
    let sentence = interpret(130.0, ScoreType::Standard, "compréhension verbale");
    assert_eq!(
        sentence,
        "Score situé dans la zone très supérieure, attestant de capacités exceptionnelles en \
         compréhension verbale, représentant une force majeure du profil cognitif."
    );

    let behavior = interpret(72.0, ScoreType::TScore, "inattention");
    assert!(behavior.starts_with("Score très élevé, cliniquement significatif"));
    assert!(behavior.contains("en inattention,"));
}

#[test]
fn empty_domain_removes_placeholder() {
    for (value, score_type) in [
        (100.0, ScoreType::Standard),
        (10.0, ScoreType::Scaled),
        (50.0, ScoreType::TScore),
    ] {
        let sentence = interpret(value, score_type, "");
        assert!(!sentence.contains(DOMAIN_PLACEHOLDER));
        assert!(!sentence.contains('{'));
    }
    assert_eq!(interpret(30.0, ScoreType::TScore, ""), "Score bas en .");
}

#[test]
fn label_without_template_uses_generic_sentence() {
    // The scaled borderline band is worded "Limite", which has no template.
    assert_eq!(interpret(5.0, ScoreType::Scaled, "code"), "Score de 5 (Limite).");
    assert_eq!(
        interpret(f64::NAN, ScoreType::Standard, "x"),
        "Score de NaN (Non classifié)."
    );
}

#[test]
fn colors_and_recommendations() {
    assert_eq!(color_for("Très Supérieur", ScoreType::Standard), "#2E7D32");
    assert_eq!(color_for("Très Élevé", ScoreType::TScore), "#C62828");
    assert_eq!(color_for("Moyen", ScoreType::TScore), "#66BB6A");
    assert_eq!(color_for("Moyen", ScoreType::Scaled), "#FFA726");
    assert_eq!(color_for("Limite", ScoreType::Scaled), DEFAULT_COLOR);
    assert_eq!(color_for("Très Élevé", ScoreType::Standard), DEFAULT_COLOR);

    assert_eq!(
        recommendation_for("Limite (Zone Frontière)"),
        "Mettre en place des aménagements et un suivi spécialisé"
    );
    assert_eq!(recommendation_for("Très Élevé"), "");
    assert_eq!(recommendation_for("Limite"), "");
}

#[test]
fn percentile_rank_follows_normal_curve() {
    assert_eq!(percentile_rank(100.0, ScoreType::Standard), 50.0);
    assert_eq!(percentile_rank(115.0, ScoreType::Standard), 84.1);
    assert_eq!(percentile_rank(85.0, ScoreType::Standard), 15.9);
    assert_eq!(percentile_rank(130.0, ScoreType::Standard), 97.7);
    assert_eq!(percentile_rank(13.0, ScoreType::Scaled), 84.1);
    assert_eq!(percentile_rank(70.0, ScoreType::TScore), 97.7);
    assert_eq!(percentile_rank(50.0, ScoreType::TScore), 50.0);
}
