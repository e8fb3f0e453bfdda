use pretty_assertions::assert_eq;

use neuropsy_instruments::battery::{Batteries, BatteryKind};
use neuropsy_instruments::scoring::ScoreEntry;
use neuropsy_report::informants::InformantComparison;
use neuropsy_report::profile::{self, STRENGTH_LIMIT};

fn record(batteries: &mut Batteries, kind: BatteryKind, name: &str, value: f64) {
    batteries
        .record(kind, &ScoreEntry::present(name, value))
        .unwrap();
}

#[test]
fn strengths_follow_battery_order_and_are_capped() {
    let mut batteries = Batteries::default();
    record(&mut batteries, BatteryKind::KabcIi, "ISQ", 125.0);
    for idx in ["ICV", "IVS", "IRF", "IMT", "IVT"] {
        record(&mut batteries, BatteryKind::WiscV, idx, 115.0);
    }
    record(&mut batteries, BatteryKind::TeaCh, "Coups de Fusil", 14.0);

    let strengths = profile::strengths(&batteries);
    assert_eq!(strengths.len(), STRENGTH_LIMIT);
    assert_eq!(
        strengths[0],
        "ICV : compréhension verbale et formation de concepts (Moyen Fort)"
    );
    assert!(strengths.iter().all(|s| !s.starts_with("ISQ")));
}

#[test]
fn scaled_and_t_scores_use_short_form() {
    let mut batteries = Batteries::default();
    record(&mut batteries, BatteryKind::TeaCh, "Marche-Arrêt", 12.0);
    record(&mut batteries, BatteryKind::TeaCh, "Coups de Fusil", 7.0);
    record(&mut batteries, BatteryKind::Brown, "Mémoire", 70.0);
    record(&mut batteries, BatteryKind::Brown, "Effort", 64.0);

    assert_eq!(profile::strengths(&batteries), vec!["Marche-Arrêt (Moyen Fort)"]);
    assert_eq!(
        profile::fragilities(&batteries),
        vec!["Coups de Fusil (Moyen Faible)", "Mémoire (Très Élevé)"]
    );
}

#[test]
fn keyword_rules_trigger_targeted_recommendations() {
    let mut batteries = Batteries::default();
    record(&mut batteries, BatteryKind::Brown, "Mémoire", 70.0);

    let recs = profile::recommendations(&batteries);
    assert!(recs.contains(&"Fournir des supports écrits pour compenser les difficultés mnésiques".to_string()));
    assert!(!recs.iter().any(|r| r.starts_with("Envisager un accompagnement")));
    assert!(!recs.iter().any(|r| r.starts_with("Accorder du temps")));
    assert_eq!(recs.len(), 4);
}

#[test]
fn recommendations_are_deduplicated() {
    let mut batteries = Batteries::default();
    record(&mut batteries, BatteryKind::WiscV, "IVT", 75.0);
    record(&mut batteries, BatteryKind::WiscV, "IMT", 72.0);

    let recs = profile::recommendations(&batteries);
    let limit = recs
        .iter()
        .filter(|r| *r == "Mettre en place des aménagements et un suivi spécialisé")
        .count();
    assert_eq!(limit, 1);
    assert!(recs.iter().any(|r| r.starts_with("Prévoir des temps de pause")));
    assert!(recs.iter().any(|r| r.starts_with("Accorder du temps supplémentaire")));
    assert!(recs.iter().any(|r| r.starts_with("Encourager l'utilisation")));
}

#[test]
fn general_recommendations_are_always_present() {
    let recs = profile::recommendations(&Batteries::default());
    assert_eq!(
        recs,
        vec![
            "Maintenir une communication régulière entre la famille, l'école et les professionnels suivant l'enfant",
            "Valoriser systématiquement les efforts et les progrès réalisés",
        ]
    );
}

#[test]
fn full_scale_synthesis_falls_back() {
    assert_eq!(
        profile::full_scale_synthesis("Très Faible"),
        "des difficultés intellectuelles majeures"
    );
    assert_eq!(
        profile::full_scale_synthesis("Non classifié"),
        "un profil cognitif particulier"
    );
}

#[test]
fn informant_rows_cover_shared_scales_only() {
    let mut batteries = Batteries::default();
    record(&mut batteries, BatteryKind::ConnersParent, "Inattention", 70.0);
    record(&mut batteries, BatteryKind::ConnersParent, "Fonctions Exécutives", 60.0);
    record(&mut batteries, BatteryKind::ConnersTeacher, "Inattention", 61.0);

    let comparison = InformantComparison::compare(
        batteries.get(BatteryKind::ConnersParent).unwrap(),
        batteries.get(BatteryKind::ConnersTeacher).unwrap(),
    );
    assert_eq!(comparison.rows.len(), 1);
    assert_eq!(comparison.rows[0].scale, "Inattention");
    assert_eq!(comparison.rows[0].gap, 9.0);
    assert!(comparison.rows[0].convergent);
    assert_eq!(comparison.divergence_count(), 0);
}
