use jiff::civil::date;
use pretty_assertions::assert_eq;

use neuropsy_core::models::anamnesis::Anamnesis;
use neuropsy_core::models::patient::Patient;
use neuropsy_instruments::battery::{Batteries, BatteryKind};
use neuropsy_instruments::scoring::ScoreEntry;
use neuropsy_report::engine::generate_report;
use neuropsy_report::profile;

fn alice() -> Patient {
    Patient {
        last_name: "Martin".into(),
        first_name: "Alice".into(),
        birth_date: Some(date(2015, 3, 10)),
        exam_date: Some(date(2024, 6, 1)),
        grade: "CM1".into(),
        school: "École Jules Ferry".into(),
    }
}

fn record(batteries: &mut Batteries, kind: BatteryKind, name: &str, value: f64) {
    batteries
        .record(kind, &ScoreEntry::present(name, value))
        .unwrap();
}

fn contrasted_wisc() -> Batteries {
    let mut batteries = Batteries::default();
    record(&mut batteries, BatteryKind::WiscV, "ICV", 130.0);
    record(&mut batteries, BatteryKind::WiscV, "IVT", 78.0);
    batteries
}

#[test]
fn contrasted_wisc_profile_end_to_end() {
    let anamnesis = Anamnesis {
        referral_reason: "Difficultés scolaires".into(),
        ..Default::default()
    };
    let report = generate_report(&alice(), &anamnesis, &contrasted_wisc());

    assert!(report.starts_with("# COMPTE-RENDU D'EXAMEN NEUROPSYCHOLOGIQUE\n\n**Patient :** Alice Martin"));
    assert!(report.contains("**Date de naissance :** 10/03/2015"));
    assert!(report.contains("**Âge à l'examen :** 9 ans"));
    assert!(report.contains("**Date d'examen :** 01/06/2024"));
    assert!(report.contains("**Classe :** CM1"));
    assert!(report.contains("### Motif de consultation\nDifficultés scolaires"));

    assert!(report.contains("| ICV | 130 | Très Supérieur | >98 |"));
    assert!(report.contains("| IVT | 78 | Limite (Zone Frontière) | 2-8 |"));
    assert!(report.contains("**Indice de Compréhension Verbale (ICV) :** Score situé dans la zone très supérieure"));
    assert!(report.contains("hétérogénéité significative** (écart maximal de 52 points)"));
    assert!(report.contains("- **Points forts :** ICV (130)"));
    assert!(report.contains("- **Points faibles :** IVT (78)"));

    assert!(report.contains("- ICV : compréhension verbale et formation de concepts (Très Supérieur)"));
    assert!(report.contains("- IVT : vitesse de traitement et attention visuelle (Limite (Zone Frontière))"));
    assert!(report.contains("Mettre en place des aménagements et un suivi spécialisé"));
    assert!(report.ends_with("Fait le 01/06/2024"));
}

#[test]
fn sections_appear_in_fixed_order() {
    let mut batteries = contrasted_wisc();
    record(&mut batteries, BatteryKind::TeaCh, "Coups de Fusil", 10.0);
    record(&mut batteries, BatteryKind::Brown, "Attention", 50.0);
    let anamnesis = Anamnesis {
        referrer: "Médecin scolaire".into(),
        ..Default::default()
    };

    let report = generate_report(&alice(), &anamnesis, &batteries);
    let headings = [
        "# COMPTE-RENDU",
        "## 1. ÉLÉMENTS ANAMNESTIQUES",
        "## 2. OBSERVATIONS CLINIQUES",
        "## 3. ÉVALUATION DES FONCTIONS INTELLECTUELLES",
        "## 4. ÉVALUATION DES FONCTIONS ATTENTIONNELLES",
        "## 5. ÉVALUATION COMPORTEMENTALE",
        "## 6. SYNTHÈSE CLINIQUE",
        "## 7. RECOMMANDATIONS",
        "## 8. CONCLUSION",
    ];
    let positions: Vec<usize> = headings
        .iter()
        .map(|h| report.find(h).unwrap_or_else(|| panic!("missing {h}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn optional_sections_are_skipped() {
    let mut batteries = Batteries::default();
    record(&mut batteries, BatteryKind::NepsyIi, "Inhibition", 9.0);

    let report = generate_report(&Patient::default(), &Anamnesis::default(), &batteries);
    assert!(!report.contains("## 1."));
    assert!(!report.contains("## 3."));
    assert!(!report.contains("## 5."));
    assert!(report.contains("## 4. ÉVALUATION DES FONCTIONS ATTENTIONNELLES ET EXÉCUTIVES"));
    assert!(report.contains("| Inhibition | 9 | Moyen |"));
    assert!(report.contains(
        "L'enfant a collaboré de manière satisfaisante durant l'ensemble de l'examen."
    ));
    assert!(report.contains("L'évaluation neuropsychologique de l'enfant met en évidence"));
    assert!(!report.contains("Fait le"));
    assert!(!report.contains("**Patient :**"));
}

#[test]
fn observations_replace_stock_sentence() {
    let anamnesis = Anamnesis {
        fatigability: "Marquée en fin de séance".into(),
        ..Default::default()
    };
    let report = generate_report(&alice(), &anamnesis, &contrasted_wisc());
    assert!(report.contains("**Fatigabilité :** Marquée en fin de séance"));
    assert!(!report.contains("L'enfant a collaboré"));
}

#[test]
fn zero_age_is_not_printed() {
    let patient = Patient {
        first_name: "Léo".into(),
        birth_date: Some(date(2024, 1, 15)),
        exam_date: Some(date(2024, 6, 1)),
        ..Default::default()
    };
    let report = generate_report(&patient, &Anamnesis::default(), &contrasted_wisc());
    assert!(report.contains("**Date de naissance :** 15/01/2024"));
    assert!(!report.contains("Âge à l'examen"));
}

#[test]
fn homogeneous_profile_has_no_extremes() {
    let mut batteries = Batteries::default();
    record(&mut batteries, BatteryKind::WiscV, "ICV", 100.0);
    record(&mut batteries, BatteryKind::WiscV, "IRF", 108.0);
    record(&mut batteries, BatteryKind::WiscV, "IQT", 104.0);

    let report = generate_report(&alice(), &Anamnesis::default(), &batteries);
    assert!(report.contains("Le profil cognitif apparaît **homogène** (écart maximal de 8 points)"));
    assert!(!report.contains("Points forts :"));
    assert!(report.contains(
        "zone **moyen** (QIT = 104), reflétant un fonctionnement intellectuel dans la norme attendue."
    ));
    assert!(!report.contains("Le profil présente toutefois"));
}

#[test]
fn attention_fragilities_are_listed() {
    let mut batteries = Batteries::default();
    record(&mut batteries, BatteryKind::TeaCh, "Recherche dans le Ciel", 4.0);
    record(&mut batteries, BatteryKind::TeaCh, "Coups de Fusil", 11.0);

    let report = generate_report(&alice(), &Anamnesis::default(), &batteries);
    assert!(report.contains("des **fragilités attentionnelles** dans 1 domaine(s) :"));
    assert!(report.contains("- Recherche dans le Ciel : Score de 4 (Limite)."));

    let mut preserved = Batteries::default();
    record(&mut preserved, BatteryKind::TeaCh, "Coups de Fusil", 11.0);
    let report = generate_report(&alice(), &Anamnesis::default(), &preserved);
    assert!(report.contains("Les capacités attentionnelles apparaissent **préservées** dans l'ensemble."));
}

#[test]
fn informant_analysis_reports_convergence_and_divergence() {
    let mut batteries = Batteries::default();
    record(&mut batteries, BatteryKind::ConnersParent, "Inattention", 72.0);
    record(&mut batteries, BatteryKind::ConnersParent, "Défiance/Agressivité", 55.0);
    record(&mut batteries, BatteryKind::ConnersTeacher, "Inattention", 58.0);
    record(&mut batteries, BatteryKind::ConnersTeacher, "Défiance/Agressivité", 50.0);

    let report = generate_report(&alice(), &Anamnesis::default(), &batteries);
    assert!(report.contains("### Conners-3 - Version Parent"));
    assert!(report.contains("### Conners-3 - Version Enseignant"));
    assert!(report.contains("**1 échelle(s) cliniquement significative(s) (Parent) :**"));
    assert!(!report.contains("(Enseignant) :**"));
    assert!(report.contains("#### Analyse croisée Parent / Enseignant"));
    assert!(report.contains("**Convergences** observées sur 1 échelle(s)"));
    assert!(report.contains("sur 1 échelle(s) :\n- Inattention (écart de 14 points)"));
    assert!(report.contains("Envisager un accompagnement thérapeutique ciblé"));
}

#[test]
fn brown_without_significant_scales() {
    let mut batteries = Batteries::default();
    record(&mut batteries, BatteryKind::Brown, "Activation", 52.0);

    let report = generate_report(&alice(), &Anamnesis::default(), &batteries);
    assert!(report.contains("| Activation | 52 | Moyen |"));
    assert!(report.contains("Aucune échelle ne présente de score cliniquement significatif."));
    assert!(!report.contains("Analyse croisée"));
}

#[test]
fn recommendations_are_sorted_and_numbered() {
    let report = generate_report(&alice(), &Anamnesis::default(), &contrasted_wisc());
    let expected = profile::recommendations(&contrasted_wisc());

    let mut sorted = expected.clone();
    sorted.sort();
    assert_eq!(expected, sorted);

    for (i, rec) in expected.iter().enumerate() {
        assert!(report.contains(&format!("{}. {rec}", i + 1)));
    }
}
