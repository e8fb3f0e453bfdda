use crate::Instrument;
use crate::scoring::{Domain, ScoreType, Subscale};

/// NEPSY-II: Developmental NEuroPSYchological Assessment, Second Edition.
/// Partial battery: attention/executive and sensorimotor subtests, scaled scores.
pub struct NepsyII;

impl Instrument for NepsyII {
    fn id(&self) -> &str {
        "nepsy_ii"
    }

    fn name(&self) -> &str {
        "NEPSY-II"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            vec![
                Domain {
                    id: "attention_executive".to_string(),
                    name: "Attention/Fonctions exécutives".to_string(),
                    subscales: vec![
                        subtest("Attention Auditive"),
                        subtest("Réponses Associées"),
                        subtest("Inhibition"),
                        subtest("Statue"),
                    ],
                    composite_score_type: None,
                    composite_range: None,
                    description: None,
                },
                Domain {
                    id: "sensorimotor".to_string(),
                    name: "Fonctions sensorimotrices".to_string(),
                    subscales: vec![
                        subtest("Précision Visuomotrice"),
                        subtest("Imitation de Positions de Mains"),
                        subtest("Séquences Motrices Manuelles"),
                    ],
                    composite_score_type: None,
                    composite_range: None,
                    description: None,
                },
            ]
        });
        &DOMAINS
    }
}

fn subtest(name: &str) -> Subscale {
    Subscale {
        id: name.to_string(),
        name: name.to_string(),
        score_type: ScoreType::Scaled,
        range: ScoreType::Scaled.entry_range(),
        description: Some(name.to_lowercase()),
    }
}
