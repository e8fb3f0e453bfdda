use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Instrument;
use crate::scoring::{Domain, ScoreType, Subscale};

/// Scales shared by every Conners-3 rating form.
pub const SCALES: [&str; 10] = [
    "Inattention",
    "Hyperactivité/Impulsivité",
    "Problèmes d'Apprentissage",
    "Fonctions Exécutives",
    "Défiance/Agressivité",
    "Relations avec les Pairs",
    "Indice TDAH Inattentif",
    "Indice TDAH Hyperactif/Impulsif",
    "Indice TDAH Combiné",
    "Indice Global Conners",
];

/// Who completed the rating form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Informant {
    Parent,
    Teacher,
}

/// Conners-3: Conners Third Edition rating scales, T-scores (mean 50, SD 10).
/// The parent and teacher forms share the same scales and are compared
/// against each other.
pub struct Conners3 {
    pub informant: Informant,
}

impl Instrument for Conners3 {
    fn id(&self) -> &str {
        match self.informant {
            Informant::Parent => "conners_parent",
            Informant::Teacher => "conners_teacher",
        }
    }

    fn name(&self) -> &str {
        match self.informant {
            Informant::Parent => "Conners-3 Parent",
            Informant::Teacher => "Conners-3 Enseignant",
        }
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            vec![Domain {
                id: "scales".to_string(),
                name: "Échelles Conners-3".to_string(),
                subscales: SCALES.iter().map(|s| scale(s)).collect(),
                composite_score_type: None,
                composite_range: None,
                description: None,
            }]
        });
        &DOMAINS
    }
}

fn scale(name: &str) -> Subscale {
    Subscale {
        id: name.to_string(),
        name: name.to_string(),
        score_type: ScoreType::TScore,
        range: ScoreType::TScore.entry_range(),
        description: Some(name.to_lowercase()),
    }
}
