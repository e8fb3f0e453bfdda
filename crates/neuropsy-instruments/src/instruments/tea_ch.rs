use crate::Instrument;
use crate::scoring::{Domain, ScoreType, Subscale};

/// TEA-Ch: Test of Everyday Attention for Children.
/// Subtests grouped by attention component, scaled scores (mean 10, SD 3).
pub struct TeaCh;

impl Instrument for TeaCh {
    fn id(&self) -> &str {
        "tea_ch"
    }

    fn name(&self) -> &str {
        "TEA-Ch"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            vec![
                category(
                    "selective_attention",
                    "Attention sélective",
                    &[
                        "Recherche dans le Ciel",
                        "Carte Géographique",
                        "Écoute Deux Choses à la Fois",
                    ],
                ),
                category(
                    "sustained_attention",
                    "Attention soutenue",
                    &["Coups de Fusil", "Marche-Arrêt", "Transmission de Codes"],
                ),
                category(
                    "attentional_control",
                    "Contrôle attentionnel",
                    &[
                        "Les Petits Hommes Verts",
                        "Mondes Contraires",
                        "Faire Deux Choses à la Fois",
                    ],
                ),
            ]
        });
        &DOMAINS
    }
}

fn category(id: &str, name: &str, subtests: &[&str]) -> Domain {
    Domain {
        id: id.to_string(),
        name: name.to_string(),
        subscales: subtests.iter().map(|s| subtest(s)).collect(),
        composite_score_type: None,
        composite_range: None,
        description: None,
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
