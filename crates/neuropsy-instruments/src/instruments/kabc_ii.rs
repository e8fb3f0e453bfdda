use crate::Instrument;
use crate::scoring::{Domain, ScoreType};

/// KABC-II: Kaufman Assessment Battery for Children, Second Edition.
/// Six global indices, standard scores (mean 100, SD 15).
pub struct KabcII;

impl Instrument for KabcII {
    fn id(&self) -> &str {
        "kabc_ii"
    }

    fn name(&self) -> &str {
        "KABC-II"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            vec![
                index("IFC", "Indice de Fonctions Cognitives", "fonctions cognitives globales"),
                index("ISQ", "Indice Séquentiel", "traitement séquentiel de l'information"),
                index("ISI", "Indice Simultané", "traitement simultané de l'information"),
                index("IPL", "Indice de Planification", "planification et organisation"),
                index("IAP", "Indice d'Apprentissage", "apprentissage et mémorisation"),
                index("ICO", "Indice de Connaissances", "connaissances acquises"),
            ]
        });
        &DOMAINS
    }
}

fn index(id: &str, name: &str, domain: &str) -> Domain {
    Domain {
        id: id.to_string(),
        name: name.to_string(),
        subscales: vec![],
        composite_score_type: Some(ScoreType::Standard),
        composite_range: Some(ScoreType::Standard.entry_range()),
        description: Some(domain.to_string()),
    }
}
