use crate::Instrument;
use crate::scoring::{Domain, ScoreType, Subscale};

/// Brown Attention-Deficit Disorder Scales.
/// Six executive clusters plus a total score, T-scores (mean 50, SD 10).
/// Higher scores indicate greater impairment.
pub struct Brown;

impl Instrument for Brown {
    fn id(&self) -> &str {
        "brown"
    }

    fn name(&self) -> &str {
        "Brown"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            vec![Domain {
                id: "clusters".to_string(),
                name: "Échelles Brown".to_string(),
                subscales: [
                    "Activation",
                    "Attention",
                    "Effort",
                    "Émotion",
                    "Mémoire",
                    "Action",
                    "Score Total",
                ]
                .iter()
                .map(|s| scale(s))
                .collect(),
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
