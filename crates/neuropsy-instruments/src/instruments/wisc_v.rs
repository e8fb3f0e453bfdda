use crate::Instrument;
use crate::scoring::{Domain, ScoreType, Subscale};

/// Primary indices, in the order used for tables and profile analysis.
pub const PRIMARY_INDICES: [&str; 5] = ["ICV", "IVS", "IRF", "IMT", "IVT"];

/// Full Scale IQ.
pub const FULL_SCALE_IQ: &str = "IQT";

/// Indices shown in the report table: the primary five plus the FSIQ.
pub const REPORTED_INDICES: [&str; 6] = ["ICV", "IVS", "IRF", "IMT", "IVT", "IQT"];

/// Indices entered without subtests.
pub const COMPLEMENTARY_INDICES: [&str; 6] = ["IQT", "IRQ", "IMTA", "INV", "IAG", "ICC"];

/// WISC-V: Wechsler Intelligence Scale for Children, Fifth Edition (French norms).
/// Indices: standard scores (mean 100, SD 15). Subtests: scaled scores (mean 10, SD 3),
/// addressed as `"{index}_{subtest}"`.
pub struct WiscV;

impl Instrument for WiscV {
    fn id(&self) -> &str {
        "wisc_v"
    }

    fn name(&self) -> &str {
        "WISC-V"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            vec![
                index(
                    "ICV",
                    "Indice de Compréhension Verbale",
                    "compréhension verbale et formation de concepts",
                    &["Similitudes", "Vocabulaire", "Information", "Compréhension"],
                ),
                index(
                    "IVS",
                    "Indice Visuospatial",
                    "raisonnement visuospatial et analyse perceptive",
                    &["Cubes", "Puzzles Visuels"],
                ),
                index(
                    "IRF",
                    "Indice de Raisonnement Fluide",
                    "raisonnement logique et résolution de problèmes",
                    &["Matrices", "Balances", "Arithmétique"],
                ),
                index(
                    "IMT",
                    "Indice de Mémoire de Travail",
                    "mémoire de travail et manipulation mentale",
                    &[
                        "Mémoire des Chiffres",
                        "Mémoire des Images",
                        "Séquence Lettres-Chiffres",
                    ],
                ),
                index(
                    "IVT",
                    "Indice de Vitesse de Traitement",
                    "vitesse de traitement et attention visuelle",
                    &["Code", "Symboles", "Barrage"],
                ),
                index("IQT", "QI Total", "fonctionnement intellectuel global", &[]),
                index(
                    "IRQ",
                    "Indice de Raisonnement Quantitatif",
                    "raisonnement quantitatif",
                    &[],
                ),
                index(
                    "IMTA",
                    "Indice de Mémoire de Travail Auditif",
                    "mémoire de travail auditif",
                    &[],
                ),
                index("INV", "Indice Non Verbal", "raisonnement non verbal", &[]),
                index("IAG", "Indice d'Aptitude Générale", "aptitude générale", &[]),
                index("ICC", "Indice de Compétence Cognitive", "compétence cognitive", &[]),
            ]
        });
        &DOMAINS
    }
}

/// Score name of a subtest within its index.
pub fn subtest_id(index: &str, subtest: &str) -> String {
    format!("{index}_{subtest}")
}

fn index(id: &str, name: &str, domain: &str, subtests: &[&str]) -> Domain {
    Domain {
        id: id.to_string(),
        name: name.to_string(),
        subscales: subtests.iter().map(|s| subtest(id, s)).collect(),
        composite_score_type: Some(ScoreType::Standard),
        composite_range: Some(ScoreType::Standard.entry_range()),
        description: Some(domain.to_string()),
    }
}

fn subtest(index: &str, name: &str) -> Subscale {
    Subscale {
        id: subtest_id(index, name),
        name: name.to_string(),
        score_type: ScoreType::Scaled,
        range: ScoreType::Scaled.entry_range(),
        description: Some(name.to_lowercase()),
    }
}
