//! Cross-battery profile analysis: strengths, fragilities and the
//! recommendation list.
//!
//! Batteries are walked in [`BatteryKind::ALL`] order and scores in entry
//! order, so the strength cut-off is reproducible.

use std::collections::BTreeSet;

use neuropsy_instruments::battery::{Batteries, BatteryKind};
use neuropsy_instruments::interpretation::{is_clinically_significant, recommendation_for};
use neuropsy_instruments::score::Score;
use neuropsy_instruments::scoring::ScoreType;

/// Number of strengths kept for the synthesis.
pub const STRENGTH_LIMIT: usize = 5;

const ATTENTION_RECOMMENDATIONS: [&str; 2] = [
    "Prévoir des temps de pause réguliers et limiter les distracteurs environnementaux",
    "Privilégier les consignes courtes et vérifier la compréhension",
];

const MEMORY_RECOMMENDATIONS: [&str; 2] = [
    "Fournir des supports écrits pour compenser les difficultés mnésiques",
    "Encourager l'utilisation d'outils d'aide à la mémorisation (agenda, pictogrammes)",
];

const SPEED_RECOMMENDATIONS: [&str; 2] = [
    "Accorder du temps supplémentaire pour les évaluations et exercices",
    "Réduire la quantité de travail écrit demandé",
];

const BEHAVIOR_RECOMMENDATIONS: [&str; 2] = [
    "Envisager un accompagnement thérapeutique ciblé (guidance parentale, thérapie cognitivo-comportementale)",
    "Favoriser un cadre structuré et des routines prévisibles",
];

const GENERAL_RECOMMENDATIONS: [&str; 2] = [
    "Maintenir une communication régulière entre la famille, l'école et les professionnels suivant l'enfant",
    "Valoriser systématiquement les efforts et les progrès réalisés",
];

fn all_valid_scores(batteries: &Batteries) -> impl Iterator<Item = &Score> {
    batteries
        .iter_completed()
        .flat_map(|(_, collection)| collection.valid_scores())
}

fn describe(score: &Score) -> String {
    match score.score_type {
        ScoreType::Standard => format!(
            "{} : {} ({})",
            score.name, score.domain, score.classification
        ),
        ScoreType::Scaled | ScoreType::TScore => {
            format!("{} ({})", score.name, score.classification)
        }
    }
}

fn is_strength(score: &Score) -> bool {
    match (score.score_type, score.value) {
        (ScoreType::Standard, Some(v)) => v >= 110.0,
        (ScoreType::Scaled, Some(v)) => v >= 12.0,
        _ => false,
    }
}

fn is_fragility(score: &Score) -> bool {
    match (score.score_type, score.value) {
        (ScoreType::Standard, Some(v)) => v < 85.0,
        (ScoreType::Scaled, Some(v)) => v <= 7.0,
        (ScoreType::TScore, Some(v)) => is_clinically_significant(v, ScoreType::TScore),
        (_, None) => false,
    }
}

/// The first [`STRENGTH_LIMIT`] strengths encountered.
pub fn strengths(batteries: &Batteries) -> Vec<String> {
    all_valid_scores(batteries)
        .filter(|s| is_strength(s))
        .take(STRENGTH_LIMIT)
        .map(describe)
        .collect()
}

pub fn fragilities(batteries: &Batteries) -> Vec<String> {
    all_valid_scores(batteries)
        .filter(|s| is_fragility(s))
        .map(describe)
        .collect()
}

/// Scores of a battery above the clinical threshold for its type.
pub fn significant_scores(
    batteries: &Batteries,
    kind: BatteryKind,
    score_type: ScoreType,
) -> Vec<&Score> {
    batteries
        .completed(kind)
        .map(|c| {
            c.valid_scores()
                .filter(|s| s.value.is_some_and(|v| is_clinically_significant(v, score_type)))
                .collect()
        })
        .unwrap_or_default()
}

/// Deduplicated recommendations in lexical order.
pub fn recommendations(batteries: &Batteries) -> Vec<String> {
    let mut set: BTreeSet<&str> = BTreeSet::new();

    for score in all_valid_scores(batteries).filter(|s| s.score_type == ScoreType::Standard) {
        let text = recommendation_for(&score.classification);
        if !text.is_empty() {
            set.insert(text);
        }
    }

    let fragilities: Vec<String> = fragilities(batteries)
        .iter()
        .map(|f| f.to_lowercase())
        .collect();
    let mentions = |keywords: &[&str]| {
        fragilities
            .iter()
            .any(|f| keywords.iter().any(|k| f.contains(k)))
    };

    if mentions(&["attention"]) {
        set.extend(ATTENTION_RECOMMENDATIONS);
    }
    if mentions(&["mémoire"]) {
        set.extend(MEMORY_RECOMMENDATIONS);
    }
    if mentions(&["vitesse", "traitement"]) {
        set.extend(SPEED_RECOMMENDATIONS);
    }

    let behavior_flagged = [BatteryKind::ConnersParent, BatteryKind::ConnersTeacher]
        .into_iter()
        .any(|kind| !significant_scores(batteries, kind, ScoreType::TScore).is_empty());
    if behavior_flagged {
        set.extend(BEHAVIOR_RECOMMENDATIONS);
    }

    set.extend(GENERAL_RECOMMENDATIONS);

    set.into_iter().map(str::to_string).collect()
}

/// Synthesis phrase for the Full Scale IQ classification.
pub fn full_scale_synthesis(classification: &str) -> &'static str {
    match classification {
        "Très Supérieur" => "des capacités intellectuelles exceptionnelles",
        "Supérieur" => "un fonctionnement intellectuel au-dessus de la moyenne",
        "Moyen Fort" => "des compétences cognitives satisfaisantes",
        "Moyen" => "un fonctionnement intellectuel dans la norme attendue",
        "Moyen Faible" => "un fonctionnement intellectuel fragile",
        "Limite (Zone Frontière)" => "des difficultés intellectuelles significatives",
        "Très Faible" => "des difficultés intellectuelles majeures",
        _ => "un profil cognitif particulier",
    }
}
