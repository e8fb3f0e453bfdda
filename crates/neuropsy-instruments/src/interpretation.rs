//! Label-keyed clinical sentences and the predicates that accompany them.

use crate::classification::{classify, label};
use crate::scoring::ScoreType;

/// Replaced literally by the domain phrase.
pub const DOMAIN_PLACEHOLDER: &str = "{domain}";

pub const DEFAULT_COLOR: &str = "#808080";

struct LabelText {
    label: &'static str,
    sentence: &'static str,
    color: &'static str,
    recommendation: &'static str,
}

/// Standard and scaled labels.
static ABILITY_TEXTS: [LabelText; 7] = [
    LabelText {
        label: label::VERY_SUPERIOR,
        sentence: "Score situé dans la zone très supérieure, attestant de capacités exceptionnelles en {domain}, représentant une force majeure du profil cognitif.",
        color: "#2E7D32",
        recommendation: "Stimuler et enrichir ces capacités exceptionnelles",
    },
    LabelText {
        label: label::SUPERIOR,
        sentence: "Score situé dans la zone supérieure, témoignant de capacités solides et efficientes en {domain}, constituant un point d'appui significatif.",
        color: "#388E3C",
        recommendation: "S'appuyer sur ces capacités pour faciliter les apprentissages",
    },
    LabelText {
        label: label::HIGH_AVERAGE,
        sentence: "Score situé dans la zone moyenne forte, indiquant des compétences satisfaisantes en {domain}, permettant un fonctionnement adapté.",
        color: "#66BB6A",
        recommendation: "Maintenir et consolider ces compétences",
    },
    LabelText {
        label: label::AVERAGE,
        sentence: "Score situé dans la zone moyenne, reflétant un fonctionnement attendu en {domain}, sans difficulté particulière.",
        color: "#FFA726",
        recommendation: "Accompagner le développement de ces compétences",
    },
    LabelText {
        label: label::LOW_AVERAGE,
        sentence: "Score situé dans la zone moyenne faible, suggérant une relative fragilité en {domain}, pouvant impacter le fonctionnement dans certaines situations exigeantes.",
        color: "#F57C00",
        recommendation: "Proposer un accompagnement ciblé pour soutenir ces compétences",
    },
    LabelText {
        label: label::BORDERLINE,
        sentence: "Score situé en zone frontière, révélant une fragilité importante en {domain}, nécessitant un accompagnement adapté et des aménagements spécifiques.",
        color: "#E64A19",
        recommendation: "Mettre en place des aménagements et un suivi spécialisé",
    },
    LabelText {
        label: label::VERY_LOW,
        sentence: "Score situé dans la zone très faible, objectivant une difficulté majeure en {domain}, requérant un soutien thérapeutique intensif et des adaptations pédagogiques substantielles.",
        color: "#C62828",
        recommendation: "Intervention intensive et aménagements pédagogiques importants nécessaires",
    },
];

/// T-score labels. No recommendation text.
static BEHAVIOR_TEXTS: [LabelText; 6] = [
    LabelText {
        label: label::VERY_ELEVATED,
        sentence: "Score très élevé, cliniquement significatif, indiquant des difficultés marquées en {domain}, nécessitant une attention clinique immédiate.",
        color: "#C62828",
        recommendation: "",
    },
    LabelText {
        label: label::ELEVATED,
        sentence: "Score élevé, dans la zone à risque, suggérant des difficultés notables en {domain}, méritant une attention particulière.",
        color: "#E64A19",
        recommendation: "",
    },
    LabelText {
        label: label::HIGH_AVERAGE_T,
        sentence: "Score dans la zone moyenne haute en {domain}, sans caractère cliniquement significatif.",
        color: "#FFA726",
        recommendation: "",
    },
    LabelText {
        label: label::AVERAGE,
        sentence: "Score dans la zone moyenne en {domain}, ne révélant pas de difficulté particulière.",
        color: "#66BB6A",
        recommendation: "",
    },
    LabelText {
        label: label::LOW_AVERAGE_T,
        sentence: "Score dans la zone moyenne basse en {domain}.",
        color: "#66BB6A",
        recommendation: "",
    },
    LabelText {
        label: label::LOW,
        sentence: "Score bas en {domain}.",
        color: "#2E7D32",
        recommendation: "",
    },
];

fn texts(score_type: ScoreType) -> &'static [LabelText] {
    match score_type {
        ScoreType::TScore => &BEHAVIOR_TEXTS,
        ScoreType::Standard | ScoreType::Scaled => &ABILITY_TEXTS,
    }
}

fn lookup(label: &str, score_type: ScoreType) -> Option<&'static LabelText> {
    texts(score_type).iter().find(|t| t.label == label)
}

/// Clinical sentence for `value`, with `domain` substituted into the
/// label's template.
///
/// Labels without a template (the scaled "Limite" band, the unclassified
/// sentinel) fall back to a generic sentence.
pub fn interpret(value: f64, score_type: ScoreType, domain: &str) -> String {
    let classification = classify(value, score_type);
    match lookup(classification.label, score_type) {
        Some(text) => text.sentence.replace(DOMAIN_PLACEHOLDER, domain),
        None => format!("Score de {value} ({}).", classification.label),
    }
}

pub fn is_clinically_significant(value: f64, score_type: ScoreType) -> bool {
    match score_type {
        ScoreType::TScore => value >= 65.0,
        ScoreType::Standard => value < 80.0,
        ScoreType::Scaled => value <= 5.0,
    }
}

/// Hex display color for a classification label.
pub fn color_for(label: &str, score_type: ScoreType) -> &'static str {
    lookup(label, score_type).map_or(DEFAULT_COLOR, |t| t.color)
}

/// Generic recommendation attached to a standard/scaled label, or `""`.
pub fn recommendation_for(label: &str) -> &'static str {
    lookup(label, ScoreType::Standard).map_or("", |t| t.recommendation)
}

/// Percentile rank of `value` under the score type's normal distribution,
/// rounded to one decimal.
pub fn percentile_rank(value: f64, score_type: ScoreType) -> f64 {
    let z = (value - score_type.mean()) / score_type.standard_deviation();
    let percentile = normal_cdf(z) * 100.0;
    (percentile * 10.0).round() / 10.0
}

fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / std::f64::consts::SQRT_2))
}

// Abramowitz & Stegun 7.1.26, max absolute error 1.5e-7.
fn erf(x: f64) -> f64 {
    const P: f64 = 0.327_591_1;
    const A1: f64 = 0.254_829_592;
    const A2: f64 = -0.284_496_736;
    const A3: f64 = 1.421_413_741;
    const A4: f64 = -1.453_152_027;
    const A5: f64 = 1.061_405_429;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    sign * (1.0 - poly * (-x * x).exp())
}
