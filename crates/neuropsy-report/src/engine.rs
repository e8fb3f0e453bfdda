//! Markdown composition of the clinical report.
//!
//! Each section is built as a list of lines joined with `\n`; sections are
//! joined with a blank line. Composition is pure: the same inputs always give
//! the same text.

use jiff::civil::Date;
use tracing::debug;

use neuropsy_core::models::anamnesis::Anamnesis;
use neuropsy_core::models::patient::Patient;
use neuropsy_instruments::battery::{Batteries, BatteryKind};
use neuropsy_instruments::instruments::wisc_v::{FULL_SCALE_IQ, PRIMARY_INDICES, REPORTED_INDICES};
use neuropsy_instruments::interpretation::is_clinically_significant;
use neuropsy_instruments::score::{Score, ScoreCollection};
use neuropsy_instruments::scoring::ScoreType;

use crate::informants::{DIVERGENCE_THRESHOLD, InformantComparison};
use crate::profile;

pub const REPORT_TITLE: &str = "# COMPTE-RENDU D'EXAMEN NEUROPSYCHOLOGIQUE";

const DEFAULT_OBSERVATION: &str =
    "L'enfant a collaboré de manière satisfaisante durant l'ensemble de l'examen.";

const INDEX_TABLE_HEADER: [&str; 2] = [
    "| Indice | Score | Classification | Percentile |",
    "|--------|-------|----------------|------------|",
];

const SUBTEST_TABLE_HEADER: [&str; 2] = [
    "| Subtest | Score | Classification |",
    "|---------|-------|----------------|",
];

const SCALE_TABLE_HEADER: [&str; 2] = [
    "| Échelle | Score T | Classification |",
    "|---------|---------|----------------|",
];

fn format_date(date: Date) -> String {
    date.strftime("%d/%m/%Y").to_string()
}

/// Builds the report for one patient. Holds borrowed inputs only.
pub struct ReportEngine<'a> {
    patient: &'a Patient,
    anamnesis: &'a Anamnesis,
    batteries: &'a Batteries,
}

impl<'a> ReportEngine<'a> {
    pub fn new(patient: &'a Patient, anamnesis: &'a Anamnesis, batteries: &'a Batteries) -> Self {
        Self {
            patient,
            anamnesis,
            batteries,
        }
    }

    pub fn generate(&self) -> String {
        let mut sections = vec![self.header()];

        if self.anamnesis.has_content() {
            sections.push(self.anamnesis_section());
        }

        sections.push(self.observations_section());

        if self.has_any(&[BatteryKind::WiscV, BatteryKind::KabcIi]) {
            debug!("including intellectual assessment");
            sections.push(self.intellectual_section());
        }

        if self.has_any(&[BatteryKind::TeaCh, BatteryKind::NepsyIi]) {
            debug!("including attention assessment");
            sections.push(self.attention_section());
        }

        if self.has_any(&[
            BatteryKind::Brown,
            BatteryKind::ConnersParent,
            BatteryKind::ConnersTeacher,
        ]) {
            debug!("including behavioral assessment");
            sections.push(self.behavioral_section());
        }

        sections.push(self.synthesis_section());
        sections.push(self.recommendations_section());
        sections.push(self.conclusion_section());

        sections.join("\n\n")
    }

    fn has_any(&self, kinds: &[BatteryKind]) -> bool {
        kinds.iter().any(|&k| self.batteries.completed(k).is_some())
    }

    fn header(&self) -> String {
        let patient = self.patient;
        let mut lines = vec![REPORT_TITLE.to_string(), String::new()];

        let name = patient.full_name();
        if !name.is_empty() {
            lines.push(format!("**Patient :** {name}"));
        }
        if let Some(birth) = patient.birth_date {
            lines.push(format!("**Date de naissance :** {}", format_date(birth)));
        }
        if let Some(age) = patient.age_at_exam().filter(|&a| a != 0) {
            lines.push(format!("**Âge à l'examen :** {age} ans"));
        }
        if let Some(exam) = patient.exam_date {
            lines.push(format!("**Date d'examen :** {}", format_date(exam)));
        }
        if !patient.grade.is_empty() {
            lines.push(format!("**Classe :** {}", patient.grade));
        }
        if !patient.school.is_empty() {
            lines.push(format!("**École :** {}", patient.school));
        }

        lines.join("\n")
    }

    fn anamnesis_section(&self) -> String {
        let a = self.anamnesis;
        let mut lines = vec!["## 1. ÉLÉMENTS ANAMNESTIQUES".to_string(), String::new()];

        if !a.referral_reason.is_empty() {
            lines.push("### Motif de consultation".to_string());
            lines.push(a.referral_reason.clone());
            lines.push(String::new());
        }
        if !a.referrer.is_empty() {
            lines.push(format!("**Demandeur :** {}", a.referrer));
            lines.push(String::new());
        }

        if a.has_developmental_history() {
            lines.push("### Histoire développementale".to_string());
            push_labeled(&mut lines, "Grossesse et accouchement", &a.pregnancy_and_birth);
            push_labeled(&mut lines, "Développement moteur", &a.motor_development);
            push_labeled(&mut lines, "Développement langagier", &a.language_development);
            lines.push(String::new());
        }

        if a.has_school_history() {
            lines.push("### Parcours scolaire".to_string());
            if !a.school_history.is_empty() {
                lines.push(a.school_history.clone());
            }
            push_labeled(&mut lines, "Redoublements", &a.repeated_grades);
            push_labeled(&mut lines, "Aménagements existants", &a.existing_accommodations);
            lines.push(String::new());
        }

        if a.has_medical_history() {
            lines.push("### Antécédents et suivis".to_string());
            push_labeled(&mut lines, "Antécédents médicaux", &a.medical_history);
            push_labeled(&mut lines, "Antécédents familiaux", &a.family_history);
            push_labeled(&mut lines, "Suivis actuels", &a.current_follow_up);
            lines.push(String::new());
        }

        lines.join("\n")
    }

    fn observations_section(&self) -> String {
        let a = self.anamnesis;
        let mut lines = vec![
            "## 2. OBSERVATIONS CLINIQUES DURANT L'EXAMEN".to_string(),
            String::new(),
        ];

        if a.has_observations() {
            push_labeled(&mut lines, "Comportement général", &a.general_behavior);
            push_labeled(&mut lines, "Collaboration", &a.collaboration);
            push_labeled(&mut lines, "Fatigabilité", &a.fatigability);
            push_labeled(&mut lines, "Anxiété de performance", &a.performance_anxiety);
            push_labeled(&mut lines, "Stratégies observées", &a.observed_strategies);
            push_labeled(&mut lines, "Autres observations", &a.other_observations);
        } else {
            lines.push(DEFAULT_OBSERVATION.to_string());
        }

        lines.join("\n")
    }

    fn intellectual_section(&self) -> String {
        let mut lines = vec![
            "## 3. ÉVALUATION DES FONCTIONS INTELLECTUELLES".to_string(),
            String::new(),
        ];

        if let Some(wisc) = self.batteries.completed(BatteryKind::WiscV) {
            lines.push("### WISC-V - Échelle d'Intelligence de Wechsler".to_string());
            lines.push(String::new());

            let indices: Vec<&Score> = REPORTED_INDICES
                .iter()
                .filter_map(|idx| wisc.valid(idx))
                .collect();

            push_all(&mut lines, &INDEX_TABLE_HEADER);
            for score in &indices {
                lines.push(index_row(score));
            }
            lines.push(String::new());

            lines.push("#### Interprétation".to_string());
            lines.push(String::new());
            push_narratives(&mut lines, BatteryKind::WiscV, &indices);

            lines.push("#### Analyse du profil".to_string());
            lines.push(String::new());

            let spread = wisc.heterogeneity(&PRIMARY_INDICES);
            if spread.is_homogeneous {
                lines.push(format!(
                    "Le profil cognitif apparaît **homogène** (écart maximal de {:.0} points), \
                     suggérant un développement harmonieux des différentes composantes de l'intelligence.",
                    spread.max_gap
                ));
            } else {
                lines.push(format!(
                    "Le profil cognitif présente une **hétérogénéité significative** \
                     (écart maximal de {:.0} points), révélant des forces et faiblesses contrastées.",
                    spread.max_gap
                ));

                if let (Some(high), Some(low)) = (spread.highest.first(), spread.lowest.first()) {
                    lines.push(String::new());
                    lines.push(format!(
                        "- **Points forts :** {} ({:.0})",
                        joined_names(&spread.highest),
                        high.value.unwrap_or_default()
                    ));
                    lines.push(format!(
                        "- **Points faibles :** {} ({:.0})",
                        joined_names(&spread.lowest),
                        low.value.unwrap_or_default()
                    ));
                }
            }
            lines.push(String::new());
        }

        if let Some(kabc) = self.batteries.completed(BatteryKind::KabcIi) {
            lines.push("### KABC-II - Batterie d'Évaluation de Kaufman".to_string());
            lines.push(String::new());

            let indices: Vec<&Score> = kabc.valid_scores().collect();

            push_all(&mut lines, &INDEX_TABLE_HEADER);
            for score in &indices {
                lines.push(index_row(score));
            }
            lines.push(String::new());

            lines.push("#### Interprétation".to_string());
            lines.push(String::new());
            push_narratives(&mut lines, BatteryKind::KabcIi, &indices);
        }

        lines.join("\n")
    }

    fn attention_section(&self) -> String {
        let mut lines = vec![
            "## 4. ÉVALUATION DES FONCTIONS ATTENTIONNELLES ET EXÉCUTIVES".to_string(),
            String::new(),
        ];

        if let Some(teach) = self.batteries.completed(BatteryKind::TeaCh) {
            lines.push("### TEA-Ch - Test d'Évaluation de l'Attention".to_string());
            lines.push(String::new());
            push_table(&mut lines, &SUBTEST_TABLE_HEADER, teach);
            lines.push(String::new());

            let weak = significant(teach, ScoreType::Scaled);
            if weak.is_empty() {
                lines.push(
                    "Les capacités attentionnelles apparaissent **préservées** dans l'ensemble."
                        .to_string(),
                );
            } else {
                lines.push(format!(
                    "L'évaluation révèle des **fragilités attentionnelles** dans {} domaine(s) :",
                    weak.len()
                ));
                lines.push(String::new());
                push_interpretations(&mut lines, &weak);
            }
            lines.push(String::new());
        }

        if let Some(nepsy) = self.batteries.completed(BatteryKind::NepsyIi) {
            lines.push("### NEPSY-II - Bilan Neuropsychologique".to_string());
            lines.push(String::new());
            push_table(&mut lines, &SUBTEST_TABLE_HEADER, nepsy);
            lines.push(String::new());
        }

        lines.join("\n")
    }

    fn behavioral_section(&self) -> String {
        let mut lines = vec!["## 5. ÉVALUATION COMPORTEMENTALE".to_string(), String::new()];

        if let Some(brown) = self.batteries.completed(BatteryKind::Brown) {
            lines.push("### Échelle Brown de Déficit d'Attention".to_string());
            lines.push(String::new());
            push_table(&mut lines, &SCALE_TABLE_HEADER, brown);
            lines.push(String::new());

            let flagged = significant(brown, ScoreType::TScore);
            if flagged.is_empty() {
                lines.push(
                    "Aucune échelle ne présente de score cliniquement significatif.".to_string(),
                );
            } else {
                lines.push(format!(
                    "**{} échelle(s) cliniquement significative(s) :**",
                    flagged.len()
                ));
                lines.push(String::new());
                push_interpretations(&mut lines, &flagged);
            }
            lines.push(String::new());
        }

        let parent = self.batteries.completed(BatteryKind::ConnersParent);
        let teacher = self.batteries.completed(BatteryKind::ConnersTeacher);

        for (collection, informant) in [(parent, "Parent"), (teacher, "Enseignant")] {
            let Some(collection) = collection else {
                continue;
            };
            lines.push(format!("### Conners-3 - Version {informant}"));
            lines.push(String::new());
            push_table(&mut lines, &SCALE_TABLE_HEADER, collection);
            lines.push(String::new());

            let flagged = significant(collection, ScoreType::TScore);
            if !flagged.is_empty() {
                lines.push(format!(
                    "**{} échelle(s) cliniquement significative(s) ({informant}) :**",
                    flagged.len()
                ));
                lines.push(String::new());
                push_interpretations(&mut lines, &flagged);
                lines.push(String::new());
            }
        }

        if let (Some(parent), Some(teacher)) = (parent, teacher) {
            lines.push("#### Analyse croisée Parent / Enseignant".to_string());
            lines.push(String::new());
            push_informant_analysis(&mut lines, &InformantComparison::compare(parent, teacher));
            lines.push(String::new());
        }

        lines.join("\n")
    }

    fn synthesis_section(&self) -> String {
        let mut lines = vec!["## 6. SYNTHÈSE CLINIQUE".to_string(), String::new()];

        if let Some(wisc) = self.batteries.completed(BatteryKind::WiscV) {
            if let Some(fsiq) = wisc.valid(FULL_SCALE_IQ) {
                lines.push(format!(
                    "Le fonctionnement intellectuel global se situe dans la zone **{}** \
                     (QIT = {}), reflétant {}.",
                    fsiq.classification.to_lowercase(),
                    fsiq.whole_value().unwrap_or_default(),
                    profile::full_scale_synthesis(&fsiq.classification)
                ));
            }

            if !wisc.heterogeneity(&PRIMARY_INDICES).is_homogeneous {
                lines.push(String::new());
                lines.push(
                    "Le profil présente toutefois une **hétérogénéité significative**, \
                     avec des compétences contrastées selon les domaines cognitifs évalués."
                        .to_string(),
                );
            }
            lines.push(String::new());
        }

        let strengths = profile::strengths(self.batteries);
        if !strengths.is_empty() {
            lines.push("**Points d'appui identifiés :**".to_string());
            lines.push(String::new());
            lines.extend(strengths.iter().map(|s| format!("- {s}")));
            lines.push(String::new());
        }

        let fragilities = profile::fragilities(self.batteries);
        if !fragilities.is_empty() {
            lines.push("**Fragilités objectivées :**".to_string());
            lines.push(String::new());
            lines.extend(fragilities.iter().map(|f| format!("- {f}")));
            lines.push(String::new());
        }

        lines.join("\n")
    }

    fn recommendations_section(&self) -> String {
        let mut lines = vec!["## 7. RECOMMANDATIONS".to_string(), String::new()];
        lines.extend(
            profile::recommendations(self.batteries)
                .iter()
                .enumerate()
                .map(|(i, r)| format!("{}. {r}", i + 1)),
        );
        lines.push(String::new());
        lines.join("\n")
    }

    fn conclusion_section(&self) -> String {
        let subject = if self.patient.first_name.is_empty() {
            "l'enfant"
        } else {
            self.patient.first_name.as_str()
        };

        let mut lines = vec![
            "## 8. CONCLUSION".to_string(),
            String::new(),
            format!(
                "L'évaluation neuropsychologique de {subject} met en évidence un profil cognitif \
                 et comportemental nuancé, avec des forces sur lesquelles s'appuyer et des \
                 fragilités nécessitant un accompagnement adapté."
            ),
            String::new(),
            "Les recommandations formulées visent à optimiser le développement de l'enfant \
             et à favoriser son épanouissement tant sur le plan scolaire que personnel."
                .to_string(),
            String::new(),
            "Un suivi régulier est préconisé afin d'ajuster les aménagements et accompagnements \
             en fonction de l'évolution de l'enfant."
                .to_string(),
            String::new(),
        ];

        if let Some(exam) = self.patient.exam_date {
            lines.push(format!("Fait le {}", format_date(exam)));
        }

        lines.join("\n")
    }
}

/// Compose the full report text.
pub fn generate_report(patient: &Patient, anamnesis: &Anamnesis, batteries: &Batteries) -> String {
    ReportEngine::new(patient, anamnesis, batteries).generate()
}

fn push_labeled(lines: &mut Vec<String>, label: &str, value: &str) {
    if !value.is_empty() {
        lines.push(format!("**{label} :** {value}"));
    }
}

fn push_all(lines: &mut Vec<String>, rows: &[&str]) {
    lines.extend(rows.iter().map(|r| r.to_string()));
}

fn index_row(score: &Score) -> String {
    format!(
        "| {} | {} | {} | {} |",
        score.name,
        score.whole_value().unwrap_or_default(),
        score.classification,
        score.percentile.as_deref().unwrap_or("-")
    )
}

fn push_table(lines: &mut Vec<String>, header: &[&str], collection: &ScoreCollection) {
    push_all(lines, header);
    for score in collection.valid_scores() {
        lines.push(format!(
            "| {} | {} | {} |",
            score.name,
            score.whole_value().unwrap_or_default(),
            score.classification
        ));
    }
}

/// One paragraph per index, titled with the catalogue's full index name.
fn push_narratives(lines: &mut Vec<String>, kind: BatteryKind, scores: &[&Score]) {
    let instrument = kind.instrument();
    for score in scores {
        let full_name = instrument
            .score_spec(&score.name)
            .map(|spec| spec.name)
            .unwrap_or_else(|| score.name.clone());
        lines.push(format!(
            "**{full_name} ({}) :** {}",
            score.name, score.interpretation
        ));
        lines.push(String::new());
    }
}

fn push_interpretations(lines: &mut Vec<String>, scores: &[&Score]) {
    lines.extend(
        scores
            .iter()
            .map(|s| format!("- {} : {}", s.name, s.interpretation)),
    );
}

fn significant(collection: &ScoreCollection, score_type: ScoreType) -> Vec<&Score> {
    collection
        .valid_scores()
        .filter(|s| s.value.is_some_and(|v| is_clinically_significant(v, score_type)))
        .collect()
}

fn joined_names(scores: &[Score]) -> String {
    scores
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn push_informant_analysis(lines: &mut Vec<String>, comparison: &InformantComparison) {
    let convergent = comparison.convergences().count();
    if convergent > 0 {
        lines.push(format!(
            "**Convergences** observées sur {convergent} échelle(s), \
             suggérant une cohérence inter-informateurs."
        ));
    }

    let divergent = comparison.divergence_count();
    if divergent > 0 {
        lines.push(String::new());
        lines.push(format!(
            "**Divergences** notables (écart ≥{DIVERGENCE_THRESHOLD:.0} points) sur {divergent} échelle(s) :"
        ));
        lines.extend(
            comparison
                .divergences()
                .map(|row| format!("- {} (écart de {:.0} points)", row.scale, row.gap)),
        );
        lines.push(String::new());
        lines.push(
            "Ces divergences peuvent refléter des manifestations contextuelles \
             différentes selon l'environnement (domicile vs école)."
                .to_string(),
        );
    }
}
