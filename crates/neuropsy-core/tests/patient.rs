use jiff::civil::date;
use neuropsy_core::files;
use neuropsy_core::models::anamnesis::Anamnesis;
use neuropsy_core::models::patient::Patient;

fn patient(birth: jiff::civil::Date, exam: jiff::civil::Date) -> Patient {
    Patient {
        birth_date: Some(birth),
        exam_date: Some(exam),
        ..Patient::default()
    }
}

#[test]
fn age_counts_completed_years() {
    assert_eq!(
        patient(date(2015, 3, 10), date(2024, 3, 10)).age_at_exam(),
        Some(9)
    );
    assert_eq!(
        patient(date(2015, 3, 10), date(2024, 3, 9)).age_at_exam(),
        Some(8)
    );
    assert_eq!(
        patient(date(2015, 12, 31), date(2024, 1, 1)).age_at_exam(),
        Some(8)
    );
}

#[test]
fn age_needs_both_dates() {
    let mut p = Patient {
        birth_date: Some(date(2015, 3, 10)),
        ..Patient::default()
    };
    assert_eq!(p.age_at_exam(), None);
    p.birth_date = None;
    p.exam_date = Some(date(2024, 1, 1));
    assert_eq!(p.age_at_exam(), None);
}

#[test]
fn leap_day_birthday() {
    // Born Feb 29: not yet a year older on Feb 28 of a non-leap year.
    assert_eq!(
        patient(date(2016, 2, 29), date(2025, 2, 28)).age_at_exam(),
        Some(8)
    );
    assert_eq!(
        patient(date(2016, 2, 29), date(2025, 3, 1)).age_at_exam(),
        Some(9)
    );
}

#[test]
fn full_name_is_trimmed() {
    let mut p = Patient {
        first_name: "Alice".to_string(),
        ..Patient::default()
    };
    assert_eq!(p.full_name(), "Alice");
    p.last_name = "Martin".to_string();
    assert_eq!(p.full_name(), "Alice Martin");
    assert_eq!(Patient::default().full_name(), "");
}

#[test]
fn anamnesis_content_detection() {
    let mut anamnesis = Anamnesis::default();
    assert!(!anamnesis.has_content());
    assert!(!anamnesis.has_observations());

    anamnesis.fatigability = "Fatigue en fin de séance".to_string();
    assert!(anamnesis.has_content());
    assert!(anamnesis.has_observations());
    assert!(!anamnesis.has_developmental_history());

    let referral_only = Anamnesis {
        referral_reason: "Difficultés d'attention".to_string(),
        ..Anamnesis::default()
    };
    assert!(referral_only.has_content());
    assert!(!referral_only.has_observations());
}

#[test]
fn report_file_names_replace_spaces() {
    let p = Patient {
        last_name: "De La Tour".to_string(),
        first_name: "Marie Anne".to_string(),
        ..Patient::default()
    };
    assert_eq!(files::report_markdown(&p), "rapport_De_La_Tour_Marie_Anne.md");
    assert_eq!(files::report_docx(&p), "rapport_De_La_Tour_Marie_Anne.docx");
}

#[test]
fn patient_deserializes_iso_dates_and_defaults() {
    let p: Patient = serde_json::from_str(
        r#"{"first_name": "Alice", "birth_date": "2014-05-02", "exam_date": "2024-04-30"}"#,
    )
    .unwrap();
    assert_eq!(p.last_name, "");
    assert_eq!(p.age_at_exam(), Some(9));
}
