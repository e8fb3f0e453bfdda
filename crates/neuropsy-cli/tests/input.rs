use jiff::civil::date;

use neuropsy_cli::input::{EvaluationFile, load_evaluation};
use neuropsy_instruments::battery::BatteryKind;

const EVALUATION: &str = r#"{
  "patient": {
    "last_name": "Bernard",
    "first_name": "Lucas",
    "birth_date": "2016-02-20"
  },
  "anamnesis": { "referral_reason": "Troubles attentionnels" },
  "batteries": [
    {
      "battery": "wisc_v",
      "scores": [
        { "name": "ICV", "value": 104 },
        { "name": "IVT", "value": 82 },
        { "name": "IMT", "value": 90, "present": false }
      ]
    },
    {
      "battery": "brown",
      "scores": [{ "name": "Effort", "value": 95 }]
    }
  ]
}"#;

fn write_evaluation(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("evaluation.json");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn evaluation_file_builds_a_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_evaluation(&dir, EVALUATION);
    let today = date(2024, 5, 14);

    let mut session = load_evaluation(&path)
        .unwrap()
        .into_session(false, today)
        .unwrap();

    let patient = session.patient.as_ref().unwrap();
    assert_eq!(patient.exam_date, Some(today));
    assert_eq!(patient.age_at_exam(), Some(8));

    assert_eq!(
        session.completed_batteries(),
        vec![(BatteryKind::WiscV, 2), (BatteryKind::Brown, 1)]
    );
    let brown = session.batteries.get(BatteryKind::Brown).unwrap();
    assert_eq!(brown.get("Effort").unwrap().value, Some(80.0));

    let report = session.generate_report().unwrap();
    assert!(report.contains("### Motif de consultation\nTroubles attentionnels"));
    assert!(report.contains("| IVT | 82 | Moyen Faible | 9-24 |"));
    assert!(!report.contains("| IMT |"));
}

#[test]
fn strict_mode_rejects_out_of_range_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_evaluation(&dir, EVALUATION);

    let err = load_evaluation(&path)
        .unwrap()
        .into_session(true, date(2024, 5, 14))
        .unwrap_err();
    assert!(err.to_string().contains("Effort score 95 is outside range [20, 80]"));
}

#[test]
fn unknown_score_name_is_an_error() {
    let file: EvaluationFile = serde_json::from_str(
        r#"{ "batteries": [{ "battery": "tea_ch", "scores": [{ "name": "Inconnu", "value": 10 }] }] }"#,
    )
    .unwrap();
    assert!(file.into_session(false, date(2024, 1, 1)).is_err());
}

#[test]
fn invalid_json_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_evaluation(&dir, "{ not json");
    let err = load_evaluation(&path).unwrap_err();
    assert!(err.to_string().contains("invalid evaluation file"));
}
