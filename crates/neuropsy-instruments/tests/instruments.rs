use neuropsy_instruments::battery::BatteryKind;
use neuropsy_instruments::instruments::wisc_v::{self, WiscV};
use neuropsy_instruments::scoring::{ScoreEntry, ScoreType};
use neuropsy_instruments::{Instrument, all_instruments, get_instrument};

#[test]
fn every_battery_has_an_instrument_with_matching_id() {
    let instruments = all_instruments();
    assert_eq!(instruments.len(), BatteryKind::ALL.len());
    for kind in BatteryKind::ALL {
        assert_eq!(kind.instrument().id(), kind.id());
        assert_eq!(kind.id().parse::<BatteryKind>().unwrap(), kind);
    }
    assert!("bayley".parse::<BatteryKind>().is_err());
    assert!(get_instrument("nepsy_ii").is_some());
    assert!(get_instrument("wais_iv").is_none());
}

#[test]
fn wisc_indices_resolve_to_standard_scores() {
    for idx in wisc_v::REPORTED_INDICES
        .iter()
        .chain(wisc_v::COMPLEMENTARY_INDICES.iter())
    {
        let spec = WiscV.score_spec(idx).unwrap();
        assert_eq!(spec.score_type, ScoreType::Standard, "{idx}");
        assert!(!spec.domain.is_empty());
    }

    let icv = WiscV.score_spec("ICV").unwrap();
    assert_eq!(icv.name, "Indice de Compréhension Verbale");
    assert_eq!(icv.range.min, 40.0);
    assert_eq!(icv.range.max, 160.0);
}

#[test]
fn wisc_subtests_are_prefixed_by_index() {
    let spec = WiscV
        .score_spec(&wisc_v::subtest_id("IMT", "Mémoire des Chiffres"))
        .unwrap();
    assert_eq!(spec.score_type, ScoreType::Scaled);
    assert_eq!(spec.domain, "mémoire des chiffres");
    assert!(WiscV.score_spec("Mémoire des Chiffres").is_none());

    let ids = WiscV.score_ids();
    assert_eq!(ids[0], "ICV");
    assert_eq!(ids[1], "ICV_Similitudes");
    assert_eq!(ids.len(), 11 + 15);
}

#[test]
fn conners_forms_share_scales() {
    let parent = BatteryKind::ConnersParent.instrument();
    let teacher = BatteryKind::ConnersTeacher.instrument();
    assert_eq!(parent.score_ids(), teacher.score_ids());
    assert_eq!(parent.score_ids().len(), 10);
    assert_eq!(teacher.name(), "Conners-3 Enseignant");
    assert_eq!(
        parent.score_spec("Inattention").map(|s| s.score_type),
        Some(ScoreType::TScore)
    );
}

#[test]
fn validation_flags_out_of_range_entries() {
    let brown = BatteryKind::Brown.instrument();
    let entries = [
        ScoreEntry::present("Activation", 55.0),
        ScoreEntry::present("Mémoire", 85.0),
        ScoreEntry::present("Inconnu", 500.0),
    ];

    let errors = brown.validate_scores(&entries);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].subscale_id, "Mémoire");
    assert_eq!(errors[0].expected_range.max, 80.0);
    assert!(errors[0].message.contains("outside range [20, 80]"));

    assert!(brown.ensure_in_range(&entries[..1]).is_ok());
    assert!(brown.ensure_in_range(&entries).is_err());
}

#[test]
fn questionnaire_domains_carry_no_description() {
    for kind in [
        BatteryKind::Brown,
        BatteryKind::ConnersParent,
        BatteryKind::ConnersTeacher,
    ] {
        let instrument = kind.instrument();
        for domain in instrument.domains() {
            assert_eq!(domain.description, None, "{}", instrument.name());
        }
    }
}
