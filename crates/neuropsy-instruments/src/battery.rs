//! The fixed set of batteries an evaluation can collect scores for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Instrument;
use crate::error::InstrumentError;
use crate::instruments::brown::Brown;
use crate::instruments::conners3::{Conners3, Informant};
use crate::instruments::kabc_ii::KabcII;
use crate::instruments::nepsy_ii::NepsyII;
use crate::instruments::tea_ch::TeaCh;
use crate::instruments::wisc_v::WiscV;
use crate::score::{Score, ScoreCollection};
use crate::scoring::ScoreEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BatteryKind {
    WiscV,
    KabcIi,
    TeaCh,
    NepsyIi,
    Brown,
    ConnersParent,
    ConnersTeacher,
}

impl BatteryKind {
    /// Every battery, in the order reports walk them.
    pub const ALL: [BatteryKind; 7] = [
        BatteryKind::WiscV,
        BatteryKind::KabcIi,
        BatteryKind::TeaCh,
        BatteryKind::NepsyIi,
        BatteryKind::Brown,
        BatteryKind::ConnersParent,
        BatteryKind::ConnersTeacher,
    ];

    pub fn id(self) -> &'static str {
        match self {
            BatteryKind::WiscV => "wisc_v",
            BatteryKind::KabcIi => "kabc_ii",
            BatteryKind::TeaCh => "tea_ch",
            BatteryKind::NepsyIi => "nepsy_ii",
            BatteryKind::Brown => "brown",
            BatteryKind::ConnersParent => "conners_parent",
            BatteryKind::ConnersTeacher => "conners_teacher",
        }
    }

    /// Short name for completion listings.
    pub fn short_name(self) -> &'static str {
        match self {
            BatteryKind::WiscV => "WISC-V",
            BatteryKind::KabcIi => "KABC-II",
            BatteryKind::TeaCh => "TEA-Ch",
            BatteryKind::NepsyIi => "NEPSY-II",
            BatteryKind::Brown => "Brown",
            BatteryKind::ConnersParent => "Conners Parent",
            BatteryKind::ConnersTeacher => "Conners Enseignant",
        }
    }

    pub fn instrument(self) -> Box<dyn Instrument> {
        match self {
            BatteryKind::WiscV => Box::new(WiscV),
            BatteryKind::KabcIi => Box::new(KabcII),
            BatteryKind::TeaCh => Box::new(TeaCh),
            BatteryKind::NepsyIi => Box::new(NepsyII),
            BatteryKind::Brown => Box::new(Brown),
            BatteryKind::ConnersParent => Box::new(Conners3 {
                informant: Informant::Parent,
            }),
            BatteryKind::ConnersTeacher => Box::new(Conners3 {
                informant: Informant::Teacher,
            }),
        }
    }
}

impl fmt::Display for BatteryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BatteryKind {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BatteryKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| InstrumentError::UnknownInstrument(s.to_string()))
    }
}

/// One slot per battery kind. A slot stays `None` until a score is
/// recorded for that battery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Batteries {
    pub wisc_v: Option<ScoreCollection>,
    pub kabc_ii: Option<ScoreCollection>,
    pub tea_ch: Option<ScoreCollection>,
    pub nepsy_ii: Option<ScoreCollection>,
    pub brown: Option<ScoreCollection>,
    pub conners_parent: Option<ScoreCollection>,
    pub conners_teacher: Option<ScoreCollection>,
}

impl Batteries {
    fn slot(&self, kind: BatteryKind) -> &Option<ScoreCollection> {
        match kind {
            BatteryKind::WiscV => &self.wisc_v,
            BatteryKind::KabcIi => &self.kabc_ii,
            BatteryKind::TeaCh => &self.tea_ch,
            BatteryKind::NepsyIi => &self.nepsy_ii,
            BatteryKind::Brown => &self.brown,
            BatteryKind::ConnersParent => &self.conners_parent,
            BatteryKind::ConnersTeacher => &self.conners_teacher,
        }
    }

    fn slot_mut(&mut self, kind: BatteryKind) -> &mut Option<ScoreCollection> {
        match kind {
            BatteryKind::WiscV => &mut self.wisc_v,
            BatteryKind::KabcIi => &mut self.kabc_ii,
            BatteryKind::TeaCh => &mut self.tea_ch,
            BatteryKind::NepsyIi => &mut self.nepsy_ii,
            BatteryKind::Brown => &mut self.brown,
            BatteryKind::ConnersParent => &mut self.conners_parent,
            BatteryKind::ConnersTeacher => &mut self.conners_teacher,
        }
    }

    pub fn get(&self, kind: BatteryKind) -> Option<&ScoreCollection> {
        self.slot(kind).as_ref()
    }

    /// The battery's collection, only if it holds at least one valid score.
    pub fn completed(&self, kind: BatteryKind) -> Option<&ScoreCollection> {
        self.get(kind).filter(|c| c.has_scores())
    }

    pub fn get_or_create(&mut self, kind: BatteryKind) -> &mut ScoreCollection {
        self.slot_mut(kind)
            .get_or_insert_with(|| ScoreCollection::new(kind.instrument().name()))
    }

    pub fn insert(&mut self, kind: BatteryKind, collection: ScoreCollection) {
        *self.slot_mut(kind) = Some(collection);
    }

    /// Completed batteries in [`BatteryKind::ALL`] order.
    pub fn iter_completed(&self) -> impl Iterator<Item = (BatteryKind, &ScoreCollection)> {
        BatteryKind::ALL
            .into_iter()
            .filter_map(|kind| self.completed(kind).map(|c| (kind, c)))
    }

    pub fn has_any_scores(&self) -> bool {
        self.iter_completed().next().is_some()
    }

    /// Apply one entry to a battery.
    ///
    /// The score type and domain phrase come from the instrument catalogue,
    /// and the value is rounded to the catalogue step and clamped to its
    /// range. An entry without its `present` flag removes the score.
    /// Returns the stored score.
    pub fn record(
        &mut self,
        kind: BatteryKind,
        entry: &ScoreEntry,
    ) -> Result<Option<&Score>, InstrumentError> {
        let instrument = kind.instrument();
        let spec = instrument.score_spec(&entry.subscale_id).ok_or_else(|| {
            InstrumentError::UnknownSubscale {
                instrument_id: instrument.id().to_string(),
                subscale_id: entry.subscale_id.clone(),
            }
        })?;

        let collection = self.get_or_create(kind);
        if !entry.present {
            collection.remove(&spec.id);
            return Ok(None);
        }

        let value = spec.range.clamp(entry.value);
        collection.add(Score::new(spec.id.clone(), value, spec.score_type, spec.domain));
        Ok(collection.get(&spec.id))
    }
}
