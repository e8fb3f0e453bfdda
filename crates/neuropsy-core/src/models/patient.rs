use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Patient {
    pub last_name: String,
    pub first_name: String,
    pub birth_date: Option<Date>,
    pub exam_date: Option<Date>,
    /// School grade ("classe").
    pub grade: String,
    pub school: String,
}

impl Patient {
    /// Age in whole years on the exam date.
    ///
    /// Year difference, minus one when the birthday has not yet come round
    /// in the exam year.
    pub fn age_at_exam(&self) -> Option<i16> {
        let (birth, exam) = (self.birth_date?, self.exam_date?);
        let mut age = exam.year() - birth.year();
        if (exam.month(), exam.day()) < (birth.month(), birth.day()) {
            age -= 1;
        }
        Some(age)
    }

    /// "First Last", trimmed when either part is missing.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
