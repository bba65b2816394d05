use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// A single day's attendance entry for one employee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub id: u64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Wire spellings are exactly "Present" / "Absent"; the backend rejects
/// anything else with a 400.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// Mark payload for `POST /employees/{id}/attendance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAttendance {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}
