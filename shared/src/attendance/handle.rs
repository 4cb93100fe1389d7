use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendanceDescriptor {
    pub student_id: i32,
    pub date: NaiveDate,
    pub status: super::AttendanceStatus,
}

/// Marks a whole set of students for one date in a single operation.
/// Omitting `student_ids` targets every approved student.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BulkMarkDescriptor {
    pub date: NaiveDate,
    pub status: super::AttendanceStatus,
    #[serde(default)]
    pub student_ids: Option<Vec<i32>>,
}

/// An attendance record joined with the student it belongs to.
#[derive(Serialize, Deserialize, Debug)]
pub struct AttendanceRow {
    #[serde(flatten)]
    pub record: super::AttendanceRecord,
    pub student: crate::student::Student,
}
