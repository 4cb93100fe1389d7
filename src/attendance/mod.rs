pub mod handle;

use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;
use parking_lot::RwLock;

pub use vis_portal_shared::attendance::*;

use crate::student;
use vis_portal_shared::attendance::handle::AttendanceRow;

/// The static instance of attendance records.
pub static INSTANCE: Lazy<AttendanceManager> = Lazy::new(AttendanceManager::new);

pub struct AttendanceManager {
    pub records: RwLock<Vec<AttendanceRecord>>,
}

impl AttendanceManager {
    /// Read and create an attendance manager from `./data/attendance`.
    fn new() -> Self {
        #[cfg(not(test))]
        {
            use std::fs::{self, File};
            use std::io::Read;

            let _ = fs::create_dir_all("./data/attendance");

            let mut vec = Vec::new();
            for entry in fs::read_dir("./data/attendance")
                .into_iter()
                .flatten()
                .flatten()
            {
                if let Ok(record) = toml::from_str::<AttendanceRecord>(&{
                    let mut string = String::new();
                    let _ = File::open(entry.path())
                        .and_then(|mut file| file.read_to_string(&mut string));
                    string
                }) {
                    vec.push(record);
                }
            }

            Self {
                records: RwLock::new(vec),
            }
        }

        #[cfg(test)]
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Mark one student for one date.
    ///
    /// Find-or-insert runs under a single write lock, so concurrent marks
    /// for the same (student, date) pair can never produce two rows; the
    /// later mark wins on status.
    pub fn mark(
        &self,
        student_id: i32,
        date: NaiveDate,
        status: AttendanceStatus,
        marked_by: &str,
    ) -> AttendanceRecord {
        let mut records = self.records.write();
        Self::upsert(&mut records, student_id, date, status, marked_by)
    }

    /// Mark a whole set of students for one date under one lock section,
    /// so the batch applies as a unit.
    pub fn mark_many(
        &self,
        student_ids: &[i32],
        date: NaiveDate,
        status: AttendanceStatus,
        marked_by: &str,
    ) -> Vec<AttendanceRecord> {
        let mut records = self.records.write();
        student_ids
            .iter()
            .map(|&student_id| Self::upsert(&mut records, student_id, date, status, marked_by))
            .collect()
    }

    fn upsert(
        records: &mut Vec<AttendanceRecord>,
        student_id: i32,
        date: NaiveDate,
        status: AttendanceStatus,
        marked_by: &str,
    ) -> AttendanceRecord {
        if let Some(record) = records
            .iter_mut()
            .find(|r| r.student_id == student_id && r.date == date)
        {
            record.status = status;
            record.marked_by = Some(marked_by.to_string());
            save_record(record);
            return record.clone();
        }

        let record = AttendanceRecord {
            id: records.iter().map(|r| r.id).max().unwrap_or(0) + 1,
            student_id,
            date,
            status,
            marked_by: Some(marked_by.to_string()),
            created_at: Utc::now(),
        };

        save_record(&record);
        records.push(record.clone());
        record
    }

    /// One student's history, newest date first.
    pub fn history(&self, student_id: i32) -> Vec<AttendanceRecord> {
        let mut records: Vec<_> = self
            .records
            .read()
            .iter()
            .filter(|r| r.student_id == student_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        records
    }

    /// Push a record to this instance, only for testing.
    #[cfg(test)]
    pub fn push(&self, record: AttendanceRecord) {
        self.records.write().push(record);
    }

    #[cfg(test)]
    pub fn reset(&self) {
        self.records.write().clear();
    }
}

/// Records for a date joined with their student rows, student name
/// ascending. Rows whose student no longer exists are dropped, matching an
/// inner join; students without a row are absent by implication.
pub fn rows_on(date: NaiveDate) -> Vec<AttendanceRow> {
    let mut rows: Vec<_> = INSTANCE
        .records
        .read()
        .iter()
        .filter(|r| r.date == date)
        .filter_map(|r| {
            student::INSTANCE.get(r.student_id).map(|student| AttendanceRow {
                record: r.clone(),
                student,
            })
        })
        .collect();
    rows.sort_by(|a, b| a.student.name.cmp(&b.student.name));
    rows
}

/// Persist an attendance record.
pub(crate) fn save_record(_record: &AttendanceRecord) {
    #[cfg(not(test))]
    {
        let this = _record.clone();

        tokio::spawn(async move {
            use tokio::io::AsyncWriteExt;

            if let Ok(mut file) =
                tokio::fs::File::create(format!("./data/attendance/{}.toml", this.id)).await
            {
                let _ = file
                    .write_all(toml::to_string(&this).unwrap_or_default().as_bytes())
                    .await;
            }
        });
    }
}
