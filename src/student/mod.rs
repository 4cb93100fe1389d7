pub mod handle;

use chrono::Utc;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

pub use vis_portal_shared::student::*;

use crate::Error;

/// The static instance of student registrations.
pub static INSTANCE: Lazy<StudentManager> = Lazy::new(StudentManager::new);

pub struct StudentManager {
    pub students: RwLock<Vec<RwLock<Student>>>,
}

impl StudentManager {
    /// Read and create a student manager from `./data/students`.
    fn new() -> Self {
        #[cfg(not(test))]
        {
            use std::fs::{self, File};
            use std::io::Read;

            let _ = fs::create_dir_all("./data/students");

            let mut vec = Vec::new();
            for entry in fs::read_dir("./data/students").into_iter().flatten().flatten() {
                if let Ok(student) = toml::from_str::<Student>(&{
                    let mut string = String::new();
                    let _ = File::open(entry.path())
                        .and_then(|mut file| file.read_to_string(&mut string));
                    string
                }) {
                    vec.push(RwLock::new(student));
                }
            }

            Self {
                students: RwLock::new(vec),
            }
        }

        #[cfg(test)]
        Self {
            students: RwLock::new(Vec::new()),
        }
    }

    /// Insert a new registration.
    ///
    /// Uniqueness of email and registration number is checked under the same
    /// write lock that assigns the id, so a duplicate insert leaves the
    /// table unchanged.
    pub fn insert(
        &self,
        user_id: Option<String>,
        name: String,
        email: lettre::Address,
        reg_no: String,
        batch: Option<String>,
        status: StudentStatus,
    ) -> Result<Student, Error> {
        let mut students = self.students.write();

        if students.iter().any(|s| s.read().email == email) {
            return Err(Error::StudentEmailTaken);
        }
        if students.iter().any(|s| s.read().reg_no == reg_no) {
            return Err(Error::RegNoTaken);
        }

        let now = Utc::now();
        let student = Student {
            id: students.iter().map(|s| s.read().id).max().unwrap_or(0) + 1,
            user_id,
            name,
            email,
            reg_no,
            batch: batch.unwrap_or_else(|| DEFAULT_BATCH.to_string()),
            status,
            created_at: now,
            updated_at: now,
        };

        save_student(&student);
        students.push(RwLock::new(student.clone()));
        Ok(student)
    }

    /// Move a registration to a new status.
    ///
    /// Allowed transitions: pending to approved or rejected, approved to
    /// rejected. Re-asserting the current status is a no-op; everything
    /// else fails and leaves the record unchanged.
    pub fn set_status(&self, id: i32, status: StudentStatus) -> Result<Student, Error> {
        let students = self.students.read();
        let lock = students
            .iter()
            .find(|s| s.read().id == id)
            .ok_or(Error::StudentNotFound)?;

        let mut student = lock.write();
        if student.status == status {
            return Ok(student.clone());
        }
        if !student.status.can_become(status) {
            return Err(Error::StatusTransition(student.status, status));
        }

        student.status = status;
        student.updated_at = Utc::now();
        save_student(&student);
        Ok(student.clone())
    }

    /// Merge profile updates into a registration.
    pub fn edit(
        &self,
        id: i32,
        descriptor: handle::EditStudentDescriptor,
    ) -> Result<Student, Error> {
        let students = self.students.read();

        if let Some(ref email) = descriptor.email {
            if students.iter().any(|s| {
                let s = s.read();
                s.id != id && &s.email == email
            }) {
                return Err(Error::StudentEmailTaken);
            }
        }
        if let Some(ref reg_no) = descriptor.reg_no {
            if students.iter().any(|s| {
                let s = s.read();
                s.id != id && &s.reg_no == reg_no
            }) {
                return Err(Error::RegNoTaken);
            }
        }

        let lock = students
            .iter()
            .find(|s| s.read().id == id)
            .ok_or(Error::StudentNotFound)?;

        let mut student = lock.write();
        if let Some(name) = descriptor.name {
            student.name = name;
        }
        if let Some(email) = descriptor.email {
            student.email = email;
        }
        if let Some(reg_no) = descriptor.reg_no {
            student.reg_no = reg_no;
        }
        if let Some(batch) = descriptor.batch {
            student.batch = batch;
        }
        student.updated_at = Utc::now();
        save_student(&student);
        Ok(student.clone())
    }

    /// Remove exactly one registration. Attendance rows are not cascaded.
    pub fn remove(&self, id: i32) -> Result<(), Error> {
        let mut students = self.students.write();
        let index = students
            .iter()
            .position(|s| s.read().id == id)
            .ok_or(Error::StudentNotFound)?;

        students.remove(index);
        remove_student(id);
        Ok(())
    }

    pub fn get(&self, id: i32) -> Option<Student> {
        self.students
            .read()
            .iter()
            .find(|s| s.read().id == id)
            .map(|s| s.read().clone())
    }

    pub fn by_user_id(&self, user_id: &str) -> Option<Student> {
        self.students
            .read()
            .iter()
            .find(|s| s.read().user_id.as_deref() == Some(user_id))
            .map(|s| s.read().clone())
    }

    /// All registrations, name ascending.
    pub fn all(&self) -> Vec<Student> {
        let mut students: Vec<_> = self
            .students
            .read()
            .iter()
            .map(|s| s.read().clone())
            .collect();
        students.sort_by(|a, b| a.name.cmp(&b.name));
        students
    }

    /// Registrations awaiting review, oldest first.
    pub fn pending(&self) -> Vec<Student> {
        let mut students: Vec<_> = self
            .students
            .read()
            .iter()
            .map(|s| s.read().clone())
            .filter(|s| s.status == StudentStatus::Pending)
            .collect();
        students.sort_by_key(|s| s.created_at);
        students
    }

    pub fn count(&self) -> usize {
        self.students.read().len()
    }

    /// Ids of every approved registration, the default bulk-mark target.
    pub fn approved_ids(&self) -> Vec<i32> {
        self.students
            .read()
            .iter()
            .map(|s| s.read().clone())
            .filter(|s| s.status == StudentStatus::Approved)
            .map(|s| s.id)
            .collect()
    }

    /// Push a student to this instance, only for testing.
    #[cfg(test)]
    pub fn push(&self, student: Student) {
        self.students.write().push(RwLock::new(student));
    }

    #[cfg(test)]
    pub fn reset(&self) {
        self.students.write().clear();
    }
}

/// Persist a student record.
pub(crate) fn save_student(_student: &Student) {
    #[cfg(not(test))]
    {
        let this = _student.clone();

        tokio::spawn(async move {
            use tokio::io::AsyncWriteExt;

            if let Ok(mut file) =
                tokio::fs::File::create(format!("./data/students/{}.toml", this.id)).await
            {
                let _ = file
                    .write_all(toml::to_string(&this).unwrap_or_default().as_bytes())
                    .await;
            }
        });
    }
}

pub(crate) fn remove_student(_id: i32) {
    #[cfg(not(test))]
    {
        tokio::spawn(async move {
            let _ = tokio::fs::remove_file(format!("./data/students/{}.toml", _id)).await;
        });
    }
}
