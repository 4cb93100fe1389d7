pub mod handle;

use chrono::Utc;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

pub use vis_portal_shared::admin::*;

use crate::Error;

/// The static instance of privileged accounts.
pub static INSTANCE: Lazy<AdminManager> = Lazy::new(AdminManager::new);

pub struct AdminManager {
    pub admins: RwLock<Vec<Admin>>,
}

impl AdminManager {
    /// Read and create an admin manager from `./data/admins`.
    fn new() -> Self {
        #[cfg(not(test))]
        {
            use std::fs::{self, File};
            use std::io::Read;

            let _ = fs::create_dir_all("./data/admins");

            let mut vec = Vec::new();
            for entry in fs::read_dir("./data/admins").into_iter().flatten().flatten() {
                if let Ok(admin) = toml::from_str::<Admin>(&{
                    let mut string = String::new();
                    let _ = File::open(entry.path())
                        .and_then(|mut file| file.read_to_string(&mut string));
                    string
                }) {
                    vec.push(admin);
                }
            }

            Self {
                admins: RwLock::new(vec),
            }
        }

        #[cfg(test)]
        Self {
            admins: RwLock::new(Vec::new()),
        }
    }

    /// Insert a new privileged account; email uniqueness is checked under
    /// the same write lock that assigns the id.
    pub fn insert(
        &self,
        user_id: Option<String>,
        name: String,
        email: lettre::Address,
        role: AdminRole,
    ) -> Result<Admin, Error> {
        let mut admins = self.admins.write();

        if admins.iter().any(|a| a.email == email) {
            return Err(Error::AdminEmailTaken);
        }

        let now = Utc::now();
        let admin = Admin {
            id: admins.iter().map(|a| a.id).max().unwrap_or(0) + 1,
            user_id,
            name,
            email,
            role,
            created_at: now,
            updated_at: now,
        };

        save_admin(&admin);
        admins.push(admin.clone());
        Ok(admin)
    }

    pub fn remove(&self, id: i32) -> Result<(), Error> {
        let mut admins = self.admins.write();
        let index = admins
            .iter()
            .position(|a| a.id == id)
            .ok_or(Error::AdminNotFound)?;

        admins.remove(index);
        remove_admin(id);
        Ok(())
    }

    /// All privileged accounts, name ascending.
    pub fn all(&self) -> Vec<Admin> {
        let mut admins = self.admins.read().clone();
        admins.sort_by(|a, b| a.name.cmp(&b.name));
        admins
    }

    pub fn by_user_id(&self, user_id: &str) -> Option<Admin> {
        self.admins
            .read()
            .iter()
            .find(|a| a.user_id.as_deref() == Some(user_id))
            .cloned()
    }

    /// Push an admin to this instance, only for testing.
    #[cfg(test)]
    pub fn push(&self, admin: Admin) {
        self.admins.write().push(admin);
    }

    #[cfg(test)]
    pub fn reset(&self) {
        self.admins.write().clear();
    }
}

/// Persist an admin record.
pub(crate) fn save_admin(_admin: &Admin) {
    #[cfg(not(test))]
    {
        let this = _admin.clone();

        tokio::spawn(async move {
            use tokio::io::AsyncWriteExt;

            if let Ok(mut file) =
                tokio::fs::File::create(format!("./data/admins/{}.toml", this.id)).await
            {
                let _ = file
                    .write_all(toml::to_string(&this).unwrap_or_default().as_bytes())
                    .await;
            }
        });
    }
}

pub(crate) fn remove_admin(_id: i32) {
    #[cfg(not(test))]
    {
        tokio::spawn(async move {
            let _ = tokio::fs::remove_file(format!("./data/admins/{}.toml", _id)).await;
        });
    }
}
