pub mod handle;

use axum::{async_trait, http::request::Parts};
use chrono::Utc;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

pub use vis_portal_shared::account::*;

use crate::{admin, student, Error};

/// The static instance of identity records.
pub static INSTANCE: Lazy<UserManager> = Lazy::new(UserManager::new);

/// Caller identity taken from the provider-injected headers, with its role
/// resolved once at extraction time and reused by every handler.
pub struct AuthContext {
    /// Subject identifier of this caller.
    pub user_id: String,
    pub email: Option<lettre::Address>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub role: ResolvedRole,
}

/// Result of the role lookup: the matching companion record, if any.
pub enum ResolvedRole {
    Admin(admin::Admin),
    Student(student::Student),
    Pending,
}

impl AuthContext {
    pub fn role(&self) -> Role {
        match self.role {
            ResolvedRole::Admin(_) => Role::Admin,
            ResolvedRole::Student(_) => Role::Student,
            ResolvedRole::Pending => Role::Pending,
        }
    }

    /// The admin record behind this caller.
    ///
    /// Fails before any handler side effect when the caller is not listed
    /// in the admins table.
    pub fn require_admin(&self) -> Result<&admin::Admin, Error> {
        match &self.role {
            ResolvedRole::Admin(admin) => Ok(admin),
            _ => Err(Error::AdminRequired),
        }
    }
}

#[async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthContext {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        fn header(parts: &Parts, name: &str) -> Option<String> {
            parts
                .headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        }

        let user_id = header(parts, "X-User-Id").ok_or(Error::IdentityMissing)?;

        // admin table wins over student; neither means the caller is still
        // awaiting approval
        let role = if let Some(admin) = admin::INSTANCE.by_user_id(&user_id) {
            ResolvedRole::Admin(admin)
        } else if let Some(student) = student::INSTANCE.by_user_id(&user_id) {
            ResolvedRole::Student(student)
        } else {
            ResolvedRole::Pending
        };

        Ok(Self {
            email: header(parts, "X-User-Email").and_then(|value| value.parse().ok()),
            first_name: header(parts, "X-User-First-Name"),
            last_name: header(parts, "X-User-Last-Name"),
            profile_image_url: header(parts, "X-User-Avatar"),
            user_id,
            role,
        })
    }
}

/// A simple identity store.
pub struct UserManager {
    users: RwLock<Vec<RwLock<User>>>,
    /// An index cache for getting index from an id.
    index: DashMap<String, usize>,
}

impl UserManager {
    /// Read and create a user manager from `./data/users`.
    pub fn new() -> Self {
        #[cfg(not(test))]
        {
            use std::fs::{self, File};
            use std::io::Read;

            let _ = fs::create_dir_all("./data/users");

            let mut vec = Vec::new();
            let index = DashMap::new();
            let mut i = 0;
            for entry in fs::read_dir("./data/users").into_iter().flatten().flatten() {
                if let Ok(user) = toml::from_str::<User>(&{
                    let mut string = String::new();
                    let _ = File::open(entry.path())
                        .and_then(|mut file| file.read_to_string(&mut string));
                    string
                }) {
                    index.insert(user.id.clone(), i);
                    vec.push(RwLock::new(user));
                    i += 1;
                }
            }

            Self {
                users: RwLock::new(vec),
                index,
            }
        }

        #[cfg(test)]
        Self {
            users: RwLock::new(Vec::new()),
            index: DashMap::new(),
        }
    }

    /// Insert or refresh the record for an authenticated identity and
    /// return the stored row.
    ///
    /// The whole operation happens under one write lock so two concurrent
    /// first logins of the same identity cannot produce duplicate rows.
    pub fn upsert(&self, ctx: &AuthContext) -> User {
        let mut users = self.users.write();

        let index = self.index.get(&ctx.user_id).map(|e| *e.value());
        if let Some(lock) = index.and_then(|i| users.get_mut(i)) {
            let user = lock.get_mut();
            user.email = ctx.email.clone();
            user.first_name = ctx.first_name.clone();
            user.last_name = ctx.last_name.clone();
            user.profile_image_url = ctx.profile_image_url.clone();
            user.updated_at = Utc::now();
            save_user(user);
            return user.clone();
        }

        let now = Utc::now();
        let user = User {
            id: ctx.user_id.clone(),
            email: ctx.email.clone(),
            first_name: ctx.first_name.clone(),
            last_name: ctx.last_name.clone(),
            profile_image_url: ctx.profile_image_url.clone(),
            created_at: now,
            updated_at: now,
        };

        save_user(&user);
        self.index.insert(user.id.clone(), users.len());
        users.push(RwLock::new(user.clone()));
        user
    }

    /// Get a user by provider subject id.
    pub fn get(&self, id: &str) -> Option<User> {
        let index = *self.index.get(id)?;
        self.users.read().get(index).map(|user| user.read().clone())
    }

    /// Push a user to this instance, only for testing.
    #[cfg(test)]
    pub fn push(&self, user: User) {
        let mut users = self.users.write();
        self.index.insert(user.id.clone(), users.len());
        users.push(RwLock::new(user));
    }

    #[cfg(test)]
    pub fn reset(&self) {
        self.users.write().clear();
        self.index.clear();
    }
}

/// Persist a user record.
pub(crate) fn save_user(_user: &User) {
    #[cfg(not(test))]
    {
        let this = _user.clone();

        tokio::spawn(async move {
            use tokio::io::AsyncWriteExt;

            if let Ok(mut file) =
                tokio::fs::File::create(format!("./data/users/{}.toml", this.id)).await
            {
                let _ = file
                    .write_all(toml::to_string(&this).unwrap_or_default().as_bytes())
                    .await;
            }
        });
    }
}
