use crate::domain::models::user::{NewUser, User, UserPatch};
use crate::domain::ports::UserRepository;
use crate::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// In-memory user store. The mutex guards both the map and the id
/// counter so concurrent writers cannot race either; it is never held
/// across an await.
pub struct MemoryUserRepo {
    inner: Mutex<Inner>,
}

struct Inner {
    next_id: i64,
    users: HashMap<i64, User>,
}

impl MemoryUserRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                users: HashMap::new(),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, AppError> {
        self.inner.lock().map_err(|_| AppError::Internal)
    }
}

impl Default for MemoryUserRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepo {
    async fn create(&self, user: NewUser) -> Result<User, AppError> {
        let mut inner = self.lock()?;
        let id = inner.next_id;
        inner.next_id += 1;
        let user = User {
            id,
            username: user.username,
            password_hash: user.password_hash,
            email: user.email,
            organization: user.organization,
        };
        inner.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.lock()?.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .lock()?
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn update(&self, id: i64, patch: UserPatch) -> Result<User, AppError> {
        let mut inner = self.lock()?;
        let user = inner
            .users
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("User not found".into()))?;

        if let Some(username) = patch.username {
            user.username = username;
        }
        if let Some(password_hash) = patch.password_hash {
            user.password_hash = password_hash;
        }
        if let Some(email) = patch.email {
            user.email = Some(email);
        }
        if let Some(organization) = patch.organization {
            user.organization = Some(organization);
        }
        Ok(user.clone())
    }
}
