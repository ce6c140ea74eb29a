//! Session store
//!
//! The single authenticated-user session, held in memory and mirrored to a
//! pluggable storage backend. The store is an explicit object injected where
//! needed; there is no process-wide global.

use parking_lot::RwLock;
use shared::error::{AppError, AppResult};
use shared::models::{Role, SessionUser};
use std::path::{Path, PathBuf};

/// Where the session record is persisted between runs
pub trait SessionStorage: Send + Sync {
    fn load(&self) -> AppResult<Option<SessionUser>>;
    fn save(&self, user: &SessionUser) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

/// Single-file JSON persistence
///
/// The record lives at one path, pretty-printed for inspection. A missing
/// file means no session; a corrupt file is treated the same way rather than
/// blocking startup.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStorage for FileStorage {
    fn load(&self) -> AppResult<Option<SessionUser>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| AppError::storage(format!("Failed to read session file: {}", e)))?;
        match serde_json::from_str(&content) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Discarding unreadable session file");
                Ok(None)
            }
        }
    }

    fn save(&self, user: &SessionUser) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::storage(format!("Failed to create session dir: {}", e)))?;
        }
        let content = serde_json::to_string_pretty(user)
            .map_err(|e| AppError::storage(format!("Failed to encode session: {}", e)))?;
        std::fs::write(&self.path, content)
            .map_err(|e| AppError::storage(format!("Failed to write session file: {}", e)))?;
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!("Failed to remove session file: {}", e))),
        }
    }
}

/// In-memory persistence for tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: RwLock<Option<SessionUser>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> AppResult<Option<SessionUser>> {
        Ok(self.slot.read().clone())
    }

    fn save(&self, user: &SessionUser) -> AppResult<()> {
        *self.slot.write() = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        *self.slot.write() = None;
        Ok(())
    }
}

/// Authentication state derived from the session store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated(Role),
}

/// The one active session
///
/// State machine: `Unauthenticated -> Authenticated(role)` on
/// login/registration, `Authenticated(_) -> Unauthenticated` on logout.
/// There are no other transitions.
pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
    current: RwLock<Option<SessionUser>>,
}

impl SessionStore {
    /// Construct the store and restore any persisted session
    pub fn init(storage: impl SessionStorage + 'static) -> AppResult<Self> {
        let current = storage.load()?;
        if let Some(user) = &current {
            tracing::info!(email = %user.email, role = %user.role, "Restored session");
        }
        Ok(Self {
            storage: Box::new(storage),
            current: RwLock::new(current),
        })
    }

    /// Persist and activate a session (login or registration)
    pub fn set(&self, user: SessionUser) -> AppResult<()> {
        self.storage.save(&user)?;
        *self.current.write() = Some(user);
        Ok(())
    }

    /// Drop the session from memory and storage (logout)
    pub fn clear(&self) -> AppResult<()> {
        self.storage.clear()?;
        *self.current.write() = None;
        Ok(())
    }

    pub fn current(&self) -> Option<SessionUser> {
        self.current.read().clone()
    }

    /// Bearer token for the HTTP layer, if authenticated
    pub fn token(&self) -> Option<String> {
        self.current.read().as_ref().map(|u| u.access_token.clone())
    }

    pub fn auth_state(&self) -> AuthState {
        match self.current.read().as_ref() {
            Some(user) => AuthState::Authenticated(user.role),
            None => AuthState::Unauthenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
