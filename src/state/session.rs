//! The credential store: persistence of the session across page reloads.
//!
//! A session is two localStorage entries: the raw bearer token and the
//! JSON-encoded user profile. The invariant is that they are set and
//! cleared together: a read that finds only one of them, or a user entry
//! that no longer parses, is normalized to "no session" (fail closed,
//! never an error to the caller).
//!
//! The store is an owned, injectable object over a [`StorageBackend`], so
//! tests construct it fresh over [`MemoryStorage`] instead of touching a
//! global.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::rc::Rc;

use crate::net::types::User;
use crate::util::storage::{StorageBackend, StorageError};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Locally cached proof of identity for the current browser context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Owns the persisted session. Cheap to clone (shares the backend).
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn StorageBackend>,
}

impl SessionStore {
    pub fn new(backend: Rc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Store backed by the browser's localStorage. `None` outside a
    /// browser context (SSR render pass, storage disabled); callers
    /// treat that as "still checking", not as signed out.
    #[cfg(feature = "hydrate")]
    pub fn from_browser() -> Option<Self> {
        crate::util::storage::LocalStorage::new().map(|ls| Self::new(Rc::new(ls)))
    }

    #[cfg(not(feature = "hydrate"))]
    pub fn from_browser() -> Option<Self> {
        None
    }

    /// Persist both halves of the session. A write failure is fatal to
    /// the login flow; the caller surfaces it to the user.
    pub fn save(&self, token: &str, user: &User) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(user).map_err(|_| StorageError::WriteFailed {
            key: USER_KEY.to_owned(),
        })?;
        self.backend.set(TOKEN_KEY, token)?;
        self.backend.set(USER_KEY, &encoded)?;
        Ok(())
    }

    /// Read the persisted session. Partial or corrupt storage reads as
    /// `None`; this never errors.
    pub fn load(&self) -> Option<Session> {
        let token = self.backend.get(TOKEN_KEY)?;
        let raw_user = self.backend.get(USER_KEY)?;
        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => Some(Session { token, user }),
            Err(err) => {
                log::warn!("session: stored user profile is corrupt ({err}); treating as signed out");
                None
            }
        }
    }

    /// Remove both entries. Idempotent.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }
}

/// Interpret a storage-change notification from another tab: only removal
/// of the token entry counts as an external logout. New tokens never
/// propagate across tabs, only invalidation does.
pub fn is_external_logout(key: Option<&str>, new_value: Option<&str>) -> bool {
    key == Some(TOKEN_KEY) && new_value.is_none()
}

/// Listen for `storage` events from other tabs and drop the in-memory
/// session when the token is cleared elsewhere. The listener lives for
/// the lifetime of the page.
#[cfg(feature = "hydrate")]
pub fn watch_external_logout(auth: leptos::prelude::RwSignal<crate::state::auth::AuthState>) {
    use leptos::prelude::Update;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(
        move |event: web_sys::StorageEvent| {
            let key = event.key();
            let new_value = event.new_value();
            if is_external_logout(key.as_deref(), new_value.as_deref()) {
                log::info!("session: token cleared in another tab; signing out locally");
                auth.update(|state| state.session = None);
            }
        },
    );
    let _ = window
        .add_event_listener_with_callback("storage", callback.as_ref().unchecked_ref());
    callback.forget();
}
