use leptos::*;
use std::rc::Rc;

use crate::utils::storage::{BrowserStorage, KeyValueStore, MemoryStorage};

pub const TOKEN_KEY: &str = "@CheckVisit:token";
pub const SELLER_ID_KEY: &str = "@CheckVisit:sellerId";
pub const SELLER_NAME_KEY: &str = "@CheckVisit:sellerName";
pub const ROLE_KEY: &str = "@CheckVisit:role";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Seller,
}

impl Role {
    /// Case-insensitive; anything that is not `ADMIN` is a seller.
    pub fn parse(raw: &str) -> Role {
        if raw.trim().eq_ignore_ascii_case("admin") {
            Role::Admin
        } else {
            Role::Seller
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Seller => "SELLER",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub seller_id: String,
    pub seller_name: String,
    pub role: Role,
}

/// Typed view over the persisted session keys.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage))
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::new()))
    }

    fn non_empty(&self, key: &str) -> Option<String> {
        self.storage.get(key).filter(|value| !value.is_empty())
    }

    pub fn token(&self) -> Option<String> {
        self.non_empty(TOKEN_KEY)
    }

    pub fn seller_id(&self) -> Option<String> {
        self.non_empty(SELLER_ID_KEY)
    }

    pub fn seller_name(&self) -> Option<String> {
        self.non_empty(SELLER_NAME_KEY)
    }

    pub fn role(&self) -> Option<Role> {
        self.non_empty(ROLE_KEY).map(|raw| Role::parse(&raw))
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.role() == Some(Role::Admin)
    }

    pub fn current(&self) -> Option<Session> {
        let token = self.token()?;
        Some(Session {
            token,
            seller_id: self.seller_id().unwrap_or_default(),
            seller_name: self.seller_name().unwrap_or_default(),
            role: self.role().unwrap_or(Role::Seller),
        })
    }

    /// All or nothing: a partial write leaves no session behind.
    pub fn save(&self, session: &Session) -> Result<(), String> {
        let written = self.write_all(session);
        match &written {
            Ok(()) => log::debug!("session stored for role {}", session.role.as_str()),
            Err(err) => {
                log::error!("failed to store session: {}", err);
                self.clear();
            }
        }
        written
    }

    fn write_all(&self, session: &Session) -> Result<(), String> {
        self.storage.set(TOKEN_KEY, &session.token)?;
        self.storage.set(SELLER_ID_KEY, &session.seller_id)?;
        self.storage.set(SELLER_NAME_KEY, &session.seller_name)?;
        self.storage.set(ROLE_KEY, session.role.as_str())
    }

    pub fn clear(&self) {
        for key in [TOKEN_KEY, SELLER_ID_KEY, SELLER_NAME_KEY, ROLE_KEY] {
            self.storage.remove(key);
        }
    }
}

pub fn provide_session(store: SessionStore) {
    provide_context(store);
}

/// The session provided at the root, or the browser-backed one.
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().unwrap_or_else(SessionStore::browser)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(role: Role) -> Session {
        Session {
            token: "jwt-token".into(),
            seller_id: "s1".into(),
            seller_name: "Ana".into(),
            role,
        }
    }

    #[test]
    fn role_parse_is_case_insensitive() {
        assert_eq!(Role::parse("ADMIN"), Role::Admin);
        assert_eq!(Role::parse(" admin "), Role::Admin);
        assert_eq!(Role::parse("Seller"), Role::Seller);
        assert_eq!(Role::parse("manager"), Role::Seller);
    }

    #[test]
    fn save_then_read_back() {
        let store = SessionStore::in_memory();
        assert!(!store.is_authenticated());
        store.save(&sample(Role::Admin)).unwrap();
        assert!(store.is_authenticated());
        assert!(store.is_admin());
        assert_eq!(store.current(), Some(sample(Role::Admin)));
    }

    #[test]
    fn clear_removes_every_key() {
        let storage = Rc::new(MemoryStorage::new());
        let store = SessionStore::new(storage.clone());
        store.save(&sample(Role::Seller)).unwrap();
        assert_eq!(storage.len(), 4);
        store.clear();
        assert!(storage.is_empty());
        assert!(store.current().is_none());
    }

    #[test]
    fn empty_token_is_not_a_session() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "").unwrap();
        let store = SessionStore::new(storage);
        assert!(!store.is_authenticated());
    }

    /// Accepts writes until `limit` keys are stored.
    struct FullStorage {
        inner: MemoryStorage,
        limit: usize,
    }

    impl KeyValueStore for FullStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            if self.inner.len() >= self.limit {
                return Err(format!("Failed to store {}", key));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) {
            self.inner.remove(key);
        }
    }

    #[test]
    fn failed_save_leaves_no_token() {
        let inner = MemoryStorage::new();
        let store = SessionStore::new(Rc::new(FullStorage {
            inner: inner.clone(),
            limit: 2,
        }));
        assert!(store.save(&sample(Role::Admin)).is_err());
        assert!(store.token().is_none());
        assert!(inner.is_empty());
    }

    #[test]
    fn clones_share_the_same_storage() {
        let store = SessionStore::in_memory();
        let other = store.clone();
        store.save(&sample(Role::Seller)).unwrap();
        assert_eq!(other.seller_id().as_deref(), Some("s1"));
        other.clear();
        assert!(store.token().is_none());
    }
}
