//! # Persisted client state
//!
//! | Struct | Key | Value |
//! |--------|-----|-------|
//! | [`TokenStore`] | [`TOKEN_KEY`] = `"token"` | The opaque bearer token from the last login or registration. |
//! | [`PreferenceStore`] | [`LANGUAGE_KEY`] = `"language"` | The UI language code (`"en"`, `"fr"`, `"ar"`). |
//!
//! Both wrap any [`KeyValueStore`] so the same code runs against
//! `localStorage` in the browser and [`crate::MemoryStore`] in tests.

use crate::kv::KeyValueStore;

/// Key the bearer token is stored under.
pub const TOKEN_KEY: &str = "token";

/// Key the UI language is stored under.
pub const LANGUAGE_KEY: &str = "language";

/// Bearer token persistence.
#[derive(Clone, Debug, Default)]
pub struct TokenStore<S> {
    store: S,
}

impl<S: KeyValueStore> TokenStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored token. Blank values count as absent.
    pub fn load(&self) -> Option<String> {
        self.store
            .get(TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    pub fn save(&self, token: &str) {
        self.store.set(TOKEN_KEY, token);
    }

    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
    }
}

/// UI preference persistence.
#[derive(Clone, Debug, Default)]
pub struct PreferenceStore<S> {
    store: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn language(&self) -> Option<String> {
        self.store.get(LANGUAGE_KEY)
    }

    pub fn set_language(&self, code: &str) {
        self.store.set(LANGUAGE_KEY, code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_token_roundtrip() {
        let store = MemoryStore::new();
        let tokens = TokenStore::new(store.clone());

        assert_eq!(tokens.load(), None);
        tokens.save("t1");
        assert_eq!(tokens.load().as_deref(), Some("t1"));
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("t1"));

        tokens.clear();
        assert_eq!(tokens.load(), None);
        assert_eq!(store.get(TOKEN_KEY), None);
    }

    #[test]
    fn test_blank_token_is_absent() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "  ");
        assert_eq!(TokenStore::new(store).load(), None);
    }

    #[test]
    fn test_language_survives_token_clear() {
        let store = MemoryStore::new();
        let tokens = TokenStore::new(store.clone());
        let preferences = PreferenceStore::new(store);

        tokens.save("t1");
        preferences.set_language("ar");
        tokens.clear();

        assert_eq!(preferences.language().as_deref(), Some("ar"));
    }
}
