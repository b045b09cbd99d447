//! # Key/value persistence trait
//!
//! The portal persists exactly two things on the client: the bearer token and
//! the chosen UI language. Both are short strings under fixed keys, so the
//! storage abstraction is a synchronous string map, mirroring the browser's
//! `localStorage` API.
//!
//! Implementations live in sibling modules ([`crate::memory`] and, on the web,
//! [`crate::local`]). Writes are best effort: a store that cannot persist
//! (private browsing, quota exceeded) logs and carries on.

/// Synchronous string map that outlives the page.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
