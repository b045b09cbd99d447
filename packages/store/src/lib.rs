pub mod kv;
pub mod token;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use kv::KeyValueStore;
pub use token::{PreferenceStore, TokenStore, LANGUAGE_KEY, TOKEN_KEY};
