//! In-process adapters for the store and auth ports.

mod auth;
mod store;

pub use auth::StaticAuth;
pub use store::InMemoryStore;
