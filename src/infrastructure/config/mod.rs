//! Infrastructure configuration modules.

pub mod logging;
pub mod recommendation;
pub mod settings;
pub mod store;
