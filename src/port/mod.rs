//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! Inbound ports are extension points the application drives itself;
//! outbound ports are the external collaborators it is handed.
//!
//! # Available Ports
//!
//! - [`inbound::recommendation::CandidateMatcher`] - Recommendation candidate sources
//! - [`outbound::store::DocumentStore`] - Hosted document database
//! - [`outbound::auth::AuthProvider`] - Signed-in user lookup

pub mod inbound;
pub mod outbound;
