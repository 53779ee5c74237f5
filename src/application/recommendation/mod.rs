//! Book recommendations.
//!
//! Two [`CandidateMatcher`](crate::port::inbound::recommendation::CandidateMatcher)
//! implementations feed the [`blender::Blender`]:
//!
//! - [`content`]: listings in the reader's favorite genres
//! - [`interaction`]: other books by authors the reader bought or viewed
//!
//! Randomness enters only through backfill ([`sample`]); pass a seeded
//! `StdRng` for reproducible output.

pub mod blender;
pub mod content;
pub mod interaction;
pub mod sample;

pub use blender::{
    recommend, recommend_personalized, recommend_similar, Blender, DEFAULT_PERSONALIZED_LIMIT,
    DEFAULT_SIMILAR_LIMIT,
};
pub use content::{match_by_content, ContentMatcher};
pub use interaction::{match_by_interaction, InteractionMatcher};
pub use sample::random_listings;
