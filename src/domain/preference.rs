//! What we know about a reader's taste.

use serde::{Deserialize, Serialize};

use super::id::ListingId;
use super::listing::Genre;

/// A reader's genre preferences and interaction history.
///
/// `favorite_genres` is ordered most-preferred first. Duplicates anywhere are
/// harmless.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreference {
    #[serde(default)]
    pub favorite_genres: Vec<Genre>,
    #[serde(default)]
    pub recently_viewed: Vec<ListingId>,
    #[serde(default)]
    pub purchase_history: Vec<ListingId>,
}

impl UserPreference {
    /// Preference used when the store has nothing for a user: Fiction only,
    /// no history.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            favorite_genres: vec![Genre::Fiction],
            recently_viewed: Vec::new(),
            purchase_history: Vec::new(),
        }
    }

    /// Most-preferred genre, if any.
    #[must_use]
    pub fn leading_genre(&self) -> Option<&Genre> {
        self.favorite_genres.first()
    }

    /// Copy of this preference with `genre` moved to the front.
    #[must_use]
    pub fn with_leading_genre(&self, genre: &Genre) -> Self {
        let mut favorite_genres = Vec::with_capacity(self.favorite_genres.len() + 1);
        favorite_genres.push(genre.clone());
        favorite_genres.extend(self.favorite_genres.iter().filter(|g| *g != genre).cloned());
        Self {
            favorite_genres,
            ..self.clone()
        }
    }

    /// Purchases followed by recent views.
    pub fn interactions(&self) -> impl Iterator<Item = &ListingId> {
        self.purchase_history.iter().chain(self.recently_viewed.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_fiction_only_with_empty_history() {
        let pref = UserPreference::fallback();
        assert_eq!(pref.favorite_genres, vec![Genre::Fiction]);
        assert!(pref.recently_viewed.is_empty());
        assert!(pref.purchase_history.is_empty());
    }

    #[test]
    fn leading_genre_moves_target_to_front_without_duplicating() {
        let pref = UserPreference {
            favorite_genres: vec![Genre::Fiction, Genre::Mystery, Genre::Poetry],
            ..Default::default()
        };
        let biased = pref.with_leading_genre(&Genre::Mystery);
        assert_eq!(
            biased.favorite_genres,
            vec![Genre::Mystery, Genre::Fiction, Genre::Poetry]
        );
    }

    #[test]
    fn leading_genre_adds_unlisted_target() {
        let pref = UserPreference::fallback();
        let biased = pref.with_leading_genre(&Genre::History);
        assert_eq!(biased.favorite_genres, vec![Genre::History, Genre::Fiction]);
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let pref: UserPreference = serde_json::from_str(r#"{"favoriteGenres":["Romance"]}"#).unwrap();
        assert_eq!(pref.favorite_genres, vec![Genre::Romance]);
        assert!(pref.interactions().next().is_none());
    }
}
