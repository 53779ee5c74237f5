//! Recommendation blending over the fixture catalog.

use std::collections::HashSet;

use bookxchange::application::recommendation::{
    match_by_content, random_listings, recommend, recommend_similar, Blender,
};
use bookxchange::domain::{Genre, ListingId};
use bookxchange::testkit::domain::{catalog, ids, preference, sample_preference};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn unique(listing_ids: &[&str]) -> bool {
    let set: HashSet<_> = listing_ids.iter().collect();
    set.len() == listing_ids.len()
}

#[test]
fn default_blend_runs_content_then_interaction() {
    assert_eq!(Blender::default().matcher_names(), vec!["content", "interaction"]);
}

#[test]
fn content_matches_never_include_the_excluded_listing() {
    let books = catalog();
    let excluded = ListingId::from("f1");
    for limit in 0..=books.len() {
        let picks = match_by_content(&books, &sample_preference(), Some(&excluded), limit);
        assert!(picks.len() <= limit);
        assert!(picks.iter().all(|b| b.id() != &excluded));
    }
}

#[test]
fn recommend_returns_exactly_the_available_count() {
    let books = catalog();
    let excluded = ListingId::from("m1");
    let mut rng = StdRng::seed_from_u64(3);

    for limit in 0..=books.len() + 3 {
        let picks = recommend(&books, &sample_preference(), Some(&excluded), limit, &mut rng);
        let expected = limit.min(books.len() - 1);
        assert_eq!(picks.len(), expected, "limit {limit}");

        let picked = ids(&picks);
        assert!(unique(&picked), "duplicates for limit {limit}: {picked:?}");
        assert!(!picked.contains(&"m1"));
    }
}

#[test]
fn recommend_is_deterministic_for_a_seed() {
    let books = catalog();
    let pref = preference(&[Genre::Poetry], &["m1"], &[]);

    let first = recommend(&books, &pref, None, 6, &mut StdRng::seed_from_u64(21));
    let second = recommend(&books, &pref, None, 6, &mut StdRng::seed_from_u64(21));
    assert_eq!(ids(&first), ids(&second));
}

#[test]
fn content_picks_lead_the_blend() {
    let books = catalog();
    let pref = preference(&[Genre::History], &[], &[]);
    let picks = recommend(&books, &pref, None, 4, &mut StdRng::seed_from_u64(5));
    assert_eq!(picks[0].id().as_str(), "h1");
}

#[test]
fn interaction_surfaces_other_books_by_the_same_author() {
    let books = catalog();
    // Viewing f1 (Austen) qualifies f2 and r1; content has nothing to add.
    let pref = preference(&[], &["f1"], &[]);
    let picks = recommend(&books, &pref, None, 4, &mut StdRng::seed_from_u64(9));
    let picked = ids(&picks);
    assert_eq!(&picked[..2], &["f2", "r1"]);
}

#[test]
fn similar_rows_favor_the_anchor_genre() {
    let books = catalog();
    let anchor = ListingId::from("s1");
    let picks = recommend_similar(
        &books,
        Some(&anchor),
        &Genre::ScienceFiction,
        &preference(&[Genre::Romance], &[], &[]),
        4,
        &mut StdRng::seed_from_u64(1),
    );

    let picked = ids(&picks);
    assert_eq!(picked.len(), 4);
    assert!(!picked.contains(&"s1"));
    assert!(picked[..2].contains(&"s2"));
}

#[test]
fn random_sample_never_repeats() {
    let books = catalog();
    let mut rng = StdRng::seed_from_u64(13);
    for count in [0, 1, 5, 12, 20] {
        let picks = random_listings(&books, count, &mut rng);
        assert_eq!(picks.len(), count.min(books.len()));
        assert!(unique(&ids(&picks)));
    }
}
