use rand::seq::IndexedRandom;
use rand::Rng;

use crate::catalogue::{ThumbnailVariant, TopicRecord};

/// Picks one topic with uniform probability.
///
/// Returns `None` only when `topics` is empty, which a validated `Catalogue`
/// never is.
pub fn select_topic<'a, R: Rng + ?Sized>(
    topics: &'a [TopicRecord],
    rng: &mut R,
) -> Option<&'a TopicRecord> {
    topics.choose(rng)
}

/// Picks one thumbnail styling option with uniform probability.
pub fn select_variant<'a, R: Rng + ?Sized>(
    variants: &'a [ThumbnailVariant],
    rng: &mut R,
) -> Option<&'a ThumbnailVariant> {
    variants.choose(rng)
}
