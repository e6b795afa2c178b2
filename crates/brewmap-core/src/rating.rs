//! Cosmetic star ratings shown on shop pins.
//!
//! These are random placeholders with no backing review data.

use rand::Rng;

/// Returns a uniformly random rating in `1..=5`.
#[must_use]
pub fn placeholder_rating() -> u8 {
    rand::rng().random_range(1..=5)
}

/// Canned review blurb paired with a star rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewTier {
    Great,
    Good,
    Okay,
    Bad,
    ReallyBad,
}

impl ReviewTier {
    /// Ratings above 5 clamp to [`ReviewTier::Great`]; 0 and 1 both map to
    /// [`ReviewTier::ReallyBad`].
    #[must_use]
    pub const fn from_rating(rating: u8) -> Self {
        match rating {
            5.. => ReviewTier::Great,
            4 => ReviewTier::Good,
            3 => ReviewTier::Okay,
            2 => ReviewTier::Bad,
            _ => ReviewTier::ReallyBad,
        }
    }

    #[must_use]
    pub const fn blurb(self) -> &'static str {
        match self {
            ReviewTier::Great => "Best place to grab coffee in the area!",
            ReviewTier::Good => "Service was great, but the coffee was just ok",
            ReviewTier::Okay => "Cheap, but also good enough",
            ReviewTier::Bad => "It was meh :/",
            ReviewTier::ReallyBad => "Would not recommend 👎",
        }
    }
}
