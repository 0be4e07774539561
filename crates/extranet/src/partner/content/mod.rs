//! Listing content quality: the bounded content score and description drafts.

mod description;
mod score;

pub use description::{draft_listing_description, draft_onboarding_description};
pub use score::{
    compute_content_score, score_breakdown, score_profile, ContentComponent, ContentFactor,
    ContentScoreCard, ContentSnapshot, AMENITY_THRESHOLD, AMENITY_THRESHOLD_POINTS,
    DESCRIPTION_POINTS, ENGAGEMENT_BONUS, IDENTITY_POINTS, MAX_CONTENT_SCORE,
    PHOTO_THRESHOLD, PHOTO_THRESHOLD_POINTS, POINTS_PER_AMENITY, POINTS_PER_PHOTO,
    PREMIUM_THRESHOLD,
};

/// Amenities offered as checkboxes on the content and onboarding forms.
pub const AMENITY_CATALOG: [&str; 12] = [
    "WiFi",
    "Pool",
    "Spa",
    "Restaurant",
    "Bar",
    "Gym",
    "Concierge",
    "Room Service",
    "Parking",
    "Business Center",
    "Laundry",
    "Airport Shuttle",
];
