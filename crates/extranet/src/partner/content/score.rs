use super::super::property::PropertyProfile;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const IDENTITY_POINTS: u8 = 20;
pub const PHOTO_THRESHOLD: usize = 10;
pub const PHOTO_THRESHOLD_POINTS: u8 = 30;
pub const POINTS_PER_PHOTO: u8 = 3;
pub const DESCRIPTION_POINTS: u8 = 10;
pub const AMENITY_THRESHOLD: usize = 5;
pub const AMENITY_THRESHOLD_POINTS: u8 = 20;
pub const POINTS_PER_AMENITY: u8 = 4;
/// Stand-in for the verified photo tag signal, which has no input yet.
pub const ENGAGEMENT_BONUS: u8 = 20;
/// Score at which the content page shows the premium badge.
pub const PREMIUM_THRESHOLD: u8 = 80;
pub const MAX_CONTENT_SCORE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentFactor {
    Identity,
    Photos,
    Description,
    Amenities,
    Engagement,
}

impl ContentFactor {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Identity,
            Self::Photos,
            Self::Description,
            Self::Amenities,
            Self::Engagement,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Identity => "Name & Address",
            Self::Photos => "Photos",
            Self::Description => "Description",
            Self::Amenities => "Amenities",
            Self::Engagement => "Engagement Bonus",
        }
    }

    pub const fn max_points(self) -> u8 {
        match self {
            Self::Identity => IDENTITY_POINTS,
            Self::Photos => PHOTO_THRESHOLD_POINTS,
            Self::Description => DESCRIPTION_POINTS,
            Self::Amenities => AMENITY_THRESHOLD_POINTS,
            Self::Engagement => ENGAGEMENT_BONUS,
        }
    }
}

/// One factor's share of the content score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentComponent {
    pub factor: ContentFactor,
    pub points: u8,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentScoreCard {
    pub total: u8,
    pub premium: bool,
    pub components: Vec<ContentComponent>,
}

impl ContentScoreCard {
    pub fn component(&self, factor: ContentFactor) -> Option<&ContentComponent> {
        self.components
            .iter()
            .find(|component| component.factor == factor)
    }
}

/// The inputs the score actually reads, detached from where they were edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSnapshot<'a> {
    pub identity_complete: bool,
    pub photo_count: usize,
    pub description: &'a str,
    pub amenity_count: usize,
}

impl<'a> ContentSnapshot<'a> {
    pub fn from_profile(profile: &'a PropertyProfile) -> Self {
        Self {
            identity_complete: profile.has_identity(),
            photo_count: profile.photos.len(),
            description: &profile.description,
            amenity_count: profile.amenities.len(),
        }
    }
}

/// Scores a profile whose photos, description and amenities are being edited
/// separately from the stored listing.
pub fn compute_content_score(
    profile: &PropertyProfile,
    photos: &[String],
    description: &str,
    amenities: &BTreeSet<String>,
) -> u8 {
    score_breakdown(&ContentSnapshot {
        identity_complete: profile.has_identity(),
        photo_count: photos.len(),
        description,
        amenity_count: amenities.len(),
    })
    .total
}

pub fn score_profile(profile: &PropertyProfile) -> ContentScoreCard {
    score_breakdown(&ContentSnapshot::from_profile(profile))
}

pub fn score_breakdown(snapshot: &ContentSnapshot<'_>) -> ContentScoreCard {
    let mut components = Vec::with_capacity(5);

    let identity_points = if snapshot.identity_complete {
        IDENTITY_POINTS
    } else {
        0
    };
    components.push(ContentComponent {
        factor: ContentFactor::Identity,
        points: identity_points,
        notes: if identity_points > 0 {
            "name and address on file".to_string()
        } else {
            "name or address missing".to_string()
        },
    });

    let photo_points = stepped_points(
        snapshot.photo_count,
        PHOTO_THRESHOLD,
        PHOTO_THRESHOLD_POINTS,
        POINTS_PER_PHOTO,
    );
    components.push(ContentComponent {
        factor: ContentFactor::Photos,
        points: photo_points,
        notes: if snapshot.photo_count >= PHOTO_THRESHOLD {
            format!("{} photos uploaded", snapshot.photo_count)
        } else {
            format!(
                "{} of {} photos uploaded",
                snapshot.photo_count, PHOTO_THRESHOLD
            )
        },
    });

    let description_points = if snapshot.description.is_empty() {
        0
    } else {
        DESCRIPTION_POINTS
    };
    components.push(ContentComponent {
        factor: ContentFactor::Description,
        points: description_points,
        notes: if description_points > 0 {
            "description provided".to_string()
        } else {
            "description missing".to_string()
        },
    });

    let amenity_points = stepped_points(
        snapshot.amenity_count,
        AMENITY_THRESHOLD,
        AMENITY_THRESHOLD_POINTS,
        POINTS_PER_AMENITY,
    );
    components.push(ContentComponent {
        factor: ContentFactor::Amenities,
        points: amenity_points,
        notes: format!("{} amenities selected", snapshot.amenity_count),
    });

    components.push(ContentComponent {
        factor: ContentFactor::Engagement,
        points: ENGAGEMENT_BONUS,
        notes: "fixed engagement bonus".to_string(),
    });

    let raw: u32 = components
        .iter()
        .map(|component| u32::from(component.points))
        .sum();
    let total = raw.min(u32::from(MAX_CONTENT_SCORE)) as u8;

    ContentScoreCard {
        total,
        premium: total >= PREMIUM_THRESHOLD,
        components,
    }
}

/// Flat award at or above `threshold`, otherwise a per-item rate below it.
fn stepped_points(count: usize, threshold: usize, threshold_points: u8, per_item: u8) -> u8 {
    if count >= threshold {
        threshold_points
    } else {
        // count < threshold keeps this well inside u8
        (count as u8).saturating_mul(per_item)
    }
}
