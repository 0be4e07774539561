use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Hotel classification, always within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StarRating(u8);

impl StarRating {
    pub const ONE: Self = Self(1);
    pub const TWO: Self = Self(2);
    pub const THREE: Self = Self(3);
    pub const FOUR: Self = Self(4);
    pub const FIVE: Self = Self(5);

    pub fn new(value: u8) -> Result<Self, PropertyError> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PropertyError::StarRatingOutOfRange(value))
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for StarRating {
    type Error = PropertyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StarRating> for u8 {
    fn from(value: StarRating) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomCategory {
    #[serde(rename = "type")]
    pub room_type: String,
    pub count: u32,
    pub base_rate: u32,
}

impl RoomCategory {
    pub fn new(room_type: impl Into<String>, count: u32, base_rate: u32) -> Self {
        Self {
            room_type: room_type.into(),
            count,
            base_rate,
        }
    }
}

/// Snapshot of a partner's listing as the content and rates views see it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyProfile {
    pub name: String,
    pub address: String,
    pub star_rating: StarRating,
    pub city: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amenities: BTreeSet<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub rooms: Vec<RoomCategory>,
}

impl PropertyProfile {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        star_rating: StarRating,
        city: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            star_rating,
            city: city.into(),
            description: String::new(),
            amenities: BTreeSet::new(),
            photos: Vec::new(),
            rooms: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_amenities<I, S>(mut self, amenities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.amenities = amenities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_photos<I, S>(mut self, photos: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.photos = photos.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rooms(mut self, rooms: Vec<RoomCategory>) -> Result<Self, PropertyError> {
        ensure_unique_room_types(&rooms)?;
        self.rooms = rooms;
        Ok(self)
    }

    /// Re-checks invariants on a snapshot that arrived through deserialization.
    pub fn validate(&self) -> Result<(), PropertyError> {
        ensure_unique_room_types(&self.rooms)
    }

    pub fn room(&self, room_type: &str) -> Option<&RoomCategory> {
        self.rooms.iter().find(|room| room.room_type == room_type)
    }

    pub fn has_identity(&self) -> bool {
        !self.name.is_empty() && !self.address.is_empty()
    }
}

fn ensure_unique_room_types(rooms: &[RoomCategory]) -> Result<(), PropertyError> {
    let mut seen = HashSet::new();
    for room in rooms {
        if !seen.insert(room.room_type.as_str()) {
            return Err(PropertyError::DuplicateRoomType(room.room_type.clone()));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStatus {
    InProgress,
    PendingApproval,
    Completed,
    Rejected,
}

impl OnboardingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
            Self::PendingApproval => "Pending Approval",
            Self::Completed => "Completed",
            Self::Rejected => "Rejected",
        }
    }
}

/// A property as the admin console tracks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelListing {
    pub id: String,
    pub property_id: String,
    pub onboarding_status: OnboardingStatus,
    pub channel_manager_connected: bool,
    pub content_score: u8,
    pub profile: PropertyProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    #[error("star rating must be between 1 and 5, got {0}")]
    StarRatingOutOfRange(u8),
    #[error("room type '{0}' is listed more than once")]
    DuplicateRoomType(String),
}
