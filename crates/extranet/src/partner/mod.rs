//! Partner-facing computations: content quality, onboarding, bookings, rates,
//! performance and the admin review console.

pub mod admin;
pub mod bookings;
pub mod catalog;
pub mod content;
pub mod onboarding;
pub mod performance;
pub mod property;
pub mod rates;

pub use property::{
    HotelListing, OnboardingStatus, PropertyError, PropertyProfile, RoomCategory, StarRating,
};
