//! Partner onboarding: wizard state, completion tracking and place lookup.

mod draft;
mod places;
mod progress;

pub use draft::{
    issue_property_id, ChannelManagerLink, ContentDraft, ContractAcceptance, HotelBasics,
    KycDocument, KycUploads, OnboardingDraft, OnboardingError, RoomField, WizardStep,
    DEFAULT_ROOM_TYPES, MIN_API_KEY_LEN,
};
pub use places::{suggest_places, Coordinates, PlaceSuggestion, MIN_QUERY_CHARS};
pub use progress::{
    compute_onboarding_progress, OnboardingMilestone, OnboardingProgress, MAX_PROGRESS,
};
