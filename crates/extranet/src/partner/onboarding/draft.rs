use super::super::content::draft_onboarding_description;
use super::super::property::{RoomCategory, StarRating};
use super::places::{Coordinates, PlaceSuggestion};
use super::progress::{compute_onboarding_progress, OnboardingProgress};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// API keys must be longer than this before a connection is attempted.
pub const MIN_API_KEY_LEN: usize = 6;
pub const DEFAULT_ROOM_TYPES: [&str; 4] = [
    "Standard",
    "Deluxe Sea View",
    "Junior Suite",
    "Presidential Suite",
];

/// Wizard cursor, always within `0..=WizardStep::LAST`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WizardStep(u8);

impl WizardStep {
    pub const FIRST: Self = Self(0);
    pub const LAST: Self = Self(6);

    pub fn new(index: u8) -> Result<Self, OnboardingError> {
        if index <= Self::LAST.0 {
            Ok(Self(index))
        } else {
            Err(OnboardingError::StepOutOfRange(index))
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub fn advance(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::LAST.0))
    }

    pub fn retreat(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    pub const fn label(self) -> &'static str {
        match self.0 {
            0 => "Hotel Basics",
            1 => "Room Details",
            2 => "Contract",
            3 => "KYC Upload",
            4 => "Channel Manager",
            5 => "Content Setup",
            _ => "Review & Submit",
        }
    }

    pub const fn is_last(self) -> bool {
        self.0 == Self::LAST.0
    }
}

impl TryFrom<u8> for WizardStep {
    type Error = OnboardingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WizardStep> for u8 {
    fn from(value: WizardStep) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelBasics {
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
    pub phone: String,
    pub email: String,
    pub star_rating: Option<StarRating>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractAcceptance {
    pub accepted: bool,
    pub signature: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycDocument {
    IdProof,
    TaxId,
    Municipal,
    Additional,
}

impl KycDocument {
    pub const fn label(self) -> &'static str {
        match self {
            Self::IdProof => "Proof of Identity",
            Self::TaxId => "Tax ID / VAT Registration",
            Self::Municipal => "Municipal Licence",
            Self::Additional => "Additional Documents",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KycUploads {
    pub id_proof: bool,
    pub tax_id: bool,
    pub municipal: bool,
    pub additional: bool,
}

impl KycUploads {
    pub fn mark_uploaded(&mut self, document: KycDocument) {
        match document {
            KycDocument::IdProof => self.id_proof = true,
            KycDocument::TaxId => self.tax_id = true,
            KycDocument::Municipal => self.municipal = true,
            KycDocument::Additional => self.additional = true,
        }
    }

    pub const fn any_uploaded(&self) -> bool {
        self.id_proof || self.tax_id || self.municipal || self.additional
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelManagerLink {
    pub provider: String,
    pub api_key: String,
    pub connected: bool,
}

impl ChannelManagerLink {
    pub fn connect(&mut self) -> Result<(), OnboardingError> {
        if self.api_key.chars().count() < MIN_API_KEY_LEN {
            return Err(OnboardingError::ApiKeyTooShort);
        }
        self.connected = true;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentDraft {
    pub description: String,
    pub amenities: BTreeSet<String>,
    pub photos: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomField {
    Count,
    BaseRate,
}

/// Everything the onboarding wizard has collected so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingDraft {
    #[serde(default)]
    pub step: WizardStep,
    #[serde(default)]
    pub hotel_basics: HotelBasics,
    #[serde(default = "default_rooms")]
    pub rooms: Vec<RoomCategory>,
    #[serde(default)]
    pub contract: ContractAcceptance,
    #[serde(default)]
    pub kyc: KycUploads,
    #[serde(default)]
    pub channel_manager: ChannelManagerLink,
    #[serde(default)]
    pub content: ContentDraft,
}

fn default_rooms() -> Vec<RoomCategory> {
    DEFAULT_ROOM_TYPES
        .iter()
        .map(|room_type| RoomCategory::new(*room_type, 0, 0))
        .collect()
}

impl Default for OnboardingDraft {
    fn default() -> Self {
        Self {
            step: WizardStep::FIRST,
            hotel_basics: HotelBasics::default(),
            rooms: default_rooms(),
            contract: ContractAcceptance::default(),
            kyc: KycUploads::default(),
            channel_manager: ChannelManagerLink::default(),
            content: ContentDraft::default(),
        }
    }
}

impl OnboardingDraft {
    pub fn progress(&self) -> OnboardingProgress {
        OnboardingProgress {
            basics_filled: !self.hotel_basics.name.is_empty()
                && !self.hotel_basics.address.is_empty(),
            rooms_configured: self.rooms.iter().any(|room| room.count > 0),
            contract_accepted: self.contract.accepted,
            kyc_submitted: self.kyc.any_uploaded(),
            channel_manager_connected: self.channel_manager.connected,
            description_present: !self.content.description.is_empty(),
            amenities_selected: !self.content.amenities.is_empty(),
        }
    }

    pub fn completion_pct(&self) -> u8 {
        compute_onboarding_progress(&self.progress())
    }

    pub fn next_step(&mut self) -> WizardStep {
        self.step = self.step.advance();
        self.step
    }

    pub fn previous_step(&mut self) -> WizardStep {
        self.step = self.step.retreat();
        self.step
    }

    /// Negative input is clamped to zero, mirroring the numeric form fields.
    pub fn update_room(
        &mut self,
        index: usize,
        field: RoomField,
        value: i64,
    ) -> Result<&RoomCategory, OnboardingError> {
        let room = self
            .rooms
            .get_mut(index)
            .ok_or(OnboardingError::RoomIndexOutOfRange(index))?;
        let value = u32::try_from(value.max(0)).unwrap_or(u32::MAX);
        match field {
            RoomField::Count => room.count = value,
            RoomField::BaseRate => room.base_rate = value,
        }
        Ok(room)
    }

    pub fn apply_place(&mut self, place: &PlaceSuggestion) {
        self.hotel_basics.name = place.name.clone();
        self.hotel_basics.address = place.address.clone();
        self.hotel_basics.phone = place.phone.clone();
        self.hotel_basics.coordinates = place.coordinates;
    }

    pub fn generate_description(&mut self) -> &str {
        self.content.description = draft_onboarding_description(
            &self.hotel_basics.name,
            self.hotel_basics.star_rating,
            &self.hotel_basics.address,
            &self.content.amenities,
        );
        &self.content.description
    }

    pub fn submit(&self, serial: u16) -> Result<String, OnboardingError> {
        issue_property_id(&self.hotel_basics.name, serial)
    }
}

/// `SH-<first three letters>-<serial>`, falling back to `HTL` for unnamed hotels.
pub fn issue_property_id(name: &str, serial: u16) -> Result<String, OnboardingError> {
    if !(100..=999).contains(&serial) {
        return Err(OnboardingError::SerialOutOfRange(serial));
    }

    let prefix: String = if name.trim().is_empty() {
        "HTL".to_string()
    } else {
        name.trim().chars().take(3).collect::<String>().to_uppercase()
    };

    Ok(format!("SH-{prefix}-{serial}"))
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OnboardingError {
    #[error("wizard step {0} is past the review step")]
    StepOutOfRange(u8),
    #[error("no room at position {0}")]
    RoomIndexOutOfRange(usize),
    #[error("API key must be longer than 5 characters")]
    ApiKeyTooShort,
    #[error("property serial {0} must be a three digit number")]
    SerialOutOfRange(u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wizard_step_clamps_at_both_ends() {
        let mut draft = OnboardingDraft::default();
        assert_eq!(draft.previous_step(), WizardStep::FIRST);

        for _ in 0..10 {
            draft.next_step();
        }
        assert_eq!(draft.step, WizardStep::LAST);
        assert!(draft.step.is_last());
        assert_eq!(draft.step.label(), "Review & Submit");
        assert_eq!(draft.previous_step().label(), "Content Setup");
    }

    #[test]
    fn wizard_step_rejects_out_of_range_payloads() {
        assert_eq!(WizardStep::new(7), Err(OnboardingError::StepOutOfRange(7)));
        let parsed: Result<OnboardingDraft, _> = serde_json::from_str(r#"{"step": 9}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn sparse_draft_fills_missing_sections_with_defaults() {
        let draft: OnboardingDraft = serde_json::from_str(
            r#"{"hotel_basics":{"name":"Marina Bay Resort","address":"Corso Italia 28"},
                "channel_manager":{"api_key":"sk-live-123"},
                "content":{"amenities":["WiFi"]}}"#,
        )
        .expect("partial draft parses");

        assert_eq!(draft.step, WizardStep::FIRST);
        assert_eq!(draft.hotel_basics.coordinates, Coordinates::default());
        assert!(draft.hotel_basics.star_rating.is_none());
        assert!(!draft.channel_manager.connected);
        assert_eq!(draft.rooms.len(), DEFAULT_ROOM_TYPES.len());
        assert_eq!(draft.completion_pct(), 30);
        assert_eq!(draft.submit(100).as_deref(), Ok("SH-MAR-100"));
    }

    #[test]
    fn fresh_draft_has_default_rooms_and_zero_progress() {
        let draft = OnboardingDraft::default();
        assert_eq!(draft.rooms.len(), 4);
        assert_eq!(draft.completion_pct(), 0);
    }

    #[test]
    fn progress_follows_filled_sections() {
        let mut draft = OnboardingDraft::default();
        draft.hotel_basics.name = "Hotel Continental".to_string();
        assert_eq!(draft.completion_pct(), 0, "address still missing");

        draft.hotel_basics.address = "Via Balbi 33, Genoa".to_string();
        draft
            .update_room(0, RoomField::Count, 12)
            .expect("standard room exists");
        draft.kyc.mark_uploaded(KycDocument::TaxId);
        assert_eq!(draft.completion_pct(), 45);

        draft.contract.accepted = true;
        draft.channel_manager.api_key = "sk-live-123".to_string();
        draft.channel_manager.connect().expect("key long enough");
        draft.content.amenities.insert("WiFi".to_string());
        draft.generate_description();
        assert_eq!(draft.completion_pct(), 100);
    }

    #[test]
    fn update_room_clamps_negative_values() {
        let mut draft = OnboardingDraft::default();
        let room = draft
            .update_room(1, RoomField::BaseRate, -40)
            .expect("room exists");
        assert_eq!(room.base_rate, 0);
        assert_eq!(
            draft.update_room(9, RoomField::Count, 1).map(|room| room.count),
            Err(OnboardingError::RoomIndexOutOfRange(9))
        );
    }

    #[test]
    fn channel_manager_requires_long_key() {
        let mut link = ChannelManagerLink {
            provider: "SiteMinder".to_string(),
            api_key: "12345".to_string(),
            connected: false,
        };
        assert_eq!(link.connect(), Err(OnboardingError::ApiKeyTooShort));
        assert!(!link.connected);

        link.api_key.push('6');
        assert!(link.connect().is_ok());
        assert!(link.connected);
    }

    #[test]
    fn apply_place_fills_basics() {
        let mut draft = OnboardingDraft::default();
        let place = PlaceSuggestion {
            name: "Marina Bay Resort".to_string(),
            address: "Corso Italia 28, Genoa, Italy".to_string(),
            coordinates: Coordinates { lat: 44.41, lng: 8.93 },
            phone: "+39 010 2612641".to_string(),
        };
        draft.apply_place(&place);

        assert_eq!(draft.hotel_basics.name, place.name);
        assert_eq!(draft.hotel_basics.coordinates, place.coordinates);
        assert!(draft.progress().basics_filled);
    }

    #[test]
    fn property_ids_use_name_prefix() {
        assert_eq!(
            issue_property_id("Marina Bay Resort", 417).as_deref(),
            Ok("SH-MAR-417")
        );
        assert_eq!(issue_property_id("", 100).as_deref(), Ok("SH-HTL-100"));
        assert_eq!(
            issue_property_id("Hotel", 42),
            Err(OnboardingError::SerialOutOfRange(42))
        );
    }
}
