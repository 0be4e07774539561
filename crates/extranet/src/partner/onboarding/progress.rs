use serde::{Deserialize, Serialize};

pub const MAX_PROGRESS: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingMilestone {
    HotelBasics,
    RoomInventory,
    ContractAccepted,
    KycDocument,
    ChannelManager,
    Description,
    Amenities,
}

impl OnboardingMilestone {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::HotelBasics,
            Self::RoomInventory,
            Self::ContractAccepted,
            Self::KycDocument,
            Self::ChannelManager,
            Self::Description,
            Self::Amenities,
        ]
    }

    pub const fn weight(self) -> u8 {
        match self {
            Self::ChannelManager => 10,
            Self::HotelBasics
            | Self::RoomInventory
            | Self::ContractAccepted
            | Self::KycDocument
            | Self::Description
            | Self::Amenities => 15,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HotelBasics => "Hotel name and address",
            Self::RoomInventory => "At least one room configured",
            Self::ContractAccepted => "Partner contract accepted",
            Self::KycDocument => "KYC document uploaded",
            Self::ChannelManager => "Channel manager connected",
            Self::Description => "Property description",
            Self::Amenities => "Amenities selected",
        }
    }
}

/// Completion flags for the seven onboarding milestones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingProgress {
    pub basics_filled: bool,
    pub rooms_configured: bool,
    pub contract_accepted: bool,
    pub kyc_submitted: bool,
    pub channel_manager_connected: bool,
    pub description_present: bool,
    pub amenities_selected: bool,
}

impl OnboardingProgress {
    pub fn all_complete() -> Self {
        Self {
            basics_filled: true,
            rooms_configured: true,
            contract_accepted: true,
            kyc_submitted: true,
            channel_manager_connected: true,
            description_present: true,
            amenities_selected: true,
        }
    }

    pub const fn is_met(&self, milestone: OnboardingMilestone) -> bool {
        match milestone {
            OnboardingMilestone::HotelBasics => self.basics_filled,
            OnboardingMilestone::RoomInventory => self.rooms_configured,
            OnboardingMilestone::ContractAccepted => self.contract_accepted,
            OnboardingMilestone::KycDocument => self.kyc_submitted,
            OnboardingMilestone::ChannelManager => self.channel_manager_connected,
            OnboardingMilestone::Description => self.description_present,
            OnboardingMilestone::Amenities => self.amenities_selected,
        }
    }

    /// Unmet milestones in wizard order.
    pub fn pending(&self) -> Vec<OnboardingMilestone> {
        OnboardingMilestone::ordered()
            .into_iter()
            .filter(|milestone| !self.is_met(*milestone))
            .collect()
    }
}

pub fn compute_onboarding_progress(progress: &OnboardingProgress) -> u8 {
    let raw: u32 = OnboardingMilestone::ordered()
        .into_iter()
        .filter(|milestone| progress.is_met(*milestone))
        .map(|milestone| u32::from(milestone.weight()))
        .sum();

    raw.min(u32::from(MAX_PROGRESS)) as u8
}
