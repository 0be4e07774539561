use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    #[serde(rename = "Checked Out")]
    CheckedOut,
}

impl BookingStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Confirmed, Self::Cancelled, Self::CheckedOut]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Cancelled => "Cancelled",
            Self::CheckedOut => "Checked Out",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = UnknownBookingStatus;

    /// Exact, case-sensitive match on the display label.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|status| status.label() == value)
            .ok_or_else(|| UnknownBookingStatus(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a booking status")]
pub struct UnknownBookingStatus(pub String);

/// A reservation as listed on the bookings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: String,
    pub customer_name: String,
    pub room_type: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub price: u32,
    pub status: BookingStatus,
}

impl BookingRecord {
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parsing_is_case_sensitive() {
        assert_eq!("Checked Out".parse::<BookingStatus>(), Ok(BookingStatus::CheckedOut));
        assert_eq!(
            "cancelled".parse::<BookingStatus>(),
            Err(UnknownBookingStatus("cancelled".to_string()))
        );
    }

    #[test]
    fn status_serializes_with_display_label() {
        let json = serde_json::to_string(&BookingStatus::CheckedOut).expect("serializes");
        assert_eq!(json, "\"Checked Out\"");
    }
}
